//! The descriptive text artifact.
//!
//! A plain-text summary of the generated map: layout geometry, world
//! bounds, the team-play flag, one line per roster slot, and a terrain
//! census. Pure function of the committed state; the season plays no part.

use std::path::Path;

use generation::roster::Roster;
use generation::{world_bounds, ActiveMap};

use crate::atomic_write::atomic_write;
use crate::export_error::ExportError;

/// Render the text artifact for the given map and roster.
pub fn render_map_text(map: &ActiveMap, roster: &Roster, teamplay: bool) -> String {
    let layout = &map.layout;
    let (min, max) = world_bounds(layout);

    let mut out = String::new();
    out.push_str("-- mapforge map description\n");
    out.push_str(&format!(
        "-- layout \"{}\" ({} x {}), {} players\n",
        layout.name, layout.width, layout.height, layout.players
    ));
    out.push_str(&format!(
        "-- bounds ({}, {}) .. ({}, {})\n",
        min.x, min.y, max.x, max.y
    ));
    out.push_str(&format!(
        "-- teamplay {}\n",
        if teamplay { "on" } else { "off" }
    ));

    for (slot, entry) in roster.entries().iter().enumerate() {
        if teamplay {
            out.push_str(&format!(
                "#nation {slot} \"{}\" team {}\n",
                entry.nation.name, entry.team
            ));
        } else {
            out.push_str(&format!("#nation {slot} \"{}\"\n", entry.nation.name));
        }
    }

    let census = map.graph.terrain_census();
    let summary: Vec<String> = census
        .iter()
        .map(|(terrain, count)| format!("{} {count}", terrain.name()))
        .collect();
    out.push_str(&format!("-- terrain: {}\n", summary.join(", ")));

    let starts: Vec<String> = map
        .graph
        .start_nodes()
        .iter()
        .map(|id| id.to_string())
        .collect();
    out.push_str(&format!("-- starts: {}\n", starts.join(" ")));

    out
}

/// Write the text artifact to `path`.
pub fn write_map_text(
    path: &Path,
    map: &ActiveMap,
    roster: Option<&Roster>,
    teamplay: bool,
) -> Result<(), ExportError> {
    let roster = roster.ok_or(ExportError::NoRoster)?;
    let text = render_map_text(map, roster, teamplay);
    atomic_write(path, text.as_bytes())?;
    Ok(())
}
