use std::fs;
use std::path::Path;

use bevy::prelude::*;

use crate::config::LAYOUT_DIR;

use super::types::{LayoutDescriptor, LayoutError};

/// The in-memory layout catalog.
///
/// Catalog order is load order: files in sorted filename order, descriptors
/// in in-file order. Resolution is first-match over that order, so the same
/// catalog and inputs always produce the same descriptor.
#[derive(Resource, Debug, Clone)]
pub struct LayoutCatalog {
    layouts: Vec<LayoutDescriptor>,
}

impl Default for LayoutCatalog {
    fn default() -> Self {
        Self {
            layouts: builtin_layouts(),
        }
    }
}

impl LayoutCatalog {
    pub fn from_layouts(layouts: Vec<LayoutDescriptor>) -> Self {
        Self { layouts }
    }

    /// Pick the layout a generation run uses.
    ///
    /// Exact (name, players) match first; otherwise the first descriptor
    /// with a matching player count; otherwise an explicit error.
    pub fn resolve(&self, name: &str, players: usize) -> Result<&LayoutDescriptor, LayoutError> {
        self.layouts
            .iter()
            .find(|l| l.name == name && l.players == players)
            .or_else(|| self.layouts.iter().find(|l| l.players == players))
            .ok_or(LayoutError::NoMatch { players })
    }

    /// Layouts offered for the given player count, in catalog order.
    pub fn iter_for_players(&self, players: usize) -> impl Iterator<Item = &LayoutDescriptor> {
        self.layouts.iter().filter(move |l| l.players == players)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

/// Built-in descriptors used when no layout files are found, so the tool
/// works from any working directory.
fn builtin_layouts() -> Vec<LayoutDescriptor> {
    let mut layouts = Vec::new();
    for players in 2usize..=16 {
        // Compact square-ish grid: roughly 14 provinces per player.
        let width = ((players * 14) as f32).sqrt().round() as usize;
        let height = (players * 14).div_ceil(width);
        layouts.push(LayoutDescriptor::new("Sprawl", players, width, height));
    }
    for players in [4, 6, 8, 9, 12, 16] {
        let width = players * 4;
        layouts.push(LayoutDescriptor::new("Ribbon", players, width, 6));
    }
    layouts
}

/// Startup system: replaces the built-in catalog with the contents of the
/// layout directory when it holds any descriptors.
///
/// Each `.json` file holds an array of descriptors; files are merged in
/// sorted filename order. Unreadable files are skipped with a warning
/// rather than aborting startup.
pub fn load_catalog_from_disk(mut catalog: ResMut<LayoutCatalog>) {
    let loaded = read_layout_dir(Path::new(LAYOUT_DIR));
    if loaded.is_empty() {
        info!(
            "no layout files under {LAYOUT_DIR}; using {} built-in layouts",
            catalog.len()
        );
        return;
    }
    info!("loaded {} layouts from {LAYOUT_DIR}", loaded.len());
    *catalog = LayoutCatalog::from_layouts(loaded);
}

fn read_layout_dir(dir: &Path) -> Vec<LayoutDescriptor> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<_> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut layouts = Vec::new();
    for file in files {
        let contents = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(e) => {
                warn!("skipping layout file {}: {e}", file.display());
                continue;
            }
        };
        match serde_json::from_str::<Vec<LayoutDescriptor>>(&contents) {
            Ok(mut batch) => layouts.append(&mut batch),
            Err(e) => warn!("skipping layout file {}: {e}", file.display()),
        }
    }
    layouts
}
