//! The full-generation stage.
//!
//! Request handling runs the roster validator and the layout resolver up
//! front; the work system then produces the world graph, commits it as the
//! active map, and hands the element build to the rendering crate. The run
//! stays open (overlay up, state busy) until the builder reports back.

use bevy::prelude::*;
use xxhash_rust::xxh32::xxh32;

use crate::audio::{PlaySfxEvent, Sfx};
use crate::layouts::{LayoutCatalog, LayoutDescriptor};
use crate::nations::NationCatalog;
use crate::notifications::NotificationEvent;
use crate::pipeline_state::PipelineState;
use crate::roster::{validate_picks, Roster};
use crate::session::{Season, Session};
use crate::worldgen::{generate_world, GenArgs, WorldGraph};

use super::events::{ElementsBuilt, GenerateRequest, MapGenerated, SeasonChanged, WipeElements};
use super::framing::{compute_framing, CaptureFraming};
use super::season::SeasonSwap;

/// The committed output of the last successful generation run: the graph
/// plus the layout it was generated against. Read-only for collaborators.
#[derive(Resource, Debug, Clone)]
pub struct ActiveMap {
    pub graph: WorldGraph,
    pub layout: LayoutDescriptor,
}

/// Unit of work for an accepted generation request, consumed exactly once
/// by [`run_generation`].
#[derive(Resource, Debug)]
pub(crate) struct PendingGenerate {
    pub layout: LayoutDescriptor,
}

/// Stable seed for a generation request: same layout and roster, same map.
pub fn derive_seed(layout: &LayoutDescriptor, roster: &Roster) -> u64 {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(layout.name.as_bytes());
    for entry in roster.entries() {
        bytes.extend_from_slice(entry.nation.name.as_bytes());
        bytes.extend_from_slice(&entry.team.to_le_bytes());
    }
    let high = xxh32(&bytes, 0) as u64;
    let low = xxh32(&bytes, 1) as u64;
    (high << 32) | low
}

/// Validates and commits a generation request, then opens the run.
///
/// One request per frame; extras are dropped. Every rejection path leaves
/// the session roster exactly as it was.
#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_generate_request(
    mut commands: Commands,
    mut events: EventReader<GenerateRequest>,
    state: Res<State<PipelineState>>,
    mut next_state: ResMut<NextState<PipelineState>>,
    mut session: ResMut<Session>,
    nations: Res<NationCatalog>,
    layouts: Res<LayoutCatalog>,
    mut sfx: EventWriter<PlaySfxEvent>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let Some(request) = events.read().next().cloned() else {
        return;
    };
    events.read().for_each(drop);

    if *state.get() != PipelineState::Idle {
        debug!("generation requested while a run is active; rejecting");
        sfx.send(PlaySfxEvent::new(Sfx::Deny));
        return;
    }

    if request.picks.len() != session.player_count {
        warn!(
            "generation request carries {} picks for {} slots; rejecting",
            request.picks.len(),
            session.player_count
        );
        sfx.send(PlaySfxEvent::new(Sfx::Deny));
        return;
    }

    // Roster validator: all-or-nothing swap of the committed roster.
    let roster = match validate_picks(&request.picks, &nations, session.generic_starts) {
        Ok(roster) => roster,
        Err(err) => {
            warn!("roster rejected: {err}");
            sfx.send(PlaySfxEvent::new(Sfx::Deny));
            return;
        }
    };
    session.roster = Some(roster);
    sfx.send(PlaySfxEvent::new(Sfx::Accept));

    // Layout resolver. The roster commit above stands either way; a
    // resolution failure performs no generation side effects.
    let layout = match layouts.resolve(&request.layout_name, session.player_count) {
        Ok(layout) => layout.clone(),
        Err(err) => {
            notifications.send(NotificationEvent::warning(format!("cannot generate: {err}")));
            return;
        }
    };

    commands.insert_resource(PendingGenerate { layout });
    next_state.set(PipelineState::Generating);
}

/// The generation unit of work. Runs once per accepted request, after the
/// overlay is confirmed visible.
pub(crate) fn run_generation(
    mut commands: Commands,
    pending: Res<PendingGenerate>,
    mut session: ResMut<Session>,
    mut swap: ResMut<SeasonSwap>,
    mut framing: ResMut<CaptureFraming>,
    mut next_state: ResMut<NextState<PipelineState>>,
    mut wipe_events: EventWriter<WipeElements>,
    mut season_events: EventWriter<SeasonChanged>,
    mut map_events: EventWriter<MapGenerated>,
) {
    let layout = pending.layout.clone();
    commands.remove_resource::<PendingGenerate>();

    let Some(roster) = session.roster.clone() else {
        // The handler commits the roster before entering this state; if it
        // is gone the run cannot proceed.
        warn!("generation run without a committed roster; aborting");
        next_state.set(PipelineState::Idle);
        return;
    };

    // Stale elements go first, whether or not a map exists yet.
    wipe_events.send(WipeElements);

    // Generation always starts in the canonical season.
    session.season = Season::Summer;
    swap.just_changed = false;
    season_events.send(SeasonChanged {
        season: Season::Summer,
    });

    let seed = session
        .seed_override
        .unwrap_or_else(|| derive_seed(&layout, &roster));
    let graph = generate_world(&GenArgs {
        teamplay: session.teamplay,
        cluster_water: session.cluster_water,
        natural_starts: session.natural_starts,
        roster: &roster,
        layout: &layout,
        seed,
    });
    info!(
        "generated {} provinces / {} connections on \"{}\" (seed {seed:#x})",
        graph.nodes.len(),
        graph.connections.len(),
        layout.name
    );

    *framing = compute_framing(&layout);
    commands.insert_resource(ActiveMap { graph, layout });
    map_events.send(MapGenerated);
}

/// Closes the run once the element builder reports in.
pub(crate) fn finish_generation(
    mut events: EventReader<ElementsBuilt>,
    mut next_state: ResMut<NextState<PipelineState>>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    if events.read().next().is_some() {
        events.read().for_each(drop);
        notifications.send(NotificationEvent::positive("map generated"));
        next_state.set(PipelineState::Idle);
    }
}
