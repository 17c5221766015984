//! The season-toggle stage.
//!
//! The flip itself is an unconditional toggle on the session; the run
//! exists to hold the overlay while the renderer swaps seasonal assets.
//! [`SeasonSwap::just_changed`] is the readiness signal downstream stages
//! wait on before assuming the swap is visually committed.

use bevy::prelude::*;

use crate::audio::{PlaySfxEvent, Sfx};
use crate::pipeline_state::PipelineState;
use crate::session::Session;

use super::events::{SeasonChanged, SeasonToggleRequest};

/// Season-swap readiness. Cleared by whoever publishes a
/// [`SeasonChanged`]; set by the rendering crate once the palette swap is
/// applied.
#[derive(Resource, Debug, Default)]
pub struct SeasonSwap {
    pub just_changed: bool,
}

/// Marker: the toggle run has not yet dispatched its swap.
#[derive(Resource, Debug)]
pub(crate) struct PendingSeasonSwap;

pub(crate) fn handle_season_toggle_request(
    mut commands: Commands,
    mut events: EventReader<SeasonToggleRequest>,
    state: Res<State<PipelineState>>,
    mut next_state: ResMut<NextState<PipelineState>>,
    mut session: ResMut<Session>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.read().for_each(drop);

    if *state.get() != PipelineState::Idle {
        debug!("season toggle requested while a run is active; rejecting");
        sfx.send(PlaySfxEvent::new(Sfx::Deny));
        return;
    }

    session.season = session.season.toggled();
    sfx.send(PlaySfxEvent::new(Sfx::Click));
    commands.insert_resource(PendingSeasonSwap);
    next_state.set(PipelineState::SwappingSeason);
}

pub(crate) fn run_season_swap(
    mut commands: Commands,
    session: Res<Session>,
    mut swap: ResMut<SeasonSwap>,
    mut season_events: EventWriter<SeasonChanged>,
) {
    commands.remove_resource::<PendingSeasonSwap>();
    swap.just_changed = false;
    season_events.send(SeasonChanged {
        season: session.season,
    });
}

/// Closes the run once the renderer acknowledges the swap.
pub(crate) fn finish_season_swap(
    swap: Res<SeasonSwap>,
    mut next_state: ResMut<NextState<PipelineState>>,
) {
    if swap.just_changed {
        next_state.set(PipelineState::Idle);
    }
}
