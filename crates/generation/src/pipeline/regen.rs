//! The partial-regeneration stage.
//!
//! Pure delegation: no roster validation, no layout resolution. The
//! request carries the province/connection subset to re-roll; the work
//! system forwards it to the element builder under the usual overlay
//! discipline.

use bevy::prelude::*;

use crate::audio::{PlaySfxEvent, Sfx};
use crate::pipeline_state::PipelineState;

use super::events::{ElementsBuilt, ElementsRegenerate, RegenerateRequest};
use super::generate::ActiveMap;

/// Unit of work for an accepted regeneration request.
#[derive(Resource, Debug)]
pub(crate) struct PendingRegen {
    pub provinces: Vec<u32>,
    pub connections: Vec<u32>,
}

pub(crate) fn handle_regenerate_request(
    mut commands: Commands,
    mut events: EventReader<RegenerateRequest>,
    state: Res<State<PipelineState>>,
    mut next_state: ResMut<NextState<PipelineState>>,
    map: Option<Res<ActiveMap>>,
    mut sfx: EventWriter<PlaySfxEvent>,
) {
    let Some(request) = events.read().next().cloned() else {
        return;
    };
    events.read().for_each(drop);

    if *state.get() != PipelineState::Idle {
        debug!("regeneration requested while a run is active; rejecting");
        sfx.send(PlaySfxEvent::new(Sfx::Deny));
        return;
    }
    if map.is_none() {
        warn!("regeneration requested before any map was generated; rejecting");
        sfx.send(PlaySfxEvent::new(Sfx::Deny));
        return;
    }

    sfx.send(PlaySfxEvent::new(Sfx::Click));
    commands.insert_resource(PendingRegen {
        provinces: request.provinces,
        connections: request.connections,
    });
    next_state.set(PipelineState::Regenerating);
}

pub(crate) fn run_regen(
    mut commands: Commands,
    pending: Res<PendingRegen>,
    mut regen_events: EventWriter<ElementsRegenerate>,
) {
    regen_events.send(ElementsRegenerate {
        provinces: pending.provinces.clone(),
        connections: pending.connections.clone(),
    });
    commands.remove_resource::<PendingRegen>();
}

pub(crate) fn finish_regen(
    mut events: EventReader<ElementsBuilt>,
    mut next_state: ResMut<NextState<PipelineState>>,
) {
    if events.read().next().is_some() {
        events.read().for_each(drop);
        next_state.set(PipelineState::Idle);
    }
}
