//! Domain core of mapforge: session state, catalogs, roster validation,
//! world-graph generation, and the orchestration pipeline that sequences
//! generation, regeneration, season swaps, and (via the `export` crate)
//! the four-pass export.
//!
//! Everything other crates gate on — the pipeline state machine, the
//! request/signal events, the shared flag resources — is defined here so
//! `rendering`, `export`, and `ui` never need to depend on each other.

use bevy::prelude::*;

pub mod audio;
pub mod config;
pub mod layouts;
pub mod nations;
pub mod notifications;
pub mod pipeline;
pub mod pipeline_state;
pub mod roster;
pub mod session;
pub mod worldgen;

#[cfg(any(test, feature = "test-rig"))]
pub mod test_rig;

pub use audio::{PlaySfxEvent, Sfx};
pub use notifications::{NotificationEvent, NotificationLog, NotificationPriority};
pub use pipeline::{
    compute_framing, overlay_confirmed, world_bounds, ActiveMap, CaptureFraming, CaptureRequest,
    ElementsBuilt, ElementsRegenerate, GenerateRequest, LabelVisibility, LoadingOverlay,
    MapGenerated, ReframeRequest, RegenerateRequest, SeasonChanged, SeasonSwap,
    SeasonToggleRequest, WipeElements,
};
pub use pipeline_state::PipelineState;
pub use session::{Season, Session};

/// Registers the session, catalogs, pipeline state machine, and all shared
/// events. Rendering and export plug in on top of this.
pub struct GenerationPlugin;

impl Plugin for GenerationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<PipelineState>()
            .init_resource::<Session>()
            .init_resource::<nations::NationCatalog>()
            .init_resource::<layouts::LayoutCatalog>()
            .init_resource::<LoadingOverlay>()
            .init_resource::<SeasonSwap>()
            .init_resource::<LabelVisibility>()
            .init_resource::<CaptureFraming>()
            .init_resource::<NotificationLog>()
            .add_event::<GenerateRequest>()
            .add_event::<RegenerateRequest>()
            .add_event::<SeasonToggleRequest>()
            .add_event::<WipeElements>()
            .add_event::<MapGenerated>()
            .add_event::<ElementsRegenerate>()
            .add_event::<ElementsBuilt>()
            .add_event::<SeasonChanged>()
            .add_event::<CaptureRequest>()
            .add_event::<ReframeRequest>()
            .add_event::<PlaySfxEvent>()
            .add_event::<NotificationEvent>()
            .add_systems(Startup, layouts::load_catalog_from_disk)
            .add_systems(
                Update,
                (
                    pipeline::handle_generate_request,
                    pipeline::handle_regenerate_request,
                    pipeline::handle_season_toggle_request,
                    notifications::collect_notifications,
                ),
            )
            .add_systems(
                Update,
                (
                    pipeline::run_generation
                        .run_if(in_state(PipelineState::Generating))
                        .run_if(overlay_confirmed)
                        .run_if(resource_exists::<pipeline::PendingGenerate>),
                    pipeline::finish_generation.run_if(in_state(PipelineState::Generating)),
                    pipeline::run_regen
                        .run_if(in_state(PipelineState::Regenerating))
                        .run_if(overlay_confirmed)
                        .run_if(resource_exists::<pipeline::PendingRegen>),
                    pipeline::finish_regen.run_if(in_state(PipelineState::Regenerating)),
                    pipeline::run_season_swap
                        .run_if(in_state(PipelineState::SwappingSeason))
                        .run_if(overlay_confirmed)
                        .run_if(resource_exists::<pipeline::PendingSeasonSwap>),
                    pipeline::finish_season_swap
                        .run_if(in_state(PipelineState::SwappingSeason))
                        .run_if(not(resource_exists::<pipeline::PendingSeasonSwap>)),
                ),
            );

        // Overlay shown on entering, released on leaving, every working
        // state — including abnormal exits, which is what closes the
        // original design's overlay leak.
        for state in [
            PipelineState::Generating,
            PipelineState::Regenerating,
            PipelineState::SwappingSeason,
            PipelineState::Exporting,
        ] {
            app.add_systems(OnEnter(state), pipeline::show_overlay);
            app.add_systems(OnExit(state), pipeline::release_overlay);
        }
    }
}
