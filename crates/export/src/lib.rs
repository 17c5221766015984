//! Map export: the four-pass output sequence and the artifact writers.
//!
//! One export run produces, in order: the descriptive text file, the base
//! image, the labeled image, and the alternate-season image. The sequence
//! is driven as a per-frame phase machine under the pipeline's overlay
//! discipline, and leaves the session season and label visibility exactly
//! as it found them.

use bevy::prelude::*;

pub mod atomic_write;
pub mod export_error;
pub mod export_stage;
pub mod map_text;

#[cfg(test)]
mod tests;

pub use export_error::ExportError;
pub use export_stage::{ExportPaths, ExportRequest};

use generation::{overlay_confirmed, ActiveMap, PipelineState};

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ExportRequest>()
            .init_resource::<ExportPaths>()
            .add_systems(
                Update,
                (
                    export_stage::handle_export_request,
                    export_stage::advance_export
                        .run_if(in_state(PipelineState::Exporting))
                        .run_if(overlay_confirmed)
                        .run_if(resource_exists::<export_stage::ExportRun>)
                        .run_if(resource_exists::<ActiveMap>),
                ),
            );
    }
}
