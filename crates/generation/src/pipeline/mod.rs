//! The orchestration pipeline.
//!
//! Request handlers turn UI events into pipeline runs; each run is one
//! [`crate::PipelineState`] excursion wrapped in the loading-overlay
//! discipline of [`runner`]. The stages talk to the rendering crate only
//! through the events and signal resources declared in [`events`], so the
//! whole sequencing logic stays testable headless.

mod events;
mod framing;
mod generate;
mod regen;
mod runner;
mod season;

#[cfg(test)]
mod tests;

pub use events::{
    CaptureRequest, ElementsBuilt, ElementsRegenerate, GenerateRequest, LabelVisibility,
    MapGenerated, ReframeRequest, RegenerateRequest, SeasonChanged, SeasonToggleRequest,
    WipeElements,
};
pub use framing::{compute_framing, world_bounds, CaptureFraming};
pub use generate::{derive_seed, ActiveMap};
pub use runner::{overlay_confirmed, LoadingOverlay};
pub use season::SeasonSwap;

pub(crate) use generate::{finish_generation, handle_generate_request, run_generation, PendingGenerate};
pub(crate) use regen::{finish_regen, handle_regenerate_request, run_regen, PendingRegen};
pub(crate) use runner::{release_overlay, show_overlay};
pub(crate) use season::{
    finish_season_swap, handle_season_toggle_request, run_season_swap, PendingSeasonSwap,
};
