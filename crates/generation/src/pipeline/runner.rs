//! The blocking-overlay run wrapper.
//!
//! Every pipeline run follows the same discipline: entering a non-idle
//! [`crate::PipelineState`] shows the overlay, work systems wait for the
//! renderer to confirm the overlay is actually visible before doing
//! anything, and leaving the state releases the overlay. Because release
//! hangs off `OnExit`, it happens on every exit path — a failed run cannot
//! leave the overlay up or the lock held.

use bevy::prelude::*;

/// Overlay visibility request and confirmation.
///
/// `shown` is the pipeline's request; `confirmed` is set by the rendering
/// crate only after the overlay node is visible in the scene graph (at
/// least one frame later). Work systems gate on [`overlay_confirmed`].
#[derive(Resource, Debug, Default)]
pub struct LoadingOverlay {
    pub shown: bool,
    pub confirmed: bool,
}

/// Run condition for the per-run unit of work.
pub fn overlay_confirmed(overlay: Res<LoadingOverlay>) -> bool {
    overlay.confirmed
}

/// `OnEnter` of every working state.
pub(crate) fn show_overlay(mut overlay: ResMut<LoadingOverlay>) {
    overlay.shown = true;
}

/// `OnExit` of every working state; also drops the stale confirmation so
/// the next run waits for the renderer again.
pub(crate) fn release_overlay(mut overlay: ResMut<LoadingOverlay>) {
    overlay.shown = false;
    overlay.confirmed = false;
}
