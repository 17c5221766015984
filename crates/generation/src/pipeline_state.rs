//! Global pipeline state machine.
//!
//! Defines [`PipelineState`], a Bevy [`States`] enum that serializes the
//! long-running map operations. Exactly one run is active at a time: request
//! handlers only start a run from [`PipelineState::Idle`], and anything that
//! arrives while another run is in flight is rejected with deny feedback.
//!
//! The state is defined here (in the `generation` crate) rather than in
//! `rendering` or `export` so that all crates can gate systems on it without
//! circular dependencies.

use bevy::prelude::*;

/// Which long-running pipeline run, if any, is currently active.
///
/// The loading overlay is shown on entering any non-`Idle` state and hidden
/// on leaving it, so overlay visibility always tracks this state — but the
/// state, not the overlay, is the single-flight lock.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PipelineState {
    /// No run in flight; requests are accepted.
    #[default]
    Idle,
    /// Full generation: roster/layout already committed, world graph and
    /// scene elements being produced.
    Generating,
    /// Partial regeneration over an explicit province/connection subset.
    Regenerating,
    /// Season flip and the renderer's asset swap.
    SwappingSeason,
    /// The four-pass export sequence.
    Exporting,
}
