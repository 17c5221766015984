//! Events and shared signal flags connecting the pipeline to its
//! collaborators.
//!
//! Request events come from the UI; the rest flow between the pipeline and
//! the rendering crate. Everything is declared here, in the base crate, so
//! `rendering`, `export`, and `ui` can all speak the same vocabulary
//! without depending on each other.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::roster::SlotPick;
use crate::session::Season;

// ---------------------------------------------------------------------------
// Requests (UI/host → pipeline)
// ---------------------------------------------------------------------------

/// Ask for a fresh map from the given per-slot picks and layout choice.
#[derive(Event, Debug, Clone)]
pub struct GenerateRequest {
    pub layout_name: String,
    pub picks: Vec<SlotPick>,
}

/// Ask for partial regeneration of an explicit province/connection subset
/// of the active map.
#[derive(Event, Debug, Clone)]
pub struct RegenerateRequest {
    pub provinces: Vec<u32>,
    pub connections: Vec<u32>,
}

/// Ask for a season flip.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SeasonToggleRequest;

// ---------------------------------------------------------------------------
// Pipeline → rendering signals
// ---------------------------------------------------------------------------

/// Discard all generated scene elements. No-op when none exist.
#[derive(Event, Debug, Clone, Copy)]
pub struct WipeElements;

/// A new [`super::ActiveMap`] is committed; rebuild all scene elements.
#[derive(Event, Debug, Clone, Copy)]
pub struct MapGenerated;

/// Re-roll the visuals of the listed provinces/connections only.
#[derive(Event, Debug, Clone)]
pub struct ElementsRegenerate {
    pub provinces: Vec<u32>,
    pub connections: Vec<u32>,
}

/// The element builder finished a build or partial rebuild. The pipeline
/// holds the overlay open until this arrives.
#[derive(Event, Debug, Clone, Copy)]
pub struct ElementsBuilt;

/// The session season changed; swap the seasonal palette. The renderer
/// acknowledges through [`super::SeasonSwap`] once the swap is applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct SeasonChanged {
    pub season: Season,
}

/// Capture the current render surface to the given file.
#[derive(Event, Debug, Clone)]
pub struct CaptureRequest {
    pub path: PathBuf,
}

/// Re-apply the capture framing to the camera (export runs send this so
/// captures always show the whole map, whatever the user panned to).
#[derive(Event, Debug, Clone, Copy)]
pub struct ReframeRequest;

// ---------------------------------------------------------------------------
// Shared flags
// ---------------------------------------------------------------------------

/// Whether province labels are visible. Written by the export stage,
/// applied to label entities by the rendering crate. Must be restored to
/// its pre-run value by whoever flips it.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LabelVisibility(pub bool);
