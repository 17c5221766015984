//! Tunable constants shared across the workspace.

/// World-space width of one province cell, in units. The element builder
/// spaces province sprites on this grid and the capture framing arithmetic
/// is expressed in terms of it.
pub const UNIT_X: f32 = 64.0;

/// World-space height of one province cell, in units.
pub const UNIT_Y: f32 = 64.0;

/// Frames to let the renderer settle after a camera reframe or a visual
/// state change before a capture is taken.
pub const RENDER_SETTLE_FRAMES: u8 = 4;

/// Default number of player slots when the tool starts.
pub const DEFAULT_PLAYER_COUNT: usize = 9;

/// Hard bounds on the player-count setting exposed to the UI.
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 16;

/// Directory scanned for layout catalog files at startup.
pub const LAYOUT_DIR: &str = "assets/layouts";
