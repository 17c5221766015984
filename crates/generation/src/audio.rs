//! Sound-effect feedback events.
//!
//! Pipeline systems emit [`PlaySfxEvent`] for accept/deny/click feedback;
//! the rendering crate consumes them.

use bevy::prelude::*;

/// The three feedback sounds the tool uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    /// A request was accepted and a run is starting or finished well.
    Accept,
    /// A request was rejected (validation failure, busy pipeline).
    Deny,
    /// Neutral interaction feedback.
    Click,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PlaySfxEvent {
    pub sfx: Sfx,
}

impl PlaySfxEvent {
    pub fn new(sfx: Sfx) -> Self {
        Self { sfx }
    }
}
