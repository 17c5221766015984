//! Feedback-sound playback.
//!
//! Currently logs each event at debug level since no audio asset files
//! exist yet. When sound assets are added, this module can be extended to
//! load and play them via Bevy's `AudioPlayer` API.

use bevy::prelude::*;

use generation::PlaySfxEvent;

pub fn consume_sfx_events(mut events: EventReader<PlaySfxEvent>) {
    for event in events.read() {
        debug!("SFX: {:?}", event.sfx);
    }
}
