//! Screenshot capture.
//!
//! Turns [`CaptureRequest`]s into Bevy screenshot entities saved to disk.
//! Completion is asynchronous; the export stage spaces captures with
//! settle frames rather than waiting on the observer.

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use generation::CaptureRequest;

pub fn handle_capture_requests(mut commands: Commands, mut events: EventReader<CaptureRequest>) {
    for event in events.read() {
        info!("capturing {}", event.path.display());
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(event.path.clone()));
    }
}
