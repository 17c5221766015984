//! Map camera: pan/zoom interaction plus capture framing.
//!
//! One camera serves both interactive viewing and capture. The pipeline
//! computes [`CaptureFraming`] from the layout; this module applies it
//! whenever the framing changes or a [`ReframeRequest`] arrives (export
//! runs reframe so captures always show the whole map).

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use generation::{CaptureFraming, ReframeRequest};

const PAN_SPEED: f32 = 600.0;
const ZOOM_STEP: f32 = 0.1;
const MIN_ZOOM: f32 = 0.2;
const MAX_ZOOM: f32 = 5.0;

/// Marks the camera that frames and captures the map.
#[derive(Component)]
pub struct MapCamera;

pub fn setup_cameras(mut commands: Commands) {
    commands.spawn((Camera2d, MapCamera));
}

/// Applies the computed framing to the camera on change or explicit
/// request.
pub fn apply_framing(
    framing: Res<CaptureFraming>,
    mut reframe: EventReader<ReframeRequest>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&mut Transform, &mut OrthographicProjection), With<MapCamera>>,
) {
    let requested = reframe.read().next().is_some();
    reframe.read().for_each(drop);
    if !(framing.is_changed() || requested) || framing.viewport_height <= 0.0 {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((mut transform, mut projection)) = cameras.get_single_mut() else {
        return;
    };
    transform.translation.x = framing.center.x;
    transform.translation.y = framing.center.y;
    // Default scaling maps one world unit to one logical pixel; scale so
    // the framed viewport height fills the window.
    projection.scale = framing.viewport_height / window.height().max(1.0);
}

pub fn pan_camera(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cameras: Query<&mut Transform, With<MapCamera>>,
) {
    let mut direction = Vec2::ZERO;
    if keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) || keys.pressed(KeyCode::KeyS) {
        direction.y -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::KeyW) {
        direction.y += 1.0;
    }
    if direction == Vec2::ZERO {
        return;
    }
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    let shift = direction.normalize() * PAN_SPEED * time.delta_secs();
    transform.translation.x += shift.x;
    transform.translation.y += shift.y;
}

pub fn zoom_camera(
    mut wheel: EventReader<MouseWheel>,
    mut cameras: Query<&mut OrthographicProjection, With<MapCamera>>,
) {
    let scroll: f32 = wheel.read().map(|e| e.y).sum();
    if scroll == 0.0 {
        return;
    }
    let Ok(mut projection) = cameras.get_single_mut() else {
        return;
    };
    projection.scale = (projection.scale * (1.0 - scroll * ZOOM_STEP)).clamp(MIN_ZOOM, MAX_ZOOM);
}
