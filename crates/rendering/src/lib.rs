//! Rendering collaborators for the generation pipeline: scene elements,
//! cameras, the loading overlay, seasonal palette swaps, label visibility,
//! screenshot capture, and sound-effect playback.
//!
//! Everything here reacts to events and shared resources declared in the
//! `generation` crate; no rendering system ever mutates session state.

use bevy::prelude::*;

pub mod audio_playback;
pub mod camera;
pub mod capture;
pub mod elements;
pub mod labels;
pub mod overlay_ui;
pub mod season_swap;

use elements::{ArtVariants, ConnectionIndex, MapElements, ProvinceIndex};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapElements>()
            .init_resource::<ProvinceIndex>()
            .init_resource::<ConnectionIndex>()
            .init_resource::<ArtVariants>()
            .add_systems(Startup, (camera::setup_cameras, overlay_ui::setup_overlay))
            .add_systems(
                Update,
                (
                    elements::handle_wipe,
                    elements::build_elements.after(elements::handle_wipe),
                    elements::regen_elements.after(elements::build_elements),
                    season_swap::apply_season_swap.after(elements::regen_elements),
                    labels::sync_label_visibility,
                    camera::apply_framing,
                    camera::pan_camera,
                    camera::zoom_camera,
                    capture::handle_capture_requests,
                ),
            )
            .add_systems(
                PostUpdate,
                (overlay_ui::sync_overlay, audio_playback::consume_sfx_events),
            );
    }
}
