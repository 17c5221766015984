//! egui control surface: session settings, per-slot nation pickers, and
//! the generate/season/export/quit actions.
//!
//! The panels only read session state and emit request events; every
//! long-running operation goes through the pipeline. Controls are disabled
//! while a run is active, matching the blocking overlay.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod control_panel;
pub mod export_panel;
pub mod notifications_ui;

use control_panel::UiState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<UiState>()
            .add_systems(
                Update,
                (
                    control_panel::control_panel_ui,
                    export_panel::export_panel_ui,
                    notifications_ui::notifications_ui,
                ),
            );
    }
}
