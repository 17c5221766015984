//! The export window: output name plus the export trigger.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use export::ExportRequest;
use generation::PipelineState;

use crate::control_panel::UiState;

pub fn export_panel_ui(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    state: Res<State<PipelineState>>,
    mut export_events: EventWriter<ExportRequest>,
) {
    if !ui_state.export_open {
        return;
    }
    let idle = *state.get() == PipelineState::Idle;

    let mut open = ui_state.export_open;
    egui::Window::new("Export map")
        .open(&mut open)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_enabled_ui(idle, |ui| {
                ui.horizontal(|ui| {
                    ui.label("File name:");
                    ui.text_edit_singleline(&mut ui_state.export_name);
                });
                ui.label("Writes <name>.map plus three .png captures.");
                if ui.button("Export").clicked() && !ui_state.export_name.trim().is_empty() {
                    export_events.send(ExportRequest {
                        base_name: ui_state.export_name.clone(),
                    });
                    ui_state.export_open = false;
                }
            });
        });
    if ui_state.export_open {
        ui_state.export_open = open;
    }
}
