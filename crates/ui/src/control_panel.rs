//! The main settings panel.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use generation::config::{MAX_PLAYERS, MIN_PLAYERS};
use generation::layouts::LayoutCatalog;
use generation::nations::{Era, NationCatalog};
use generation::roster::SlotPick;
use generation::{
    ActiveMap, GenerateRequest, PipelineState, RegenerateRequest, Season, SeasonToggleRequest,
    Session,
};

/// One slot row's current picker values.
#[derive(Debug, Clone)]
pub struct SlotUi {
    pub nation: String,
    pub team: u32,
}

/// Widget state the panels own: picker values, not session truth.
#[derive(Resource, Debug, Default)]
pub struct UiState {
    pub slots: Vec<SlotUi>,
    pub layout_choice: String,
    pub export_name: String,
    pub export_open: bool,
}

/// Bring the slot rows in line with the session settings: one row per
/// player slot, each holding a nation the current picker set offers.
fn sync_slots(ui_state: &mut UiState, session: &Session, nations: &NationCatalog) {
    let options: Vec<&str> = nations
        .iter_for(session.era, session.generic_starts)
        .map(|n| n.name)
        .collect();
    let fallback = options.first().copied().unwrap_or_default().to_string();

    ui_state.slots.truncate(session.player_count);
    while ui_state.slots.len() < session.player_count {
        let team = ui_state.slots.len() as u32;
        ui_state.slots.push(SlotUi {
            nation: fallback.clone(),
            team,
        });
    }
    for slot in &mut ui_state.slots {
        if !options.contains(&slot.nation.as_str()) {
            slot.nation = fallback.clone();
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn control_panel_ui(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut session: ResMut<Session>,
    nations: Res<NationCatalog>,
    layouts: Res<LayoutCatalog>,
    state: Res<State<PipelineState>>,
    map: Option<Res<ActiveMap>>,
    mut generate_events: EventWriter<GenerateRequest>,
    mut regen_events: EventWriter<RegenerateRequest>,
    mut season_events: EventWriter<SeasonToggleRequest>,
    mut exit_events: EventWriter<AppExit>,
) {
    let idle = *state.get() == PipelineState::Idle;
    sync_slots(&mut ui_state, &session, &nations);

    let layout_names: Vec<String> = layouts
        .iter_for_players(session.player_count)
        .map(|l| l.name.clone())
        .collect();
    if !layout_names.contains(&ui_state.layout_choice) {
        ui_state.layout_choice = layout_names.first().cloned().unwrap_or_default();
    }

    egui::SidePanel::left("control_panel")
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_enabled_ui(idle, |ui| {
                ui.heading("Mapforge");
                ui.separator();

                egui::ComboBox::from_label("Era")
                    .selected_text(session.era.name())
                    .show_ui(ui, |ui| {
                        for era in Era::ALL {
                            ui.selectable_value(&mut session.era, era, era.name());
                        }
                    });

                ui.add(
                    egui::Slider::new(&mut session.player_count, MIN_PLAYERS..=MAX_PLAYERS)
                        .text("Players"),
                );

                egui::ComboBox::from_label("Layout")
                    .selected_text(ui_state.layout_choice.clone())
                    .show_ui(ui, |ui| {
                        for name in &layout_names {
                            ui.selectable_value(
                                &mut ui_state.layout_choice,
                                name.clone(),
                                name,
                            );
                        }
                    });

                ui.checkbox(&mut session.teamplay, "Team play");
                ui.checkbox(&mut session.cluster_water, "Cluster water");
                ui.checkbox(&mut session.generic_starts, "Generic starts");
                ui.checkbox(&mut session.natural_starts, "Natural starts");

                ui.separator();
                ui.label("Slots");
                let teamplay = session.teamplay;
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    let options: Vec<&str> = nations
                        .iter_for(session.era, session.generic_starts)
                        .map(|n| n.name)
                        .collect();
                    for (index, slot) in ui_state.slots.iter_mut().enumerate() {
                        ui.horizontal(|ui| {
                            egui::ComboBox::from_id_salt(("slot_nation", index))
                                .selected_text(slot.nation.clone())
                                .show_ui(ui, |ui| {
                                    for name in &options {
                                        ui.selectable_value(
                                            &mut slot.nation,
                                            name.to_string(),
                                            *name,
                                        );
                                    }
                                });
                            if teamplay {
                                ui.add(
                                    egui::DragValue::new(&mut slot.team)
                                        .range(0..=15)
                                        .prefix("team "),
                                );
                            }
                        });
                    }
                });

                ui.separator();
                if ui.button("Generate").clicked() {
                    let picks: Vec<SlotPick> = ui_state
                        .slots
                        .iter()
                        .map(|slot| SlotPick::new(slot.nation.clone(), slot.team))
                        .collect();
                    generate_events.send(GenerateRequest {
                        layout_name: ui_state.layout_choice.clone(),
                        picks,
                    });
                }

                let season_label = match session.season {
                    Season::Summer => "Switch to winter",
                    Season::Winter => "Switch to summer",
                };
                if ui.button(season_label).clicked() {
                    season_events.send(SeasonToggleRequest);
                }

                if let Some(map) = map.as_ref() {
                    if ui.button("Reroll province art").clicked() {
                        regen_events.send(RegenerateRequest {
                            provinces: map.graph.nodes.iter().map(|n| n.id).collect(),
                            connections: (0..map.graph.connections.len() as u32).collect(),
                        });
                    }
                }

                if ui.button("Export...").clicked() {
                    ui_state.export_open = true;
                }

                ui.separator();
                if ui.button("Quit").clicked() {
                    exit_events.send(AppExit::Success);
                }
            });
        });
}
