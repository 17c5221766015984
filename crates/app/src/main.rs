use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use export::{ExportPlugin, ExportRequest};
use generation::nations::NationCatalog;
use generation::roster::SlotPick;
use generation::{ActiveMap, GenerateRequest, GenerationPlugin, PipelineState, Session};
use rendering::RenderingPlugin;
use ui::UiPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Mapforge".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((GenerationPlugin, RenderingPlugin, ExportPlugin, UiPlugin));

    // Batch mode: one generation, one export, then exit. Used for smoke
    // testing the whole pipeline without touching the UI.
    if std::env::var("MAPFORGE_AUTOGEN").is_ok() {
        app.init_resource::<AutoRun>();
        app.add_systems(Update, drive_autogen);
    }

    app.run();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AutoStage {
    #[default]
    Generate,
    Export,
    Quit,
}

#[derive(Resource, Debug, Default)]
struct AutoRun {
    frame: u32,
    stage: AutoStage,
    /// Set once the requested run has actually started, so an Idle state
    /// afterwards means it finished (not that it hasn't begun yet).
    seen_busy: bool,
}

#[allow(clippy::too_many_arguments)]
fn drive_autogen(
    mut auto: ResMut<AutoRun>,
    state: Res<State<PipelineState>>,
    session: Res<Session>,
    nations: Res<NationCatalog>,
    map: Option<Res<ActiveMap>>,
    mut generate_events: EventWriter<GenerateRequest>,
    mut export_events: EventWriter<ExportRequest>,
    mut exit: EventWriter<AppExit>,
) {
    auto.frame += 1;
    // Let the window and the first render settle.
    if auto.frame < 60 {
        return;
    }

    let idle = *state.get() == PipelineState::Idle;
    if !idle {
        auto.seen_busy = true;
        return;
    }

    match auto.stage {
        AutoStage::Generate => {
            let picks: Vec<SlotPick> = nations
                .iter_for(session.era, session.generic_starts)
                .take(session.player_count)
                .enumerate()
                .map(|(i, n)| SlotPick::new(n.name, i as u32))
                .collect();
            generate_events.send(GenerateRequest {
                layout_name: "Sprawl".to_string(),
                picks,
            });
            auto.stage = AutoStage::Export;
            auto.seen_busy = false;
        }
        AutoStage::Export => {
            if auto.seen_busy && map.is_some() {
                export_events.send(ExportRequest {
                    base_name: "mapforge_autogen".to_string(),
                });
                auto.stage = AutoStage::Quit;
                auto.seen_busy = false;
            }
        }
        AutoStage::Quit => {
            if auto.seen_busy {
                info!("autogen run complete");
                exit.send(AppExit::Success);
            }
        }
    }
}
