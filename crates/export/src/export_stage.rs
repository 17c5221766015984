//! The four-pass export sequence.
//!
//! Runs as a per-frame phase machine inside `PipelineState::Exporting`:
//! text, base image, labeled image, then the alternate-season image with
//! its toggle / wait-for-swap / settle / capture / restore dance. Exactly
//! two season toggles happen on the successful path, so the session season
//! after the run equals the season before it; the abort path restores
//! season and label visibility explicitly before releasing the state.

use std::path::PathBuf;

use bevy::prelude::*;

use generation::config::RENDER_SETTLE_FRAMES;
use generation::{
    ActiveMap, CaptureRequest, LabelVisibility, NotificationEvent, PipelineState, PlaySfxEvent,
    ReframeRequest, Season, SeasonChanged, SeasonSwap, Session, Sfx,
};

use crate::map_text::write_map_text;

/// Ask for the four export artifacts under the given base name.
#[derive(Event, Debug, Clone)]
pub struct ExportRequest {
    pub base_name: String,
}

/// Where export artifacts land. Defaults to the working directory.
#[derive(Resource, Debug, Clone)]
pub struct ExportPaths {
    pub dir: PathBuf,
}

impl Default for ExportPaths {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

impl ExportPaths {
    pub fn text_path(&self, base: &str) -> PathBuf {
        self.dir.join(format!("{base}.map"))
    }

    pub fn image_path(&self, base: &str, suffix: &str) -> PathBuf {
        self.dir.join(format!("{base}{suffix}.png"))
    }
}

/// Steps of the export sequence, in commit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportPhase {
    WriteText,
    CaptureBase,
    ShowLabels,
    CaptureLabels,
    HideLabels,
    ToggleSeason,
    AwaitSeasonSwap,
    SettleRender,
    CaptureAlternate,
    RestoreSeason,
    Finish,
}

/// State of the in-flight export run.
#[derive(Resource, Debug)]
pub struct ExportRun {
    base: String,
    phase: ExportPhase,
    /// Frames left to wait before the current phase acts.
    settle: u8,
    season_before: Season,
    labels_before: bool,
}

/// Validates export preconditions and opens the run.
///
/// An empty filename silently refuses: no overlay, no error. Everything
/// else gets audible feedback.
#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_export_request(
    mut commands: Commands,
    mut events: EventReader<ExportRequest>,
    state: Res<State<PipelineState>>,
    mut next_state: ResMut<NextState<PipelineState>>,
    session: Res<Session>,
    map: Option<Res<ActiveMap>>,
    labels: Res<LabelVisibility>,
    mut reframe: EventWriter<ReframeRequest>,
    mut sfx: EventWriter<PlaySfxEvent>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let Some(request) = events.read().next().cloned() else {
        return;
    };
    events.read().for_each(drop);

    let base = request.base_name.trim().to_string();
    if base.is_empty() {
        debug!("export requested without a filename; not starting");
        return;
    }
    if *state.get() != PipelineState::Idle {
        debug!("export requested while a run is active; rejecting");
        sfx.send(PlaySfxEvent::new(Sfx::Deny));
        return;
    }
    if map.is_none() {
        notifications.send(NotificationEvent::warning(
            "nothing to export: generate a map first",
        ));
        sfx.send(PlaySfxEvent::new(Sfx::Deny));
        return;
    }

    sfx.send(PlaySfxEvent::new(Sfx::Click));
    // Captures must show the whole map, whatever the user panned to.
    reframe.send(ReframeRequest);
    commands.insert_resource(ExportRun {
        base,
        phase: ExportPhase::WriteText,
        settle: RENDER_SETTLE_FRAMES,
        season_before: session.season,
        labels_before: labels.0,
    });
    next_state.set(PipelineState::Exporting);
}

/// Advances the export machine by at most one phase per frame.
#[allow(clippy::too_many_arguments)]
pub(crate) fn advance_export(
    mut commands: Commands,
    mut run: ResMut<ExportRun>,
    mut session: ResMut<Session>,
    mut labels: ResMut<LabelVisibility>,
    mut swap: ResMut<SeasonSwap>,
    map: Res<ActiveMap>,
    paths: Res<ExportPaths>,
    mut captures: EventWriter<CaptureRequest>,
    mut season_events: EventWriter<SeasonChanged>,
    mut sfx: EventWriter<PlaySfxEvent>,
    mut notifications: EventWriter<NotificationEvent>,
    mut next_state: ResMut<NextState<PipelineState>>,
) {
    if run.settle > 0 {
        run.settle -= 1;
        return;
    }

    match run.phase {
        ExportPhase::WriteText => {
            let path = paths.text_path(&run.base);
            match write_map_text(&path, &map, session.roster.as_ref(), session.teamplay) {
                Ok(()) => {
                    info!("wrote {}", path.display());
                    run.phase = ExportPhase::CaptureBase;
                    run.settle = RENDER_SETTLE_FRAMES;
                }
                Err(err) => {
                    notifications
                        .send(NotificationEvent::warning(format!("export failed: {err}")));
                    // Toggled flags go back to their pre-run values before
                    // the state (and with it the overlay) is released.
                    labels.0 = run.labels_before;
                    if session.season != run.season_before {
                        session.season = run.season_before;
                        swap.just_changed = false;
                        season_events.send(SeasonChanged {
                            season: run.season_before,
                        });
                    }
                    commands.remove_resource::<ExportRun>();
                    next_state.set(PipelineState::Idle);
                }
            }
        }
        ExportPhase::CaptureBase => {
            captures.send(CaptureRequest {
                path: paths.image_path(&run.base, ""),
            });
            run.phase = ExportPhase::ShowLabels;
            run.settle = RENDER_SETTLE_FRAMES;
        }
        ExportPhase::ShowLabels => {
            labels.0 = true;
            run.phase = ExportPhase::CaptureLabels;
            run.settle = 1;
        }
        ExportPhase::CaptureLabels => {
            captures.send(CaptureRequest {
                path: paths.image_path(&run.base, "_with_labels"),
            });
            run.phase = ExportPhase::HideLabels;
            run.settle = RENDER_SETTLE_FRAMES;
        }
        ExportPhase::HideLabels => {
            // Restored no matter what the rest of the run does.
            labels.0 = run.labels_before;
            run.phase = ExportPhase::ToggleSeason;
        }
        ExportPhase::ToggleSeason => {
            swap.just_changed = false;
            session.season = session.season.toggled();
            season_events.send(SeasonChanged {
                season: session.season,
            });
            run.phase = ExportPhase::AwaitSeasonSwap;
        }
        ExportPhase::AwaitSeasonSwap => {
            // Unbounded wait on the renderer's readiness signal.
            if swap.just_changed {
                run.phase = ExportPhase::SettleRender;
                run.settle = RENDER_SETTLE_FRAMES;
            }
        }
        ExportPhase::SettleRender => {
            run.phase = ExportPhase::CaptureAlternate;
        }
        ExportPhase::CaptureAlternate => {
            captures.send(CaptureRequest {
                path: paths.image_path(&run.base, "_winter"),
            });
            run.phase = ExportPhase::RestoreSeason;
            run.settle = RENDER_SETTLE_FRAMES;
        }
        ExportPhase::RestoreSeason => {
            swap.just_changed = false;
            session.season = session.season.toggled();
            season_events.send(SeasonChanged {
                season: session.season,
            });
            run.phase = ExportPhase::Finish;
        }
        ExportPhase::Finish => {
            sfx.send(PlaySfxEvent::new(Sfx::Accept));
            notifications.send(NotificationEvent::positive(format!(
                "exported \"{}\" (text + 3 images)",
                run.base
            )));
            commands.remove_resource::<ExportRun>();
            next_state.set(PipelineState::Idle);
        }
    }
}
