//! Headless test harness for the pipeline.
//!
//! Wraps `App` + `MinimalPlugins` + [`GenerationPlugin`] and stands in for
//! the rendering crate with small stub systems: overlay confirmation,
//! element-build echo, season-swap acknowledgement, and capture recording.
//! The stubs run in `PostUpdate` so their effects land a frame after the
//! pipeline acts, mirroring the real renderer's latency.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::pipeline::{
    ActiveMap, CaptureRequest, ElementsBuilt, ElementsRegenerate, LoadingOverlay, MapGenerated,
    SeasonChanged, SeasonSwap,
};
use crate::pipeline_state::PipelineState;
use crate::session::Session;
use crate::GenerationPlugin;

/// Recorded capture requests, in arrival order.
#[derive(Resource, Debug, Default)]
pub struct CaptureTrace {
    pub paths: Vec<PathBuf>,
}

/// A headless app exercising the pipeline without a window or renderer.
pub struct TestSession {
    app: App,
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    pub fn new() -> Self {
        Self::new_with(|_| {})
    }

    /// Build a harness, letting the caller add extra plugins (the export
    /// crate's tests add `ExportPlugin` here) before startup runs.
    pub fn new_with(configure: impl FnOnce(&mut App)) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.add_plugins(GenerationPlugin);
        app.init_resource::<CaptureTrace>();
        app.add_systems(
            PostUpdate,
            (
                confirm_overlay,
                echo_elements_built,
                ack_season_swap,
                record_captures,
            ),
        );
        configure(&mut app);

        // One update so Startup systems execute.
        app.update();
        Self { app }
    }

    /// Advance the app by `frames` updates.
    pub fn tick(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// Tick until the pipeline returns to `Idle`, panicking if it never
    /// does. Returns the number of frames it took.
    pub fn settle(&mut self) -> usize {
        // Give a just-sent request time to leave Idle first.
        self.tick(2);
        for frame in 0..256 {
            if self.state() == PipelineState::Idle {
                return frame + 2;
            }
            self.tick(1);
        }
        panic!("pipeline did not return to Idle within 256 frames");
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    pub fn state(&self) -> PipelineState {
        *self
            .app
            .world()
            .resource::<State<PipelineState>>()
            .get()
    }

    pub fn session(&self) -> &Session {
        self.app.world().resource::<Session>()
    }

    pub fn session_mut(&mut self) -> Mut<'_, Session> {
        self.app.world_mut().resource_mut::<Session>()
    }

    pub fn overlay(&self) -> &LoadingOverlay {
        self.app.world().resource::<LoadingOverlay>()
    }

    pub fn active_map(&self) -> Option<&ActiveMap> {
        self.app.world().get_resource::<ActiveMap>()
    }

    pub fn captures(&self) -> &[PathBuf] {
        &self.app.world().resource::<CaptureTrace>().paths
    }

    pub fn notifications(&self) -> &crate::NotificationLog {
        self.app.world().resource::<crate::NotificationLog>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}

// ---------------------------------------------------------------------------
// Renderer stand-ins
// ---------------------------------------------------------------------------

/// Confirms the overlay one frame after it is requested, like the real
/// overlay node becoming visible in the scene graph.
fn confirm_overlay(mut overlay: ResMut<LoadingOverlay>) {
    if overlay.shown && !overlay.confirmed {
        overlay.confirmed = true;
    }
}

/// Answers build and partial-rebuild orders as the element builder would.
fn echo_elements_built(
    mut generated: EventReader<MapGenerated>,
    mut regenerated: EventReader<ElementsRegenerate>,
    mut built: EventWriter<ElementsBuilt>,
) {
    let orders = generated.read().count() + regenerated.read().count();
    if orders > 0 {
        built.send(ElementsBuilt);
    }
}

/// Acknowledges season swaps as the palette system would.
fn ack_season_swap(mut events: EventReader<SeasonChanged>, mut swap: ResMut<SeasonSwap>) {
    if events.read().next().is_some() {
        events.read().for_each(drop);
        swap.just_changed = true;
    }
}

fn record_captures(mut events: EventReader<CaptureRequest>, mut trace: ResMut<CaptureTrace>) {
    for event in events.read() {
        trace.paths.push(event.path.clone());
    }
}
