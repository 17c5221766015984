//! Pipeline-level export tests on the headless harness.

use std::path::PathBuf;

use generation::nations::{Era, NationCatalog};
use generation::roster::SlotPick;
use generation::test_rig::TestSession;
use generation::{
    GenerateRequest, LabelVisibility, NotificationPriority, PipelineState, Season,
    SeasonToggleRequest,
};

use crate::export_stage::ExportPaths;
use crate::{ExportPlugin, ExportRequest};

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mapforge_export_stage_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn harness(dir: &std::path::Path) -> TestSession {
    let dir = dir.to_path_buf();
    TestSession::new_with(move |app| {
        app.add_plugins(ExportPlugin);
        app.insert_resource(ExportPaths { dir });
    })
}

fn generate_map(ts: &mut TestSession) {
    let players = ts.session().player_count;
    let catalog = NationCatalog::default();
    let picks: Vec<SlotPick> = catalog
        .iter_for(Era::Early, false)
        .take(players)
        .enumerate()
        .map(|(i, n)| SlotPick::new(n.name, i as u32))
        .collect();
    ts.send(GenerateRequest {
        layout_name: "Sprawl".to_string(),
        picks,
    });
    ts.settle();
    assert!(ts.active_map().is_some(), "generation must succeed first");
}

#[test]
fn export_produces_four_artifacts_in_order() {
    let dir = test_dir("four_artifacts");
    let mut ts = harness(&dir);
    generate_map(&mut ts);

    ts.send(ExportRequest {
        base_name: "mymap".to_string(),
    });
    ts.settle();

    assert_eq!(ts.state(), PipelineState::Idle);

    // Text artifact on disk, describing the roster.
    let text = std::fs::read_to_string(dir.join("mymap.map")).expect("text artifact written");
    assert!(text.contains("Vorland"));

    // Three captures, in exactly this order.
    let names: Vec<String> = ts
        .captures()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["mymap.png", "mymap_with_labels.png", "mymap_winter.png"]
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_restores_season_and_labels() {
    let dir = test_dir("restores_state");
    let mut ts = harness(&dir);
    generate_map(&mut ts);
    assert_eq!(ts.session().season, Season::Summer);

    ts.send(ExportRequest {
        base_name: "restore_check".to_string(),
    });

    // While the labeled capture is pending, labels must be visible.
    let mut saw_labels_on = false;
    for _ in 0..256 {
        ts.tick(1);
        let labels_on = ts.world_mut().resource::<LabelVisibility>().0;
        if ts.captures().len() == 2 && labels_on {
            saw_labels_on = true;
        }
        if ts.state() == PipelineState::Idle && ts.captures().len() == 3 {
            break;
        }
    }

    assert!(saw_labels_on, "labels were toggled on for the labeled capture");
    assert_eq!(ts.state(), PipelineState::Idle);
    assert_eq!(ts.session().season, Season::Summer, "two toggles net zero");
    assert!(!ts.world_mut().resource::<LabelVisibility>().0);
    assert!(!ts.overlay().shown);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_from_winter_round_trips_back_to_winter() {
    let dir = test_dir("from_winter");
    let mut ts = harness(&dir);
    generate_map(&mut ts);

    ts.send(SeasonToggleRequest);
    ts.settle();
    assert_eq!(ts.session().season, Season::Winter);

    ts.send(ExportRequest {
        base_name: "wintry".to_string(),
    });
    ts.settle();

    assert_eq!(ts.session().season, Season::Winter);
    // The alternate-season artifact keeps its fixed suffix either way.
    assert!(ts
        .captures()
        .iter()
        .any(|p| p.to_string_lossy().contains("wintry_winter")));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_filename_refuses_without_overlay() {
    let dir = test_dir("empty_name");
    let mut ts = harness(&dir);
    generate_map(&mut ts);

    ts.send(ExportRequest {
        base_name: "   ".to_string(),
    });
    ts.tick(4);

    assert_eq!(ts.state(), PipelineState::Idle);
    assert!(!ts.overlay().shown, "no overlay for a silently refused export");
    assert!(ts.captures().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_without_a_map_reports_a_warning() {
    let dir = test_dir("no_map");
    let mut ts = harness(&dir);

    ts.send(ExportRequest {
        base_name: "ghost".to_string(),
    });
    ts.tick(4);

    assert_eq!(ts.state(), PipelineState::Idle);
    assert!(ts.captures().is_empty());
    assert!(!dir.join("ghost.map").exists());
    assert!(ts
        .notifications()
        .entries()
        .iter()
        .any(|n| n.priority == NotificationPriority::Warning));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_requests_during_a_run_are_rejected() {
    let dir = test_dir("busy");
    let mut ts = harness(&dir);
    generate_map(&mut ts);

    ts.send(ExportRequest {
        base_name: "first".to_string(),
    });
    ts.tick(3);
    assert_eq!(ts.state(), PipelineState::Exporting);

    ts.send(ExportRequest {
        base_name: "second".to_string(),
    });
    ts.settle();
    ts.tick(8);

    assert_eq!(ts.captures().len(), 3, "only the first run captured");
    assert!(dir.join("first.map").exists());
    assert!(!dir.join("second.map").exists());

    let _ = std::fs::remove_dir_all(&dir);
}
