use crate::layouts::LayoutDescriptor;
use crate::nations::NationCatalog;
use crate::notifications::NotificationPriority;
use crate::pipeline_state::PipelineState;
use crate::roster::{validate_picks, SlotPick};
use crate::session::Season;
use crate::test_rig::TestSession;

use super::generate::{derive_seed, PendingGenerate};
use super::{GenerateRequest, RegenerateRequest, SeasonToggleRequest};

fn early_picks(count: usize) -> Vec<SlotPick> {
    let catalog = NationCatalog::default();
    catalog
        .iter_for(crate::nations::Era::Early, false)
        .take(count)
        .enumerate()
        .map(|(i, n)| SlotPick::new(n.name, i as u32))
        .collect()
}

fn generate_request(picks: Vec<SlotPick>) -> GenerateRequest {
    GenerateRequest {
        layout_name: "Sprawl".to_string(),
        picks,
    }
}

#[test]
fn generation_commits_roster_and_map_then_returns_to_idle() {
    let mut ts = TestSession::new();
    let players = ts.session().player_count;

    ts.send(generate_request(early_picks(players)));
    ts.settle();

    assert_eq!(ts.state(), PipelineState::Idle);
    let roster = ts.session().roster.clone().expect("roster committed");
    assert_eq!(roster.len(), players);

    let map = ts.active_map().expect("map committed");
    assert_eq!(map.layout.players, players);
    assert_eq!(map.graph.nodes.len(), map.layout.province_count());
    assert_eq!(map.graph.start_nodes().len(), players);

    // Generation always lands in the canonical season.
    assert_eq!(ts.session().season, Season::Summer);
}

#[test]
fn overlay_wraps_the_run_and_is_released_after() {
    let mut ts = TestSession::new();
    let players = ts.session().player_count;

    assert!(!ts.overlay().shown);
    ts.send(generate_request(early_picks(players)));
    ts.tick(2);
    assert_eq!(ts.state(), PipelineState::Generating);
    assert!(ts.overlay().shown, "overlay up while the run is active");

    ts.settle();
    assert!(!ts.overlay().shown, "overlay released after the run");
    assert!(!ts.overlay().confirmed);
}

#[test]
fn duplicate_picks_reject_and_leave_roster_untouched() {
    let mut ts = TestSession::new();
    let players = ts.session().player_count;

    // {A, B, A, ...}: first and third slot share a nation.
    let mut picks = early_picks(players);
    picks[2] = picks[0].clone();

    ts.send(generate_request(picks));
    ts.tick(4);

    assert_eq!(ts.state(), PipelineState::Idle);
    assert!(ts.session().roster.is_none(), "no partial roster committed");
    assert!(ts.active_map().is_none());
}

#[test]
fn rejection_preserves_previously_committed_roster() {
    let mut ts = TestSession::new();
    let players = ts.session().player_count;

    ts.send(generate_request(early_picks(players)));
    ts.settle();
    let committed = ts.session().roster.clone().expect("first run commits");

    let mut picks = early_picks(players);
    picks[1] = picks[0].clone();
    ts.send(generate_request(picks));
    ts.tick(4);

    assert_eq!(ts.session().roster.as_ref(), Some(&committed));
}

#[test]
fn unknown_nation_rejects_request() {
    let mut ts = TestSession::new();
    let players = ts.session().player_count;

    let mut picks = early_picks(players);
    picks[0] = SlotPick::new("Lost Continent", 0);

    ts.send(generate_request(picks));
    ts.tick(4);

    assert_eq!(ts.state(), PipelineState::Idle);
    assert!(ts.session().roster.is_none());
}

#[test]
fn generic_starts_allow_duplicate_picks() {
    let mut ts = TestSession::new();
    let players = ts.session().player_count;
    ts.session_mut().generic_starts = true;

    let picks = vec![SlotPick::new("Generic Start", 0); players];
    ts.send(generate_request(picks));
    ts.settle();

    assert_eq!(ts.session().roster.as_ref().map(|r| r.len()), Some(players));
    assert!(ts.active_map().is_some());
}

#[test]
fn pick_count_must_match_player_count() {
    let mut ts = TestSession::new();
    ts.send(generate_request(early_picks(3)));
    ts.tick(4);
    assert!(ts.session().roster.is_none());
    assert!(ts.active_map().is_none());
}

#[test]
fn requests_during_an_active_run_are_rejected() {
    let mut ts = TestSession::new();
    let players = ts.session().player_count;

    let first = early_picks(players);
    ts.send(generate_request(first.clone()));
    ts.tick(2);
    assert_eq!(ts.state(), PipelineState::Generating);

    // Different picks, sent mid-run: dropped, not queued.
    let mut second = early_picks(players);
    second.reverse();
    ts.send(generate_request(second));
    ts.settle();
    ts.tick(4);

    let roster = ts.session().roster.clone().expect("first run committed");
    assert_eq!(roster.entries()[0].nation.name, first[0].nation);
    assert_eq!(ts.state(), PipelineState::Idle);
}

#[test]
fn missing_layout_reports_error_without_generation_side_effects() {
    let mut ts = TestSession::new();
    {
        let mut session = ts.session_mut();
        session.generic_starts = true;
        session.player_count = 17; // no layout supports 17 players
        session.season = Season::Winter;
    }

    let picks = vec![SlotPick::new("Generic Start", 0); 17];
    ts.send(generate_request(picks));
    ts.tick(4);

    assert_eq!(ts.state(), PipelineState::Idle);
    // The validator's own side effect stands; generation never started.
    assert!(ts.session().roster.is_some());
    assert!(ts.active_map().is_none());
    assert_eq!(ts.session().season, Season::Winter, "season untouched");
    assert!(!ts.overlay().shown, "no overlay for a refused run");
    assert!(ts
        .notifications()
        .entries()
        .iter()
        .any(|n| n.priority == NotificationPriority::Warning));
}

#[test]
fn season_toggle_round_trip_restores_season() {
    let mut ts = TestSession::new();
    assert_eq!(ts.session().season, Season::Summer);

    ts.send(SeasonToggleRequest);
    ts.settle();
    assert_eq!(ts.session().season, Season::Winter);
    assert_eq!(ts.state(), PipelineState::Idle);

    ts.send(SeasonToggleRequest);
    ts.settle();
    assert_eq!(ts.session().season, Season::Summer);
}

#[test]
fn regeneration_requires_an_active_map() {
    let mut ts = TestSession::new();
    ts.send(RegenerateRequest {
        provinces: vec![0, 1],
        connections: vec![],
    });
    ts.tick(4);
    assert_eq!(ts.state(), PipelineState::Idle);
}

#[test]
fn regeneration_runs_and_returns_to_idle() {
    let mut ts = TestSession::new();
    let players = ts.session().player_count;
    ts.send(generate_request(early_picks(players)));
    ts.settle();

    ts.send(RegenerateRequest {
        provinces: vec![0, 1, 2],
        connections: vec![0],
    });
    ts.tick(2);
    assert_eq!(ts.state(), PipelineState::Regenerating);
    assert!(ts.overlay().shown);

    ts.settle();
    assert_eq!(ts.state(), PipelineState::Idle);
    assert!(!ts.overlay().shown);
}

#[test]
fn aborted_run_still_releases_the_overlay() {
    let mut ts = TestSession::new();

    // Force the abnormal path: a pending run with no committed roster.
    ts.world_mut().insert_resource(PendingGenerate {
        layout: LayoutDescriptor::new("Sprawl", 9, 11, 12),
    });
    ts.world_mut()
        .resource_mut::<bevy::prelude::NextState<PipelineState>>()
        .set(PipelineState::Generating);

    ts.settle();
    assert_eq!(ts.state(), PipelineState::Idle);
    assert!(!ts.overlay().shown, "overlay released on the failure path");
    assert!(ts.active_map().is_none());
}

#[test]
fn derived_seed_is_stable_and_input_sensitive() {
    let catalog = NationCatalog::default();
    let layout = LayoutDescriptor::new("Classic", 2, 10, 10);
    let roster_a = validate_picks(
        &[SlotPick::new("Vorland", 0), SlotPick::new("Kalessin", 1)],
        &catalog,
        false,
    )
    .unwrap();
    let roster_b = validate_picks(
        &[SlotPick::new("Kalessin", 0), SlotPick::new("Vorland", 1)],
        &catalog,
        false,
    )
    .unwrap();

    assert_eq!(derive_seed(&layout, &roster_a), derive_seed(&layout, &roster_a));
    assert_ne!(derive_seed(&layout, &roster_a), derive_seed(&layout, &roster_b));
}
