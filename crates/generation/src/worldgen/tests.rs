use std::collections::HashSet;

use pathfinding::prelude::connected_components;

use crate::layouts::LayoutDescriptor;
use crate::nations::NationCatalog;
use crate::roster::{validate_picks, Roster, SlotPick};

use super::{generate_world, GenArgs, Terrain, WorldGraph};

fn roster(names: &[(&str, u32)]) -> Roster {
    let catalog = NationCatalog::default();
    let picks: Vec<SlotPick> = names
        .iter()
        .map(|(name, team)| SlotPick::new(*name, *team))
        .collect();
    validate_picks(&picks, &catalog, false).expect("test roster validates")
}

fn generate(layout: &LayoutDescriptor, roster: &Roster, seed: u64) -> WorldGraph {
    generate_world(&GenArgs {
        teamplay: false,
        cluster_water: true,
        natural_starts: false,
        roster,
        layout,
        seed,
    })
}

#[test]
fn node_count_matches_layout_grid() {
    let layout = LayoutDescriptor::new("Classic", 3, 12, 9);
    let roster = roster(&[("Vorland", 0), ("Kalessin", 1), ("Tyrshea", 2)]);
    let graph = generate(&layout, &roster, 7);
    assert_eq!(graph.nodes.len(), 12 * 9);
}

#[test]
fn connection_endpoints_are_valid_and_normalized() {
    let layout = LayoutDescriptor::new("Classic", 2, 8, 8);
    let roster = roster(&[("Vorland", 0), ("Kalessin", 1)]);
    let graph = generate(&layout, &roster, 11);
    assert!(!graph.connections.is_empty());
    for conn in &graph.connections {
        assert!(conn.a < conn.b, "connections are stored with a < b");
        assert!((conn.b as usize) < graph.nodes.len());
    }
    // Interior grid: each cell contributes a right and a down border.
    assert_eq!(graph.connections.len(), 8 * 7 * 2);
}

#[test]
fn same_seed_same_graph() {
    let layout = LayoutDescriptor::new("Classic", 2, 10, 10);
    let roster = roster(&[("Vorland", 0), ("Kalessin", 1)]);
    let first = generate(&layout, &roster, 42);
    let second = generate(&layout, &roster, 42);
    assert_eq!(first, second);
}

#[test]
fn different_seeds_differ() {
    let layout = LayoutDescriptor::new("Classic", 2, 10, 10);
    let roster = roster(&[("Vorland", 0), ("Kalessin", 1)]);
    let first = generate(&layout, &roster, 1);
    let second = generate(&layout, &roster, 2);
    assert_ne!(first, second);
}

#[test]
fn water_clustering_leaves_one_sea_component() {
    let mut layout = LayoutDescriptor::new("Archipelago", 2, 16, 16);
    layout.water_share = 0.45;
    let roster = roster(&[("Vorland", 0), ("Kalessin", 1)]);
    let graph = generate(&layout, &roster, 99);

    let sea: HashSet<u32> = graph
        .nodes
        .iter()
        .filter(|n| n.terrain == Terrain::Sea)
        .map(|n| n.id)
        .collect();
    if sea.is_empty() {
        return;
    }
    let mut starts: Vec<u32> = sea.iter().copied().collect();
    starts.sort_unstable();
    let components = connected_components(&starts, |&id| {
        let w = 16u32;
        let (x, y) = (id % w, id / w);
        let mut out = Vec::new();
        if x > 0 {
            out.push(id - 1);
        }
        if x + 1 < w {
            out.push(id + 1);
        }
        if y > 0 {
            out.push(id - w);
        }
        if y + 1 < 16 {
            out.push(id + w);
        }
        out.into_iter().filter(|n| sea.contains(n)).collect::<Vec<_>>()
    });
    assert_eq!(components.len(), 1, "clustered water must be contiguous");
}

#[test]
fn every_slot_gets_a_start_on_land() {
    let layout = LayoutDescriptor::new("Classic", 4, 12, 12);
    let roster = roster(&[
        ("Vorland", 0),
        ("Kalessin", 1),
        ("Tyrshea", 2),
        ("Ombrac", 3),
    ]);
    let graph = generate(&layout, &roster, 5);

    let starts = graph.start_nodes();
    assert_eq!(starts.len(), 4);
    let unique: HashSet<_> = starts.iter().collect();
    assert_eq!(unique.len(), 4, "starts are distinct provinces");
    for id in starts {
        assert_ne!(graph.nodes[id as usize].terrain, Terrain::Sea);
    }
}

#[test]
fn natural_starts_are_deterministic_and_spread() {
    let layout = LayoutDescriptor::new("Classic", 3, 12, 12);
    let roster = roster(&[("Vorland", 0), ("Kalessin", 1), ("Tyrshea", 2)]);
    let args = GenArgs {
        teamplay: false,
        cluster_water: true,
        natural_starts: true,
        roster: &roster,
        layout: &layout,
        seed: 3,
    };
    let first = generate_world(&args);
    let second = generate_world(&args);
    assert_eq!(first.start_nodes(), second.start_nodes());
}

#[test]
fn teamplay_groups_teammates_on_neighboring_candidates() {
    let layout = LayoutDescriptor::new("Classic", 4, 14, 14);
    let roster = roster(&[
        ("Vorland", 1),
        ("Kalessin", 0),
        ("Tyrshea", 1),
        ("Ombrac", 0),
    ]);
    let graph = generate_world(&GenArgs {
        teamplay: true,
        cluster_water: true,
        natural_starts: true,
        roster: &roster,
        layout: &layout,
        seed: 8,
    });

    // Candidates are handed out in grid order to slots sorted by team, so
    // the two team-0 slots occupy the first two candidate provinces.
    let starts = graph.start_nodes();
    let mut with_team: Vec<(u32, u32)> = starts
        .iter()
        .enumerate()
        .map(|(slot, id)| (roster.entries()[slot].team, *id))
        .collect();
    with_team.sort();
    let team0: Vec<u32> = with_team.iter().filter(|(t, _)| *t == 0).map(|(_, id)| *id).collect();
    let team1: Vec<u32> = with_team.iter().filter(|(t, _)| *t == 1).map(|(_, id)| *id).collect();
    assert!(team0.iter().max() < team1.iter().min() || team1.iter().max() < team0.iter().min());
}

#[test]
fn terrain_census_sums_to_node_count() {
    let layout = LayoutDescriptor::new("Classic", 2, 10, 8);
    let roster = roster(&[("Vorland", 0), ("Kalessin", 1)]);
    let graph = generate(&layout, &roster, 13);
    let total: usize = graph.terrain_census().iter().map(|(_, n)| n).sum();
    assert_eq!(total, 80);
}
