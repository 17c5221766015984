use std::collections::HashSet;

use fastnoise_lite::{FastNoiseLite, NoiseType};
use pathfinding::prelude::connected_components;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::layouts::LayoutDescriptor;
use crate::roster::Roster;

use super::types::{Connection, ConnectionKind, Node, Terrain, WorldGraph};

/// Noise frequency tuned for province-scale features on small grids.
const TERRAIN_FREQUENCY: f32 = 0.13;

/// Chance that a non-mountain border is a river crossing.
const RIVER_CHANCE: f64 = 0.08;

/// Inputs to one generation run.
pub struct GenArgs<'a> {
    pub teamplay: bool,
    pub cluster_water: bool,
    pub natural_starts: bool,
    pub roster: &'a Roster,
    pub layout: &'a LayoutDescriptor,
    pub seed: u64,
}

/// Generate the full node/connection graph for the given arguments.
pub fn generate_world(args: &GenArgs) -> WorldGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut nodes = place_nodes(args.layout, args.seed);
    if args.cluster_water {
        cluster_water(&mut nodes, args.layout);
    }
    assign_starts(&mut nodes, args, &mut rng);
    let connections = connect_nodes(&nodes, args.layout, &mut rng);

    WorldGraph { nodes, connections }
}

/// Map a normalized elevation to terrain. `water_share` is the fraction of
/// the elevation range treated as sea.
fn terrain_for(elevation: f32, water_share: f32) -> Terrain {
    if elevation < water_share {
        Terrain::Sea
    } else if elevation < water_share + 0.06 {
        Terrain::Swamp
    } else if elevation > 0.85 {
        Terrain::Highland
    } else if elevation > 0.70 {
        Terrain::Forest
    } else {
        Terrain::Plains
    }
}

fn place_nodes(layout: &LayoutDescriptor, seed: u64) -> Vec<Node> {
    let mut noise = FastNoiseLite::with_seed(seed as i32);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(TERRAIN_FREQUENCY));

    let mut nodes = Vec::with_capacity(layout.province_count());
    for y in 0..layout.height {
        for x in 0..layout.width {
            let raw = noise.get_noise_2d(x as f32, y as f32);
            let elevation = (raw + 1.0) * 0.5;
            nodes.push(Node {
                id: (y * layout.width + x) as u32,
                x: x as u32,
                y: y as u32,
                terrain: terrain_for(elevation, layout.water_share),
                start: None,
            });
        }
    }
    nodes
}

/// 4-neighbor ids of a node within the grid.
fn grid_neighbors(id: u32, layout: &LayoutDescriptor) -> Vec<u32> {
    let w = layout.width as u32;
    let h = layout.height as u32;
    let (x, y) = (id % w, id / w);

    let mut out = Vec::with_capacity(4);
    if x > 0 {
        out.push(id - 1);
    }
    if x + 1 < w {
        out.push(id + 1);
    }
    if y > 0 {
        out.push(id - w);
    }
    if y + 1 < h {
        out.push(id + w);
    }
    out
}

/// Collapse the sea into one contiguous body: every connected sea component
/// except the largest is re-terrained to swamp.
fn cluster_water(nodes: &mut [Node], layout: &LayoutDescriptor) {
    let sea: HashSet<u32> = nodes
        .iter()
        .filter(|n| n.terrain == Terrain::Sea)
        .map(|n| n.id)
        .collect();
    if sea.is_empty() {
        return;
    }

    let starts: Vec<u32> = {
        let mut ids: Vec<u32> = sea.iter().copied().collect();
        ids.sort_unstable();
        ids
    };
    let components = connected_components(&starts, |id| {
        grid_neighbors(*id, layout)
            .into_iter()
            .filter(|n| sea.contains(n))
            .collect::<Vec<_>>()
    });

    let Some(largest) = components.iter().map(HashSet::len).max() else {
        return;
    };
    // Keep the first component of maximal size; drain the rest.
    let mut kept = false;
    for component in &components {
        if component.len() == largest && !kept {
            kept = true;
            continue;
        }
        for &id in component {
            nodes[id as usize].terrain = Terrain::Swamp;
        }
    }
}

/// Pick a start province for every roster slot.
///
/// Natural starts spread evenly over the land in scan order; otherwise the
/// positions are drawn from the seeded rng. Teamplay orders slots by team
/// and hands out candidates sorted by grid position, so teammates land in
/// neighboring picks.
fn assign_starts(nodes: &mut [Node], args: &GenArgs, rng: &mut ChaCha8Rng) {
    let players = args.roster.len();
    if players == 0 {
        return;
    }

    let mut land: Vec<u32> = nodes
        .iter()
        .filter(|n| n.terrain != Terrain::Sea)
        .map(|n| n.id)
        .collect();

    // Degenerate layouts with almost no land: reclaim sea cells so every
    // slot still gets a start.
    if land.len() < players {
        for node in nodes.iter_mut() {
            if land.len() >= players {
                break;
            }
            if node.terrain == Terrain::Sea {
                node.terrain = Terrain::Plains;
                land.push(node.id);
            }
        }
        land.sort_unstable();
    }

    let mut candidates: Vec<u32> = if args.natural_starts {
        let step = land.len() / players;
        (0..players).map(|i| land[i * step + step / 2]).collect()
    } else {
        land.choose_multiple(rng, players).copied().collect()
    };

    let slots: Vec<u32> = if args.teamplay {
        candidates.sort_unstable();
        let mut by_team: Vec<(u32, u32)> = args
            .roster
            .entries()
            .iter()
            .enumerate()
            .map(|(slot, entry)| (entry.team, slot as u32))
            .collect();
        by_team.sort();
        by_team.into_iter().map(|(_, slot)| slot).collect()
    } else {
        (0..players as u32).collect()
    };

    for (candidate, slot) in candidates.into_iter().zip(slots) {
        nodes[candidate as usize].start = Some(slot);
    }
}

fn connect_nodes(nodes: &[Node], layout: &LayoutDescriptor, rng: &mut ChaCha8Rng) -> Vec<Connection> {
    let w = layout.width;
    let h = layout.height;
    let mut connections = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let id = y * w + x;
            if x + 1 < w {
                connections.push(Connection {
                    a: id as u32,
                    b: (id + 1) as u32,
                    kind: border_kind(nodes[id].terrain, nodes[id + 1].terrain, rng),
                });
            }
            if y + 1 < h {
                connections.push(Connection {
                    a: id as u32,
                    b: (id + w) as u32,
                    kind: border_kind(nodes[id].terrain, nodes[id + w].terrain, rng),
                });
            }
        }
    }
    connections
}

fn border_kind(a: Terrain, b: Terrain, rng: &mut ChaCha8Rng) -> ConnectionKind {
    if a == Terrain::Highland && b == Terrain::Highland {
        ConnectionKind::MountainPass
    } else if a != Terrain::Sea && b != Terrain::Sea && rng.gen_bool(RIVER_CHANCE) {
        ConnectionKind::River
    } else {
        ConnectionKind::Standard
    }
}
