/// Terrain classes a province can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Plains,
    Forest,
    Highland,
    Swamp,
    Sea,
}

impl Terrain {
    pub fn name(self) -> &'static str {
        match self {
            Terrain::Plains => "plains",
            Terrain::Forest => "forest",
            Terrain::Highland => "highland",
            Terrain::Swamp => "swamp",
            Terrain::Sea => "sea",
        }
    }

    pub const ALL: [Terrain; 5] = [
        Terrain::Plains,
        Terrain::Forest,
        Terrain::Highland,
        Terrain::Swamp,
        Terrain::Sea,
    ];
}

/// One conceptual province.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub terrain: Terrain,
    /// Roster slot index starting here, if any. Start nodes are never sea.
    pub start: Option<u32>,
}

/// Flavor of a province-to-province border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    Standard,
    River,
    MountainPass,
}

/// An undirected border between two provinces, stored with `a < b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub a: u32,
    pub b: u32,
    pub kind: ConnectionKind,
}

/// The generated node/connection graph for one map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldGraph {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl WorldGraph {
    /// Count of provinces per terrain, in [`Terrain::ALL`] order.
    pub fn terrain_census(&self) -> [(Terrain, usize); 5] {
        Terrain::ALL.map(|terrain| {
            let count = self.nodes.iter().filter(|n| n.terrain == terrain).count();
            (terrain, count)
        })
    }

    /// Ids of the provinces that carry a start marker, in slot order.
    pub fn start_nodes(&self) -> Vec<u32> {
        let mut starts: Vec<(u32, u32)> = self
            .nodes
            .iter()
            .filter_map(|n| n.start.map(|slot| (slot, n.id)))
            .collect();
        starts.sort_by_key(|(slot, _)| *slot);
        starts.into_iter().map(|(_, id)| id).collect()
    }
}
