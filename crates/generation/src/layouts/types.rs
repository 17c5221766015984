use std::fmt;

use serde::{Deserialize, Serialize};

/// A named grid/topology template keyed by player count.
///
/// Immutable once loaded. `water_share` is the generator parameter carried
/// through to terrain assignment: the fraction of the elevation range
/// treated as sea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    pub name: String,
    pub players: usize,
    pub width: usize,
    pub height: usize,
    #[serde(default = "default_water_share")]
    pub water_share: f32,
}

fn default_water_share() -> f32 {
    0.3
}

impl LayoutDescriptor {
    pub fn new(name: &str, players: usize, width: usize, height: usize) -> Self {
        Self {
            name: name.to_string(),
            players,
            width,
            height,
            water_share: default_water_share(),
        }
    }

    /// Number of province cells in the grid.
    pub fn province_count(&self) -> usize {
        self.width * self.height
    }
}

/// Errors from layout resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The catalog holds no descriptor for this player count at all.
    NoMatch { players: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NoMatch { players } => {
                write!(f, "no layout supports {players} players")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
