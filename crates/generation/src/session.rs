//! Session state for the running tool.
//!
//! [`Session`] is the explicit context object every pipeline stage reads
//! from and (for the pipeline alone) writes to. Collaborator systems get
//! read-only views; nothing outside the pipeline mutates the committed
//! roster or the season.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PLAYER_COUNT;
use crate::nations::Era;
use crate::roster::Roster;

/// One of the two mutually exclusive visual/export modes of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Season {
    /// Canonical state: generation always starts here.
    #[default]
    Summer,
    Winter,
}

impl Season {
    /// Unconditional flip. Applying it twice returns the original value.
    pub fn toggled(self) -> Self {
        match self {
            Season::Summer => Season::Winter,
            Season::Winter => Season::Summer,
        }
    }
}

/// Process-wide session settings and committed generation output.
///
/// The settings half (player count, flags, era) is edited freely by the UI.
/// The committed half (`roster`, `season`) is written only by pipeline
/// systems; the active layout travels alongside the graph in
/// [`crate::pipeline::ActiveMap`].
#[derive(Resource, Debug, Clone)]
pub struct Session {
    pub player_count: usize,
    pub teamplay: bool,
    pub cluster_water: bool,
    /// When set, slots pick from the generic pool and nation uniqueness is
    /// not enforced.
    pub generic_starts: bool,
    pub natural_starts: bool,
    pub era: Era,
    pub season: Season,
    /// Committed by the roster validator; `None` until the first accepted
    /// generation request.
    pub roster: Option<Roster>,
    /// Overrides the derived generation seed when set.
    pub seed_override: Option<u64>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            teamplay: false,
            cluster_water: true,
            generic_starts: false,
            natural_starts: false,
            era: Era::Early,
            season: Season::default(),
            roster: None,
            seed_override: None,
        }
    }
}
