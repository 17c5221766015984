use std::fmt;

use crate::nations::{Nation, NationCatalog};

/// One player's raw (nation, team) selection, submitted per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPick {
    pub nation: String,
    pub team: u32,
}

impl SlotPick {
    pub fn new(nation: impl Into<String>, team: u32) -> Self {
        Self {
            nation: nation.into(),
            team,
        }
    }
}

/// A validated (nation, team) assignment. Immutable once committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub nation: Nation,
    pub team: u32,
}

/// The committed roster: one entry per configured player slot, in slot
/// order. Replaced wholesale on each accepted generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Why a pick list was rejected. The whole request fails on the first
/// offending slot; nothing is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The nation name resolved to nothing in the catalog.
    UnknownNation(String),
    /// The nation already appears earlier in the same request and generic
    /// starts are off.
    DuplicateNation(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::UnknownNation(name) => write!(f, "unknown nation: {name}"),
            RosterError::DuplicateNation(name) => {
                write!(f, "nation picked twice: {name}")
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// Validate an ordered pick list against the catalog.
///
/// Each pick resolves by exact name. A duplicate nation rejects the request
/// unless `generic_starts` is set, in which case uniqueness is not enforced
/// (generic slots carry no real nation identity).
pub fn validate_picks(
    picks: &[SlotPick],
    catalog: &NationCatalog,
    generic_starts: bool,
) -> Result<Roster, RosterError> {
    let mut entries: Vec<RosterEntry> = Vec::with_capacity(picks.len());

    for pick in picks {
        let nation = catalog
            .lookup(&pick.nation)
            .ok_or_else(|| RosterError::UnknownNation(pick.nation.clone()))?;

        if !generic_starts && entries.iter().any(|e| e.nation.name == nation.name) {
            return Err(RosterError::DuplicateNation(pick.nation.clone()));
        }

        entries.push(RosterEntry {
            nation: nation.clone(),
            team: pick.team,
        });
    }

    Ok(Roster { entries })
}
