use bevy::prelude::*;

use super::types::{Era, Nation};

/// Built-in nation table, in catalog order. Order matters: the UI lists
/// nations in this order and tests rely on it being stable.
const NATIONS: &[Nation] = &[
    // Early era
    Nation { name: "Vorland", era: Era::Early, generic: false },
    Nation { name: "Kalessin", era: Era::Early, generic: false },
    Nation { name: "Tyrshea", era: Era::Early, generic: false },
    Nation { name: "Ombrac", era: Era::Early, generic: false },
    Nation { name: "Heligard", era: Era::Early, generic: false },
    Nation { name: "Sarkand", era: Era::Early, generic: false },
    Nation { name: "Muspel", era: Era::Early, generic: false },
    Nation { name: "Querenth", era: Era::Early, generic: false },
    Nation { name: "Drowned Court", era: Era::Early, generic: false },
    Nation { name: "Ashmarch", era: Era::Early, generic: false },
    Nation { name: "Vellamo", era: Era::Early, generic: false },
    Nation { name: "Iron Covenant", era: Era::Early, generic: false },
    Nation { name: "Sunward Host", era: Era::Early, generic: false },
    Nation { name: "Palegrove", era: Era::Early, generic: false },
    Nation { name: "Korvast", era: Era::Early, generic: false },
    Nation { name: "Nioth", era: Era::Early, generic: false },
    // Middle era
    Nation { name: "Vorland Reborn", era: Era::Middle, generic: false },
    Nation { name: "Kalessin Ascendant", era: Era::Middle, generic: false },
    Nation { name: "Tyrshea Divided", era: Era::Middle, generic: false },
    Nation { name: "New Ombrac", era: Era::Middle, generic: false },
    Nation { name: "Heligard in Exile", era: Era::Middle, generic: false },
    Nation { name: "Sarkand Emirates", era: Era::Middle, generic: false },
    Nation { name: "Ember Kingdoms", era: Era::Middle, generic: false },
    Nation { name: "Querenth Remnant", era: Era::Middle, generic: false },
    Nation { name: "Tideborn League", era: Era::Middle, generic: false },
    Nation { name: "Greymarch", era: Era::Middle, generic: false },
    Nation { name: "Vellamo Compact", era: Era::Middle, generic: false },
    Nation { name: "Broken Covenant", era: Era::Middle, generic: false },
    Nation { name: "Duskward Host", era: Era::Middle, generic: false },
    Nation { name: "Thorngrove", era: Era::Middle, generic: false },
    // Late era
    Nation { name: "Last Vorland", era: Era::Late, generic: false },
    Nation { name: "Kalessin Eternal", era: Era::Late, generic: false },
    Nation { name: "Tyrshea Unbound", era: Era::Late, generic: false },
    Nation { name: "Ombrac Below", era: Era::Late, generic: false },
    Nation { name: "Heligard Restored", era: Era::Late, generic: false },
    Nation { name: "Sarkand Sultanate", era: Era::Late, generic: false },
    Nation { name: "Cinder Throne", era: Era::Late, generic: false },
    Nation { name: "Querenth Awakened", era: Era::Late, generic: false },
    Nation { name: "Abyssal Court", era: Era::Late, generic: false },
    Nation { name: "Winter March", era: Era::Late, generic: false },
    Nation { name: "Vellamo Free Cities", era: Era::Late, generic: false },
    Nation { name: "Starward Host", era: Era::Late, generic: false },
    // Generic starts (no real nation identity; duplicates allowed)
    Nation { name: "Generic Start", era: Era::Early, generic: true },
    Nation { name: "Generic Throne", era: Era::Early, generic: true },
    Nation { name: "Generic Fortress", era: Era::Early, generic: true },
];

/// In-memory catalog of known nations.
///
/// Backed by the built-in table; `lookup` is how slot picks are resolved
/// and `iter_for` is how pickers are populated.
#[derive(Resource, Debug)]
pub struct NationCatalog {
    nations: &'static [Nation],
}

impl Default for NationCatalog {
    fn default() -> Self {
        Self { nations: NATIONS }
    }
}

impl NationCatalog {
    /// Resolve a nation by exact name.
    pub fn lookup(&self, name: &str) -> Option<&Nation> {
        self.nations.iter().find(|n| n.name == name)
    }

    /// Nations a picker should offer: the generic pool when
    /// `generic_only` is set, otherwise the non-generic nations of `era`.
    /// Catalog order is preserved.
    pub fn iter_for(&self, era: Era, generic_only: bool) -> impl Iterator<Item = &Nation> {
        self.nations.iter().filter(move |n| {
            if generic_only {
                n.generic
            } else {
                !n.generic && n.era == era
            }
        })
    }

    pub fn len(&self) -> usize {
        self.nations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nations.is_empty()
    }
}
