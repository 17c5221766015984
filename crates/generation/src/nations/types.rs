use serde::{Deserialize, Serialize};

/// Historical era a nation belongs to. The UI offers one era at a time and
/// nation pickers only list nations of the selected era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Early,
    Middle,
    Late,
}

impl Era {
    /// Display name for dropdowns.
    pub fn name(self) -> &'static str {
        match self {
            Era::Early => "Early Era",
            Era::Middle => "Middle Era",
            Era::Late => "Late Era",
        }
    }

    pub const ALL: [Era; 3] = [Era::Early, Era::Middle, Era::Late];
}

/// One entry of the nation catalog.
///
/// Identity is the name: roster uniqueness is checked on it. Generic
/// entries carry no real nation identity and are exempt from the
/// uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nation {
    pub name: &'static str,
    pub era: Era,
    pub generic: bool,
}
