//! Roster validation.
//!
//! Turns raw per-slot (nation, team) picks into a committed roster, or
//! rejects the whole request. Validation is a pure function; the pipeline
//! request handler decides what the rejection looks like to the user
//! (deny sound, untouched session roster).

mod validate;

#[cfg(test)]
mod tests;

pub use validate::{validate_picks, Roster, RosterEntry, RosterError, SlotPick};
