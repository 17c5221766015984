use crate::nations::NationCatalog;

use super::{validate_picks, RosterError, SlotPick};

fn picks(names: &[&str]) -> Vec<SlotPick> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| SlotPick::new(*name, i as u32))
        .collect()
}

#[test]
fn accepts_distinct_nations_in_slot_order() {
    let catalog = NationCatalog::default();
    let roster = validate_picks(&picks(&["Vorland", "Kalessin", "Tyrshea"]), &catalog, false)
        .expect("distinct picks validate");
    assert_eq!(roster.len(), 3);
    assert_eq!(roster.entries()[0].nation.name, "Vorland");
    assert_eq!(roster.entries()[2].nation.name, "Tyrshea");
    assert_eq!(roster.entries()[2].team, 2);
}

#[test]
fn rejects_duplicate_nation_without_generic_starts() {
    let catalog = NationCatalog::default();
    let err = validate_picks(&picks(&["Vorland", "Kalessin", "Vorland"]), &catalog, false)
        .unwrap_err();
    assert_eq!(err, RosterError::DuplicateNation("Vorland".to_string()));
}

#[test]
fn accepts_duplicate_nation_with_generic_starts() {
    let catalog = NationCatalog::default();
    let roster = validate_picks(
        &picks(&["Generic Start", "Generic Start", "Generic Start"]),
        &catalog,
        true,
    )
    .expect("generic starts allow duplicates");
    assert_eq!(roster.len(), 3);
}

#[test]
fn rejects_unknown_nation() {
    let catalog = NationCatalog::default();
    let err = validate_picks(&picks(&["Vorland", "Nowhereland"]), &catalog, false).unwrap_err();
    assert_eq!(err, RosterError::UnknownNation("Nowhereland".to_string()));
}

#[test]
fn rejection_commits_nothing() {
    // The whole request fails; no partial roster escapes.
    let catalog = NationCatalog::default();
    let result = validate_picks(&picks(&["Vorland", "Vorland", "Kalessin"]), &catalog, false);
    assert!(result.is_err());
}

#[test]
fn empty_pick_list_yields_empty_roster() {
    let catalog = NationCatalog::default();
    let roster = validate_picks(&[], &catalog, false).unwrap();
    assert!(roster.is_empty());
}
