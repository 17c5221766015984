use super::{Era, NationCatalog};

#[test]
fn lookup_resolves_known_nation() {
    let catalog = NationCatalog::default();
    let nation = catalog.lookup("Vorland").expect("Vorland is in the table");
    assert_eq!(nation.era, Era::Early);
    assert!(!nation.generic);
}

#[test]
fn lookup_rejects_unknown_nation() {
    let catalog = NationCatalog::default();
    assert!(catalog.lookup("Atlantis of the Deeps").is_none());
}

#[test]
fn era_filter_excludes_other_eras_and_generics() {
    let catalog = NationCatalog::default();
    let early: Vec<_> = catalog.iter_for(Era::Early, false).collect();
    assert!(!early.is_empty());
    assert!(early.iter().all(|n| n.era == Era::Early && !n.generic));
}

#[test]
fn generic_only_filter_returns_only_generics() {
    let catalog = NationCatalog::default();
    let generics: Vec<_> = catalog.iter_for(Era::Early, true).collect();
    assert!(!generics.is_empty());
    assert!(generics.iter().all(|n| n.generic));
    // The generic pool ignores the era argument.
    let generics_late: Vec<_> = catalog.iter_for(Era::Late, true).collect();
    assert_eq!(generics.len(), generics_late.len());
}

#[test]
fn catalog_order_is_stable() {
    let catalog = NationCatalog::default();
    let first: Vec<&str> = catalog.iter_for(Era::Early, false).map(|n| n.name).collect();
    let second: Vec<&str> = catalog.iter_for(Era::Early, false).map(|n| n.name).collect();
    assert_eq!(first, second);
    assert_eq!(first[0], "Vorland");
}
