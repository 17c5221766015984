use super::{LayoutCatalog, LayoutDescriptor, LayoutError};

fn catalog(entries: &[(&str, usize)]) -> LayoutCatalog {
    LayoutCatalog::from_layouts(
        entries
            .iter()
            .map(|(name, players)| LayoutDescriptor::new(name, *players, 10, 10))
            .collect(),
    )
}

#[test]
fn exact_match_beats_player_count_fallback() {
    let catalog = catalog(&[("Classic", 6), ("Classic", 4), ("Archipelago", 4)]);
    let layout = catalog.resolve("Classic", 4).unwrap();
    assert_eq!(layout.name, "Classic");
    assert_eq!(layout.players, 4);
}

#[test]
fn falls_back_to_first_layout_with_matching_player_count() {
    let catalog = catalog(&[("Classic", 6), ("Archipelago", 4), ("Highlands", 4)]);
    // "Classic" has no 4-player entry; the first 4-player layout wins.
    let layout = catalog.resolve("Classic", 4).unwrap();
    assert_eq!(layout.name, "Archipelago");
}

#[test]
fn resolution_fails_when_no_player_count_match_exists() {
    let catalog = catalog(&[("Classic", 4)]);
    let err = catalog.resolve("Classic", 5).unwrap_err();
    assert_eq!(err, LayoutError::NoMatch { players: 5 });
}

#[test]
fn resolution_is_deterministic_over_catalog_order() {
    let catalog = catalog(&[("A", 4), ("B", 4), ("C", 4)]);
    for _ in 0..3 {
        assert_eq!(catalog.resolve("missing", 4).unwrap().name, "A");
    }
}

#[test]
fn builtin_catalog_covers_supported_player_counts() {
    let catalog = LayoutCatalog::default();
    for players in 2..=16 {
        assert!(
            catalog.resolve("Sprawl", players).is_ok(),
            "no built-in layout for {players} players"
        );
    }
}

#[test]
fn descriptor_round_trips_through_json() {
    let layout = LayoutDescriptor::new("Classic", 4, 12, 9);
    let json = serde_json::to_string(&layout).unwrap();
    let back: LayoutDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, layout);
}

#[test]
fn water_share_defaults_when_absent_from_json() {
    let json = r#"{"name": "Classic", "players": 4, "width": 12, "height": 9}"#;
    let layout: LayoutDescriptor = serde_json::from_str(json).unwrap();
    assert!((layout.water_share - 0.3).abs() < f32::EPSILON);
}
