//! The scene-element builder.
//!
//! Materializes the active world graph as sprites: one province tile per
//! node, a strip per connection, a `Text2d` label per province, and a
//! marker on every start province. [`ProvinceIndex`] and
//! [`ConnectionIndex`] are the registries downstream systems use to find
//! an element by graph id; both record the layout the elements were built
//! against. Connection ids are the indices into the graph's connection
//! list.

use std::collections::HashMap;

use bevy::prelude::*;

use generation::config::{UNIT_X, UNIT_Y};
use generation::layouts::LayoutDescriptor;
use generation::worldgen::{ConnectionKind, Terrain};
use generation::{
    ActiveMap, ElementsBuilt, ElementsRegenerate, LabelVisibility, MapGenerated, Season, Session,
    WipeElements,
};

/// Width of a connection strip, in world units.
const CONNECTION_THICKNESS: f32 = 3.0;

/// Gap between neighboring province tiles.
const TILE_GAP: f32 = 2.0;

#[derive(Component)]
pub struct Province {
    pub id: u32,
    pub terrain: Terrain,
}

#[derive(Component)]
pub struct ConnectionMarker {
    pub id: u32,
    pub kind: ConnectionKind,
}

#[derive(Component)]
pub struct ProvinceLabel;

#[derive(Component)]
pub struct StartMarker;

/// Every entity spawned for the current map, for wholesale wipes.
#[derive(Resource, Default)]
pub struct MapElements {
    pub all: Vec<Entity>,
}

/// Province registry: graph id to entity, plus the active layout.
#[derive(Resource, Default)]
pub struct ProvinceIndex {
    pub entities: HashMap<u32, Entity>,
    pub layout: Option<LayoutDescriptor>,
}

/// Connection registry: connection index to entity, plus the active layout.
#[derive(Resource, Default)]
pub struct ConnectionIndex {
    pub entities: HashMap<u32, Entity>,
    pub layout: Option<LayoutDescriptor>,
}

/// Per-element art variant counters, bumped by partial regeneration so a
/// re-rolled province visibly changes.
#[derive(Resource, Default)]
pub struct ArtVariants {
    pub provinces: HashMap<u32, u32>,
    pub connections: HashMap<u32, u32>,
}

/// Seasonal tile color for a terrain class.
pub fn terrain_color(terrain: Terrain, season: Season) -> Color {
    match (terrain, season) {
        (Terrain::Plains, Season::Summer) => Color::srgb(0.48, 0.71, 0.36),
        (Terrain::Forest, Season::Summer) => Color::srgb(0.20, 0.47, 0.25),
        (Terrain::Highland, Season::Summer) => Color::srgb(0.55, 0.50, 0.44),
        (Terrain::Swamp, Season::Summer) => Color::srgb(0.42, 0.54, 0.40),
        (Terrain::Sea, Season::Summer) => Color::srgb(0.22, 0.42, 0.65),
        (Terrain::Plains, Season::Winter) => Color::srgb(0.85, 0.87, 0.90),
        (Terrain::Forest, Season::Winter) => Color::srgb(0.55, 0.63, 0.60),
        (Terrain::Highland, Season::Winter) => Color::srgb(0.80, 0.80, 0.84),
        (Terrain::Swamp, Season::Winter) => Color::srgb(0.66, 0.69, 0.72),
        (Terrain::Sea, Season::Winter) => Color::srgb(0.30, 0.40, 0.55),
    }
}

/// Seasonal strip color for a connection kind.
pub fn connection_color(kind: ConnectionKind, season: Season) -> Color {
    match (kind, season) {
        (ConnectionKind::Standard, Season::Summer) => Color::srgb(0.25, 0.22, 0.18),
        (ConnectionKind::River, Season::Summer) => Color::srgb(0.30, 0.55, 0.80),
        (ConnectionKind::MountainPass, Season::Summer) => Color::srgb(0.45, 0.36, 0.28),
        (ConnectionKind::Standard, Season::Winter) => Color::srgb(0.40, 0.40, 0.45),
        (ConnectionKind::River, Season::Winter) => Color::srgb(0.60, 0.75, 0.88),
        (ConnectionKind::MountainPass, Season::Winter) => Color::srgb(0.58, 0.52, 0.48),
    }
}

/// Deterministic brightness tweak for a re-rolled element.
pub(crate) fn shaded(color: Color, id: u32, variant: u32) -> Color {
    let hash = id
        .wrapping_add(1)
        .wrapping_mul(2_654_435_761)
        .wrapping_add(variant.wrapping_mul(97));
    let factor = 0.85 + 0.3 * ((hash % 1000) as f32 / 1000.0);
    let srgba = color.to_srgba();
    Color::srgb(
        (srgba.red * factor).min(1.0),
        (srgba.green * factor).min(1.0),
        (srgba.blue * factor).min(1.0),
    )
}

fn label_visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

fn node_center(x: u32, y: u32) -> Vec2 {
    Vec2::new(x as f32 * UNIT_X, y as f32 * UNIT_Y)
}

fn wipe(
    commands: &mut Commands,
    elements: &mut MapElements,
    provinces: &mut ProvinceIndex,
    connections: &mut ConnectionIndex,
) {
    for entity in elements.all.drain(..) {
        commands.entity(entity).despawn();
    }
    provinces.entities.clear();
    connections.entities.clear();
}

/// Explicit wipe order from the pipeline. Idempotent: a no-op when nothing
/// was generated yet.
pub fn handle_wipe(
    mut commands: Commands,
    mut events: EventReader<WipeElements>,
    mut elements: ResMut<MapElements>,
    mut provinces: ResMut<ProvinceIndex>,
    mut connections: ResMut<ConnectionIndex>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.read().for_each(drop);
    wipe(&mut commands, &mut elements, &mut provinces, &mut connections);
    provinces.layout = None;
    connections.layout = None;
}

/// Full rebuild from the committed map.
#[allow(clippy::too_many_arguments)]
pub fn build_elements(
    mut commands: Commands,
    mut events: EventReader<MapGenerated>,
    map: Option<Res<ActiveMap>>,
    session: Res<Session>,
    labels: Res<LabelVisibility>,
    mut elements: ResMut<MapElements>,
    mut provinces: ResMut<ProvinceIndex>,
    mut connections: ResMut<ConnectionIndex>,
    mut variants: ResMut<ArtVariants>,
    mut built: EventWriter<ElementsBuilt>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.read().for_each(drop);
    let Some(map) = map else {
        warn!("element build ordered without an active map");
        return;
    };

    wipe(&mut commands, &mut elements, &mut provinces, &mut connections);
    variants.provinces.clear();
    variants.connections.clear();

    let season = session.season;
    let tile = Vec2::new(UNIT_X - TILE_GAP, UNIT_Y - TILE_GAP);

    for node in &map.graph.nodes {
        let center = node_center(node.x, node.y);
        let entity = commands
            .spawn((
                Province {
                    id: node.id,
                    terrain: node.terrain,
                },
                Sprite {
                    color: terrain_color(node.terrain, season),
                    custom_size: Some(tile),
                    ..default()
                },
                Transform::from_translation(center.extend(1.0)),
            ))
            .id();
        elements.all.push(entity);
        provinces.entities.insert(node.id, entity);

        let label = commands
            .spawn((
                ProvinceLabel,
                Text2d::new(node.id.to_string()),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_translation(center.extend(3.0)),
                label_visibility(labels.0),
            ))
            .id();
        elements.all.push(label);

        if node.start.is_some() {
            let marker = commands
                .spawn((
                    StartMarker,
                    Sprite {
                        color: Color::srgb(0.93, 0.79, 0.22),
                        custom_size: Some(Vec2::splat(UNIT_X * 0.3)),
                        ..default()
                    },
                    Transform::from_translation(
                        (center + Vec2::new(0.0, -UNIT_Y * 0.22)).extend(2.0),
                    ),
                ))
                .id();
            elements.all.push(marker);
        }
    }

    for (index, conn) in map.graph.connections.iter().enumerate() {
        let a = &map.graph.nodes[conn.a as usize];
        let b = &map.graph.nodes[conn.b as usize];
        let from = node_center(a.x, a.y);
        let to = node_center(b.x, b.y);
        let delta = to - from;
        let midpoint = (from + to) / 2.0;

        let entity = commands
            .spawn((
                ConnectionMarker {
                    id: index as u32,
                    kind: conn.kind,
                },
                Sprite {
                    color: connection_color(conn.kind, season),
                    custom_size: Some(Vec2::new(delta.length(), CONNECTION_THICKNESS)),
                    ..default()
                },
                Transform::from_translation(midpoint.extend(0.5))
                    .with_rotation(Quat::from_rotation_z(delta.y.atan2(delta.x))),
            ))
            .id();
        elements.all.push(entity);
        connections.entities.insert(index as u32, entity);
    }

    provinces.layout = Some(map.layout.clone());
    connections.layout = Some(map.layout.clone());
    built.send(ElementsBuilt);
}

/// Partial rebuild: re-roll the art of the listed provinces/connections
/// against the active layout.
pub fn regen_elements(
    mut events: EventReader<ElementsRegenerate>,
    map: Option<Res<ActiveMap>>,
    session: Res<Session>,
    provinces: Res<ProvinceIndex>,
    connections: Res<ConnectionIndex>,
    mut variants: ResMut<ArtVariants>,
    mut sprites: Query<&mut Sprite>,
    mut built: EventWriter<ElementsBuilt>,
) {
    let Some(order) = events.read().next().cloned() else {
        return;
    };
    events.read().for_each(drop);
    let Some(map) = map else {
        warn!("partial regeneration ordered without an active map");
        return;
    };

    let season = session.season;
    for id in order.provinces {
        let (Some(&entity), Some(node)) =
            (provinces.entities.get(&id), map.graph.nodes.get(id as usize))
        else {
            continue;
        };
        let variant = variants.provinces.entry(id).and_modify(|v| *v += 1).or_insert(1);
        if let Ok(mut sprite) = sprites.get_mut(entity) {
            sprite.color = shaded(terrain_color(node.terrain, season), id, *variant);
        }
    }
    for id in order.connections {
        let (Some(&entity), Some(conn)) = (
            connections.entities.get(&id),
            map.graph.connections.get(id as usize),
        ) else {
            continue;
        };
        let variant = variants.connections.entry(id).and_modify(|v| *v += 1).or_insert(1);
        if let Ok(mut sprite) = sprites.get_mut(entity) {
            sprite.color = shaded(connection_color(conn.kind, season), id, *variant);
        }
    }
    built.send(ElementsBuilt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shading_is_deterministic_per_id_and_variant() {
        let base = terrain_color(Terrain::Plains, Season::Summer);
        assert_eq!(shaded(base, 3, 1), shaded(base, 3, 1));
        assert_ne!(shaded(base, 3, 1), shaded(base, 3, 2));
        assert_ne!(shaded(base, 3, 1), shaded(base, 4, 1));
    }

    #[test]
    fn seasonal_palettes_differ() {
        for terrain in Terrain::ALL {
            assert_ne!(
                terrain_color(terrain, Season::Summer),
                terrain_color(terrain, Season::Winter),
                "{} must change with the season",
                terrain.name()
            );
        }
    }
}
