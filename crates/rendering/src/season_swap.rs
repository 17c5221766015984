//! Seasonal palette swap.
//!
//! Recolors every province tile and connection strip when the session
//! season changes, then raises the [`SeasonSwap`] readiness flag. The swap
//! is asynchronous relative to the toggle: anything that needs the new
//! season on screen must wait for `just_changed`.

use bevy::prelude::*;

use generation::{SeasonChanged, SeasonSwap};

use crate::elements::{connection_color, terrain_color, ConnectionMarker, Province};

pub fn apply_season_swap(
    mut events: EventReader<SeasonChanged>,
    mut swap: ResMut<SeasonSwap>,
    mut provinces: Query<(&Province, &mut Sprite), Without<ConnectionMarker>>,
    mut connections: Query<(&ConnectionMarker, &mut Sprite), Without<Province>>,
) {
    // Collapse a burst of toggles into the final season.
    let Some(event) = events.read().last().copied() else {
        return;
    };

    for (province, mut sprite) in provinces.iter_mut() {
        sprite.color = terrain_color(province.terrain, event.season);
    }
    for (connection, mut sprite) in connections.iter_mut() {
        sprite.color = connection_color(connection.kind, event.season);
    }
    swap.just_changed = true;
}
