//! The blocking loading overlay.
//!
//! A full-screen node whose visibility tracks [`LoadingOverlay::shown`].
//! Confirmation is deliberately one frame behind the request: the pipeline
//! only proceeds once the node is actually visible in the scene graph.

use bevy::prelude::*;
use bevy::ui::GlobalZIndex;

use generation::LoadingOverlay;

#[derive(Component)]
pub struct OverlayRoot;

pub fn setup_overlay(mut commands: Commands) {
    commands
        .spawn((
            OverlayRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.82)),
            GlobalZIndex(100),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Working..."),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Syncs the overlay node with the request flag and reports confirmation
/// once the node is visible.
pub fn sync_overlay(
    mut overlay: ResMut<LoadingOverlay>,
    mut nodes: Query<&mut Visibility, With<OverlayRoot>>,
) {
    let Ok(mut visibility) = nodes.get_single_mut() else {
        return;
    };
    if overlay.shown {
        if *visibility == Visibility::Visible {
            if !overlay.confirmed {
                overlay.confirmed = true;
            }
        } else {
            *visibility = Visibility::Visible;
        }
    } else if *visibility != Visibility::Hidden {
        *visibility = Visibility::Hidden;
    }
}
