//! Province label visibility.

use bevy::prelude::*;

use generation::LabelVisibility;

use crate::elements::ProvinceLabel;

/// Applies the shared [`LabelVisibility`] flag onto label entities.
pub fn sync_label_visibility(
    labels: Res<LabelVisibility>,
    mut query: Query<&mut Visibility, With<ProvinceLabel>>,
) {
    if !labels.is_changed() {
        return;
    }
    let target = if labels.0 {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in query.iter_mut() {
        *visibility = target;
    }
}
