//! Selection gizmo drawing - outline boxes around selected objects.

use bevy::prelude::*;

use crate::scene::Selected;
use crate::theme;

use super::pick::PickBounds;
use super::Selection;

/// Wireframe box around each selected object; the active one gets its own
/// color so the copy source is always visible.
pub fn draw_selection_outlines(
    mut gizmos: Gizmos,
    selection: Res<Selection>,
    objects: Query<(Entity, &Transform, &PickBounds), With<Selected>>,
) {
    let active = selection.active();

    for (entity, transform, bounds) in objects.iter() {
        let color = if Some(entity) == active {
            theme::ACTIVE_COLOR
        } else {
            theme::SELECTION_COLOR
        };

        // Slightly inflated so the outline doesn't z-fight the surface
        let outline = Transform {
            translation: transform.translation,
            rotation: transform.rotation,
            scale: transform.scale * bounds.half_extents * 2.0 * 1.02,
        };
        gizmos.cuboid(outline, color);
    }
}
