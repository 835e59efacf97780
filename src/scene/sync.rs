//! Keeps the render side in step with the authored attributes.
//!
//! Object state lives in [`ObjectTransform`], [`ParentLink`] and
//! [`MaterialSlots`]; these systems project it onto Bevy's `Transform` and
//! `MeshMaterial3d` every frame so edits and pastes show up immediately.

use bevy::prelude::*;
use std::collections::HashMap;

use super::material::{MaterialLibrary, MaterialSlots};
use super::object::SceneObject;
use super::parenting::{resolve_world_matrix, LocalFrame, ParentLink};
use super::transform::ObjectTransform;

/// Rebuilds world transforms from the local frames and parent links.
///
/// Runs over the whole scene rather than change-filtered: moving a parent
/// must reposition children whose own components did not change.
pub fn sync_render_transforms(
    frames: Query<(Entity, &ObjectTransform, &ParentLink), With<SceneObject>>,
    mut renders: Query<(Entity, &mut Transform), With<SceneObject>>,
) {
    let map: HashMap<Entity, LocalFrame> = frames
        .iter()
        .map(|(entity, transform, link)| {
            (
                entity,
                LocalFrame {
                    local: transform.local_matrix(),
                    parent: link.parent,
                    inverse: link.inverse,
                },
            )
        })
        .collect();
    let fetch = |entity: Entity| map.get(&entity).copied();

    for (entity, mut transform) in renders.iter_mut() {
        let world = Transform::from_matrix(resolve_world_matrix(entity, &fetch));
        if *transform != world {
            *transform = world;
        }
    }
}

/// Applies slot 0 to the mesh, falling back to the library placeholder when
/// the slot list is empty.
pub fn sync_material_slots(
    library: Res<MaterialLibrary>,
    mut objects: Query<
        (&MaterialSlots, &mut MeshMaterial3d<StandardMaterial>),
        (With<SceneObject>, Changed<MaterialSlots>),
    >,
) {
    for (slots, mut render) in objects.iter_mut() {
        let desired = slots
            .0
            .first()
            .cloned()
            .unwrap_or_else(|| library.fallback.clone());
        if render.0 != desired {
            render.0 = desired;
        }
    }
}
