//! Object parenting: the parent link component, cycle detection, world
//! matrix resolution, and the interactive parent/clear operations.
//!
//! A parented object's world matrix is `parent_world * inverse * local`.
//! The inverse matrix is captured when the link is made: the parent's
//! inverted world matrix for [`ParentMode::KeepTransform`] (the child stays
//! put visually), or identity for [`ParentMode::WithoutInverse`] (the child
//! re-evaluates directly under the parent's frame).

use bevy::prelude::*;
use std::collections::HashMap;

use crate::constants::MAX_PARENT_DEPTH;
use crate::editor::select::Selection;
use crate::editor::status::StatusLog;

use super::object::SceneObject;
use super::transform::ObjectTransform;

/// How a parent link interprets the child's local transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentMode {
    /// Inverse captured from the parent's world matrix, so the child keeps
    /// its world placement at the moment of parenting.
    #[default]
    KeepTransform,
    /// Identity inverse; the child's local transform is re-read relative to
    /// the parent.
    WithoutInverse,
}

impl ParentMode {
    pub fn all() -> [ParentMode; 2] {
        [ParentMode::KeepTransform, ParentMode::WithoutInverse]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ParentMode::KeepTransform => "Keep Transform",
            ParentMode::WithoutInverse => "Without Inverse",
        }
    }
}

/// Parent relationship of a scene object. Present on every object;
/// `parent: None` means the object is a root.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ParentLink {
    pub parent: Option<Entity>,
    pub mode: ParentMode,
    pub inverse: Mat4,
}

impl Default for ParentLink {
    fn default() -> Self {
        Self {
            parent: None,
            mode: ParentMode::KeepTransform,
            inverse: Mat4::IDENTITY,
        }
    }
}

/// One object's contribution to the matrix chain, snapshot form so matrix
/// resolution and cycle checks can run over plain lookups.
#[derive(Debug, Clone, Copy)]
pub struct LocalFrame {
    pub local: Mat4,
    pub parent: Option<Entity>,
    pub inverse: Mat4,
}

/// Resolves an object's world matrix by walking its parent chain.
///
/// `fetch` returns the frame for an entity, or `None` for entities that no
/// longer exist; a missing parent terminates the walk as if the child were a
/// root. The walk stops at [`MAX_PARENT_DEPTH`] links so a malformed chain
/// cannot hang the frame.
pub fn resolve_world_matrix(
    entity: Entity,
    fetch: &impl Fn(Entity) -> Option<LocalFrame>,
) -> Mat4 {
    let Some(frame) = fetch(entity) else {
        return Mat4::IDENTITY;
    };

    let mut world = frame.local;
    let mut next = frame.parent.map(|parent| (parent, frame.inverse));
    let mut depth = 0usize;

    while let Some((parent, inverse)) = next {
        depth += 1;
        if depth > MAX_PARENT_DEPTH {
            break;
        }
        let Some(parent_frame) = fetch(parent) else {
            break;
        };
        world = parent_frame.local * inverse * world;
        next = parent_frame.parent.map(|p| (p, parent_frame.inverse));
    }

    world
}

/// True when parenting `child` under `new_parent` would make `child` its own
/// ancestor. Walks upward from `new_parent`; an already-degenerate chain
/// (deeper than [`MAX_PARENT_DEPTH`]) is treated as a cycle rather than
/// extended.
pub fn would_create_cycle(
    child: Entity,
    new_parent: Entity,
    parent_of: &impl Fn(Entity) -> Option<Entity>,
) -> bool {
    if child == new_parent {
        return true;
    }

    let mut current = parent_of(new_parent);
    for _ in 0..MAX_PARENT_DEPTH {
        match current {
            Some(ancestor) if ancestor == child => return true,
            Some(ancestor) => current = parent_of(ancestor),
            None => return false,
        }
    }

    true
}

/// Parent every other selected object to the active one.
#[derive(Message)]
pub struct ParentToActiveRequest {
    pub mode: ParentMode,
}

/// Reset the parent link of every selected object.
#[derive(Message)]
pub struct ClearParentRequest;

pub fn handle_parent_to_active(
    mut requests: MessageReader<ParentToActiveRequest>,
    selection: Res<Selection>,
    mut objects: Query<(Entity, &ObjectTransform, &mut ParentLink), With<SceneObject>>,
    names: Query<&SceneObject>,
    mut status: ResMut<StatusLog>,
) {
    for request in requests.read() {
        let Some(active) = selection.active() else {
            status.warn("Nothing selected to parent to");
            continue;
        };

        let children: Vec<Entity> = selection.targets().filter(|e| *e != active).collect();
        if children.is_empty() {
            status.warn("Select at least one other object to parent");
            continue;
        }

        // Snapshot all frames before writing any link, so the matrix and
        // cycle lookups see a consistent scene.
        let mut frames: HashMap<Entity, LocalFrame> = HashMap::new();
        for (entity, transform, link) in objects.iter() {
            frames.insert(
                entity,
                LocalFrame {
                    local: transform.local_matrix(),
                    parent: link.parent,
                    inverse: link.inverse,
                },
            );
        }
        let fetch = |entity: Entity| frames.get(&entity).copied();
        let parent_of = |entity: Entity| frames.get(&entity).and_then(|f| f.parent);

        let inverse = match request.mode {
            ParentMode::KeepTransform => resolve_world_matrix(active, &fetch).inverse(),
            ParentMode::WithoutInverse => Mat4::IDENTITY,
        };

        let active_name = names
            .get(active)
            .map(|o| o.name.clone())
            .unwrap_or_else(|_| "object".to_string());

        let mut applied = 0usize;
        for child in children {
            if would_create_cycle(child, active, &parent_of) {
                let child_name = names
                    .get(child)
                    .map(|o| o.name.as_str())
                    .unwrap_or("object");
                status.warn(format!(
                    "Cannot parent '{}' to '{}': would create a cycle",
                    child_name, active_name
                ));
                continue;
            }
            if let Ok((_, _, mut link)) = objects.get_mut(child) {
                *link = ParentLink {
                    parent: Some(active),
                    mode: request.mode,
                    inverse,
                };
                applied += 1;
            }
        }

        if applied > 0 {
            status.info(format!(
                "Parented {} object(s) to '{}' ({})",
                applied,
                active_name,
                request.mode.display_name()
            ));
        }
    }
}

pub fn handle_clear_parent(
    mut requests: MessageReader<ClearParentRequest>,
    selection: Res<Selection>,
    mut links: Query<&mut ParentLink, With<SceneObject>>,
    mut status: ResMut<StatusLog>,
) {
    for _ in requests.read() {
        let mut cleared = 0usize;
        for target in selection.targets() {
            if let Ok(mut link) = links.get_mut(target)
                && link.parent.is_some()
            {
                *link = ParentLink::default();
                cleared += 1;
            }
        }
        if cleared > 0 {
            status.info(format!("Cleared parent on {} object(s)", cleared));
        } else {
            status.warn("No parented objects selected");
        }
    }
}

/// Resets links whose parent entity no longer exists, e.g. after a delete.
pub fn prune_dangling_parents(
    mut links: Query<&mut ParentLink>,
    objects: Query<(), With<SceneObject>>,
) {
    for mut link in links.iter_mut() {
        if let Some(parent) = link.parent
            && objects.get(parent).is_err()
        {
            *link = ParentLink::default();
        }
    }
}
