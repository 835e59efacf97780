//! Object selection for the editor.
//!
//! Selection order matters: the *active* object (copy source, inspector
//! focus) is the most recently selected one, and batch operations visit
//! targets in selection order. The ordered list lives in [`Selection`]; a
//! [`Selected`](crate::scene::Selected) marker component mirrors membership
//! for query filtering and is kept in sync every frame.

mod gizmos;
mod pick;
mod shortcuts;

use bevy::prelude::*;

use crate::scene::{SceneObject, Selected};

pub use gizmos::draw_selection_outlines;
pub use pick::{handle_viewport_pick, ray_aabb_intersection, world_aabb, PickBounds};
pub use shortcuts::{handle_deletion, handle_escape_clear_selection};

/// Ordered selection; last entry is the active object.
#[derive(Resource, Default)]
pub struct Selection {
    order: Vec<Entity>,
}

impl Selection {
    /// The active object: most recently selected.
    pub fn active(&self) -> Option<Entity> {
        self.order.last().copied()
    }

    /// All selected objects, oldest selection first.
    pub fn targets(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    pub fn is_selected(&self, entity: Entity) -> bool {
        self.order.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Exclusive select: `entity` becomes the only (and active) selection.
    pub fn click(&mut self, entity: Entity) {
        self.order.clear();
        self.order.push(entity);
    }

    /// Extend-select. An unselected object is added and becomes active; the
    /// active object is deselected; any other selected object is promoted
    /// to active.
    pub fn shift_click(&mut self, entity: Entity) {
        match self.order.iter().position(|e| *e == entity) {
            Some(pos) if pos + 1 == self.order.len() => {
                self.order.pop();
            }
            Some(pos) => {
                self.order.remove(pos);
                self.order.push(entity);
            }
            None => self.order.push(entity),
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn remove(&mut self, entity: Entity) {
        self.order.retain(|e| *e != entity);
    }
}

/// Drops despawned entities from the selection while preserving order.
pub fn prune_selection(mut selection: ResMut<Selection>, objects: Query<(), With<SceneObject>>) {
    let stale = selection
        .order
        .iter()
        .any(|entity| objects.get(*entity).is_err());
    if stale {
        selection.order.retain(|entity| objects.get(*entity).is_ok());
    }
}

/// Mirrors [`Selection`] membership onto [`Selected`] marker components.
pub fn sync_selected_markers(
    mut commands: Commands,
    selection: Res<Selection>,
    objects: Query<Entity, With<SceneObject>>,
    selected: Query<Entity, With<Selected>>,
) {
    for entity in selected.iter() {
        if !selection.is_selected(entity) {
            commands.entity(entity).remove::<Selected>();
        }
    }
    for entity in selection.targets() {
        if objects.get(entity).is_ok() && selected.get(entity).is_err() {
            commands.entity(entity).insert(Selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_empty_selection_has_no_active() {
        let selection = Selection::default();
        assert_eq!(selection.active(), None);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_click_is_exclusive() {
        let e = entities(2);
        let mut selection = Selection::default();
        selection.click(e[0]);
        selection.click(e[1]);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.active(), Some(e[1]));
        assert!(!selection.is_selected(e[0]));
    }

    #[test]
    fn test_shift_click_extends_and_activates() {
        let e = entities(3);
        let mut selection = Selection::default();
        selection.click(e[0]);
        selection.shift_click(e[1]);
        selection.shift_click(e[2]);

        assert_eq!(selection.len(), 3);
        assert_eq!(selection.active(), Some(e[2]));
        let order: Vec<_> = selection.targets().collect();
        assert_eq!(order, vec![e[0], e[1], e[2]]);
    }

    #[test]
    fn test_shift_click_active_deselects_it() {
        let e = entities(2);
        let mut selection = Selection::default();
        selection.click(e[0]);
        selection.shift_click(e[1]);
        selection.shift_click(e[1]);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.active(), Some(e[0]));
    }

    #[test]
    fn test_shift_click_selected_promotes_to_active() {
        let e = entities(3);
        let mut selection = Selection::default();
        selection.click(e[0]);
        selection.shift_click(e[1]);
        selection.shift_click(e[2]);
        selection.shift_click(e[0]);

        assert_eq!(selection.active(), Some(e[0]));
        // Still three selected, order updated
        let order: Vec<_> = selection.targets().collect();
        assert_eq!(order, vec![e[1], e[2], e[0]]);
    }

    #[test]
    fn test_remove_preserves_remaining_order() {
        let e = entities(3);
        let mut selection = Selection::default();
        selection.click(e[0]);
        selection.shift_click(e[1]);
        selection.shift_click(e[2]);
        selection.remove(e[1]);

        let order: Vec<_> = selection.targets().collect();
        assert_eq!(order, vec![e[0], e[2]]);
        assert_eq!(selection.active(), Some(e[2]));
    }

    #[test]
    fn test_removing_active_promotes_previous() {
        let e = entities(2);
        let mut selection = Selection::default();
        selection.click(e[0]);
        selection.shift_click(e[1]);
        selection.remove(e[1]);

        assert_eq!(selection.active(), Some(e[0]));
    }
}
