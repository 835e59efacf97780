//! Core identity components for editable objects.

use bevy::prelude::*;

/// Marks an entity as an editable scene object and carries its display name.
///
/// Attribute components ([`ObjectTransform`](super::ObjectTransform),
/// [`ModifierStack`](super::ModifierStack), and friends) only mean anything
/// on entities that also carry this.
#[derive(Component, Debug, Clone)]
pub struct SceneObject {
    pub name: String,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Marker for objects in the current selection. Kept in sync with
/// [`Selection`](crate::editor::select::Selection) so render-side systems can
/// filter without touching the ordered list.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Selected;
