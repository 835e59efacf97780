//! Material slots and the shared material library.
//!
//! Materials are shared resources: a slot holds a [`Handle`] into
//! `Assets<StandardMaterial>`, and copying a slot clones the handle, never
//! the material. After a paste, source and targets reference the same
//! underlying asset; editing it would change all of them at once.

use bevy::prelude::*;

/// Ordered material slots on an object. Slot 0 is what the mesh renders with;
/// an empty list falls back to the library's placeholder material.
#[derive(Component, Debug, Clone, Default)]
pub struct MaterialSlots(pub Vec<Handle<StandardMaterial>>);

/// Named shared materials created once at startup.
///
/// Handles are never duplicated per object; the library is the single owner
/// of the name→handle association, which the inspector and clipboard
/// summaries use for display.
#[derive(Resource, Default)]
pub struct MaterialLibrary {
    entries: Vec<(String, Handle<StandardMaterial>)>,
    /// Render fallback for objects with no slots
    pub fallback: Handle<StandardMaterial>,
}

impl MaterialLibrary {
    pub fn insert(&mut self, name: impl Into<String>, handle: Handle<StandardMaterial>) {
        self.entries.push((name.into(), handle));
    }

    pub fn get(&self, name: &str) -> Option<Handle<StandardMaterial>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| h.clone())
    }

    /// Display name of a shared handle, if it came from the library
    pub fn name_of(&self, handle: &Handle<StandardMaterial>) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, h)| h == handle)
            .map(|(n, _)| n.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library_with(names: &[&str]) -> (MaterialLibrary, Vec<Handle<StandardMaterial>>) {
        let mut assets: Assets<StandardMaterial> = Assets::default();
        let mut library = MaterialLibrary::default();
        let mut handles = Vec::new();
        for name in names {
            let handle = assets.add(StandardMaterial::default());
            library.insert(*name, handle.clone());
            handles.push(handle);
        }
        (library, handles)
    }

    #[test]
    fn test_lookup_by_name_and_handle() {
        let (library, handles) = library_with(&["Brass", "Jade"]);

        assert_eq!(library.get("Jade"), Some(handles[1].clone()));
        assert_eq!(library.name_of(&handles[0]), Some("Brass"));
        assert_eq!(library.get("Chrome"), None);
    }

    #[test]
    fn test_get_returns_aliasing_handle() {
        let (library, handles) = library_with(&["Brass"]);
        // Clones of one handle compare equal: same underlying asset
        assert_eq!(library.get("Brass").unwrap(), handles[0]);
    }

    #[test]
    fn test_names_in_insertion_order() {
        let (library, _) = library_with(&["Brass", "Copper", "Jade"]);
        let names: Vec<_> = library.names().collect();
        assert_eq!(names, vec!["Brass", "Copper", "Jade"]);
    }

    #[test]
    fn test_material_slots_default_empty() {
        assert!(MaterialSlots::default().0.is_empty());
    }
}
