//! Modifier stacks: ordered, named mesh operators attached to an object.
//!
//! The sandbox does not evaluate modifiers; they are authored metadata with
//! per-kind parameter bags so the clipboard's shallow-copy behavior (name and
//! kind survive, parameters do not) is observable.

use std::collections::BTreeMap;

use bevy::prelude::*;

use super::properties::PropValue;

/// The supported modifier kinds, a small fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Subdivision,
    Mirror,
    Array,
    Solidify,
    Bevel,
    Decimate,
}

impl ModifierKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ModifierKind::Subdivision => "Subdivision",
            ModifierKind::Mirror => "Mirror",
            ModifierKind::Array => "Array",
            ModifierKind::Solidify => "Solidify",
            ModifierKind::Bevel => "Bevel",
            ModifierKind::Decimate => "Decimate",
        }
    }

    pub fn all() -> &'static [ModifierKind] {
        &[
            ModifierKind::Subdivision,
            ModifierKind::Mirror,
            ModifierKind::Array,
            ModifierKind::Solidify,
            ModifierKind::Bevel,
            ModifierKind::Decimate,
        ]
    }

    /// Parameter bag a fresh instance of this kind starts with.
    pub fn default_params(&self) -> BTreeMap<String, PropValue> {
        let mut params = BTreeMap::new();
        match self {
            ModifierKind::Subdivision => {
                params.insert("levels".into(), PropValue::Int(1));
            }
            ModifierKind::Mirror => {
                params.insert("axis".into(), PropValue::Text("X".into()));
            }
            ModifierKind::Array => {
                params.insert("count".into(), PropValue::Int(2));
                params.insert("offset".into(), PropValue::Float(1.0));
            }
            ModifierKind::Solidify => {
                params.insert("thickness".into(), PropValue::Float(0.01));
            }
            ModifierKind::Bevel => {
                params.insert("width".into(), PropValue::Float(0.1));
                params.insert("segments".into(), PropValue::Int(2));
            }
            ModifierKind::Decimate => {
                params.insert("ratio".into(), PropValue::Float(1.0));
            }
        }
        params
    }
}

/// A single modifier instance on an object's stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub name: String,
    pub kind: ModifierKind,
    /// Kind-specific settings. Deliberately not carried by the attribute
    /// clipboard: a pasted modifier starts over from `default_params`.
    pub params: BTreeMap<String, PropValue>,
}

impl Modifier {
    /// Fresh instance named after its kind, with default parameters.
    pub fn new(kind: ModifierKind) -> Self {
        Self {
            name: kind.display_name().to_string(),
            kind,
            params: kind.default_params(),
        }
    }

    /// Fresh instance with an explicit name (used by paste, which re-creates
    /// stored modifiers under their original names).
    pub fn named(name: impl Into<String>, kind: ModifierKind) -> Self {
        Self {
            name: name.into(),
            kind,
            params: kind.default_params(),
        }
    }
}

/// Ordered modifier stack component.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ModifierStack(pub Vec<Modifier>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_modifier_named_after_kind() {
        let m = Modifier::new(ModifierKind::Bevel);
        assert_eq!(m.name, "Bevel");
        assert_eq!(m.kind, ModifierKind::Bevel);
    }

    #[test]
    fn test_new_modifier_gets_kind_defaults() {
        let m = Modifier::new(ModifierKind::Subdivision);
        assert_eq!(m.params.get("levels"), Some(&PropValue::Int(1)));
    }

    #[test]
    fn test_named_keeps_name_resets_params() {
        let m = Modifier::named("My Shell", ModifierKind::Solidify);
        assert_eq!(m.name, "My Shell");
        assert_eq!(m.params, ModifierKind::Solidify.default_params());
    }

    #[test]
    fn test_every_kind_has_params() {
        for kind in ModifierKind::all() {
            assert!(
                !kind.default_params().is_empty(),
                "{} has no default params",
                kind.display_name()
            );
        }
    }
}
