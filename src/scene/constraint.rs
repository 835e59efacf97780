//! Constraint stacks: ordered, named relationship rules on an object.
//!
//! Constraints are inert metadata in the sandbox (there is no solver), but
//! they carry a per-instance influence setting so the clipboard's shallow
//! copy (name and kind only, influence reset) has something to lose.

use bevy::prelude::*;

/// The supported constraint kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    CopyLocation,
    CopyRotation,
    CopyScale,
    TrackTo,
    LimitDistance,
    Floor,
}

impl ConstraintKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstraintKind::CopyLocation => "Copy Location",
            ConstraintKind::CopyRotation => "Copy Rotation",
            ConstraintKind::CopyScale => "Copy Scale",
            ConstraintKind::TrackTo => "Track To",
            ConstraintKind::LimitDistance => "Limit Distance",
            ConstraintKind::Floor => "Floor",
        }
    }

    pub fn all() -> &'static [ConstraintKind] {
        &[
            ConstraintKind::CopyLocation,
            ConstraintKind::CopyRotation,
            ConstraintKind::CopyScale,
            ConstraintKind::TrackTo,
            ConstraintKind::LimitDistance,
            ConstraintKind::Floor,
        ]
    }
}

/// A single constraint instance on an object's stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub kind: ConstraintKind,
    /// Blend factor in 0..=1. Per-instance state the clipboard does not carry.
    pub influence: f32,
}

impl Constraint {
    pub fn new(kind: ConstraintKind) -> Self {
        Self {
            name: kind.display_name().to_string(),
            kind,
            influence: 1.0,
        }
    }

    pub fn named(name: impl Into<String>, kind: ConstraintKind) -> Self {
        Self {
            name: name.into(),
            kind,
            influence: 1.0,
        }
    }
}

/// Ordered constraint stack component.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ConstraintStack(pub Vec<Constraint>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_constraint_defaults() {
        let c = Constraint::new(ConstraintKind::TrackTo);
        assert_eq!(c.name, "Track To");
        assert_eq!(c.influence, 1.0);
    }

    #[test]
    fn test_named_constraint_resets_influence() {
        let c = Constraint::named("Look At Camera", ConstraintKind::TrackTo);
        assert_eq!(c.name, "Look At Camera");
        assert_eq!(c.influence, 1.0);
    }

    #[test]
    fn test_all_kinds_have_distinct_names() {
        let names: Vec<_> = ConstraintKind::all()
            .iter()
            .map(|k| k.display_name())
            .collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }
}
