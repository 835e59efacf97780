//! Clipboard data types: categories, payloads, the snapshot store, and the
//! request/status types around them.

use bevy::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

use crate::scene::{ConstraintKind, ModifierKind, ParentMode, PropValue, Rotation};

/// The attribute categories that copy and paste operate on independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    FullTransform,
    Location,
    Rotation,
    Scale,
    Modifiers,
    Materials,
    Constraints,
    Parent,
    CustomProperties,
}

impl Category {
    pub const COUNT: usize = 9;

    pub fn all() -> [Category; Self::COUNT] {
        [
            Category::FullTransform,
            Category::Location,
            Category::Rotation,
            Category::Scale,
            Category::Modifiers,
            Category::Materials,
            Category::Constraints,
            Category::Parent,
            Category::CustomProperties,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::FullTransform => "Transform",
            Category::Location => "Location",
            Category::Rotation => "Rotation",
            Category::Scale => "Scale",
            Category::Modifiers => "Modifiers",
            Category::Materials => "Materials",
            Category::Constraints => "Constraints",
            Category::Parent => "Parent",
            Category::CustomProperties => "Custom Properties",
        }
    }
}

/// All three transform channels captured together, so a full-transform paste
/// can never apply a partial set.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSnapshot {
    pub location: Vec3,
    pub rotation: Rotation,
    pub scale: Vec3,
}

/// A modifier as it travels through the clipboard: identity only. Parameters
/// deliberately do not transfer; paste rebuilds fresh instances.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierSnapshot {
    pub name: String,
    pub kind: ModifierKind,
}

/// A constraint as it travels through the clipboard; same shallow shape as
/// [`ModifierSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSnapshot {
    pub name: String,
    pub kind: ConstraintKind,
}

/// Parent reference, mode and inverse matrix, captured as one unit.
/// Re-parenting without the matching inverse visibly moves the child, so the
/// three fields are never stored or applied separately.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentSnapshot {
    pub parent: Option<Entity>,
    pub mode: ParentMode,
    pub inverse: Mat4,
}

/// One copied attribute bundle. The variant tag is what paste dispatches on,
/// so every category's apply path is checked for exhaustiveness at compile
/// time.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    FullTransform(TransformSnapshot),
    Location(Vec3),
    Rotation(Rotation),
    Scale(Vec3),
    Modifiers(Vec<ModifierSnapshot>),
    /// Shared handles: paste aliases the same material assets, never copies.
    Materials(Vec<Handle<StandardMaterial>>),
    Constraints(Vec<ConstraintSnapshot>),
    Parent(ParentSnapshot),
    CustomProperties(BTreeMap<String, PropValue>),
}

/// The snapshot store: at most one payload per category, overwritten by
/// every copy, alive for the process only. One instance is owned by the app
/// as a resource; a second clipboard would simply be a second instance.
#[derive(Resource, Default)]
pub struct AttributeClipboard {
    slots: [Option<Payload>; Category::COUNT],
}

impl AttributeClipboard {
    /// Unconditional overwrite of the category's slot. The payload shape is
    /// the caller's responsibility; copy always constructs the matching
    /// variant.
    pub fn set(&mut self, category: Category, payload: Payload) {
        self.slots[category as usize] = Some(payload);
    }

    /// The last payload copied for `category`, or `None` if the category has
    /// never been copied this session. An empty sequence payload is still
    /// `Some`: "copied nothing" and "never copied" are different states.
    pub fn get(&self, category: Category) -> Option<&Payload> {
        self.slots[category as usize].as_ref()
    }

    pub fn has(&self, category: Category) -> bool {
        self.slots[category as usize].is_some()
    }
}

#[derive(Message)]
pub struct CopyRequest {
    pub category: Category,
}

#[derive(Message)]
pub struct PasteRequest {
    pub category: Category,
}

/// Outcome of a copy or paste request, in the form shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferStatus {
    Copied {
        category: Category,
        source: String,
    },
    Pasted {
        category: Category,
        applied: usize,
        skipped: usize,
    },
    /// Copy attempted with no active object.
    NoSourceSelected,
    /// Paste attempted for a category never copied this session.
    NothingCopiedYet {
        category: Category,
    },
    /// Paste attempted with an empty selection.
    NoTargetSelected,
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferStatus::Copied { category, source } => {
                write!(f, "Copied {} from '{}'", category.display_name(), source)
            }
            TransferStatus::Pasted {
                category,
                applied,
                skipped,
            } => {
                if *skipped > 0 {
                    write!(
                        f,
                        "Pasted {} onto {} object(s), {} skipped",
                        category.display_name(),
                        applied,
                        skipped
                    )
                } else {
                    write!(
                        f,
                        "Pasted {} onto {} object(s)",
                        category.display_name(),
                        applied
                    )
                }
            }
            TransferStatus::NoSourceSelected => write!(f, "No active object to copy from"),
            TransferStatus::NothingCopiedYet { category } => {
                write!(f, "Nothing copied yet for {}", category.display_name())
            }
            TransferStatus::NoTargetSelected => write!(f, "No objects selected to paste onto"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let clipboard = AttributeClipboard::default();
        for category in Category::all() {
            assert!(clipboard.get(category).is_none());
            assert!(!clipboard.has(category));
        }
    }

    #[test]
    fn test_set_overwrites_previous_payload() {
        let mut clipboard = AttributeClipboard::default();
        clipboard.set(Category::Location, Payload::Location(Vec3::ONE));
        clipboard.set(
            Category::Location,
            Payload::Location(Vec3::new(3.0, 0.0, 0.0)),
        );

        assert_eq!(
            clipboard.get(Category::Location),
            Some(&Payload::Location(Vec3::new(3.0, 0.0, 0.0)))
        );
    }

    #[test]
    fn test_slots_are_independent() {
        let mut clipboard = AttributeClipboard::default();
        clipboard.set(Category::Scale, Payload::Scale(Vec3::splat(2.0)));

        assert!(clipboard.has(Category::Scale));
        assert!(!clipboard.has(Category::Location));
        assert!(!clipboard.has(Category::Modifiers));
    }

    #[test]
    fn test_empty_payload_is_not_absent() {
        let mut clipboard = AttributeClipboard::default();
        clipboard.set(Category::Modifiers, Payload::Modifiers(Vec::new()));

        // An empty stack was copied; that is a real payload
        assert!(clipboard.has(Category::Modifiers));
        assert_eq!(
            clipboard.get(Category::Modifiers),
            Some(&Payload::Modifiers(Vec::new()))
        );
    }

    #[test]
    fn test_category_display_names_are_distinct() {
        let names: Vec<_> = Category::all().iter().map(|c| c.display_name()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_status_display_wording() {
        let copied = TransferStatus::Copied {
            category: Category::Rotation,
            source: "Cube".to_string(),
        };
        assert_eq!(copied.to_string(), "Copied Rotation from 'Cube'");

        let pasted = TransferStatus::Pasted {
            category: Category::Materials,
            applied: 2,
            skipped: 0,
        };
        assert_eq!(pasted.to_string(), "Pasted Materials onto 2 object(s)");

        let partial = TransferStatus::Pasted {
            category: Category::Parent,
            applied: 1,
            skipped: 1,
        };
        assert_eq!(
            partial.to_string(),
            "Pasted Parent onto 1 object(s), 1 skipped"
        );

        let missing = TransferStatus::NothingCopiedYet {
            category: Category::Constraints,
        };
        assert_eq!(missing.to_string(), "Nothing copied yet for Constraints");
    }
}
