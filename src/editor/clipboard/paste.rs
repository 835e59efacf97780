//! Paste: apply a stored payload onto every selected object.

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use std::collections::HashMap;
use std::fmt;

use crate::editor::select::Selection;
use crate::editor::status::StatusLog;
use crate::scene::{
    would_create_cycle, Constraint, ConstraintStack, CustomProperties, MaterialSlots, Modifier,
    ModifierStack, ObjectTransform, ParentLink, SceneObject,
};

use super::types::{AttributeClipboard, Category, PasteRequest, Payload, TransferStatus};

/// A per-target refusal. The batch reports it and moves on to the next
/// target; nothing is written to the refused one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteRejection {
    /// The parent write would make the target its own ancestor.
    ParentCycle,
}

impl fmt::Display for PasteRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteRejection::ParentCycle => write!(f, "would create a parent cycle"),
        }
    }
}

/// Scene facts a paste needs beyond the target's own components.
pub struct PasteContext {
    /// Current parent of every live object, for ancestry walks.
    pub parents: HashMap<Entity, Option<Entity>>,
}

impl PasteContext {
    pub fn would_create_cycle(&self, child: Entity, new_parent: Entity) -> bool {
        would_create_cycle(child, new_parent, &|entity| {
            self.parents.get(&entity).copied().flatten()
        })
    }
}

/// Mutable view of one object's attributes during a paste.
pub struct TargetAttributes<'a> {
    pub entity: Entity,
    pub transform: &'a mut ObjectTransform,
    pub modifiers: &'a mut ModifierStack,
    pub materials: &'a mut MaterialSlots,
    pub constraints: &'a mut ConstraintStack,
    pub parent: &'a mut ParentLink,
    pub properties: &'a mut CustomProperties,
}

/// Applies one payload onto one target: whole-field overwrite per category.
/// Either the entire payload lands or, on a rejection, the target is left
/// untouched.
pub fn apply_payload(
    payload: &Payload,
    target: &mut TargetAttributes,
    ctx: &PasteContext,
) -> Result<(), PasteRejection> {
    match payload {
        Payload::FullTransform(snapshot) => {
            target.transform.location = snapshot.location;
            // One assignment carries the rotation mode and values together
            target.transform.rotation = snapshot.rotation;
            target.transform.scale = snapshot.scale;
        }
        Payload::Location(location) => target.transform.location = *location,
        Payload::Rotation(rotation) => target.transform.rotation = *rotation,
        Payload::Scale(scale) => target.transform.scale = *scale,
        Payload::Modifiers(snapshots) => {
            // Fresh instances of each stored kind, renamed to match;
            // parameters reset to kind defaults and do not transfer
            target.modifiers.0 = snapshots
                .iter()
                .map(|s| Modifier::named(s.name.clone(), s.kind))
                .collect();
        }
        Payload::Materials(handles) => {
            // Order-preserving replace; handles alias the shared assets
            target.materials.0.clear();
            target.materials.0.extend(handles.iter().cloned());
        }
        Payload::Constraints(snapshots) => {
            target.constraints.0 = snapshots
                .iter()
                .map(|s| Constraint::named(s.name.clone(), s.kind))
                .collect();
        }
        Payload::Parent(snapshot) => {
            if let Some(new_parent) = snapshot.parent
                && ctx.would_create_cycle(target.entity, new_parent)
            {
                return Err(PasteRejection::ParentCycle);
            }
            // Reference, mode and inverse matrix land in one write
            *target.parent = ParentLink {
                parent: snapshot.parent,
                mode: snapshot.mode,
                inverse: snapshot.inverse,
            };
        }
        Payload::CustomProperties(entries) => {
            // Merge: stored keys overwrite, unrelated target keys survive
            for (key, value) in entries {
                target.properties.0.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(())
}

#[allow(clippy::type_complexity)]
pub fn handle_paste_requests(
    mut requests: MessageReader<PasteRequest>,
    selection: Res<Selection>,
    clipboard: Res<AttributeClipboard>,
    mut objects: Query<(
        Entity,
        &SceneObject,
        &mut ObjectTransform,
        &mut ModifierStack,
        &mut MaterialSlots,
        &mut ConstraintStack,
        &mut ParentLink,
        &mut CustomProperties,
    )>,
    mut status: ResMut<StatusLog>,
) {
    for request in requests.read() {
        let Some(payload) = clipboard.get(request.category) else {
            status.warn(
                TransferStatus::NothingCopiedYet {
                    category: request.category,
                }
                .to_string(),
            );
            continue;
        };

        if selection.is_empty() {
            status.warn(TransferStatus::NoTargetSelected.to_string());
            continue;
        }

        let mut ctx = PasteContext {
            parents: objects
                .iter()
                .map(|(entity, _, _, _, _, _, link, _)| (entity, link.parent))
                .collect(),
        };

        let mut applied = 0usize;
        let mut skipped = 0usize;

        // Targets in selection order; a rejection never aborts the batch
        for entity in selection.targets() {
            let Ok((
                _,
                object,
                mut transform,
                mut modifiers,
                mut materials,
                mut constraints,
                mut parent,
                mut properties,
            )) = objects.get_mut(entity)
            else {
                continue;
            };

            let mut target = TargetAttributes {
                entity,
                transform: &mut transform,
                modifiers: &mut modifiers,
                materials: &mut materials,
                constraints: &mut constraints,
                parent: &mut parent,
                properties: &mut properties,
            };

            match apply_payload(payload, &mut target, &ctx) {
                Ok(()) => {
                    if let Payload::Parent(snapshot) = payload {
                        ctx.parents.insert(entity, snapshot.parent);
                    }
                    applied += 1;
                }
                Err(rejection) => {
                    skipped += 1;
                    status.warn(format!("Skipped '{}': {}", object.name, rejection));
                }
            }
        }

        status.info(
            TransferStatus::Pasted {
                category: request.category,
                applied,
                skipped,
            }
            .to_string(),
        );
    }
}

/// Ctrl+V pastes the stored full transform onto the selection.
pub fn handle_paste_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut requests: MessageWriter<PasteRequest>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.just_pressed(KeyCode::KeyV) {
        return;
    }

    // Don't paste if UI has keyboard focus (user typing)
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    requests.write(PasteRequest {
        category: Category::FullTransform,
    });
}
