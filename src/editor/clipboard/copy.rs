//! Copy: extract one category's payload from the active object.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::editor::select::Selection;
use crate::editor::status::StatusLog;
use crate::scene::{
    ConstraintStack, CustomProperties, MaterialSlots, ModifierStack, ObjectTransform, ParentLink,
    SceneObject,
};

use super::types::{
    AttributeClipboard, Category, ConstraintSnapshot, CopyRequest, ModifierSnapshot, ParentSnapshot,
    Payload, TransferStatus, TransformSnapshot,
};

/// Borrowed view of one object's copyable attributes, so extraction is a
/// pure function over plain references.
pub struct SourceAttributes<'a> {
    pub transform: &'a ObjectTransform,
    pub modifiers: &'a ModifierStack,
    pub materials: &'a MaterialSlots,
    pub constraints: &'a ConstraintStack,
    pub parent: &'a ParentLink,
    pub properties: &'a CustomProperties,
}

/// Builds the payload for one category from the source's live attributes.
pub fn snapshot_category(category: Category, source: &SourceAttributes) -> Payload {
    match category {
        Category::FullTransform => Payload::FullTransform(TransformSnapshot {
            location: source.transform.location,
            rotation: source.transform.rotation,
            scale: source.transform.scale,
        }),
        Category::Location => Payload::Location(source.transform.location),
        // Whichever representation the object currently uses travels as-is;
        // the variant tag is inseparable from the numbers.
        Category::Rotation => Payload::Rotation(source.transform.rotation),
        Category::Scale => Payload::Scale(source.transform.scale),
        Category::Modifiers => Payload::Modifiers(
            source
                .modifiers
                .0
                .iter()
                .map(|m| ModifierSnapshot {
                    name: m.name.clone(),
                    kind: m.kind,
                })
                .collect(),
        ),
        Category::Materials => Payload::Materials(source.materials.0.clone()),
        Category::Constraints => Payload::Constraints(
            source
                .constraints
                .0
                .iter()
                .map(|c| ConstraintSnapshot {
                    name: c.name.clone(),
                    kind: c.kind,
                })
                .collect(),
        ),
        Category::Parent => Payload::Parent(ParentSnapshot {
            parent: source.parent.parent,
            mode: source.parent.mode,
            inverse: source.parent.inverse,
        }),
        Category::CustomProperties => Payload::CustomProperties(source.properties.0.clone()),
    }
}

#[allow(clippy::type_complexity)]
pub fn handle_copy_requests(
    mut requests: MessageReader<CopyRequest>,
    selection: Res<Selection>,
    mut clipboard: ResMut<AttributeClipboard>,
    objects: Query<(
        &SceneObject,
        &ObjectTransform,
        &ModifierStack,
        &MaterialSlots,
        &ConstraintStack,
        &ParentLink,
        &CustomProperties,
    )>,
    mut status: ResMut<StatusLog>,
) {
    for request in requests.read() {
        let Some((object, transform, modifiers, materials, constraints, parent, properties)) =
            selection.active().and_then(|entity| objects.get(entity).ok())
        else {
            // Slot keeps its previous payload on a failed copy
            status.warn(TransferStatus::NoSourceSelected.to_string());
            continue;
        };

        let source = SourceAttributes {
            transform,
            modifiers,
            materials,
            constraints,
            parent,
            properties,
        };
        clipboard.set(request.category, snapshot_category(request.category, &source));
        status.info(
            TransferStatus::Copied {
                category: request.category,
                source: object.name.clone(),
            }
            .to_string(),
        );
    }
}

/// Ctrl+C copies the active object's full transform.
pub fn handle_copy_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut requests: MessageWriter<CopyRequest>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl || !keyboard.just_pressed(KeyCode::KeyC) {
        return;
    }

    // Don't copy if UI has keyboard focus (user typing)
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    requests.write(CopyRequest {
        category: Category::FullTransform,
    });
}
