use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::Selection;
use crate::scene::{
    Constraint, ConstraintKind, ConstraintStack, CustomProperties, MaterialLibrary, MaterialSlots,
    Modifier, ModifierKind, ModifierStack, ObjectTransform, ParentLink, PropValue, Rotation,
    RotationMode, SceneObject, Shape, SpawnObjectRequest,
};
use crate::theme;

/// Panel-local state: pending combo selections and the new-property form
#[derive(Resource)]
pub struct InspectorState {
    pub spawn_shape: Shape,
    pub add_modifier_kind: ModifierKind,
    pub add_constraint_kind: ConstraintKind,
    pub new_property_name: String,
    pub new_property_type: &'static str,
}

impl Default for InspectorState {
    fn default() -> Self {
        Self {
            spawn_shape: Shape::Cube,
            add_modifier_kind: ModifierKind::Subdivision,
            add_constraint_kind: ConstraintKind::CopyLocation,
            new_property_name: String::new(),
            new_property_type: "Float",
        }
    }
}

/// Right panel: outliner, spawn controls and attribute editors for the
/// active object.
#[allow(clippy::too_many_arguments)]
pub fn inspector_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<InspectorState>,
    mut selection: ResMut<Selection>,
    library: Res<MaterialLibrary>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut spawn_requests: MessageWriter<SpawnObjectRequest>,
    mut objects: Query<(
        Entity,
        &mut SceneObject,
        &mut ObjectTransform,
        &mut ModifierStack,
        &mut MaterialSlots,
        &mut ConstraintStack,
        &ParentLink,
        &mut CustomProperties,
    )>,
) -> Result {
    let mut outliner: Vec<(Entity, String)> = objects
        .iter()
        .map(|(entity, object, ..)| (entity, object.name.clone()))
        .collect();
    outliner.sort_by(|a, b| a.1.cmp(&b.1));

    let shift_held = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    egui::SidePanel::right("inspector")
        .default_width(280.0)
        .show(contexts.ctx_mut()?, |ui| {
            // =========================================
            // SCENE SECTION
            // =========================================
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Scene").heading().size(18.0));
            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt("spawn_shape")
                    .selected_text(state.spawn_shape.display_name())
                    .show_ui(ui, |ui| {
                        for shape in Shape::all() {
                            if ui
                                .selectable_label(
                                    state.spawn_shape == shape,
                                    shape.display_name(),
                                )
                                .clicked()
                            {
                                state.spawn_shape = shape;
                            }
                        }
                    });
                if ui.button("Add Object").clicked() {
                    spawn_requests.write(SpawnObjectRequest {
                        shape: state.spawn_shape,
                    });
                }
            });
            ui.add_space(6.0);

            for (entity, name) in &outliner {
                let is_selected = selection.is_selected(*entity);
                let is_active = selection.active() == Some(*entity);
                let text = if is_active {
                    egui::RichText::new(name).size(14.0).strong()
                } else {
                    egui::RichText::new(name).size(14.0)
                };
                if ui.selectable_label(is_selected, text).clicked() {
                    if shift_held {
                        selection.shift_click(*entity);
                    } else {
                        selection.click(*entity);
                    }
                }
            }

            ui.add_space(12.0);

            // =========================================
            // OBJECT SECTION
            // =========================================
            ui.label(egui::RichText::new("Object").heading().size(18.0));
            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            let active = selection.active().and_then(|entity| objects.get_mut(entity).ok());
            let Some((
                _,
                mut object,
                mut transform,
                mut modifiers,
                mut slots,
                mut constraints,
                parent,
                mut properties,
            )) = active
            else {
                ui.label(
                    egui::RichText::new("Select an object to edit its attributes")
                        .size(13.0)
                        .weak(),
                );
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Name:").size(13.0));
                    ui.add(egui::TextEdit::singleline(&mut object.name).desired_width(160.0));
                });

                let parent_name = parent
                    .parent
                    .and_then(|entity| outliner.iter().find(|(e, _)| *e == entity))
                    .map(|(_, name)| name.clone());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Parent:").size(13.0));
                    match parent_name {
                        Some(name) => {
                            ui.label(
                                egui::RichText::new(format!(
                                    "'{}' ({})",
                                    name,
                                    parent.mode.display_name()
                                ))
                                .size(13.0),
                            );
                        }
                        None => {
                            ui.label(egui::RichText::new("none").size(13.0).weak());
                        }
                    }
                });

                subsection(ui, "Transform");
                vec3_row(ui, "Location", &mut transform.location, 0.05);
                rotation_editor(ui, &mut transform.rotation);
                vec3_row(ui, "Scale", &mut transform.scale, 0.01);

                subsection(ui, "Modifiers");
                let mut remove_modifier = None;
                for (index, modifier) in modifiers.0.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut modifier.name).desired_width(100.0),
                        );
                        ui.label(
                            egui::RichText::new(modifier.kind.display_name())
                                .size(12.0)
                                .weak(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    remove_modifier = Some(index);
                                }
                            },
                        );
                    });
                    for (key, value) in modifier.params.iter_mut() {
                        ui.horizontal(|ui| {
                            ui.add_space(12.0);
                            ui.label(egui::RichText::new(key.as_str()).size(12.0).weak());
                            prop_value_editor(ui, value);
                        });
                    }
                    ui.add_space(2.0);
                }
                if let Some(index) = remove_modifier {
                    modifiers.0.remove(index);
                }
                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt("add_modifier")
                        .selected_text(state.add_modifier_kind.display_name())
                        .show_ui(ui, |ui| {
                            for kind in ModifierKind::all() {
                                if ui
                                    .selectable_label(
                                        state.add_modifier_kind == *kind,
                                        kind.display_name(),
                                    )
                                    .clicked()
                                {
                                    state.add_modifier_kind = *kind;
                                }
                            }
                        });
                    if ui.button("Add").clicked() {
                        modifiers.0.push(Modifier::new(state.add_modifier_kind));
                    }
                });

                subsection(ui, "Material Slots");
                let mut remove_slot = None;
                for (index, handle) in slots.0.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(format!("{}:", index)).size(12.0).weak());
                        let current = library.name_of(handle).unwrap_or("unnamed");
                        egui::ComboBox::from_id_salt(("material_slot", index))
                            .selected_text(current)
                            .show_ui(ui, |ui| {
                                for name in library.names() {
                                    if ui
                                        .selectable_label(Some(name) == library.name_of(handle), name)
                                        .clicked()
                                        && let Some(chosen) = library.get(name)
                                    {
                                        *handle = chosen;
                                    }
                                }
                            });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    remove_slot = Some(index);
                                }
                            },
                        );
                    });
                }
                if let Some(index) = remove_slot {
                    slots.0.remove(index);
                }
                if ui.button("Add Slot").clicked() {
                    slots.0.push(library.fallback.clone());
                }

                subsection(ui, "Constraints");
                let mut remove_constraint = None;
                for (index, constraint) in constraints.0.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut constraint.name)
                                .desired_width(100.0),
                        );
                        ui.label(
                            egui::RichText::new(constraint.kind.display_name())
                                .size(12.0)
                                .weak(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    remove_constraint = Some(index);
                                }
                            },
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.add_space(12.0);
                        ui.label(egui::RichText::new("influence").size(12.0).weak());
                        if ui
                            .add(egui::DragValue::new(&mut constraint.influence).speed(0.01))
                            .changed()
                        {
                            constraint.influence = constraint.influence.clamp(0.0, 1.0);
                        }
                    });
                }
                if let Some(index) = remove_constraint {
                    constraints.0.remove(index);
                }
                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt("add_constraint")
                        .selected_text(state.add_constraint_kind.display_name())
                        .show_ui(ui, |ui| {
                            for kind in ConstraintKind::all() {
                                if ui
                                    .selectable_label(
                                        state.add_constraint_kind == *kind,
                                        kind.display_name(),
                                    )
                                    .clicked()
                                {
                                    state.add_constraint_kind = *kind;
                                }
                            }
                        });
                    if ui.button("Add").clicked() {
                        constraints.0.push(Constraint::new(state.add_constraint_kind));
                    }
                });

                subsection(ui, "Custom Properties");
                let mut remove_property = None;
                for (key, value) in properties.0.iter_mut() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(key.as_str()).size(13.0));
                        ui.label(
                            egui::RichText::new(value.type_name()).size(11.0).weak(),
                        );
                        prop_value_editor(ui, value);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    remove_property = Some(key.clone());
                                }
                            },
                        );
                    });
                }
                if let Some(key) = remove_property {
                    properties.0.remove(&key);
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.new_property_name)
                            .desired_width(90.0)
                            .hint_text("name"),
                    );
                    egui::ComboBox::from_id_salt("new_property_type")
                        .selected_text(state.new_property_type)
                        .show_ui(ui, |ui| {
                            for type_name in PropValue::type_names() {
                                if ui
                                    .selectable_label(
                                        state.new_property_type == *type_name,
                                        *type_name,
                                    )
                                    .clicked()
                                {
                                    state.new_property_type = *type_name;
                                }
                            }
                        });
                    let name_free = !state.new_property_name.is_empty()
                        && !properties.0.contains_key(&state.new_property_name);
                    ui.add_enabled_ui(name_free, |ui| {
                        if ui.button("Add").clicked() {
                            properties.0.insert(
                                state.new_property_name.clone(),
                                PropValue::default_of(state.new_property_type),
                            );
                            state.new_property_name.clear();
                        }
                    });
                });
                ui.add_space(8.0);
            });
        });
    Ok(())
}

fn subsection(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(text)
            .size(14.0)
            .strong()
            .color(theme::SECTION_HEADING),
    );
    ui.add_space(2.0);
}

fn vec3_row(ui: &mut egui::Ui, label: &str, value: &mut Vec3, speed: f32) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(13.0));
        changed |= ui
            .add(egui::DragValue::new(&mut value.x).speed(speed).prefix("X "))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut value.y).speed(speed).prefix("Y "))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut value.z).speed(speed).prefix("Z "))
            .changed();
    });
    changed
}

/// Mode selector plus the value fields of the current representation.
///
/// Switching modes converts through [`Rotation::convert_to`]; edited numbers
/// always stay in the representation shown.
fn rotation_editor(ui: &mut egui::Ui, rotation: &mut Rotation) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Rotation").size(13.0));
        egui::ComboBox::from_id_salt("rotation_mode")
            .selected_text(rotation.mode().display_name())
            .show_ui(ui, |ui| {
                for mode in RotationMode::all() {
                    let is_current = rotation.mode() == *mode;
                    if ui.selectable_label(is_current, mode.display_name()).clicked()
                        && !is_current
                    {
                        *rotation = rotation.convert_to(*mode);
                    }
                }
            });
    });

    match rotation {
        Rotation::Euler(angles) => {
            let mut degrees = Vec3::new(
                angles.x.to_degrees(),
                angles.y.to_degrees(),
                angles.z.to_degrees(),
            );
            if vec3_row(ui, "Angles", &mut degrees, 1.0) {
                *angles = Vec3::new(
                    degrees.x.to_radians(),
                    degrees.y.to_radians(),
                    degrees.z.to_radians(),
                );
            }
        }
        Rotation::Quaternion(quat) => {
            let mut xyzw = [quat.x, quat.y, quat.z, quat.w];
            let mut changed = false;
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("XYZW").size(13.0));
                for value in xyzw.iter_mut() {
                    changed |= ui.add(egui::DragValue::new(value).speed(0.01)).changed();
                }
            });
            if changed {
                // Stored raw; rendering normalizes on use
                *quat = Quat::from_xyzw(xyzw[0], xyzw[1], xyzw[2], xyzw[3]);
            }
        }
        Rotation::AxisAngle { axis, angle } => {
            vec3_row(ui, "Axis", axis, 0.02);
            let mut degrees = angle.to_degrees();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Angle").size(13.0));
                if ui
                    .add(egui::DragValue::new(&mut degrees).speed(1.0).suffix("°"))
                    .changed()
                {
                    *angle = degrees.to_radians();
                }
            });
        }
    }
}

fn prop_value_editor(ui: &mut egui::Ui, value: &mut PropValue) {
    match value {
        PropValue::Bool(v) => {
            ui.checkbox(v, "");
        }
        PropValue::Int(v) => {
            ui.add(egui::DragValue::new(v).speed(1));
        }
        PropValue::Float(v) => {
            ui.add(egui::DragValue::new(v).speed(0.05));
        }
        PropValue::Text(v) => {
            ui.add(egui::TextEdit::singleline(v).desired_width(90.0));
        }
    }
}
