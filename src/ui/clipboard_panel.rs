use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::{
    payload_summary, AttributeClipboard, Category, CopyRequest, PasteRequest, Payload, Selection,
};
use crate::scene::{
    ClearParentRequest, MaterialLibrary, ParentMode, ParentToActiveRequest, SceneObject,
};
use crate::theme;

/// Panel-local state for the parenting controls
#[derive(Resource, Default)]
pub struct ParentingUiState {
    pub mode: ParentMode,
}

/// Left panel: one copy/paste row per attribute category, plus the
/// parenting controls.
#[allow(clippy::too_many_arguments)]
pub fn clipboard_panel_ui(
    mut contexts: EguiContexts,
    clipboard: Res<AttributeClipboard>,
    library: Res<MaterialLibrary>,
    selection: Res<Selection>,
    mut parent_ui: ResMut<ParentingUiState>,
    names: Query<&SceneObject>,
    mut copy_requests: MessageWriter<CopyRequest>,
    mut paste_requests: MessageWriter<PasteRequest>,
    mut parent_requests: MessageWriter<ParentToActiveRequest>,
    mut clear_requests: MessageWriter<ClearParentRequest>,
) -> Result {
    egui::SidePanel::left("attribute_clipboard")
        .default_width(250.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Attribute Clipboard").heading().size(18.0));
            let filled = Category::all()
                .into_iter()
                .filter(|category| clipboard.has(*category))
                .count();
            ui.label(
                egui::RichText::new(format!("{} of {} slots filled", filled, Category::COUNT))
                    .size(12.0)
                    .weak(),
            );
            ui.add_space(4.0);

            // =========================================
            // SELECTION CONTEXT
            // =========================================
            let active_name = selection
                .active()
                .and_then(|entity| names.get(entity).ok())
                .map(|object| object.name.as_str());
            match active_name {
                Some(name) => {
                    ui.label(egui::RichText::new(format!("Active: '{}'", name)).size(13.0));
                }
                None => {
                    ui.label(egui::RichText::new("No active object").size(13.0).weak());
                }
            }
            if selection.len() > 1 {
                ui.label(
                    egui::RichText::new(format!("{} objects selected", selection.len()))
                        .size(12.0)
                        .weak(),
                );
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                // =========================================
                // TRANSFORMS
                // =========================================
                section_heading(ui, "Transforms");
                for category in [
                    Category::FullTransform,
                    Category::Location,
                    Category::Rotation,
                    Category::Scale,
                ] {
                    category_row(
                        ui,
                        category,
                        &clipboard,
                        &library,
                        &names,
                        &mut copy_requests,
                        &mut paste_requests,
                    );
                }

                // =========================================
                // STACKS AND MATERIALS
                // =========================================
                section_heading(ui, "Modifiers");
                category_row(
                    ui,
                    Category::Modifiers,
                    &clipboard,
                    &library,
                    &names,
                    &mut copy_requests,
                    &mut paste_requests,
                );
                ui.label(
                    egui::RichText::new("Pasted modifiers start with default settings")
                        .size(11.0)
                        .weak(),
                );
                ui.add_space(4.0);

                section_heading(ui, "Materials");
                category_row(
                    ui,
                    Category::Materials,
                    &clipboard,
                    &library,
                    &names,
                    &mut copy_requests,
                    &mut paste_requests,
                );

                section_heading(ui, "Constraints");
                category_row(
                    ui,
                    Category::Constraints,
                    &clipboard,
                    &library,
                    &names,
                    &mut copy_requests,
                    &mut paste_requests,
                );

                // =========================================
                // PARENTING
                // =========================================
                section_heading(ui, "Parenting");
                category_row(
                    ui,
                    Category::Parent,
                    &clipboard,
                    &library,
                    &names,
                    &mut copy_requests,
                    &mut paste_requests,
                );

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Mode:").size(13.0));
                    egui::ComboBox::from_id_salt("parent_mode")
                        .selected_text(parent_ui.mode.display_name())
                        .show_ui(ui, |ui| {
                            for mode in ParentMode::all() {
                                if ui
                                    .selectable_label(parent_ui.mode == mode, mode.display_name())
                                    .clicked()
                                {
                                    parent_ui.mode = mode;
                                }
                            }
                        });
                });
                ui.add_space(2.0);
                ui.horizontal(|ui| {
                    if ui.button("Parent to Active").clicked() {
                        parent_requests.write(ParentToActiveRequest {
                            mode: parent_ui.mode,
                        });
                    }
                    if ui.button("Clear Parent").clicked() {
                        clear_requests.write(ClearParentRequest);
                    }
                });
                ui.add_space(4.0);

                // =========================================
                // CUSTOM PROPERTIES
                // =========================================
                section_heading(ui, "Custom Properties");
                category_row(
                    ui,
                    Category::CustomProperties,
                    &clipboard,
                    &library,
                    &names,
                    &mut copy_requests,
                    &mut paste_requests,
                );
                ui.label(
                    egui::RichText::new("Pasting merges keys into the target")
                        .size(11.0)
                        .weak(),
                );
                ui.add_space(8.0);
            });
        });
    Ok(())
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(text)
            .size(15.0)
            .strong()
            .color(theme::SECTION_HEADING),
    );
    ui.separator();
    ui.add_space(2.0);
}

/// One category: name, copy/paste buttons and the stored-payload summary.
fn category_row(
    ui: &mut egui::Ui,
    category: Category,
    clipboard: &AttributeClipboard,
    library: &MaterialLibrary,
    names: &Query<&SceneObject>,
    copy_requests: &mut MessageWriter<CopyRequest>,
    paste_requests: &mut MessageWriter<PasteRequest>,
) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(category.display_name()).size(14.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Paste stays clickable with an empty slot; the click reports
            // "nothing copied yet" in the status bar
            if ui.small_button("Paste").clicked() {
                paste_requests.write(PasteRequest { category });
            }
            if ui.small_button("Copy").clicked() {
                copy_requests.write(CopyRequest { category });
            }
        });
    });

    match clipboard.get(category) {
        Some(payload) => {
            let parent_name = match payload {
                Payload::Parent(snapshot) => snapshot
                    .parent
                    .and_then(|entity| names.get(entity).ok())
                    .map(|object| object.name.as_str()),
                _ => None,
            };
            let summary = payload_summary(payload, library, parent_name);
            ui.label(
                egui::RichText::new(summary)
                    .size(12.0)
                    .color(theme::SUMMARY_FILLED),
            );
        }
        None => {
            ui.label(
                egui::RichText::new("nothing copied")
                    .size(12.0)
                    .color(theme::SUMMARY_EMPTY),
            );
        }
    }
    ui.add_space(4.0);
}
