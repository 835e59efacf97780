use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::AppConfig;
use crate::editor::{StatusKind, StatusLog};
use crate::theme;

use super::settings::SettingsWindowState;

/// Whether the status history window is open
#[derive(Resource, Default)]
pub struct StatusHistoryState {
    pub is_open: bool,
}

/// Bottom bar showing the latest status line, with a toggle for the
/// scrollback window.
pub fn status_bar_ui(
    mut contexts: EguiContexts,
    status: Res<StatusLog>,
    config: Res<AppConfig>,
    mut history: ResMut<StatusHistoryState>,
    mut settings: ResMut<SettingsWindowState>,
) -> Result {
    egui::TopBottomPanel::bottom("status_bar").show(contexts.ctx_mut()?, |ui| {
        ui.horizontal(|ui| {
            match status.latest() {
                Some(entry) => {
                    ui.label(
                        egui::RichText::new(&entry.message)
                            .size(13.0)
                            .color(kind_color(entry.kind)),
                    );
                }
                None => {
                    ui.label(egui::RichText::new("Ready").size(13.0).weak());
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Settings").clicked() && !settings.is_open {
                    settings.load_from_config(&config);
                    settings.is_open = true;
                }
                let label = if history.is_open {
                    "Hide History"
                } else {
                    "History"
                };
                if ui.small_button(label).clicked() {
                    history.is_open = !history.is_open;
                }
            });
        });
    });

    if !history.is_open {
        return Ok(());
    }

    egui::Window::new("Status History")
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -36.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                if status.is_empty() {
                    ui.label(egui::RichText::new("No messages yet").weak().italics());
                    return;
                }
                for entry in status.iter_recent() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(entry.time.format("%H:%M:%S").to_string())
                                .size(11.0)
                                .weak(),
                        );
                        ui.label(
                            egui::RichText::new(&entry.message)
                                .size(12.0)
                                .color(kind_color(entry.kind)),
                        );
                    });
                }
            });
            if ui.button("Close").clicked() {
                history.is_open = false;
            }
        });

    Ok(())
}

fn kind_color(kind: StatusKind) -> egui::Color32 {
    match kind {
        StatusKind::Info => theme::STATUS_INFO,
        StatusKind::Warning => theme::STATUS_WARN,
    }
}
