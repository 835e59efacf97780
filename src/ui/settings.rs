use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, AppConfigData, ConfigResetNotification, SaveConfigRequest};

/// State for the settings window
#[derive(Resource, Default)]
pub struct SettingsWindowState {
    /// Whether the window is open
    pub is_open: bool,
    /// Working copy of the config, applied on Save
    pub edited: AppConfigData,
    /// Whether changes have been made
    pub has_changes: bool,
}

impl SettingsWindowState {
    /// Initialize the window state from current config
    pub fn load_from_config(&mut self, config: &AppConfig) {
        self.edited = config.data.clone();
        self.has_changes = false;
    }
}

/// Renders the settings window
pub fn settings_window_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<SettingsWindowState>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    if !state.is_open {
        return Ok(());
    }

    let mut should_close = false;
    let mut should_save = false;
    let config_path = config.config_path.display().to_string();

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.heading("Viewport Settings");
            ui.add_space(12.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Viewport").strong());
                ui.add_space(8.0);
                if ui
                    .checkbox(&mut state.edited.show_grid, "Show ground grid")
                    .changed()
                {
                    state.has_changes = true;
                }
            });

            ui.add_space(12.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Camera").strong());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("Orbit sensitivity:");
                    if ui
                        .add(
                            egui::DragValue::new(&mut state.edited.orbit_sensitivity)
                                .speed(0.0005),
                        )
                        .changed()
                    {
                        state.edited.orbit_sensitivity =
                            state.edited.orbit_sensitivity.clamp(0.0005, 0.05);
                        state.has_changes = true;
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Zoom sensitivity:");
                    if ui
                        .add(
                            egui::DragValue::new(&mut state.edited.zoom_sensitivity)
                                .speed(0.005),
                        )
                        .changed()
                    {
                        state.edited.zoom_sensitivity =
                            state.edited.zoom_sensitivity.clamp(0.01, 0.5);
                        state.has_changes = true;
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("Stored at {}", config_path))
                    .weak()
                    .small(),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(state.has_changes, egui::Button::new("Save"))
                    .clicked()
                {
                    should_save = true;
                }

                if ui.button("Cancel").clicked() {
                    should_close = true;
                }
            });
        });

    if should_save {
        config.data = state.edited.clone();
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        state.has_changes = false;
        should_close = true;
    }

    if should_close {
        state.is_open = false;
    }

    Ok(())
}

/// Renders the notification shown when the config file could not be loaded
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be loaded and were reset to defaults:");

            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }

            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
            }
        });

    Ok(())
}
