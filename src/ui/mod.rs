mod clipboard_panel;
mod inspector;
mod settings;
mod status_bar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<clipboard_panel::ParentingUiState>()
            .init_resource::<inspector::InspectorState>()
            .init_resource::<status_bar::StatusHistoryState>()
            .init_resource::<settings::SettingsWindowState>()
            // Side panels must render first so the bottom bar fits between
            // them; use chain() to enforce ordering
            .add_systems(
                EguiPrimaryContextPass,
                (
                    clipboard_panel::clipboard_panel_ui,
                    inspector::inspector_ui,
                    status_bar::status_bar_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Last: dialogs/overlays
                    settings::settings_window_ui,
                    settings::config_reset_notification_ui,
                )
                    .after(status_bar::status_bar_ui),
            );
    }
}
