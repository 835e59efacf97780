//! Keyboard shortcuts for selection operations.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::editor::status::StatusLog;

use super::Selection;

/// Delete or X removes every selected object.
pub fn handle_deletion(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<Selection>,
    mut status: ResMut<StatusLog>,
    mut contexts: EguiContexts,
) {
    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let should_delete =
        keyboard.just_pressed(KeyCode::Delete) || keyboard.just_pressed(KeyCode::KeyX);
    if !should_delete || selection.is_empty() {
        return;
    }

    let count = selection.len();
    for entity in selection.targets() {
        commands.entity(entity).despawn();
    }
    selection.clear();
    status.info(format!("Deleted {} object(s)", count));
}

/// Clear selection when Escape is pressed
pub fn handle_escape_clear_selection(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<Selection>,
    mut contexts: EguiContexts,
) {
    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) && !selection.is_empty() {
        selection.clear();
    }
}
