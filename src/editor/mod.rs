mod camera;
mod clipboard;
mod grid;
pub mod params;
pub mod select;
pub mod status;

pub use camera::OrbitCamera;
pub use clipboard::{
    payload_summary, AttributeClipboard, Category, CopyRequest, PasteRequest, Payload,
    TransferStatus,
};
pub use select::Selection;
pub use status::{StatusEntry, StatusKind, StatusLog};

use bevy::prelude::*;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .init_resource::<StatusLog>()
            .init_resource::<AttributeClipboard>()
            .add_message::<CopyRequest>()
            .add_message::<PasteRequest>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(
                Update,
                (
                    camera::camera_orbit,
                    camera::camera_zoom,
                    camera::apply_camera_orbit,
                    grid::draw_grid,
                ),
            )
            .add_systems(
                Update,
                // Chained so despawns and marker updates land before the
                // outlines read them
                (
                    select::handle_viewport_pick,
                    select::handle_deletion,
                    select::handle_escape_clear_selection,
                    select::prune_selection,
                    select::sync_selected_markers,
                    select::draw_selection_outlines,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    clipboard::handle_copy_shortcut,
                    clipboard::handle_paste_shortcut,
                    clipboard::handle_copy_requests.run_if(on_message::<CopyRequest>),
                    clipboard::handle_paste_requests.run_if(on_message::<PasteRequest>),
                )
                    .chain(),
            );
    }
}
