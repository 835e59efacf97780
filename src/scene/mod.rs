//! Scene objects and the attributes the clipboard works on.
//!
//! Every object carries the full attribute set: a mode-tagged transform,
//! modifier and constraint stacks, shared material slots, an explicit parent
//! link and free-form custom properties. The plugin keeps the rendered
//! transforms and materials derived from that authored state.

mod constraint;
mod material;
mod modifier;
mod object;
mod parenting;
mod properties;
mod spawn;
mod sync;
mod transform;

pub use constraint::{Constraint, ConstraintKind, ConstraintStack};
pub use material::{MaterialLibrary, MaterialSlots};
pub use modifier::{Modifier, ModifierKind, ModifierStack};
pub use object::{SceneObject, Selected};
pub use parenting::{
    resolve_world_matrix, would_create_cycle, ClearParentRequest, LocalFrame, ParentLink,
    ParentMode, ParentToActiveRequest,
};
pub use properties::{CustomProperties, PropValue};
pub use spawn::{Shape, SpawnObjectRequest};
pub use transform::{ObjectTransform, Rotation, RotationMode};

use bevy::prelude::*;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MaterialLibrary>()
            .add_message::<SpawnObjectRequest>()
            .add_message::<ParentToActiveRequest>()
            .add_message::<ClearParentRequest>()
            .add_systems(Startup, spawn::setup_scene)
            .add_systems(
                Update,
                (
                    spawn::handle_spawn_requests.run_if(on_message::<SpawnObjectRequest>),
                    parenting::handle_parent_to_active
                        .run_if(on_message::<ParentToActiveRequest>),
                    parenting::handle_clear_parent.run_if(on_message::<ClearParentRequest>),
                    parenting::prune_dangling_parents,
                    sync::sync_render_transforms,
                    sync::sync_material_slots,
                )
                    .chain(),
            );
    }
}
