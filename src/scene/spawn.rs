//! Primitive shapes, object spawning and startup scene population.

use bevy::prelude::*;

use crate::editor::select::PickBounds;
use crate::editor::status::StatusLog;

use super::constraint::{Constraint, ConstraintKind, ConstraintStack};
use super::material::{MaterialLibrary, MaterialSlots};
use super::modifier::{Modifier, ModifierKind, ModifierStack};
use super::object::SceneObject;
use super::parenting::{ParentLink, ParentMode};
use super::properties::{CustomProperties, PropValue};
use super::transform::{ObjectTransform, Rotation};

/// Primitive shapes the sandbox can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Torus,
}

impl Shape {
    pub fn all() -> [Shape; 5] {
        [
            Shape::Cube,
            Shape::Sphere,
            Shape::Cylinder,
            Shape::Cone,
            Shape::Torus,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Shape::Cube => "Cube",
            Shape::Sphere => "Sphere",
            Shape::Cylinder => "Cylinder",
            Shape::Cone => "Cone",
            Shape::Torus => "Torus",
        }
    }

    fn mesh(&self) -> Mesh {
        match self {
            Shape::Cube => Mesh::from(Cuboid::new(1.0, 1.0, 1.0)),
            Shape::Sphere => Mesh::from(Sphere::new(0.5)),
            Shape::Cylinder => Mesh::from(Cylinder::new(0.4, 1.2)),
            Shape::Cone => Mesh::from(Cone {
                radius: 0.6,
                height: 1.2,
            }),
            Shape::Torus => Mesh::from(Torus::new(0.25, 0.75)),
        }
    }

    /// Local-space picking box matching [`Shape::mesh`] dimensions.
    fn half_extents(&self) -> Vec3 {
        match self {
            Shape::Cube => Vec3::splat(0.5),
            Shape::Sphere => Vec3::splat(0.5),
            Shape::Cylinder => Vec3::new(0.4, 0.6, 0.4),
            Shape::Cone => Vec3::new(0.6, 0.6, 0.6),
            Shape::Torus => Vec3::new(0.75, 0.25, 0.75),
        }
    }
}

/// Request to add a new object of the given shape to the scene.
#[derive(Message)]
pub struct SpawnObjectRequest {
    pub shape: Shape,
}

/// Spawns requested primitives with the full attribute set every object
/// carries. New objects rest on the ground plane with the fallback material.
pub fn handle_spawn_requests(
    mut requests: MessageReader<SpawnObjectRequest>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    library: Res<MaterialLibrary>,
    names: Query<&SceneObject>,
    mut status: ResMut<StatusLog>,
) {
    for request in requests.read() {
        let shape = request.shape;
        let taken: Vec<&str> = names.iter().map(|object| object.name.as_str()).collect();
        let name = unique_name(shape.display_name(), &taken);

        let transform = ObjectTransform {
            location: Vec3::new(0.0, shape.half_extents().y, 0.0),
            ..Default::default()
        };
        spawn_object(
            &mut commands,
            &mut meshes,
            shape,
            &name,
            transform,
            vec![library.fallback.clone()],
        );
        status.info(format!("Added '{name}'"));
    }
}

/// First free name in the sequence `Cube`, `Cube.001`, `Cube.002`, ...
fn unique_name(base: &str, taken: &[&str]) -> String {
    let mut name = base.to_string();
    let mut suffix = 1;
    while taken.contains(&name.as_str()) {
        name = format!("{base}.{suffix:03}");
        suffix += 1;
    }
    name
}

fn spawn_object(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    shape: Shape,
    name: &str,
    transform: ObjectTransform,
    slots: Vec<Handle<StandardMaterial>>,
) -> Entity {
    let render_material = slots.first().cloned().unwrap_or_default();
    let render_transform = Transform::from_matrix(transform.local_matrix());
    commands
        .spawn((
            SceneObject::new(name),
            transform,
            ModifierStack::default(),
            MaterialSlots(slots),
            ConstraintStack::default(),
            ParentLink::default(),
            CustomProperties::default(),
            PickBounds::new(shape.half_extents()),
            Mesh3d(meshes.add(shape.mesh())),
            MeshMaterial3d(render_material),
            render_transform,
        ))
        .id()
}

/// Builds the material library, lights and the demo objects.
///
/// Every attribute category starts populated somewhere in the scene, so each
/// copy slot has meaningful data to pick up from the first frame on.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut status: ResMut<StatusLog>,
) {
    let mut library = MaterialLibrary::default();
    library.fallback = materials.add(StandardMaterial {
        base_color: Color::srgb(0.62, 0.6, 0.58),
        perceptual_roughness: 0.9,
        ..default()
    });
    library.insert("Clay", library.fallback.clone());
    library.insert(
        "Brass",
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.71, 0.52, 0.26),
            metallic: 1.0,
            perceptual_roughness: 0.35,
            ..default()
        }),
    );
    library.insert(
        "Copper",
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.72, 0.45, 0.2),
            metallic: 1.0,
            perceptual_roughness: 0.45,
            ..default()
        }),
    );
    library.insert(
        "Jade",
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.65, 0.5),
            perceptual_roughness: 0.4,
            ..default()
        }),
    );
    library.insert(
        "Porcelain",
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.92, 0.9, 0.87),
            perceptual_roughness: 0.2,
            ..default()
        }),
    );
    library.insert(
        "Slate",
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.37, 0.4),
            perceptual_roughness: 0.8,
            ..default()
        }),
    );

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let pedestal_transform = ObjectTransform {
        location: Vec3::new(-2.5, 0.5, 0.0),
        ..Default::default()
    };
    let pedestal = spawn_object(
        &mut commands,
        &mut meshes,
        Shape::Cube,
        "Pedestal",
        pedestal_transform.clone(),
        vec![library
            .get("Brass")
            .unwrap_or_else(|| library.fallback.clone())],
    );
    let mut pedestal_modifiers = ModifierStack::default();
    pedestal_modifiers.0.push(Modifier::new(ModifierKind::Bevel));
    let mut pedestal_props = CustomProperties::default();
    pedestal_props
        .0
        .insert("polish".to_string(), PropValue::Float(0.6));
    pedestal_props
        .0
        .insert("museum_id".to_string(), PropValue::Int(104));
    commands
        .entity(pedestal)
        .insert((pedestal_modifiers, pedestal_props));

    let orb = spawn_object(
        &mut commands,
        &mut meshes,
        Shape::Sphere,
        "Orb",
        ObjectTransform {
            location: Vec3::new(0.0, 0.5, 0.0),
            rotation: Rotation::Quaternion(Quat::from_rotation_y(0.8)),
            ..Default::default()
        },
        vec![
            library
                .get("Jade")
                .unwrap_or_else(|| library.fallback.clone()),
            library
                .get("Porcelain")
                .unwrap_or_else(|| library.fallback.clone()),
        ],
    );
    let mut orb_constraints = ConstraintStack::default();
    orb_constraints
        .0
        .push(Constraint::new(ConstraintKind::LimitDistance));
    let mut orb_props = CustomProperties::default();
    orb_props
        .0
        .insert("label".to_string(), PropValue::Text("exhibit".to_string()));
    commands.entity(orb).insert((orb_constraints, orb_props));

    // The column rides on the pedestal: same world = parent * inverse * local
    // chain the parenting tools produce interactively
    let column = spawn_object(
        &mut commands,
        &mut meshes,
        Shape::Cylinder,
        "Column",
        ObjectTransform {
            location: Vec3::new(-2.5, 1.6, 0.0),
            ..Default::default()
        },
        vec![library
            .get("Slate")
            .unwrap_or_else(|| library.fallback.clone())],
    );
    let mut column_modifiers = ModifierStack::default();
    column_modifiers.0.push(Modifier::new(ModifierKind::Array));
    column_modifiers
        .0
        .push(Modifier::new(ModifierKind::Subdivision));
    commands.entity(column).insert((
        column_modifiers,
        ParentLink {
            parent: Some(pedestal),
            mode: ParentMode::KeepTransform,
            inverse: pedestal_transform.local_matrix().inverse(),
        },
    ));

    let halo = spawn_object(
        &mut commands,
        &mut meshes,
        Shape::Torus,
        "Halo",
        ObjectTransform {
            location: Vec3::new(0.0, 2.2, 0.0),
            rotation: Rotation::AxisAngle {
                axis: Vec3::X,
                angle: 1.2,
            },
            scale: Vec3::splat(0.8),
        },
        vec![library
            .get("Copper")
            .unwrap_or_else(|| library.fallback.clone())],
    );
    let mut halo_constraints = ConstraintStack::default();
    halo_constraints
        .0
        .push(Constraint::new(ConstraintKind::TrackTo));
    commands.entity(halo).insert(halo_constraints);

    commands.insert_resource(library);
    status.info("Demo scene ready: 4 objects");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name_skips_taken_suffixes() {
        assert_eq!(unique_name("Cube", &[]), "Cube");
        assert_eq!(unique_name("Cube", &["Cube"]), "Cube.001");
        assert_eq!(unique_name("Cube", &["Cube", "Cube.001"]), "Cube.002");
        // Holes left by deletions are reused
        assert_eq!(unique_name("Cube", &["Cube.001"]), "Cube");
    }

    #[test]
    fn test_half_extents_cover_every_shape() {
        for shape in Shape::all() {
            let extents = shape.half_extents();
            assert!(extents.cmpgt(Vec3::ZERO).all(), "{}", shape.display_name());
        }
    }
}
