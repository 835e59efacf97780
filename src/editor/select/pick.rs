//! Viewport picking: cursor ray against world-space object bounds.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::editor::params::{is_cursor_over_ui, CameraParams};
use crate::scene::SceneObject;

use super::Selection;

/// Local-space half extents of an object's pick volume, sized with the mesh
/// at spawn time.
#[derive(Component, Debug, Clone, Copy)]
pub struct PickBounds {
    pub half_extents: Vec3,
}

impl PickBounds {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }
}

/// World-space AABB of a local box under `matrix`, from its transformed
/// corners. Conservative for rotated objects, which is fine for picking.
pub fn world_aabb(matrix: Mat4, half_extents: Vec3) -> (Vec3, Vec3) {
    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);

    for sx in [-1.0f32, 1.0] {
        for sy in [-1.0f32, 1.0] {
            for sz in [-1.0f32, 1.0] {
                let corner =
                    matrix.transform_point3(half_extents * Vec3::new(sx, sy, sz));
                min = min.min(corner);
                max = max.max(corner);
            }
        }
    }

    (min, max)
}

/// Slab test. Returns the entry distance along the ray (0 when the origin is
/// inside the box), or `None` on a miss.
pub fn ray_aabb_intersection(ray: Ray3d, min: Vec3, max: Vec3) -> Option<f32> {
    let inv_dir = ray.direction.recip();
    let t1 = (min - ray.origin) * inv_dir;
    let t2 = (max - ray.origin) * inv_dir;

    let near = t1.min(t2).max_element();
    let far = t1.max(t2).min_element();

    (near <= far && far >= 0.0).then_some(near.max(0.0))
}

/// Click to select the nearest object under the cursor; shift-click to
/// extend or toggle. Clicking empty space clears the selection.
pub fn handle_viewport_pick(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    objects: Query<(Entity, &Transform, &PickBounds), With<SceneObject>>,
    mut selection: ResMut<Selection>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    // Don't interact if over UI
    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(ray) = camera.cursor_ray() else {
        return;
    };

    let shift_held = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    let mut hit: Option<(Entity, f32)> = None;
    for (entity, transform, bounds) in objects.iter() {
        let matrix = Mat4::from_scale_rotation_translation(
            transform.scale,
            transform.rotation,
            transform.translation,
        );
        let (min, max) = world_aabb(matrix, bounds.half_extents);
        if let Some(t) = ray_aabb_intersection(ray, min, max) {
            match hit {
                Some((_, best)) if t >= best => {}
                _ => hit = Some((entity, t)),
            }
        }
    }

    match hit {
        Some((entity, _)) => {
            if shift_held {
                selection.shift_click(entity);
            } else {
                selection.click(entity);
            }
        }
        None if !shift_held => selection.clear(),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn ray(origin: Vec3, direction: Vec3) -> Ray3d {
        Ray3d {
            origin,
            direction: Dir3::new(direction).unwrap(),
        }
    }

    #[test]
    fn test_ray_hits_box_head_on() {
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = ray_aabb_intersection(r, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn test_ray_misses_offset_box() {
        let r = ray(Vec3::new(5.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = ray_aabb_intersection(r, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(t, None);
    }

    #[test]
    fn test_ray_origin_inside_box_hits_at_zero() {
        let r = ray(Vec3::ZERO, Vec3::NEG_Z);
        let t = ray_aabb_intersection(r, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn test_box_behind_ray_is_missed() {
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        let t = ray_aabb_intersection(r, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(t, None);
    }

    #[test]
    fn test_diagonal_ray_hits_corner_region() {
        let r = ray(Vec3::new(3.0, 0.0, 3.0), Vec3::new(-1.0, 0.0, -1.0));
        let t = ray_aabb_intersection(r, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(t.is_some());
        // Entry at (1, 0, 1): distance is 2 * sqrt(2)
        let expected = 2.0 * 2.0_f32.sqrt();
        assert!((t.unwrap() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_world_aabb_translation() {
        let matrix = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let (min, max) = world_aabb(matrix, Vec3::splat(1.0));
        assert!(min.distance(Vec3::new(9.0, -1.0, -1.0)) < 1e-5);
        assert!(max.distance(Vec3::new(11.0, 1.0, 1.0)) < 1e-5);
    }

    #[test]
    fn test_world_aabb_rotation_expands_bounds() {
        // Unit cube rotated 45 degrees about Y: x/z extents grow to sqrt(2)
        let matrix = Mat4::from_rotation_y(FRAC_PI_4);
        let (min, max) = world_aabb(matrix, Vec3::splat(1.0));
        let expected = 2.0_f32.sqrt();
        assert!((max.x - expected).abs() < 1e-4);
        assert!((max.z - expected).abs() < 1e-4);
        assert!((min.x + expected).abs() < 1e-4);
        assert!((max.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_world_aabb_scale() {
        let matrix = Mat4::from_scale(Vec3::new(2.0, 1.0, 0.5));
        let (min, max) = world_aabb(matrix, Vec3::splat(1.0));
        assert!(min.distance(Vec3::new(-2.0, -1.0, -0.5)) < 1e-5);
        assert!(max.distance(Vec3::new(2.0, 1.0, 0.5)) < 1e-5);
    }
}
