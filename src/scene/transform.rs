//! Object-space transforms with an explicit rotation representation.
//!
//! Unlike Bevy's render [`Transform`], which always stores a quaternion, a
//! scene object keeps its rotation in whichever representation the user is
//! editing it in (Euler XYZ, quaternion, or axis-angle). The representation
//! tag and the numbers live in one enum value, so they can never drift apart:
//! reading or writing a rotation always moves both together.

use bevy::prelude::*;

/// Rotation representation tag, used by the inspector's mode switcher and by
/// clipboard slot summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    Euler,
    Quaternion,
    AxisAngle,
}

impl RotationMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            RotationMode::Euler => "Euler (XYZ)",
            RotationMode::Quaternion => "Quaternion",
            RotationMode::AxisAngle => "Axis-Angle",
        }
    }

    pub fn all() -> &'static [RotationMode] {
        &[
            RotationMode::Euler,
            RotationMode::Quaternion,
            RotationMode::AxisAngle,
        ]
    }
}

/// A rotation in one of the three supported representations.
///
/// Euler angles are radians, applied in XYZ order. Axis-angle axes and
/// quaternion values do not have to be normalized; a zero axis or zero
/// quaternion means no rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    Euler(Vec3),
    Quaternion(Quat),
    AxisAngle { axis: Vec3, angle: f32 },
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::Euler(Vec3::ZERO)
    }
}

impl Rotation {
    pub fn mode(&self) -> RotationMode {
        match self {
            Rotation::Euler(_) => RotationMode::Euler,
            Rotation::Quaternion(_) => RotationMode::Quaternion,
            Rotation::AxisAngle { .. } => RotationMode::AxisAngle,
        }
    }

    /// Canonical quaternion form, used for rendering and matrix composition.
    pub fn to_quat(&self) -> Quat {
        match *self {
            Rotation::Euler(e) => Quat::from_euler(EulerRot::XYZ, e.x, e.y, e.z),
            Rotation::Quaternion(q) => {
                if q.length_squared() > f32::EPSILON {
                    q.normalize()
                } else {
                    Quat::IDENTITY
                }
            }
            Rotation::AxisAngle { axis, angle } => {
                if axis.length_squared() > f32::EPSILON {
                    Quat::from_axis_angle(axis.normalize(), angle)
                } else {
                    Quat::IDENTITY
                }
            }
        }
    }

    /// Re-express the same orientation in another representation.
    ///
    /// Returns `self` unchanged when the mode already matches, so repeated
    /// switching does not accumulate conversion error.
    pub fn convert_to(&self, mode: RotationMode) -> Rotation {
        if self.mode() == mode {
            return *self;
        }
        let q = self.to_quat();
        match mode {
            RotationMode::Euler => {
                let (x, y, z) = q.to_euler(EulerRot::XYZ);
                Rotation::Euler(Vec3::new(x, y, z))
            }
            RotationMode::Quaternion => Rotation::Quaternion(q),
            RotationMode::AxisAngle => {
                let (axis, angle) = q.to_axis_angle();
                Rotation::AxisAngle { axis, angle }
            }
        }
    }
}

/// The authoritative transform of a scene object.
///
/// `scene::sync` bakes this (together with any parent link) into the render
/// [`Transform`] each frame; nothing else writes the render transform.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ObjectTransform {
    pub location: Vec3,
    pub rotation: Rotation,
    pub scale: Vec3,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            rotation: Rotation::default(),
            scale: Vec3::ONE,
        }
    }
}

impl ObjectTransform {
    /// Local-space matrix (before parenting is applied)
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation.to_quat(),
            self.location,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_quat_close(a: Quat, b: Quat) {
        // q and -q are the same orientation
        assert!(a.dot(b).abs() > 0.9999, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn test_default_rotation_is_euler_zero() {
        let r = Rotation::default();
        assert_eq!(r.mode(), RotationMode::Euler);
        assert_quat_close(r.to_quat(), Quat::IDENTITY);
    }

    #[test]
    fn test_euler_to_quat_quarter_turn() {
        let r = Rotation::Euler(Vec3::new(0.0, FRAC_PI_2, 0.0));
        assert_quat_close(r.to_quat(), Quat::from_rotation_y(FRAC_PI_2));
    }

    #[test]
    fn test_zero_axis_angle_is_identity() {
        let r = Rotation::AxisAngle {
            axis: Vec3::ZERO,
            angle: 1.3,
        };
        assert_quat_close(r.to_quat(), Quat::IDENTITY);
    }

    #[test]
    fn test_axis_does_not_need_normalizing() {
        let r = Rotation::AxisAngle {
            axis: Vec3::new(0.0, 10.0, 0.0),
            angle: FRAC_PI_2,
        };
        assert_quat_close(r.to_quat(), Quat::from_rotation_y(FRAC_PI_2));
    }

    #[test]
    fn test_zero_quaternion_reads_as_identity() {
        // A raw-component editor can zero all four values at once
        let r = Rotation::Quaternion(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        assert_eq!(r.to_quat(), Quat::IDENTITY);

        let m = ObjectTransform {
            rotation: r,
            ..Default::default()
        }
        .local_matrix();
        assert!(m.is_finite());
    }

    #[test]
    fn test_quaternion_does_not_need_normalizing() {
        let r = Rotation::Quaternion(Quat::from_rotation_y(FRAC_PI_2) * 3.0);
        assert_quat_close(r.to_quat(), Quat::from_rotation_y(FRAC_PI_2));
    }

    #[test]
    fn test_convert_preserves_orientation() {
        let original = Rotation::Euler(Vec3::new(0.3, -0.7, 1.1));
        let q = original.to_quat();

        for mode in RotationMode::all() {
            let converted = original.convert_to(*mode);
            assert_eq!(converted.mode(), *mode);
            assert_quat_close(converted.to_quat(), q);
        }
    }

    #[test]
    fn test_convert_to_same_mode_is_identity() {
        let original = Rotation::Euler(Vec3::new(0.25, 0.5, 0.75));
        let converted = original.convert_to(RotationMode::Euler);
        // Exact equality: no quaternion round trip happened
        assert_eq!(converted, original);
    }

    #[test]
    fn test_convert_chain_round_trip() {
        let original = Rotation::Quaternion(Quat::from_rotation_x(0.9));
        let back = original
            .convert_to(RotationMode::AxisAngle)
            .convert_to(RotationMode::Euler)
            .convert_to(RotationMode::Quaternion);
        assert_eq!(back.mode(), RotationMode::Quaternion);
        assert_quat_close(back.to_quat(), original.to_quat());
    }

    #[test]
    fn test_object_transform_default() {
        let xf = ObjectTransform::default();
        assert_eq!(xf.location, Vec3::ZERO);
        assert_eq!(xf.scale, Vec3::ONE);
        assert_eq!(xf.rotation.mode(), RotationMode::Euler);
    }

    #[test]
    fn test_local_matrix_translation_only() {
        let xf = ObjectTransform {
            location: Vec3::new(1.0, 2.0, 3.0),
            ..Default::default()
        };
        let m = xf.local_matrix();
        let p = m.transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_local_matrix_applies_scale() {
        let xf = ObjectTransform {
            scale: Vec3::splat(2.0),
            ..Default::default()
        };
        let p = xf.local_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }
}
