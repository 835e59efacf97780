//! Pure formatting helpers for clipboard slot summaries.

use bevy::prelude::*;

use crate::scene::{MaterialLibrary, Rotation};

use super::types::Payload;

pub fn fmt_vec3(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}

pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    match count {
        0 => format!("no {}", plural),
        1 => format!("1 {}", singular),
        n => format!("{} {}", n, plural),
    }
}

pub fn rotation_summary(rotation: &Rotation) -> String {
    match rotation {
        Rotation::Euler(angles) => format!("Euler (XYZ) {}", fmt_vec3(*angles)),
        Rotation::Quaternion(q) => {
            format!("Quaternion ({:.2}, {:.2}, {:.2}, {:.2})", q.x, q.y, q.z, q.w)
        }
        Rotation::AxisAngle { axis, angle } => {
            format!("Axis-Angle {} @ {:.2}", fmt_vec3(*axis), angle)
        }
    }
}

/// One-line description of a stored payload for the panel's slot labels.
/// `parent_name` is the resolved name of a parent payload's referenced
/// object, when there is one to resolve.
pub fn payload_summary(
    payload: &Payload,
    materials: &MaterialLibrary,
    parent_name: Option<&str>,
) -> String {
    match payload {
        Payload::FullTransform(snapshot) => format!(
            "{} / {} / {}",
            fmt_vec3(snapshot.location),
            snapshot.rotation.mode().display_name(),
            fmt_vec3(snapshot.scale),
        ),
        Payload::Location(location) => fmt_vec3(*location),
        Payload::Rotation(rotation) => rotation_summary(rotation),
        Payload::Scale(scale) => fmt_vec3(*scale),
        Payload::Modifiers(snapshots) => count_label(snapshots.len(), "modifier", "modifiers"),
        Payload::Materials(handles) => {
            if handles.is_empty() {
                "no materials".to_string()
            } else {
                let names: Vec<&str> = handles
                    .iter()
                    .map(|handle| materials.name_of(handle).unwrap_or("unnamed"))
                    .collect();
                names.join(", ")
            }
        }
        Payload::Constraints(snapshots) => {
            count_label(snapshots.len(), "constraint", "constraints")
        }
        Payload::Parent(snapshot) => {
            if snapshot.parent.is_some() {
                format!(
                    "to '{}' ({})",
                    parent_name.unwrap_or("missing"),
                    snapshot.mode.display_name()
                )
            } else {
                "no parent".to_string()
            }
        }
        Payload::CustomProperties(entries) => {
            count_label(entries.len(), "property", "properties")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_pluralizes() {
        assert_eq!(count_label(0, "modifier", "modifiers"), "no modifiers");
        assert_eq!(count_label(1, "modifier", "modifiers"), "1 modifier");
        assert_eq!(count_label(3, "property", "properties"), "3 properties");
    }

    #[test]
    fn test_rotation_summary_carries_mode() {
        let euler = Rotation::Euler(Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(rotation_summary(&euler), "Euler (XYZ) (0.00, 1.50, 0.00)");

        let quat = Rotation::Quaternion(Quat::IDENTITY);
        assert!(rotation_summary(&quat).starts_with("Quaternion"));
    }

    #[test]
    fn test_material_summary_uses_library_names() {
        let mut assets: Assets<StandardMaterial> = Assets::default();
        let mut library = MaterialLibrary::default();
        let brass = assets.add(StandardMaterial::default());
        let jade = assets.add(StandardMaterial::default());
        library.insert("Brass", brass.clone());
        library.insert("Jade", jade.clone());

        let payload = Payload::Materials(vec![jade, brass]);
        assert_eq!(payload_summary(&payload, &library, None), "Jade, Brass");
    }

    #[test]
    fn test_parent_summary_without_parent() {
        let payload = Payload::Parent(crate::editor::clipboard::ParentSnapshot {
            parent: None,
            mode: crate::scene::ParentMode::KeepTransform,
            inverse: Mat4::IDENTITY,
        });
        let library = MaterialLibrary::default();
        assert_eq!(payload_summary(&payload, &library, None), "no parent");
    }
}
