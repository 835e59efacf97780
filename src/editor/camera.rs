use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::{CAMERA_MAX_DISTANCE, CAMERA_MAX_PITCH, CAMERA_MIN_DISTANCE};

/// Rate at which shift-drag panning moves the focus, scaled by distance.
const PAN_RATE: f32 = 0.0015;

/// Orbit state around a focus point. The render transform is derived from
/// this whenever it changes.
#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.6,
            pitch: 0.45,
            distance: 14.0,
        }
    }
}

impl OrbitCamera {
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.focus, Vec3::Y)
    }
}

pub fn spawn_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let transform = orbit.transform();
    commands.spawn((Camera3d::default(), orbit, transform));
}

/// Middle-drag orbits; shift+middle-drag pans the focus point.
pub fn camera_orbit(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    config: Res<AppConfig>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    let shift_held = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    for event in mouse_motion.read() {
        if shift_held {
            let rotation = orbit.transform().rotation;
            let right = rotation * Vec3::X;
            let up = rotation * Vec3::Y;
            let rate = orbit.distance * PAN_RATE;
            orbit.focus += (up * event.delta.y - right * event.delta.x) * rate;
        } else {
            orbit.yaw -= event.delta.x * config.data.orbit_sensitivity;
            orbit.pitch = (orbit.pitch + event.delta.y * config.data.orbit_sensitivity)
                .clamp(-CAMERA_MAX_PITCH, CAMERA_MAX_PITCH);
        }
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    config: Res<AppConfig>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.01,
        };

        orbit.distance = (orbit.distance * (1.0 - scroll_amount * config.data.zoom_sensitivity))
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }
}

pub fn apply_camera_orbit(
    mut camera_query: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>,
) {
    for (orbit, mut transform) in camera_query.iter_mut() {
        *transform = orbit.transform();
    }
}
