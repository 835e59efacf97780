use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::{GRID_EXTENT, GRID_SPACING};
use crate::theme;

pub fn draw_grid(mut gizmos: Gizmos, config: Res<AppConfig>) {
    if !config.data.show_grid {
        return;
    }

    let extent = GRID_EXTENT as f32 * GRID_SPACING;

    for i in -GRID_EXTENT..=GRID_EXTENT {
        if i == 0 {
            // Axis lines drawn below in their own colors
            continue;
        }
        let offset = i as f32 * GRID_SPACING;
        gizmos.line(
            Vec3::new(offset, 0.0, -extent),
            Vec3::new(offset, 0.0, extent),
            theme::GRID_COLOR,
        );
        gizmos.line(
            Vec3::new(-extent, 0.0, offset),
            Vec3::new(extent, 0.0, offset),
            theme::GRID_COLOR,
        );
    }

    gizmos.line(
        Vec3::new(-extent, 0.0, 0.0),
        Vec3::new(extent, 0.0, 0.0),
        theme::AXIS_X_COLOR,
    );
    gizmos.line(
        Vec3::new(0.0, 0.0, -extent),
        Vec3::new(0.0, 0.0, extent),
        theme::AXIS_Z_COLOR,
    );
}
