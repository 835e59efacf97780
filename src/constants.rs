//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Half-extent of the ground grid in world units (grid spans -N..N)
pub const GRID_EXTENT: i32 = 10;

/// Spacing between ground grid lines in world units
pub const GRID_SPACING: f32 = 1.0;

/// Closest the orbit camera may dolly in
pub const CAMERA_MIN_DISTANCE: f32 = 1.5;

/// Farthest the orbit camera may dolly out
pub const CAMERA_MAX_DISTANCE: f32 = 60.0;

/// Pitch clamp for the orbit camera, just short of the poles (radians)
pub const CAMERA_MAX_PITCH: f32 = 1.54;

/// Upper bound on parent-chain depth when resolving world matrices.
/// Parent writes are cycle-checked, so this only backstops corrupt state.
pub const MAX_PARENT_DEPTH: usize = 64;

/// Maximum number of status messages kept in the history log
pub const STATUS_LOG_CAPACITY: usize = 64;
