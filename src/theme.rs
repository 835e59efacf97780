//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the viewport and UI.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Viewport Colors
// ============================================================================

/// Semi-transparent grey ground grid lines
pub const GRID_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.28);

/// World X axis line (muted red)
pub const AXIS_X_COLOR: Color = Color::srgba(0.84, 0.3, 0.36, 0.8);

/// World Z axis line (muted blue)
pub const AXIS_Z_COLOR: Color = Color::srgba(0.3, 0.45, 0.84, 0.8);

/// Background clear color for the 3D viewport
pub const VIEWPORT_CLEAR: Color = Color::srgb(0.16, 0.16, 0.18);

// ============================================================================
// Selection Colors
// ============================================================================

/// Orange outline for selected objects
pub const SELECTION_COLOR: Color = Color::srgb(0.93, 0.42, 0.05);

/// Brighter outline for the active object (the copy source)
pub const ACTIVE_COLOR: Color = Color::srgb(1.0, 0.66, 0.25);

// ============================================================================
// Status Colors (egui)
// ============================================================================

/// Informational status messages
pub const STATUS_INFO: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);

/// Warning status messages (skipped targets, empty slots)
pub const STATUS_WARN: egui::Color32 = egui::Color32::from_rgb(235, 170, 80);

/// Accent color for panel section headings
pub const SECTION_HEADING: egui::Color32 = egui::Color32::from_rgb(150, 180, 220);

/// Weak text for slot summaries ("nothing copied")
pub const SUMMARY_EMPTY: egui::Color32 = egui::Color32::from_rgb(120, 120, 120);

/// Text for filled slot summaries
pub const SUMMARY_FILLED: egui::Color32 = egui::Color32::from_rgb(170, 200, 170);
