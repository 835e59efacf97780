//! Attribute clipboard for copy/paste between scene objects.
//!
//! This module provides the per-category attribute clipboard: copying reads one
//! category (transform, modifiers, materials, constraints, parent link, custom
//! properties) from the active object into its slot, and pasting applies that
//! slot onto every selected object. Each category keeps at most one payload;
//! copying again overwrites it, and nothing ever clears a slot.
//!
//! ## Module Structure
//!
//! - [`types`] - Category enum, payload variants and the clipboard resource
//! - [`helpers`] - Payload summary formatting for the panel
//! - [`copy`] - Copy systems (Ctrl+C for the full transform)
//! - [`paste`] - Paste systems (Ctrl+V for the full transform)
//!
//! ## Key Types
//!
//! - [`AttributeClipboard`]: Resource holding one optional payload per category
//! - [`Category`]: The nine copyable attribute categories
//! - [`Payload`]: Captured data, one variant per category
//! - [`TransferStatus`]: User-facing outcome of a copy or paste
//!
//! ## Systems
//!
//! - [`handle_copy_requests`]: Snapshot a category from the active object
//! - [`handle_paste_requests`]: Apply a stored payload onto all selected objects
//! - [`handle_copy_shortcut`] / [`handle_paste_shortcut`]: Keyboard entry points

mod copy;
mod helpers;
mod paste;
mod types;

// Re-exports - Types
pub use types::{AttributeClipboard, Category, CopyRequest, PasteRequest, Payload, TransferStatus};

// Snapshot structs carried inside the payload variants
#[allow(unused_imports)]
pub use types::{ConstraintSnapshot, ModifierSnapshot, ParentSnapshot, TransformSnapshot};

// Re-exports - Systems
pub use copy::{handle_copy_requests, handle_copy_shortcut};
pub use paste::{handle_paste_requests, handle_paste_shortcut};

// Re-exports - Helpers
pub use helpers::payload_summary;
