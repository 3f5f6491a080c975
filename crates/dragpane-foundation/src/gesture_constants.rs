//! Shared gesture constants for the drag interaction.
//!
//! Values are in logical pixels / milliseconds. For very high-density
//! touch screens consider scaling distances by the device's DPI factor;
//! the current values work well for typical desktop/mobile displays.

/// Fraction of the dragged rectangle's extent (along the active axis)
/// that an ended gesture must exceed for the panel to commit off-screen
/// rather than snap back to its rest position.
pub const DRAG_COMMIT_FRACTION: f32 = 0.5;

/// Duration of the settle animation that runs after a gesture ends,
/// whether it snaps the panel back or carries it off-screen.
pub const SETTLE_DURATION_MILLIS: u64 = 200;
