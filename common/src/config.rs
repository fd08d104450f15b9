//! Layout and timing configuration for the demo panel.
//!
//! All values are compile-time constants with `const` validation assertions,
//! so a geometry mistake fails the build instead of clipping at runtime.

// =============================================================================
// Display Geometry
// =============================================================================

/// Panel width in pixels (ILI9488-class panel, landscape).
pub const SCREEN_WIDTH: u32 = 480;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Chart Area (battery screen)
// =============================================================================

/// Discharge-curve chart width.
pub const CHART_WIDTH: u32 = 440;

/// Discharge-curve chart height.
pub const CHART_HEIGHT: u32 = 180;

/// Chart top-left X, centered horizontally.
pub const CHART_X: i32 = ((SCREEN_WIDTH - CHART_WIDTH) / 2) as i32;

/// Chart top-left Y.
pub const CHART_Y: i32 = 10;

// Chart must fit the panel with room for the readout rows below it
const _: () = assert!(CHART_WIDTH <= SCREEN_WIDTH);
const _: () = assert!(CHART_Y as u32 + CHART_HEIGHT + 100 <= SCREEN_HEIGHT);

// =============================================================================
// Readout Layout
// =============================================================================

/// X position of the left readout column.
pub const READOUT_LEFT_X: i32 = 20;

/// X position of the right readout column.
pub const READOUT_RIGHT_X: i32 = (SCREEN_WIDTH / 2) as i32 + 20;

/// Y position of the first readout row.
pub const READOUT_TOP_Y: i32 = CHART_Y + CHART_HEIGHT as i32 + 25;

/// Vertical spacing between readout rows.
pub const READOUT_ROW_H: i32 = 25;

// =============================================================================
// Timing
// =============================================================================

/// Seconds between demo-model ticks.
pub const MODEL_TICK_SECS: u32 = 1;

/// Seconds a screen stays up before the panel cycles to the next one.
pub const SCREEN_SWITCH_SECS: u32 = 10;

// A screen must survive at least one model tick
const _: () = assert!(MODEL_TICK_SECS < SCREEN_SWITCH_SECS);
