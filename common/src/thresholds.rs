//! Voltage thresholds for the battery readout.
//!
//! The bands drive the color of the terminal-voltage readout on the battery
//! screen. Threshold ordering is validated at compile time so a misconfigured
//! band fails the build with a clear error.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{GREEN, ORANGE, RED};

// =============================================================================
// Cell Voltage Thresholds
// =============================================================================

/// Voltage where the cell enters the critical band (< 3.3 V = RED).
/// The demo curve bottoms out at 3.2 V; below 3.3 V the pack is nearly flat.
pub const CELL_CRITICAL: f32 = 3.3;

/// Voltage where the cell enters the low band (3.3-3.5 V = ORANGE).
pub const CELL_LOW: f32 = 3.5;

/// Full-charge voltage of the demo cell (top knot of the curve).
pub const CELL_FULL: f32 = 4.2;

// Compile-time validation: bands must be in ascending order
const _: () = assert!(CELL_CRITICAL < CELL_LOW);
const _: () = assert!(CELL_LOW < CELL_FULL);

/// Check if a cell voltage is in the critical band.
#[inline]
pub fn is_critical_cell(voltage: f32) -> bool {
    voltage < CELL_CRITICAL
}

/// Readout color for a cell voltage: RED below critical, ORANGE in the low
/// band, GREEN otherwise.
#[inline]
pub fn cell_voltage_color(voltage: f32) -> Rgb565 {
    if voltage < CELL_CRITICAL {
        RED
    } else if voltage < CELL_LOW {
        ORANGE
    } else {
        GREEN
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
