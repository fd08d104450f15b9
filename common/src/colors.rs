//! RGB565 color constants for the demo panel.
//!
//! Rgb565 is the panel's native format (5 bits red, 6 bits green, 5 bits
//! blue), so these constants go to the framebuffer without conversion. The
//! standard colors come from the `RgbColor` trait; the rest are tuned for the
//! dark theme of the panel UI.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen backgrounds.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Readout labels on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Critical cell voltage.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Healthy cell voltage and the curve trace.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Set-point values on the source screens.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure cyan. Measured values on the source screens.
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors (panel theme)
// =============================================================================

/// Orange warning color for the low-voltage band.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Chart background, just lighter than the screen background.
/// RGB565: (2, 4, 2) - near-black charcoal.
pub const CHART_BG: Rgb565 = Rgb565::new(2, 4, 2);

/// Chart border and axis lines.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const CHART_BORDER: Rgb565 = Rgb565::new(8, 16, 8);

/// Dark blue background of the voltage-source screen.
pub const NAVY: Rgb565 = Rgb565::new(0, 4, 8);

/// Capacity cursor on the discharge chart.
pub const CURSOR: Rgb565 = Rgb565::MAGENTA;
