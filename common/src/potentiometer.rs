//! Digital potentiometer mapping for the emulated load.
//!
//! The bench supply's analog feedback loop sets its output by driving a
//! digital potentiometer. Two small pure functions translate a target output
//! voltage into the pot resistance the feedback network needs, and that
//! resistance into the 8-bit wiper code the pot accepts.
//!
//! The `42000 / (vout - 1.0)` relationship and the reference offset are
//! calibration constants of the feedback circuit, not tunables.

// =============================================================================
// Calibration Constants
// =============================================================================

/// Gain constant of the feedback network (ohm-volts).
pub const RPOT_GAIN: f32 = 42000.0;

/// Reference offset of the feedback network, in volts. Outputs at or below
/// this level are unreachable; the denominator guard keeps the mapping finite
/// as `vout` approaches it.
pub const VOUT_REF: f32 = 1.0;

/// Default denominator floor used by callers that have no tighter bound.
pub const MIN_DENOMINATOR: f32 = 0.05;

/// Full-scale wiper code of the digital pot.
pub const WIPER_MAX: u8 = 255;

/// Wiper resolution (codes per full-scale resistance).
const WIPER_STEPS: f32 = 256.0;

// =============================================================================
// Mapping Functions
// =============================================================================

/// Pot resistance (ohms) needed to produce `vout` at the supply output.
///
/// Models the inverse relationship `R = RPOT_GAIN / (vout - VOUT_REF)`.
/// The denominator is floored at `min_denominator` so outputs near the
/// reference offset map to a large finite resistance instead of blowing up.
///
/// `rpot_from_vout(1.01, 0.05)` therefore returns `42000 / 0.05`, not
/// `42000 / 0.01`.
#[inline]
pub fn rpot_from_vout(vout: f32, min_denominator: f32) -> f32 {
    let mut d = vout - VOUT_REF;
    if d < min_denominator {
        d = min_denominator;
    }
    RPOT_GAIN / d
}

/// Wiper code (0..=255) selecting `rpot_ohm` on a pot with full-scale
/// resistance `rmax_ohm`.
///
/// The resistance is normalized against the pot's full scale and quantized
/// to 256 steps; results outside the code range saturate at 0 and 255.
/// With a 100 kohm pot: 50 kohm -> 128, negative -> 0, 200 kohm -> 255.
#[inline]
pub fn wiper_from_rpot(rpot_ohm: f32, rmax_ohm: f32) -> u8 {
    let w = (rpot_ohm / rmax_ohm) * WIPER_STEPS;
    if w <= 0.0 {
        return 0;
    }
    if w >= WIPER_MAX as f32 {
        return WIPER_MAX;
    }
    w as u8
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpot_guard_engages_near_reference() {
        // vout = 1.01 leaves a 0.01 V denominator; the 0.05 floor wins
        let r = rpot_from_vout(1.01, 0.05);
        assert!((r - 42000.0 / 0.05).abs() < 1e-3, "got {r}");
    }

    #[test]
    fn test_rpot_guard_inactive_above_floor() {
        // 3.1 V output leaves a healthy 2.1 V denominator
        let r = rpot_from_vout(3.1, 0.05);
        assert!((r - 42000.0 / 2.1).abs() < 1e-2, "got {r}");
    }

    #[test]
    fn test_rpot_guard_catches_below_reference() {
        // An output below the reference offset would flip the sign without
        // the floor; the guard keeps the resistance positive and finite
        let r = rpot_from_vout(0.5, 0.05);
        assert!((r - 42000.0 / 0.05).abs() < 1e-3, "got {r}");
    }

    #[test]
    fn test_wiper_midscale() {
        assert_eq!(wiper_from_rpot(50000.0, 100000.0), 128);
    }

    #[test]
    fn test_wiper_clamps_low() {
        assert_eq!(wiper_from_rpot(-10.0, 100000.0), 0);
        assert_eq!(wiper_from_rpot(0.0, 100000.0), 0);
    }

    #[test]
    fn test_wiper_clamps_high() {
        assert_eq!(wiper_from_rpot(200000.0, 100000.0), 255);
        assert_eq!(wiper_from_rpot(100000.0, 100000.0), 255, "full scale maps to the top code");
    }

    #[test]
    fn test_wiper_quarter_scale() {
        assert_eq!(wiper_from_rpot(25000.0, 100000.0), 64);
    }

    #[test]
    fn test_vout_to_wiper_chain() {
        // Full chain: target voltage -> pot resistance -> wiper code
        let r = rpot_from_vout(1.42, MIN_DENOMINATOR);
        assert!((r - 100000.0).abs() < 1.0, "42000/0.42 is ~100k, got {r}");
        assert_eq!(wiper_from_rpot(r, 100000.0), 255);
    }
}
