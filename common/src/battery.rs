//! Battery discharge-curve model and coulomb counting.
//!
//! The simulated pack is described by a piecewise-linear discharge curve:
//! an ordered table of [`Knot`]s mapping remaining capacity (mAh) to terminal
//! voltage. Consumption is tracked by integrating the instantaneous load
//! current over each sampling interval ([`charge_consumed_mah`]) and
//! accumulating it in a [`CapacityTracker`] that saturates at the physical
//! bounds of the pack.
//!
//! # Curve Ordering
//!
//! The interpolator assumes the curve is sorted by **descending** remaining
//! capacity: the first knot is the full pack (highest voltage), the last knot
//! is the depleted pack. Callers own curve construction; ordering is not
//! validated here, matching the calibration tables which are authored sorted.
//!
//! # Units
//!
//! Current in amperes, time in seconds, capacity in milliamp-hours, voltage
//! in volts. All arithmetic is `f32`.

// =============================================================================
// Discharge Curve
// =============================================================================

/// One calibration point on a discharge curve: remaining capacity -> voltage.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Knot {
    /// Remaining capacity at this point, in mAh.
    pub capacity_mah: f32,
    /// Terminal voltage at this point, in volts.
    pub voltage: f32,
}

impl Knot {
    /// Create a knot. `const` so calibration tables can live in ROM.
    #[inline]
    pub const fn new(capacity_mah: f32, voltage: f32) -> Self {
        Self { capacity_mah, voltage }
    }
}

/// Interpolate the terminal voltage for a given remaining capacity.
///
/// The curve must be sorted by descending `capacity_mah`. Values above the
/// first knot clamp to the full-charge voltage; values at or below the last
/// knot clamp to the empty-charge voltage. Between knots the voltage is
/// linearly blended, so exact knot capacities return exact knot voltages.
///
/// An empty curve returns `0.0` as a "no data" sentinel; callers that allow
/// absent curves must treat zero as invalid.
///
/// # Parameters
/// - `remaining_mah`: remaining capacity to look up
/// - `curve`: descending calibration table
pub fn voltage_from_remaining(remaining_mah: f32, curve: &[Knot]) -> f32 {
    let Some(first) = curve.first() else {
        return 0.0;
    };
    let last = curve[curve.len() - 1];

    if remaining_mah >= first.capacity_mah {
        return first.voltage;
    }
    if remaining_mah <= last.capacity_mah {
        return last.voltage;
    }

    // Scan in stored (descending) order for the first knot at or below the
    // query, then blend toward the previous (higher-capacity) knot.
    for i in 1..curve.len() {
        let cur = curve[i];
        if remaining_mah >= cur.capacity_mah {
            let prev = curve[i - 1];
            let width = prev.capacity_mah - cur.capacity_mah;
            // Zero-width segment: duplicate capacities would divide by zero,
            // so take the lower knot's voltage instead of blending.
            if width <= 0.0 {
                return cur.voltage;
            }
            let u = (remaining_mah - cur.capacity_mah) / width;
            return cur.voltage + (prev.voltage - cur.voltage) * u;
        }
    }

    last.voltage
}

// =============================================================================
// Coulomb Counting
// =============================================================================

/// Charge consumed by `current_a` amperes flowing for `dt_s` seconds, in mAh.
///
/// `mAh = A * (s / 3600) * 1000`. Negative current (charging) produces a
/// negative delta.
#[inline]
pub fn charge_consumed_mah(current_a: f32, dt_s: f32) -> f32 {
    current_a * (dt_s / 3600.0) * 1000.0
}

// =============================================================================
// Capacity Tracker
// =============================================================================

/// Accumulates coulomb-counted consumption for one pack.
///
/// `used_mah` is kept inside `[0, cap_total_mah]` after every update: a pack
/// cannot be drained below empty or charged above full. Out-of-range updates
/// saturate silently; this is a simulation aid, not a metrology instrument.
#[derive(Clone, Copy, Debug)]
pub struct CapacityTracker {
    cap_total_mah: f32,
    used_mah: f32,
}

impl CapacityTracker {
    /// Create a tracker for a pack with the given nameplate capacity (mAh, > 0).
    #[inline]
    pub const fn new(cap_total_mah: f32) -> Self {
        Self { cap_total_mah, used_mah: 0.0 }
    }

    /// Advance the tracker by one sampling interval.
    ///
    /// Positive current discharges the pack, negative current charges it.
    /// The accumulated consumption saturates at `[0, cap_total_mah]`.
    pub fn update(&mut self, current_a: f32, dt_s: f32) {
        self.used_mah += charge_consumed_mah(current_a, dt_s);
        if self.used_mah < 0.0 {
            self.used_mah = 0.0;
        }
        if self.used_mah > self.cap_total_mah {
            self.used_mah = self.cap_total_mah;
        }
    }

    /// Remaining capacity in mAh, always within `[0, cap_total_mah]`.
    #[inline]
    pub const fn remaining_mah(&self) -> f32 {
        self.cap_total_mah - self.used_mah
    }

    /// Consumed capacity in mAh.
    #[inline]
    pub const fn used_mah(&self) -> f32 {
        self.used_mah
    }

    /// Nameplate capacity in mAh.
    #[inline]
    pub const fn total_mah(&self) -> f32 {
        self.cap_total_mah
    }

    /// State of charge as a fraction in `[0, 1]`.
    #[inline]
    pub const fn state_of_charge(&self) -> f32 {
        self.remaining_mah() / self.cap_total_mah
    }

    /// True once the pack has been drained to its last mAh.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.used_mah >= self.cap_total_mah
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Demo pack calibration, descending by remaining capacity.
    fn demo_curve() -> [Knot; 7] {
        [
            Knot::new(2000.0, 4.20),
            Knot::new(1800.0, 4.00),
            Knot::new(1200.0, 3.85),
            Knot::new(800.0, 3.75),
            Knot::new(400.0, 3.60),
            Knot::new(200.0, 3.45),
            Knot::new(0.0, 3.20),
        ]
    }

    #[test]
    fn test_interpolation_mid_segment() {
        let curve = demo_curve();
        // 1000 mAh sits halfway between (1200, 3.85) and (800, 3.75)
        let v = voltage_from_remaining(1000.0, &curve);
        assert!((v - 3.80).abs() < 1e-5, "expected 3.80 V, got {v}");
    }

    #[test]
    fn test_interpolation_exact_knots() {
        let curve = demo_curve();
        for knot in &curve {
            let v = voltage_from_remaining(knot.capacity_mah, &curve);
            assert!(
                (v - knot.voltage).abs() < 1e-6,
                "knot at {} mAh should return {} V exactly, got {v}",
                knot.capacity_mah,
                knot.voltage
            );
        }
    }

    #[test]
    fn test_interpolation_clamps() {
        let curve = demo_curve();
        // Above the full-charge knot
        assert_eq!(voltage_from_remaining(3000.0, &curve), 4.20);
        // Below the empty knot
        assert_eq!(voltage_from_remaining(-10.0, &curve), 3.20);
    }

    #[test]
    fn test_interpolation_empty_curve_sentinel() {
        assert_eq!(voltage_from_remaining(1000.0, &[]), 0.0);
    }

    #[test]
    fn test_interpolation_single_knot() {
        let curve = [Knot::new(500.0, 3.7)];
        assert_eq!(voltage_from_remaining(1000.0, &curve), 3.7);
        assert_eq!(voltage_from_remaining(500.0, &curve), 3.7);
        assert_eq!(voltage_from_remaining(0.0, &curve), 3.7);
    }

    #[test]
    fn test_interpolation_zero_width_segment() {
        // Duplicate capacity must not divide by zero
        let curve = [Knot::new(1000.0, 4.0), Knot::new(500.0, 3.8), Knot::new(500.0, 3.5), Knot::new(0.0, 3.0)];
        let v = voltage_from_remaining(500.0, &curve);
        assert!(v.is_finite(), "zero-width segment produced {v}");
        assert!((v - 3.5).abs() < 1e-6, "expected lower knot voltage 3.5, got {v}");
    }

    #[test]
    fn test_charge_consumed() {
        // 2 A for 30 s => 2 * 30/3600 * 1000 = 16.666... mAh
        let delta = charge_consumed_mah(2.0, 30.0);
        assert!((delta - 16.6667).abs() < 1e-3, "got {delta}");
    }

    #[test]
    fn test_charge_consumed_one_amp_hour() {
        let delta = charge_consumed_mah(1.0, 3600.0);
        assert!((delta - 1000.0).abs() < 1e-6, "1 A for 1 h should be 1000 mAh, got {delta}");
    }

    #[test]
    fn test_charge_consumed_negative_current() {
        // Charging: negative current yields a negative delta
        let delta = charge_consumed_mah(-0.5, 3600.0);
        assert!((delta + 500.0).abs() < 1e-6, "got {delta}");
    }

    #[test]
    fn test_tracker_integrates_without_clamp() {
        let mut tracker = CapacityTracker::new(5000.0);
        tracker.update(1.0, 3600.0); // 1 A * 1 h = 1000 mAh
        assert!((tracker.used_mah() - 1000.0).abs() < 1e-3);
        assert!((tracker.remaining_mah() - 4000.0).abs() < 1e-3);
    }

    #[test]
    fn test_tracker_clamps_to_total() {
        let mut tracker = CapacityTracker::new(100.0);
        tracker.update(1.0, 3600.0); // would be 1000 mAh
        assert_eq!(tracker.used_mah(), 100.0, "used must saturate at the nameplate capacity");
        assert_eq!(tracker.remaining_mah(), 0.0);
        assert!(tracker.is_depleted());
    }

    #[test]
    fn test_tracker_charge_floors_at_zero() {
        let mut tracker = CapacityTracker::new(1000.0);
        tracker.update(1.0, 360.0); // 100 mAh used
        tracker.update(-1.0, 3600.0); // 1000 mAh back in, floors at 0
        assert_eq!(tracker.used_mah(), 0.0, "a pack cannot become more than full");
        assert_eq!(tracker.remaining_mah(), 1000.0);
    }

    #[test]
    fn test_tracker_state_of_charge() {
        let mut tracker = CapacityTracker::new(2000.0);
        assert!((tracker.state_of_charge() - 1.0).abs() < 1e-6);
        tracker.update(0.5, 3600.0); // 500 mAh
        assert!((tracker.state_of_charge() - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_tracker_drives_interpolator() {
        // End-to-end: drain a 2000 mAh pack and watch the voltage walk the curve
        let curve = demo_curve();
        let mut tracker = CapacityTracker::new(2000.0);
        assert_eq!(voltage_from_remaining(tracker.remaining_mah(), &curve), 4.20);

        tracker.update(1.0, 3600.0); // 1000 mAh left
        let v = voltage_from_remaining(tracker.remaining_mah(), &curve);
        assert!((v - 3.80).abs() < 1e-4, "at 1000 mAh expected 3.80 V, got {v}");

        tracker.update(1.0, 2.0 * 3600.0); // drained past empty, clamps
        assert_eq!(voltage_from_remaining(tracker.remaining_mah(), &curve), 3.20);
    }
}
