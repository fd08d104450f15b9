//! Demo model: per-screen state advanced once per second.
//!
//! Each screen owns an explicit state struct with its own `tick_1s` method;
//! sweep directions live inside the structs rather than in globals, so a
//! screen can be reset or duplicated without touching shared state. The
//! aggregate [`DisplayModel`] is the single source of truth the render loop
//! reads from.

use micromath::F32Ext;

use crate::battery::{CapacityTracker, Knot, voltage_from_remaining};
use crate::potentiometer::{MIN_DENOMINATOR, rpot_from_vout, wiper_from_rpot};

// =============================================================================
// Demo Pack Parameters
// =============================================================================

/// Discharge curve of the simulated pack, descending by remaining capacity.
/// A generic 2000 mAh Li-ion cell profile.
pub const DEMO_CURVE: [Knot; 7] = [
    Knot::new(2000.0, 4.20),
    Knot::new(1800.0, 4.00),
    Knot::new(1200.0, 3.85),
    Knot::new(800.0, 3.75),
    Knot::new(400.0, 3.60),
    Knot::new(200.0, 3.45),
    Knot::new(0.0, 3.20),
];

/// Nameplate capacity of the simulated pack.
pub const PACK_CAPACITY_MAH: f32 = 2000.0;

/// Base load current while the load is switched on, in amperes.
pub const LOAD_BASE_A: f32 = 0.8;

/// Amplitude of the sinusoidal ripple on the load current.
pub const LOAD_RIPPLE_A: f32 = 0.2;

/// Ripple phase advance per tick, in radians.
const LOAD_RIPPLE_RATE: f32 = 0.12;

/// The demo load toggles on/off every this many seconds.
pub const LOAD_TOGGLE_SECS: u32 = 30;

/// Full-scale resistance of the digital pot driving the emulated load.
pub const LOAD_POT_RMAX_OHM: f32 = 100_000.0;

// =============================================================================
// Battery Screen
// =============================================================================

/// State behind the battery screen: the pack tracker plus derived readouts.
pub struct BatteryScreenModel {
    /// Calibration curve the interpolator reads. Never mutated.
    pub curve: &'static [Knot],
    /// Coulomb-counting tracker for the pack.
    pub tracker: CapacityTracker,
    /// Whether the demo load is currently switched on.
    pub load_on: bool,
    /// Instantaneous load current, in amperes (0 while the load is off).
    pub load_current_a: f32,
    /// Terminal voltage derived from the curve at the current capacity.
    pub terminal_voltage: f32,
    /// Seconds since the model started.
    pub runtime_secs: u32,
}

impl BatteryScreenModel {
    /// Fresh model: full pack, load on, voltage at the top knot.
    pub fn new() -> Self {
        let tracker = CapacityTracker::new(PACK_CAPACITY_MAH);
        let terminal_voltage = voltage_from_remaining(tracker.remaining_mah(), &DEMO_CURVE);
        Self {
            curve: &DEMO_CURVE,
            tracker,
            load_on: true,
            load_current_a: 0.0,
            terminal_voltage,
            runtime_secs: 0,
        }
    }

    /// Advance the pack by one second of simulated load.
    pub fn tick_1s(&mut self) {
        self.runtime_secs += 1;

        // The demo load cycles on/off on a fixed cadence
        if self.runtime_secs % LOAD_TOGGLE_SECS == 0 {
            self.load_on = !self.load_on;
        }

        self.load_current_a = if self.load_on {
            LOAD_BASE_A + LOAD_RIPPLE_A * (self.runtime_secs as f32 * LOAD_RIPPLE_RATE).sin()
        } else {
            0.0
        };

        self.tracker.update(self.load_current_a, 1.0);
        self.terminal_voltage = voltage_from_remaining(self.tracker.remaining_mah(), self.curve);
    }

    /// Toggle the demo load by hand (simulator hotkey).
    pub fn toggle_load(&mut self) {
        self.load_on = !self.load_on;
    }

    /// Normalized cursor position for the chart, 0 = empty, 1 = full.
    #[inline]
    pub fn capacity_fraction(&self) -> f32 {
        self.tracker.state_of_charge()
    }
}

impl Default for BatteryScreenModel {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Voltage Source Screen
// =============================================================================

/// Constant-voltage supply demo: the set point sweeps a triangle between
/// 0 and `vmax`, the measured current follows the set point.
pub struct VoltageSourceModel {
    /// Programmed output voltage.
    pub set_voltage: f32,
    /// Simulated measured output current, in amperes.
    pub meas_current_a: f32,
    /// Upper bound of the sweep.
    pub vmax: f32,
    /// Sweep direction, +1 rising, -1 falling.
    sweep_dir: f32,
}

/// Set-voltage sweep rate in volts per tick.
const VOLTAGE_SWEEP_STEP: f32 = 0.4;

impl VoltageSourceModel {
    pub fn new() -> Self {
        Self {
            set_voltage: 0.0,
            meas_current_a: 0.0,
            vmax: 20.0,
            sweep_dir: 1.0,
        }
    }

    /// Advance the sweep by one second.
    pub fn tick_1s(&mut self) {
        self.set_voltage += VOLTAGE_SWEEP_STEP * self.sweep_dir;
        if self.set_voltage >= self.vmax {
            self.set_voltage = self.vmax;
            self.sweep_dir = -1.0;
        }
        if self.set_voltage <= 0.0 {
            self.set_voltage = 0.0;
            self.sweep_dir = 1.0;
        }

        // Resistive load: current tracks the programmed voltage
        self.meas_current_a = 0.2 + (self.set_voltage / self.vmax) * 1.8;
    }
}

impl Default for VoltageSourceModel {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Current Source Screen
// =============================================================================

/// Constant-current load demo: the set point sweeps between 0 and `imax`,
/// the measured voltage sags under load, and the wiper code for the emulated
/// load resistance is derived from that voltage.
pub struct CurrentSourceModel {
    /// Programmed sink current.
    pub set_current_a: f32,
    /// Simulated measured terminal voltage.
    pub meas_voltage: f32,
    /// Digital-pot wiper code for the emulated load resistance.
    pub wiper_code: u8,
    /// Upper bound of the sweep.
    pub imax: f32,
    /// Sweep direction, +1 rising, -1 falling.
    sweep_dir: f32,
}

/// Set-current sweep rate in amperes per tick.
const CURRENT_SWEEP_STEP: f32 = 0.25;

impl CurrentSourceModel {
    pub fn new() -> Self {
        Self {
            set_current_a: 0.0,
            meas_voltage: 12.0,
            wiper_code: 0,
            imax: 5.0,
            sweep_dir: 1.0,
        }
    }

    /// Advance the sweep by one second.
    pub fn tick_1s(&mut self) {
        self.set_current_a += CURRENT_SWEEP_STEP * self.sweep_dir;
        if self.set_current_a >= self.imax {
            self.set_current_a = self.imax;
            self.sweep_dir = -1.0;
        }
        if self.set_current_a <= 0.0 {
            self.set_current_a = 0.0;
            self.sweep_dir = 1.0;
        }

        // Source impedance: the terminal sags from 12 V to 6 V at full load
        self.meas_voltage = 12.0 - (self.set_current_a / self.imax) * 6.0;

        let rpot = rpot_from_vout(self.meas_voltage, MIN_DENOMINATOR);
        self.wiper_code = wiper_from_rpot(rpot, LOAD_POT_RMAX_OHM);
    }
}

impl Default for CurrentSourceModel {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Aggregate Model
// =============================================================================

/// All screen state, ticked together once per second.
pub struct DisplayModel {
    pub battery: BatteryScreenModel,
    pub voltage_source: VoltageSourceModel,
    pub current_source: CurrentSourceModel,
}

impl DisplayModel {
    pub fn new() -> Self {
        Self {
            battery: BatteryScreenModel::new(),
            voltage_source: VoltageSourceModel::new(),
            current_source: CurrentSourceModel::new(),
        }
    }

    /// Advance every screen model by one second.
    pub fn tick_1s(&mut self) {
        self.battery.tick_1s();
        self.voltage_source.tick_1s();
        self.current_source.tick_1s();
    }
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery::charge_consumed_mah;

    #[test]
    fn test_demo_curve_descending() {
        for pair in DEMO_CURVE.windows(2) {
            assert!(
                pair[0].capacity_mah > pair[1].capacity_mah,
                "curve must be sorted by descending capacity"
            );
            assert!(pair[0].voltage > pair[1].voltage, "voltage must fall with capacity");
        }
    }

    #[test]
    fn test_battery_starts_full() {
        let model = BatteryScreenModel::new();
        assert_eq!(model.tracker.remaining_mah(), PACK_CAPACITY_MAH);
        assert_eq!(model.terminal_voltage, 4.20);
        assert!((model.capacity_fraction() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_battery_tick_consumes_load_current() {
        let mut model = BatteryScreenModel::new();
        model.tick_1s();
        let expected = charge_consumed_mah(model.load_current_a, 1.0);
        assert!(
            (model.tracker.used_mah() - expected).abs() < 1e-5,
            "one tick must consume exactly one second of the load current"
        );
    }

    #[test]
    fn test_battery_load_toggles_on_cadence() {
        let mut model = BatteryScreenModel::new();
        assert!(model.load_on);
        for _ in 0..LOAD_TOGGLE_SECS {
            model.tick_1s();
        }
        assert!(!model.load_on, "load should have switched off after the toggle interval");
        for _ in 0..LOAD_TOGGLE_SECS {
            model.tick_1s();
        }
        assert!(model.load_on, "load should have switched back on");
    }

    #[test]
    fn test_battery_no_consumption_while_load_off() {
        let mut model = BatteryScreenModel::new();
        model.toggle_load();
        let before = model.tracker.used_mah();
        model.tick_1s();
        assert_eq!(model.load_current_a, 0.0);
        assert_eq!(model.tracker.used_mah(), before);
    }

    #[test]
    fn test_battery_voltage_tracks_curve() {
        let mut model = BatteryScreenModel::new();
        for _ in 0..600 {
            model.tick_1s();
        }
        let expected = voltage_from_remaining(model.tracker.remaining_mah(), &DEMO_CURVE);
        assert_eq!(model.terminal_voltage, expected);
        assert!(model.terminal_voltage < 4.20, "voltage must sag as the pack drains");
        assert!(model.terminal_voltage >= 3.20, "voltage never drops below the empty knot");
    }

    #[test]
    fn test_voltage_sweep_reverses_at_bounds() {
        let mut model = VoltageSourceModel::new();
        // 0.4 V per tick: the set point must hit the vmax clamp within 60 ticks
        let mut ticks = 0;
        while model.set_voltage < model.vmax && ticks < 60 {
            model.tick_1s();
            ticks += 1;
        }
        assert_eq!(model.set_voltage, model.vmax, "sweep never reached vmax");
        model.tick_1s();
        assert!(model.set_voltage < model.vmax, "sweep must turn around at vmax");
    }

    #[test]
    fn test_voltage_source_current_follows_set_point() {
        let mut model = VoltageSourceModel::new();
        model.tick_1s();
        let expected = 0.2 + (model.set_voltage / model.vmax) * 1.8;
        assert!((model.meas_current_a - expected).abs() < 1e-6);
    }

    #[test]
    fn test_current_sweep_stays_in_range() {
        let mut model = CurrentSourceModel::new();
        for _ in 0..200 {
            model.tick_1s();
            assert!(model.set_current_a >= 0.0);
            assert!(model.set_current_a <= model.imax);
            assert!(model.meas_voltage >= 6.0 && model.meas_voltage <= 12.0);
        }
    }

    #[test]
    fn test_current_source_wiper_chain() {
        let mut model = CurrentSourceModel::new();
        model.tick_1s();
        // meas_voltage stays well above the pot reference, so the wiper code
        // is small but nonzero for the whole sweep
        let rpot = rpot_from_vout(model.meas_voltage, MIN_DENOMINATOR);
        assert_eq!(model.wiper_code, wiper_from_rpot(rpot, LOAD_POT_RMAX_OHM));
        assert!(model.wiper_code > 0);
    }

    #[test]
    fn test_display_model_ticks_all_screens() {
        let mut model = DisplayModel::new();
        model.tick_1s();
        assert_eq!(model.battery.runtime_secs, 1);
        assert!(model.voltage_source.set_voltage > 0.0);
        assert!(model.current_source.set_current_a > 0.0);
    }
}
