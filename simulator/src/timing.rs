//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which is not available in `no_std`
//! environments, so they live here rather than in the common crate. The
//! second-based source values come from the common config so the simulator
//! and a hardware port stay in lockstep.

use std::time::Duration;

use battsim_common::config::{MODEL_TICK_SECS, SCREEN_SWITCH_SECS};

/// Cooperative loop cadence, matching the hardware display task's 5 ms delay.
pub const FRAME_TIME: Duration = Duration::from_millis(5);

/// Interval between demo-model ticks.
pub const MODEL_TICK: Duration = Duration::from_secs(MODEL_TICK_SECS as u64);

/// Interval between automatic screen switches.
pub const SCREEN_SWITCH: Duration = Duration::from_secs(SCREEN_SWITCH_SECS as u64);
