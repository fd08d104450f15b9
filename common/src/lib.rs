//! Common logic for the battery demo panel.
//!
//! This crate contains the platform-agnostic code shared between the desktop
//! simulator and a future hardware port:
//!
//! - [`battery`]: discharge-curve interpolation and coulomb counting
//! - [`potentiometer`]: digital-pot resistance/wiper mapping
//! - [`model`]: per-screen demo state advanced on a 1 s tick
//! - [`screens`]: screen navigation enum
//! - [`config`]: layout and timing constants
//! - [`thresholds`]: voltage bands for readout coloring
//! - [`colors`]: RGB565 color constants
//! - [`styles`]: pre-computed text styles
//! - [`logging`]: debug event ring buffer
//!
//! # Testing
//!
//! The crate is `no_std` on targets but builds with `std` under `cargo test`,
//! so the whole model can be unit-tested on the host:
//!
//! ```bash
//! cargo test -p battsim-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod battery;
pub mod colors;
pub mod config;
pub mod logging;
pub mod model;
pub mod potentiometer;
pub mod screens;
pub mod styles;
pub mod thresholds;

// Re-export commonly used items
pub use battery::{CapacityTracker, Knot};
pub use colors::*;
pub use config::*;
pub use screens::Screen;
