//! Shared drawing widgets for the demo screens.

mod primitives;

pub use primitives::{draw_capacity_cursor, draw_chart_frame, draw_curve_trace, draw_hbar, draw_readout};
