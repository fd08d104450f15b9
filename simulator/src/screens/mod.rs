//! One rendering module per demo screen.

mod battery;
mod current_source;
mod voltage_source;

pub use battery::draw_battery_screen;
pub use current_source::draw_current_source_screen;
pub use voltage_source::draw_voltage_source_screen;
