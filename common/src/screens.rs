//! Screen navigation for the demo panel.
//!
//! The panel cycles through three screens on a fixed interval
//! ([`crate::config::SCREEN_SWITCH_SECS`]):
//!
//! - [`Screen::Battery`]: discharge curve chart plus pack readouts
//! - [`Screen::VoltageSource`]: constant-voltage supply view
//! - [`Screen::CurrentSource`]: constant-current load view

/// Available screens, in cycling order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Screen {
    /// Battery simulation: discharge curve, capacity cursor, pack readouts.
    #[default]
    Battery,

    /// Constant-voltage supply: set voltage sweep and measured current.
    VoltageSource,

    /// Constant-current load: set current sweep, measured voltage, wiper code.
    CurrentSource,
}

/// Number of screens in the cycle.
pub const SCREEN_COUNT: usize = 3;

impl Screen {
    /// Advance to the next screen, wrapping after the last one.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Battery => Self::VoltageSource,
            Self::VoltageSource => Self::CurrentSource,
            Self::CurrentSource => Self::Battery,
        }
    }

    /// Title shown in the screen header.
    #[inline]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Battery => "BATTERY SIM",
            Self::VoltageSource => "VOLTAGE SOURCE",
            Self::CurrentSource => "CURRENT SOURCE",
        }
    }
}
