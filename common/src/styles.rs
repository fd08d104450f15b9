//! Pre-computed text styles for the demo panel.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

/// Font for readout labels and chart annotations.
pub const LABEL_FONT: &MonoFont<'_> = &PROFONT_12_POINT;

/// Font for readout values.
pub const VALUE_FONT: &MonoFont<'_> = &PROFONT_18_POINT;

/// Font for screen titles.
pub const TITLE_FONT: &MonoFont<'_> = &PROFONT_24_POINT;

/// Center-aligned text anchored on the baseline midline.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Label character style in the given color.
#[inline]
pub fn label_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(LABEL_FONT, color)
}

/// Value character style in the given color.
#[inline]
pub fn value_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(VALUE_FONT, color)
}

/// Title character style in the given color.
#[inline]
pub fn title_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(TITLE_FONT, color)
}
