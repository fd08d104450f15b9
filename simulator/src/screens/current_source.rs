//! Current-source screen: set-current sweep, measured voltage, wiper code.

use core::fmt::Write;

use battsim_common::colors::{BLACK, CYAN, WHITE, YELLOW};
use battsim_common::config::{READOUT_ROW_H, SCREEN_WIDTH};
use battsim_common::model::CurrentSourceModel;
use battsim_common::screens::Screen;
use battsim_common::styles::{CENTERED, label_style, title_style, value_style};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::widgets::{draw_hbar, draw_readout};

const TITLE_Y: i32 = 30;
const BAR_X: i32 = 40;
const BAR_Y: i32 = 120;
const BAR_W: u32 = SCREEN_WIDTH - 80;
const BAR_H: u32 = 24;
const READOUT_Y: i32 = 200;

/// Redraw the whole current-source screen from the model.
pub fn draw_current_source_screen<D>(display: &mut D, model: &CurrentSourceModel)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    Text::with_text_style(
        Screen::CurrentSource.title(),
        Point::new((SCREEN_WIDTH / 2) as i32, TITLE_Y),
        title_style(WHITE),
        CENTERED,
    )
    .draw(display)
    .ok();

    let mut line: String<32> = String::new();
    let _ = write!(line, "SET {:>5.2} A", model.set_current_a);
    draw_readout(display, BAR_X, BAR_Y - 15, &line, label_style(YELLOW));
    draw_hbar(display, BAR_X, BAR_Y, BAR_W, BAR_H, model.set_current_a / model.imax, YELLOW);

    line.clear();
    let _ = write!(line, "MEAS {:>5.2} V", model.meas_voltage);
    draw_readout(display, BAR_X, READOUT_Y, &line, value_style(CYAN));

    line.clear();
    let _ = write!(line, "WIPER {:>3}", model.wiper_code);
    draw_readout(display, BAR_X, READOUT_Y + READOUT_ROW_H, &line, label_style(WHITE));

    line.clear();
    let _ = write!(line, "IMAX {:>4.1} A", model.imax);
    draw_readout(display, BAR_X, READOUT_Y + 2 * READOUT_ROW_H, &line, label_style(WHITE));
}
