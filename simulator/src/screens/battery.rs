//! Battery screen: discharge-curve chart plus pack readouts.

use core::fmt::Write;

use battsim_common::colors::{BLACK, GREEN, ORANGE, WHITE};
use battsim_common::config::{
    CHART_HEIGHT,
    CHART_WIDTH,
    CHART_X,
    CHART_Y,
    READOUT_LEFT_X,
    READOUT_RIGHT_X,
    READOUT_ROW_H,
    READOUT_TOP_Y,
};
use battsim_common::model::BatteryScreenModel;
use battsim_common::styles::{label_style, value_style};
use battsim_common::thresholds::cell_voltage_color;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::widgets::{draw_capacity_cursor, draw_chart_frame, draw_curve_trace, draw_readout};

/// Redraw the whole battery screen from the model.
pub fn draw_battery_screen<D>(display: &mut D, model: &BatteryScreenModel)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    draw_chart_frame(display, CHART_X, CHART_Y, CHART_WIDTH, CHART_HEIGHT);
    draw_curve_trace(display, CHART_X, CHART_Y, CHART_WIDTH, CHART_HEIGHT, model.curve, GREEN);
    draw_capacity_cursor(display, CHART_X, CHART_Y, CHART_WIDTH, CHART_HEIGHT, model.capacity_fraction());

    let mut line: String<32> = String::new();

    // Left column: electrical readouts
    let _ = write!(line, "V {:>5.2} V", model.terminal_voltage);
    draw_readout(
        display,
        READOUT_LEFT_X,
        READOUT_TOP_Y,
        &line,
        value_style(cell_voltage_color(model.terminal_voltage)),
    );

    line.clear();
    let _ = write!(line, "I {:>5.2} A", model.load_current_a);
    draw_readout(display, READOUT_LEFT_X, READOUT_TOP_Y + READOUT_ROW_H, &line, value_style(WHITE));

    line.clear();
    let _ = write!(line, "USED {:>6.1} mAh", model.tracker.used_mah());
    draw_readout(
        display,
        READOUT_LEFT_X,
        READOUT_TOP_Y + 2 * READOUT_ROW_H,
        &line,
        label_style(WHITE),
    );

    // Right column: pack status
    line.clear();
    let _ = write!(line, "LEFT {:>6.1} mAh", model.tracker.remaining_mah());
    draw_readout(display, READOUT_RIGHT_X, READOUT_TOP_Y, &line, label_style(WHITE));

    line.clear();
    let mins = model.runtime_secs / 60;
    let secs = model.runtime_secs % 60;
    let _ = write!(line, "RUNTIME {mins:02}:{secs:02}");
    draw_readout(display, READOUT_RIGHT_X, READOUT_TOP_Y + READOUT_ROW_H, &line, label_style(WHITE));

    let (text, color) = if model.load_on { ("LOAD ON", GREEN) } else { ("LOAD OFF", ORANGE) };
    draw_readout(display, READOUT_RIGHT_X, READOUT_TOP_Y + 2 * READOUT_ROW_H, text, label_style(color));
}

#[cfg(test)]
mod tests {
    use battsim_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    #[test]
    fn test_battery_screen_renders_headless() {
        // Full redraw against a fresh and a partially drained model must not
        // panic anywhere in the chart or readout paths
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut model = BatteryScreenModel::new();
        draw_battery_screen(&mut display, &model);

        for _ in 0..120 {
            model.tick_1s();
        }
        draw_battery_screen(&mut display, &model);
    }
}
