//! Low-level drawing primitives shared across screens.
//!
//! All functions are generic over `DrawTarget<Color = Rgb565>` so the same
//! code can drive the SDL simulator display today and a framebuffer on
//! hardware later. Draw errors are discarded with `.ok()`; a failed pixel
//! push is not actionable mid-frame.
//!
//! # Curve Trace Mapping
//!
//! The discharge chart maps remaining capacity to the X axis with the full
//! pack on the left and the empty pack on the right, mirroring how the pack
//! drains over time. The Y axis auto-scales to the voltage span of the curve
//! with a small margin so the trace never touches the frame.

use battsim_common::battery::Knot;
use battsim_common::colors::{CHART_BG, CHART_BORDER, CURSOR};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;

/// Vertical margin inside the chart, as a fraction of the voltage span.
const TRACE_Y_MARGIN: f32 = 0.08;

/// Draw the chart background and border.
pub fn draw_chart_frame<D>(display: &mut D, x: i32, y: i32, w: u32, h: u32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(CHART_BG)
        .stroke_color(CHART_BORDER)
        .stroke_width(1)
        .build();
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Map one knot to chart coordinates.
///
/// X: full capacity at the left edge, zero at the right edge.
/// Y: voltage scaled into the chart with `TRACE_Y_MARGIN` headroom.
fn knot_to_point(knot: &Knot, cap_max: f32, v_min: f32, v_max: f32, x: i32, y: i32, w: u32, h: u32) -> Point {
    let x_frac = 1.0 - knot.capacity_mah / cap_max;
    let margin = (v_max - v_min) * TRACE_Y_MARGIN;
    let y_span = (v_max - v_min) + 2.0 * margin;
    let y_frac = ((knot.voltage - v_min) + margin) / y_span;

    let px = x + (x_frac * (w - 1) as f32) as i32;
    let py = y + ((1.0 - y_frac) * (h - 1) as f32) as i32;
    Point::new(px, py)
}

/// Draw the discharge curve as a polyline across the chart area.
///
/// The curve must be non-empty and sorted descending by capacity; the first
/// knot supplies the full-scale capacity for the X axis.
pub fn draw_curve_trace<D>(display: &mut D, x: i32, y: i32, w: u32, h: u32, curve: &[Knot], color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(first) = curve.first() else {
        return;
    };
    let cap_max = first.capacity_mah;
    if cap_max <= 0.0 || w < 2 || h < 2 {
        return;
    }

    let mut v_min = f32::MAX;
    let mut v_max = f32::MIN;
    for knot in curve {
        v_min = v_min.min(knot.voltage);
        v_max = v_max.max(knot.voltage);
    }
    if v_max <= v_min {
        return;
    }

    let style = PrimitiveStyle::with_stroke(color, 1);
    for pair in curve.windows(2) {
        let a = knot_to_point(&pair[0], cap_max, v_min, v_max, x, y, w, h);
        let b = knot_to_point(&pair[1], cap_max, v_min, v_max, x, y, w, h);
        Line::new(a, b).into_styled(style).draw(display).ok();
    }
}

/// Draw the vertical capacity cursor on the chart.
///
/// `fraction` is the remaining state of charge: 1.0 puts the cursor at the
/// left (full) edge, 0.0 at the right (empty) edge.
pub fn draw_capacity_cursor<D>(display: &mut D, x: i32, y: i32, w: u32, h: u32, fraction: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let frac = fraction.clamp(0.0, 1.0);
    let px = x + ((1.0 - frac) * (w - 1) as f32) as i32;
    Line::new(Point::new(px, y + 1), Point::new(px, y + h as i32 - 2))
        .into_styled(PrimitiveStyle::with_stroke(CURSOR, 1))
        .draw(display)
        .ok();
}

/// Draw a horizontal set-point bar with a border, filled to `fraction`.
pub fn draw_hbar<D>(display: &mut D, x: i32, y: i32, w: u32, h: u32, fraction: f32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_stroke(CHART_BORDER, 1))
        .draw(display)
        .ok();

    let frac = fraction.clamp(0.0, 1.0);
    let fill_w = (frac * (w - 2) as f32) as u32;
    if fill_w > 0 {
        Rectangle::new(Point::new(x + 1, y + 1), Size::new(fill_w, h - 2))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}

/// Draw a left-aligned readout line at the given position.
pub fn draw_readout<D>(display: &mut D, x: i32, y: i32, text: &str, style: MonoTextStyle<'static, Rgb565>)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new(text, Point::new(x, y), style).draw(display).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 100;
    const H: u32 = 50;

    #[test]
    fn test_full_knot_maps_to_left_edge() {
        let knot = Knot::new(2000.0, 4.2);
        let p = knot_to_point(&knot, 2000.0, 3.2, 4.2, 0, 0, W, H);
        assert_eq!(p.x, 0, "full capacity belongs on the left edge");
        assert!(p.y < (H / 4) as i32, "highest voltage belongs near the top, got y={}", p.y);
    }

    #[test]
    fn test_empty_knot_maps_to_right_edge() {
        let knot = Knot::new(0.0, 3.2);
        let p = knot_to_point(&knot, 2000.0, 3.2, 4.2, 0, 0, W, H);
        assert_eq!(p.x, (W - 1) as i32, "zero capacity belongs on the right edge");
        assert!(p.y > (3 * H / 4) as i32, "lowest voltage belongs near the bottom, got y={}", p.y);
    }

    #[test]
    fn test_trace_stays_inside_chart() {
        // The Y margin must keep every knot strictly inside the frame
        let curve = [Knot::new(2000.0, 4.2), Knot::new(1000.0, 3.8), Knot::new(0.0, 3.2)];
        for knot in &curve {
            let p = knot_to_point(knot, 2000.0, 3.2, 4.2, 10, 20, W, H);
            assert!(p.x >= 10 && p.x < 10 + W as i32);
            assert!(p.y > 20 && p.y < 20 + H as i32 - 1, "knot at {} V escaped the frame", knot.voltage);
        }
    }
}
