//! Battery demo panel simulator for desktop.
//!
//! Runs the panel loop on the desktop: ticks the demo model once
//! per second, cycles through the three screens every 10 seconds, and renders
//! the model's fields into an SDL window via `embedded-graphics-simulator`.
//!
//! # Keys
//!
//! - `Space`: advance to the next screen immediately
//! - `L`: toggle the battery demo load
//! - `D`: dump the event log to stdout

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod screens;
mod timing;
mod widgets;

use std::thread;
use std::time::Instant;

use battsim_common::Screen;
use battsim_common::colors::BLACK;
use battsim_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use battsim_common::logging::EventLog;
use battsim_common::model::DisplayModel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::screens::{draw_battery_screen, draw_current_source_screen, draw_voltage_source_screen};
use crate::timing::{FRAME_TIME, MODEL_TICK, SCREEN_SWITCH};

fn draw_screen(display: &mut SimulatorDisplay<Rgb565>, screen: Screen, model: &DisplayModel) {
    match screen {
        Screen::Battery => draw_battery_screen(display, &model.battery),
        Screen::VoltageSource => draw_voltage_source_screen(display, &model.voltage_source),
        Screen::CurrentSource => draw_current_source_screen(display, &model.current_source),
    }
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Battery Demo Panel", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut model = DisplayModel::new();
    let mut current_screen = Screen::default();
    let mut log = EventLog::new();
    log.push("System started");
    log.push("Screen: BATTERY SIM");

    let mut was_depleted = model.battery.tracker.is_depleted();
    let mut last_tick = Instant::now();
    let mut last_switch = Instant::now();
    let mut dirty = true;

    loop {
        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Space => {
                            current_screen = current_screen.next();
                            last_switch = Instant::now();
                            log.push(current_screen.title());
                            dirty = true;
                        }
                        Keycode::L => {
                            model.battery.toggle_load();
                            log.push(if model.battery.load_on { "Load: ON" } else { "Load: OFF" });
                            dirty = true;
                        }
                        Keycode::D => {
                            for line in log.iter() {
                                println!("{line}");
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Advance the model once per second
        if last_tick.elapsed() >= MODEL_TICK {
            last_tick = Instant::now();
            model.tick_1s();

            if model.battery.tracker.is_depleted() && !was_depleted {
                log.push("Pack depleted");
            }
            was_depleted = model.battery.tracker.is_depleted();
            dirty = true;
        }

        // Cycle to the next screen on the demo interval
        if last_switch.elapsed() >= SCREEN_SWITCH {
            last_switch = Instant::now();
            current_screen = current_screen.next();
            log.push(current_screen.title());
            dirty = true;
        }

        if dirty {
            draw_screen(&mut display, current_screen, &model);
            dirty = false;
        }

        window.update(&display);
        thread::sleep(FRAME_TIME);
    }
}
