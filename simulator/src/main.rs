//! Star-rating widget simulator for desktop.
//!
//! Runs the widget in an SDL window via the embedded-graphics-simulator
//! crate. Up/Down adjust the rating in half-star steps, R resets it to zero.

// Crate-level lints
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

use core::fmt::Write;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Text, TextStyle, TextStyleBuilder};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use profont::PROFONT_18_POINT;
use rating_widget::RatingWidget;
use rating_widget::colors::{BLACK, WHITE};

/// Target frame time (~50 FPS). The main loop sleeps if the frame completes early.
const FRAME_TIME: Duration = Duration::from_millis(20);

/// Rating change per key press.
const RATING_STEP: f32 = 0.5;

/// Padding around the rating row, in pixels.
const PADDING: u32 = 20;

/// Centered text alignment for the readout.
const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Rating value readout style.
const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Key hint style.
const HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

fn main() {
    let mut widget = RatingWidget::with_defaults(1.0).expect("default configuration is valid");
    widget.set_rating(3.5).ok();

    let row = widget.size();
    let screen = Size::new(row.width + 2 * PADDING, row.height + 2 * PADDING + 40);
    let center_x = (screen.width / 2) as i32;

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(screen);
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Star Rating Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Up => {
                            let next =
                                (widget.rating() + RATING_STEP).min(widget.max_rating() as f32);
                            widget.set_rating(next).ok();
                        }
                        Keycode::Down => {
                            let next = (widget.rating() - RATING_STEP).max(0.0);
                            widget.set_rating(next).ok();
                        }
                        Keycode::R => {
                            widget.set_rating(0.0).ok();
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Repaint only when the widget changed
        if widget.take_redraw() {
            display.clear(BLACK).ok();
            widget
                .draw(&mut display, Point::new(PADDING as i32, PADDING as i32))
                .ok();

            let mut value_str: String<16> = String::new();
            let _ = write!(value_str, "{:.1} / {}", widget.rating(), widget.max_rating());
            let value_y = (PADDING + row.height + 28) as i32;
            Text::with_text_style(&value_str, Point::new(center_x, value_y), VALUE_STYLE, CENTERED)
                .draw(&mut display)
                .ok();

            let hint_y = (screen.height - 8) as i32;
            Text::with_text_style(
                "UP/DOWN ADJUST - R RESET",
                Point::new(center_x, hint_y),
                HINT_STYLE,
                CENTERED,
            )
            .draw(&mut display)
            .ok();
        }

        window.update(&display);
        thread::sleep(FRAME_TIME.saturating_sub(frame_start.elapsed()));
    }
}
