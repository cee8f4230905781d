//! Color constants for the rating widget.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The `RgbColor` trait provides pre-defined constants for the standard
//! colors; application-specific shades are constructed with `Rgb565::new`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Used for display backgrounds.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Used for text in the demo.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure yellow (31, 63, 0). Default tint for filled rating icons.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Dark gray, default tint for empty rating icons.
/// RGB565: (8, 17, 8) - roughly 25% brightness.
pub const DARK_GRAY: Rgb565 = Rgb565::new(8, 17, 8);
