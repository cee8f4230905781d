//! Widget configuration and defaults.
//!
//! All configuration is fixed at construction; there are no runtime setters.
//! Hosts either fill a [`RatingConfig`] explicitly or take the defaults,
//! which mirror the classic rating-bar look: five slots, a 14dp gap, 50dp
//! icons, yellow fill on dark gray. Density-dependent defaults are resolved
//! through [`px_from_dp`] with the host's display density and truncated to
//! whole pixels.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{DARK_GRAY, YELLOW};
use crate::density::px_from_dp;
use crate::error::RatingError;

// =============================================================================
// Default Configuration
// =============================================================================

/// Default number of icon slots.
pub const DEFAULT_MAX_RATING: u32 = 5;

/// Default gap between adjacent slots, in device-independent pixels.
pub const DEFAULT_INNER_MARGIN_DP: f32 = 14.0;

/// Default slot edge length, in device-independent pixels.
pub const DEFAULT_SLOT_SIZE_DP: f32 = 50.0;

// =============================================================================
// Configuration
// =============================================================================

/// Construction-time configuration for a [`RatingWidget`].
///
/// Validated once when the widget is built; see [`RatingConfig::validate`].
///
/// [`RatingWidget`]: crate::RatingWidget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingConfig {
    /// Number of icon slots. Must be at least 1.
    pub max_rating: u32,
    /// Gap between adjacent slots, in pixels.
    pub inner_margin: u32,
    /// Edge length of each square icon slot, in pixels. Must be at least 1.
    pub slot_size: u32,
    /// Tint for filled icons.
    pub fill_color: Rgb565,
    /// Tint for empty icons.
    pub empty_color: Rgb565,
}

impl RatingConfig {
    /// The default configuration with size-like values resolved at the given
    /// display density.
    #[must_use]
    pub fn with_density(density: f32) -> Self {
        Self {
            max_rating: DEFAULT_MAX_RATING,
            inner_margin: px_from_dp(DEFAULT_INNER_MARGIN_DP, density) as u32,
            slot_size: px_from_dp(DEFAULT_SLOT_SIZE_DP, density) as u32,
            fill_color: YELLOW,
            empty_color: DARK_GRAY,
        }
    }

    /// Check the construction invariants: at least one slot, nonzero slot
    /// size.
    pub fn validate(&self) -> Result<(), RatingError> {
        if self.max_rating == 0 {
            return Err(RatingError::InvalidMaxRating);
        }
        if self.slot_size == 0 {
            return Err(RatingError::InvalidSlotSize);
        }
        Ok(())
    }
}

impl Default for RatingConfig {
    /// Defaults at baseline density (1.0).
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
