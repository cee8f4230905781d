//! The rating widget: measurement, slot classification, drawing.
//!
//! A [`RatingWidget`] renders `max_rating` icon slots left to right into any
//! `DrawTarget<Color = Rgb565>`. Each slot is classified from the current
//! rating:
//!
//! | State   | Condition                                | Pixels               |
//! |---------|------------------------------------------|----------------------|
//! | Full    | `i < floor(rating)`                      | icon, fill tint      |
//! | Partial | `i == floor(rating)` and fractional part | split: tint/original |
//! | Empty   | otherwise                                | icon, empty tint     |
//!
//! The partial slot is the one asymmetry worth knowing about: its tinted
//! region covers the left `round(fraction * icon_width)` columns, and the
//! remainder keeps the icon's *original* colors rather than the empty tint.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::RatingConfig;
use crate::error::RatingError;
use crate::icon::{self, IconBitmap, IconScratch, ALPHA_CUTOFF};

// =============================================================================
// Slot Classification
// =============================================================================

/// Per-slot render classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotState {
    /// Icon drawn with the fill tint.
    Full,
    /// Icon split at the carried fraction: fill tint left, original right.
    Partial(f32),
    /// Icon drawn with the empty tint.
    Empty,
}

/// Classify slot `index` for the given rating.
///
/// At most one slot of a row is `Partial`, and only when the rating has a
/// fractional part.
#[must_use]
pub fn slot_state(rating: f32, index: u32) -> SlotState {
    let whole = rating as u32;
    if index < whole {
        SlotState::Full
    } else if index == whole && rating - index as f32 > 0.0 {
        SlotState::Partial(rating % 1.0)
    } else {
        SlotState::Empty
    }
}

// =============================================================================
// Rating Widget
// =============================================================================

/// Star-rating display widget.
///
/// Construction fixes the configuration and the icon; only the rating value
/// changes afterwards, through [`set_rating`](Self::set_rating). The host
/// polls [`take_redraw`](Self::take_redraw) to learn when a repaint is due.
#[derive(Debug)]
pub struct RatingWidget<'a> {
    config: RatingConfig,
    icon: IconBitmap<'a>,
    rating: f32,
    dirty: bool,
    scratch: IconScratch,
}

impl<'a> RatingWidget<'a> {
    /// Create a widget from a validated configuration and a custom icon.
    ///
    /// The rating starts at 0 and the widget starts dirty so the host paints
    /// the first frame.
    pub fn new(icon: IconBitmap<'a>, config: RatingConfig) -> Result<Self, RatingError> {
        config.validate()?;
        Ok(Self {
            config,
            icon,
            rating: 0.0,
            dirty: true,
            scratch: IconScratch::new(),
        })
    }

    /// Create a widget with the bundled star icon and the default
    /// configuration resolved at the host's display density.
    pub fn with_defaults(density: f32) -> Result<RatingWidget<'static>, RatingError> {
        RatingWidget::new(icon::default_star(), RatingConfig::with_density(density))
    }

    /// The current rating value.
    #[inline]
    #[must_use]
    pub const fn rating(&self) -> f32 {
        self.rating
    }

    /// The configured number of icon slots.
    #[inline]
    #[must_use]
    pub const fn max_rating(&self) -> u32 {
        self.config.max_rating
    }

    /// Set the rating and mark the widget for repaint.
    ///
    /// Fails with [`RatingError::RatingOutOfRange`] when the value is
    /// negative or exceeds `max_rating`, leaving the stored rating and the
    /// repaint flag untouched. No clamping.
    pub fn set_rating(&mut self, rating: f32) -> Result<(), RatingError> {
        if rating < 0.0 || rating > self.config.max_rating as f32 {
            return Err(RatingError::RatingOutOfRange {
                rating,
                max_rating: self.config.max_rating,
            });
        }
        self.rating = rating;
        self.dirty = true;
        Ok(())
    }

    /// Whether a repaint is pending.
    #[inline]
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Report-and-clear the repaint flag.
    ///
    /// Returns `true` when the widget changed since the last call; the host
    /// draws in response. Drawing itself never touches the flag.
    pub fn take_redraw(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Required dimensions: `max_rating` slots with one gap between each
    /// pair, one slot tall.
    #[must_use]
    pub const fn size(&self) -> Size {
        let c = &self.config;
        Size::new(
            c.max_rating * (c.slot_size + c.inner_margin) - c.inner_margin,
            c.slot_size,
        )
    }

    /// Draw the rating row with its top-left corner at `origin`.
    ///
    /// Writes only to `display`; widget state is unchanged (the compositing
    /// scratch aside). The display should offer at least [`size`](Self::size)
    /// pixels from `origin`.
    pub fn draw<D>(&mut self, display: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let slot = self.config.slot_size;
        let step = (slot + self.config.inner_margin) as i32;

        for i in 0..self.config.max_rating {
            let slot_origin = origin + Point::new(i as i32 * step, 0);
            match slot_state(self.rating, i) {
                SlotState::Full => blit_rgba(
                    display,
                    slot_origin,
                    slot,
                    self.icon.width(),
                    self.icon.height(),
                    self.icon.data(),
                    Some(self.config.fill_color),
                )?,
                SlotState::Empty => blit_rgba(
                    display,
                    slot_origin,
                    slot,
                    self.icon.width(),
                    self.icon.height(),
                    self.icon.data(),
                    Some(self.config.empty_color),
                )?,
                SlotState::Partial(fraction) => {
                    let columns = (fraction * self.icon.width() as f32).round() as u32;
                    self.scratch.load(&self.icon);
                    self.scratch
                        .tint_left_columns(self.icon.width(), columns, self.config.fill_color);
                    blit_rgba(
                        display,
                        slot_origin,
                        slot,
                        self.icon.width(),
                        self.icon.height(),
                        self.scratch.bytes(),
                        None,
                    )?;
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Icon Blitting
// =============================================================================

/// Blit an RGBA raster into a `slot_size` square at `origin`, scaling by
/// nearest-neighbor sampling.
///
/// Pixels below [`ALPHA_CUTOFF`] are skipped so the display keeps its
/// background. With `tint` set, every drawn pixel takes that color (the
/// source-atop result for a fully tinted icon); with `None`, colors come
/// from the raster itself.
fn blit_rgba<D>(
    display: &mut D,
    origin: Point,
    slot_size: u32,
    width: u32,
    height: u32,
    data: &[u8],
    tint: Option<Rgb565>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let pixels = (0..slot_size * slot_size).filter_map(move |i| {
        let dx = i % slot_size;
        let dy = i / slot_size;
        let sx = dx * width / slot_size;
        let sy = dy * height / slot_size;
        let idx = ((sy * width + sx) * 4) as usize;
        if data[idx + 3] < ALPHA_CUTOFF {
            return None;
        }
        let color = tint.unwrap_or_else(|| {
            Rgb565::new(data[idx] >> 3, data[idx + 1] >> 2, data[idx + 2] >> 3)
        });
        Some(Pixel(origin + Point::new(dx as i32, dy as i32), color))
    });
    display.draw_iter(pixels)
}

// =============================================================================
// Unit Tests
// =============================================================================
