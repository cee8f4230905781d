//! Error types for the rating widget.

use thiserror::Error;

/// Errors reported by widget construction and [`set_rating`].
///
/// [`set_rating`]: crate::RatingWidget::set_rating
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RatingError {
    /// The requested rating is negative or exceeds the configured maximum.
    /// The caller must keep ratings in `0.0..=max_rating`; the widget never
    /// clamps.
    #[error("rating {rating} out of range 0..={max_rating}")]
    RatingOutOfRange {
        /// The rejected value.
        rating: f32,
        /// The configured slot count.
        max_rating: u32,
    },

    /// `max_rating` must be at least 1.
    #[error("max_rating must be at least 1")]
    InvalidMaxRating,

    /// `slot_size` must be at least 1 pixel.
    #[error("slot_size must be at least 1 pixel")]
    InvalidSlotSize,

    /// Icon data length does not match `width * height * 4` RGBA bytes,
    /// or a dimension is zero.
    #[error("icon data does not describe a {width}x{height} RGBA bitmap ({actual} bytes)")]
    BadIconData {
        /// Declared icon width.
        width: u32,
        /// Declared icon height.
        height: u32,
        /// Actual data length supplied.
        actual: usize,
    },

    /// The icon exceeds the fixed compositing buffer
    /// ([`MAX_ICON_DIM`](crate::icon::MAX_ICON_DIM) pixels per side).
    #[error("icon {width}x{height} exceeds the {max}x{max} compositing limit")]
    IconTooLarge {
        /// Declared icon width.
        width: u32,
        /// Declared icon height.
        height: u32,
        /// Maximum supported dimension.
        max: u32,
    },
}
