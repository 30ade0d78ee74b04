//! Forward conversion: scientific image region to displayable RGB bitmap.
//!
//! ## Pixel Categories
//!
//! | Converter | Input | Mapping |
//! |-----------|-------|---------|
//! | [`scalar_bitmap`] | (H, W) | value -> gray, validated |
//! | [`color_bitmap`] | (H, W, C >= 3) | channels 0, 1, 2 -> R, G, B, validated |
//! | [`magnitude_bitmap`] | (H, W, C) | vector norm, rescaled over the whole image -> gray |
//! | [`channel_bitmap`] | (H, W, C) | one channel as f32 -> gray, validated |
//! | [`combined_patch_bitmap`] | (H, W, C >= 3) + mask | source where hole, else target |
//!
//! ## Row Order
//!
//! Scientific images keep row 0 at the bottom, bitmaps at the top. With
//! [`DisplayOptions::flip_vertical`] set, bitmap row `r` shows region row
//! `height - 1 - r`.
//!
//! Output rows are filled in parallel, so out-of-range warnings can arrive
//! in any order.

mod channel;
mod color;
mod magnitude;
mod patch;
mod scalar;

pub use channel::channel_bitmap;
pub use color::color_bitmap;
pub use magnitude::magnitude_bitmap;
pub use patch::combined_patch_bitmap;
pub use scalar::scalar_bitmap;

use image::{Rgb, RgbImage};
use ndarray::ArrayView3;
use rayon::prelude::*;

use crate::config::{DisplayOptions, DisplayStyle};
use crate::error::{ConversionError, Result};
use crate::pixel::Pixel;
use crate::region::Region;

/// Channels needed for color display
pub const RGB_CHANNELS: usize = 3;

/// Convert a vector image region using the given display style.
pub fn bitmap<T: Pixel>(
    image: ArrayView3<T>,
    region: &Region,
    style: DisplayStyle,
    options: &DisplayOptions,
) -> Result<RgbImage> {
    match style {
        DisplayStyle::Color => color_bitmap(image, region, options),
        DisplayStyle::Magnitude => magnitude_bitmap(image, region, options),
        DisplayStyle::Channel(channel) => channel_bitmap(image, region, channel, options),
    }
}

/// Region row shown on bitmap row `row`.
pub fn source_row(row: usize, height: usize, flip_vertical: bool) -> usize {
    if flip_vertical {
        height - 1 - row
    } else {
        row
    }
}

fn bitmap_dimension(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| ConversionError::DimensionOverflow(value))
}

/// Build a `width` x `height` bitmap from a per-pixel color function.
///
/// `color_at(x, y)` receives region coordinates; row flipping is applied
/// here so callers never deal with bitmap row order.
pub(crate) fn render<F>(
    width: usize,
    height: usize,
    options: &DisplayOptions,
    color_at: F,
) -> Result<RgbImage>
where
    F: Fn(usize, usize) -> Rgb<u8> + Sync,
{
    let bitmap_width = bitmap_dimension(width)?;
    let bitmap_height = bitmap_dimension(height)?;
    if width == 0 || height == 0 {
        return Ok(RgbImage::new(bitmap_width, bitmap_height));
    }

    let row_len = width
        .checked_mul(RGB_CHANNELS)
        .ok_or(ConversionError::DimensionOverflow(width))?;
    let total = row_len
        .checked_mul(height)
        .ok_or(ConversionError::DimensionOverflow(height))?;
    let mut buffer = vec![0u8; total];

    buffer
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, chunk)| {
            let y = source_row(row, height, options.flip_vertical);
            for (x, px) in chunk.chunks_exact_mut(RGB_CHANNELS).enumerate() {
                px.copy_from_slice(&color_at(x, y).0);
            }
        });

    RgbImage::from_raw(bitmap_width, bitmap_height, buffer).ok_or_else(|| {
        ConversionError::InvalidShape {
            message: format!("buffer does not fill a {}x{} bitmap", width, height),
        }
    })
}
