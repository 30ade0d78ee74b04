//! Three-channel vector images shown as RGB bitmaps.

use image::RgbImage;
use log::debug;
use ndarray::ArrayView3;

use super::{render, RGB_CHANNELS};
use crate::config::DisplayOptions;
use crate::error::{ConversionError, Result};
use crate::pixel::{resolve_color, Pixel};
use crate::region::Region;

/// Convert a region of a vector image to a color bitmap.
///
/// Channels 0, 1 and 2 become red, green and blue; further channels are
/// ignored. A pixel with any undisplayable component is logged and
/// replaced per [`DisplayOptions::out_of_range`].
///
/// # Arguments
/// * `image` - Vector image (height, width, channels) with channels >= 3
/// * `region` - Region to convert, must lie inside the image
/// * `options` - Row order and out-of-range policy
///
/// # Returns
/// Bitmap of the region's size
pub fn color_bitmap<T: Pixel>(
    image: ArrayView3<T>,
    region: &Region,
    options: &DisplayOptions,
) -> Result<RgbImage> {
    check_color_channels(image.dim().2)?;
    let roi = region.crop3(image)?;
    debug!("Color display of {:?}", region);

    let policy = options.out_of_range;
    render(region.width(), region.height(), options, |x, y| {
        let components = [roi[[y, x, 0]], roi[[y, x, 1]], roi[[y, x, 2]]];
        resolve_color(components, policy, x, y)
    })
}

pub(super) fn check_color_channels(channels: usize) -> Result<()> {
    if channels < RGB_CHANNELS {
        return Err(ConversionError::NotEnoughChannels {
            required: RGB_CHANNELS,
            actual: channels,
        });
    }
    Ok(())
}
