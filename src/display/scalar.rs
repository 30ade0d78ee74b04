//! Scalar images shown as gray bitmaps.

use image::RgbImage;
use log::debug;
use ndarray::ArrayView2;

use super::render;
use crate::config::DisplayOptions;
use crate::error::Result;
use crate::pixel::{resolve_gray, Pixel};
use crate::region::Region;

/// Convert a region of a scalar image to a gray bitmap.
///
/// Each value is shown as R = G = B without rescaling. Values whose integer
/// part falls outside 0-255 are logged and replaced per
/// [`DisplayOptions::out_of_range`].
///
/// # Arguments
/// * `image` - Scalar image (height, width)
/// * `region` - Region to convert, must lie inside the image
/// * `options` - Row order and out-of-range policy
///
/// # Returns
/// Bitmap of the region's size
pub fn scalar_bitmap<T: Pixel>(
    image: ArrayView2<T>,
    region: &Region,
    options: &DisplayOptions,
) -> Result<RgbImage> {
    let roi = region.crop2(image)?;
    debug!("Scalar display of {:?}", region);

    let policy = options.out_of_range;
    render(region.width(), region.height(), options, |x, y| {
        resolve_gray(roi[[y, x]], policy, x, y)
    })
}
