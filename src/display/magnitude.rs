//! Vector images shown through their rescaled per-pixel magnitude.

use image::{Rgb, RgbImage};
use log::debug;
use ndarray::ArrayView3;

use super::render;
use crate::config::DisplayOptions;
use crate::error::Result;
use crate::filters::magnitude::vector_magnitude;
use crate::filters::rescale::rescale_to_display;
use crate::pixel::Pixel;
use crate::region::Region;

/// Convert a region of a vector image to a gray bitmap of vector magnitudes.
///
/// The magnitude is computed and rescaled to 0-255 over the WHOLE image
/// before the region is cut out, so the gray levels of a region depend on
/// the extrema of the full image.
///
/// # Arguments
/// * `image` - Vector image (height, width, channels), any channel count
/// * `region` - Region to convert, must lie inside the image
/// * `options` - Row order
///
/// # Returns
/// Bitmap of the region's size
pub fn magnitude_bitmap<T: Pixel>(
    image: ArrayView3<T>,
    region: &Region,
    options: &DisplayOptions,
) -> Result<RgbImage> {
    let (height, width, _) = image.dim();
    region.check_inside(width, height)?;

    let magnitude = vector_magnitude(image);
    let rescaled = rescale_to_display(magnitude.view());
    let roi = region.crop2(rescaled.view())?;
    debug!("Magnitude display of {:?}", region);

    render(region.width(), region.height(), options, |x, y| {
        let v = roi[[y, x]];
        Rgb([v, v, v])
    })
}
