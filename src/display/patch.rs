//! Source/target patch composition under a hole mask.

use image::RgbImage;
use log::debug;
use ndarray::ArrayView3;

use super::color::check_color_channels;
use super::render;
use crate::config::DisplayOptions;
use crate::error::{ConversionError, Result};
use crate::mask::Mask;
use crate::pixel::{resolve_color, Pixel};
use crate::region::Region;

/// Compose a color bitmap from a source patch and a target patch.
///
/// Both regions must have the same size. At each offset the mask is read
/// at the target location: holes show the source pixel, everything else
/// shows the target pixel. Colors are mapped as in
/// [`color_bitmap`](super::color_bitmap).
///
/// # Arguments
/// * `image` - Vector image (height, width, channels) with channels >= 3
/// * `source_region` - Patch filling the holes
/// * `target_region` - Patch being filled; also addresses the mask
/// * `mask` - Hole mask with the image's extent
/// * `options` - Row order and out-of-range policy
pub fn combined_patch_bitmap<T: Pixel>(
    image: ArrayView3<T>,
    source_region: &Region,
    target_region: &Region,
    mask: &Mask,
    options: &DisplayOptions,
) -> Result<RgbImage> {
    if source_region.size != target_region.size {
        return Err(ConversionError::RegionSizeMismatch {
            first: source_region.size,
            second: target_region.size,
        });
    }
    check_color_channels(image.dim().2)?;

    let source = source_region.crop3(image)?;
    let target = target_region.crop3(image)?;
    let holes = mask.crop(target_region)?;
    let hole_value = mask.hole_value();

    let hole_count = holes.iter().filter(|&&v| v == hole_value).count();
    debug!(
        "Combined patch of {:?} into {:?}, {} hole pixels",
        source_region, target_region, hole_count
    );

    let policy = options.out_of_range;
    render(target_region.width(), target_region.height(), options, |x, y| {
        let patch = if holes[[y, x]] == hole_value { &source } else { &target };
        let components = [patch[[y, x, 0]], patch[[y, x, 1]], patch[[y, x, 2]]];
        resolve_color(components, policy, x, y)
    })
}
