//! One channel of a vector image shown as a gray bitmap.

use image::RgbImage;
use log::debug;
use ndarray::ArrayView3;

use super::scalar_bitmap;
use crate::config::DisplayOptions;
use crate::error::Result;
use crate::filters::channel::extract_channel_f32;
use crate::pixel::Pixel;
use crate::region::Region;

/// Convert one channel of a vector image region to a gray bitmap.
///
/// The channel is taken as `f32` and displayed like a scalar image, with
/// no rescaling.
pub fn channel_bitmap<T: Pixel>(
    image: ArrayView3<T>,
    region: &Region,
    channel: usize,
    options: &DisplayOptions,
) -> Result<RgbImage> {
    let scalar = extract_channel_f32(image, channel)?;
    debug!("Channel {} display", channel);
    scalar_bitmap(scalar.view(), region, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use image::Rgb;
    use ndarray::Array3;

    #[test]
    fn test_channel_selects_component() {
        let img = Array3::from_shape_fn((2, 2, 4), |(_, _, c)| (c * 60) as u16);
        let out = channel_bitmap(img.view(), &Region::whole(2, 2), 3, &DisplayOptions::default())
            .unwrap();
        assert!(out.pixels().all(|p| *p == Rgb([180, 180, 180])));
    }

    #[test]
    fn test_channel_out_of_range_values_blacked() {
        let img = Array3::from_shape_fn((1, 2, 2), |(_, x, c)| (x * 300 + c) as i32);
        let out = channel_bitmap(img.view(), &Region::whole(2, 1), 1, &DisplayOptions::default())
            .unwrap();

        assert_eq!(*out.get_pixel(0, 0), Rgb([1, 1, 1]));
        assert_eq!(*out.get_pixel(1, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_channel_index_checked() {
        let img = Array3::<u8>::zeros((1, 1, 2));
        let err = channel_bitmap(img.view(), &Region::whole(1, 1), 2, &DisplayOptions::default())
            .unwrap_err();
        assert!(matches!(err, ConversionError::ChannelOutOfRange { .. }));
    }
}
