//! Reverse conversion: displayable bitmap back to scientific arrays.
//!
//! The row order is undone with the same [`DisplayOptions`] used for the
//! forward conversion, so bitmap row 0 lands on the scientific top row.

use image::{GrayImage, RgbImage};
use ndarray::{Array2, Array3};

use crate::config::DisplayOptions;
use crate::display::{source_row, RGB_CHANNELS};
use crate::error::{ConversionError, Result};
use crate::pixel::{components_from_color, value_from_channel, Pixel};

/// Reinterpret a bitmap's bytes as a `(height, width, 3)` array in bitmap
/// row order, without flipping or converting values.
pub fn rgb_array(bitmap: RgbImage) -> Result<Array3<u8>> {
    let (width, height) = (bitmap.width() as usize, bitmap.height() as usize);
    Array3::from_shape_vec((height, width, RGB_CHANNELS), bitmap.into_raw()).map_err(|e| {
        ConversionError::InvalidShape {
            message: e.to_string(),
        }
    })
}

/// Convert a color bitmap into a `(height, width, 3)` vector image.
pub fn vector_image_from_bitmap<T: Pixel>(
    bitmap: &RgbImage,
    options: &DisplayOptions,
) -> Result<Array3<T>> {
    let (width, height) = (bitmap.width() as usize, bitmap.height() as usize);
    let mut output = Array3::<T>::from_elem((height, width, RGB_CHANNELS), value_from_channel(0)?);

    for (x, row, pixel) in bitmap.enumerate_pixels() {
        let y = source_row(row as usize, height, options.flip_vertical);
        let components: [T; 3] = components_from_color(*pixel)?;
        for (c, value) in components.into_iter().enumerate() {
            output[[y, x as usize, c]] = value;
        }
    }

    Ok(output)
}

/// Convert a gray bitmap into a `(height, width)` scalar image.
pub fn scalar_image_from_bitmap<T: Pixel>(
    bitmap: &GrayImage,
    options: &DisplayOptions,
) -> Result<Array2<T>> {
    scalar_from_bitmap_values(bitmap.width(), bitmap.height(), options, |x, row| {
        bitmap.get_pixel(x, row).0[0]
    })
}

/// Convert a color bitmap into a scalar image using its red channel.
///
/// Intended for gray bitmaps produced by the scalar, magnitude and channel
/// converters, where all three channels agree.
pub fn scalar_image_from_rgb<T: Pixel>(
    bitmap: &RgbImage,
    options: &DisplayOptions,
) -> Result<Array2<T>> {
    scalar_from_bitmap_values(bitmap.width(), bitmap.height(), options, |x, row| {
        bitmap.get_pixel(x, row).0[0]
    })
}

fn scalar_from_bitmap_values<T: Pixel>(
    width: u32,
    height: u32,
    options: &DisplayOptions,
    value_at: impl Fn(u32, u32) -> u8,
) -> Result<Array2<T>> {
    let rows = height as usize;
    let mut output = Array2::<T>::from_elem((rows, width as usize), value_from_channel(0)?);

    for row in 0..height {
        let y = source_row(row as usize, rows, options.flip_vertical);
        for x in 0..width {
            output[[y, x as usize]] = value_from_channel(value_at(x, row))?;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{color_bitmap, scalar_bitmap};
    use crate::error::ConversionError;
    use crate::region::Region;
    use image::{Luma, Rgb};
    use ndarray::array;

    #[test]
    fn test_vector_from_bitmap_unflips() {
        let mut bitmap = RgbImage::new(1, 2);
        bitmap.put_pixel(0, 0, Rgb([1, 2, 3]));
        bitmap.put_pixel(0, 1, Rgb([4, 5, 6]));

        let img: Array3<u8> =
            vector_image_from_bitmap(&bitmap, &DisplayOptions::default()).unwrap();

        // Bitmap top row is the scientific last row
        assert_eq!(img[[1, 0, 0]], 1);
        assert_eq!(img[[0, 0, 2]], 6);
    }

    #[test]
    fn test_vector_from_bitmap_unflipped_options() {
        let mut bitmap = RgbImage::new(2, 1);
        bitmap.put_pixel(1, 0, Rgb([9, 8, 7]));

        let img: Array3<f32> =
            vector_image_from_bitmap(&bitmap, &DisplayOptions::unflipped()).unwrap();
        assert_eq!(img.dim(), (1, 2, 3));
        assert_eq!(img[[0, 1, 1]], 8.0);
    }

    #[test]
    fn test_color_roundtrip_in_range_image() {
        let img =
            ndarray::Array3::from_shape_fn((3, 4, 3), |(y, x, c)| (y * 40 + x * 10 + c) as u16);
        let options = DisplayOptions::default();

        let bitmap = color_bitmap(img.view(), &Region::of_image3(&img.view()), &options).unwrap();
        let back: Array3<u16> = vector_image_from_bitmap(&bitmap, &options).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_scalar_roundtrip_through_rgb() {
        let img = array![[0i16, 50], [100, 255]];
        let options = DisplayOptions::default();

        let bitmap = scalar_bitmap(img.view(), &Region::of_image2(&img.view()), &options).unwrap();
        let back: Array2<i16> = scalar_image_from_rgb(&bitmap, &options).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_scalar_from_gray_bitmap() {
        let mut bitmap = GrayImage::new(2, 2);
        bitmap.put_pixel(1, 0, Luma([77]));

        let img: Array2<f64> =
            scalar_image_from_bitmap(&bitmap, &DisplayOptions::default()).unwrap();
        assert_eq!(img[[1, 1]], 77.0);
        assert_eq!(img[[0, 0]], 0.0);
    }

    #[test]
    fn test_scalar_from_rgb_uses_red_of_colored_pixel() {
        let mut bitmap = RgbImage::new(2, 1);
        bitmap.put_pixel(0, 0, Rgb([10, 200, 30]));

        let img: Array2<u8> = scalar_image_from_rgb(&bitmap, &DisplayOptions::default()).unwrap();
        assert_eq!(img, array![[10u8, 0]]);
    }

    #[test]
    fn test_scalar_from_rgb_unflipped_options() {
        let mut bitmap = RgbImage::new(1, 2);
        bitmap.put_pixel(0, 0, Rgb([3, 3, 3]));

        let img: Array2<f32> =
            scalar_image_from_rgb(&bitmap, &DisplayOptions::unflipped()).unwrap();
        assert_eq!(img, array![[3.0f32], [0.0]]);
    }

    #[test]
    fn test_scalar_from_gray_unrepresentable_value() {
        let mut bitmap = GrayImage::new(1, 1);
        bitmap.put_pixel(0, 0, Luma([255]));

        let err = scalar_image_from_bitmap::<i8>(&bitmap, &DisplayOptions::default()).unwrap_err();
        assert!(matches!(err, ConversionError::ValueNotRepresentable { value: 255, .. }));
    }

    #[test]
    fn test_rgb_array_keeps_bitmap_order() {
        let mut bitmap = RgbImage::new(2, 1);
        bitmap.put_pixel(1, 0, Rgb([4, 5, 6]));

        let arr = rgb_array(bitmap).unwrap();
        assert_eq!(arr.dim(), (1, 2, 3));
        assert_eq!(arr[[0, 1, 2]], 6);
    }

    #[test]
    fn test_unrepresentable_value() {
        let mut bitmap = RgbImage::new(1, 1);
        bitmap.put_pixel(0, 0, Rgb([200, 0, 0]));

        let err =
            vector_image_from_bitmap::<i8>(&bitmap, &DisplayOptions::default()).unwrap_err();
        assert!(matches!(err, ConversionError::ValueNotRepresentable { value: 200, .. }));
    }
}
