//! Intensity rescaling: linear min/max stretch into an 8-bit output range.

use ndarray::{Array2, ArrayView2};

use crate::pixel::Pixel;

/// Smallest and largest non-NaN value, `None` when there are none.
pub fn intensity_extrema<T: Pixel>(image: ArrayView2<T>) -> Option<(f64, f64)> {
    image
        .iter()
        .filter_map(|v| v.to_f64())
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// Linearly map the input's full range onto `[out_min, out_max]`.
///
/// The smallest input value maps to `out_min` and the largest to
/// `out_max`; values in between are truncated like an integer cast.
/// A constant image maps entirely to `out_min`. NaN inputs are
/// ignored when finding the extrema and map to `out_min`.
///
/// # Arguments
/// * `image` - Scalar image (height, width)
/// * `out_min` - Output value for the input minimum
/// * `out_max` - Output value for the input maximum
///
/// # Returns
/// Rescaled u8 image with the input's shape
pub fn rescale_intensity<T: Pixel>(image: ArrayView2<T>, out_min: u8, out_max: u8) -> Array2<u8> {
    let Some((in_min, in_max)) = intensity_extrema(image.view()) else {
        return Array2::from_elem(image.dim(), out_min);
    };

    let in_range = in_max - in_min;
    let out_range = out_max as f64 - out_min as f64;
    let (lo, hi) = if out_min <= out_max {
        (out_min as f64, out_max as f64)
    } else {
        (out_max as f64, out_min as f64)
    };

    image.mapv(|v| {
        let v = match v.to_f64() {
            Some(v) if !v.is_nan() => v,
            _ => return out_min,
        };
        if in_range == 0.0 || !in_range.is_finite() {
            return out_min;
        }
        // The maximum can land a hair below out_max in floating point
        if v >= in_max {
            return out_max;
        }
        let scaled = (v - in_min) * out_range / in_range + out_min as f64;
        scaled.trunc().clamp(lo, hi) as u8
    })
}

/// Rescale to the full display range 0-255.
pub fn rescale_to_display<T: Pixel>(image: ArrayView2<T>) -> Array2<u8> {
    rescale_intensity(image, 0, 255)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_extrema_skip_nan() {
        let img = array![[f64::NAN, 2.0], [-1.0, 5.0]];
        assert_eq!(intensity_extrema(img.view()), Some((-1.0, 5.0)));
    }

    #[test]
    fn test_extrema_empty() {
        let img = Array2::<f32>::zeros((0, 0));
        assert_eq!(intensity_extrema(img.view()), None);
    }

    #[test]
    fn test_rescale_endpoints() {
        let img = array![[10.0f64, 20.0], [30.0, 110.0]];
        let out = rescale_to_display(img.view());

        assert_eq!(out[[0, 0]], 0);
        assert_eq!(out[[1, 1]], 255);
        // (20 - 10) * 255 / 100 = 25.5 -> 25
        assert_eq!(out[[0, 1]], 25);
        assert_eq!(out[[1, 0]], 51);
    }

    #[test]
    fn test_rescale_negative_input() {
        let img = array![[-1000i32, 0, 1000]];
        let out = rescale_to_display(img.view());
        assert_eq!(out, array![[0u8, 127, 255]]);
    }

    #[test]
    fn test_rescale_midpoint_truncates() {
        let img = array![[0.0f64, 100.0, 200.0]];
        let out = rescale_to_display(img.view());
        assert_eq!(out, array![[0u8, 127, 255]]);
    }

    #[test]
    fn test_rescale_maximum_is_exactly_out_max() {
        let img = array![[0.1f64, 0.7, 1.3], [1.0 / 3.0, 2.0f64.sqrt(), 0.2]];
        let out = rescale_to_display(img.view());

        assert_eq!(out[[0, 0]], 0);
        assert_eq!(out[[1, 1]], 255);
        assert_eq!(out.iter().filter(|&&v| v == 255).count(), 1);
    }

    #[test]
    fn test_rescale_constant_maps_to_min() {
        let img = Array2::from_elem((2, 2), 42.0f32);
        let out = rescale_intensity(img.view(), 10, 200);
        assert!(out.iter().all(|&v| v == 10));
    }

    #[test]
    fn test_rescale_custom_range() {
        let img = array![[0u16, 50, 100]];
        let out = rescale_intensity(img.view(), 100, 200);
        assert_eq!(out, array![[100u8, 150, 200]]);
    }

    #[test]
    fn test_rescale_nan_maps_to_min() {
        let img = array![[f32::NAN, 0.0, 1.0]];
        let out = rescale_to_display(img.view());
        assert_eq!(out, array![[0u8, 0, 255]]);
    }
}
