//! Pixel value mapping between scientific numeric types and display colors.
//!
//! Scientific pixels can be any primitive numeric type. A component is
//! displayable when its integer part (truncated toward zero, like an
//! integer cast) lies in 0-255. Everything else, NaN and infinities
//! included, is out of range.

use image::Rgb;
use log::warn;
use num_traits::NumCast;

use crate::config::OutOfRange;
use crate::error::{ConversionError, Result};

/// Numeric pixel component of a scientific image.
pub trait Pixel: Copy + Send + Sync + NumCast + 'static {}

impl<T> Pixel for T where T: Copy + Send + Sync + NumCast + 'static {}

/// Color painted in place of undisplayable pixels
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Integer part of a component, `None` for NaN.
fn integral<T: Pixel>(value: T) -> Option<f64> {
    value.to_f64().filter(|v| !v.is_nan()).map(f64::trunc)
}

/// Map one component to a display channel, or `None` if out of range.
pub fn display_channel<T: Pixel>(value: T) -> Option<u8> {
    integral(value)
        .filter(|v| (0.0..=255.0).contains(v))
        .map(|v| v as u8)
}

/// Map one component to a display channel, clamping into 0-255.
///
/// Only NaN has no saturated value.
pub fn saturated_channel<T: Pixel>(value: T) -> Option<u8> {
    integral(value).map(|v| v.clamp(0.0, 255.0) as u8)
}

/// Strict color from three components.
pub fn display_color<T: Pixel>(r: T, g: T, b: T) -> Option<Rgb<u8>> {
    Some(Rgb([display_channel(r)?, display_channel(g)?, display_channel(b)?]))
}

/// Strict gray color (R = G = B) from one component.
pub fn gray_color<T: Pixel>(value: T) -> Option<Rgb<u8>> {
    display_channel(value).map(|v| Rgb([v, v, v]))
}

/// Resolve a pixel to a color, applying the out-of-range policy.
///
/// `x`/`y` are the pixel's position inside the converted region and only
/// appear in the warning.
pub(crate) fn resolve_color<T: Pixel>(
    components: [T; 3],
    policy: OutOfRange,
    x: usize,
    y: usize,
) -> Rgb<u8> {
    let [r, g, b] = components;
    if let Some(color) = display_color(r, g, b) {
        return color;
    }

    let values = components.map(|c| c.to_f64().unwrap_or(f64::NAN));
    let replacement = match policy {
        OutOfRange::Black => BLACK,
        OutOfRange::Saturate => match (
            saturated_channel(r),
            saturated_channel(g),
            saturated_channel(b),
        ) {
            (Some(r), Some(g), Some(b)) => Rgb([r, g, b]),
            _ => BLACK,
        },
    };

    warn!(
        "Pixel ({}, {}) has undisplayable value ({} {} {}), painting {:?}",
        x, y, values[0], values[1], values[2], replacement.0
    );
    replacement
}

/// Resolve a scalar pixel to a gray color, applying the out-of-range policy.
pub(crate) fn resolve_gray<T: Pixel>(value: T, policy: OutOfRange, x: usize, y: usize) -> Rgb<u8> {
    resolve_color([value, value, value], policy, x, y)
}

/// Convert a display channel back into a scientific pixel type.
pub fn value_from_channel<T: Pixel>(value: u8) -> Result<T> {
    <T as NumCast>::from(value).ok_or(ConversionError::ValueNotRepresentable {
        value,
        type_name: std::any::type_name::<T>(),
    })
}

/// Convert a display color back into three scientific components.
pub fn components_from_color<T: Pixel>(color: Rgb<u8>) -> Result<[T; 3]> {
    let Rgb([r, g, b]) = color;
    Ok([
        value_from_channel(r)?,
        value_from_channel(g)?,
        value_from_channel(b)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_channel_truncates_toward_zero() {
        assert_eq!(display_channel(12.9f32), Some(12));
        assert_eq!(display_channel(255.9f64), Some(255));
        // -0.5 truncates to 0 which is displayable
        assert_eq!(display_channel(-0.5f64), Some(0));
    }

    #[test]
    fn test_display_channel_rejects_out_of_range() {
        assert_eq!(display_channel(-1.0f32), None);
        assert_eq!(display_channel(256u16), None);
        assert_eq!(display_channel(-3i32), None);
        assert_eq!(display_channel(f32::NAN), None);
        assert_eq!(display_channel(f64::INFINITY), None);
    }

    #[test]
    fn test_display_channel_integer_types() {
        assert_eq!(display_channel(0u8), Some(0));
        assert_eq!(display_channel(255u8), Some(255));
        assert_eq!(display_channel(200i16), Some(200));
        assert_eq!(display_channel(77u64), Some(77));
    }

    #[test]
    fn test_saturated_channel() {
        assert_eq!(saturated_channel(300.0f32), Some(255));
        assert_eq!(saturated_channel(-7i32), Some(0));
        assert_eq!(saturated_channel(f64::INFINITY), Some(255));
        assert_eq!(saturated_channel(f64::NAN), None);
    }

    #[test]
    fn test_display_color_needs_all_components() {
        assert_eq!(display_color(10u16, 20, 30), Some(Rgb([10, 20, 30])));
        assert_eq!(display_color(10u16, 20, 300), None);
        assert_eq!(gray_color(42.0f32), Some(Rgb([42, 42, 42])));
    }

    #[test]
    fn test_resolve_color_black_policy() {
        let color = resolve_color([10.0f32, 500.0, 20.0], OutOfRange::Black, 0, 0);
        assert_eq!(color, BLACK);
    }

    #[test]
    fn test_resolve_color_saturate_policy() {
        let color = resolve_color([10.0f32, 500.0, -20.0], OutOfRange::Saturate, 0, 0);
        assert_eq!(color, Rgb([10, 255, 0]));

        let color = resolve_color([10.0f32, f32::NAN, 20.0], OutOfRange::Saturate, 0, 0);
        assert_eq!(color, BLACK);
    }

    #[test]
    fn test_resolve_gray_in_range_passes_through() {
        assert_eq!(resolve_gray(99u32, OutOfRange::Black, 3, 4), Rgb([99, 99, 99]));
    }

    #[test]
    fn test_value_from_channel() {
        assert_eq!(value_from_channel::<f32>(200).unwrap(), 200.0);
        assert_eq!(value_from_channel::<i16>(255).unwrap(), 255);
        let err = value_from_channel::<i8>(200).unwrap_err();
        assert!(matches!(err, ConversionError::ValueNotRepresentable { value: 200, .. }));
    }

    #[test]
    fn test_components_from_color() {
        let components: [u16; 3] = components_from_color(Rgb([1, 2, 3])).unwrap();
        assert_eq!(components, [1, 2, 3]);
    }
}
