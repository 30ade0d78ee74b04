//! Channel selection: view one channel of a vector image as a scalar image.

use ndarray::{Array2, ArrayView2, ArrayView3, Axis};

use crate::error::{ConversionError, Result};
use crate::pixel::Pixel;

/// Borrow channel `channel` of a `(height, width, channels)` image.
///
/// # Arguments
/// * `image` - Vector image (height, width, channels)
/// * `channel` - Zero-based channel index
///
/// # Returns
/// Scalar view (height, width), or `ChannelOutOfRange`
pub fn extract_channel<'a, T>(
    image: ArrayView3<'a, T>,
    channel: usize,
) -> Result<ArrayView2<'a, T>> {
    let channels = image.dim().2;
    if channel >= channels {
        return Err(ConversionError::ChannelOutOfRange { channel, channels });
    }
    Ok(image.index_axis_move(Axis(2), channel))
}

/// Copy channel `channel` into an `f32` scalar image.
///
/// Values with no `f32` representation become NaN.
pub fn extract_channel_f32<T: Pixel>(image: ArrayView3<T>, channel: usize) -> Result<Array2<f32>> {
    let view = extract_channel(image, channel)?;
    Ok(view.mapv(|v| v.to_f32().unwrap_or(f32::NAN)))
}
