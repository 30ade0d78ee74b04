//! Error types for the sciview conversions.

use thiserror::Error;

/// Result type alias for sciview operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Failures that prevent a conversion from producing a bitmap or an image.
///
/// Out-of-range pixel values are not errors: they are logged and replaced
/// according to [`crate::OutOfRange`].
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Region does not fit inside the image it addresses
    #[error(
        "Region at ({x}, {y}) of size {width}x{height} exceeds image of size \
         {image_width}x{image_height}"
    )]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        image_width: usize,
        image_height: usize,
    },

    /// Two regions that must cover the same extent do not
    #[error("Region sizes differ: {first:?} vs {second:?}")]
    RegionSizeMismatch { first: [usize; 2], second: [usize; 2] },

    /// Color display needs at least three channels
    #[error("Color display needs {required} channels, image has {actual}")]
    NotEnoughChannels { required: usize, actual: usize },

    /// Requested channel index is past the last channel
    #[error("Channel {channel} requested, image has {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// Image extent does not fit the bitmap's u32 dimensions
    #[error("Dimension {0} exceeds the bitmap limit")]
    DimensionOverflow(usize),

    /// Bitmap value cannot be stored in the requested pixel type
    #[error("Value {value} cannot be represented as {type_name}")]
    ValueNotRepresentable { value: u8, type_name: &'static str },

    /// Flat buffer length does not match the declared shape
    #[error("Invalid shape: {message}")]
    InvalidShape { message: String },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
