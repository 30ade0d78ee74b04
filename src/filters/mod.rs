//! Image filters the display converters build on.
//!
//! | Filter | Input | Output |
//! |--------|-------|--------|
//! | [`channel::extract_channel`] | (H, W, C) | (H, W) view of one channel |
//! | [`magnitude::vector_magnitude`] | (H, W, C) | (H, W) f64 vector norms |
//! | [`rescale::rescale_intensity`] | (H, W) | (H, W) u8 min/max stretch |
//!
//! Region-of-interest extraction lives on [`crate::Region`].

pub mod channel;
pub mod magnitude;
pub mod rescale;
