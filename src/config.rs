//! Display configuration.
//!
//! Options can be built programmatically or loaded from JSON:
//!
//! ```
//! use sciview_rust::{DisplayOptions, OutOfRange};
//!
//! let options = DisplayOptions::from_json_str(r#"{ "flip_vertical": false }"#)?;
//! assert!(!options.flip_vertical);
//! assert_eq!(options.out_of_range, OutOfRange::Black);
//! # Ok::<(), sciview_rust::ConversionError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// What to paint when a pixel value falls outside 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRange {
    /// Replace the whole pixel with black
    #[default]
    Black,
    /// Clamp each component into 0-255
    Saturate,
}

/// How a vector image is turned into a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    /// Channels 0, 1, 2 are shown as red, green, blue
    Color,
    /// Per-pixel vector norm, rescaled to 0-255 and shown as gray
    Magnitude,
    /// A single channel shown as gray, without rescaling
    Channel(usize),
}

/// Options shared by every conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Mirror rows so the scientific bottom row lands at the bitmap top row.
    ///
    /// Scientific images keep row 0 at the bottom while bitmaps keep it at
    /// the top; leave this on unless the source already uses screen order.
    pub flip_vertical: bool,

    /// Replacement policy for out-of-range pixel values
    pub out_of_range: OutOfRange,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            flip_vertical: true,
            out_of_range: OutOfRange::Black,
        }
    }
}

impl DisplayOptions {
    /// Options that keep the scientific row order unchanged.
    pub fn unflipped() -> Self {
        Self {
            flip_vertical: false,
            ..Self::default()
        }
    }

    /// Parse options from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
