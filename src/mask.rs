//! Hole mask used when composing source and target patches.

use ndarray::{Array2, ArrayView2};

use crate::error::Result;
use crate::region::Region;

/// Default value marking a hole pixel
pub const DEFAULT_HOLE_VALUE: u8 = 255;

/// Binary mask over an image, `(height, width)`, indexed `[[y, x]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    data: Array2<u8>,
    hole_value: u8,
}

impl Mask {
    /// Wrap mask data using [`DEFAULT_HOLE_VALUE`] for holes.
    pub fn new(data: Array2<u8>) -> Self {
        Self::with_hole_value(data, DEFAULT_HOLE_VALUE)
    }

    pub fn with_hole_value(data: Array2<u8>, hole_value: u8) -> Self {
        Self { data, hole_value }
    }

    /// Mask of the given extent with no holes.
    pub fn valid(width: usize, height: usize) -> Self {
        Self::new(Array2::zeros((height, width)))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn hole_value(&self) -> u8 {
        self.hole_value
    }

    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    /// True when `(x, y)` is a hole. Positions outside the mask are not holes.
    pub fn is_hole(&self, x: usize, y: usize) -> bool {
        self.data
            .get([y, x])
            .is_some_and(|&value| value == self.hole_value)
    }

    pub fn set_hole(&mut self, x: usize, y: usize) {
        if let Some(value) = self.data.get_mut([y, x]) {
            *value = self.hole_value;
        }
    }

    /// Borrow the mask under `region`.
    pub fn crop(&self, region: &Region) -> Result<ArrayView2<'_, u8>> {
        region.crop2(self.data.view())
    }

    /// Number of hole pixels.
    pub fn hole_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == self.hole_value).count()
    }
}
