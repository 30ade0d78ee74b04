//! Rectangular regions of interest in scientific index space.
//!
//! A region is addressed by its origin `(x, y)` and extent `(width, height)`.
//! Images are `(height, width[, channels])` arrays indexed `[[y, x, ..]]`,
//! so `x` selects columns and `y` selects rows.

use ndarray::{s, ArrayView2, ArrayView3};
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};

/// Rectangular sub-area of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Region {
    /// Index of the first column and row, `[x, y]`
    pub origin: [usize; 2],
    /// Number of columns and rows, `[width, height]`
    pub size: [usize; 2],
}

impl Region {
    pub fn new(origin: [usize; 2], size: [usize; 2]) -> Self {
        Self { origin, size }
    }

    /// Region covering a whole `width` x `height` image.
    pub fn whole(width: usize, height: usize) -> Self {
        Self::new([0, 0], [width, height])
    }

    /// Largest possible region of a scalar image.
    pub fn of_image2<T>(image: &ArrayView2<T>) -> Self {
        let (height, width) = image.dim();
        Self::whole(width, height)
    }

    /// Largest possible region of a vector image.
    pub fn of_image3<T>(image: &ArrayView3<T>) -> Self {
        let (height, width, _) = image.dim();
        Self::whole(width, height)
    }

    pub fn x(&self) -> usize {
        self.origin[0]
    }

    pub fn y(&self) -> usize {
        self.origin[1]
    }

    pub fn width(&self) -> usize {
        self.size[0]
    }

    pub fn height(&self) -> usize {
        self.size[1]
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Exclusive end index `[x + width, y + height]`, `None` on overflow.
    pub fn end(&self) -> Option<[usize; 2]> {
        Some([
            self.x().checked_add(self.width())?,
            self.y().checked_add(self.height())?,
        ])
    }

    /// True when the region lies inside an image of the given extent.
    pub fn is_inside(&self, width: usize, height: usize) -> bool {
        match self.end() {
            Some([end_x, end_y]) => end_x <= width && end_y <= height,
            None => false,
        }
    }

    /// Error unless the region fits an image of the given extent.
    pub fn check_inside(&self, width: usize, height: usize) -> Result<()> {
        if self.is_inside(width, height) {
            Ok(())
        } else {
            Err(ConversionError::RegionOutOfBounds {
                x: self.x(),
                y: self.y(),
                width: self.width(),
                height: self.height(),
                image_width: width,
                image_height: height,
            })
        }
    }

    /// Borrow the region of a scalar image.
    pub fn crop2<'a, T>(&self, image: ArrayView2<'a, T>) -> Result<ArrayView2<'a, T>> {
        let (height, width) = image.dim();
        self.check_inside(width, height)?;

        let (x, y) = (self.x(), self.y());
        Ok(image.slice_move(s![y..y + self.height(), x..x + self.width()]))
    }

    /// Borrow the region of a vector image, keeping every channel.
    pub fn crop3<'a, T>(&self, image: ArrayView3<'a, T>) -> Result<ArrayView3<'a, T>> {
        let (height, width, _) = image.dim();
        self.check_inside(width, height)?;

        let (x, y) = (self.x(), self.y());
        Ok(image.slice_move(s![y..y + self.height(), x..x + self.width(), ..]))
    }
}
