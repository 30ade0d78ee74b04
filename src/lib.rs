//! Sciview Rust Extensions
//!
//! Conversion helpers between scientific images and displayable RGB
//! bitmaps, with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Scientific images are `ndarray` arrays of any primitive numeric type:
//! - **Scalar**: (height, width), indexed `[[y, x]]`
//! - **Vector**: (height, width, channels), indexed `[[y, x, c]]`
//!
//! Row 0 of a scientific image is its bottom row. Bitmaps are
//! [`image::RgbImage`] with row 0 at the top, so conversions mirror rows
//! unless [`DisplayOptions::flip_vertical`] is turned off.
//!
//! ## Value Range
//! A component is displayable when its integer part lies in 0-255. Other
//! values are logged with `log::warn!` and painted black (or clamped, see
//! [`OutOfRange`]). Magnitude display rescales instead of validating.
//!
//! ```
//! use ndarray::array;
//! use sciview_rust::{scalar_bitmap, DisplayOptions, Region};
//!
//! let image = array![[0u16, 64], [128, 255]];
//! let region = Region::of_image2(&image.view());
//! let bitmap = scalar_bitmap(image.view(), &region, &DisplayOptions::default())?;
//!
//! // Scientific row 1 is the bitmap's top row
//! assert_eq!(bitmap.get_pixel(0, 0).0, [128, 128, 128]);
//! # Ok::<(), sciview_rust::ConversionError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod filters;
pub mod mask;
pub mod pixel;
pub mod region;
pub mod reverse;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{DisplayOptions, DisplayStyle, OutOfRange};
pub use display::{
    bitmap, channel_bitmap, color_bitmap, combined_patch_bitmap, magnitude_bitmap, scalar_bitmap,
};
pub use error::{ConversionError, Result};
pub use mask::Mask;
pub use pixel::{display_channel, display_color, gray_color, Pixel};
pub use region::Region;
pub use reverse::{
    rgb_array, scalar_image_from_bitmap, scalar_image_from_rgb, vector_image_from_bitmap,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use ndarray::{ArrayView2, ArrayView3};
    use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::{
        channel_bitmap, color_bitmap, magnitude_bitmap, rgb_array, scalar_bitmap,
        scalar_image_from_rgb, vector_image_from_bitmap, ConversionError, DisplayOptions,
        OutOfRange, Region,
    };

    type PyRegion = (usize, usize, usize, usize);

    fn to_py_err(err: ConversionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn options(flip_vertical: bool, saturate: bool) -> DisplayOptions {
        DisplayOptions {
            flip_vertical,
            out_of_range: if saturate {
                OutOfRange::Saturate
            } else {
                OutOfRange::Black
            },
        }
    }

    fn region2(region: Option<PyRegion>, image: &ArrayView2<f64>) -> Region {
        match region {
            Some((x, y, width, height)) => Region::new([x, y], [width, height]),
            None => Region::of_image2(image),
        }
    }

    fn region3(region: Option<PyRegion>, image: &ArrayView3<f64>) -> Region {
        match region {
            Some((x, y, width, height)) => Region::new([x, y], [width, height]),
            None => Region::of_image3(image),
        }
    }

    fn rgb_image(array: PyReadonlyArray3<'_, u8>) -> PyResult<image::RgbImage> {
        let view = array.as_array();
        let (height, width, channels) = view.dim();
        if channels != 3 {
            return Err(PyValueError::new_err(format!(
                "expected 3 channels, got {}",
                channels
            )));
        }
        let raw: Vec<u8> = view.iter().copied().collect();
        let too_large = |_| PyValueError::new_err("image too large for a bitmap");
        let width = u32::try_from(width).map_err(too_large)?;
        let height = u32::try_from(height).map_err(too_large)?;
        image::RgbImage::from_raw(width, height, raw)
            .ok_or_else(|| PyValueError::new_err("image data does not match its shape"))
    }

    // ========================================================================
    // Forward Conversion
    // ========================================================================

    /// Convert a scalar image (or a region of it) to an RGB bitmap.
    ///
    /// # Arguments
    /// * `image` - float64 array (height, width)
    /// * `region` - Optional (x, y, width, height); defaults to the whole image
    /// * `flip_vertical` - Put scientific row 0 at the bitmap bottom
    /// * `saturate` - Clamp out-of-range values instead of painting black
    ///
    /// # Returns
    /// uint8 array (height, width, 3)
    #[pyfunction]
    #[pyo3(signature = (image, region=None, flip_vertical=true, saturate=false))]
    pub fn scalar_to_rgb<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f64>,
        region: Option<PyRegion>,
        flip_vertical: bool,
        saturate: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let view = image.as_array();
        let region = region2(region, &view);
        let bitmap = scalar_bitmap(view, &region, &options(flip_vertical, saturate))
            .map_err(to_py_err)?;
        Ok(rgb_array(bitmap).map_err(to_py_err)?.into_pyarray(py))
    }

    /// Convert channels 0-2 of a vector image to an RGB bitmap.
    #[pyfunction]
    #[pyo3(signature = (image, region=None, flip_vertical=true, saturate=false))]
    pub fn color_to_rgb<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f64>,
        region: Option<PyRegion>,
        flip_vertical: bool,
        saturate: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let view = image.as_array();
        let region = region3(region, &view);
        let bitmap = color_bitmap(view, &region, &options(flip_vertical, saturate))
            .map_err(to_py_err)?;
        Ok(rgb_array(bitmap).map_err(to_py_err)?.into_pyarray(py))
    }

    /// Convert the per-pixel vector magnitude, rescaled to 0-255, to a bitmap.
    #[pyfunction]
    #[pyo3(signature = (image, region=None, flip_vertical=true))]
    pub fn magnitude_to_rgb<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f64>,
        region: Option<PyRegion>,
        flip_vertical: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let view = image.as_array();
        let region = region3(region, &view);
        let bitmap = magnitude_bitmap(view, &region, &options(flip_vertical, false))
            .map_err(to_py_err)?;
        Ok(rgb_array(bitmap).map_err(to_py_err)?.into_pyarray(py))
    }

    /// Convert one channel of a vector image to a gray bitmap.
    #[pyfunction]
    #[pyo3(signature = (image, channel, region=None, flip_vertical=true, saturate=false))]
    pub fn channel_to_rgb<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f64>,
        channel: usize,
        region: Option<PyRegion>,
        flip_vertical: bool,
        saturate: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let view = image.as_array();
        let region = region3(region, &view);
        let bitmap = channel_bitmap(view, &region, channel, &options(flip_vertical, saturate))
            .map_err(to_py_err)?;
        Ok(rgb_array(bitmap).map_err(to_py_err)?.into_pyarray(py))
    }

    // ========================================================================
    // Reverse Conversion
    // ========================================================================

    /// Convert an RGB bitmap (height, width, 3) back to a float64 vector image.
    #[pyfunction]
    #[pyo3(signature = (image, flip_vertical=true))]
    pub fn rgb_to_vector<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        flip_vertical: bool,
    ) -> PyResult<Bound<'py, PyArray3<f64>>> {
        let bitmap = rgb_image(image)?;
        let result = vector_image_from_bitmap::<f64>(&bitmap, &options(flip_vertical, false))
            .map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Convert a gray RGB bitmap (height, width, 3) back to a float64 scalar image.
    #[pyfunction]
    #[pyo3(signature = (image, flip_vertical=true))]
    pub fn rgb_to_scalar<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        flip_vertical: bool,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let bitmap = rgb_image(image)?;
        let result = scalar_image_from_rgb::<f64>(&bitmap, &options(flip_vertical, false))
            .map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Sciview Rust extension module
    #[pymodule]
    pub fn sciview_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Forward conversion
        m.add_function(wrap_pyfunction!(scalar_to_rgb, m)?)?;
        m.add_function(wrap_pyfunction!(color_to_rgb, m)?)?;
        m.add_function(wrap_pyfunction!(magnitude_to_rgb, m)?)?;
        m.add_function(wrap_pyfunction!(channel_to_rgb, m)?)?;

        // Reverse conversion
        m.add_function(wrap_pyfunction!(rgb_to_vector, m)?)?;
        m.add_function(wrap_pyfunction!(rgb_to_scalar, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::sciview_rust;
