//! WebAssembly exports for the sciview converters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Images arrive as flat `f32` buffers in row-major order: scalar images
//! are `width * height` long, vector images `width * height * channels`.
//! Every converter returns flat RGB bytes (`width * height * 3`) for the
//! whole image, mirrored so scientific row 0 is the bottom bitmap row.

use ndarray::{Array2, Array3};
use wasm_bindgen::prelude::*;

use crate::{
    channel_bitmap, color_bitmap, magnitude_bitmap, scalar_bitmap, ConversionError,
    DisplayOptions, Region,
};

fn to_js_err(err: ConversionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn vector_input(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Array3<f32>, JsValue> {
    Array3::from_shape_vec((height, width, channels), data.to_vec())
        .map_err(|e| JsValue::from_str(&format!("Invalid dimensions: {}", e)))
}

// ============================================================================
// Scalar
// ============================================================================

/// Convert a scalar image to RGB bytes.
///
/// # Arguments
/// * `data` - Flat array of values (length = width * height)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of RGB bytes
#[wasm_bindgen]
pub fn scalar_to_rgb_wasm(data: &[f32], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    let input = Array2::from_shape_vec((height, width), data.to_vec())
        .map_err(|e| JsValue::from_str(&format!("Invalid dimensions: {}", e)))?;

    let region = Region::whole(width, height);
    let bitmap =
        scalar_bitmap(input.view(), &region, &DisplayOptions::default()).map_err(to_js_err)?;
    Ok(bitmap.into_raw())
}

// ============================================================================
// Vector
// ============================================================================

/// Convert channels 0-2 of a vector image to RGB bytes.
#[wasm_bindgen]
pub fn color_to_rgb_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsValue> {
    let input = vector_input(data, width, height, channels)?;
    let region = Region::whole(width, height);
    let bitmap =
        color_bitmap(input.view(), &region, &DisplayOptions::default()).map_err(to_js_err)?;
    Ok(bitmap.into_raw())
}

/// Convert the rescaled per-pixel vector magnitude to RGB bytes.
#[wasm_bindgen]
pub fn magnitude_to_rgb_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsValue> {
    let input = vector_input(data, width, height, channels)?;
    let region = Region::whole(width, height);
    let bitmap =
        magnitude_bitmap(input.view(), &region, &DisplayOptions::default()).map_err(to_js_err)?;
    Ok(bitmap.into_raw())
}

/// Convert one channel of a vector image to gray RGB bytes.
#[wasm_bindgen]
pub fn channel_to_rgb_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    channel: usize,
) -> Result<Vec<u8>, JsValue> {
    let input = vector_input(data, width, height, channels)?;
    let bitmap = channel_bitmap(
        input.view(),
        &Region::whole(width, height),
        channel,
        &DisplayOptions::default(),
    )
    .map_err(to_js_err)?;
    Ok(bitmap.into_raw())
}
