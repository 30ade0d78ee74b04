//! Vector magnitude: the Euclidean norm of every pixel's channel vector.

use ndarray::{Array2, ArrayView3, Zip};

use crate::pixel::Pixel;

/// Compute the per-pixel vector norm of a `(height, width, channels)` image.
///
/// Rows are processed in parallel. Components with no `f64` representation
/// make the pixel's magnitude NaN.
///
/// # Returns
/// Scalar image (height, width) of magnitudes
pub fn vector_magnitude<T: Pixel>(image: ArrayView3<T>) -> Array2<f64> {
    let (height, width, _) = image.dim();
    let mut output = Array2::<f64>::zeros((height, width));

    Zip::from(output.rows_mut())
        .and(image.outer_iter())
        .par_for_each(|mut out_row, in_row| {
            for (out, pixel) in out_row.iter_mut().zip(in_row.outer_iter()) {
                let sum_sq: f64 = pixel
                    .iter()
                    .map(|c| {
                        let v = c.to_f64().unwrap_or(f64::NAN);
                        v * v
                    })
                    .sum();
                *out = sum_sq.sqrt();
            }
        });

    output
}
