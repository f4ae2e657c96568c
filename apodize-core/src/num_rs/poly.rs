//! Conversions between the two polynomial bases used by cosine-sum windows.
//!
//! A cosine-sum window is usually tabulated in the *multiple-angle* basis,
//!
//! ```text
//! w(θ) = a0 - a1·cos(θ) + a2·cos(2θ) - a3·cos(3θ) + ...
//! ```
//!
//! Expanding each `cos(kθ)` as a Chebyshev polynomial in `cos(θ)` gives the
//! *power-of-cosine* basis,
//!
//! ```text
//! w(θ) = c0 + c1·cos(θ) + c2·cos(θ)² + ... + c6·cos(θ)⁶
//! ```
//!
//! which needs a single `cos` per sample and a Horner evaluation.

use crate::{Error, Result};

/// Largest number of coefficients accepted by the basis conversions.
pub const MAX_POLY_COEFFS: usize = 7;

fn padded(func: &'static str, coeffs: &[f64]) -> Result<[f64; MAX_POLY_COEFFS]> {
    if coeffs.len() > MAX_POLY_COEFFS {
        return Err(Error::Arity {
            func,
            max: MAX_POLY_COEFFS,
            got: coeffs.len(),
        });
    }
    let mut out = [0.0; MAX_POLY_COEFFS];
    out[..coeffs.len()].copy_from_slice(coeffs);
    Ok(out)
}

/// Convert multiple-angle cosine coefficients `a0..a6` to power-of-cosine
/// coefficients `c0..c6`.
///
/// Missing trailing coefficients are zero. The result has the same length as
/// the input.
///
/// # Errors
/// [`Error::Arity`] when more than [`MAX_POLY_COEFFS`] coefficients are given.
///
/// # Examples
/// ```
/// use apodize_core::num_rs::mult_to_pow;
///
/// // Hamming: 0.54 - 0.46·cos(θ)
/// assert_eq!(mult_to_pow(&[0.54, 0.46]).unwrap(), vec![0.54, -0.46]);
/// ```
pub fn mult_to_pow(a: &[f64]) -> Result<Vec<f64>> {
    let [a0, a1, a2, a3, a4, a5, a6] = padded("mult_to_pow", a)?;
    let c = [
        -a6 + a4 - a2 + a0,
        -5.0 * a5 + 3.0 * a3 - a1,
        18.0 * a6 - 8.0 * a4 + 2.0 * a2,
        20.0 * a5 - 4.0 * a3,
        8.0 * a4 - 48.0 * a6,
        -16.0 * a5,
        32.0 * a6,
    ];
    Ok(c[..a.len()].to_vec())
}

/// Convert power-of-cosine coefficients `c0..c6` back to multiple-angle
/// cosine coefficients `a0..a6`. Inverse of [`mult_to_pow`].
///
/// # Errors
/// [`Error::Arity`] when more than [`MAX_POLY_COEFFS`] coefficients are given.
pub fn pow_to_mult(c: &[f64]) -> Result<Vec<f64>> {
    let [c0, c1, c2, c3, c4, c5, c6] = padded("pow_to_mult", c)?;
    let t = [
        32.0 * c0 + 16.0 * c2 + 12.0 * c4 + 10.0 * c6,
        32.0 * c1 + 24.0 * c3 + 20.0 * c5,
        16.0 * c2 + 16.0 * c4 + 15.0 * c6,
        8.0 * c3 + 10.0 * c5,
        4.0 * c4 + 6.0 * c6,
        2.0 * c5,
        c6,
    ];
    Ok(t.iter()
        .take(c.len())
        .enumerate()
        .map(|(k, tk)| if k % 2 == 0 { tk / 32.0 } else { tk / -32.0 })
        .collect())
}

/// Evaluate `c[0] + c[1]·x + c[2]·x² + ...` with Horner's method.
///
/// An empty coefficient list evaluates to `0`.
pub fn horner(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, ck| acc * x + ck)
}
