//! Cosine-sum windows.
//!
//! Every window here is `Σ (-1)^k a_k cos(kθ)` over `θ ∈ [0, 2π]`. The
//! coefficients are converted once to the power-of-cosine basis and each
//! sample costs one `cos` plus a Horner evaluation.

use core::f64::consts::TAU;

use apodize_core::num_rs::{horner, mult_to_pow};

use super::domain::{params, Domain};
use crate::capability::Capabilities;
use crate::error::{Error, Result};

/// Hann coefficients, shared with `hann_matlab` and `hann_poisson`.
pub(super) const HANN: [f64; 2] = [0.5, 0.5];

/// Evaluate the cosine sum with multiple-angle coefficients `a` over the
/// `[0, 2π]` grid of `domain`.
pub fn cosine_sum(domain: Domain, a: &[f64]) -> Result<Vec<f64>> {
    let c = mult_to_pow(a)?;
    Ok(domain.map(0.0, TAU, |theta| horner(&c, theta.cos())))
}

macro_rules! fixed_cosine_sum {
    ($($(#[$doc:meta])* $name:ident => [$($a:expr),+ $(,)?];)+) => {
        $(
            $(#[$doc])*
            pub fn $name(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
                let [] = params::<0>(stringify!($name), p)?;
                cosine_sum(domain, &[$($a),+])
            }
        )+
    };
}

fixed_cosine_sum! {
    /// Hann window, `0.5 - 0.5cos(θ)`.
    hann => [HANN[0], HANN[1]];
    /// Hamming window, `0.54 - 0.46cos(θ)`.
    hamming => [0.54, 0.46];
    /// Hamming window with the exact sidelobe-cancelling coefficients 25/46, 21/46.
    hamming_ex => [25.0 / 46.0, 21.0 / 46.0];
    /// Blackman window.
    blackman => [0.42, 0.5, 0.08];
    /// "Exact" Blackman window, coefficients 7938/18608, 9240/18608, 1430/18608.
    blackman_ex => [7938.0 / 18608.0, 9240.0 / 18608.0, 1430.0 / 18608.0];
    /// Three-term Blackman-Harris window (-67 dB).
    blackman_harris => [0.42323, 0.49755, 0.07922];
    /// Four-term Blackman-Harris window (-92 dB).
    blackman_harris4 => [0.35875, 0.48829, 0.14128, 0.01168];
    /// Blackman-Nuttall window.
    blackman_nuttall => [0.3635819, 0.4891775, 0.1365995, 0.0106411];
    /// Four-term Blackman-Harris window with -74 dB sidelobes.
    blackman_bnh => [0.40217, 0.49703, 0.09392, 0.00183];
    /// Four-term Nuttall window with continuous first derivative.
    nuttall => [0.355768, 0.487396, 0.144232, 0.012604];
    /// Three-term Nuttall window with continuous first derivative.
    nuttall1 => [0.40897, 0.5, 0.09103];
    /// Five-term flat top window.
    flattop => [0.21557895, 0.41663158, 0.277263158, 0.083578947, 0.006947368];
}

/// Generalized Hamming window, `α - (1 - α)cos(θ)`.
pub fn hamming_gen(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [alpha] = params::<1>("hamming_gen", p)?;
    cosine_sum(domain, &[alpha, 1.0 - alpha])
}

/// Generalized Blackman window; `α = 0.16` is [`blackman`].
pub fn blackman_gen(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [alpha] = params::<1>("blackman_gen", p)?;
    cosine_sum(domain, &[(1.0 - alpha) / 2.0, 0.5, alpha / 2.0])
}

/// Three-term cosine sum with caller supplied `a0, a1, a2`.
pub fn blackman_gen3(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let a = params::<3>("blackman_gen3", p)?;
    cosine_sum(domain, &a)
}

/// Four-term cosine sum with caller supplied `a0..a3`.
pub fn blackman_gen4(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let a = params::<4>("blackman_gen4", p)?;
    cosine_sum(domain, &a)
}

/// Five-term cosine sum with caller supplied `a0..a4`.
pub fn blackman_gen5(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let a = params::<5>("blackman_gen5", p)?;
    cosine_sum(domain, &a)
}

/// MATLAB `hanning`: the `N + 2` point Hann window without its zero
/// endpoints. Symmetric only.
pub fn hann_matlab(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("hann_matlab", p)?;
    if domain.is_periodic() {
        return Err(Error::UnknownWindow {
            name: "hann_matlab".into(),
            periodic: true,
        });
    }
    let full = cosine_sum(Domain::symmetric(domain.len() + 2), &HANN)?;
    Ok(full[1..=domain.len()].to_vec())
}
