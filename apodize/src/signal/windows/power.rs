//! Closed-form windows over a linear grid.

use core::f64::consts::{LN_10, PI, TAU};

use super::cosine::{cosine_sum, HANN};
use super::domain::{params, Domain};
use crate::capability::Capabilities;
use crate::error::Result;

/// All ones. Symmetric and periodic forms are identical.
pub fn rectangular(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("rectangular", p)?;
    Ok(vec![1.0; domain.len()])
}

/// Bartlett window, `1 - |x|` over `x ∈ [-1, 1]`; zero at both ends.
pub fn bartlett(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("bartlett", p)?;
    Ok(domain.map(-1.0, 1.0, |x| 1.0 - x.abs()))
}

/// Triangular window with non-zero endpoints (MATLAB `triang`).
pub fn triangular(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("triangular", p)?;
    let l = domain.grid_len();
    let denom = if l % 2 == 1 { l + 1 } else { l } as f64;
    let center = (l as f64 - 1.0) / 2.0;
    Ok((0..domain.len())
        .map(|i| 1.0 - 2.0 * (i as f64 - center).abs() / denom)
        .collect())
}

/// Welch window, `1 - x²`.
pub fn welch(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("welch", p)?;
    Ok(domain.map(-1.0, 1.0, |x| 1.0 - x * x))
}

/// Bohman window, the self-convolution of a half cosine.
pub fn bohman(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("bohman", p)?;
    Ok(domain.map(-1.0, 1.0, |x| {
        let ax = x.abs();
        (1.0 - ax) * (PI * ax).cos() + (PI * ax).sin() / PI
    }))
}

/// Cosine (sine) window, `sin(φ)` over `φ ∈ [0, π]`.
pub fn cosine(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("cosine", p)?;
    Ok(domain.map(0.0, PI, f64::sin))
}

/// Power-of-sine window, `sin(φ)^α`.
///
/// `α = 0` is [`rectangular`], `α = 1` is [`cosine`] and `α = 2` is Hann.
pub fn cos_alpha(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [alpha] = params::<1>("cos_alpha", p)?;
    Ok(domain.map(0.0, PI, |phi| phi.sin().abs().powf(alpha)))
}

/// Exponential window whose edges sit `decay_db` below the centre.
pub fn exponential(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [decay_db] = params::<1>("exponential", p)?;
    let rate = decay_db * LN_10 / 20.0;
    Ok(domain.map(-1.0, 1.0, |x| (-rate * x.abs()).exp()))
}

/// Cauchy (Lorentzian) window, `1 / (1 + (αx)²)`.
pub fn cauchy(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [alpha] = params::<1>("cauchy", p)?;
    Ok(domain.map(-1.0, 1.0, |x| {
        let ax = alpha * x;
        1.0 / (1.0 + ax * ax)
    }))
}

/// Gaussian window, `exp(-½(βx)²)`.
pub fn gaussian(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [beta] = params::<1>("gaussian", p)?;
    Ok(domain.map(-1.0, 1.0, |x| {
        let bx = beta * x;
        (-0.5 * bx * bx).exp()
    }))
}

/// Poisson window, `exp(-α|x|)`.
pub fn poisson(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [alpha] = params::<1>("poisson", p)?;
    Ok(domain.map(-1.0, 1.0, |x| (-alpha * x.abs()).exp()))
}

/// Hann window multiplied by a Poisson window.
pub fn hann_poisson(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [alpha] = params::<1>("hann_poisson", p)?;
    let hann = cosine_sum(domain, &HANN)?;
    Ok(hann
        .into_iter()
        .zip(domain.linspace(-1.0, 1.0))
        .map(|(h, x)| h * (-alpha * x.abs()).exp())
        .collect())
}

/// Modified Bartlett-Hann window.
pub fn barthann(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("barthann", p)?;
    Ok(domain.map(0.0, 1.0, |t| {
        let d = t - 0.5;
        0.62 - 0.48 * d.abs() + 0.38 * (TAU * d).cos()
    }))
}
