//! Windows built from a numeric construction rather than a closed form.

use core::f64::consts::PI;

use apodize_core::num_rs::chebpoly_scalar;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::domain::{params, Domain};
use crate::capability::{Capabilities, Capability};
use crate::error::{Error, Result};
use crate::linalg::symmetric_toeplitz;

/// Lanczos (sinc) window, `sin(πx) / (πx)` over `x ∈ [-1, 1]`.
pub fn lanczos(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("lanczos", p)?;
    Ok(domain.map(-1.0, 1.0, |x| {
        let px = PI * x;
        if px == 0.0 {
            1.0
        } else {
            px.sin() / px
        }
    }))
}

/// Dolph-Chebyshev window with equiripple sidelobes `attenuation` dB below
/// the main lobe. Symmetric only.
///
/// The frequency response is sampled from `T_{N-1}(β·cos(πk/N))` and brought
/// back to the time domain with an FFT; even lengths apply a half-sample
/// delay first so the result stays symmetric.
///
/// # Errors
/// [`Error::ParamRange`] unless `attenuation` is finite and positive.
pub fn chebyshev(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [attenuation] = params::<1>("chebyshev", p)?;
    if domain.is_periodic() {
        return Err(Error::UnknownWindow {
            name: "chebyshev".into(),
            periodic: true,
        });
    }
    if !attenuation.is_finite() || attenuation <= 0.0 {
        return Err(Error::ParamRange {
            window: "chebyshev",
            param: "attenuation",
            reason: format!("must be finite and > 0 dB, got {attenuation}"),
        });
    }

    let n = domain.len();
    if n <= 1 {
        return Ok(vec![1.0; n]);
    }
    let order = (n - 1) as f64;
    let beta = ((10f64.powf(attenuation / 20.0)).acosh() / order).cosh();
    let odd = n % 2 == 1;

    let mut spectrum: Vec<Complex<f64>> = (0..n)
        .map(|k| {
            let x = beta * (PI * k as f64 / n as f64).cos();
            let tk = chebpoly_scalar(order, x);
            if odd {
                Complex::new(tk, 0.0)
            } else {
                Complex::from_polar(tk, PI * k as f64 / n as f64)
            }
        })
        .collect();
    FftPlanner::<f64>::new()
        .plan_fft_forward(n)
        .process(&mut spectrum);

    let half: Vec<f64> = if odd {
        spectrum[..(n + 1) / 2].iter().map(|c| c.re).collect()
    } else {
        spectrum[1..n / 2 + 1].iter().map(|c| c.re).collect()
    };
    let w: Vec<f64> = if odd {
        half[1..].iter().rev().chain(half.iter()).copied().collect()
    } else {
        half.iter().rev().chain(half.iter()).copied().collect()
    };
    let norm = half[0];
    let w: Vec<f64> = w.into_iter().map(|v| v / norm).collect();
    let peak = w.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(w.into_iter().map(|v| v / peak).collect())
}

/// Discrete prolate spheroidal (Slepian) window of time-halfbandwidth
/// product `halfwidth`.
///
/// The principal eigenvector of the Toeplitz matrix
/// `s_0 = β, s_k = sin(πβk) / (πk)` with `β = halfwidth / (L/2)`, signed so
/// that it sums positive and scaled to a unit peak. Requires the
/// [`Capability::SymmetricEigen`] capability.
///
/// # Errors
/// [`Error::MissingCapability`] without an eigensolver, [`Error::ParamRange`]
/// unless `0 ≤ halfwidth ≤ N`.
pub fn dpss(domain: Domain, p: &[f64], caps: &Capabilities) -> Result<Vec<f64>> {
    let [halfwidth] = params::<1>("dpss", p)?;
    let solver = caps.eigensolver().ok_or(Error::MissingCapability {
        window: "dpss",
        capability: Capability::SymmetricEigen,
    })?;
    if !(0.0..=domain.len() as f64).contains(&halfwidth) {
        return Err(Error::ParamRange {
            window: "dpss",
            param: "halfwidth",
            reason: format!("must lie in [0, {}], got {halfwidth}", domain.len()),
        });
    }
    if domain.is_empty() {
        return Ok(Vec::new());
    }

    let l = domain.grid_len();
    let beta = halfwidth / (l as f64 / 2.0);
    let row: Vec<f64> = (0..l)
        .map(|k| {
            if k == 0 {
                beta
            } else {
                let k = k as f64;
                (PI * beta * k).sin() / (PI * k)
            }
        })
        .collect();

    let decomp = solver.eigh(symmetric_toeplitz(&row));
    let Some(idx) = decomp.principal_index() else {
        return Ok(Vec::new());
    };
    let mut w: Vec<f64> = decomp.eigenvectors.column(idx).iter().copied().collect();
    if w.iter().sum::<f64>() < 0.0 {
        w.iter_mut().for_each(|v| *v = -*v);
    }
    let peak = w.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if peak > 0.0 {
        w.iter_mut().for_each(|v| *v /= peak);
    } else {
        tracing::warn!(len = l, halfwidth, "dpss principal eigenvector is all zeros");
    }
    w.truncate(domain.len());
    Ok(w)
}

/// Kaiser window, `I0(β√(1 - x²)) / I0(β)` with `β = π·halfwidth`.
/// Requires the [`Capability::BesselI0`] capability.
///
/// # Errors
/// [`Error::MissingCapability`] without an `I0` provider.
pub fn kaiser(domain: Domain, p: &[f64], caps: &Capabilities) -> Result<Vec<f64>> {
    let [halfwidth] = params::<1>("kaiser", p)?;
    let bessel = caps.bessel_i0().ok_or(Error::MissingCapability {
        window: "kaiser",
        capability: Capability::BesselI0,
    })?;
    // I0(b)/I0(β) = i0e(b)/i0e(β)·e^(b-β); the scaled form stays finite for large β.
    let beta = (PI * halfwidth).abs();
    let denom = bessel.i0e(beta);
    Ok(domain.map(-1.0, 1.0, |x| {
        let b = beta * (1.0 - x * x).max(0.0).sqrt();
        bessel.i0e(b) / denom * (b - beta).exp()
    }))
}
