//! Windows defined piecewise over their grid.

use core::f64::consts::PI;

use super::domain::{params, Domain};
use crate::capability::Capabilities;
use crate::error::{Error, Result};

fn symmetric_only(window: &'static str, domain: Domain) -> Result<()> {
    if domain.is_periodic() {
        return Err(Error::UnknownWindow {
            name: window.into(),
            periodic: true,
        });
    }
    Ok(())
}

/// Parzen window over `x ∈ [-1, 1]`: `1 - 6x² + 6|x|³` for `|x| ≤ ½`,
/// `2(1 - |x|)³` beyond. Zero at both ends, so it differs from
/// [`parzen_octave`]. Symmetric only.
pub fn parzen(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("parzen", p)?;
    symmetric_only("parzen", domain)?;
    Ok(domain.map(-1.0, 1.0, |x| {
        let ax = x.abs();
        if ax <= 0.5 {
            1.0 - 6.0 * ax * ax + 6.0 * ax * ax * ax
        } else {
            2.0 * (1.0 - ax).powi(3)
        }
    }))
}

/// Parzen window as computed by Octave/MATLAB `parzenwin`. Symmetric only.
pub fn parzen_octave(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [] = params::<0>("parzen_octave", p)?;
    symmetric_only("parzen_octave", domain)?;
    let n = domain.len() as f64;
    let center = (n - 1.0) / 2.0;
    let half = n / 2.0;
    let knee = (n - 1.0) / 4.0;
    Ok((0..domain.len())
        .map(|i| {
            let m = (i as f64 - center).abs();
            let k = m / half;
            if m <= knee {
                1.0 - 6.0 * k * k + 6.0 * k * k * k
            } else {
                2.0 * (1.0 - k).powi(3)
            }
        })
        .collect())
}

/// Tukey (tapered cosine) window.
///
/// Raised-cosine tapers cover the first and last `α/2` of `t ∈ [0, 1]` with a
/// flat top between. `α = 0` is rectangular and `α = 1` is Hann.
///
/// # Errors
/// [`Error::ParamRange`] unless `0 ≤ α ≤ 1`.
pub fn tukey(domain: Domain, p: &[f64], _: &Capabilities) -> Result<Vec<f64>> {
    let [alpha] = params::<1>("tukey", p)?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err(Error::ParamRange {
            window: "tukey",
            param: "alpha",
            reason: format!("must lie in [0, 1], got {alpha}"),
        });
    }
    if alpha == 0.0 {
        return Ok(vec![1.0; domain.len()]);
    }
    let lo = alpha / 2.0;
    let hi = 1.0 - alpha / 2.0;
    Ok(domain.map(0.0, 1.0, |t| {
        if t < lo {
            0.5 * (1.0 + (PI * (2.0 * t / alpha - 1.0)).cos())
        } else if t > hi {
            0.5 * (1.0 + (PI * (2.0 * t / alpha - 2.0 / alpha + 1.0)).cos())
        } else {
            1.0
        }
    }))
}
