//! Spectral figures of merit of a window.
//!
//! Scalar metrics are generic over [`num_traits::Float`]; the frequency
//! response [`modfreqs`] runs through `rustfft` in `f64`.

use core::fmt;
use core::str::FromStr;

use num_traits::Float;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{self, Error};
use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::SpectralMetrics1D;

/// Minimum number of DFT bins used by [`modfreqs`] unless overridden.
pub const DEFAULT_MIN_BINS: usize = 1000;

fn non_empty<'a, F>(w: &'a [F], arg: &'static str) -> error::Result<&'a [F]> {
    if w.is_empty() {
        Err(Error::EmptyInput { arg })
    } else {
        Ok(w)
    }
}

fn len_as<F: Float>(n: usize) -> error::Result<F> {
    F::from(n).ok_or_else(|| {
        Error::Core(apodize_core::Error::InvalidArg {
            arg: "len".into(),
            reason: format!("{n} is not representable"),
        })
    })
}

/// Equivalent noise bandwidth in bins, `N·Σw² / (Σw)²`.
///
/// ```
/// use apodize::signal::spectral::enbw;
///
/// assert_eq!(enbw(&[1.0f64; 32]).unwrap(), 1.0);
/// ```
pub fn enbw<F: Float>(w: &[F]) -> error::Result<F> {
    let w = non_empty(w, "w")?;
    let (sum, sum_sq) = w
        .iter()
        .fold((F::zero(), F::zero()), |(s, s2), &v| (s + v, s2 + v * v));
    Ok(len_as::<F>(w.len())? * sum_sq / (sum * sum))
}

/// Coherent gain, the mean of the window.
pub fn coherent_gain<F: Float>(w: &[F]) -> error::Result<F> {
    let w = non_empty(w, "w")?;
    let sum = w.iter().fold(F::zero(), |s, &v| s + v);
    Ok(sum / len_as::<F>(w.len())?)
}

/// Processing gain, `1 / enbw`.
pub fn process_gain<F: Float>(w: &[F]) -> error::Result<F> {
    Ok(enbw(w)?.recip())
}

/// Number of DFT bins [`modfreqs`] uses for an `n`-point window: at least
/// `2n` and `min_bins`, rounded up to an even count.
pub fn response_len(n: usize, min_bins: usize) -> usize {
    let m = (2 * n).max(min_bins);
    m + m % 2
}

/// Squared modulus of the zero-padded DFT of `w`, mirrored about zero
/// frequency.
///
/// The window is padded to [`response_len`] points `M`. The `M / 2`
/// non-negative frequency bins below Nyquist are folded into a reversed
/// half followed by the half itself, so `r[i] == r[M - 1 - i]`, zero
/// frequency sits at both `M / 2 - 1` and `M / 2`, and there is no Nyquist
/// bin.
///
/// ```
/// use apodize::signal::spectral::modfreqs;
///
/// let r = modfreqs(&[1.0, 1.0], 4).unwrap();
/// assert_eq!(r.len(), 4);
/// assert_eq!((r[1], r[2]), (4.0, 4.0));
/// ```
pub fn modfreqs(w: &[f64], min_bins: usize) -> error::Result<Vec<f64>> {
    let w = non_empty(w, "w")?;
    let m = response_len(w.len(), min_bins);

    let mut buf = vec![Complex::new(0.0, 0.0); m];
    for (dst, src) in buf.iter_mut().zip(w.iter().copied()) {
        *dst = Complex::new(src, 0.0);
    }
    FftPlanner::<f64>::new().plan_fft_forward(m).process(&mut buf);

    let half: Vec<f64> = buf[..m / 2].iter().map(Complex::norm_sqr).collect();
    Ok(half.iter().rev().chain(half.iter()).copied().collect())
}

/// Every metric of one window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralStats {
    /// Equivalent noise bandwidth in bins.
    pub enbw: f64,
    /// Mean of the window.
    pub coherent_gain: f64,
    /// Reciprocal of `enbw`.
    pub process_gain: f64,
    /// Squared modulus of the zero-padded DFT, see [`modfreqs`].
    pub modfreqs: Vec<f64>,
}

impl SpectralStats {
    /// Compute every metric of `w`.
    pub fn from_samples(w: &[f64], min_bins: usize) -> error::Result<Self> {
        Ok(Self {
            enbw: enbw(w)?,
            coherent_gain: coherent_gain(w)?,
            process_gain: process_gain(w)?,
            modfreqs: modfreqs(w, min_bins)?,
        })
    }
}

/// A single spectral metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// [`enbw`].
    Enbw,
    /// [`coherent_gain`].
    CoherentGain,
    /// [`process_gain`].
    ProcessGain,
    /// [`modfreqs`].
    Modfreqs,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: [Metric; 4] = [
        Metric::Enbw,
        Metric::CoherentGain,
        Metric::ProcessGain,
        Metric::Modfreqs,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Enbw => "enbw",
            Metric::CoherentGain => "coherent_gain",
            Metric::ProcessGain => "process_gain",
            Metric::Modfreqs => "modfreqs",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| {
                Error::Core(apodize_core::Error::InvalidArg {
                    arg: "metric".into(),
                    reason: format!("unknown metric `{s}`"),
                })
            })
    }
}

/// Options of [`compute_metric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricOptions {
    /// Minimum DFT size for [`Metric::Modfreqs`].
    pub min_bins: usize,
}

impl Default for MetricOptions {
    fn default() -> Self {
        Self {
            min_bins: DEFAULT_MIN_BINS,
        }
    }
}

/// Result of [`compute_metric`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetricValue {
    /// A scalar metric.
    Scalar(f64),
    /// An array metric.
    Array(Vec<f64>),
}

impl MetricValue {
    /// The scalar value, if this is one.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            MetricValue::Scalar(v) => Some(*v),
            MetricValue::Array(_) => None,
        }
    }

    /// The array value, if this is one.
    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            MetricValue::Scalar(_) => None,
            MetricValue::Array(v) => Some(v),
        }
    }
}

/// Compute `metric` of the window samples `w`.
///
/// ```
/// use apodize::signal::spectral::{compute_metric, Metric, MetricOptions};
///
/// let w = [1.0; 8];
/// let gain = compute_metric(&w, "coherent_gain".parse::<Metric>().unwrap(), MetricOptions::default());
/// assert_eq!(gain.unwrap().as_scalar(), Some(1.0));
/// ```
pub fn compute_metric(w: &[f64], metric: Metric, options: MetricOptions) -> error::Result<MetricValue> {
    tracing::trace!(%metric, len = w.len(), "computing metric");
    Ok(match metric {
        Metric::Enbw => MetricValue::Scalar(enbw(w)?),
        Metric::CoherentGain => MetricValue::Scalar(coherent_gain(w)?),
        Metric::ProcessGain => MetricValue::Scalar(process_gain(w)?),
        Metric::Modfreqs => MetricValue::Array(modfreqs(w, options.min_bins)?),
    })
}

/// Constructor config for [`SpectralKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralConfig {
    /// Minimum DFT size of the frequency response.
    pub min_bins: usize,
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self {
            min_bins: DEFAULT_MIN_BINS,
        }
    }
}

/// Trait-first spectral metrics kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralKernel {
    min_bins: usize,
}

impl SpectralKernel {
    /// Length of the frequency response for an `n`-point window.
    pub fn response_len(&self, n: usize) -> usize {
        response_len(n, self.min_bins)
    }
}

impl KernelLifecycle for SpectralKernel {
    type Config = SpectralConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.min_bins == 0 {
            return Err(ConfigError::InvalidArgument {
                arg: "min_bins",
                reason: "min_bins must be > 0",
            });
        }
        Ok(Self {
            min_bins: config.min_bins,
        })
    }
}

impl SpectralMetrics1D<f64> for SpectralKernel {
    fn run<I>(&self, input: &I) -> Result<SpectralStats, ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        Ok(SpectralStats::from_samples(input, self.min_bins)?)
    }

    fn run_response_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<f64> + ?Sized,
        O: Write1D<f64> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let out = out.write_slice_mut().map_err(ExecInvariantViolation::from)?;
        let expected = self.response_len(input.len());
        if out.len() != expected {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected,
                got: out.len(),
            });
        }
        out.copy_from_slice(&modfreqs(input, self.min_bins)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::windows::generate_window;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::Array1;
    use rand::Rng;

    #[test]
    fn enbw_of_reference_windows() {
        let rect = generate_window(16384, "rectangular", (), false).unwrap();
        assert_abs_diff_eq!(enbw(&rect).unwrap(), 1.0, epsilon = 1e-12);
        let hamming = generate_window(16384, "hamming", (), false).unwrap();
        assert_abs_diff_eq!(enbw(&hamming).unwrap(), 1.36288567, epsilon = 1e-8);
        assert_relative_eq!(
            process_gain(&hamming).unwrap(),
            1.0 / 1.36288567,
            max_relative = 1e-8
        );
    }

    #[test]
    fn enbw_is_scale_invariant() {
        let mut rng = rand::rng();
        let w = generate_window(257, "blackman", (), false).unwrap();
        let base = enbw(&w).unwrap();
        for _ in 0..8 {
            let k: f64 = rng.random_range(0.01..100.0);
            let scaled: Vec<f64> = w.iter().map(|v| v * k).collect();
            assert_relative_eq!(enbw(&scaled).unwrap(), base, max_relative = 1e-12);
        }
    }

    #[test]
    fn scalar_metrics_are_generic() {
        let w = [0.5f32, 1.0, 0.5];
        assert_abs_diff_eq!(coherent_gain(&w).unwrap(), 2.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(enbw(&w).unwrap(), 3.0 * 1.5 / 4.0, epsilon = 1e-6);
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty: [f64; 0] = [];
        assert_eq!(enbw(&empty).unwrap_err(), Error::EmptyInput { arg: "w" });
        assert!(coherent_gain(&empty).is_err());
        assert!(modfreqs(&empty, 16).is_err());
        assert!(SpectralStats::from_samples(&empty, 16).is_err());
    }

    #[test]
    fn modfreqs_reference_values() {
        let r = modfreqs(&[1.0, 0.5, 0.25], 8).unwrap();
        let half = [3.0625, 2.196383476483184, 0.8125, 0.4286165235168156];
        let expected: Vec<f64> = half.iter().rev().chain(half.iter()).copied().collect();
        r.iter()
            .zip(&expected)
            .for_each(|(a, b)| assert_abs_diff_eq!(a, b, epsilon = 1e-12));
    }

    #[test]
    fn modfreqs_layout() {
        let w = generate_window(64, "hann", (), false).unwrap();
        let sum: f64 = w.iter().sum();
        for (min_bins, len) in [(1000, 1000), (1001, 1002), (10, 128)] {
            let r = modfreqs(&w, min_bins).unwrap();
            assert_eq!(r.len(), len);
            assert_eq!(response_len(w.len(), min_bins), len);
            assert_relative_eq!(r[len / 2 - 1], sum * sum, max_relative = 1e-12);
            assert_relative_eq!(r[len / 2], sum * sum, max_relative = 1e-12);
            assert!(r.iter().all(|v| *v >= 0.0));
            let peak = r.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(peak, r[len / 2]);
            for i in 0..len {
                assert_eq!(r[i], r[len - 1 - i]);
            }
        }
    }

    #[test]
    fn metrics_by_name() {
        let w = generate_window(33, "hann", (), false).unwrap();
        let opts = MetricOptions::default();
        for metric in Metric::ALL {
            let parsed: Metric = metric.name().parse().unwrap();
            assert_eq!(parsed, metric);
            let value = compute_metric(&w, metric, opts).unwrap();
            match metric {
                Metric::Modfreqs => assert_eq!(value.as_array().unwrap().len(), 1000),
                _ => assert!(value.as_scalar().is_some()),
            }
        }
        assert!("scallop_loss".parse::<Metric>().is_err());
    }

    #[test]
    fn spectral_kernel_runs_over_buffers() {
        let kernel = SpectralKernel::try_new(SpectralConfig { min_bins: 16 }).unwrap();
        let w = Array1::from(generate_window(8, "hamming", (), false).unwrap());
        let stats = kernel.run(&w).unwrap();
        assert_abs_diff_eq!(stats.coherent_gain, w.mean().unwrap(), epsilon = 1e-12);
        assert_eq!(stats.modfreqs.len(), 16);

        let mut out = vec![0.0; 16];
        kernel.run_response_into(&w, &mut out).unwrap();
        assert_eq!(out, stats.modfreqs);

        let mut short = vec![0.0; 4];
        assert!(matches!(
            kernel.run_response_into(&w, &mut short).unwrap_err(),
            ExecInvariantViolation::LengthMismatch { expected: 16, got: 4, .. }
        ));
        assert!(SpectralKernel::try_new(SpectralConfig { min_bins: 0 }).is_err());
    }
}
