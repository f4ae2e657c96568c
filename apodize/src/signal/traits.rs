//! Trait interfaces for window and spectral kernels.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};
use crate::signal::spectral::SpectralStats;

/// Window generation capability.
pub trait WindowGenerate<T> {
    /// Run window generation into a caller-provided output buffer.
    fn run_into<O>(&self, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        O: Write1D<T> + ?Sized;

    /// Run window generation and allocate output samples.
    fn run_alloc(&self) -> Result<Vec<T>, ExecInvariantViolation>;
}

/// Spectral figures of merit of window samples.
pub trait SpectralMetrics1D<T> {
    /// Compute every metric of `input`.
    fn run<I>(&self, input: &I) -> Result<SpectralStats, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;

    /// Write the frequency response of `input` into a caller-provided buffer.
    fn run_response_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;
}
