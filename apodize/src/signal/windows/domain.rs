use apodize_core::num_rs::Linspace;

use crate::error::{Error, Result};

/// Sampling domain of a window: its output length and symmetric/periodic
/// form.
///
/// A periodic window of length `N` is the first `N` points of the symmetric
/// window of length `N + 1`, so generators sample a grid of
/// [`grid_len`](Domain::grid_len) points and emit the first
/// [`len`](Domain::len) of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    len: usize,
    periodic: bool,
}

impl Domain {
    /// Domain of an `len`-point window.
    pub fn new(len: usize, periodic: bool) -> Self {
        Self { len, periodic }
    }

    /// Symmetric domain; the grid includes both endpoints.
    pub fn symmetric(len: usize) -> Self {
        Self::new(len, false)
    }

    /// Periodic (DFT-even) domain.
    pub fn periodic(len: usize) -> Self {
        Self::new(len, true)
    }

    /// Number of samples produced.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no samples are produced.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this is the periodic form.
    pub fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// Number of points of the underlying symmetric grid.
    pub fn grid_len(&self) -> usize {
        self.len + usize::from(self.periodic)
    }

    /// Emitted samples of `linspace(start, stop, grid_len)`.
    pub fn linspace(&self, start: f64, stop: f64) -> impl Iterator<Item = f64> {
        Linspace::new(start, stop, self.grid_len()).take(self.len)
    }

    /// Evaluate `f` over the emitted samples of `linspace(start, stop)`.
    pub fn map<F>(&self, start: f64, stop: f64, f: F) -> Vec<f64>
    where
        F: FnMut(f64) -> f64,
    {
        self.linspace(start, stop).map(f).collect()
    }
}

/// Destructure `params` into exactly `K` values.
pub(crate) fn params<const K: usize>(window: &'static str, params: &[f64]) -> Result<[f64; K]> {
    <[f64; K]>::try_from(params).map_err(|_| Error::Arity {
        window,
        expected: K,
        got: params.len(),
    })
}
