//! Optional numeric capabilities some windows depend on.
//!
//! `kaiser` needs the modified Bessel function `I0` and `dpss` needs a
//! symmetric eigensolver. Both are injected into a
//! [`WindowRegistry`](crate::signal::windows::WindowRegistry) through
//! [`Capabilities`], so a registry built without one reports
//! [`Error::MissingCapability`](crate::Error::MissingCapability) for
//! the windows that need it.

use core::fmt;
use std::sync::Arc;

use nalgebra::{DMatrix, DVector};

use crate::linalg::NalgebraEigensolver;
use crate::special::Bessel;

/// Identifies an optional capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Modified Bessel function of the first kind, order 0.
    BesselI0,
    /// Eigen-decomposition of a real symmetric matrix.
    SymmetricEigen,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::BesselI0 => f.write_str("Bessel I0"),
            Capability::SymmetricEigen => f.write_str("symmetric eigensolve"),
        }
    }
}

/// Provider of `I0(x)`.
pub trait BesselI0: fmt::Debug + Send + Sync {
    /// Evaluate `I0(x)`.
    fn i0(&self, x: f64) -> f64;

    /// Evaluate `e^{-|x|}·I0(x)`.
    ///
    /// The default rescales [`i0`](BesselI0::i0) and overflows where it does;
    /// providers that can should evaluate the scaled form directly.
    fn i0e(&self, x: f64) -> f64 {
        self.i0(x) * (-x.abs()).exp()
    }
}

/// [`BesselI0`] backed by the power series in [`crate::special`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SeriesBesselI0;

impl BesselI0 for SeriesBesselI0 {
    fn i0(&self, x: f64) -> f64 {
        x.i0()
    }

    fn i0e(&self, x: f64) -> f64 {
        x.i0e()
    }
}

/// Eigenvalues and eigenvectors of a real symmetric matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigenDecomposition {
    /// Eigenvalues, in the solver's order.
    pub eigenvalues: DVector<f64>,
    /// Unit eigenvectors stored as columns, matching `eigenvalues`.
    pub eigenvectors: DMatrix<f64>,
}

impl SymmetricEigenDecomposition {
    /// Column index of the largest eigenvalue, `None` for an empty matrix.
    pub fn principal_index(&self) -> Option<usize> {
        if self.eigenvalues.is_empty() {
            None
        } else {
            Some(self.eigenvalues.imax())
        }
    }
}

/// Provider of symmetric eigen-decompositions.
pub trait SymmetricEigensolver: fmt::Debug + Send + Sync {
    /// Decompose the symmetric `matrix`.
    fn eigh(&self, matrix: DMatrix<f64>) -> SymmetricEigenDecomposition;
}

/// The set of optional capabilities available to a registry.
#[derive(Debug, Clone)]
pub struct Capabilities {
    bessel_i0: Option<Arc<dyn BesselI0>>,
    eigensolver: Option<Arc<dyn SymmetricEigensolver>>,
}

impl Default for Capabilities {
    /// All built-in capabilities.
    fn default() -> Self {
        Self::none()
            .with_bessel_i0(SeriesBesselI0)
            .with_eigensolver(NalgebraEigensolver)
    }
}

impl Capabilities {
    /// No optional capability; `kaiser` and `dpss` are unavailable.
    pub fn none() -> Self {
        Self {
            bessel_i0: None,
            eigensolver: None,
        }
    }

    /// Use `provider` for `I0`.
    pub fn with_bessel_i0(mut self, provider: impl BesselI0 + 'static) -> Self {
        self.bessel_i0 = Some(Arc::new(provider));
        self
    }

    /// Use `solver` for symmetric eigen-decompositions.
    pub fn with_eigensolver(mut self, solver: impl SymmetricEigensolver + 'static) -> Self {
        self.eigensolver = Some(Arc::new(solver));
        self
    }

    /// The `I0` provider, if any.
    pub fn bessel_i0(&self) -> Option<&dyn BesselI0> {
        self.bessel_i0.as_deref()
    }

    /// The eigensolver, if any.
    pub fn eigensolver(&self) -> Option<&dyn SymmetricEigensolver> {
        self.eigensolver.as_deref()
    }

    /// Whether `capability` is available.
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::BesselI0 => self.bessel_i0.is_some(),
            Capability::SymmetricEigen => self.eigensolver.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_every_capability() {
        let caps = Capabilities::default();
        assert!(caps.supports(Capability::BesselI0));
        assert!(caps.supports(Capability::SymmetricEigen));
        assert_eq!(caps.bessel_i0().map(|b| b.i0(0.0)), Some(1.0));
    }

    #[test]
    fn none_carries_nothing() {
        let caps = Capabilities::none();
        assert!(!caps.supports(Capability::BesselI0));
        assert!(!caps.supports(Capability::SymmetricEigen));
        assert!(caps.eigensolver().is_none());
    }

    #[test]
    fn principal_index_picks_largest_eigenvalue() {
        let decomp = SymmetricEigenDecomposition {
            eigenvalues: DVector::from_vec(vec![0.2, 3.0, -4.0]),
            eigenvectors: DMatrix::identity(3, 3),
        };
        assert_eq!(decomp.principal_index(), Some(1));
    }
}
