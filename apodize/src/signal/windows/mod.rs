//! Window functions.
//!
//! Every window is a [`Generator`] registered in the static [`CATALOG`] under
//! a canonical name plus aliases. [`WindowRegistry`] resolves names, checks
//! capabilities and parameters and dispatches to the generator;
//! [`generate_window`] does the same against a process-wide default registry.
//!
//! ```
//! use apodize::signal::windows::generate_window;
//!
//! let w = generate_window(8, "chebyshev", 10.0, false).unwrap();
//! assert_eq!(w.len(), 8);
//! assert!((w[0] - 1.0).abs() < 1e-12);
//! ```

mod catalog;
mod construct;
mod cosine;
mod domain;
mod kernels;
mod piecewise;
mod power;
mod registry;

pub use catalog::*;
pub use construct::*;
pub use cosine::*;
pub use domain::Domain;
pub use kernels::*;
pub use piecewise::*;
pub use power::*;
pub use registry::*;

use crate::capability::Capabilities;
use crate::error::Result;

/// Signature shared by every window generator.
///
/// A generator validates the parameter count, then produces
/// `domain.len()` samples.
pub type Generator = fn(Domain, &[f64], &Capabilities) -> Result<Vec<f64>>;
