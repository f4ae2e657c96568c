//! Kernel substrate shared by window and metric kernels.
//!
//! Kernels validate their configuration once in
//! [`KernelLifecycle::try_new`] and then run against any contiguous 1D
//! buffer through the [`Read1D`] / [`Write1D`] adapters.

mod errors;
mod io;
mod lifecycle;

pub use errors::*;
pub use io::*;
pub use lifecycle::*;
