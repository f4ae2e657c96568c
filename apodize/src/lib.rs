//! Window (apodization) functions and their spectral figures of merit.
//!
//! [`signal::windows`] holds a catalog of about forty named windows, each
//! in a symmetric and (mostly) a periodic form, dispatched by name through a
//! [`WindowRegistry`](signal::windows::WindowRegistry).
//! [`signal::spectral`] evaluates equivalent noise bandwidth, coherent and
//! processing gain and the zero-padded frequency response of any window.
//!
//! ```
//! use apodize::signal::spectral::enbw;
//! use apodize::signal::windows::generate_window;
//!
//! let w = generate_window(16384, "hamming", (), false).unwrap();
//! assert!((enbw(&w).unwrap() - 1.3628857).abs() < 1e-6);
//! ```
//!
//! Windows that need optional numerics (`kaiser` needs `I0`, `dpss` needs a
//! symmetric eigensolver) take them from the registry's
//! [`Capabilities`](capability::Capabilities).

#![deny(missing_docs)]

pub mod capability;
mod error;
pub mod kernel;
pub mod linalg;
pub mod signal;
pub mod special;

pub use apodize_core::num_rs;
pub use error::*;
pub use nalgebra as na;
