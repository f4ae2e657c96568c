//! Dense linear algebra helpers built on `nalgebra`.

mod eigen;
mod toeplitz;

pub use eigen::*;
pub use toeplitz::*;
