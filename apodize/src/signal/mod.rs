//! Window generation and window analysis.

pub mod spectral;
pub mod traits;
pub mod windows;
