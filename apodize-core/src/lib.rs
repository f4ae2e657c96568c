//! Numeric building blocks shared by the `apodize` crates.
//!
//! The functions here follow the conventions of their numpy counterparts
//! where one exists (`linspace`, `polyval`) and are kept free of any
//! window-specific knowledge.

#![deny(missing_docs)]

mod error;
pub mod num_rs;

pub use error::*;
