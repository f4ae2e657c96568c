//! numpy-flavoured helpers.

mod chebyshev;
mod linspace;
mod poly;

pub use chebyshev::*;
pub use linspace::*;
pub use poly::*;
