use std::{error, fmt};

/// Errors raised by the numeric primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was invalid for the requested operation.
    InvalidArg {
        /// The invalid arg.
        arg: String,
        /// Explaining why arg is invalid.
        reason: String,
    },
    /// A function received more arguments than it accepts.
    Arity {
        /// Name of the function.
        func: &'static str,
        /// Largest accepted argument count.
        max: usize,
        /// Received argument count.
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArg { arg, reason } => {
                write!(f, "Invalid argument `{arg}`: {reason}")
            }
            Error::Arity { func, max, got } => {
                write!(f, "`{func}` takes at most {max} arguments, got {got}")
            }
        }
    }
}

impl error::Error for Error {}

/// Result alias used across `apodize-core`.
pub type Result<T> = core::result::Result<T, Error>;
