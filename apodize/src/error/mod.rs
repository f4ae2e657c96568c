use core::{error, fmt};

use crate::capability::Capability;

/// Errors raised whilst generating windows or computing their metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A window was called with the wrong number of shape parameters.
    Arity {
        /// Canonical window name.
        window: &'static str,
        /// Declared parameter count.
        expected: usize,
        /// Received parameter count.
        got: usize,
    },
    /// No window is registered under the name for the requested form.
    UnknownWindow {
        /// Name as requested by the caller.
        name: String,
        /// Whether the periodic form was requested.
        periodic: bool,
    },
    /// A shape parameter is outside the range the window is defined for.
    ParamRange {
        /// Canonical window name.
        window: &'static str,
        /// Parameter name.
        param: &'static str,
        /// Explaining the valid range.
        reason: String,
    },
    /// The window needs a numeric capability the registry was built without.
    MissingCapability {
        /// Canonical window name.
        window: &'static str,
        /// The capability that is not available.
        capability: Capability,
    },
    /// A required input was empty.
    EmptyInput {
        /// Name of the empty argument.
        arg: &'static str,
    },
    /// Failure raised by a numeric primitive.
    Core(apodize_core::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arity {
                window,
                expected,
                got,
            } => write!(
                f,
                "Window `{window}` takes {expected} parameter(s), got {got}."
            ),
            Error::UnknownWindow { name, periodic } => {
                let form = if *periodic { "periodic" } else { "symmetric" };
                write!(f, "Unknown {form} window `{name}`.")
            }
            Error::ParamRange {
                window,
                param,
                reason,
            } => write!(f, "Invalid `{param}` for window `{window}`: {reason}"),
            Error::MissingCapability { window, capability } => {
                write!(f, "Window `{window}` requires {capability} support.")
            }
            Error::EmptyInput { arg } => write!(f, "Input `{arg}` was empty."),
            Error::Core(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Core(err) => Some(err),
            _ => None,
        }
    }
}

impl From<apodize_core::Error> for Error {
    fn from(value: apodize_core::Error) -> Self {
        Error::Core(value)
    }
}

/// Result alias used across `apodize`.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_window_and_mode() {
        let err = Error::UnknownWindow {
            name: "hanx".into(),
            periodic: true,
        };
        assert_eq!(err.to_string(), "Unknown periodic window `hanx`.");

        let err = Error::Arity {
            window: "tukey",
            expected: 1,
            got: 0,
        };
        assert_eq!(
            err.to_string(),
            "Window `tukey` takes 1 parameter(s), got 0."
        );

        let err = Error::MissingCapability {
            window: "kaiser",
            capability: Capability::BesselI0,
        };
        assert_eq!(
            err.to_string(),
            "Window `kaiser` requires Bessel I0 support."
        );
    }

    #[test]
    fn core_errors_convert_and_chain() {
        let core = apodize_core::Error::Arity {
            func: "mult_to_pow",
            max: 7,
            got: 9,
        };
        let err: Error = core.clone().into();
        assert_eq!(err, Error::Core(core));
        assert!(error::Error::source(&err).is_some());
    }
}
