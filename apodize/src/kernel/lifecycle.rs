use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, KernelLifecycle};
    use crate::error::Error;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct ScaleConfig {
        len: usize,
        gain: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct ScaleKernel {
        len: usize,
        gain: f64,
    }

    impl KernelLifecycle for ScaleKernel {
        type Config = ScaleConfig;

        fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
            if config.len == 0 {
                return Err(ConfigError::EmptyInput { arg: "len" });
            }
            if config.gain == 0.0 {
                return Err(Error::ParamRange {
                    window: "scale",
                    param: "gain",
                    reason: "gain must be non-zero".into(),
                }
                .into());
            }
            Ok(Self {
                len: config.len,
                gain: config.gain,
            })
        }
    }

    #[test]
    fn lifecycle_constructor_accepts_valid_config() {
        let kernel = ScaleKernel::try_new(ScaleConfig { len: 8, gain: 0.5 }).expect("valid");
        assert_eq!(kernel.len, 8);
        assert_eq!(kernel.gain, 0.5);
    }

    #[test]
    fn lifecycle_constructor_rejects_invalid_config() {
        let err = ScaleKernel::try_new(ScaleConfig { len: 0, gain: 1.0 }).expect_err("empty");
        assert_eq!(err, ConfigError::EmptyInput { arg: "len" });

        let err = ScaleKernel::try_new(ScaleConfig { len: 4, gain: 0.0 }).expect_err("gain");
        assert!(matches!(err, ConfigError::Window(Error::ParamRange { .. })));
    }
}
