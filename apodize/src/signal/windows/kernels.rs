//! Trait-first window generation kernels.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Write1D};
use crate::signal::traits::WindowGenerate;

use super::{default_registry, ResolvedWindow, WindowRegistry, WindowSpec};

/// Constructor config for [`WindowKernel`].
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window name, length, parameters and form.
    pub spec: WindowSpec,
    /// Registry to resolve against; the default registry when `None`.
    pub registry: Option<WindowRegistry>,
}

impl From<WindowSpec> for WindowConfig {
    fn from(spec: WindowSpec) -> Self {
        Self {
            spec,
            registry: None,
        }
    }
}

/// Trait-first window generation kernel.
///
/// Name, capability, arity and length are validated once in
/// [`KernelLifecycle::try_new`].
#[derive(Debug, Clone)]
pub struct WindowKernel {
    registry: WindowRegistry,
    window: ResolvedWindow,
    len: usize,
    params: Vec<f64>,
}

impl WindowKernel {
    /// Number of samples produced per run.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; zero-length kernels are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl KernelLifecycle for WindowKernel {
    type Config = WindowConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.spec.len == 0 {
            return Err(ConfigError::InvalidArgument {
                arg: "len",
                reason: "window length must be at least 1",
            });
        }
        let registry = config
            .registry
            .unwrap_or_else(|| default_registry().clone());
        let window = registry.resolve(&config.spec.name, config.spec.periodic)?;
        registry.validate(&window, &config.spec.params)?;

        Ok(Self {
            registry,
            window,
            len: config.spec.len,
            params: config.spec.params,
        })
    }
}

impl WindowGenerate<f64> for WindowKernel {
    fn run_into<O>(&self, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        O: Write1D<f64> + ?Sized,
    {
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        if out_slice.len() != self.len {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: self.len,
                got: out_slice.len(),
            });
        }
        let generated = self.run_alloc()?;
        out_slice.copy_from_slice(&generated);
        Ok(())
    }

    fn run_alloc(&self) -> Result<Vec<f64>, ExecInvariantViolation> {
        self.registry
            .generate_resolved(&self.window, self.len, &self.params)
            .map_err(ExecInvariantViolation::from)
    }
}
