//! Name based window lookup and dispatch.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::catalog::{WindowDefinition, CATALOG};
use super::domain::Domain;
use crate::capability::Capabilities;
use crate::error::{Error, Result};

/// Suffix on a window name that selects its periodic form.
pub const PERIODIC_SUFFIX: &str = "_periodic";

fn index() -> &'static BTreeMap<&'static str, &'static WindowDefinition> {
    static INDEX: OnceLock<BTreeMap<&'static str, &'static WindowDefinition>> = OnceLock::new();
    INDEX.get_or_init(|| {
        CATALOG
            .iter()
            .flat_map(|def| {
                core::iter::once(def.name)
                    .chain(def.aliases.iter().copied())
                    .map(move |name| (name, def))
            })
            .collect()
    })
}

/// Lower-case `name` and strip [`PERIODIC_SUFFIX`], reporting whether it was
/// present.
fn split_periodic(name: &str) -> (String, bool) {
    let lower = name.trim().to_lowercase();
    match lower.strip_suffix(PERIODIC_SUFFIX) {
        Some(base) => (base.to_owned(), true),
        None => (lower, false),
    }
}

/// Shape parameters of a window.
///
/// Converts from nothing (`()`), a bare scalar, a slice, an array or a `Vec`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowParams(Vec<f64>);

impl WindowParams {
    /// Borrow the parameters.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Take the parameters.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<()> for WindowParams {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<f64> for WindowParams {
    fn from(value: f64) -> Self {
        Self(vec![value])
    }
}

impl From<&[f64]> for WindowParams {
    fn from(value: &[f64]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for WindowParams {
    fn from(value: [f64; N]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<&[f64; N]> for WindowParams {
    fn from(value: &[f64; N]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Vec<f64>> for WindowParams {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl From<&Vec<f64>> for WindowParams {
    fn from(value: &Vec<f64>) -> Self {
        Self(value.clone())
    }
}

/// A fully specified window request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowSpec {
    /// Window name without the periodic suffix.
    pub name: String,
    /// Number of samples.
    pub len: usize,
    /// Shape parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<f64>,
    /// Periodic (DFT-even) rather than symmetric form.
    #[cfg_attr(feature = "serde", serde(default))]
    pub periodic: bool,
}

impl WindowSpec {
    /// Build a spec; a `_periodic` suffix on `name` is stripped and selects the
    /// periodic form.
    pub fn new(name: &str, len: usize, params: impl Into<WindowParams>, periodic: bool) -> Self {
        let (name, suffixed) = split_periodic(name);
        Self {
            name,
            len,
            params: params.into().into_vec(),
            periodic: periodic || suffixed,
        }
    }
}

/// A window resolved against a registry, ready to generate.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedWindow {
    definition: &'static WindowDefinition,
    periodic: bool,
}

impl ResolvedWindow {
    /// Catalog entry of the window.
    pub fn definition(&self) -> &'static WindowDefinition {
        self.definition
    }

    /// Whether the periodic form was selected.
    pub fn is_periodic(&self) -> bool {
        self.periodic
    }
}

/// Looks windows up by name and generates them with a fixed set of
/// [`Capabilities`].
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    capabilities: Capabilities,
}

impl WindowRegistry {
    /// Registry generating with `capabilities`.
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    /// Capabilities this registry generates with.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Resolve `name` (canonical, alias, optionally `_periodic` suffixed) to
    /// a window whose requested form exists and whose capability is present.
    pub fn resolve(&self, name: &str, periodic: bool) -> Result<ResolvedWindow> {
        let (base, suffixed) = split_periodic(name);
        let periodic = periodic || suffixed;
        let unknown = || Error::UnknownWindow {
            name: base.clone(),
            periodic,
        };
        let definition = *index().get(base.as_str()).ok_or_else(unknown)?;
        definition.generator(periodic).ok_or_else(unknown)?;

        if let Some(capability) = definition.requires {
            let present = self.capabilities.supports(capability);
            tracing::trace!(window = definition.name, %capability, present, "capability check");
            if !present {
                return Err(Error::MissingCapability {
                    window: definition.name,
                    capability,
                });
            }
        }
        Ok(ResolvedWindow {
            definition,
            periodic,
        })
    }

    /// Check `params` against the arity of `window` and reject non-finite
    /// values.
    pub fn validate(&self, window: &ResolvedWindow, params: &[f64]) -> Result<()> {
        let def = window.definition;
        if params.len() != def.arity() {
            return Err(Error::Arity {
                window: def.name,
                expected: def.arity(),
                got: params.len(),
            });
        }
        if let Some((param, value)) = def
            .params
            .iter()
            .zip(params)
            .find(|(_, value)| !value.is_finite())
        {
            return Err(Error::ParamRange {
                window: def.name,
                param: *param,
                reason: format!("must be finite, got {value}"),
            });
        }
        Ok(())
    }

    /// Generate `len` samples of a resolved window.
    pub fn generate_resolved(
        &self,
        window: &ResolvedWindow,
        len: usize,
        params: &[f64],
    ) -> Result<Vec<f64>> {
        let def = window.definition;
        if len == 0 {
            return Err(Error::ParamRange {
                window: def.name,
                param: "len",
                reason: "window length must be at least 1".into(),
            });
        }
        self.validate(window, params)?;
        let generator = def.generator(window.periodic).ok_or(Error::UnknownWindow {
            name: def.name.into(),
            periodic: window.periodic,
        })?;
        tracing::debug!(window = def.name, len, periodic = window.periodic, "generating window");
        generator(Domain::new(len, window.periodic), params, &self.capabilities)
    }

    /// Generate `len` samples of the window called `name`.
    ///
    /// ```
    /// use apodize::signal::windows::WindowRegistry;
    ///
    /// let registry = WindowRegistry::default();
    /// let w = registry.generate(4, "hann", (), false).unwrap();
    /// assert!((w[1] - 0.75).abs() < 1e-12);
    /// let w = registry.generate(4, "tukey_periodic", 0.5, false).unwrap();
    /// assert_eq!(w.len(), 4);
    /// ```
    pub fn generate(
        &self,
        len: usize,
        name: &str,
        params: impl Into<WindowParams>,
        periodic: bool,
    ) -> Result<Vec<f64>> {
        let window = self.resolve(name, periodic)?;
        self.generate_resolved(&window, len, params.into().as_slice())
    }

    /// Generate the window described by `spec`.
    pub fn generate_spec(&self, spec: &WindowSpec) -> Result<Vec<f64>> {
        let window = self.resolve(&spec.name, spec.periodic)?;
        self.generate_resolved(&window, spec.len, &spec.params)
    }

    /// Catalog entry for `name` or one of its aliases.
    pub fn definition(&self, name: &str) -> Option<&'static WindowDefinition> {
        let (base, _) = split_periodic(name);
        index().get(base.as_str()).copied()
    }

    /// Every catalog entry.
    pub fn definitions(&self) -> impl Iterator<Item = &'static WindowDefinition> {
        CATALOG.iter()
    }

    /// Whether `name` has a periodic form.
    pub fn is_periodic_supported(&self, name: &str) -> bool {
        self.definition(name)
            .is_some_and(|def| def.periodic.is_some())
    }

    /// Whether this registry can generate `name`.
    pub fn available(&self, name: &str) -> bool {
        self.definition(name).is_some_and(|def| {
            def.requires
                .map_or(true, |capability| self.capabilities.supports(capability))
        })
    }

    /// Sorted window names containing `filter`, optionally with aliases.
    pub fn names(&self, filter: Option<&str>, include_aliases: bool) -> Vec<&'static str> {
        let filter = filter.map(str::to_lowercase);
        index()
            .iter()
            .filter(|(name, def)| include_aliases || **name == def.name)
            .map(|(name, _)| *name)
            .filter(|name| filter.as_deref().map_or(true, |f| name.contains(f)))
            .sorted()
            .dedup()
            .collect()
    }
}

/// Process-wide registry carrying every built-in capability.
pub fn default_registry() -> &'static WindowRegistry {
    static REGISTRY: OnceLock<WindowRegistry> = OnceLock::new();
    REGISTRY.get_or_init(WindowRegistry::default)
}

/// Generate `len` samples of window `name` with the default registry.
///
/// ```
/// use apodize::signal::windows::generate_window;
///
/// let w = generate_window(4, "hamming", (), false).unwrap();
/// assert!((w[0] - 0.08).abs() < 1e-12);
/// ```
pub fn generate_window(
    len: usize,
    name: &str,
    params: impl Into<WindowParams>,
    periodic: bool,
) -> Result<Vec<f64>> {
    default_registry().generate(len, name, params, periodic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use approx::assert_abs_diff_eq;
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn assert_all_close(a: &[f64], b: &[f64], eps: f64) {
        assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .for_each(|(x, y)| assert_abs_diff_eq!(x, y, epsilon = eps));
    }

    fn sample_params(def: &WindowDefinition) -> Vec<f64> {
        match def.name {
            "hamming_gen" => vec![0.6],
            "blackman_gen" => vec![0.16],
            "blackman_gen3" => vec![0.42, 0.5, 0.08],
            "blackman_gen4" => vec![0.35875, 0.48829, 0.14128, 0.01168],
            "blackman_gen5" => vec![0.21557895, 0.41663158, 0.277263158, 0.083578947, 0.006947368],
            "cos_alpha" => vec![1.5],
            "exponential" => vec![60.0],
            "cauchy" => vec![3.0],
            "gaussian" => vec![2.5],
            "poisson" | "hann_poisson" => vec![2.0],
            "tukey" => vec![0.5],
            "chebyshev" => vec![50.0],
            "dpss" => vec![2.5],
            "kaiser" => vec![3.0],
            _ => vec![1.0; def.arity()],
        }
    }

    #[test]
    fn periodic_is_the_truncated_longer_symmetric_window() {
        init_tracing();
        let registry = WindowRegistry::default();
        for def in registry.definitions().filter(|d| d.periodic.is_some()) {
            let p = sample_params(def);
            for n in [100, 101] {
                let periodic = registry.generate(n, def.name, p.as_slice(), true).unwrap();
                let symmetric = registry.generate(n + 1, def.name, p.as_slice(), false).unwrap();
                assert_eq!(periodic.len(), n, "{}", def.name);
                periodic
                    .iter()
                    .zip(&symmetric[..n])
                    .for_each(|(a, b)| assert_abs_diff_eq!(a, b, epsilon = 1e-9));
            }
        }
    }

    #[test]
    fn cos_alpha_spans_rectangular_cosine_and_hann() {
        for n in [7, 64] {
            let pairs = [("rectangular", 0.0), ("cosine", 1.0), ("hann", 2.0)];
            for (name, alpha) in pairs {
                let expected = generate_window(n, name, (), false).unwrap();
                let actual = generate_window(n, "cos_alpha", alpha, false).unwrap();
                assert_all_close(&actual, &expected, 1e-12);
            }
        }
    }

    #[test]
    fn reference_scenarios() {
        assert_all_close(
            &generate_window(4, "hamming", (), false).unwrap(),
            &[0.08, 0.77, 0.77, 0.08],
            1e-12,
        );
        assert_all_close(
            &generate_window(4, "hann", (), false).unwrap(),
            &[0.0, 0.75, 0.75, 0.0],
            1e-12,
        );
        assert_all_close(
            &generate_window(6, "welch", (), false).unwrap(),
            &[0.0, 0.64, 0.96, 0.96, 0.64, 0.0],
            1e-12,
        );
        assert_all_close(
            &generate_window(8, "chebyshev", 10.0, false).unwrap(),
            &[1.0, 0.45192, 0.51028, 0.54134, 0.54134, 0.51028, 0.45192, 1.0],
            1e-5,
        );
        assert_all_close(
            &generate_window(4, "tukey", 0.0, false).unwrap(),
            &[1.0; 4],
            0.0,
        );
    }

    #[test]
    fn single_sample_windows_do_not_panic() {
        let registry = WindowRegistry::default();
        for def in registry.definitions() {
            let p = sample_params(def);
            for periodic in [false, true] {
                if periodic && def.periodic.is_none() {
                    continue;
                }
                match registry.generate(1, def.name, p.as_slice(), periodic) {
                    Ok(w) => assert_eq!(w.len(), 1, "{}", def.name),
                    Err(err) => assert!(
                        matches!(err, Error::ParamRange { window: "dpss", .. }),
                        "{}: {err}",
                        def.name
                    ),
                }
            }
        }
    }

    #[test]
    fn names_aliases_and_suffixes_resolve() {
        let registry = WindowRegistry::default();
        let hann = registry.generate(9, "hann", (), false).unwrap();
        assert_eq!(registry.generate(9, "Hanning", (), false).unwrap(), hann);
        assert_eq!(
            registry.generate(9, "hann_periodic", (), false).unwrap(),
            registry.generate(9, "hann", (), true).unwrap()
        );
        assert_eq!(registry.definition("chebwin").unwrap().name, "chebyshev");
        assert!(registry.is_periodic_supported("kaiser"));
        assert!(!registry.is_periodic_supported("parzen"));

        let spec = WindowSpec::new("Tukey_Periodic", 16, 0.25, false);
        assert_eq!(spec.name, "tukey");
        assert!(spec.periodic);
        assert_eq!(registry.generate_spec(&spec).unwrap().len(), 16);
    }

    #[test]
    fn names_are_filtered_and_sorted() {
        let registry = WindowRegistry::default();
        assert_eq!(
            registry.names(Some("nuttall"), false),
            ["blackman_nuttall", "nuttall", "nuttall1"]
        );
        let with_aliases = registry.names(Some("nuttall"), true);
        assert!(with_aliases.contains(&"blackmannuttall"));
        assert!(with_aliases.contains(&"nuttall4"));
        assert_eq!(registry.names(None, false).len(), CATALOG.len());
    }

    #[test]
    fn lookup_failures() {
        let registry = WindowRegistry::default();
        assert_eq!(
            registry.generate(8, "hanx", (), false).unwrap_err(),
            Error::UnknownWindow {
                name: "hanx".into(),
                periodic: false
            }
        );
        assert_eq!(
            registry.generate(8, "chebyshev_periodic", 50.0, false).unwrap_err(),
            Error::UnknownWindow {
                name: "chebyshev".into(),
                periodic: true
            }
        );
        assert_eq!(
            registry.generate(8, "tukey", (), false).unwrap_err(),
            Error::Arity {
                window: "tukey",
                expected: 1,
                got: 0
            }
        );
        assert!(matches!(
            registry.generate(8, "gaussian", f64::INFINITY, false).unwrap_err(),
            Error::ParamRange { param: "beta", .. }
        ));
        assert!(matches!(
            registry.generate(0, "hann", (), false).unwrap_err(),
            Error::ParamRange { param: "len", .. }
        ));
    }

    #[test]
    fn capability_is_checked_before_arity() {
        init_tracing();
        let registry = WindowRegistry::new(Capabilities::none());
        assert_eq!(
            registry.generate(8, "kaiser", (), false).unwrap_err(),
            Error::MissingCapability {
                window: "kaiser",
                capability: Capability::BesselI0
            }
        );
        assert_eq!(
            registry.generate(8, "slepian", 2.0, false).unwrap_err(),
            Error::MissingCapability {
                window: "dpss",
                capability: Capability::SymmetricEigen
            }
        );
        assert!(!registry.available("kaiser"));
        assert!(registry.available("hann"));
        assert!(registry.generate(8, "hann", (), false).is_ok());
    }
}
