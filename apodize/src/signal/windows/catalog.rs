//! The static table of built-in windows.

use core::fmt;

use super::{construct, cosine, piecewise, power, Generator};
use crate::capability::Capability;

/// Immutable metadata and generators of one window.
#[derive(Clone, Copy)]
pub struct WindowDefinition {
    /// Canonical lower-case name.
    pub name: &'static str,
    /// Human readable name.
    pub display_name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Names of the shape parameters, in order.
    pub params: &'static [&'static str],
    /// Alternative names resolving to this window.
    pub aliases: &'static [&'static str],
    /// Generator of the symmetric form.
    pub symmetric: Generator,
    /// Generator of the periodic form, if the window has one.
    pub periodic: Option<Generator>,
    /// Capability that must be present to generate this window.
    pub requires: Option<Capability>,
}

impl WindowDefinition {
    /// Number of shape parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Generator for the requested form.
    pub fn generator(&self, periodic: bool) -> Option<Generator> {
        if periodic {
            self.periodic
        } else {
            Some(self.symmetric)
        }
    }
}

impl fmt::Debug for WindowDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowDefinition")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("aliases", &self.aliases)
            .field("periodic", &self.periodic.is_some())
            .field("requires", &self.requires)
            .finish()
    }
}

macro_rules! window {
    (@cap) => { None };
    (@cap $cap:ident) => { Some(Capability::$cap) };
    (@build $name:literal, $display:literal, $desc:literal, [$($p:literal),*], [$($a:literal),*],
        $gen:path, $periodic:expr, $requires:expr) => {
        WindowDefinition {
            name: $name,
            display_name: $display,
            description: $desc,
            params: &[$($p),*],
            aliases: &[$($a),*],
            symmetric: $gen,
            periodic: $periodic,
            requires: $requires,
        }
    };
    (
        $name:literal, $display:literal, $desc:literal,
        params: [$($p:literal),*], aliases: [$($a:literal),*],
        $gen:path $(, requires: $cap:ident)?
    ) => {
        window!(@build $name, $display, $desc, [$($p),*], [$($a),*], $gen,
            Some($gen as Generator), window!(@cap $($cap)?))
    };
}

macro_rules! symmetric_window {
    (
        $name:literal, $display:literal, $desc:literal,
        params: [$($p:literal),*], aliases: [$($a:literal),*], $gen:path
    ) => {
        window!(@build $name, $display, $desc, [$($p),*], [$($a),*], $gen, None, None)
    };
}

/// Every built-in window, in catalog order.
pub static CATALOG: &[WindowDefinition] = &[
    window!("rectangular", "Rectangular", "Constant weighting; no tapering.",
        params: [], aliases: ["boxcar", "rect", "dirichlet"], power::rectangular),
    window!("bartlett", "Bartlett", "Triangle reaching zero at both ends.",
        params: [], aliases: [], power::bartlett),
    window!("triangular", "Triangular", "Triangle with non-zero end points.",
        params: [], aliases: ["triang"], power::triangular),
    window!("welch", "Welch", "Parabolic window 1 - x^2.",
        params: [], aliases: ["riesz"], power::welch),
    window!("hann", "Hann", "Raised cosine, two-term cosine sum.",
        params: [], aliases: ["hanning"], cosine::hann),
    symmetric_window!("hann_matlab", "Hann (MATLAB)", "Hann window without its zero end points.",
        params: [], aliases: ["hanning_matlab"], cosine::hann_matlab),
    window!("hamming", "Hamming", "Two-term cosine sum minimising the first sidelobe.",
        params: [], aliases: [], cosine::hamming),
    window!("hamming_ex", "Hamming (exact)", "Hamming with exact sidelobe-cancelling coefficients.",
        params: [], aliases: ["hamming_exact"], cosine::hamming_ex),
    window!("hamming_gen", "Generalized Hamming", "Two-term cosine sum alpha - (1 - alpha)cos.",
        params: ["alpha"], aliases: ["general_hamming"], cosine::hamming_gen),
    window!("blackman", "Blackman", "Three-term cosine sum.",
        params: [], aliases: [], cosine::blackman),
    window!("blackman_ex", "Blackman (exact)", "Blackman with exact zero-placing coefficients.",
        params: [], aliases: ["blackman_exact"], cosine::blackman_ex),
    window!("blackman_gen", "Generalized Blackman", "Three-term Blackman family parameterised by alpha.",
        params: ["alpha"], aliases: ["general_blackman"], cosine::blackman_gen),
    window!("blackman_gen3", "Three-term cosine sum", "Cosine sum with explicit coefficients.",
        params: ["a0", "a1", "a2"], aliases: [], cosine::blackman_gen3),
    window!("blackman_gen4", "Four-term cosine sum", "Cosine sum with explicit coefficients.",
        params: ["a0", "a1", "a2", "a3"], aliases: [], cosine::blackman_gen4),
    window!("blackman_gen5", "Five-term cosine sum", "Cosine sum with explicit coefficients.",
        params: ["a0", "a1", "a2", "a3", "a4"], aliases: [], cosine::blackman_gen5),
    window!("blackman_harris", "Blackman-Harris (3 term)", "Three-term Blackman-Harris, -67 dB sidelobes.",
        params: [], aliases: ["blackman_harris3"], cosine::blackman_harris),
    window!("blackman_harris4", "Blackman-Harris (4 term)", "Four-term Blackman-Harris, -92 dB sidelobes.",
        params: [], aliases: ["blackmanharris"], cosine::blackman_harris4),
    window!("blackman_nuttall", "Blackman-Nuttall", "Four-term minimum sidelobe Nuttall window.",
        params: [], aliases: ["blackmannuttall"], cosine::blackman_nuttall),
    window!("blackman_bnh", "Blackman-Harris (-74 dB)", "Four-term Blackman-Harris, -74 dB sidelobes.",
        params: [], aliases: [], cosine::blackman_bnh),
    window!("nuttall", "Nuttall (4 term)", "Four-term Nuttall with continuous first derivative.",
        params: [], aliases: ["nuttall4"], cosine::nuttall),
    window!("nuttall1", "Nuttall (3 term)", "Three-term Nuttall with continuous first derivative.",
        params: [], aliases: [], cosine::nuttall1),
    window!("flattop", "Flat top", "Five-term cosine sum with a flat pass band.",
        params: [], aliases: ["flat_top"], cosine::flattop),
    window!("barthann", "Bartlett-Hann", "Blend of the Bartlett and Hann windows.",
        params: [], aliases: ["bartlett_hann"], power::barthann),
    window!("bohman", "Bohman", "Convolution of two half-cosine lobes.",
        params: [], aliases: [], power::bohman),
    window!("cosine", "Cosine", "Half period of a sine.",
        params: [], aliases: ["sine"], power::cosine),
    window!("cos_alpha", "Power of cosine", "Half period of a sine raised to alpha.",
        params: ["alpha"], aliases: ["power_of_sine"], power::cos_alpha),
    window!("exponential", "Exponential", "Two-sided exponential decaying by decay_db at the ends.",
        params: ["decay_db"], aliases: [], power::exponential),
    window!("cauchy", "Cauchy", "Lorentzian profile 1 / (1 + (alpha x)^2).",
        params: ["alpha"], aliases: ["lorentzian"], power::cauchy),
    window!("gaussian", "Gaussian", "Gaussian profile exp(-(beta x)^2 / 2).",
        params: ["beta"], aliases: ["gauss"], power::gaussian),
    window!("poisson", "Poisson", "Two-sided exponential exp(-alpha |x|).",
        params: ["alpha"], aliases: [], power::poisson),
    window!("hann_poisson", "Hann-Poisson", "Hann window times a Poisson window.",
        params: ["alpha"], aliases: [], power::hann_poisson),
    symmetric_window!("parzen", "Parzen", "Piecewise cubic de la Vallee Poussin window.",
        params: [], aliases: [], piecewise::parzen),
    symmetric_window!("parzen_octave", "Parzen (parzenwin)", "Parzen window sampled as Octave's parzenwin.",
        params: [], aliases: ["parzenwin"], piecewise::parzen_octave),
    window!("tukey", "Tukey", "Flat top with raised-cosine tapers covering a fraction alpha.",
        params: ["alpha"], aliases: ["tapered_cosine"], piecewise::tukey),
    window!("lanczos", "Lanczos", "Main lobe of the sinc function.",
        params: [], aliases: ["sinc"], construct::lanczos),
    symmetric_window!("chebyshev", "Dolph-Chebyshev", "Equiripple sidelobes at the given attenuation in dB.",
        params: ["attenuation"], aliases: ["chebwin", "dolph_chebyshev"], construct::chebyshev),
    window!("dpss", "DPSS", "Discrete prolate spheroidal sequence of the given halfwidth.",
        params: ["halfwidth"], aliases: ["slepian"], construct::dpss, requires: SymmetricEigen),
    window!("kaiser", "Kaiser", "Kaiser-Bessel window with beta = pi * halfwidth.",
        params: ["halfwidth"], aliases: [], construct::kaiser, requires: BesselI0),
];
