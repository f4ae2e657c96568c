//! Special functions used by the window catalog.

/// Modified Bessel functions of the first kind.
pub trait Bessel {
    /// `I0(x)`, order zero.
    fn i0(self) -> Self;

    /// Exponentially scaled `e^{-|x|}·I0(x)`, finite for every finite `x`.
    fn i0e(self) -> Self;
}

/// Above this `|x|` the scaled `I0` uses its asymptotic expansion.
const I0E_ASYMPTOTIC: f64 = 30.0;

impl Bessel for f64 {
    /// Power series `Σ ((x/2)^k / k!)²`, summed until the next term no longer
    /// changes the total.
    fn i0(self) -> f64 {
        let half = 0.5 * self;
        let mut term = 1.0;
        let mut sum = 1.0;
        for k in 1..1000 {
            let r = half / k as f64;
            term *= r * r;
            if term < sum * f64::EPSILON {
                break;
            }
            sum += term;
        }
        sum
    }

    /// Power series below `|x| = 30`, otherwise
    /// `Σ a_k / x^k / √(2πx)` with `a_k = a_{k-1}·(2k - 1)² / (8k)`, stopped at
    /// the smallest term.
    fn i0e(self) -> f64 {
        let x = self.abs();
        if x <= I0E_ASYMPTOTIC {
            return x.i0() * (-x).exp();
        }
        let mut term = 1.0;
        let mut sum = 1.0;
        for k in 1..60 {
            let k = k as f64;
            let next = term * (2.0 * k - 1.0).powi(2) / (8.0 * k * x);
            if next >= term || next < sum * f64::EPSILON {
                break;
            }
            term = next;
            sum += term;
        }
        sum / (core::f64::consts::TAU * x).sqrt()
    }
}

impl Bessel for f32 {
    fn i0(self) -> f32 {
        (self as f64).i0() as f32
    }

    fn i0e(self) -> f32 {
        (self as f64).i0e() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::Bessel;
    use approx::assert_relative_eq;

    #[test]
    fn i0_reference_values() {
        assert_eq!(0.0f64.i0(), 1.0);
        assert_relative_eq!(1.0f64.i0(), 1.266_065_877_752_008_4, max_relative = 1e-14);
        assert_relative_eq!(5.0f64.i0(), 27.239_871_823_604_442, max_relative = 1e-13);
        assert_relative_eq!(20.0f64.i0(), 4.355_828_255_955_353e7, max_relative = 1e-12);
        assert_relative_eq!(2.5f32.i0(), 3.289_839_1f32, max_relative = 1e-6);
    }

    #[test]
    fn i0e_stays_finite_across_both_branches() {
        assert_relative_eq!(1.0f64.i0e(), 0.465_759_607_593_640_43, max_relative = 1e-14);
        assert_relative_eq!(30.0f64.i0e(), 0.073_145_946_482_237_3, max_relative = 1e-13);
        assert_relative_eq!(100.0f64.i0e(), 0.039_944_379_299_096_68, max_relative = 1e-13);
        assert_relative_eq!(1000.0f64.i0e(), 0.012_617_240_455_891_257, max_relative = 1e-13);
        assert_relative_eq!((-100.0f64).i0e(), 100.0f64.i0e());
        assert!(1000.0f64.i0().is_infinite());
    }

    #[test]
    fn i0_is_even() {
        for x in [0.3f64, 1.7, 9.0] {
            assert_eq!(x.i0(), (-x).i0());
        }
    }
}
