use crate::{Error, Result};
use ndarray::{Array1, ArrayView1};

/// Scalar or 1D array argument of [`chebpoly`].
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    /// A single value.
    Scalar(f64),
    /// A borrowed 1D array of values.
    Array(ArrayView1<'a, f64>),
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(value: &'a [f64]) -> Self {
        Operand::Array(ArrayView1::from(value))
    }
}

impl<'a> From<ArrayView1<'a, f64>> for Operand<'a> {
    fn from(value: ArrayView1<'a, f64>) -> Self {
        Operand::Array(value)
    }
}

impl<'a> From<&'a Array1<f64>> for Operand<'a> {
    fn from(value: &'a Array1<f64>) -> Self {
        Operand::Array(value.view())
    }
}

/// Chebyshev polynomial of the first kind, `T_n(x)`, for a single argument.
///
/// Uses `cos(n·acos(x))` inside `[-1, 1]` and `cosh(n·acosh(x))` outside, so
/// no argument leaves the real domain of the inverse functions. For `x < -1`
/// the real part `cos(nπ)·cosh(n·acosh(-x))` is returned, which is
/// `(-1)^n·T_n(|x|)` for integral `n`.
pub fn chebpoly_scalar(n: f64, x: f64) -> f64 {
    if x.abs() <= 1.0 {
        (n * x.acos()).cos()
    } else if x > 1.0 {
        (n * x.acosh()).cosh()
    } else {
        (n * core::f64::consts::PI).cos() * (n * (-x).acosh()).cosh()
    }
}

/// Evaluate `T_n(x)` elementwise.
///
/// Either `n` or `x` may be an array, not both. Two scalars produce a
/// one-element array.
///
/// # Errors
/// [`Error::InvalidArg`] when both `n` and `x` are arrays.
///
/// # Examples
/// ```
/// use apodize_core::num_rs::chebpoly;
///
/// let x = [-1.0, 0.0, 0.5, 1.0, 2.0];
/// let t2 = chebpoly(2.0, &x[..]).unwrap();
/// assert_eq!(t2.len(), 5);
/// assert!((t2[4] - 7.0).abs() < 1e-12); // 2·2² - 1
/// ```
pub fn chebpoly<'a, 'b>(
    n: impl Into<Operand<'a>>,
    x: impl Into<Operand<'b>>,
) -> Result<Array1<f64>> {
    match (n.into(), x.into()) {
        (Operand::Scalar(n), Operand::Scalar(x)) => {
            Ok(Array1::from_elem(1, chebpoly_scalar(n, x)))
        }
        (Operand::Scalar(n), Operand::Array(x)) => Ok(x.mapv(|xi| chebpoly_scalar(n, xi))),
        (Operand::Array(n), Operand::Scalar(x)) => Ok(n.mapv(|ni| chebpoly_scalar(ni, x))),
        (Operand::Array(_), Operand::Array(_)) => Err(Error::InvalidArg {
            arg: "n, x".into(),
            reason: "neither n nor x is scalar".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_argument_and_zeroth_order_are_one() {
        for n in 0..12 {
            assert_relative_eq!(chebpoly_scalar(n as f64, 1.0), 1.0, epsilon = 1e-12);
        }
        for x in [-3.5, -1.0, -0.3, 0.0, 0.7, 1.0, 4.2] {
            assert_relative_eq!(chebpoly_scalar(0.0, x), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn matches_recurrence_inside_and_outside_unit_interval() {
        // T_{k+1} = 2x·T_k - T_{k-1}
        for x in [-2.5, -1.2, -0.8, -0.1, 0.0, 0.45, 0.99, 1.01, 3.0] {
            let (mut prev, mut cur) = (1.0f64, x);
            for n in 1..9 {
                assert_relative_eq!(
                    chebpoly_scalar(n as f64, x),
                    cur,
                    epsilon = 1e-9,
                    max_relative = 1e-10
                );
                let next = 2.0 * x * cur - prev;
                prev = cur;
                cur = next;
            }
        }
    }

    #[test]
    fn hyperbolic_branch_is_increasing() {
        let n = 5.0;
        let mut last = chebpoly_scalar(n, 1.0);
        for i in 1..50 {
            let x = 1.0 + i as f64 * 0.05;
            let t = chebpoly_scalar(n, x);
            assert_relative_eq!(t, (n * x.acosh()).cosh(), max_relative = 1e-14);
            assert!(t > last);
            last = t;
        }
    }

    #[test]
    fn array_operands() {
        let x = Array1::from(vec![0.0, 0.5, 1.5]);
        let t3 = chebpoly(3.0, &x).unwrap();
        for (xi, ti) in x.iter().zip(t3.iter()) {
            assert_relative_eq!(*ti, 4.0 * xi * xi * xi - 3.0 * xi, epsilon = 1e-12);
        }

        let orders = [0.0, 1.0, 2.0];
        let t = chebpoly(&orders[..], 0.5).unwrap();
        assert_relative_eq!(t[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(t[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(t[2], -0.5, epsilon = 1e-12);

        assert_eq!(chebpoly(2.0, 3.0).unwrap().len(), 1);
    }

    #[test]
    fn two_array_operands_are_rejected() {
        let a = [1.0, 2.0];
        let err = chebpoly(&a[..], &a[..]).unwrap_err();
        assert!(matches!(err, Error::InvalidArg { .. }));
        assert!(err.to_string().contains("neither n nor x is scalar"));
    }
}
