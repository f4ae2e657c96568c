use ndarray::Array1;

/// Iterator over evenly spaced samples of a closed interval.
///
/// Mirrors `numpy.linspace(start, stop, num)`: the first sample is exactly
/// `start`, the last is exactly `stop`, and a single-sample grid collapses
/// to `start`.
#[derive(Debug, Clone)]
pub struct Linspace {
    start: f64,
    stop: f64,
    step: f64,
    num: usize,
    idx: usize,
}

impl Linspace {
    /// Create a grid of `num` points spanning `[start, stop]`.
    pub fn new(start: f64, stop: f64, num: usize) -> Self {
        let step = if num > 1 {
            (stop - start) / (num - 1) as f64
        } else {
            0.0
        };
        Self {
            start,
            stop,
            step,
            num,
            idx: 0,
        }
    }

    /// Spacing between consecutive samples (`0` for grids shorter than 2).
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.idx >= self.num {
            return None;
        }
        let i = self.idx;
        self.idx += 1;
        if i + 1 == self.num && self.num > 1 {
            Some(self.stop)
        } else {
            Some(self.start + i as f64 * self.step)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.num - self.idx;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Linspace {}

/// Return `num` evenly spaced samples over `[start, stop]`.
///
/// # Examples
/// ```
/// use apodize_core::num_rs::linspace;
///
/// let x = linspace(-1.0, 1.0, 5);
/// assert_eq!(x.to_vec(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// assert_eq!(linspace(3.0, 7.0, 1).to_vec(), vec![3.0]);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    Array1::from_iter(Linspace::new(start, stop, num))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints_are_exact() {
        let x: Vec<f64> = Linspace::new(0.0, 2.0 * core::f64::consts::PI, 7).collect();
        assert_eq!(x.len(), 7);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[6], 2.0 * core::f64::consts::PI);
        assert_abs_diff_eq!(x[3], core::f64::consts::PI, epsilon = 1e-15);
    }

    #[test]
    fn degenerate_grids() {
        assert_eq!(Linspace::new(1.0, 2.0, 0).count(), 0);
        assert_eq!(Linspace::new(-1.0, 1.0, 1).collect::<Vec<_>>(), vec![-1.0]);
        assert_eq!(Linspace::new(-1.0, 1.0, 1).step(), 0.0);
    }

    #[test]
    fn reports_exact_len() {
        let it = Linspace::new(0.0, 1.0, 11);
        assert_eq!(it.len(), 11);
        assert_abs_diff_eq!(it.step(), 0.1, epsilon = 1e-15);
    }
}
