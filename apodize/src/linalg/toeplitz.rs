use nalgebra::DMatrix;

/// Build the symmetric Toeplitz matrix whose first row is `first_row`.
///
/// Entry `(i, j)` is `first_row[|i - j|]`.
///
/// # Examples
/// ```
/// use apodize::linalg::symmetric_toeplitz;
///
/// let t = symmetric_toeplitz(&[2.0, 1.0, 0.5]);
/// assert_eq!(t[(0, 2)], 0.5);
/// assert_eq!(t[(2, 0)], 0.5);
/// assert_eq!(t[(1, 1)], 2.0);
/// ```
pub fn symmetric_toeplitz(first_row: &[f64]) -> DMatrix<f64> {
    let n = first_row.len();
    DMatrix::from_fn(n, n, |i, j| first_row[i.abs_diff(j)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_symmetric_with_constant_diagonals() {
        let row = [4.0, -1.0, 0.25, 0.125];
        let t = symmetric_toeplitz(&row);
        assert_eq!(t.shape(), (4, 4));
        assert_eq!(t, t.transpose());
        for k in 0..4 {
            for i in 0..4 - k {
                assert_eq!(t[(i, i + k)], row[k]);
            }
        }
    }

    #[test]
    fn empty_row_gives_empty_matrix() {
        assert_eq!(symmetric_toeplitz(&[]).shape(), (0, 0));
    }
}
