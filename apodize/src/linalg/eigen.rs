use nalgebra::{DMatrix, SymmetricEigen};

use crate::capability::{SymmetricEigenDecomposition, SymmetricEigensolver};

/// [`SymmetricEigensolver`] backed by `nalgebra::SymmetricEigen`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NalgebraEigensolver;

impl SymmetricEigensolver for NalgebraEigensolver {
    fn eigh(&self, matrix: DMatrix<f64>) -> SymmetricEigenDecomposition {
        let SymmetricEigen {
            eigenvalues,
            eigenvectors,
        } = SymmetricEigen::new(matrix);
        SymmetricEigenDecomposition {
            eigenvalues,
            eigenvectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn decomposes_two_by_two() {
        // eigenvalues 3 and 1 with eigenvectors (1, 1)/√2 and (1, -1)/√2
        let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]);
        let decomp = NalgebraEigensolver.eigh(m);
        let idx = decomp.principal_index().expect("non-empty");
        assert_abs_diff_eq!(decomp.eigenvalues[idx], 3.0, epsilon = 1e-12);
        let v = decomp.eigenvectors.column(idx);
        assert_abs_diff_eq!(v[0].abs(), core::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(v[0], v[1], epsilon = 1e-12);
    }
}
