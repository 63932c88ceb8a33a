//! Moore-Penrose pseudoinverse via the normal equations.

use tracing::debug;

use crate::Float;
use crate::error::Result;
use crate::matrix::Matrix;

use super::solve::inverse;

/// Moore-Penrose pseudoinverse of `m`.
///
/// - tall or square (`rows >= cols`): `m⁺ = (mᵀm)⁻¹ mᵀ`
/// - wide (`rows < cols`): `m⁺ = mᵀ (mmᵀ)⁻¹`
///
/// Fails with [`CoreError::SingularMatrix`](crate::CoreError::SingularMatrix)
/// when the Gram matrix is singular, i.e. when `m` is not of full rank.
///
/// ```
/// # use linmat_core::Matrix;
/// # use linmat_core::linalg::pseudoinverse;
/// let m = Matrix::from_row_major(2, 1, &[3.0_f64, 4.0]).unwrap();
/// let p = pseudoinverse(&m).unwrap();
/// assert_eq!(p.shape(), (1, 2));
/// assert!((p.as_slice()[0] - 0.12).abs() < 1e-12);
/// assert!((p.as_slice()[1] - 0.16).abs() < 1e-12);
/// ```
pub fn pseudoinverse<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    let mt = m.transpose()?;
    if m.rows() >= m.cols() {
        debug!(rows = m.rows(), cols = m.cols(), "pseudoinverse via (AᵀA)⁻¹Aᵀ");
        let gram = mt.matmul(m)?;
        inverse(&gram)?.matmul(&mt)
    } else {
        debug!(rows = m.rows(), cols = m.cols(), "pseudoinverse via Aᵀ(AAᵀ)⁻¹");
        let gram = m.matmul(&mt)?;
        mt.matmul(&inverse(&gram)?)
    }
}

impl<T: Float> Matrix<T> {
    /// Moore-Penrose pseudoinverse of `self`; see [`pseudoinverse`].
    pub fn pseudoinverse(&self) -> Result<Self> {
        pseudoinverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn mat(rows: usize, cols: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_row_major(rows, cols, data).unwrap()
    }

    #[test]
    fn test_pinv_tall() {
        // >>> np.linalg.pinv([[1,2],[3,4],[5,6]])
        // array([[-1.33333333, -0.33333333,  0.66666667],
        //        [ 1.08333333,  0.33333333, -0.41666667]])
        let a = mat(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let p = pseudoinverse(&a).unwrap();
        let expected = mat(
            2,
            3,
            &[
                -4.0 / 3.0,
                -1.0 / 3.0,
                2.0 / 3.0,
                13.0 / 12.0,
                1.0 / 3.0,
                -5.0 / 12.0,
            ],
        );
        assert!(p.approx_eq(&expected, 1e-9));
    }

    #[test]
    fn test_pinv_wide_is_transpose_of_tall() {
        let a = mat(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let wide = a.transpose().unwrap();
        let p_wide = wide.pseudoinverse().unwrap();
        let p_tall_t = pseudoinverse(&a).unwrap().transpose().unwrap();
        assert_eq!(p_wide.shape(), (3, 2));
        assert!(p_wide.approx_eq(&p_tall_t, 1e-9));
    }

    #[test]
    fn test_pinv_penrose_condition() {
        // A A⁺ A = A
        let a = mat(2, 3, &[1.0, 0.0, 2.0, -1.0, 3.0, 1.0]);
        let p = pseudoinverse(&a).unwrap();
        let apa = a.matmul(&p).unwrap().matmul(&a).unwrap();
        assert!(apa.approx_eq(&a, 1e-9));
    }

    #[test]
    fn test_pinv_square_matches_inverse() {
        let a = mat(2, 2, &[2.0, 1.0, 1.0, 4.0]);
        let p = pseudoinverse(&a).unwrap();
        let inv = inverse(&a).unwrap();
        assert!(p.approx_eq(&inv, 1e-9));
    }

    #[test]
    fn test_pinv_rank_deficient_fails() {
        let a = mat(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
        assert!(matches!(
            pseudoinverse(&a),
            Err(CoreError::SingularMatrix { .. })
        ));
    }
}
