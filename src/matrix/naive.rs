use super::{Matrix, check_operands};
use crate::error::Result;

/// Naive matrix multiplication: `result = a * b`.
///
/// This is the textbook triple loop in i-j-k order. The innermost loop
/// walks B with stride `b.cols()` (column-wise), so it misses cache on
/// nearly every iteration for large matrices.
///
/// Use this as a correctness baseline, not for performance. Every element
/// of `result` is overwritten.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`](crate::MatmulError) if
/// `a.cols() != b.rows()`.
///
/// # Panics
///
/// Panics if `result` is not `a.rows() × b.cols()`.
pub fn multiply_naive(a: &Matrix, b: &Matrix, result: &mut Matrix) -> Result<()> {
    check_operands(a, b, result)?;
    let n = b.cols();
    if n == 0 {
        return Ok(());
    }

    for (i, out) in result.as_mut_slice().chunks_mut(n).enumerate() {
        naive_row(a.row(i), b, out);
    }
    Ok(())
}

/// Computes one output row: `out[j] = sum_p a_row[p] * b[p][j]`.
///
/// Shared with the parallel multiplier so both produce bit-identical sums.
pub(crate) fn naive_row(a_row: &[f64], b: &Matrix, out: &mut [f64]) {
    let n = b.cols();
    let bs = b.as_slice();
    for (j, cell) in out.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (p, &av) in a_row.iter().enumerate() {
            acc += av * bs[j + p * n];
        }
        *cell = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatmulError;

    #[test]
    fn test_2x2() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]);
        let mut c = Matrix::zeros(2, 2);

        multiply_naive(&a, &b, &mut c).unwrap();

        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_overwrites_previous_contents() {
        let a = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]);
        let b = Matrix::from_vec(3, 1, vec![4.0, 5.0, 6.0]);
        let mut c = Matrix::from_vec(1, 1, vec![1000.0]);

        multiply_naive(&a, &b, &mut c).unwrap();

        assert_eq!(c.as_slice(), &[32.0]);
    }

    #[test]
    fn test_zero_inner_dimension() {
        let a = Matrix::zeros(2, 0);
        let b = Matrix::zeros(0, 3);
        let mut c = Matrix::from_vec(2, 3, vec![9.0; 6]);

        multiply_naive(&a, &b, &mut c).unwrap();

        assert_eq!(c.as_slice(), &[0.0; 6]);
    }

    #[test]
    fn test_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        let mut c = Matrix::zeros(2, 2);

        let err = multiply_naive(&a, &b, &mut c).unwrap_err();
        assert!(matches!(err, MatmulError::DimensionMismatch { .. }));
    }
}
