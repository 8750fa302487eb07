use super::transpose::Transposed;
use super::{Matrix, check_operands};
use crate::error::Result;

/// Cache-friendly matrix multiplication: `result = a * b`.
///
/// B is first copied into a transposed scratch buffer, so the inner loop
/// reads a row of A and a row of `aux` sequentially instead of striding
/// through B. The reduction is then unrolled by 2.
///
/// Unrolling changes the association of the sum; results may differ from
/// [`multiply_naive`](super::naive::multiply_naive) by rounding only.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`](crate::MatmulError) if
/// `a.cols() != b.rows()`. The scratch buffer is not allocated in that case.
///
/// # Panics
///
/// Panics if `result` is not `a.rows() × b.cols()`.
pub fn multiply_optimized(a: &Matrix, b: &Matrix, result: &mut Matrix) -> Result<()> {
    check_operands(a, b, result)?;
    let n = b.cols();
    if n == 0 {
        return Ok(());
    }

    let aux = Transposed::of(b);
    for (i, out) in result.as_mut_slice().chunks_mut(n).enumerate() {
        let a_row = a.row(i);
        for (j, cell) in out.iter_mut().enumerate() {
            *cell = dot_unrolled(a_row, aux.row(j));
        }
    }
    Ok(())
}

/// Dot product unrolled by 2, pairing terms `(k, k + 1)` from the front.
///
/// With an odd length the first term seeds the accumulator and pairing
/// starts at index 1.
#[inline]
pub(crate) fn dot_unrolled(x: &[f64], y: &[f64]) -> f64 {
    let len = x.len();
    let (mut acc, start) = if len % 2 == 0 {
        (0.0, 0)
    } else {
        (x[0] * y[0], 1)
    };

    let mut k = start;
    while k < len {
        acc += x[k] * y[k];
        acc += x[k + 1] * y[k + 1];
        k += 2;
    }
    acc
}
