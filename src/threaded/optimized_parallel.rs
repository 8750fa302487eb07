//! Transpose + unroll + row-parallel multiplication.

use rayon::prelude::*;

use super::ParallelConfig;
use crate::error::Result;
use crate::matrix::transpose::Transposed;
use crate::matrix::{Matrix, check_operands};

/// Combines the transposed scratch buffer with row-parallel dispatch.
///
/// Runs in two phases inside one pool installation:
/// 1. B is transposed into `aux`, rows of `aux` split across workers.
/// 2. Rows of `result` are split across workers, each reading all of `aux`.
///
/// Phase 2 cannot start before phase 1 has finished on every worker: each
/// output row needs every row of `aux`.
///
/// Below `config.threshold` both phases run on the calling thread with the
/// same arithmetic.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`](crate::MatmulError) if
/// `a.cols() != b.rows()`.
pub fn multiply_optimized_parallel(
    a: &Matrix,
    b: &Matrix,
    result: &mut Matrix,
    config: &ParallelConfig,
) -> Result<()> {
    check_operands(a, b, result)?;
    let n = b.cols();
    if n == 0 {
        return Ok(());
    }

    let out = result.as_mut_slice();
    if !config.should_dispatch(a.len()) {
        log::debug!("optimized parallel: {} elements, running sequentially", a.len());
        let aux = Transposed::of(b);
        for (i, row) in out.chunks_mut(n).enumerate() {
            fill_row(a.row(i), &aux, row);
        }
        return Ok(());
    }

    log::debug!(
        "optimized parallel: splitting {} rows across {} threads",
        a.rows(),
        config.num_threads()
    );
    config.install(|| {
        // for_each joins every worker before returning, so aux is complete here.
        let aux = Transposed::of_par(b);
        out.par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row)| fill_row(a.row(i), &aux, row));
    });
    Ok(())
}

fn fill_row(a_row: &[f64], aux: &Transposed, out: &mut [f64]) {
    for (j, cell) in out.iter_mut().enumerate() {
        *cell = dot_unrolled_trailing(a_row, aux.row(j));
    }
}

/// Dot product unrolled by 2, adding term `k` then `k - 1` for odd `k`.
///
/// An odd length leaves the last term unpaired; it is added once after
/// the loop.
#[inline]
fn dot_unrolled_trailing(x: &[f64], y: &[f64]) -> f64 {
    let len = x.len();
    let mut acc = 0.0;

    let mut k = 1;
    while k < len {
        acc += x[k] * y[k];
        acc += x[k - 1] * y[k - 1];
        k += 2;
    }
    if len % 2 == 1 {
        acc += x[len - 1] * y[len - 1];
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::optimized::multiply_optimized;

    #[test]
    fn test_tail_added_once() {
        assert_eq!(dot_unrolled_trailing(&[], &[]), 0.0);
        assert_eq!(dot_unrolled_trailing(&[2.0], &[3.0]), 6.0);
        assert_eq!(dot_unrolled_trailing(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
        assert_eq!(dot_unrolled_trailing(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(
            dot_unrolled_trailing(&[1.0; 5], &[1.0, 10.0, 100.0, 1000.0, 10000.0]),
            11111.0
        );
    }

    #[test]
    fn test_matches_optimized() {
        let cfg = ParallelConfig::with_threads(4).unwrap();
        for k in [32, 33] {
            let a = Matrix::from_fn(40, k, |r, c| ((r * 3 + c) % 7) as f64);
            let b = Matrix::from_fn(k, 24, |r, c| ((r + c * 2) % 5) as f64);

            let mut expected = Matrix::zeros(40, 24);
            let mut actual = Matrix::zeros(40, 24);
            multiply_optimized(&a, &b, &mut expected).unwrap();
            multiply_optimized_parallel(&a, &b, &mut actual, &cfg).unwrap();

            assert_eq!(expected, actual, "inner dimension {}", k);
        }
    }
}
