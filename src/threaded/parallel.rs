//! Row-parallel naive multiplication.

use rayon::prelude::*;

use super::ParallelConfig;
use crate::error::Result;
use crate::matrix::naive::naive_row;
use crate::matrix::{Matrix, check_operands};

/// Naive multiplication with output rows split across threads.
///
/// When `a.len()` exceeds `config.threshold`, each row of `result` is
/// handed to a worker in the configured pool; rows never alias, so no
/// locking is needed. Otherwise the whole product runs on the calling
/// thread. Either way the arithmetic is the same as
/// [`multiply_naive`](crate::matrix::naive::multiply_naive), so results
/// are bit-identical to it.
///
/// Returns once every row has been written.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`](crate::MatmulError) if
/// `a.cols() != b.rows()`.
pub fn multiply_parallel(
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
        log::debug!("parallel: {} elements, running sequentially", a.len());
        for (i, row) in out.chunks_mut(n).enumerate() {
            naive_row(a.row(i), b, row);
        }
        return Ok(());
    }

    log::debug!(
        "parallel: splitting {} rows across {} threads",
        a.rows(),
        config.num_threads()
    );
    config.install(|| {
        out.par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row)| naive_row(a.row(i), b, row));
    });
    Ok(())
}
