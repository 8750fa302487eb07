//! Timing harness for comparing strategies on the same operands.
//!
//! Everything here measures and returns values; nothing prints. Turning
//! results into text is the job of [`report`].

pub mod report;

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::{Matrix, ParallelConfig, Strategy};

/// Repetitions used when timing a single strategy.
pub const DEFAULT_REPETITIONS: usize = 3;

/// Leading result values kept for the sanity-check preview.
pub const PREVIEW_LEN: usize = 5;

/// Outcome of one timed strategy run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub strategy: Strategy,
    pub elapsed: Duration,
    /// Up to [`PREVIEW_LEN`] values from the start of the first result row.
    pub preview: Vec<f64>,
}

/// Calls `f` once and returns its output with the wall-clock time it took.
pub fn time_call<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Runs every strategy in [`Strategy::ALL`] order against the same operands.
///
/// `result` is reused and overwritten by each run; each report's preview is
/// taken right after its own run.
///
/// # Errors
///
/// Stops at the first strategy that fails (a dimension mismatch fails the
/// first one).
pub fn run_all(
    a: &Matrix,
    b: &Matrix,
    result: &mut Matrix,
    config: &ParallelConfig,
) -> Result<Vec<RunReport>> {
    let mut reports = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let (outcome, elapsed) = time_call(|| strategy.multiply(a, b, result, config));
        outcome?;
        log::debug!("{} finished in {:?}", strategy, elapsed);

        reports.push(RunReport {
            strategy,
            elapsed,
            preview: preview(result),
        });
    }
    Ok(reports)
}

/// Mean wall-clock time of `strategy` over `repetitions` runs.
///
/// Zero repetitions yields [`Duration::ZERO`] without running anything.
///
/// # Errors
///
/// Returns the first error from the strategy.
pub fn run_single(
    strategy: Strategy,
    repetitions: usize,
    a: &Matrix,
    b: &Matrix,
    result: &mut Matrix,
    config: &ParallelConfig,
) -> Result<Duration> {
    if repetitions == 0 {
        return Ok(Duration::ZERO);
    }

    let mut total = Duration::ZERO;
    for rep in 0..repetitions {
        let (outcome, elapsed) = time_call(|| strategy.multiply(a, b, result, config));
        outcome?;
        log::debug!("{} run {}/{}: {:?}", strategy, rep + 1, repetitions, elapsed);
        total += elapsed;
    }
    Ok(total / repetitions as u32)
}

fn preview(result: &Matrix) -> Vec<f64> {
    let take = PREVIEW_LEN.min(result.cols()).min(result.len());
    result.as_slice()[..take].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_all_order_and_preview() {
        let a = Matrix::sequential(8, 8);
        let b = Matrix::identity(8);
        let mut c = Matrix::zeros(8, 8);

        let reports = run_all(&a, &b, &mut c, &ParallelConfig::default()).unwrap();

        let order: Vec<_> = reports.iter().map(|r| r.strategy).collect();
        assert_eq!(order, Strategy::ALL);
        for r in &reports {
            assert_eq!(r.preview, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        }
    }

    #[test]
    fn test_preview_bounded_by_columns() {
        let a = Matrix::sequential(4, 2);
        let b = Matrix::from_vec(2, 3, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let mut c = Matrix::zeros(4, 3);

        let reports = run_all(&a, &b, &mut c, &ParallelConfig::default()).unwrap();

        assert_eq!(reports[0].preview, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_run_all_stops_on_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        let mut c = Matrix::zeros(2, 2);

        assert!(run_all(&a, &b, &mut c, &ParallelConfig::default()).is_err());
    }

    #[test]
    fn test_run_single_zero_reps() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        let mut c = Matrix::zeros(2, 2);

        // Nothing runs, so the mismatch is never seen.
        let mean = run_single(Strategy::Naive, 0, &a, &b, &mut c, &ParallelConfig::default());
        assert_eq!(mean, Ok(Duration::ZERO));
    }

    #[test]
    fn test_run_single_computes_result() {
        let a = Matrix::sequential(5, 5);
        let b = Matrix::identity(5);
        let mut c = Matrix::zeros(5, 5);

        run_single(
            Strategy::OptimizedParallel,
            DEFAULT_REPETITIONS,
            &a,
            &b,
            &mut c,
            &ParallelConfig::default(),
        )
        .unwrap();

        assert_eq!(c, a);
    }
}
