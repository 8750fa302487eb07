//! Multi-threaded multipliers.
//!
//! These distribute output rows across a rayon pool. Dispatch is gated on
//! the size of the left operand: small problems run on the calling thread
//! because spinning up workers would cost more than the multiply itself.
//!
//! Available implementations:
//! - `parallel`: naive algorithm, rows split across workers
//! - `optimized_parallel`: parallel transpose, then parallel unrolled multiply

pub mod optimized_parallel;
pub mod parallel;

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Left-operand element count above which work is split across threads.
pub const DISPATCH_THRESHOLD: usize = 100;

/// Concurrency policy for the threaded multipliers.
///
/// `pool: None` runs on rayon's global pool.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    pub threshold: usize,
    pub pool: Option<Arc<ThreadPool>>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            threshold: DISPATCH_THRESHOLD,
            pool: None,
        }
    }
}

impl ParallelConfig {
    /// Default threshold with a dedicated pool of `num_threads` workers.
    pub fn with_threads(num_threads: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("matmul-worker-{i}"))
            .build()?;
        Ok(Self {
            threshold: DISPATCH_THRESHOLD,
            pool: Some(Arc::new(pool)),
        })
    }

    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// `true` when a left operand of `elements` entries is worth splitting.
    pub fn should_dispatch(&self, elements: usize) -> bool {
        elements > self.threshold
    }

    /// Number of workers `install` will run on.
    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Runs `op` inside the configured pool. Parallel iterators started from
    /// `op` use that pool's workers.
    pub(crate) fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let cfg = ParallelConfig::default();
        assert!(!cfg.should_dispatch(0));
        assert!(!cfg.should_dispatch(100));
        assert!(cfg.should_dispatch(101));
    }

    #[test]
    fn test_dedicated_pool() {
        let cfg = ParallelConfig::with_threads(3).unwrap().threshold(0);
        assert_eq!(cfg.num_threads(), 3);
        assert!(cfg.should_dispatch(1));
        assert_eq!(cfg.install(rayon::current_num_threads), 3);
    }
}
