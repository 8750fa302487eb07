//! Dense matrix multiplication under four strategies, plus a harness to time them.
//!
//! Each strategy adds one idea on top of the last: the textbook triple loop,
//! a transposed copy of B for sequential memory access (with a 2-wide
//! unrolled reduction), the triple loop with rows split across threads,
//! and finally both together.
//!
//! ## Usage
//!
//! ```
//! use matmul::{Matrix, multiply_naive};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]);
//! let mut c = Matrix::zeros(2, 2);
//!
//! multiply_naive(&a, &b, &mut c).unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! The threaded versions take a [`ParallelConfig`] that carries the
//! dispatch threshold and, optionally, a dedicated rayon pool:
//!
//! ```
//! use matmul::{Matrix, ParallelConfig, multiply_optimized_parallel};
//!
//! let a = Matrix::sequential(64, 64);
//! let b = Matrix::identity(64);
//! let mut c = Matrix::zeros(64, 64);
//!
//! let config = ParallelConfig::with_threads(4).unwrap();
//! multiply_optimized_parallel(&a, &b, &mut c, &config).unwrap();
//! assert_eq!(c, a);
//! ```

pub mod error;
pub mod harness;
pub mod matrix;
pub mod threaded;

use std::fmt;

pub use error::MatmulError;
pub use matrix::Matrix;
pub use matrix::naive::multiply_naive;
pub use matrix::optimized::multiply_optimized;
pub use threaded::optimized_parallel::multiply_optimized_parallel;
pub use threaded::parallel::multiply_parallel;
pub use threaded::{DISPATCH_THRESHOLD, ParallelConfig};

/// One of the four multiplication strategies.
///
/// The discriminants are the identifiers accepted by the benchmark binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Naive = 0,
    Optimized = 1,
    Parallel = 2,
    OptimizedParallel = 3,
}

impl Strategy {
    /// All strategies, in the order the harness runs them.
    pub const ALL: [Strategy; 4] = [
        Strategy::Naive,
        Strategy::Optimized,
        Strategy::Parallel,
        Strategy::OptimizedParallel,
    ];

    /// Looks up a strategy by its numeric identifier (0–3).
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Label used in the timing report.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Naive => "Normal",
            Strategy::Optimized => "Optimized",
            Strategy::Parallel => "Parallel",
            Strategy::OptimizedParallel => "Final",
        }
    }

    /// Runs this strategy: `result = a * b`.
    ///
    /// The single-threaded strategies ignore `config`.
    pub fn multiply(
        self,
        a: &Matrix,
        b: &Matrix,
        result: &mut Matrix,
        config: &ParallelConfig,
    ) -> error::Result<()> {
        match self {
            Strategy::Naive => multiply_naive(a, b, result),
            Strategy::Optimized => multiply_optimized(a, b, result),
            Strategy::Parallel => multiply_parallel(a, b, result, config),
            Strategy::OptimizedParallel => multiply_optimized_parallel(a, b, result, config),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_ids_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::from_id(s.id()), Some(s));
        }
        assert_eq!(Strategy::from_id(4), None);
    }

    #[test]
    fn test_strategy_dispatch() {
        let a = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]);
        let b = Matrix::from_vec(3, 1, vec![4.0, 5.0, 6.0]);
        let cfg = ParallelConfig::default();

        for s in Strategy::ALL {
            let mut c = Matrix::zeros(1, 1);
            s.multiply(&a, &b, &mut c, &cfg).unwrap();
            assert_eq!(c.as_slice(), &[32.0], "{}", s);
        }
    }
}
