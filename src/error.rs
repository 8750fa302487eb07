//! Error type shared by every multiplier.

/// Errors returned by the multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatmulError {
    /// The columns of the left operand don't match the rows of the right one.
    ///
    /// Detected before any element is read, so a mismatched call never
    /// touches the operand buffers.
    #[error("Wrong matrix size")]
    DimensionMismatch { left_cols: usize, right_rows: usize },
}

/// Convenience alias for `Result<T, MatmulError>`.
pub type Result<T> = std::result::Result<T, MatmulError>;
