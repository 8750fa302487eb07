//! Row-major matrix storage and the single-threaded multipliers.
//!
//! Every multiplier in the crate works on [`Matrix`]: a flat `Vec<f64>`
//! where element `(row, col)` lives at `col + row * cols`. The naive
//! version is the correctness baseline; the optimized one transposes B into
//! a scratch buffer and unrolls the reduction.

pub mod naive;
pub mod optimized;
pub mod transpose;

use crate::error::{MatmulError, Result};

/// Dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// A `rows × cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements",
            rows,
            cols,
            rows * cols
        );
        Self { rows, cols, data }
    }

    /// Builds a matrix by evaluating `f(row, col)` for every element.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Square identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 })
    }

    /// Every element holds its own linear index (`col + row * cols`).
    ///
    /// This is the fill used by the benchmark binary.
    pub fn sequential(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |r, c| (c + r * cols) as f64)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Element at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[col + row * self.cols])
        } else {
            None
        }
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

/// Validates `a * b -> result` before any multiplier indexes the buffers.
///
/// A mismatched inner dimension is reported as an error. A result buffer of
/// the wrong shape is a caller bug and panics.
pub(crate) fn check_operands(a: &Matrix, b: &Matrix, result: &Matrix) -> Result<()> {
    if a.cols != b.rows {
        return Err(MatmulError::DimensionMismatch {
            left_cols: a.cols,
            right_rows: b.rows,
        });
    }
    assert_eq!(
        (result.rows, result.cols),
        (a.rows, b.cols),
        "result: expected {}x{}",
        a.rows,
        b.cols
    );
    Ok(())
}
