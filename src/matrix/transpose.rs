use rayon::prelude::*;

use super::Matrix;

/// Scratch copy of a right-hand operand stored transposed: `aux = b^T`.
///
/// What was column `j` of `b` becomes contiguous row `j` of `aux`, so a dot
/// product against it reads two sequential streams instead of striding
/// through `b` by its row length.
///
/// The buffer is owned by one multiplication call and dropped with it.
///
/// # Example
///
/// ```
/// use matmul::Matrix;
/// use matmul::matrix::transpose::Transposed;
///
/// let b = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0,
///                                     4.0, 5.0, 6.0]);
/// let aux = Transposed::of(&b);
///
/// assert_eq!(aux.as_slice(), &[1.0, 4.0,
///                              2.0, 5.0,
///                              3.0, 6.0]);
/// ```
#[derive(Debug)]
pub struct Transposed {
    /// Row length of `aux`, i.e. rows of the source.
    stride: usize,
    data: Vec<f64>,
}

impl Transposed {
    /// Fills `aux[k + j * rows] = b[j + k * cols]` on the calling thread.
    pub fn of(b: &Matrix) -> Self {
        let mut aux = Self::zeroed(b);
        if aux.stride > 0 {
            for (j, dst) in aux.data.chunks_mut(aux.stride).enumerate() {
                fill_column(b, j, dst);
            }
        }
        aux
    }

    /// Same as [`Transposed::of`], with the rows of `aux` split across the
    /// current rayon pool. Each worker owns a disjoint row of `aux`.
    ///
    /// Returns only once every row has been written.
    pub fn of_par(b: &Matrix) -> Self {
        let mut aux = Self::zeroed(b);
        if aux.stride > 0 {
            aux.data
                .par_chunks_mut(aux.stride)
                .enumerate()
                .for_each(|(j, dst)| fill_column(b, j, dst));
        }
        aux
    }

    fn zeroed(b: &Matrix) -> Self {
        Self {
            stride: b.rows(),
            data: vec![0.0; b.len()],
        }
    }

    /// Row `j` of `aux`: column `j` of the source.
    pub fn row(&self, j: usize) -> &[f64] {
        &self.data[j * self.stride..(j + 1) * self.stride]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Copies column `j` of `b` into `dst`.
fn fill_column(b: &Matrix, j: usize, dst: &mut [f64]) {
    let n = b.cols();
    let src = b.as_slice();
    for (k, d) in dst.iter_mut().enumerate() {
        *d = src[j + k * n];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_and_parallel_agree() {
        let b = Matrix::sequential(7, 5);
        let seq = Transposed::of(&b);
        let par = Transposed::of_par(&b);

        assert_eq!(seq.as_slice(), par.as_slice());
        for j in 0..5 {
            for k in 0..7 {
                assert_eq!(seq.row(j)[k], b.get(k, j).unwrap());
            }
        }
    }

    #[test]
    fn test_empty_source() {
        let b = Matrix::zeros(0, 4);
        assert!(Transposed::of(&b).as_slice().is_empty());
        assert!(Transposed::of_par(&b).as_slice().is_empty());
    }
}
