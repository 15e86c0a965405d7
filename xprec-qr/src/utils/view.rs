//! Column-major working storage and stride-based block views
//!
//! The decomposition works on a column-major copy of the input so that every
//! sub-column is a contiguous slice. Blocks are borrowed through [`MatMut`],
//! which never owns data and cannot outlive the buffer it was taken from.

use mdarray::Tensor;
use std::ops::Range;

/// Owned column-major matrix buffer
#[derive(Debug, Clone)]
pub struct ColMajor<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Copy> ColMajor<T> {
    /// Take a row-major tensor into column-major storage
    pub fn from_tensor(tensor: Tensor<T, (usize, usize)>) -> Self {
        let (nrows, ncols) = *tensor.shape();
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(tensor[[i, j]]);
            }
        }
        Self { data, nrows, ncols }
    }

    /// Identity matrix of size n
    pub fn identity(n: usize, zero: T, one: T) -> Self {
        let mut data = vec![zero; n * n];
        for i in 0..n {
            data[i + i * n] = one;
        }
        Self { data, nrows: n, ncols: n }
    }

    pub fn into_tensor(self) -> Tensor<T, (usize, usize)> {
        let nrows = self.nrows;
        Tensor::from_fn((self.nrows, self.ncols), |idx| self.data[idx[0] + idx[1] * nrows])
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i + j * self.nrows]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i + j * self.nrows] = value;
    }

    /// Rows `rows` of column `j` as a contiguous slice
    #[inline]
    pub fn col(&self, j: usize, rows: Range<usize>) -> &[T] {
        let start = j * self.nrows;
        &self.data[start + rows.start..start + rows.end]
    }

    #[inline]
    pub fn col_mut(&mut self, j: usize, rows: Range<usize>) -> &mut [T] {
        let start = j * self.nrows;
        &mut self.data[start + rows.start..start + rows.end]
    }

    /// Swap two whole columns
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let m = self.nrows;
        let (left, right) = self.data.split_at_mut(hi * m);
        left[lo * m..(lo + 1) * m].swap_with_slice(&mut right[..m]);
    }

    /// Mutable view over the whole matrix
    pub fn as_mut(&mut self) -> MatMut<'_, T> {
        MatMut {
            nrows: self.nrows,
            ncols: self.ncols,
            col_stride: self.nrows,
            data: &mut self.data,
        }
    }
}

/// Mutable strided view into a column-major buffer
///
/// Element `(i, j)` lives at `data[i + j * col_stride]`.
#[derive(Debug)]
pub struct MatMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    col_stride: usize,
}

impl<'a, T: Copy> MatMut<'a, T> {
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.nrows && j < self.ncols);
        self.data[i + j * self.col_stride]
    }

    #[inline]
    pub fn col(&self, j: usize) -> &[T] {
        let start = j * self.col_stride;
        &self.data[start..start + self.nrows]
    }

    #[inline]
    pub fn col_mut(&mut self, j: usize) -> &mut [T] {
        let start = j * self.col_stride;
        &mut self.data[start..start + self.nrows]
    }

    /// Split into columns `[0, j)` and `[j, ncols)`
    pub fn split_at_col_mut(self, j: usize) -> (MatMut<'a, T>, MatMut<'a, T>) {
        let MatMut { data, nrows, ncols, col_stride } = self;
        assert!(j <= ncols);
        let mid = (j * col_stride).min(data.len());
        let (left, right) = data.split_at_mut(mid);
        (
            MatMut { data: left, nrows, ncols: j, col_stride },
            MatMut { data: right, nrows, ncols: ncols - j, col_stride },
        )
    }

    /// Drop the first `r` rows
    pub fn subrows_mut(self, r: usize) -> MatMut<'a, T> {
        let MatMut { data, nrows, ncols, col_stride } = self;
        assert!(r <= nrows);
        let start = r.min(data.len());
        MatMut {
            data: &mut data[start..],
            nrows: nrows - r,
            ncols: if r == nrows { 0 } else { ncols },
            col_stride,
        }
    }
}
