//! Unpacking Q and R from the packed factorization

use mdarray::Tensor;
use crate::precision::Precision;
use crate::utils::view::ColMajor;
use super::colpiv::ColPivQR;
use super::householder::reflector_apply;

impl<T: Precision> ColPivQR<T> {
    /// Upper trapezoidal factor R (diag_size x cols)
    pub fn r(&self) -> Tensor<T, (usize, usize)> {
        self.r_rows(self.diag_size())
    }

    /// Thin orthogonal factor Q (rows x diag_size), so that `q() * r()`
    /// equals `A * permut`
    pub fn q(&self) -> Tensor<T, (usize, usize)> {
        self.q_cols(self.diag_size())
    }

    /// Complete orthogonal factor (rows x rows)
    pub fn q_full(&self) -> Tensor<T, (usize, usize)> {
        self.q_cols(self.rows())
    }

    /// Truncate the factorization to rank k
    ///
    /// Returns the first k columns of Q (rows x k) and the first k rows of
    /// R (k x cols). With k = `nonzero_pivots()` the product still matches
    /// `A * permut` up to the dropped numerically-zero block. `k` is clamped
    /// to `diag_size()`.
    pub fn truncate(&self, k: usize) -> (Tensor<T, (usize, usize)>, Tensor<T, (usize, usize)>) {
        let k = k.min(self.diag_size());
        (self.q_cols(k), self.r_rows(k))
    }

    fn r_rows(&self, k: usize) -> Tensor<T, (usize, usize)> {
        Tensor::from_fn((k, self.cols()), |idx| {
            if idx[1] >= idx[0] {
                self.qr[[idx[0], idx[1]]]
            } else {
                T::zero()
            }
        })
    }

    /// Q * I[:, ..k], applying H_{j-1}, ..., H_0 to the identity columns
    fn q_cols(&self, k: usize) -> Tensor<T, (usize, usize)> {
        let m = self.rows();
        let mut q = ColMajor::from_tensor(Tensor::from_fn((m, k), |idx| {
            if idx[0] == idx[1] { T::one() } else { T::zero() }
        }));

        // reflectors past column k only touch rows that are still zero
        for i in (0..k.min(self.diag_size())).rev() {
            let tau = self.coeffs[[i]];
            if tau == T::zero() {
                continue;
            }
            let tail: Vec<T> = ((i + 1)..m).map(|row| self.qr[[row, i]]).collect();
            reflector_apply(&tail, tau, q.as_mut().subrows_mut(i));
        }

        q.into_tensor()
    }
}
