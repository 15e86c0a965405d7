//! Householder QR with full column pivoting
//!
//! At every step the remaining column of largest norm is moved to the front,
//! a Householder reflector annihilates it below the diagonal, and the norms of
//! the trailing columns are downdated. Downdating loses precision when most of
//! a column's mass has been removed; such norms are recomputed from scratch.

use crate::error::QrError;
use crate::precision::Precision;
use crate::utils::norms::{argmax, max_value, norm_2};
use crate::utils::pivoting::transpositions_to_permutation;
use crate::utils::view::ColMajor;
use mdarray::Tensor;

use super::householder::{reflector, reflector_apply};

/// Result of Householder QR with column pivoting, `A * permut = Q * R`
#[derive(Debug, Clone)]
pub struct ColPivQR<T: Precision> {
    /// Packed factorization: R on and above the diagonal, the essential part
    /// of the Householder vectors below it
    pub qr: Tensor<T, (usize, usize)>,
    /// Householder reflection coefficients, one per diagonal entry
    pub coeffs: Tensor<T, (usize,)>,
    /// Column permutation matrix (cols x cols)
    pub permut: Tensor<T, (usize, usize)>,
    transp: Vec<usize>,
    nonzero_pivots: usize,
    max_pivot: T,
    threshold: T,
}

impl<T: Precision> ColPivQR<T> {
    pub fn rows(&self) -> usize {
        self.qr.shape().0
    }

    pub fn cols(&self) -> usize {
        self.qr.shape().1
    }

    /// `min(rows, cols)`
    pub fn diag_size(&self) -> usize {
        self.transp.len()
    }

    /// Column swapped into position k at step k
    pub fn transpositions(&self) -> &[usize] {
        &self.transp
    }

    /// First step at which the remaining block was numerically zero,
    /// or `diag_size()` if that never happened
    pub fn nonzero_pivots(&self) -> usize {
        self.nonzero_pivots
    }

    /// Largest absolute diagonal entry of R
    pub fn max_pivot(&self) -> T {
        self.max_pivot
    }

    /// Squared-norm cutoff per remaining row used for rank detection,
    /// `(max_j ||A[:, j]|| * eps)^2 / rows`
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Column order `p` with `permut[p[j], j] = 1`
    pub fn permutation_indices(&self) -> Vec<usize> {
        transpositions_to_permutation(&self.transp, self.cols())
    }

    /// Number of leading diagonal entries with `|r_ii| >= rtol * max_pivot`
    pub fn effective_rank(&self, rtol: T) -> usize {
        if self.max_pivot == T::zero() {
            return 0;
        }
        let cutoff = rtol * self.max_pivot;
        (0..self.diag_size())
            .take_while(|&i| Precision::abs(self.qr[[i, i]]) >= cutoff)
            .count()
    }
}

/// Householder QR with column pivoting
///
/// Takes ownership of `matrix` and turns it into the packed factorization.
///
/// # Errors
/// [`QrError::InvalidShape`] if the matrix has no rows or no columns.
pub fn decompose<T: Precision>(matrix: Tensor<T, (usize, usize)>) -> Result<ColPivQR<T>, QrError> {
    decompose_with_options(matrix, true)
}

/// Householder QR, optionally without column pivoting
///
/// With `use_pivoting == false` columns stay in place, but norms are still
/// tracked so that `nonzero_pivots` remains meaningful.
pub fn decompose_with_options<T: Precision>(
    matrix: Tensor<T, (usize, usize)>,
    use_pivoting: bool,
) -> Result<ColPivQR<T>, QrError> {
    let (rows, cols) = *matrix.shape();
    if rows == 0 || cols == 0 {
        return Err(QrError::InvalidShape { rows, cols });
    }

    let diag_size = rows.min(cols);
    let mut qr = ColMajor::from_tensor(matrix);

    let mut norms_dir: Vec<T> = (0..cols).map(|j| norm_2(qr.col(j, 0..rows))).collect();
    let mut norms_upd = norms_dir.clone();

    let eps = <T as Precision>::epsilon();
    let norm_scaled = max_value(&norms_upd) * eps;
    let threshold1 = norm_scaled * norm_scaled / T::from_f64(rows as f64);
    let threshold2 = Precision::sqrt(eps);

    let mut coeffs = vec![T::zero(); diag_size];
    let mut transp = Vec::with_capacity(diag_size);
    let mut nonzero_pivots = diag_size;
    let mut max_pivot = T::zero();

    for k in 0..diag_size {
        let biggest_col_index = if use_pivoting {
            k + argmax(&norms_upd[k..])
        } else {
            k
        };
        let biggest_col_norm = norms_upd[biggest_col_index];
        let biggest_col_sq_norm = biggest_col_norm * biggest_col_norm;

        // An all-zero block never passes the strict test since threshold1 is zero too
        if nonzero_pivots == diag_size
            && (biggest_col_sq_norm < threshold1 * T::from_f64((rows - k) as f64)
                || biggest_col_norm == T::zero())
        {
            nonzero_pivots = k;
            log::debug!(
                "remaining {}x{} block is numerically zero at step {}",
                rows - k,
                cols - k,
                k
            );
        }

        transp.push(biggest_col_index);
        if biggest_col_index != k {
            qr.swap_cols(k, biggest_col_index);
            norms_upd.swap(k, biggest_col_index);
            norms_dir.swap(k, biggest_col_index);
            log::trace!("step {}: pivot column {} swapped in", k, biggest_col_index);
        }

        let (tau, norm_x) = reflector(qr.col_mut(k, k..rows));
        coeffs[k] = tau;
        qr.set(k, k, norm_x);
        max_pivot = Precision::max(max_pivot, Precision::abs(norm_x));

        if k < rows && k + 1 < cols {
            let (left, right) = qr.as_mut().split_at_col_mut(k + 1);
            reflector_apply(&left.col(k)[k + 1..], tau, right.subrows_mut(k));
        }

        for j in (k + 1)..cols {
            if norms_upd[j] == T::zero() {
                continue;
            }
            let mut temp = Precision::abs(qr.get(k, j)) / norms_upd[j];
            temp = (T::one() + temp) * (T::one() - temp);
            if temp < T::zero() {
                temp = T::zero();
            }
            let temp2 = temp * norms_upd[j] * norms_upd[j] / (norms_dir[j] * norms_dir[j]);

            if temp2 <= threshold2 {
                norms_dir[j] = norm_2(qr.col(j, (k + 1)..rows));
                norms_upd[j] = norms_dir[j];
                log::trace!("step {}: recomputed norm of column {}", k, j);
            } else {
                norms_upd[j] = norms_upd[j] * Precision::sqrt(temp);
            }
        }
    }

    let mut permut = ColMajor::identity(cols, T::zero(), T::one());
    for (k, &target) in transp.iter().enumerate() {
        permut.swap_cols(k, target);
    }

    log::debug!(
        "column-pivoted QR of {}x{} {:?} matrix: {} nonzero pivots, max pivot {:e}",
        rows,
        cols,
        T::ELEMENT_TYPE,
        nonzero_pivots,
        max_pivot.to_f64()
    );

    Ok(ColPivQR {
        qr: qr.into_tensor(),
        coeffs: Tensor::from_fn((diag_size,), |idx| coeffs[idx[0]]),
        permut: permut.into_tensor(),
        transp,
        nonzero_pivots,
        max_pivot,
        threshold: threshold1,
    })
}
