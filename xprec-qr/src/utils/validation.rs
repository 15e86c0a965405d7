//! Result validation utilities

use crate::precision::Precision;
use mdarray::Tensor;

/// Validate a pivoted QR factorization
///
/// Checks that `Q` has orthonormal columns, that `perm` is a permutation
/// matrix and that `Q * R = A * P` up to `tolerance` relative to `||A||_F`.
pub fn validate_qr<T: Precision>(
    original: &Tensor<T, (usize, usize)>,
    q: &Tensor<T, (usize, usize)>,
    r: &Tensor<T, (usize, usize)>,
    perm: &Tensor<T, (usize, usize)>,
    tolerance: T,
) -> bool {
    let (m, n) = *original.shape();
    let (qm, k) = *q.shape();
    let (rk, rn) = *r.shape();
    if qm != m || rk != k || rn != n || *perm.shape() != (n, n) {
        return false;
    }

    is_orthogonal(q, tolerance)
        && is_permutation_matrix(perm)
        && is_reconstruction_valid(original, q, r, perm, tolerance)
}

/// Check that the columns of a matrix are orthonormal
pub fn is_orthogonal<T: Precision>(matrix: &Tensor<T, (usize, usize)>, tolerance: T) -> bool {
    let (rows, k) = *matrix.shape();

    for i in 0..k {
        for j in 0..k {
            let mut sum = T::zero();
            for row in 0..rows {
                sum = sum + matrix[[row, i]] * matrix[[row, j]];
            }
            let expected = if i == j { T::one() } else { T::zero() };
            if Precision::abs(sum - expected) > tolerance {
                return false;
            }
        }
    }

    true
}

/// Check that every row and column holds exactly one 1 and zeros elsewhere
pub fn is_permutation_matrix<T: Precision>(matrix: &Tensor<T, (usize, usize)>) -> bool {
    let (m, n) = *matrix.shape();
    if m != n {
        return false;
    }
    let mut row_hits = vec![0usize; n];
    let mut col_hits = vec![0usize; n];
    for i in 0..n {
        for j in 0..n {
            let val = matrix[[i, j]];
            if val == T::one() {
                row_hits[i] += 1;
                col_hits[j] += 1;
            } else if val != T::zero() {
                return false;
            }
        }
    }
    row_hits.iter().chain(col_hits.iter()).all(|&hits| hits == 1)
}

/// Check that `||A * P - Q * R||_F <= tolerance * ||A||_F`
fn is_reconstruction_valid<T: Precision>(
    original: &Tensor<T, (usize, usize)>,
    q: &Tensor<T, (usize, usize)>,
    r: &Tensor<T, (usize, usize)>,
    perm: &Tensor<T, (usize, usize)>,
    tolerance: T,
) -> bool {
    let (m, n) = *original.shape();
    let k = q.shape().1;

    let mut diff_norm_sq = T::zero();
    let mut orig_norm_sq = T::zero();

    for i in 0..m {
        for j in 0..n {
            let mut ap = T::zero();
            for l in 0..n {
                ap = ap + original[[i, l]] * perm[[l, j]];
            }
            let mut qr = T::zero();
            for l in 0..k {
                qr = qr + q[[i, l]] * r[[l, j]];
            }

            let diff = ap - qr;
            diff_norm_sq = diff_norm_sq + diff * diff;
            orig_norm_sq = orig_norm_sq + original[[i, j]] * original[[i, j]];
        }
    }

    let diff_norm = Precision::sqrt(diff_norm_sq);
    let orig_norm = Precision::sqrt(orig_norm_sq);

    if orig_norm == T::zero() {
        diff_norm <= tolerance
    } else {
        diff_norm <= tolerance * orig_norm
    }
}
