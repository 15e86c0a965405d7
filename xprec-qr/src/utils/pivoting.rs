//! Column pivoting utilities
//!
//! A permutation is stored as a column order `p`: column `j` of `A * P` is
//! column `p[j]` of `A`, and the matching matrix has `P[p[j], j] = 1`.

use mdarray::Tensor;
use crate::precision::Precision;

/// Replay a sequence of column transpositions on the identity order
///
/// Step `k` swaps positions `k` and `transp[k]`, in order.
pub fn transpositions_to_permutation(transp: &[usize], n: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for (k, &t) in transp.iter().enumerate() {
        perm.swap(k, t);
    }
    perm
}

/// Apply column permutation to a matrix, returning `A * P`
pub fn apply_column_permutation<T: Copy>(
    matrix: &Tensor<T, (usize, usize)>,
    permutation: &[usize],
) -> Tensor<T, (usize, usize)> {
    let (m, n) = *matrix.shape();
    assert_eq!(permutation.len(), n);
    Tensor::from_fn((m, n), |idx| matrix[[idx[0], permutation[idx[1]]]])
}

/// Create permutation matrix from a column order
pub fn permutation_matrix<T: Precision>(permutation: &[usize]) -> Tensor<T, (usize, usize)> {
    let n = permutation.len();
    Tensor::from_fn((n, n), |idx| {
        if permutation[idx[1]] == idx[0] { T::one() } else { T::zero() }
    })
}

/// Invert a permutation vector
///
/// Computes `inv_p` such that `inv_p[p[i]] = i` for all i.
pub fn invert_permutation(permutation: &[usize]) -> Vec<usize> {
    let mut inv_p = vec![0; permutation.len()];
    for (i, &p) in permutation.iter().enumerate() {
        inv_p[p] = i;
    }
    inv_p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpositions_replay_in_order() {
        // swap(0,2) then swap(1,2): [0,1,2] -> [2,1,0] -> [2,0,1]
        assert_eq!(transpositions_to_permutation(&[2, 2], 3), vec![2, 0, 1]);
        assert_eq!(transpositions_to_permutation(&[0, 1], 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_apply_column_permutation() {
        let m = Tensor::from_fn((2, 3), |idx| [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]][idx[0]][idx[1]]);
        let permuted = apply_column_permutation(&m, &[2, 0, 1]);
        let expected = [[3.0, 1.0, 2.0], [6.0, 4.0, 5.0]];
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(permuted[[i, j]], expected[i][j]);
            }
        }
    }

    #[test]
    fn test_permutation_matrix() {
        let p = permutation_matrix::<f64>(&[2, 0, 1]);
        let expected = [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(p[[i, j]], expected[i][j]);
            }
        }
    }

    #[test]
    fn test_invert_permutation() {
        assert_eq!(invert_permutation(&[2, 0, 1]), vec![1, 2, 0]);
    }
}
