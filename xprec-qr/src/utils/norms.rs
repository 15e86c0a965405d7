//! Vector and matrix norm computations and reductions

use mdarray::Tensor;
use crate::precision::Precision;

/// Sum of squares of a vector
pub fn squared_norm<T: Precision>(vec: &[T]) -> T {
    let mut sum = T::zero();
    for &val in vec {
        sum = sum + val * val;
    }
    sum
}

/// Compute the 2-norm (Euclidean norm) of a vector
///
/// The empty vector has norm zero.
pub fn norm_2<T: Precision>(vec: &[T]) -> T {
    Precision::sqrt(squared_norm(vec))
}

/// Largest element of a vector
///
/// # Panics
/// Panics if `vec` is empty.
pub fn max_value<T: Precision>(vec: &[T]) -> T {
    vec[argmax(vec)]
}

/// Index of the largest element; the first one wins on ties
///
/// # Panics
/// Panics if `vec` is empty.
pub fn argmax<T: Precision>(vec: &[T]) -> usize {
    let mut max_idx = 0;
    let mut max_val = vec[0];
    for (i, &val) in vec.iter().enumerate().skip(1) {
        if val > max_val {
            max_val = val;
            max_idx = i;
        }
    }
    max_idx
}

/// Compute the Frobenius norm of a matrix
pub fn norm_frobenius<T: Precision>(mat: &Tensor<T, (usize, usize)>) -> T {
    let (m, n) = *mat.shape();
    let mut sum = T::zero();
    for i in 0..m {
        for j in 0..n {
            let val = mat[[i, j]];
            sum = sum + val * val;
        }
    }
    Precision::sqrt(sum)
}

/// Compute the maximum absolute value in a matrix
pub fn norm_max<T: Precision>(mat: &Tensor<T, (usize, usize)>) -> T {
    let (m, n) = *mat.shape();
    let mut max_val = T::zero();
    for i in 0..m {
        for j in 0..n {
            let abs_val = Precision::abs(mat[[i, j]]);
            if abs_val > max_val {
                max_val = abs_val;
            }
        }
    }
    max_val
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_2() {
        assert_abs_diff_eq!(norm_2(&[3.0, 4.0, 0.0]), 5.0, epsilon = 1e-14);
        assert_eq!(norm_2::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_argmax_first_on_ties() {
        assert_eq!(argmax(&[1.0, 3.0, 2.0, 3.0]), 1);
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(max_value(&[-1.0, -0.5, -2.0]), -0.5);
    }

    #[test]
    #[should_panic]
    fn test_argmax_empty_panics() {
        argmax::<f64>(&[]);
    }

    #[test]
    fn test_matrix_norms() {
        let m = Tensor::from_fn((2, 2), |idx| [[3.0, 4.0], [0.0, -5.0]][idx[0]][idx[1]]);
        assert_abs_diff_eq!(norm_frobenius(&m), 50.0_f64.sqrt(), epsilon = 1e-14);
        assert_eq!(norm_max(&m), 5.0);
    }
}
