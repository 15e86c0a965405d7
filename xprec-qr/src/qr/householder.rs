//! Householder reflection utilities for QR decomposition

use crate::precision::Precision;
use crate::utils::norms::squared_norm;
use crate::utils::view::MatMut;

/// Compute a Householder reflection in place
///
/// Given a vector x, computes H = I - τ w w^T with w = [1, x[1..]]
/// such that H x = [β, 0, ..., 0]^T with |β| = ||x||.
/// On return `x[1..]` holds the essential part of w and `x[0] = β`.
///
/// Returns (τ, β). If the tail of x is zero (or empty) the reflection is the
/// identity: τ = 0 and β = x[0].
pub fn reflector<T: Precision>(x: &mut [T]) -> (T, T) {
    let Some((head, tail)) = x.split_first_mut() else {
        return (T::zero(), T::zero());
    };

    let x0 = *head;
    let tail_sq_norm = squared_norm(tail);

    if tail_sq_norm <= <T as Precision>::min_positive() {
        for v in tail.iter_mut() {
            *v = T::zero();
        }
        return (T::zero(), x0);
    }

    // β takes the sign opposite to x0 so that x0 - β does not cancel
    let mut beta = Precision::sqrt(x0 * x0 + tail_sq_norm);
    if x0 >= T::zero() {
        beta = -beta;
    }

    let scale = x0 - beta;
    for v in tail.iter_mut() {
        *v = *v / scale;
    }
    *head = beta;

    let tau = (beta - x0) / beta;
    (tau, beta)
}

/// Apply Householder reflection to a matrix block
///
/// Applies H = I - τ w w^T from the left, A = H * A, where w = [1, tail]
/// and `tail.len() == a.nrows() - 1`.
pub fn reflector_apply<T: Precision>(tail: &[T], tau: T, mut a: MatMut<'_, T>) {
    let m = a.nrows();
    let n = a.ncols();

    if m == 0 || n == 0 || tau == T::zero() {
        return;
    }
    debug_assert_eq!(tail.len(), m - 1);

    for j in 0..n {
        let col = a.col_mut(j);
        let (head, rest) = col.split_at_mut(1);

        // vaj = τ (A(0, j) + w[1..] . A[1.., j])
        let mut vaj = head[0];
        for (&w, &v) in tail.iter().zip(rest.iter()) {
            vaj = vaj + w * v;
        }
        vaj = tau * vaj;

        head[0] = head[0] - vaj;
        for (&w, v) in tail.iter().zip(rest.iter_mut()) {
            *v = *v - vaj * w;
        }
    }
}
