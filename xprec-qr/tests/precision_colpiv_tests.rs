//! Parameterized column-pivoted QR tests for f32, f64 and TwoFloat precision

use mdarray::Tensor;
use xprec_qr::precision::{Precision, TwoFloatPrecision};
use xprec_qr::utils::{is_orthogonal, is_permutation_matrix, validate_qr};
use xprec_qr::*;

// ===== Helper Functions =====

/// Hilbert matrix H[i, j] = 1 / (i + j + 1), evaluated in T
fn hilbert<T: Precision>(m: usize, n: usize) -> Tensor<T, (usize, usize)> {
    Tensor::from_fn((m, n), |idx| T::one() / T::from_f64((idx[0] + idx[1] + 1) as f64))
}

fn to_f64_matrix<T: Precision>(matrix: &Tensor<T, (usize, usize)>) -> Tensor<f64, (usize, usize)> {
    let (m, n) = *matrix.shape();
    Tensor::from_fn((m, n), |idx| matrix[[idx[0], idx[1]]].to_f64())
}

// ===== Test Templates =====

fn test_hilbert_reconstruction_template<T: Precision>(m: usize, n: usize, tol: f64) {
    let a = hilbert::<T>(m, n);
    let qr = decompose(a.clone()).unwrap();
    let tol = T::from_f64(tol);

    assert!(is_orthogonal(&qr.q(), tol));
    assert!(is_permutation_matrix(&qr.permut));
    assert!(validate_qr(&a, &qr.q(), &qr.r(), &qr.permut, tol));
}

fn test_degenerate_template<T: Precision>() {
    let five = Tensor::from_fn((1, 1), |_| T::from_f64(5.0));
    let qr = decompose(five).unwrap();
    assert_eq!(Precision::abs(qr.qr[[0, 0]]).to_f64(), 5.0);
    assert!(qr.coeffs[[0]] == T::zero());
    assert!(qr.permut[[0, 0]] == T::one());

    let zero = Tensor::from_fn((3, 2), |_| T::zero());
    let qr = decompose(zero).unwrap();
    assert_eq!(qr.nonzero_pivots(), 0);
    assert!(qr.qr[[0, 0]] == T::zero());
    assert!(qr.qr[[1, 1]] == T::zero());
}

fn test_diagonal_decreases_template<T: Precision>() {
    // the first Hilbert column has the largest norm and the diagonal of R decays
    let qr = decompose(hilbert::<T>(6, 6)).unwrap();
    assert_eq!(qr.transpositions()[0], 0);

    let r = to_f64_matrix(&qr.r());
    for k in 1..6 {
        assert!(r[[k, k]].abs() <= r[[k - 1, k - 1]].abs() * (1.0 + 1e-6));
    }
}

// ===== f32 =====

#[test]
fn test_hilbert_reconstruction_f32() {
    test_hilbert_reconstruction_template::<f32>(5, 5, 1e-5);
    test_hilbert_reconstruction_template::<f32>(6, 3, 1e-5);
}

#[test]
fn test_degenerate_f32() {
    test_degenerate_template::<f32>();
}

// ===== f64 =====

#[test]
fn test_hilbert_reconstruction_f64() {
    test_hilbert_reconstruction_template::<f64>(5, 5, 1e-13);
    test_hilbert_reconstruction_template::<f64>(3, 7, 1e-13);
}

#[test]
fn test_degenerate_f64() {
    test_degenerate_template::<f64>();
}

#[test]
fn test_diagonal_decreases_f64() {
    test_diagonal_decreases_template::<f64>();
}

// ===== TwoFloat =====

#[test]
fn test_hilbert_reconstruction_twofloat() {
    test_hilbert_reconstruction_template::<TwoFloatPrecision>(5, 5, 1e-24);
    test_hilbert_reconstruction_template::<TwoFloatPrecision>(7, 4, 1e-24);
}

#[test]
fn test_degenerate_twofloat() {
    test_degenerate_template::<TwoFloatPrecision>();
}

#[test]
fn test_diagonal_decreases_twofloat() {
    test_diagonal_decreases_template::<TwoFloatPrecision>();
}

#[test]
fn test_twofloat_agrees_with_f64_determinant() {
    // |det H| is the product of the pivots whatever order they were taken in
    let h64 = decompose(hilbert::<f64>(8, 8)).unwrap();
    let h2f = decompose(hilbert::<TwoFloatPrecision>(8, 8)).unwrap();

    assert_eq!(h2f.nonzero_pivots(), 8);
    let mut det64 = 1.0;
    let mut det2f = TwoFloatPrecision::from_f64(1.0);
    for k in 0..8 {
        det64 *= h64.qr[[k, k]].abs();
        det2f = det2f * Precision::abs(h2f.qr[[k, k]]);
    }
    let det2f = det2f.to_f64();
    assert!(det2f > 0.0 && det2f < 1e-30);
    assert!(((det2f - det64) / det2f).abs() < 1e-4);
}

// ===== Runtime dispatch =====

#[test]
fn test_decompose_any_matches_generic() {
    let a = hilbert::<f64>(4, 3);
    let generic = decompose(a.clone()).unwrap();

    match decompose_any(AnyMatrix::F64(a)).unwrap() {
        AnyColPivQR::F64(qr) => {
            assert_eq!(qr.transpositions(), generic.transpositions());
            assert_eq!(qr.qr[[2, 2]], generic.qr[[2, 2]]);
        }
        other => panic!("unexpected variant {:?}", other.element_type()),
    }

    let twofloat = decompose_any(AnyMatrix::TwoFloat(hilbert::<TwoFloatPrecision>(3, 3))).unwrap();
    assert_eq!(twofloat.element_type(), ElementType::TwoFloat);
}

#[test]
fn test_decompose_any_rejects_integers() {
    let ints = Tensor::from_fn((2, 2), |idx| (idx[0] + idx[1]) as i64);
    assert_eq!(
        decompose_any(AnyMatrix::I64(ints)).unwrap_err(),
        QrError::UnsupportedElementType(ElementType::I64)
    );

    let empty = Tensor::<f32, (usize, usize)>::from_elem((2, 0), 0.0);
    assert_eq!(
        decompose_any(AnyMatrix::F32(empty)).unwrap_err(),
        QrError::InvalidShape { rows: 2, cols: 0 }
    );
}
