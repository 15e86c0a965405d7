//! # xprec-qr: Householder QR with full column pivoting
//!
//! Computes `A * P = Q * R` for a dense rectangular matrix, moving the column
//! of largest remaining norm to the front at every step. The factorization is
//! kept in packed form (R above the diagonal, Householder vectors below it)
//! together with the reflection coefficients and the permutation matrix.
//!
//! Works in `f32`, `f64` and double-double (`TwoFloatPrecision`) arithmetic.
//! Uses mdarray for the public matrix types.

pub mod dispatch;
pub mod error;
pub mod precision;
pub mod qr;
pub mod utils;

pub use dispatch::{AnyColPivQR, AnyMatrix, decompose_any};
pub use error::QrError;
pub use precision::{ElementType, Precision, TwoFloatPrecision};
pub use qr::{ColPivQR, decompose, decompose_with_options};
pub use utils::{norm_2, norm_frobenius, norm_max, permutation_matrix};

// Re-export mdarray types
pub use mdarray::Tensor;

// Type aliases for convenience
pub type Matrix = Tensor<f64, (usize, usize)>;
pub type Vector = Tensor<f64, (usize,)>;
