//! Storage, reductions and checks shared by the QR routines

pub mod norms;
pub mod pivoting;
pub mod validation;
pub mod view;

pub use norms::{argmax, max_value, norm_2, norm_frobenius, norm_max, squared_norm};
pub use pivoting::{
    apply_column_permutation, invert_permutation, permutation_matrix, transpositions_to_permutation,
};
pub use validation::{is_orthogonal, is_permutation_matrix, validate_qr};
pub use view::{ColMajor, MatMut};
