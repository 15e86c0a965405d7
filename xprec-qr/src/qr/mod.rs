//! QR decomposition with column pivoting

pub mod colpiv;
pub mod householder;
pub mod truncate;

pub use colpiv::{ColPivQR, decompose, decompose_with_options};
pub use householder::{reflector, reflector_apply};
