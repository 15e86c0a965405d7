//! Runtime element-type dispatch
//!
//! For callers that only learn the element type at runtime. Each floating
//! variant forwards to the generic [`decompose`]; integer matrices are
//! rejected before any work is done.

use mdarray::Tensor;

use crate::error::QrError;
use crate::precision::{ElementType, TwoFloatPrecision};
use crate::qr::{ColPivQR, decompose};

/// A matrix whose element type is known only at runtime
#[derive(Debug, Clone)]
pub enum AnyMatrix {
    F32(Tensor<f32, (usize, usize)>),
    F64(Tensor<f64, (usize, usize)>),
    TwoFloat(Tensor<TwoFloatPrecision, (usize, usize)>),
    I32(Tensor<i32, (usize, usize)>),
    I64(Tensor<i64, (usize, usize)>),
}

impl AnyMatrix {
    pub fn element_type(&self) -> ElementType {
        match self {
            AnyMatrix::F32(_) => ElementType::F32,
            AnyMatrix::F64(_) => ElementType::F64,
            AnyMatrix::TwoFloat(_) => ElementType::TwoFloat,
            AnyMatrix::I32(_) => ElementType::I32,
            AnyMatrix::I64(_) => ElementType::I64,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        match self {
            AnyMatrix::F32(m) => *m.shape(),
            AnyMatrix::F64(m) => *m.shape(),
            AnyMatrix::TwoFloat(m) => *m.shape(),
            AnyMatrix::I32(m) => *m.shape(),
            AnyMatrix::I64(m) => *m.shape(),
        }
    }
}

/// Decomposition result in the precision of the input
#[derive(Debug, Clone)]
pub enum AnyColPivQR {
    F32(ColPivQR<f32>),
    F64(ColPivQR<f64>),
    TwoFloat(ColPivQR<TwoFloatPrecision>),
}

impl AnyColPivQR {
    pub fn element_type(&self) -> ElementType {
        match self {
            AnyColPivQR::F32(_) => ElementType::F32,
            AnyColPivQR::F64(_) => ElementType::F64,
            AnyColPivQR::TwoFloat(_) => ElementType::TwoFloat,
        }
    }

    pub fn nonzero_pivots(&self) -> usize {
        match self {
            AnyColPivQR::F32(qr) => qr.nonzero_pivots(),
            AnyColPivQR::F64(qr) => qr.nonzero_pivots(),
            AnyColPivQR::TwoFloat(qr) => qr.nonzero_pivots(),
        }
    }

    pub fn transpositions(&self) -> &[usize] {
        match self {
            AnyColPivQR::F32(qr) => qr.transpositions(),
            AnyColPivQR::F64(qr) => qr.transpositions(),
            AnyColPivQR::TwoFloat(qr) => qr.transpositions(),
        }
    }
}

/// Householder QR with column pivoting for a runtime-typed matrix
///
/// # Errors
/// - [`QrError::UnsupportedElementType`] for integer matrices
/// - [`QrError::InvalidShape`] for matrices without rows or columns
pub fn decompose_any(matrix: AnyMatrix) -> Result<AnyColPivQR, QrError> {
    let element_type = matrix.element_type();
    if !element_type.is_floating_point() {
        log::debug!("rejecting {:?} matrix of shape {:?}", element_type, matrix.shape());
        return Err(QrError::UnsupportedElementType(element_type));
    }

    match matrix {
        AnyMatrix::F32(m) => decompose(m).map(AnyColPivQR::F32),
        AnyMatrix::F64(m) => decompose(m).map(AnyColPivQR::F64),
        AnyMatrix::TwoFloat(m) => decompose(m).map(AnyColPivQR::TwoFloat),
        AnyMatrix::I32(_) | AnyMatrix::I64(_) => Err(QrError::UnsupportedElementType(element_type)),
    }
}
