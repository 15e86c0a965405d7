//! Error types for QR decomposition

use crate::precision::ElementType;

/// Errors raised before a decomposition starts
///
/// Rank deficiency is never an error: it is reported through
/// [`ColPivQR::nonzero_pivots`](crate::ColPivQR::nonzero_pivots).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    #[error("Invalid matrix shape {rows}x{cols}: both dimensions must be at least 1")]
    InvalidShape { rows: usize, cols: usize },

    #[error("Unsupported element type {0:?}: only floating-point matrices can be decomposed")]
    UnsupportedElementType(ElementType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QrError::InvalidShape { rows: 0, cols: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid matrix shape 0x3: both dimensions must be at least 1"
        );

        let err = QrError::UnsupportedElementType(ElementType::I64);
        assert!(err.to_string().contains("I64"));
    }
}
