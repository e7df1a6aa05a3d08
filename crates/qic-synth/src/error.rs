//! Error types for QIC synthesis.

use thiserror::Error;

/// Errors that can occur while building quality indicator circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QicError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] qic_ir::IrError),

    /// Configured two-qubit gate is not one of cx, ecr, cz.
    #[error("2-qubit gate '{0}' not recognized (expected one of: cx, ecr, cz)")]
    UnrecognizedGateKind(String),

    /// Ratio normalization over a circuit without two-qubit interactions.
    #[error("Cannot reduce by ratio: circuit has no two-qubit interactions")]
    DivisionUndefined,
}

/// Result type for QIC operations.
pub type QicResult<T> = Result<T, QicError>;

#[cfg(test)]
mod tests {
    use super::*;
    use qic_ir::{IrError, QubitId};

    #[test]
    fn test_unrecognized_gate_names_value() {
        let err = QicError::UnrecognizedGateKind("xyz".into());
        assert!(err.to_string().contains("'xyz'"));
    }

    #[test]
    fn test_ir_error_conversion() {
        let err: QicError = IrError::QubitNotFound {
            qubit: QubitId(4),
            gate_name: Some("cz".into()),
        }
        .into();
        assert!(matches!(err, QicError::Ir(_)));
        assert!(err.to_string().starts_with("IR error: Qubit q4"));
    }
}
