//! Domain error types

use thiserror::Error;

/// Umbrella over the engine's fatal failure modes.
///
/// The taxonomy distinguishes precondition failures (bad input, the caller
/// must supply a corrected pool) from invariant violations (internal
/// defects). Residual anchoring adjacency is deliberately *not* an error:
/// it is a structured warning, see
/// [`crate::assignment::reorder::ResidualAdjacency`].
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Selection(#[from] crate::selection::SelectionError),

    #[error(transparent)]
    Partition(#[from] crate::partition::PartitionError),

    #[error(transparent)]
    Assignment(#[from] crate::assignment::ring::AssignmentError),

    #[error(transparent)]
    BlindId(#[from] crate::assignment::blind::BlindIdError),
}

impl DomainError {
    /// Whether the failure is a precondition on the input pool (retryable
    /// with a corrected input set) as opposed to an internal defect.
    pub fn is_precondition(&self) -> bool {
        matches!(self, DomainError::Selection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionError;

    #[test]
    fn test_precondition_classification() {
        let err = DomainError::from(SelectionError::EmptyPool);
        assert!(err.is_precondition());

        let err = DomainError::from(crate::partition::PartitionError::BlockSize {
            label: crate::partition::BlockLabel::A,
            len: 12,
        });
        assert!(!err.is_precondition());
    }
}
