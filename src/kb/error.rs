//! Errors surfaced by the knowledge base.
//!
//! Two failure classes, kept distinct on purpose:
//!
//! - Invalid calls (`OutOfBounds`, `AlreadyObserved`) are rejected before
//!   any mutation; the knowledge base is left exactly as it was.
//! - Contradictions (`ConflictingFact`, `ImpossibleCount`) mean the
//!   reported observations cannot all be true for any mine placement.
//!   They are fatal: derived facts are unconditional, so there is no
//!   partial state worth rolling back once one is wrong.
//!
//! "No move available" is not an error; move selection returns `Option`.

use thiserror::Error;

use crate::core::Cell;

/// Errors emitted by [`KnowledgeBase`](crate::kb::KnowledgeBase) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    /// The observed cell lies outside the grid.
    #[error("cell {cell} lies outside the {height}x{width} grid")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    /// The cell was already observed; re-observation is a caller bug.
    #[error("cell {0} has already been observed")]
    AlreadyObserved(Cell),

    /// A cell was implied to be both safe and a mine.
    #[error("contradiction: cell {0} is implied to be both safe and a mine")]
    ConflictingFact(Cell),

    /// A constraint ended up requiring more mines than it has cells.
    #[error("contradiction: a constraint requires more mines than it has cells")]
    ImpossibleCount,
}

impl KnowledgeError {
    /// Whether this error signals inconsistent observations rather than a
    /// malformed call.
    #[must_use]
    pub fn is_contradiction(&self) -> bool {
        matches!(
            self,
            KnowledgeError::ConflictingFact(_) | KnowledgeError::ImpossibleCount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contradiction_classification() {
        let cell = Cell::new(0, 0);

        assert!(KnowledgeError::ConflictingFact(cell).is_contradiction());
        assert!(KnowledgeError::ImpossibleCount.is_contradiction());
        assert!(!KnowledgeError::AlreadyObserved(cell).is_contradiction());
        assert!(!KnowledgeError::OutOfBounds {
            cell,
            height: 2,
            width: 2
        }
        .is_contradiction());
    }

    #[test]
    fn test_display_names_the_cell() {
        let err = KnowledgeError::AlreadyObserved(Cell::new(1, 2));
        assert_eq!(err.to_string(), "cell (1, 2) has already been observed");
    }
}
