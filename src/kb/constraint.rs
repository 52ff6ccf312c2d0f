//! Logical constraints over board cells.
//!
//! A `Constraint` states: exactly `count` of these cells are mines. The
//! knowledge base accumulates constraints from observations, shrinks them
//! in place as individual cells are proven safe or mined, and derives new
//! ones by subset resolution. An emptied constraint is trivially true and
//! carries no further information.
//!
//! Cells are kept in a `BTreeSet` so iteration order is coordinate order,
//! which keeps the whole inference pipeline deterministic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::KnowledgeError;
use crate::core::Cell;

/// "Exactly `count` of `cells` are mines."
///
/// Equality is by cell set and count, order-independent. Each constraint
/// is owned solely by the knowledge base's working collection; facts are
/// broadcast by mutating every constraint, never by sharing cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    cells: BTreeSet<Cell>,
    count: usize,
}

impl Constraint {
    /// Create a constraint over the given cells.
    #[must_use]
    pub fn new(cells: BTreeSet<Cell>, count: usize) -> Self {
        Self { cells, count }
    }

    /// The remaining unresolved cells.
    #[must_use]
    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    /// How many of the remaining cells are mines.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of remaining cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether every cell has been resolved away.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells this constraint proves to be mines.
    ///
    /// The full cell set when `count` equals the number of cells (and the
    /// set is non-empty), otherwise empty. Pure.
    #[must_use]
    pub fn known_mines(&self) -> BTreeSet<Cell> {
        if !self.cells.is_empty() && self.count == self.cells.len() {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Cells this constraint proves to be safe.
    ///
    /// The full cell set when `count` is zero, otherwise empty. Pure.
    #[must_use]
    pub fn known_safes(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Record that `cell` is a mine: remove it and decrement the count.
    ///
    /// No-op when the cell is not part of this constraint. Errors if the
    /// count would go negative: the constraint claimed zero mines among
    /// cells that include a proven mine.
    pub fn resolve_as_mine(&mut self, cell: Cell) -> Result<(), KnowledgeError> {
        if !self.cells.remove(&cell) {
            return Ok(());
        }
        self.count = self
            .count
            .checked_sub(1)
            .ok_or(KnowledgeError::ConflictingFact(cell))?;
        Ok(())
    }

    /// Record that `cell` is safe: remove it, count unchanged.
    ///
    /// No-op when the cell is not part of this constraint.
    pub fn resolve_as_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}} = {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(usize, usize)]) -> BTreeSet<Cell> {
        coords.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn test_known_mines_when_saturated() {
        let constraint = Constraint::new(cells(&[(0, 0), (0, 1)]), 2);

        assert_eq!(constraint.known_mines(), cells(&[(0, 0), (0, 1)]));
        assert!(constraint.known_safes().is_empty());
    }

    #[test]
    fn test_known_safes_when_count_zero() {
        let constraint = Constraint::new(cells(&[(0, 0), (0, 1)]), 0);

        assert_eq!(constraint.known_safes(), cells(&[(0, 0), (0, 1)]));
        assert!(constraint.known_mines().is_empty());
    }

    #[test]
    fn test_no_terminal_knowledge_in_between() {
        let constraint = Constraint::new(cells(&[(0, 0), (0, 1), (1, 1)]), 1);

        assert!(constraint.known_mines().is_empty());
        assert!(constraint.known_safes().is_empty());
    }

    #[test]
    fn test_empty_constraint_proves_no_mines() {
        // count == len holds vacuously for the empty set; it must not
        // report mines.
        let constraint = Constraint::new(BTreeSet::new(), 0);
        assert!(constraint.known_mines().is_empty());
    }

    #[test]
    fn test_resolve_as_mine() {
        let mut constraint = Constraint::new(cells(&[(0, 0), (0, 1)]), 1);

        constraint.resolve_as_mine(Cell::new(0, 0)).unwrap();

        assert_eq!(constraint.cells(), &cells(&[(0, 1)]));
        assert_eq!(constraint.count(), 0);
    }

    #[test]
    fn test_resolve_as_mine_absent_cell_is_noop() {
        let mut constraint = Constraint::new(cells(&[(0, 0)]), 1);

        constraint.resolve_as_mine(Cell::new(5, 5)).unwrap();

        assert_eq!(constraint.cells(), &cells(&[(0, 0)]));
        assert_eq!(constraint.count(), 1);
    }

    #[test]
    fn test_resolve_as_mine_underflow_is_contradiction() {
        let mut constraint = Constraint::new(cells(&[(0, 0), (0, 1)]), 0);

        let err = constraint.resolve_as_mine(Cell::new(0, 0)).unwrap_err();
        assert!(err.is_contradiction());
    }

    #[test]
    fn test_resolve_as_safe_keeps_count() {
        let mut constraint = Constraint::new(cells(&[(0, 0), (0, 1), (1, 0)]), 1);

        constraint.resolve_as_safe(Cell::new(0, 1));
        constraint.resolve_as_safe(Cell::new(9, 9)); // no-op

        assert_eq!(constraint.cells(), &cells(&[(0, 0), (1, 0)]));
        assert_eq!(constraint.count(), 1);
    }

    #[test]
    fn test_equality_is_order_independent() {
        let a = Constraint::new(cells(&[(0, 0), (1, 1)]), 1);
        let b = Constraint::new(cells(&[(1, 1), (0, 0)]), 1);
        let c = Constraint::new(cells(&[(0, 0), (1, 1)]), 2);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let constraint = Constraint::new(cells(&[(0, 1), (0, 0)]), 1);
        assert_eq!(constraint.to_string(), "{(0, 0), (0, 1)} = 1");
    }

    #[test]
    fn test_serialization() {
        let constraint = Constraint::new(cells(&[(0, 0), (2, 1)]), 1);
        let json = serde_json::to_string(&constraint).unwrap();
        let deserialized: Constraint = serde_json::from_str(&json).unwrap();
        assert_eq!(constraint, deserialized);
    }
}
