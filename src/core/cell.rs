//! Grid cell coordinates.
//!
//! Every square on the board is identified by a `Cell`: a (row, column)
//! pair. Cells are plain values: equality and hashing go by coordinate,
//! and the `Ord` derive gives row-major ordering, which the engine relies
//! on for deterministic iteration and tie-breaking.
//!
//! ## Usage
//!
//! ```
//! use sweepmind::Cell;
//!
//! let a = Cell::new(0, 1);
//! let b = Cell::new(1, 0);
//!
//! // Row-major ordering: all of row 0 sorts before row 1
//! assert!(a < b);
//! assert_eq!(a.to_string(), "(0, 1)");
//! ```

use serde::{Deserialize, Serialize};

/// A board coordinate: `row` then `col`, both zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a cell at the given coordinates.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
