//! Grid dimensions and neighborhood bookkeeping.
//!
//! `Grid` is a cheap `Copy` value holding the board's height and width.
//! It answers the geometric questions the engine needs: is a cell in
//! bounds, what are its 8-neighbors, and what is the full cell set.
//! Mine placement lives in `board`, knowledge lives in `kb`; the grid
//! itself carries no game state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Cell;

/// Bounded grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
}

impl Grid {
    /// Create a grid of `height` rows and `width` columns.
    ///
    /// Both dimensions must be positive.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0, "Grid height must be positive");
        assert!(width > 0, "Grid width must be positive");
        Self { height, width }
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Total cell count.
    #[must_use]
    pub const fn area(self) -> usize {
        self.height * self.width
    }

    /// Check whether a cell lies inside the grid.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// The up-to-8 in-bounds neighbors of a cell, the cell itself excluded.
    ///
    /// Returned in row-major order.
    #[must_use]
    pub fn neighbors(self, cell: Cell) -> SmallVec<[Cell; 8]> {
        let mut out = SmallVec::new();
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let row = cell.row as i64 + dr;
                let col = cell.col as i64 + dc;
                if row < 0 || col < 0 {
                    continue;
                }
                let neighbor = Cell::new(row as usize, col as usize);
                if self.contains(neighbor) {
                    out.push(neighbor);
                }
            }
        }
        out
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}
