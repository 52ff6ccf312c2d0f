//! Ground-truth board: the oracle the agent plays against.
//!
//! The board knows where every mine actually is. The knowledge base never
//! sees it directly; the driving loop probes one cell at a time and feeds
//! the result back as an observation. A board is either generated randomly
//! from an injected RNG or built from a fixed layout for tests.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameRng, Grid};

/// Result of probing a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// The cell holds a mine; the game is over.
    Mine,
    /// The cell is clear, with this many mines among its 8-neighbors.
    Clear(u8),
}

/// A fixed mine layout on a grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    mines: FxHashSet<Cell>,
}

impl Board {
    /// Place `mine_count` mines uniformly at random.
    ///
    /// `mine_count` must be strictly less than the grid area, so at least
    /// one cell is always clear.
    #[must_use]
    pub fn random(grid: Grid, mine_count: usize, rng: &mut GameRng) -> Self {
        assert!(
            mine_count < grid.area(),
            "Mine count must leave at least one clear cell"
        );

        let mut mines = FxHashSet::default();
        while mines.len() < mine_count {
            let row = rng.gen_range_usize(0..grid.height());
            let col = rng.gen_range_usize(0..grid.width());
            mines.insert(Cell::new(row, col));
        }
        Self { grid, mines }
    }

    /// Build a board from an explicit mine layout.
    ///
    /// Every mine must lie inside the grid, and at least one cell must
    /// stay clear.
    #[must_use]
    pub fn with_mines(grid: Grid, mines: impl IntoIterator<Item = Cell>) -> Self {
        let mines: FxHashSet<Cell> = mines.into_iter().collect();
        for &mine in &mines {
            assert!(grid.contains(mine), "Mine {mine} lies outside the grid");
        }
        assert!(
            mines.len() < grid.area(),
            "Mine count must leave at least one clear cell"
        );
        Self { grid, mines }
    }

    /// The board's grid dimensions.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Total number of mines.
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Whether the cell holds a mine.
    #[must_use]
    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Number of mines among the cell's 8-neighbors, the cell itself
    /// excluded.
    #[must_use]
    pub fn adjacent_mines(&self, cell: Cell) -> u8 {
        self.grid
            .neighbors(cell)
            .iter()
            .filter(|n| self.mines.contains(*n))
            .count() as u8
    }

    /// Probe a cell: a mine, or its neighbor mine count.
    #[must_use]
    pub fn probe(&self, cell: Cell) -> Reveal {
        if self.is_mine(cell) {
            Reveal::Mine
        } else {
            Reveal::Clear(self.adjacent_mines(cell))
        }
    }
}
