//! The knowledge base: observation intake and the propagation fixed point.
//!
//! ## What it knows
//!
//! - `visited`: cells the agent has already probed
//! - `known_safe` / `known_mine`: cells proven one way or the other;
//!   both grow monotonically and never intersect
//! - `constraints`: the working set of "exactly N of these cells are
//!   mines" statements, in insertion order
//!
//! ## How it reasons
//!
//! Each `observe` adds one constraint over the observed cell's unrevealed
//! neighborhood, then runs two rules to a fixed point:
//!
//! 1. **Direct discharge**: a constraint with count 0 proves all its
//!    cells safe; one whose count equals its size proves them all mines.
//!    Every new fact is broadcast into every constraint in the working
//!    set, shrinking it.
//! 2. **Subset resolution**: when A strictly contains B, the cells
//!    exclusive to A hold exactly `A.count - B.count` mines.
//!
//! The loop is explicitly iterative (no recursion) and terminates because
//! cells only ever move from unknown to resolved and derived constraints
//! are deduplicated. Iteration order is insertion order for constraints
//! and coordinate order for cells, so identical observation sequences
//! produce identical knowledge.
//!
//! Inference is sound but deliberately not complete: it never labels a
//! cell without proof, and it may leave genuinely ambiguous cells
//! unknown.

use std::collections::BTreeSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::error::KnowledgeError;
use crate::core::{Cell, GameRng, Grid};

/// Constraint-propagation knowledge base for one game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KnowledgeBase {
    grid: Grid,
    visited: BTreeSet<Cell>,
    known_safe: BTreeSet<Cell>,
    known_mine: BTreeSet<Cell>,
    constraints: Vec<Constraint>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base for the given grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            visited: BTreeSet::new(),
            known_safe: BTreeSet::new(),
            known_mine: BTreeSet::new(),
            constraints: Vec::new(),
        }
    }

    /// The grid this knowledge base reasons over.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Cells already probed.
    #[must_use]
    pub fn visited(&self) -> &BTreeSet<Cell> {
        &self.visited
    }

    /// Cells proven not to be mines.
    #[must_use]
    pub fn known_safe(&self) -> &BTreeSet<Cell> {
        &self.known_safe
    }

    /// Cells proven to be mines.
    #[must_use]
    pub fn known_mine(&self) -> &BTreeSet<Cell> {
        &self.known_mine
    }

    /// The live constraint working set, in insertion order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Ingest an observation: `cell` was probed and has `count` mines
    /// among its 8-neighbors.
    ///
    /// Invalid calls (out-of-bounds or repeated cells) are rejected before
    /// any mutation. A contradiction error means the observations reported
    /// so far cannot all be true for any mine placement; the knowledge
    /// base must be discarded.
    pub fn observe(&mut self, cell: Cell, count: u8) -> Result<(), KnowledgeError> {
        if !self.grid.contains(cell) {
            return Err(KnowledgeError::OutOfBounds {
                cell,
                height: self.grid.height(),
                width: self.grid.width(),
            });
        }
        if self.visited.contains(&cell) {
            return Err(KnowledgeError::AlreadyObserved(cell));
        }
        // A legal probe of a cell the engine has proven to be a mine
        // cannot happen with a consistent oracle.
        if self.known_mine.contains(&cell) {
            return Err(KnowledgeError::ConflictingFact(cell));
        }

        debug!("observe {cell}: {count} mines adjacent");
        self.visited.insert(cell);
        self.mark_safe(cell)?;

        // The frontier keeps cells already known to be mines; the oracle's
        // count includes them, so they are discharged out of the fresh
        // constraint below rather than pre-filtered.
        let frontier: BTreeSet<Cell> = self
            .grid
            .neighbors(cell)
            .into_iter()
            .filter(|n| !self.known_safe.contains(n))
            .collect();

        let mut constraint = Constraint::new(frontier, count as usize);
        for &mine in &self.known_mine {
            constraint.resolve_as_mine(mine)?;
        }
        if constraint.count() > constraint.len() {
            return Err(KnowledgeError::ImpossibleCount);
        }

        trace!("new constraint {constraint}");
        self.constraints.push(constraint);
        self.propagate()
    }

    /// A provably safe cell that has not been probed yet, if any.
    ///
    /// Deterministic: the smallest such coordinate. Mutates nothing.
    #[must_use]
    pub fn choose_safe_move(&self) -> Option<Cell> {
        self.known_safe
            .iter()
            .find(|cell| !self.visited.contains(*cell))
            .copied()
    }

    /// A uniformly random cell among those neither probed nor proven to
    /// be mines, if any remain.
    ///
    /// Mutates nothing beyond consuming randomness from `rng`.
    #[must_use]
    pub fn choose_random_move(&self, rng: &mut GameRng) -> Option<Cell> {
        let candidates: Vec<Cell> = self
            .grid
            .cells()
            .filter(|cell| !self.visited.contains(cell) && !self.known_mine.contains(cell))
            .collect();
        rng.choose(&candidates).copied()
    }

    /// Prove `cell` safe and broadcast the fact into every constraint.
    ///
    /// Returns whether the fact was new.
    fn mark_safe(&mut self, cell: Cell) -> Result<bool, KnowledgeError> {
        if self.known_mine.contains(&cell) {
            return Err(KnowledgeError::ConflictingFact(cell));
        }
        if !self.known_safe.insert(cell) {
            return Ok(false);
        }
        trace!("{cell} proven safe");
        for constraint in &mut self.constraints {
            constraint.resolve_as_safe(cell);
        }
        Ok(true)
    }

    /// Prove `cell` a mine and broadcast the fact into every constraint.
    ///
    /// Returns whether the fact was new.
    fn mark_mine(&mut self, cell: Cell) -> Result<bool, KnowledgeError> {
        if self.known_safe.contains(&cell) {
            return Err(KnowledgeError::ConflictingFact(cell));
        }
        if !self.known_mine.insert(cell) {
            return Ok(false);
        }
        trace!("{cell} proven mine");
        for constraint in &mut self.constraints {
            constraint.resolve_as_mine(cell)?;
        }
        Ok(true)
    }

    /// Run direct discharge and subset resolution until a full cycle
    /// changes nothing.
    fn propagate(&mut self) -> Result<(), KnowledgeError> {
        loop {
            let discharged = self.discharge()?;
            let derived = self.resolve_subsets()?;
            if !discharged && !derived {
                return Ok(());
            }
        }
    }

    /// Direct-discharge loop: drain every constraint that pins all of its
    /// remaining cells down, until a scan finds nothing new.
    ///
    /// Emptied constraints are dropped; a constraint requiring more mines
    /// than it has cells is a contradiction, never silently dropped.
    fn discharge(&mut self) -> Result<bool, KnowledgeError> {
        let mut any_progress = false;
        loop {
            let mut mines = BTreeSet::new();
            let mut safes = BTreeSet::new();
            for constraint in &self.constraints {
                if constraint.count() > constraint.len() {
                    return Err(KnowledgeError::ImpossibleCount);
                }
                mines.extend(constraint.known_mines());
                safes.extend(constraint.known_safes());
            }
            self.constraints.retain(|c| !c.is_empty());

            if mines.is_empty() && safes.is_empty() {
                return Ok(any_progress);
            }
            any_progress = true;

            // Mines first: a cell collected in both sets must surface as
            // a contradiction, not win by ordering.
            for cell in mines {
                self.mark_mine(cell)?;
            }
            for cell in safes {
                self.mark_safe(cell)?;
            }
        }
    }

    /// One subset-resolution sweep over all ordered constraint pairs.
    ///
    /// When A strictly contains B, derives `(A.cells - B.cells,
    /// A.count - B.count)`.
    /// Derived constraints already present in the working set (by
    /// cell-set + count equality) are skipped. Returns whether anything
    /// new was added.
    fn resolve_subsets(&mut self) -> Result<bool, KnowledgeError> {
        let mut derived: Vec<Constraint> = Vec::new();
        for a in &self.constraints {
            for b in &self.constraints {
                if a.cells() == b.cells() || !b.cells().is_subset(a.cells()) {
                    continue;
                }
                let diff: BTreeSet<Cell> = a.cells().difference(b.cells()).copied().collect();
                let count = a
                    .count()
                    .checked_sub(b.count())
                    .ok_or(KnowledgeError::ImpossibleCount)?;
                let candidate = Constraint::new(diff, count);
                if !self.constraints.contains(&candidate) && !derived.contains(&candidate) {
                    trace!("derived {candidate} from {a} minus {b}");
                    derived.push(candidate);
                }
            }
        }

        if derived.is_empty() {
            return Ok(false);
        }
        self.constraints.extend(derived);
        Ok(true)
    }
}
