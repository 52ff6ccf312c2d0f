//! The driving loop: an agent playing one board to completion.
//!
//! Each step asks the knowledge base for a move (a provably safe cell if
//! one is known, otherwise a uniform random guess among cells not proven
//! to be mines), then probes the board. Probing a mine ends the game as a
//! loss immediately; a clear probe is fed back via `observe`. The game is
//! won once every non-mine cell has been probed.

use log::debug;

use crate::board::{Board, Reveal};
use crate::core::{Cell, GameRng};
use crate::kb::{KnowledgeBase, KnowledgeError};

/// A chosen move and how it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// The cell is proven safe.
    Safe(Cell),
    /// Nothing is provably safe; this is a uniform random guess.
    Guess(Cell),
}

impl Move {
    /// The cell this move probes.
    #[must_use]
    pub fn cell(self) -> Cell {
        match self {
            Move::Safe(cell) | Move::Guess(cell) => cell,
        }
    }
}

/// What one step of play did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A cell was probed and found clear, with this neighbor mine count.
    Played { mv: Move, adjacent: u8 },
    /// A probe hit a mine. The game is lost.
    Exploded(Cell),
    /// Every non-mine cell has been probed. The game is won.
    Won,
    /// No safe cell is known and nothing is left to guess.
    Stuck,
}

/// Final result of a played-out session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every non-mine cell was probed.
    Won,
    /// This probe hit a mine.
    Lost(Cell),
    /// No further logical or guessable progress was possible.
    Stuck,
}

/// One game session: a board, the knowledge accumulated against it, and
/// the RNG driving guesses.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    kb: KnowledgeBase,
    rng: GameRng,
}

impl Session {
    /// Start a session on the given board with a seeded guess RNG.
    #[must_use]
    pub fn new(board: Board, seed: u64) -> Self {
        let kb = KnowledgeBase::new(board.grid());
        Self {
            board,
            kb,
            rng: GameRng::new(seed),
        }
    }

    /// The underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The knowledge accumulated so far.
    #[must_use]
    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Whether every non-mine cell has been probed.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.kb.visited().len() == self.board.grid().area() - self.board.mine_count()
    }

    /// The next move: a proven-safe cell when one exists, otherwise a
    /// random guess. `None` when nothing is left to probe or guess.
    pub fn next_move(&mut self) -> Option<Move> {
        if let Some(cell) = self.kb.choose_safe_move() {
            return Some(Move::Safe(cell));
        }
        self.kb.choose_random_move(&mut self.rng).map(Move::Guess)
    }

    /// Play one move.
    ///
    /// Errors only on contradictory observations, which with a consistent
    /// board means a bug rather than a losable game state.
    pub fn step(&mut self) -> Result<Step, KnowledgeError> {
        if self.has_won() {
            return Ok(Step::Won);
        }
        let mv = match self.next_move() {
            Some(mv) => mv,
            None => return Ok(Step::Stuck),
        };

        let cell = mv.cell();
        match self.board.probe(cell) {
            Reveal::Mine => {
                debug!("probe {cell}: mine ({mv:?})");
                Ok(Step::Exploded(cell))
            }
            Reveal::Clear(adjacent) => {
                debug!("probe {cell}: clear, {adjacent} adjacent ({mv:?})");
                self.kb.observe(cell, adjacent)?;
                Ok(Step::Played { mv, adjacent })
            }
        }
    }

    /// Play until the game is won, lost, or stuck.
    pub fn play(&mut self) -> Result<Outcome, KnowledgeError> {
        loop {
            match self.step()? {
                Step::Played { .. } => {}
                Step::Won => return Ok(Outcome::Won),
                Step::Exploded(cell) => return Ok(Outcome::Lost(cell)),
                Step::Stuck => return Ok(Outcome::Stuck),
            }
        }
    }
}
