//! # sweepmind
//!
//! A constraint-propagation knowledge base and agent for minesweeper-style
//! deduction games.
//!
//! ## Design Principles
//!
//! 1. **Sound before complete**: the engine only ever labels a cell safe
//!    or mined when the observations prove it. Genuinely ambiguous cells
//!    stay unknown and are left to the guessing policy.
//!
//! 2. **Explicit state, no globals**: each game session constructs its
//!    own `KnowledgeBase` and `Board`; nothing is process-wide.
//!
//! 3. **Deterministic by construction**: constraint iteration follows
//!    insertion order, cell iteration follows coordinate order, and all
//!    randomness flows through a seedable [`GameRng`]. Two runs over the
//!    same observations produce identical knowledge.
//!
//! ## Architecture
//!
//! - **Broadcast resolution**: every proven fact is pushed into every
//!   live constraint by mutation; constraints are owned by the working
//!   set, never shared.
//!
//! - **Iterative fixed point**: direct discharge and subset resolution
//!   alternate in an explicit loop until a full cycle changes nothing:
//!   no recursion, bounded by the number of distinct constraints.
//!
//! ## Modules
//!
//! - `core`: cells, grid geometry, deterministic RNG
//! - `kb`: constraints, the inference engine, error taxonomy
//! - `board`: the ground-truth oracle (mine layout, probing)
//! - `agent`: the driving loop playing a board to completion

pub mod agent;
pub mod board;
pub mod core;
pub mod kb;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, GameRngState, Grid};

pub use crate::kb::{Constraint, KnowledgeBase, KnowledgeError};

pub use crate::board::{Board, Reveal};

pub use crate::agent::{Move, Outcome, Session, Step};
