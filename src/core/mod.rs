//! Core value types: cells, grid geometry, RNG.
//!
//! These are the building blocks shared by the knowledge base, the board
//! oracle, and the agent. None of them carry game state of their own.

pub mod cell;
pub mod grid;
pub mod rng;

pub use cell::Cell;
pub use grid::Grid;
pub use rng::{GameRng, GameRngState};
