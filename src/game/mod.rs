//! Core Connect Four game logic: stacked-column board, players, move records,
//! and the turn-loop engine.

mod board;
mod engine;
mod moves;
mod player;

pub use board::{Board, Cell, Columns};
pub use engine::{GameEngine, GameOutcome};
pub use moves::Move;
pub use player::Player;
