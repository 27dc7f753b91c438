use std::fmt;

use super::Player;

/// A committed move: who played, where the token landed, and on which turn.
/// The row is resolved by the board at insertion time, never by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub turn: usize,
}

impl Move {
    pub fn new(player: Player, column: usize, row: usize, turn: usize) -> Self {
        Move {
            player,
            column,
            row,
            turn,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} => ({}, {})",
            self.turn, self.player, self.column, self.row
        )
    }
}
