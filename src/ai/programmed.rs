use std::collections::VecDeque;

use crate::error::AgentError;
use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that replays a fixed queue of columns, for scripted tests.
/// Running out of moves before the game ends is a test-configuration error.
pub struct ProgrammedAgent {
    player: Player,
    moves: VecDeque<usize>,
}

impl ProgrammedAgent {
    pub fn new<I>(player: Player, moves: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        ProgrammedAgent {
            player,
            moves: moves.into_iter().collect(),
        }
    }

    /// Number of scripted moves left in the queue.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Agent for ProgrammedAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn next_move(&mut self, _board: &Board) -> Result<usize, AgentError> {
        self.moves
            .pop_front()
            .ok_or(AgentError::ScriptExhausted {
                player: self.player,
            })
    }

    fn name(&self) -> &str {
        "Programmed"
    }
}
