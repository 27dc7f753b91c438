use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AgentError;
use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from the playable columns.
pub struct RandomAgent {
    player: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(player: Player) -> Self {
        RandomAgent {
            player,
            rng: StdRng::from_os_rng(),
        }
    }

    /// A random agent with a fixed seed, for reproducible games.
    pub fn seeded(player: Player, seed: u64) -> Self {
        RandomAgent {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn next_move(&mut self, board: &Board) -> Result<usize, AgentError> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(AgentError::NoPlayableColumn);
        }
        let idx = self.rng.random_range(0..moves.len());
        Ok(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
