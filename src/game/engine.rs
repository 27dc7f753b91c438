use tracing::{debug, info};

use crate::ai::Agent;
use crate::error::GameError;

use super::{Board, Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Turn-loop orchestrator: alternates two agents on a shared board until one
/// of them completes four-in-a-row or the board fills up.
///
/// After [`GameEngine::play`] returns, the engine is read-only for reporting:
/// the final position via [`GameEngine::board`] and the committed moves via
/// [`GameEngine::history`].
pub struct GameEngine {
    board: Board,
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
    history: Vec<Move>,
}

impl GameEngine {
    /// Create an engine for a fresh game on a `width x height` board.
    ///
    /// `red` moves first (even turns), `yellow` second (odd turns); their
    /// declared players must match those seats.
    pub fn new(width: usize, height: usize, red: Box<dyn Agent>, yellow: Box<dyn Agent>) -> Self {
        assert_eq!(red.player(), Player::Red, "first agent must play Red");
        assert_eq!(
            yellow.player(),
            Player::Yellow,
            "second agent must play Yellow"
        );

        GameEngine {
            board: Board::new(width, height),
            red,
            yellow,
            history: Vec::with_capacity(width * height),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play the game to completion.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        self.play_with(|_, _| {})
    }

    /// Play the game to completion, invoking `observer` with the board and
    /// the committed move after every turn (rendering hook, no feedback into
    /// gameplay).
    pub fn play_with<F>(&mut self, mut observer: F) -> Result<GameOutcome, GameError>
    where
        F: FnMut(&Board, &Move),
    {
        let max_turns = self.board.capacity();
        for turn in 0..max_turns {
            let agent = if turn % 2 == 0 {
                &mut self.red
            } else {
                &mut self.yellow
            };
            let player = agent.player();

            let column = agent.next_move(&self.board)?;

            // Defensive validation at the engine boundary: an agent that
            // returns a full or out-of-range column is a fatal integration
            // error, not something to clamp or retry.
            if column >= self.board.width() || self.board.column_height(column) >= self.board.height()
            {
                return Err(GameError::IllegalMove { player, column });
            }

            let row = self.board.column_height(column);
            let won = self.board.insert(player, column);

            let mv = Move::new(player, column, row, turn);
            debug!(%mv, "move committed");
            self.history.push(mv);
            observer(&self.board, &mv);

            if won {
                info!(winner = %player, turns = turn + 1, "game over");
                return Ok(GameOutcome::Winner(player));
            }
        }

        info!(turns = max_turns, "game over, board full");
        Ok(GameOutcome::Draw)
    }
}
