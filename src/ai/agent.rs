use crate::error::AgentError;
use crate::game::{Board, Player};

/// Universal interface for all playing agents.
///
/// An agent owns no board state between calls; everything it needs to decide
/// is in the `Board` it is handed. The returned column must currently be
/// playable (`column_height < height`) — the engine validates this and treats
/// a violation as a fatal integration error.
pub trait Agent {
    /// The side this agent plays.
    fn player(&self) -> Player;

    /// Choose a playable column for the current position.
    fn next_move(&mut self, board: &Board) -> Result<usize, AgentError>;

    /// Display name for match announcements and logs.
    fn name(&self) -> &str;

    /// Reset any internal randomness to a known seed. Called once per game
    /// by the driving loop so a replay with the same seed produces the same
    /// move sequence. Deterministic agents ignore it.
    fn reseed(&mut self, _seed: u64) {}
}
