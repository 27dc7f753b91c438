use std::cmp::Ordering;

use tracing::debug;

use crate::error::AgentError;
use crate::game::{Board, Player};

use super::agent::Agent;
use super::heuristic::Heuristic;

/// Red maximizes, Yellow minimizes.
const MAXIMIZER: Player = Player::Red;

/// A propagated search score. Forced outcomes are tagged sentinels rather
/// than magic integers so that decay and negation can never corrupt them.
#[derive(Debug, Clone, Copy)]
enum Score {
    Loss,
    Value(f64),
    Win,
}

impl Score {
    /// Discount a heuristic score by one ply. Terminal sentinels pass
    /// through untouched to preserve the absolute ordering of forced
    /// outcomes.
    fn decay(self, factor: f64) -> Score {
        match self {
            Score::Value(v) => Score::Value(v * factor),
            terminal => terminal,
        }
    }

    fn cmp(self, other: Score) -> Ordering {
        match (self, other) {
            (Score::Win, Score::Win) => Ordering::Equal,
            (Score::Win, _) => Ordering::Greater,
            (_, Score::Win) => Ordering::Less,
            (Score::Loss, Score::Loss) => Ordering::Equal,
            (Score::Loss, _) => Ordering::Less,
            (_, Score::Loss) => Ordering::Greater,
            (Score::Value(a), Score::Value(b)) => a.total_cmp(&b),
        }
    }
}

/// Result of scanning one node's children: the chosen column (if any branch
/// improved on the starting bound) and its score.
#[derive(Debug, Clone, Copy)]
struct Choice {
    column: Option<usize>,
    score: Score,
}

/// Depth-bounded minimax agent with a pluggable frontier heuristic.
///
/// The search speculates directly on one board with a strict insert/score/
/// remove discipline; every branch, including the win short-circuit, removes
/// its trial token before control leaves the loop body.
pub struct MinimaxAgent {
    player: Player,
    depth: u32,
    decay: f64,
    heuristic: Box<dyn Heuristic>,
    steps: u64,
}

impl MinimaxAgent {
    /// `depth` is the ply limit; `decay` (< 1) discounts scores found deeper
    /// in the tree so nearer outcomes win ties against farther ones.
    pub fn new(player: Player, depth: u32, decay: f64, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            player,
            depth,
            decay,
            heuristic,
            steps: 0,
        }
    }

    /// Total `max`/`min` invocations across all moves so far, for reporting.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn max(&mut self, board: &mut Board, depth: u32) -> Choice {
        self.steps += 1;
        let mut best = Choice {
            column: None,
            score: Score::Loss,
        };

        for col in board.available_moves() {
            let won = board.insert(MAXIMIZER, col);
            let score = if won {
                Score::Win
            } else if depth == 0 {
                Score::Value(self.heuristic.evaluate(board, col, MAXIMIZER))
            } else {
                self.min(board, depth - 1).score.decay(self.decay)
            };
            board.remove(col);

            // Strict comparison: ties keep the first-found column
            if score.cmp(best.score) == Ordering::Greater {
                best = Choice {
                    column: Some(col),
                    score,
                };
            }
            if won {
                // No better outcome exists for the maximizer
                break;
            }
        }

        best
    }

    fn min(&mut self, board: &mut Board, depth: u32) -> Choice {
        self.steps += 1;
        let mut best = Choice {
            column: None,
            score: Score::Win,
        };

        for col in board.available_moves() {
            let won = board.insert(MAXIMIZER.other(), col);
            let score = if won {
                Score::Loss
            } else if depth == 0 {
                Score::Value(self.heuristic.evaluate(board, col, MAXIMIZER.other()))
            } else {
                self.max(board, depth - 1).score.decay(self.decay)
            };
            board.remove(col);

            if score.cmp(best.score) == Ordering::Less {
                best = Choice {
                    column: Some(col),
                    score,
                };
            }
            if won {
                break;
            }
        }

        best
    }
}

impl Agent for MinimaxAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn next_move(&mut self, board: &Board) -> Result<usize, AgentError> {
        // One-move opening book: the empty board is symmetric, so skip the
        // full-depth search and take the center.
        if board.is_empty() {
            return Ok(board.width() / 2);
        }

        let mut scratch = board.clone();
        let choice = if self.player == MAXIMIZER {
            self.max(&mut scratch, self.depth)
        } else {
            self.min(&mut scratch, self.depth)
        };
        debug!(
            player = %self.player,
            column = ?choice.column,
            steps = self.steps,
            "search finished"
        );

        match choice.column {
            Some(col) => Ok(col),
            // No branch improved on the starting bound (every line is a
            // forced loss); fall back to the first playable column.
            None => board
                .available_moves()
                .first()
                .copied()
                .ok_or(AgentError::NoPlayableColumn),
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn reseed(&mut self, seed: u64) {
        self.heuristic.reseed(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::heuristic::{NeighborRings, NullHeuristic, RandomHeuristic, WindowScan};
    use crate::ai::RandomAgent;
    use crate::game::{GameEngine, GameOutcome};

    /// Frontier heuristic that scores a position by the column just played,
    /// for pinning down depth-0 behavior.
    struct ColumnIndex;

    impl Heuristic for ColumnIndex {
        fn evaluate(&mut self, _board: &Board, column: usize, _player: Player) -> f64 {
            column as f64
        }

        fn name(&self) -> &str {
            "ColumnIndex"
        }
    }

    fn minimax(player: Player, depth: u32) -> MinimaxAgent {
        MinimaxAgent::new(player, depth, 0.95, Box::new(WindowScan))
    }

    #[test]
    fn test_opening_move_is_center_for_both_colors() {
        let board = Board::new(7, 6);

        let mut red = MinimaxAgent::new(Player::Red, 4, 0.95, Box::new(NullHeuristic));
        assert_eq!(red.next_move(&board).unwrap(), 3);

        let mut yellow = MinimaxAgent::new(Player::Yellow, 4, 0.95, Box::new(NullHeuristic));
        assert_eq!(yellow.next_move(&board).unwrap(), 3);
    }

    #[test]
    fn test_depth_zero_matches_heuristic_ranking() {
        let mut board = Board::new(7, 6);
        board.insert(Player::Yellow, 0); // non-empty to skip the opening book

        // Max keeps the highest heuristic score: the rightmost column
        let mut red = MinimaxAgent::new(Player::Red, 0, 0.95, Box::new(ColumnIndex));
        assert_eq!(red.next_move(&board).unwrap(), 6);

        // Min keeps the lowest: the leftmost column
        let mut board2 = Board::new(7, 6);
        board2.insert(Player::Red, 6);
        let mut yellow = MinimaxAgent::new(Player::Yellow, 0, 0.95, Box::new(ColumnIndex));
        assert_eq!(yellow.next_move(&board2).unwrap(), 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new(7, 6);
        for col in 0..3 {
            board.insert(Player::Red, col);
            board.insert(Player::Yellow, col);
        }

        let mut agent = minimax(Player::Red, 4);
        assert_eq!(agent.next_move(&board).unwrap(), 3);
    }

    #[test]
    fn test_blocks_opponent_win() {
        // Yellow holds 0..=2 on the bottom row; Red must answer at 3
        let mut board = Board::new(7, 6);
        board.insert(Player::Red, 6);
        board.insert(Player::Yellow, 0);
        board.insert(Player::Red, 6);
        board.insert(Player::Yellow, 1);
        board.insert(Player::Red, 5);
        board.insert(Player::Yellow, 2);

        let mut agent = minimax(Player::Red, 4);
        assert_eq!(agent.next_move(&board).unwrap(), 3);
    }

    #[test]
    fn test_blocking_needs_no_heuristic() {
        let mut board = Board::new(7, 6);
        board.insert(Player::Red, 6);
        board.insert(Player::Yellow, 0);
        board.insert(Player::Red, 6);
        board.insert(Player::Yellow, 1);
        board.insert(Player::Red, 5);
        board.insert(Player::Yellow, 2);

        // Pure lookahead: any non-losing line outranks the forced losses
        let mut agent = MinimaxAgent::new(Player::Red, 2, 0.95, Box::new(NullHeuristic));
        assert_eq!(agent.next_move(&board).unwrap(), 3);
    }

    #[test]
    fn test_prefers_win_over_block() {
        // Red and Yellow each hold 0..=2 on their own rows; both threaten
        // column 3, and Red to move should take the win, not block
        let mut board = Board::new(7, 6);
        for col in 0..3 {
            board.insert(Player::Red, col);
            board.insert(Player::Yellow, col);
        }

        let mut agent = minimax(Player::Red, 4);
        assert_eq!(agent.next_move(&board).unwrap(), 3);

        // Same position from Yellow's seat: column 3 is the only line that
        // does not hand Red the immediate (3, 0) win
        let mut agent = minimax(Player::Yellow, 4);
        assert_eq!(agent.next_move(&board).unwrap(), 3);
    }

    #[test]
    fn test_min_wins_propagate_as_loss() {
        // Yellow threatens (3, 0); unless Red blocks, min finds the kill one
        // ply down and the Loss sentinel propagates undecayed, so every
        // other column scores below the blocking line
        let mut board = Board::new(7, 6);
        board.insert(Player::Yellow, 0);
        board.insert(Player::Yellow, 1);
        board.insert(Player::Yellow, 2);
        board.insert(Player::Red, 0);
        board.insert(Player::Red, 1);

        let mut agent = MinimaxAgent::new(Player::Red, 2, 0.95, Box::new(NullHeuristic));
        assert_eq!(agent.next_move(&board).unwrap(), 3);
    }

    #[test]
    fn test_search_restores_the_scratch_board() {
        let mut board = Board::new(7, 6);
        board.insert(Player::Red, 3);
        board.insert(Player::Yellow, 2);
        let before = board.clone();

        let mut agent = minimax(Player::Yellow, 5);
        agent.next_move(&board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_step_counter_grows_with_depth() {
        let mut board = Board::new(7, 6);
        board.insert(Player::Red, 3);

        let mut shallow = minimax(Player::Yellow, 1);
        shallow.next_move(&board).unwrap();

        let mut deep = minimax(Player::Yellow, 4);
        deep.next_move(&board).unwrap();

        assert!(deep.steps() > shallow.steps());
        assert!(shallow.steps() > 0);
    }

    #[test]
    fn test_random_heuristic_reseed_replays_choice() {
        let mut board = Board::new(7, 6);
        board.insert(Player::Red, 3);

        let mut agent =
            MinimaxAgent::new(Player::Yellow, 2, 0.95, Box::new(RandomHeuristic::seeded(4)));
        let first = agent.next_move(&board).unwrap();
        agent.reseed(4);
        let second = agent.next_move(&board).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_neighbor_rings_agent_plays_full_game() {
        let red = MinimaxAgent::new(Player::Red, 3, 0.95, Box::new(NeighborRings::new(2)));
        let yellow = minimax(Player::Yellow, 3);
        let mut engine = GameEngine::new(7, 6, Box::new(red), Box::new(yellow));

        let outcome = engine.play().unwrap();
        assert!(matches!(
            outcome,
            GameOutcome::Winner(_) | GameOutcome::Draw
        ));
    }

    #[test]
    fn test_beats_random_agent() {
        let games = 10;
        let mut wins = 0;

        for g in 0..games {
            let red = minimax(Player::Red, 4);
            let yellow = RandomAgent::seeded(Player::Yellow, 1000 + g);
            let mut engine = GameEngine::new(7, 6, Box::new(red), Box::new(yellow));
            if engine.play().unwrap() == GameOutcome::Winner(Player::Red) {
                wins += 1;
            }
        }

        assert!(
            wins >= 8,
            "depth-4 minimax should dominate random play, won {wins}/{games}"
        );
    }
}
