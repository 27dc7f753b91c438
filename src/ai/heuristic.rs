use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Cell, Player};

/// Bonus for a length-4 window already filled by the evaluated player: an
/// unblocked completed threat dominates any sum of partial windows.
const FOUR_BONUS: f64 = 1000.0;

/// Static evaluation of a position at the search frontier.
///
/// `column` is the column the candidate token was just dropped into (the
/// board is evaluated *after* the insertion). Scores follow one sign
/// convention throughout the search: higher is better for Red, the
/// maximizer, so implementations negate their total when evaluating for
/// Yellow.
pub trait Heuristic: Send {
    fn evaluate(&mut self, board: &Board, column: usize, player: Player) -> f64;

    fn name(&self) -> &str;

    /// Reset any internal randomness; deterministic heuristics ignore it.
    fn reseed(&mut self, _seed: u64) {}
}

/// Scores every position 0, turning the search into pure lookahead.
pub struct NullHeuristic;

impl Heuristic for NullHeuristic {
    fn evaluate(&mut self, _board: &Board, _column: usize, _player: Player) -> f64 {
        0.0
    }

    fn name(&self) -> &str {
        "Null"
    }
}

/// Uniform noise in a wide fixed range, for benchmarking real heuristics
/// against chance.
pub struct RandomHeuristic {
    rng: StdRng,
}

impl RandomHeuristic {
    pub fn new() -> Self {
        RandomHeuristic {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomHeuristic {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for RandomHeuristic {
    fn evaluate(&mut self, _board: &Board, _column: usize, _player: Player) -> f64 {
        self.rng.random_range(-1_000_000..=1_000_000) as f64
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Scores the concentric rings around the just-placed token.
///
/// For each of the eight directions the walk steps outward up to `rings`
/// cells, stopping early at the board edge or at an opponent token. Empty
/// cells are worth 1, own tokens 2.
pub struct NeighborRings {
    rings: usize,
}

impl NeighborRings {
    pub fn new(rings: usize) -> Self {
        NeighborRings { rings }
    }
}

impl Heuristic for NeighborRings {
    fn evaluate(&mut self, board: &Board, column: usize, player: Player) -> f64 {
        let row = board.column_height(column) as i32 - 1;
        let col = column as i32;
        let own = player.to_cell();

        let mut score = 0i64;
        for (dc, dr) in [
            (0, 1),
            (1, 1),
            (1, 0),
            (1, -1),
            (0, -1),
            (-1, -1),
            (-1, 0),
            (-1, 1),
        ] {
            for k in 1..=self.rings as i32 {
                let c = col + dc * k;
                let r = row + dr * k;
                if c < 0 || r < 0 || c >= board.width() as i32 || r >= board.height() as i32 {
                    break;
                }
                match board.get(c as usize, r as usize) {
                    Cell::Empty => score += 1,
                    cell if cell == own => score += 2,
                    _ => break,
                }
            }
        }

        if player == Player::Yellow {
            score = -score;
        }
        score as f64
    }

    fn name(&self) -> &str {
        "NeighborRings"
    }
}

/// Scans every length-4 window on the board once and scores potential wins.
///
/// A window containing an opposing token is dead and scores 0; otherwise it
/// contributes one point per own token, or [`FOUR_BONUS`] when complete.
pub struct WindowScan;

impl WindowScan {
    fn window_score(board: &Board, own: Cell, col: usize, row: usize, dc: usize, dr: i32) -> f64 {
        let mut count = 0;
        for i in 0..4 {
            let c = col + dc * i;
            let r = (row as i32 + dr * i as i32) as usize;
            match board.get(c, r) {
                Cell::Empty => {}
                cell if cell == own => count += 1,
                _ => return 0.0,
            }
        }
        if count == 4 {
            FOUR_BONUS
        } else {
            count as f64
        }
    }
}

impl Heuristic for WindowScan {
    fn evaluate(&mut self, board: &Board, _column: usize, player: Player) -> f64 {
        let own = player.to_cell();
        let width = board.width();
        let height = board.height();
        let mut score = 0.0;

        // Horizontal
        for row in 0..height {
            for col in 0..width.saturating_sub(3) {
                score += Self::window_score(board, own, col, row, 1, 0);
            }
        }

        // Vertical
        for col in 0..width {
            for row in 0..height.saturating_sub(3) {
                score += Self::window_score(board, own, col, row, 0, 1);
            }
        }

        // Diagonal up-right
        for col in 0..width.saturating_sub(3) {
            for row in 0..height.saturating_sub(3) {
                score += Self::window_score(board, own, col, row, 1, 1);
            }
        }

        // Diagonal down-right
        for col in 0..width.saturating_sub(3) {
            for row in 3..height {
                score += Self::window_score(board, own, col, row, 1, -1);
            }
        }

        if player == Player::Yellow {
            score = -score;
        }
        score
    }

    fn name(&self) -> &str {
        "WindowScan"
    }
}
