use smallvec::SmallVec;

/// Playable column indices, ascending. Sized for a standard 7-wide board
/// without spilling to the heap.
pub type Columns = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Connect Four board with stack-like columns.
///
/// The grid is column-major and row 0 is the bottom, so a token dropped into
/// column `c` lands at `(c, column_height(c))`. Columns only ever grow from
/// the bottom; `insert` and `remove` on the same column are exact inverses,
/// which the minimax search relies on to speculate on a single shared board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    grid: Vec<Cell>,
    heights: Vec<usize>,
    tokens: usize,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            grid: vec![Cell::Empty; width * height],
            heights: vec![0; width],
            tokens: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of positions on the board.
    pub fn capacity(&self) -> usize {
        self.width * self.height
    }

    /// Number of tokens currently on the board.
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens == 0
    }

    pub fn is_full(&self) -> bool {
        self.tokens == self.capacity()
    }

    /// Get the cell at a specific position. Row 0 is the bottom.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.grid[col * self.height + row]
    }

    /// Number of tokens stacked in the given column.
    pub fn column_height(&self, col: usize) -> usize {
        self.heights[col]
    }

    pub fn heights(&self) -> &[usize] {
        &self.heights
    }

    /// Indices of every playable (non-full) column, in ascending order.
    pub fn available_moves(&self) -> Columns {
        (0..self.width)
            .filter(|&col| self.heights[col] < self.height)
            .collect()
    }

    /// Drop a token into a column and report whether it completes
    /// four-in-a-row.
    ///
    /// The win check is incremental: only the row, column, and two diagonals
    /// through the just-placed cell are inspected. Inserting into a full
    /// column is a caller contract violation; legality is established via
    /// [`Board::available_moves`].
    pub fn insert(&mut self, player: super::Player, col: usize) -> bool {
        assert!(
            self.heights[col] < self.height,
            "insert into full column {col}"
        );

        let row = self.heights[col];
        self.grid[col * self.height + row] = player.to_cell();
        self.heights[col] += 1;
        self.tokens += 1;

        self.wins_at(col, row, player.to_cell())
    }

    /// Pop the topmost token from a column. No win re-check: the caller is
    /// restoring a speculative move, not playing one.
    pub fn remove(&mut self, col: usize) {
        assert!(self.heights[col] > 0, "remove from empty column {col}");

        self.heights[col] -= 1;
        let row = self.heights[col];
        self.grid[col * self.height + row] = Cell::Empty;
        self.tokens -= 1;
    }

    /// Check whether the cell at (col, row) completes four-in-a-row in any of
    /// the four line directions.
    fn wins_at(&self, col: usize, row: usize, cell: Cell) -> bool {
        self.line_run(col, row, cell, 1, 0)
            || self.line_run(col, row, cell, 0, 1)
            || self.line_run(col, row, cell, 1, 1)
            || self.line_run(col, row, cell, 1, -1)
    }

    /// Count the contiguous run of `cell` through (col, row) along the given
    /// direction, walking both ways from the anchor.
    fn line_run(&self, col: usize, row: usize, cell: Cell, dc: i32, dr: i32) -> bool {
        let mut count = 1;

        for sign in [1i32, -1] {
            let mut c = col as i32 + dc * sign;
            let mut r = row as i32 + dr * sign;
            while c >= 0
                && r >= 0
                && c < self.width as i32
                && r < self.height as i32
                && self.get(c as usize, r as usize) == cell
            {
                count += 1;
                c += dc * sign;
                r += dr * sign;
            }
        }

        count >= 4
    }
}
