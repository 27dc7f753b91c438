//! Console rendering boundary: pure functions from board state to text,
//! with no feedback into gameplay.

use crate::game::{Board, Cell, Move};

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Red => 'O',
        Cell::Yellow => 'X',
        Cell::Empty => '.',
    }
}

/// Render the board as ASCII art, top row first, with column numbers along
/// the bottom.
pub fn ascii_board(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..board.height()).rev() {
        out.push_str(&format!("{row:>2} |"));
        for col in 0..board.width() {
            out.push(' ');
            out.push(cell_char(board.get(col, row)));
        }
        out.push_str(" |\n");
    }

    out.push_str("   +");
    for _ in 0..board.width() {
        out.push_str("--");
    }
    out.push_str("-+\n    ");
    for col in 0..board.width() {
        out.push_str(&format!(" {col}"));
    }
    out.push('\n');

    out
}

/// A caret line pointing at the column of the last move, aligned with
/// [`ascii_board`] output.
pub fn caret(board: &Board, mv: &Move) -> String {
    debug_assert!(mv.column < board.width());
    format!("{}^ {}\n", " ".repeat(5 + mv.column * 2), mv)
}

/// Board plus a marker for the move that produced it.
pub fn frame(board: &Board, mv: &Move) -> String {
    let mut out = ascii_board(board);
    out.push_str(&caret(board, mv));
    out
}
