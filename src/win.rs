//! Win detection for the mark just placed under the cursor.
//!
//! A move wins when the run of identical marks passing through the cursor
//! cell reaches the board's win run length in any of the four orientations.
//! Only the cursor cell is examined, so the check must run right after a
//! successful [`Board::attempt_move`] and before the turn is handed over.

use crate::board::Board;
use crate::common::Pos;

/// One of the four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::MainDiagonal,
        Orientation::AntiDiagonal,
    ];

    /// Unit step `+d` for this orientation; the opposite walk uses `-d`.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::MainDiagonal => (1, 1),
            Orientation::AntiDiagonal => (-1, 1),
        }
    }
}

/// Length of the run of the cursor cell's mark along `orientation`.
///
/// Returns 0 when the cursor sits on an empty cell.
pub fn run_length(board: &Board, orientation: Orientation) -> usize {
    let origin = board.cursor_pos();
    if board.cell_at(origin).is_empty() {
        return 0;
    }
    let (dr, dc) = orientation.step();
    1 + walk(board, origin, dr, dc) + walk(board, origin, -dr, -dc)
}

/// Returns `true` if the run along `orientation` is long enough to win.
pub fn completes_run(board: &Board, orientation: Orientation) -> bool {
    run_length(board, orientation) >= board.win_run_length()
}

/// First orientation in which the last move completed a winning run.
pub fn winning_orientation(board: &Board) -> Option<Orientation> {
    Orientation::ALL
        .into_iter()
        .find(|&o| completes_run(board, o))
}

/// Returns `true` if the mark under the cursor completes a winning run.
pub fn is_winning_move(board: &Board) -> bool {
    winning_orientation(board).is_some()
}

// Count matching cells stepping away from `origin`, stopping at the edge
// or at the first cell holding anything else.
fn walk(board: &Board, origin: Pos, dr: isize, dc: isize) -> usize {
    let mark = board.cell_at(origin);
    let mut row = origin.row as isize + dr;
    let mut col = origin.col as isize + dc;
    let mut count = 0;
    while board.contains(row, col) && board.cell_at(Pos::new(row as usize, col as usize)) == mark {
        count += 1;
        row += dr;
        col += dc;
    }
    count
}
