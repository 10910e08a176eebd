//! Game board state: cell grid, cursor and whose turn it is.

use crate::common::{BoardError, Cell, ConfigError, Direction, Player, Pos};
use crate::config::GameConfig;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Read-only snapshot of a board, for syncing with renderers or reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardState {
    pub size: usize,
    pub win_run_length: usize,
    pub cells: Vec<Cell>,
    pub cursor: Pos,
    pub active_player: Player,
}

impl BoardState {
    /// One string per row, using `.` for empty cells.
    pub fn rows(&self) -> Vec<String> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|c| if c.is_empty() { '.' } else { c.symbol() })
                    .collect()
            })
            .collect()
    }
}

/// Square board of `size × size` cells.
///
/// The cursor is the only way to address a cell for a move; a cell that
/// has been marked never goes back to [`Cell::Empty`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_run_length: usize,
    cells: Vec<Cell>,
    cursor: Pos,
    active_player: Player,
}

impl Board {
    /// Create an empty board with the cursor in the centre and Cross to move.
    pub fn new(size: usize, win_run_length: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_config(GameConfig::new(size, win_run_length)?))
    }

    pub fn with_config(config: GameConfig) -> Self {
        let size = config.size();
        Board {
            size,
            win_run_length: config.win_run_length(),
            cells: vec![Cell::Empty; size * size],
            cursor: Pos::new(size / 2, size / 2),
            active_player: Player::Cross,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of consecutive marks needed to win.
    pub fn win_run_length(&self) -> usize {
        self.win_run_length
    }

    pub fn cursor_pos(&self) -> Pos {
        self.cursor
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns `true` if (`row`, `col`) lies on the board.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Cell contents at `pos`. Panics if `pos` is off the board.
    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Iterate the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Returns `true` once no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Step the cursor one cell, wrapping to the opposite edge.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (dr, dc) = direction.delta();
        self.cursor.row = wrap(self.cursor.row, dr, self.size);
        self.cursor.col = wrap(self.cursor.col, dc, self.size);
    }

    /// Mark the cell under the cursor for the active player.
    ///
    /// The active player is left unchanged; callers decide whether the turn
    /// passes after checking for a win.
    pub fn attempt_move(&mut self) -> Result<Player, BoardError> {
        let idx = self.index(self.cursor);
        if !self.cells[idx].is_empty() {
            return Err(BoardError::Occupied {
                row: self.cursor.row,
                col: self.cursor.col,
            });
        }
        self.cells[idx] = self.active_player.mark();
        Ok(self.active_player)
    }

    pub fn toggle_active_player(&mut self) {
        self.active_player = self.active_player.opponent();
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position ({}, {}) outside {}x{} board",
            pos.row,
            pos.col,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }
}

fn wrap(value: usize, step: isize, size: usize) -> usize {
    let next = value as isize + step;
    if next < 0 {
        size - 1
    } else if next as usize >= size {
        0
    } else {
        next as usize
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ size: {}, win_run_length: {}, cursor: ({}, {}), active: {:?} }}",
            self.size, self.win_run_length, self.cursor.row, self.cursor.col, self.active_player
        )?;
        for row in self.rows() {
            for cell in row {
                let ch = if cell.is_empty() { '.' } else { cell.symbol() };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            size: b.size,
            win_run_length: b.win_run_length,
            cells: b.cells.clone(),
            cursor: b.cursor,
            active_player: b.active_player,
        }
    }
}
