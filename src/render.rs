#![cfg(feature = "std")]

//! Terminal renderer: box-drawn frame, marks and hint lines.
//!
//! Logical board positions map to screen cells as `x = 2 + col * 4`,
//! `y = 1 + row * 2`, i.e. the centre of each frame box. The hint line sits
//! directly under the frame and notices one line below it.

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveTo, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::{board::Board, common::Pos, config::MAX_BOARD_SIZE, game::GameStatus};

/// Output side of a game session. Implementations only read the board.
pub trait Renderer {
    /// Draw the whole board and the turn hint, leaving the terminal cursor
    /// on the selected cell.
    fn draw(&mut self, board: &Board) -> io::Result<()>;

    /// Show a one-line notice such as a rejected move.
    fn notice(&mut self, text: &str) -> io::Result<()>;

    /// Show the final result.
    fn announce(&mut self, status: GameStatus) -> io::Result<()>;
}

/// Screen coordinates of the centre of the box for `pos`.
///
/// Every position on a board of at most [`MAX_BOARD_SIZE`] fits in `u16`.
pub fn screen_pos(pos: Pos) -> (u16, u16) {
    let x = 2 + pos.col * 4;
    let y = 1 + pos.row * 2;
    (x as u16, y as u16)
}

/// Frame width and height in terminal cells for a `size × size` board.
pub fn frame_dimensions(size: usize) -> (usize, usize) {
    (size * 4 + 1, size * 2 + 1)
}

// `element` repeated `size` times, minus its trailing junction character.
fn repeat_cells(element: &str, size: usize) -> String {
    let mut s = element.repeat(size);
    s.pop();
    s
}

/// Lines of the empty board frame.
pub fn frame_lines(size: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(size * 2 + 1);
    lines.push(format!("┌{}┐", repeat_cells("───┬", size)));
    for _ in 0..size {
        lines.push(format!("│{}│", repeat_cells("   │", size)));
        lines.push(format!("├{}┤", repeat_cells("───┼", size)));
    }
    lines.pop();
    lines.push(format!("└{}┘", repeat_cells("───┴", size)));
    lines
}

/// Message shown once the game has ended.
pub fn result_message(status: GameStatus) -> String {
    match status {
        GameStatus::Won(player) => format!("{} ARE WIN!", player),
        GameStatus::Draw => "Draw! No moves left".to_string(),
        GameStatus::InProgress => String::new(),
    }
}

/// Renders onto any writer using crossterm cursor commands.
pub struct TerminalRenderer<W: Write> {
    out: W,
    frame: Vec<String>,
    width: usize,
    height: usize,
    cleared: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Panics if `size` exceeds [`MAX_BOARD_SIZE`].
    pub fn new(out: W, size: usize) -> Self {
        assert!(size <= MAX_BOARD_SIZE, "board size {} too large to draw", size);
        let (width, height) = frame_dimensions(size);
        Self {
            out,
            frame: frame_lines(size),
            width,
            height,
            cleared: false,
        }
    }

    /// Consume the renderer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn hint_row(&self) -> u16 {
        self.height as u16
    }

    fn centred(&self, text: &str) -> u16 {
        (self.width.saturating_sub(text.chars().count()) / 2) as u16
    }

    fn print_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        let x = self.centred(text);
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            MoveTo(x, row),
            Print(text)
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, board: &Board) -> io::Result<()> {
        if !self.cleared {
            queue!(self.out, Clear(ClearType::All))?;
            self.cleared = true;
        }
        for (y, line) in self.frame.iter().enumerate() {
            queue!(self.out, MoveTo(0, y as u16), Print(line))?;
        }
        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (x, y) = screen_pos(Pos::new(row, col));
                queue!(self.out, MoveTo(x, y), Print(cell.symbol()))?;
            }
        }

        let hint = format!("{} are walking now", board.active_player());
        let row = self.hint_row();
        self.print_line(row, &hint)?;
        queue!(self.out, MoveTo(0, row + 1), Clear(ClearType::CurrentLine))?;

        let (x, y) = screen_pos(board.cursor_pos());
        queue!(self.out, MoveTo(x, y), Show)?;
        self.out.flush()
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        let row = self.hint_row() + 1;
        self.print_line(row, text)?;
        self.out.flush()
    }

    fn announce(&mut self, status: GameStatus) -> io::Result<()> {
        let row = self.hint_row() + 1;
        self.print_line(row, &result_message(status))?;
        self.out.flush()
    }
}
