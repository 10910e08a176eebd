//! Abstract commands produced by input drivers and consumed by the engine.

use crate::common::Direction;
use alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Place a mark at the cursor.
    Confirm,
    /// Input the driver could not map to anything.
    Invalid,
    /// Leave the game without a result.
    Quit,
}

impl Command {
    /// Cursor direction for movement commands.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse one textual token, case-insensitively. Unknown tokens map to
    /// [`Command::Invalid`].
    pub fn from_token(token: &str) -> Command {
        let token = token.trim();
        let is = |names: &[&str]| names.iter().any(|n| token.eq_ignore_ascii_case(n));
        if is(&["up", "u"]) {
            Command::MoveUp
        } else if is(&["down", "d"]) {
            Command::MoveDown
        } else if is(&["left", "l"]) {
            Command::MoveLeft
        } else if is(&["right", "r"]) {
            Command::MoveRight
        } else if is(&["confirm", "c", "space", "."]) {
            Command::Confirm
        } else if is(&["quit", "q"]) {
            Command::Quit
        } else {
            Command::Invalid
        }
    }
}

/// Split a script such as `"r r c, d c"` into commands.
pub fn parse_script(script: &str) -> Vec<Command> {
    script
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|t| !t.is_empty())
        .map(Command::from_token)
        .collect()
}
