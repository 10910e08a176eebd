//! Commonly used types and utilities for ease of import.

pub use crate::{
    is_winning_move, Board, Cell, Command, Direction, GameConfig, GameEngine, GameStatus,
    Player, Pos,
};

#[cfg(feature = "std")]
pub use crate::{InputSource, Renderer, ScriptedInput, Session, TerminalRenderer};
