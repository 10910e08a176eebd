use crate::{
    board::{Board, BoardState},
    command::Command,
    common::{BoardError, Player, Pos},
    config::GameConfig,
    win,
};
use core::fmt;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Player),
    /// Board filled up without a winning run.
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }
}

/// What a successfully applied command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CursorMoved(Pos),
    /// A mark was placed and the turn passed to the opponent.
    Placed { player: Player, pos: Pos },
    Won { player: Player, pos: Pos },
    Draw { player: Player, pos: Pos },
    Quit,
}

/// Commands the engine refused. None of them change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Confirm on an occupied cell.
    IllegalMove(BoardError),
    /// The input driver could not interpret a key.
    InvalidCommand,
    /// The game already ended.
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::IllegalMove(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(_) => write!(f, "Impossible to make this move"),
            GameError::InvalidCommand => write!(f, "Press arrows or space"),
            GameError::GameOver => write!(f, "The game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Turn logic around a single board: move, check for a win, then either end
/// the game or hand the turn over.
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    moves: usize,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::with_config(config),
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    /// Read-only view of the board for renderers.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of marks placed so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Serializable snapshot of the board.
    pub fn state(&self) -> BoardState {
        BoardState::from(&self.board)
    }

    /// Apply one input command.
    pub fn apply(&mut self, command: Command) -> Result<Event, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if let Some(dir) = command.direction() {
            self.board.move_cursor(dir);
            return Ok(Event::CursorMoved(self.board.cursor_pos()));
        }
        match command {
            Command::Confirm => self.confirm(),
            Command::Quit => Ok(Event::Quit),
            _ => Err(GameError::InvalidCommand),
        }
    }

    fn confirm(&mut self) -> Result<Event, GameError> {
        let pos = self.board.cursor_pos();
        let player = self.board.attempt_move().map_err(|e| {
            log::debug!("rejected move: {}", e);
            GameError::from(e)
        })?;
        self.moves += 1;

        if let Some(orientation) = win::winning_orientation(&self.board) {
            log::info!(
                "{} wins at ({}, {}) with a {:?} run after {} moves",
                player,
                pos.row,
                pos.col,
                orientation,
                self.moves
            );
            self.status = GameStatus::Won(player);
            return Ok(Event::Won { player, pos });
        }
        if self.board.is_full() {
            log::info!("board full after {} moves, draw", self.moves);
            self.status = GameStatus::Draw;
            return Ok(Event::Draw { player, pos });
        }

        self.board.toggle_active_player();
        log::debug!("{} placed at ({}, {})", player, pos.row, pos.col);
        Ok(Event::Placed { player, pos })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
