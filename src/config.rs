use crate::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 11;
pub const DEFAULT_ABREAST_COUNT: usize = 5;

/// Largest board whose frame still fits terminal coordinates (`u16`).
pub const MAX_BOARD_SIZE: usize = (u16::MAX as usize - 1) / 4;

/// Validated board dimensions fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameConfig {
    size: usize,
    win_run_length: usize,
}

impl GameConfig {
    /// Build a configuration, rejecting boards on which nobody can win.
    pub fn new(size: usize, win_run_length: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        if win_run_length == 0 {
            return Err(ConfigError::ZeroRunLength);
        }
        if win_run_length > size {
            return Err(ConfigError::RunLongerThanBoard {
                run: win_run_length,
                size,
            });
        }
        Ok(Self {
            size,
            win_run_length,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_run_length(&self) -> usize {
        self.win_run_length
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_run_length: DEFAULT_ABREAST_COUNT,
        }
    }
}
