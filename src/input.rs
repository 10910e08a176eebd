#![cfg(feature = "std")]

//! Input drivers turning keys or scripts into [`Command`]s.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::Command;

/// Source of commands for a game session.
pub trait InputSource {
    /// Block until the next command is available.
    fn next_command(&mut self) -> io::Result<Command>;

    /// Wait for the player to dismiss a notice.
    fn acknowledge(&mut self) -> io::Result<()>;
}

/// Map a key press to a command.
pub fn command_for_key(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Char(' ') | KeyCode::Enter => Command::Confirm,
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        _ => Command::Invalid,
    }
}

/// Reads key presses from the terminal. Expects raw mode to be enabled,
/// see [`TerminalGuard`].
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }

    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl InputSource for KeyboardInput {
    fn next_command(&mut self) -> io::Result<Command> {
        let key = self.next_key()?;
        let command = command_for_key(key);
        log::debug!("key {:?} -> {:?}", key.code, command);
        Ok(command)
    }

    fn acknowledge(&mut self) -> io::Result<()> {
        self.next_key().map(|_| ())
    }
}

/// Replays a fixed list of commands, then quits.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    commands: VecDeque<Command>,
    acknowledged: usize,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            acknowledged: 0,
        }
    }

    /// Commands not consumed yet.
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }

    /// How many notices were dismissed.
    pub fn acknowledged(&self) -> usize {
        self.acknowledged
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> io::Result<Command> {
        Ok(self.commands.pop_front().unwrap_or(Command::Quit))
    }

    fn acknowledge(&mut self) -> io::Result<()> {
        self.acknowledged += 1;
        Ok(())
    }
}

/// Puts the terminal into raw mode on an alternate screen until dropped.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        use crossterm::{
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::{
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Best-effort restore: try both steps even if one fails.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
