#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
pub mod command;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
mod session;
pub mod win;

pub use board::*;
pub use command::{parse_script, Command};
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use input::{command_for_key, InputSource, KeyboardInput, ScriptedInput, TerminalGuard};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use render::{Renderer, TerminalRenderer};
#[cfg(feature = "std")]
pub use session::Session;
pub use win::{is_winning_move, Orientation};
