#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use abreast::{
    init_logging, parse_script, render::result_message, GameConfig, GameEngine, GameStatus,
    KeyboardInput, ScriptedInput, Session, TerminalGuard, TerminalRenderer,
    DEFAULT_ABREAST_COUNT, DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy, Debug)]
#[cfg(feature = "std")]
struct BoardArgs {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board side length")]
    size: usize,
    #[arg(long, default_value_t = DEFAULT_ABREAST_COUNT, help = "Marks in a row needed to win")]
    abreast: usize,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play on this terminal: arrows move, space places a mark, Esc quits.
    Play {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Run a scripted game without a terminal and print the final board.
    Replay {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, help = "Commands such as \"r r c d c\" (up/down/left/right/confirm/quit)")]
        script: String,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { board } => {
            let config = GameConfig::new(board.size, board.abreast)?;
            let status = {
                let _guard = TerminalGuard::new()?;
                let renderer = TerminalRenderer::new(io::stdout(), config.size());
                let mut session =
                    Session::new(GameEngine::new(config), renderer, KeyboardInput::new());
                session.run()?
            };
            report(status);
        }
        Commands::Replay { board, script } => {
            let config = GameConfig::new(board.size, board.abreast)?;
            let input = ScriptedInput::new(parse_script(&script));
            let renderer = TerminalRenderer::new(io::sink(), config.size());
            let mut session = Session::new(GameEngine::new(config), renderer, input);
            let status = session.run()?;
            for row in session.engine().state().rows() {
                println!("{}", row);
            }
            report(status);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn report(status: GameStatus) {
    match status {
        GameStatus::InProgress => println!("Game abandoned"),
        finished => println!("{}", result_message(finished)),
    }
}
