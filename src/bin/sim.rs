use abreast::{
    Command, GameConfig, GameEngine, GameStatus, DEFAULT_ABREAST_COUNT, DEFAULT_BOARD_SIZE,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

const COMMANDS: [Command; 5] = [
    Command::MoveUp,
    Command::MoveDown,
    Command::MoveLeft,
    Command::MoveRight,
    Command::Confirm,
];
const MAX_STEPS: usize = 1_000_000;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [size] [abreast]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = args
        .get(2)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(DEFAULT_BOARD_SIZE);
    let abreast: usize = args
        .get(3)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(DEFAULT_ABREAST_COUNT.min(size));

    let config = GameConfig::new(size, abreast)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new(config);
    let mut rejected = 0usize;

    let mut steps = 0;
    while !engine.status().is_over() && steps < MAX_STEPS {
        steps += 1;
        let command = COMMANDS[rng.random_range(0..COMMANDS.len())];
        if engine.apply(command).is_err() {
            rejected += 1;
        }
    }

    let status = engine.status();
    let result = json!({
        "seed": seed,
        "config": config,
        "status": match status {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won(_) => "won",
            GameStatus::Draw => "draw",
        },
        "winner": status.winner(),
        "moves": engine.moves(),
        "steps": steps,
        "rejected": rejected,
        "board": engine.state().rows(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
