//! Plays one AI-vs-AI game and prints the result.
//!
//! Usage: `selfplay [light_selector] [dark_selector] [depth]`, selectors 1..=4.

use std::process::ExitCode;

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reversi_engine::ai::{SearchDriver, WorkerPool};
use reversi_engine::game::move_text;
use reversi_engine::{EngineError, Game, SearchConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), EngineError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let light = parse_arg(args.first(), 4)?;
    let dark = parse_arg(args.get(1), 3)?;
    let mut config = SearchConfig::default();
    if let Some(depth) = args.get(2) {
        config.depth = depth.parse().map_err(|_| EngineError::InvalidConfig {
            message: format!("depth `{depth}` is not a number"),
        })?;
    }

    let pool = WorkerPool::new(config.workers)?;
    let driver = SearchDriver::new(&config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::from_selectors(light, dark)?;
    if !game.player(game.side_to_move()).is_ai() || !game.player(game.side_to_move().opponent()).is_ai() {
        return Err(EngineError::NotAiTurn);
    }

    while !game.is_game_over() {
        let side = game.side_to_move();
        let decision = game.play_ai(&driver, &pool, &mut rng)?;
        info!("{side} move {} (score {})", move_text(decision.mv), decision.score);
    }

    let result = game.to_game_result();
    match result.winner {
        Some(side) => println!("{side} wins {}-{}", result.light_count, result.dark_count),
        None => println!("draw {}-{}", result.light_count, result.dark_count),
    }
    Ok(())
}

fn parse_arg(arg: Option<&String>, default: u8) -> Result<u8, EngineError> {
    match arg {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| EngineError::InvalidConfig {
            message: format!("player selector `{text}` is not a number"),
        }),
    }
}
