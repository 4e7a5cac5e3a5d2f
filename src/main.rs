//! Tactoe - command-line driver for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io::{BufRead, Write};
use tactoe_engine::{
    BoardEngine, BoardEvent, BoardObserver, EngineConfig, GameRng, GameState, Move, Player,
    Position, Tally, simulate,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Simulate { games, seed, json } => {
            let games = games.unwrap_or(*config.games());
            let seed = seed.or(*config.seed());
            run_simulate(&config.with_games(games).with_seed(seed), json)
        }
        Command::Replay { indices } => run_replay(&indices),
        Command::Play { seed } => {
            let seed = seed.or(*config.seed());
            run_play(&config.with_seed(seed))
        }
    }
}

/// Prints every notification as it arrives.
struct ConsoleObserver;

impl BoardObserver for ConsoleObserver {
    fn turn_changed(&mut self, player: Player) {
        println!("{}", BoardEvent::TurnChanged(player));
    }

    fn move_played(&mut self, player: Player, position: Position) {
        println!("{}", BoardEvent::MovePlayed(Move::new(player, position)));
    }

    fn game_ended(&mut self, state: GameState) {
        println!("{}", BoardEvent::GameEnded(state));
    }
}

/// JSON output of `simulate`.
#[derive(Debug, Serialize)]
struct SimulationReport {
    seed: u64,
    #[serde(flatten)]
    tally: Tally,
}

fn rng_for(config: &EngineConfig) -> GameRng {
    match config.seed() {
        Some(seed) => GameRng::new(*seed),
        None => GameRng::from_entropy(),
    }
}

/// Run the random-vs-random simulation
#[instrument(skip(config), fields(games = *config.games()))]
fn run_simulate(config: &EngineConfig, json: bool) -> Result<()> {
    let mut rng = rng_for(config);
    info!(seed = rng.seed(), "Starting simulation");

    let tally = simulate(*config.games(), &mut rng);

    if json {
        let report = SimulationReport {
            seed: rng.seed(),
            tally,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{tally} (seed {})", rng.seed());
    }
    Ok(())
}

/// Replay a fixed sequence of moves
#[instrument]
fn run_replay(indices: &[usize]) -> Result<()> {
    let mut engine = BoardEngine::new();
    engine.subscribe(Box::new(ConsoleObserver));

    for (turn, &index) in indices.iter().enumerate() {
        let position = Position::try_from(index)
            .map_err(|index| anyhow!("move {}: {} is not a board cell (0-8)", turn + 1, index))?;
        engine
            .play(position)
            .with_context(|| format!("move {} at {}", turn + 1, position))?;
    }

    println!("{}", engine.board());
    println!("{}", engine.state());
    Ok(())
}

/// Play interactively as X against random moves for O
#[instrument(skip(config))]
fn run_play(config: &EngineConfig) -> Result<()> {
    let mut rng = rng_for(config);
    let mut engine = BoardEngine::new();
    engine.subscribe(Box::new(ConsoleObserver));

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while engine.current_player() == Some(Player::X) {
        println!("{}", engine.board());
        print!("Your move (0-8 or a label like \"center\"): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            info!("Input closed, leaving game");
            return Ok(());
        };
        let line = line?;

        let Some(position) = Position::from_label_or_number(&line) else {
            println!("There is no square called {:?}", line.trim());
            continue;
        };

        if let Err(e) = engine.play(position) {
            warn!(error = %e, "Move rejected");
            println!("{e}");
            continue;
        }

        if let Some(position) = engine.play_random(&mut rng) {
            info!(%position, "Random reply");
        }
    }

    println!("{}", engine.board());
    Ok(())
}
