//! Console entry point.
mod console;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use maze_engine::{Game, MazeConfig, RunOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

use console::ConsoleInput;

/// All The Worlds For Her: a labyrinth between worlds, played in the terminal.
#[derive(Parser)]
#[command(name = "all-worlds")]
#[command(version, long_about = None)]
struct Cli {
    /// Play a maze from this TOML file instead of the built-in one
    #[arg(long)]
    maze: Option<PathBuf>,

    /// Seed the random generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Skip intro texts and dialogue lines
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.maze {
        Some(path) => MazeConfig::load(path)
            .with_context(|| format!("cannot use maze {}", path.display()))?,
        None => MazeConfig::default_maze().context("built-in maze is broken")?,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?cli.seed, "starting run");

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout(), cli.quiet);

    let mut game = Game::start(config, &mut input, &mut rng)?;
    match game.run(&mut input, &mut rng)? {
        RunOutcome::Victory => tracing::info!(level = game.hero().level(), "run won"),
        RunOutcome::Abandoned => tracing::info!("run abandoned"),
    }
    Ok(())
}
