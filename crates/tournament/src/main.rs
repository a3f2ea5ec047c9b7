//! Tournament CLI
//!
//! Run minimax-vs-random trials and print the results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::Side;
use clap::{Args, Parser, Subcommand};
use minimax_engine::MinimaxAgent;
use random_engine::RandomAgent;
use tournament::{MatchRunner, TournamentConfig, TrialSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", about = "Minimax vs random trial runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a batch of games with minimax as white and random as black
    Run(RunArgs),
    /// Print the report of a saved results file
    Report {
        /// JSON file written by `run --output`
        path: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short = 'n', long)]
    trials: Option<u32>,
    #[arg(short, long)]
    depth: Option<u8>,
    #[arg(long)]
    max_moves: Option<u32>,
    /// Seed for the random agent
    #[arg(long)]
    seed: Option<u64>,
    /// Start every game from this FEN
    #[arg(long)]
    fen: Option<String>,
    /// Write the results as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RunArgs {
    fn resolve(self) -> Result<TournamentConfig> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => TournamentConfig::default(),
        };
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(max_moves) = self.max_moves {
            config.max_moves = max_moves;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.fen.is_some() {
            config.start_fen = self.fen;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        Ok(config)
    }
}

fn run(args: RunArgs) -> Result<()> {
    let config = args.resolve()?;
    // Fail on a bad FEN before any game starts
    config.start_board().context("invalid start position")?;

    let mut white = MinimaxAgent::new(Side::White).with_depth(config.depth);
    let mut black = match config.seed {
        Some(seed) => RandomAgent::with_seed(Side::Black, seed),
        None => RandomAgent::new(Side::Black),
    };

    info!(
        trials = config.trials,
        depth = config.depth,
        max_moves = config.max_moves,
        "starting trials"
    );

    let output = config.output.clone();
    let summary = MatchRunner::new(config).run_trials(&mut white, &mut black)?;
    summary.print_report();

    if let Some(path) = output {
        summary
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Run(args) => run(args),
        Command::Report { path } => {
            let summary = TrialSummary::load(&path)?;
            summary.print_report();
            Ok(())
        }
    }
}
