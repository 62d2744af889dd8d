//! HappyHex CLI - Command-line interface
//!
//! Commands:
//! - demo: Fill three crossing lines and clear them
//! - positions: Score every placement of a piece on a board
//! - play: Greedy self-play over a random piece queue

mod board_io;
mod config;
mod demo;
mod play;
mod positions;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use play::PlayArgs;
use positions::PositionsArgs;

#[derive(Parser)]
#[command(name = "happyhex")]
#[command(about = "HappyHex hexagonal grid engine")]
struct Cli {
    /// Random seed for reproducibility
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log engine detail (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill three crossing lines on a radius 4 board and clear them
    Demo,
    /// List every valid origin of a piece, best first
    Positions(PositionsArgs),
    /// Play greedily until no queued piece fits
    Play(PlayArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => demo::run(),
        Commands::Positions(args) => positions::run(args),
        Commands::Play(args) => play::run(args, cli.seed),
    }
}
