//! Play command - greedy self-play
//!
//! ## Architecture
//!
//! - run(): orchestration
//! - play_game(): the turn loop
//! - PieceQueue: random pieces drawn from the seeded RNG
//! - report(): text or JSON summary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use happyhex_core::{best_placement, Color, HexEngine, Piece, ScoringConfig};

use crate::board_io::{board_or_empty, encode_board, render_board};
use crate::config::load_scoring;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board radius when no board is given
    #[arg(long, default_value = "5")]
    pub radius: usize,

    /// Starting occupancy as a 0/1 string in storage order
    #[arg(long)]
    pub board: Option<String>,

    /// Maximum number of turns
    #[arg(long, default_value = "100")]
    pub turns: usize,

    /// Pieces offered per turn
    #[arg(long, default_value = "3")]
    pub queue: usize,

    /// Scoring config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of one game
#[derive(Clone, Debug, Serialize)]
struct GameSummary {
    turns: usize,
    blocks_placed: usize,
    blocks_eliminated: usize,
    lines_eliminated: usize,
    stuck: bool,
    fill_ratio: f64,
    entropy: f64,
    board: String,
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    if args.queue == 0 {
        anyhow::bail!("queue must hold at least one piece");
    }
    let config = load_scoring(args.config.as_deref())?;
    let mut engine = board_or_empty(args.board.as_deref(), args.radius)?;

    tracing::info!(
        "Starting self-play: radius {}, up to {} turns, queue of {}",
        engine.radius(),
        args.turns,
        args.queue
    );

    let mut rng = create_rng(seed);
    let summary = play_game(&mut engine, &args, &config, &mut rng)?;

    report(&summary, &engine, args.json)
}

// ============================================================================
// TURN LOOP
// ============================================================================

/// Random pieces, refilled as they are used
struct PieceQueue {
    pieces: Vec<Piece>,
    drawn: u16,
}

impl PieceQueue {
    fn new(len: usize, rng: &mut ChaCha8Rng) -> Result<Self> {
        let mut queue = Self {
            pieces: Vec::with_capacity(len),
            drawn: 0,
        };
        for _ in 0..len {
            let piece = queue.draw(rng)?;
            queue.pieces.push(piece);
        }
        Ok(queue)
    }

    fn draw(&mut self, rng: &mut ChaCha8Rng) -> Result<Piece> {
        let mask = rng.gen_range(1..=127u8);
        self.drawn = self.drawn.wrapping_add(1);
        let piece = Piece::from_mask(mask, Color::Index(self.drawn))?;
        Ok(piece)
    }

    fn replace(&mut self, index: usize, rng: &mut ChaCha8Rng) -> Result<()> {
        self.pieces[index] = self.draw(rng)?;
        Ok(())
    }
}

fn play_game(
    engine: &mut HexEngine,
    args: &PlayArgs,
    config: &ScoringConfig,
    rng: &mut ChaCha8Rng,
) -> Result<GameSummary> {
    let mut queue = PieceQueue::new(args.queue, rng)?;
    let mut turns = 0;
    let mut blocks_placed = 0;
    let mut blocks_eliminated = 0;
    let mut lines_eliminated = 0;
    let mut stuck = false;

    while turns < args.turns {
        let Some((index, placement)) = best_placement(engine, &queue.pieces, config) else {
            stuck = true;
            break;
        };
        let piece = &queue.pieces[index];
        engine
            .add(placement.origin, piece)
            .with_context(|| format!("Ranked placement at {} did not fit", placement.origin))?;
        blocks_placed += piece.filled();

        lines_eliminated += engine.count_eliminate(true);
        let cleared = engine.eliminate();
        blocks_eliminated += cleared.len();
        turns += 1;

        tracing::debug!(
            turn = turns,
            mask = piece.to_mask(),
            origin = %placement.origin,
            score = placement.score,
            cleared = cleared.len(),
            "placed"
        );
        queue.replace(index, rng)?;
    }

    if stuck {
        tracing::info!("No queued piece fits after {} turns", turns);
    }

    Ok(GameSummary {
        turns,
        blocks_placed,
        blocks_eliminated,
        lines_eliminated,
        stuck,
        fill_ratio: engine.fill_ratio(),
        entropy: engine.compute_entropy(),
        board: encode_board(engine),
    })
}

// ============================================================================
// OUTPUT
// ============================================================================

fn report(summary: &GameSummary, engine: &HexEngine, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    println!("\n=== HappyHex self-play ===");
    println!("{}", render_board(engine));
    println!("Turns:             {}", summary.turns);
    println!("Blocks placed:     {}", summary.blocks_placed);
    println!("Blocks eliminated: {}", summary.blocks_eliminated);
    println!("Lines eliminated:  {}", summary.lines_eliminated);
    println!("Filled:            {:.1}%", summary.fill_ratio * 100.0);
    println!("Entropy:           {:.4}", summary.entropy);
    if summary.stuck {
        println!("Game over: no queued piece fits");
    }
    Ok(())
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
