//! Positions command - score every placement of one piece

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use happyhex_core::{Color, HexEngine, Piece, Placement, ScoringConfig};

use crate::board_io::board_or_empty;
use crate::config::load_scoring;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PositionsArgs {
    /// Board radius when no board is given
    #[arg(long, default_value = "5")]
    pub radius: usize,

    /// Board occupancy as a 0/1 string in storage order
    #[arg(long)]
    pub board: Option<String>,

    /// Piece as a 7-bit neighbourhood mask (1-127)
    #[arg(long)]
    pub mask: u8,

    /// Show at most this many placements
    #[arg(long)]
    pub limit: Option<usize>,

    /// Scoring config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One ranked origin, in line coordinates
#[derive(Clone, Debug, Serialize)]
struct PositionRow {
    i: i32,
    k: i32,
    dense_index: f64,
    entropy_index: f64,
    score: f64,
}

impl From<&Placement> for PositionRow {
    fn from(p: &Placement) -> Self {
        let (i, k) = p.origin.line_key();
        Self {
            i,
            k,
            dense_index: p.dense_index,
            entropy_index: p.entropy_index,
            score: p.score,
        }
    }
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

pub fn run(args: PositionsArgs) -> Result<()> {
    let engine = board_or_empty(args.board.as_deref(), args.radius)?;
    let piece = Piece::from_mask(args.mask, Color::Index(0))
        .with_context(|| format!("Invalid piece mask {}", args.mask))?;
    let config = load_scoring(args.config.as_deref())?;

    let rows = rank(&engine, &piece, &config, args.limit);
    tracing::info!(
        "{} placements for mask {:#09b} on radius {}",
        rows.len(),
        args.mask,
        engine.radius()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_table(&rows);
    }
    Ok(())
}

fn rank(
    engine: &HexEngine,
    piece: &Piece,
    config: &ScoringConfig,
    limit: Option<usize>,
) -> Vec<PositionRow> {
    let ranked = engine.rank_positions(piece, config);
    let take = limit.unwrap_or(ranked.len());
    ranked.iter().take(take).map(PositionRow::from).collect()
}

fn print_table(rows: &[PositionRow]) {
    println!("{:>4} {:>4} {:>8} {:>8} {:>8}", "I", "K", "dense", "entropy", "score");
    for row in rows {
        println!(
            "{:>4} {:>4} {:>8.4} {:>8.4} {:>8.4}",
            row.i, row.k, row.dense_index, row.entropy_index, row.score
        );
    }
}
