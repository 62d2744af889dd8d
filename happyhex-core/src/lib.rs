//! HappyHex Core - Hexagonal grid engine
//!
//! This crate provides the board logic for HappyHex:
//! - Hex coordinates with raw and line representations
//! - Blocks, pieces and the shared `HexGrid` capability
//! - The sorted board with placement and line elimination
//! - Closed-form line arithmetic over the storage order
//! - Density and entropy metrics for scoring placements

pub mod hex;
pub mod block;
pub mod error;
pub mod grid;
pub mod piece;
pub mod lines;
pub mod engine;
pub mod elimination;
pub mod metrics;
pub mod eval;

// Re-exports for convenient access
pub use hex::{Hex, NEIGHBORHOOD, NEIGHBORS};
pub use block::{Block, Color};
pub use error::GridError;
pub use grid::HexGrid;
pub use piece::Piece;
pub use lines::{Axis, LineRuns, Run};
pub use engine::HexEngine;
pub use metrics::PATTERN_COUNT;
pub use eval::{best_placement, score_placement, sigmoid, Placement, ScoringConfig};
