//! Placement scoring

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::HexGrid;
use crate::hex::Hex;
use crate::piece::Piece;
use crate::HexEngine;

/// Weights and curve for placement scoring
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Entropy change that maps to an index of one half
    pub entropy_offset: f64,
    /// Steepness of the entropy sigmoid
    pub entropy_steepness: f64,
    /// Weight of the density index in the combined score
    pub dense_weight: f64,
    /// Weight of the entropy index in the combined score
    pub entropy_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            entropy_offset: 0.21,
            entropy_steepness: 3.0,
            dense_weight: 1.0,
            entropy_weight: 1.0,
        }
    }
}

impl ScoringConfig {
    /// Density only
    pub fn dense_only() -> Self {
        Self::default().with_weights(1.0, 0.0)
    }

    pub fn with_weights(mut self, dense: f64, entropy: f64) -> Self {
        self.dense_weight = dense;
        self.entropy_weight = entropy;
        self
    }

    pub fn with_entropy_curve(mut self, offset: f64, steepness: f64) -> Self {
        self.entropy_offset = offset;
        self.entropy_steepness = steepness;
        self
    }

    pub fn combine(&self, dense_index: f64, entropy_index: f64) -> f64 {
        self.dense_weight * dense_index + self.entropy_weight * entropy_index
    }
}

/// Logistic curve `1 / (1 + e^(-steepness * x))`.
pub fn sigmoid(x: f64, steepness: f64) -> f64 {
    1.0 / (1.0 + (-steepness * x).exp())
}

/// A scored candidate origin
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub origin: Hex,
    pub dense_index: f64,
    pub entropy_index: f64,
    pub score: f64,
}

/// Score one placement; fails when the piece does not fit.
pub fn score_placement(
    engine: &HexEngine,
    origin: Hex,
    piece: &dyn HexGrid,
    config: &ScoringConfig,
) -> Result<Placement, GridError> {
    let entropy_index = engine.compute_entropy_index_with(origin, piece, config)?;
    let dense_index = engine.compute_dense_index(origin, piece);
    Ok(Placement {
        origin,
        dense_index,
        entropy_index,
        score: config.combine(dense_index, entropy_index),
    })
}

impl HexEngine {
    /// Score every valid origin of `piece`, best first.
    ///
    /// Ties keep storage order. Each candidate is evaluated on its own clone
    /// of the board.
    pub fn rank_positions(&self, piece: &Piece, config: &ScoringConfig) -> Vec<Placement> {
        let positions = self.check_positions(piece);
        let mut ranked = self.score_all(&positions, piece, config);
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, positions: &[Hex], piece: &Piece, config: &ScoringConfig) -> Vec<Placement> {
        positions
            .iter()
            .filter_map(|&origin| score_placement(self, origin, piece, config).ok())
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_all(&self, positions: &[Hex], piece: &Piece, config: &ScoringConfig) -> Vec<Placement> {
        use rayon::prelude::*;

        positions
            .par_iter()
            .filter_map(|&origin| score_placement(self, origin, piece, config).ok())
            .collect()
    }
}

/// Best placement over a queue of pieces, as `(queue index, placement)`.
///
/// Earlier pieces win ties.
pub fn best_placement(
    engine: &HexEngine,
    queue: &[Piece],
    config: &ScoringConfig,
) -> Option<(usize, Placement)> {
    let mut best: Option<(usize, Placement)> = None;
    for (index, piece) in queue.iter().enumerate() {
        let Some(top) = engine.rank_positions(piece, config).into_iter().next() else {
            continue;
        };
        if best.map_or(true, |(_, current)| top.score > current.score) {
            best = Some((index, top));
        }
    }
    best
}
