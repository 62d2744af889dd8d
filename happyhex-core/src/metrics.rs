//! Placement heuristics
//!
//! Two measures guide where a shape should go. The density index rewards
//! shapes that land snugly against filled blocks or the board edge. The
//! entropy index rewards placements that leave the board more structured,
//! judged by the Shannon entropy of local 7-block patterns.

use crate::error::GridError;
use crate::eval::{sigmoid, ScoringConfig};
use crate::grid::HexGrid;
use crate::hex::{Hex, NEIGHBORHOOD};
use crate::HexEngine;

/// Number of distinct neighbourhood patterns.
pub const PATTERN_COUNT: usize = 1 << NEIGHBORHOOD.len();

impl HexEngine {
    /// How tightly `other` would fit at `origin`, in `[0, 1]`.
    ///
    /// For every occupied block of the shape, the neighbours of its target
    /// position that are filled or off the board count as populated, out of
    /// the neighbours the shape does not already cover itself. Returns 0 when
    /// the shape cannot be placed or has no exposed neighbours.
    pub fn compute_dense_index(&self, origin: Hex, other: &dyn HexGrid) -> f64 {
        let mut possible = 0;
        let mut populated = 0;
        for block in other.blocks().iter().filter(|b| b.state()) {
            let (i, k) = (block.hex() + origin).line_key();
            match self.block_at(i, k) {
                Some(target) if !target.state() => {}
                _ => return 0.0,
            }
            possible += 6 - other.count_neighbors(block.line_i(), block.line_k(), false);
            populated += self.count_neighbors(i, k, true);
        }
        if possible == 0 {
            0.0
        } else {
            populated as f64 / possible as f64
        }
    }

    /// 7-bit occupancy pattern around `(i, k)`; off-board reads as vacant.
    pub fn pattern_at(&self, i: i32, k: i32) -> u8 {
        NEIGHBORHOOD
            .iter()
            .fold(0u8, |pattern, &(di, dk)| {
                (pattern << 1) | u8::from(self.state_at(i + di, k + dk))
            })
    }

    /// Blocks whose whole neighbourhood lies on the board.
    ///
    /// Stepping back one J unit maps the interior onto a board one ring smaller.
    fn interior(&self) -> impl Iterator<Item = Hex> + '_ {
        let inner = self.radius() as i32 - 1;
        self.iter()
            .map(|block| block.hex())
            .filter(move |hex| hex.shift_j(-1).in_range(inner))
    }

    /// Occurrences of every neighbourhood pattern over the interior.
    pub fn pattern_histogram(&self) -> [usize; PATTERN_COUNT] {
        let mut counts = [0; PATTERN_COUNT];
        for hex in self.interior() {
            let (i, k) = hex.line_key();
            counts[usize::from(self.pattern_at(i, k))] += 1;
        }
        counts
    }

    /// Shannon entropy, in bits, of the interior pattern distribution.
    ///
    /// Zero when every interior block shows the same pattern, including when
    /// the board has no interior at all.
    pub fn compute_entropy(&self) -> f64 {
        let counts = self.pattern_histogram();
        let total: usize = counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum::<f64>()
            .max(0.0)
    }

    /// Entropy index with the default curve.
    pub fn compute_entropy_index(&self, origin: Hex, other: &dyn HexGrid) -> Result<f64, GridError> {
        self.compute_entropy_index_with(origin, other, &ScoringConfig::default())
    }

    /// Change in entropy from placing `other` at `origin` and clearing full
    /// lines, mapped onto `(0, 1)` by the configured sigmoid.
    ///
    /// Works on a copy; this board is left untouched. Fails when the shape
    /// cannot be placed.
    pub fn compute_entropy_index_with(
        &self,
        origin: Hex,
        other: &dyn HexGrid,
        config: &ScoringConfig,
    ) -> Result<f64, GridError> {
        let before = self.compute_entropy();
        let mut copy = self.clone();
        copy.add(origin, other)?;
        copy.eliminate();
        let delta = copy.compute_entropy() - before - config.entropy_offset;
        Ok(sigmoid(delta, config.entropy_steepness))
    }
}
