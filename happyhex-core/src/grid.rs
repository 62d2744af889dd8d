//! The `HexGrid` capability shared by the engine and by pieces
//!
//! Positions are addressed by line coordinates `(i, k)`; see [`crate::hex`].
//! Implementations choose their own storage: the engine keeps a sorted array
//! searched by bisection, a piece keeps a handful of slots scanned linearly.

use crate::block::Block;
use crate::error::GridError;
use crate::hex::{Hex, NEIGHBORS};

/// A collection of blocks on hex line coordinates
pub trait HexGrid {
    /// Number of slots; iterate with [`HexGrid::block`].
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Block stored at `index`, in implementation order.
    fn block(&self, index: usize) -> Option<&Block>;

    /// Block at line coordinate `(i, k)`, if present.
    fn block_at(&self, i: i32, k: i32) -> Option<&Block>;

    /// Whether `(i, k)` addresses a block of this grid.
    fn in_range(&self, i: i32, k: i32) -> bool;

    /// Snapshot of every slot sorted by I-line, then K-line.
    fn blocks(&self) -> Vec<Block>;

    /// Store one block at its own coordinate.
    fn insert(&mut self, block: Block) -> Result<(), GridError>;

    /// Add every occupied block of `other`, shifted by `origin`.
    ///
    /// Blocks are inserted one at a time; an error leaves the blocks inserted
    /// before it in place.
    fn merge(&mut self, origin: Hex, other: &dyn HexGrid) -> Result<(), GridError> {
        for block in other.blocks().iter().filter(|b| b.state()) {
            self.insert(block.translated(origin))?;
        }
        Ok(())
    }

    /// Occupancy at `(i, k)`; missing positions read as vacant.
    fn state_at(&self, i: i32, k: i32) -> bool {
        self.block_at(i, k).is_some_and(|b| b.state())
    }

    /// Count occupied neighbours of `(i, k)`.
    ///
    /// Neighbours outside the grid count as occupied when `include_missing`
    /// is set and are ignored otherwise. Returns 0 if `(i, k)` itself is
    /// outside the grid.
    fn count_neighbors(&self, i: i32, k: i32, include_missing: bool) -> usize {
        if !self.in_range(i, k) {
            return 0;
        }
        NEIGHBORS
            .iter()
            .filter(|&&(di, dk)| match self.block_at(i + di, k + dk) {
                Some(block) => block.state(),
                None => include_missing,
            })
            .count()
    }
}
