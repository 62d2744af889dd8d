//! The hexagonal board
//!
//! A `HexEngine` of radius `r` owns exactly `1 + 3r(r-1)` blocks, generated
//! once and kept sorted by I-line, then K-line. Mutators only flip occupancy
//! and color in place, so the index of every coordinate is fixed for the
//! engine's lifetime. Lookup by coordinate is a bisection over that order;
//! [`HexEngine::index_of`] gives the same answer in closed form.

use std::fmt;

use crate::block::{Block, Color};
use crate::error::GridError;
use crate::grid::HexGrid;
use crate::hex::Hex;
use crate::lines;

/// Board state (clone for what-if evaluation)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexEngine {
    radius: usize,
    blocks: Vec<Block>,
}

impl HexEngine {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is 0.
    pub fn new(radius: usize) -> Self {
        assert!(radius >= 1, "engine radius must be at least 1");
        let r = radius as i32;
        let mut blocks = Vec::with_capacity(lines::size(radius));
        // row-major over (I, K) is already the sorted order
        for a in 0..2 * r {
            for b in 0..2 * r {
                let hex = Hex::from_lines(a, b);
                if hex.in_range(r) {
                    blocks.push(Block::empty(hex));
                }
            }
        }
        debug_assert_eq!(blocks.len(), lines::size(radius));
        Self { radius, blocks }
    }

    /// Recover the radius of a board holding `len` blocks.
    ///
    /// Inverts `len = 1 + 3r(r-1)`; any other length has no radius.
    pub fn solve_radius(len: usize) -> Option<usize> {
        if len == 0 || len % 3 != 1 {
            return None;
        }
        let target = (len - 1) / 3;
        (1..)
            .take_while(|&r: &usize| r * (r - 1) <= target)
            .find(|&r| r * (r - 1) == target)
    }

    /// Rebuild a board from its flat occupancy, in storage order.
    pub fn from_booleans(data: &[bool]) -> Result<Self, GridError> {
        let radius = Self::solve_radius(data.len()).ok_or(GridError::InvalidLength(data.len()))?;
        let mut engine = Self::new(radius);
        for (index, &state) in data.iter().enumerate() {
            engine.set_state_index(index, state);
        }
        Ok(engine)
    }

    /// Flat occupancy in storage order.
    pub fn to_booleans(&self) -> Vec<bool> {
        self.blocks.iter().map(Block::state).collect()
    }

    /// Empty every block and restore the default tags.
    pub fn reset(&mut self) {
        for block in &mut self.blocks {
            *block = Block::empty(block.hex());
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Blocks in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub(crate) fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of occupied blocks.
    pub fn filled(&self) -> usize {
        self.blocks.iter().filter(|b| b.state()).count()
    }

    /// Occupied share of the board, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        self.filled() as f64 / self.blocks.len() as f64
    }

    /// Closed-form storage index of `(i, k)`.
    pub fn index_of(&self, i: i32, k: i32) -> Option<usize> {
        lines::index_of(self.radius, i, k)
    }

    fn search(&self, i: i32, k: i32) -> Option<usize> {
        self.blocks
            .binary_search_by(|block| block.hex().line_key().cmp(&(i, k)))
            .ok()
    }

    // ========================================================================
    // MUTATORS
    // ========================================================================

    /// Set occupancy at `(i, k)`, stamping the default tag when it changes.
    ///
    /// Off-board coordinates and unchanged occupancy are no-ops.
    pub fn set_state(&mut self, i: i32, k: i32, state: bool) {
        if let Some(index) = self.search(i, k) {
            let block = &mut self.blocks[index];
            if block.state() != state {
                block.set_state(state);
                block.set_color(Color::for_state(state));
            }
        }
    }

    /// Set occupancy of the block at `index` and stamp the default tag.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set_state_index(&mut self, index: usize, state: bool) {
        let block = &mut self.blocks[index];
        block.set_state(state);
        block.set_color(Color::for_state(state));
    }

    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set_color_index(&mut self, index: usize, color: Color) {
        self.blocks[index].set_color(color);
    }

    // ========================================================================
    // PLACEMENT
    // ========================================================================

    /// Whether every occupied block of `other`, shifted by `origin`, lands on
    /// a vacant block of this board.
    pub fn check_add(&self, origin: Hex, other: &dyn HexGrid) -> bool {
        other
            .blocks()
            .iter()
            .filter(|b| b.state())
            .all(|b| {
                let (i, k) = (b.hex() + origin).line_key();
                self.block_at(i, k).is_some_and(|target| !target.state())
            })
    }

    /// Place `other` at `origin`.
    ///
    /// Blocks are written one at a time as they pass validation. On error the
    /// blocks written before the failing one stay on the board; call
    /// [`HexEngine::check_add`] first when the whole placement must be atomic.
    pub fn add(&mut self, origin: Hex, other: &dyn HexGrid) -> Result<(), GridError> {
        self.merge(origin, other).inspect_err(|err| {
            tracing::trace!(%origin, %err, "placement rejected");
        })
    }

    /// Every origin, in storage order, where `other` can be placed.
    pub fn check_positions(&self, other: &dyn HexGrid) -> Vec<Hex> {
        self.blocks
            .iter()
            .map(Block::hex)
            .filter(|&origin| self.check_add(origin, other))
            .collect()
    }

    // ========================================================================
    // COMPARISON
    // ========================================================================

    /// Same radius and occupancy everywhere; tags are ignored.
    pub fn same_occupancy(&self, other: &HexEngine) -> bool {
        self.radius == other.radius
            && self
                .blocks
                .iter()
                .zip(&other.blocks)
                .all(|(a, b)| a.same_state(b))
    }
}

impl HexGrid for HexEngine {
    fn len(&self) -> usize {
        self.blocks.len()
    }

    fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    fn block_at(&self, i: i32, k: i32) -> Option<&Block> {
        if !self.in_range(i, k) {
            return None;
        }
        self.search(i, k).map(|index| &self.blocks[index])
    }

    /// Bounds are checked on the line values, so any `(i, k)` is accepted.
    fn in_range(&self, i: i32, k: i32) -> bool {
        lines::index_of(self.radius, i, k).is_some()
    }

    fn blocks(&self) -> Vec<Block> {
        self.blocks.clone()
    }

    /// Write one block onto a vacant position.
    fn insert(&mut self, block: Block) -> Result<(), GridError> {
        let (i, k) = block.hex().line_key();
        let index = self.search(i, k).ok_or(GridError::OutOfBounds { i, k })?;
        let target = &mut self.blocks[index];
        if target.state() {
            return Err(GridError::Overlap { i, k });
        }
        *target = Block::new(target.hex(), block.color(), block.state());
        Ok(())
    }
}

impl fmt::Display for HexEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexEngine[blocks = {{")?;
        for (index, block) in self.blocks.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", block)?;
        }
        write!(f, "}}]")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    fn small_engine() -> HexEngine {
        HexEngine::new(2)
    }

    #[test]
    fn test_engine_creation() {
        let engine = small_engine();
        assert_eq!(engine.radius(), 2);
        assert_eq!(engine.len(), 7);
        let centre = engine.block_at(0, 0).unwrap();
        assert!(!centre.state());
        assert_eq!(centre.color(), Color::Empty);
        assert_eq!(HexEngine::new(1).len(), 1);
        assert_eq!(HexEngine::new(4).len(), 37);
        assert_eq!(HexEngine::new(5).len(), 61);
    }

    #[test]
    #[should_panic(expected = "radius")]
    fn test_zero_radius_panics() {
        HexEngine::new(0);
    }

    #[test]
    fn test_storage_is_sorted() {
        for radius in 1..8 {
            let engine = HexEngine::new(radius);
            let keys: Vec<_> = engine.iter().map(|b| b.hex().line_key()).collect();
            assert!(keys.windows(2).all(|w| w[0] < w[1]), "radius {radius} out of order");
            assert!(engine.iter().all(|b| b.hex().in_range(radius as i32)));
        }
    }

    #[test]
    fn test_lookup_agrees_with_closed_form() {
        let engine = HexEngine::new(5);
        for (index, block) in engine.iter().enumerate() {
            let (i, k) = block.hex().line_key();
            assert_eq!(engine.search(i, k), Some(index));
            assert_eq!(engine.index_of(i, k), Some(index));
            assert_eq!(engine.block(index), Some(block));
        }
        assert!(engine.block_at(9, 9).is_none());
        assert!(engine.block_at(0, 5).is_none()); // J = 5
        assert!(engine.block_at(-1, 0).is_none());
    }

    #[test]
    fn test_in_range() {
        let engine = small_engine();
        assert!(engine.in_range(0, 0));
        assert!(engine.in_range(1, 1));
        assert!(!engine.in_range(3, 3));
    }

    #[test]
    fn test_extreme_coordinates_are_not_found() {
        let engine = HexEngine::new(3);
        let extremes = [
            (i32::MAX, 0),
            (0, i32::MAX),
            (i32::MIN, 0),
            (i32::MIN, i32::MAX),
            (i32::MAX, i32::MIN),
            (1 << 30, 1 << 30),
        ];
        for (i, k) in extremes {
            assert!(!engine.in_range(i, k));
            assert!(engine.block_at(i, k).is_none());
            assert!(!engine.state_at(i, k));
            assert_eq!(engine.count_neighbors(i, k, true), 0);
            assert_eq!(engine.index_of(i, k), None);
        }
    }

    #[test]
    fn test_set_state_stamps_tags() {
        let mut engine = small_engine();
        engine.set_state(0, 0, true);
        let block = *engine.block_at(0, 0).unwrap();
        assert!(block.state());
        assert_eq!(block.color(), Color::Filled);

        engine.set_color_index(0, Color::Index(4));
        engine.set_state(0, 0, true);
        assert_eq!(engine.block_at(0, 0).unwrap().color(), Color::Index(4), "unchanged state keeps the tag");

        engine.set_state(0, 0, false);
        let block = engine.block_at(0, 0).unwrap();
        assert!(!block.state());
        assert_eq!(block.color(), Color::Empty);

        engine.set_state(7, 7, true);
        assert_eq!(engine.filled(), 0);
    }

    #[test]
    fn test_reset() {
        let mut engine = small_engine();
        engine.set_state(0, 0, true);
        engine.set_color_index(3, Color::Index(2));
        engine.reset();
        assert_eq!(engine, small_engine());
        assert_eq!(engine.len(), 7);
    }

    #[test]
    fn test_fill_statistics() {
        let mut engine = small_engine();
        assert_eq!(engine.fill_ratio(), 0.0);
        engine.set_state(1, 1, true);
        engine.set_state(0, 1, true);
        assert_eq!(engine.filled(), 2);
        assert!((engine.fill_ratio() - 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_check_add() {
        let mut engine = small_engine();
        let mut piece = Piece::new(2, Color::Index(4));
        piece.add_at(0, 0);
        piece.add_at(0, 1);

        let origin = Hex::from_lines(0, 0);
        assert!(engine.check_add(origin, &piece));

        engine.set_state(0, 0, true);
        assert!(!engine.check_add(origin, &piece), "overlap must be rejected");
        assert!(!engine.check_add(Hex::from_lines(3, 3), &piece), "off-board must be rejected");
    }

    #[test]
    fn test_sparse_piece_only_claims_filled_blocks() {
        let mut engine = small_engine();
        engine.set_state(0, 0, true);
        let mut piece = Piece::new(3, Color::Index(1));
        piece.add_at(1, 1);
        // two unfilled slots become vacant placeholders at the origin
        assert!(engine.check_add(Hex::origin(), &piece));
        engine.add(Hex::origin(), &piece).unwrap();
        assert_eq!(engine.filled(), 2);
    }

    #[test]
    fn test_add() {
        let mut engine = small_engine();
        let mut piece = Piece::new(2, Color::Index(4));
        piece.add_at(0, 0);
        piece.add_at(0, 1);

        let origin = Hex::from_lines(0, 0);
        engine.add(origin, &piece).unwrap();
        assert!(engine.state_at(0, 0));
        assert!(engine.state_at(0, 1));
        assert_eq!(engine.block_at(0, 0).unwrap().color(), Color::Index(4));

        let overlapping = Piece::single(Color::Index(2));
        assert_eq!(
            engine.add(origin, &overlapping),
            Err(GridError::Overlap { i: 0, k: 0 })
        );
        assert_eq!(
            engine.add(Hex::from_lines(5, 5), &overlapping),
            Err(GridError::OutOfBounds { i: 5, k: 5 })
        );
    }

    #[test]
    fn test_failed_add_keeps_prefix() {
        let mut engine = small_engine();
        engine.set_state(1, 1, true);
        let mut piece = Piece::new(2, Color::Index(4));
        piece.add_at(0, 0);
        piece.add_at(1, 1);
        assert!(!engine.check_add(Hex::origin(), &piece));
        assert!(engine.add(Hex::origin(), &piece).is_err());
        // (0, 0) sorts first and was written before the overlap was found
        assert!(engine.state_at(0, 0));
    }

    #[test]
    fn test_check_positions() {
        let mut engine = small_engine();
        let piece = Piece::single(Color::Index(4));

        let positions = engine.check_positions(&piece);
        assert_eq!(positions.len(), 7);
        assert_eq!(positions[0], Hex::from_lines(0, 0));

        engine.set_state(0, 0, true);
        let positions = engine.check_positions(&piece);
        assert_eq!(positions.len(), 6);
        assert!(!positions.contains(&Hex::from_lines(0, 0)));
    }

    #[test]
    fn test_boolean_round_trip() {
        let mut engine = HexEngine::new(3);
        for (i, k) in [(0, 0), (2, 2), (4, 3), (1, 3)] {
            engine.set_state(i, k, true);
        }
        let data = engine.to_booleans();
        assert_eq!(data.len(), 19);
        assert_eq!(data.iter().filter(|&&s| s).count(), 4);

        let rebuilt = HexEngine::from_booleans(&data).unwrap();
        assert_eq!(rebuilt.radius(), 3);
        assert!(rebuilt.same_occupancy(&engine));
        assert_eq!(rebuilt, engine);
    }

    #[test]
    fn test_solve_radius() {
        assert_eq!(HexEngine::solve_radius(0), None);
        assert_eq!(HexEngine::solve_radius(1), Some(1));
        assert_eq!(HexEngine::solve_radius(7), Some(2));
        assert_eq!(HexEngine::solve_radius(19), Some(3));
        assert_eq!(HexEngine::solve_radius(37), Some(4));
        assert_eq!(HexEngine::solve_radius(61), Some(5));
        assert_eq!(HexEngine::solve_radius(8), None);
        assert_eq!(HexEngine::solve_radius(10), None);
        assert_eq!(HexEngine::solve_radius(13), None);
        assert_eq!(
            HexEngine::from_booleans(&[false; 10]).unwrap_err(),
            GridError::InvalidLength(10)
        );
    }

    #[test]
    fn test_equality_variants() {
        let mut a = small_engine();
        let mut b = small_engine();
        a.set_state(1, 0, true);
        b.set_state(1, 0, true);
        assert_eq!(a, b);

        b.set_color_index(2, Color::Index(9));
        assert_ne!(a, b);
        assert!(a.same_occupancy(&b));
        assert!(!a.same_occupancy(&HexEngine::new(3)));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut engine = small_engine();
        engine.set_state(0, 0, true);
        let mut copy = engine.clone();
        assert!(copy.state_at(0, 0));
        copy.set_state(0, 0, false);
        assert!(engine.state_at(0, 0));
    }

    #[test]
    fn test_display() {
        let engine = small_engine();
        let text = engine.to_string();
        assert!(text.starts_with("HexEngine[blocks = {{0, 0, 0, false}"));
        assert!(text.ends_with("}]"));
    }
}
