//! Pieces: small placeable clusters of blocks

use std::fmt;

use crate::block::{Block, Color};
use crate::error::GridError;
use crate::grid::HexGrid;
use crate::hex::{Hex, NEIGHBORHOOD};

/// Width of a neighbourhood mask.
const MASK_BITS: usize = NEIGHBORHOOD.len();

/// A fixed number of block slots sharing one color
///
/// Slots fill front to back; unfilled slots stay `None`. Every stored block
/// is occupied, carries the piece color and has a coordinate of its own.
#[derive(Clone, Debug)]
pub struct Piece {
    slots: Box<[Option<Block>]>,
    color: Color,
}

impl Piece {
    /// Empty piece with `len` slots (at least one).
    pub fn new(len: usize, color: Color) -> Self {
        Self {
            slots: vec![None; len.max(1)].into_boxed_slice(),
            color,
        }
    }

    /// One occupied block at the origin.
    pub fn single(color: Color) -> Self {
        let mut piece = Self::new(1, color);
        piece.add_at(0, 0);
        piece
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Recolor the piece and every stored block.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        for block in self.slots.iter_mut().flatten() {
            block.set_color(color);
        }
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Put `block` in the first free slot, stamped with the piece color and
    /// marked occupied. Returns false when every slot is taken or the
    /// coordinate is already held.
    pub fn add(&mut self, block: Block) -> bool {
        let (i, k) = block.hex().line_key();
        if self.find(i, k).is_some() {
            return false;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(Block::new(block.hex(), self.color, true));
                true
            }
            None => false,
        }
    }

    /// Add an occupied block at line coordinate `(i, k)`.
    pub fn add_at(&mut self, i: i32, k: i32) -> bool {
        self.add(Block::at(i, k, self.color))
    }

    /// Encode the piece as a 7-bit neighbourhood mask.
    ///
    /// Bit 6 is `(-1, -1)` and bit 0 is `(1, 1)`, following [`NEIGHBORHOOD`].
    /// Blocks outside the neighbourhood are not represented.
    pub fn to_mask(&self) -> u8 {
        NEIGHBORHOOD
            .iter()
            .fold(0u8, |mask, &(i, k)| (mask << 1) | u8::from(self.state_at(i, k)))
    }

    /// Decode a 7-bit neighbourhood mask.
    pub fn from_mask(mask: u8, color: Color) -> Result<Self, GridError> {
        if mask & 0x80 != 0 {
            return Err(GridError::InvalidMask(mask));
        }
        if mask == 0 {
            return Err(GridError::EmptyMask);
        }
        let mut piece = Self::new(mask.count_ones() as usize, color);
        for (bit, &(i, k)) in NEIGHBORHOOD.iter().enumerate() {
            if (mask >> (MASK_BITS - 1 - bit)) & 1 == 1 {
                piece.add_at(i, k);
            }
        }
        Ok(piece)
    }

    fn find(&self, i: i32, k: i32) -> Option<&Block> {
        self.slots
            .iter()
            .flatten()
            .find(|b| b.line_i() == i && b.line_k() == k)
    }
}

impl HexGrid for Piece {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn block(&self, index: usize) -> Option<&Block> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn block_at(&self, i: i32, k: i32) -> Option<&Block> {
        self.find(i, k)
    }

    fn in_range(&self, i: i32, k: i32) -> bool {
        self.find(i, k).is_some()
    }

    /// Sorted snapshot; unfilled slots become vacant placeholders at the
    /// origin and sort last.
    fn blocks(&self) -> Vec<Block> {
        let mut filled: Vec<Block> = self.slots.iter().flatten().copied().collect();
        filled.sort_by_key(|b| b.hex().line_key());
        let placeholder = Block::new(Hex::origin(), self.color, false);
        filled.resize(self.slots.len(), placeholder);
        filled
    }

    fn insert(&mut self, block: Block) -> Result<(), GridError> {
        let (i, k) = block.hex().line_key();
        if self.find(i, k).is_some() {
            return Err(GridError::Overlap { i, k });
        }
        if self.add(block) {
            Ok(())
        } else {
            Err(GridError::PieceFull)
        }
    }

    fn merge(&mut self, _origin: Hex, _other: &dyn HexGrid) -> Result<(), GridError> {
        Err(GridError::PieceMerge)
    }
}

impl PartialEq for Piece {
    /// Same length and the same sorted blocks; colors are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .blocks()
                .iter()
                .zip(other.blocks().iter())
                .all(|(a, b)| a.same_state(b))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece{{")?;
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(block) => write!(f, "{}", block)?,
                None => write!(f, "null")?,
            }
        }
        write!(f, "}}")
    }
}
