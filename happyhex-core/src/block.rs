//! Blocks: a hex coordinate with occupancy and a display color

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::Hex;

/// Display tag of a block. The engine never reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Default tag of a vacant engine block
    #[default]
    Empty,
    /// Default tag of an occupied engine block
    Filled,
    /// Palette index
    Index(u16),
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Default tag the engine stamps for a given occupancy.
    pub const fn for_state(state: bool) -> Self {
        if state {
            Color::Filled
        } else {
            Color::Empty
        }
    }
}

/// A single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    hex: Hex,
    state: bool,
    color: Color,
}

impl Block {
    pub const fn new(hex: Hex, color: Color, state: bool) -> Self {
        Self { hex, state, color }
    }

    /// Vacant block with the default tag.
    pub const fn empty(hex: Hex) -> Self {
        Self::new(hex, Color::Empty, false)
    }

    /// Vacant block on I-line `i`, K-line `k`.
    pub const fn at(i: i32, k: i32, color: Color) -> Self {
        Self::new(Hex::from_lines(i, k), color, false)
    }

    pub const fn hex(&self) -> Hex {
        self.hex
    }

    pub const fn line_i(&self) -> i32 {
        self.hex.line_i()
    }

    pub const fn line_j(&self) -> i32 {
        self.hex.line_j()
    }

    pub const fn line_k(&self) -> i32 {
        self.hex.line_k()
    }

    pub const fn state(&self) -> bool {
        self.state
    }

    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    pub fn toggle(&mut self) {
        self.state = !self.state;
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Copy of this block moved by `origin`; color and state are kept.
    pub fn translated(&self, origin: Hex) -> Self {
        Self::new(self.hex + origin, self.color, self.state)
    }

    /// Coordinate and occupancy match, color ignored.
    pub fn same_state(&self, other: &Block) -> bool {
        self.hex == other.hex && self.state == other.state
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, j, k) = self.hex.lines();
        write!(f, "{{{}, {}, {}, {}}}", i, j, k, self.state)
    }
}
