//! Hex grid geometry with raw and line coordinates
//!
//! A `Hex` stores a raw pair `(x, y)`. The three raw axis values are
//! `I = x`, `J = x + y`, `K = y`, so `I - J + K = 0` always holds.
//!
//! Line coordinates count whole grid steps along each axis:
//!
//! ```text
//!    I
//!   /
//!  /
//! o - - J
//!  \
//!   \
//!    K
//! ```
//!
//! - `line_i = (2y + x) / 3`
//! - `line_j = (x - y) / 3`
//! - `line_k = (2x + y) / 3`
//!
//! and `line_i + line_j - line_k = 0`. Every line pair maps to one raw pair,
//! but not every raw pair sits on a line; build coordinates with
//! [`Hex::from_lines`] unless the raw pair is known to be aligned.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// `sqrt(3) / 4`, the rectangular scale of one raw unit along J.
const HALF_SIN_60: f64 = 0.433_012_701_892_219_3;

/// Line offsets `(di, dk)` of the 7-cell neighbourhood, centre included.
///
/// The order is fixed: piece masks and entropy patterns both read it
/// most-significant bit first.
pub const NEIGHBORHOOD: [(i32, i32); 7] = [
    (-1, -1),
    (-1, 0),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
];

/// Line offsets `(di, dk)` of the six adjacent cells.
pub const NEIGHBORS: [(i32, i32); 6] = [
    (-1, -1),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
    (1, 1),
];

/// Hex coordinate in raw form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    x: i32,
    y: i32,
}

impl Hex {
    /// Raw constructor. Prefer [`Hex::from_lines`] for board positions.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Build the coordinate sitting on I-line `i` and K-line `k`.
    pub const fn from_lines(i: i32, k: i32) -> Self {
        Self::origin().shift_i(k).shift_k(i)
    }

    /// Raw constructor that refuses pairs lying between lines.
    pub fn try_from_raw(x: i32, y: i32) -> Result<Self, GridError> {
        let hex = Self::new(x, y);
        if hex.is_aligned() {
            Ok(hex)
        } else {
            Err(GridError::Unaligned { x, y })
        }
    }

    /// True when all three line values divide exactly.
    pub const fn is_aligned(&self) -> bool {
        (self.x - self.y) % 3 == 0
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    // ------------------------------------------------------------------------
    // Raw axis values
    // ------------------------------------------------------------------------

    pub const fn raw_i(&self) -> i32 {
        self.x
    }

    pub const fn raw_j(&self) -> i32 {
        self.x + self.y
    }

    pub const fn raw_k(&self) -> i32 {
        self.y
    }

    // ------------------------------------------------------------------------
    // Line values
    // ------------------------------------------------------------------------

    pub const fn line_i(&self) -> i32 {
        (2 * self.y + self.x) / 3
    }

    pub const fn line_j(&self) -> i32 {
        (self.x - self.y) / 3
    }

    pub const fn line_k(&self) -> i32 {
        (2 * self.x + self.y) / 3
    }

    /// `(line_i, line_j, line_k)`
    pub const fn lines(&self) -> (i32, i32, i32) {
        (self.line_i(), self.line_j(), self.line_k())
    }

    /// Sort key used by every grid: I-line first, then K-line.
    pub const fn line_key(&self) -> (i32, i32) {
        (self.line_i(), self.line_k())
    }

    pub const fn in_line_i(&self, line: i32) -> bool {
        self.line_i() == line
    }

    pub const fn in_line_j(&self, line: i32) -> bool {
        self.line_j() == line
    }

    pub const fn in_line_k(&self, line: i32) -> bool {
        self.line_k() == line
    }

    pub const fn same_line_i(&self, other: Hex) -> bool {
        self.line_i() == other.line_i()
    }

    pub const fn same_line_j(&self, other: Hex) -> bool {
        self.line_j() == other.line_j()
    }

    pub const fn same_line_k(&self, other: Hex) -> bool {
        self.line_k() == other.line_k()
    }

    // ------------------------------------------------------------------------
    // Shifts
    // ------------------------------------------------------------------------

    /// Shift `unit` steps along I (raw `+2, -1` per step).
    pub const fn shift_i(self, unit: i32) -> Self {
        Self::new(self.x + 2 * unit, self.y - unit)
    }

    /// Shift `unit` steps along J (raw `+1, +1` per step).
    pub const fn shift_j(self, unit: i32) -> Self {
        Self::new(self.x + unit, self.y + unit)
    }

    /// Shift `unit` steps along K (raw `-1, +2` per step).
    pub const fn shift_k(self, unit: i32) -> Self {
        Self::new(self.x - unit, self.y + 2 * unit)
    }

    pub fn move_i(&mut self, unit: i32) {
        *self = self.shift_i(unit);
    }

    pub fn move_j(&mut self, unit: i32) {
        *self = self.shift_j(unit);
    }

    pub fn move_k(&mut self, unit: i32) {
        *self = self.shift_k(unit);
    }

    // ------------------------------------------------------------------------
    // Adjacency
    // ------------------------------------------------------------------------

    /// One step higher on I than `other`.
    pub const fn front_i(&self, other: Hex) -> bool {
        self.x == other.x + 2 && self.y == other.y - 1
    }

    pub const fn front_j(&self, other: Hex) -> bool {
        self.x == other.x + 1 && self.y == other.y + 1
    }

    pub const fn front_k(&self, other: Hex) -> bool {
        self.x == other.x - 1 && self.y == other.y + 2
    }

    /// One step lower on I than `other`.
    pub const fn back_i(&self, other: Hex) -> bool {
        self.x == other.x - 2 && self.y == other.y + 1
    }

    pub const fn back_j(&self, other: Hex) -> bool {
        self.x == other.x - 1 && self.y == other.y - 1
    }

    pub const fn back_k(&self, other: Hex) -> bool {
        self.x == other.x + 1 && self.y == other.y - 2
    }

    pub const fn front(&self, other: Hex) -> bool {
        self.front_i(other) || self.front_j(other) || self.front_k(other)
    }

    pub const fn back(&self, other: Hex) -> bool {
        self.back_i(other) || self.back_j(other) || self.back_k(other)
    }

    /// Shares an edge with `other`.
    pub const fn adjacent(&self, other: Hex) -> bool {
        self.front(other) || self.back(other)
    }

    // ------------------------------------------------------------------------
    // Bounds and projection
    // ------------------------------------------------------------------------

    /// Check if this hex lies on a board of the given radius.
    ///
    /// The board is a hexagon: `0 <= I < 2r - 1`, `-r < J < r`, `0 <= K < 2r - 1`.
    pub const fn in_range(&self, radius: i32) -> bool {
        let (i, j, k) = self.lines();
        0 <= i && i < radius * 2 - 1 && -radius < j && j < radius && 0 <= k && k < radius * 2 - 1
    }

    /// Rectangular `(x, y)` position for drawing.
    pub fn to_rect(&self) -> (f64, f64) {
        (
            HALF_SIN_60 * f64::from(self.x + self.y),
            f64::from(self.x - self.y) / 4.0,
        )
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, other: Hex) -> Hex {
        Hex::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, j, k) = self.lines();
        write!(f, "{{I = {}, J = {}, K = {}}}", i, j, k)
    }
}
