//! Error types for grid operations

/// Error types for placement and decoding
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("block ({i}, {k}) lies outside the grid")]
    OutOfBounds { i: i32, k: i32 },

    #[error("cannot add into existing block at ({i}, {k})")]
    Overlap { i: i32, k: i32 },

    #[error("adding a grid to a piece is prohibited, add block by block")]
    PieceMerge,

    #[error("piece has no free slot")]
    PieceFull,

    #[error("piece mask must contain at least one block")]
    EmptyMask,

    #[error("piece mask {0:#04x} has its most significant bit set")]
    InvalidMask(u8),

    #[error("no radius produces a board of {0} blocks")]
    InvalidLength(usize),

    #[error("raw coordinate ({x}, {y}) does not sit on a line")]
    Unaligned { x: i32, y: i32 },
}
