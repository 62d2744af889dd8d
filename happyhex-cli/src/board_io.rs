//! Text encodings of a board
//!
//! Boards travel on the command line as `0`/`1` strings in storage order and
//! are printed as hexagons, one I-line per row.

use anyhow::{bail, Context, Result};

use happyhex_core::HexEngine;

/// Parse a `0`/`1` string; whitespace is ignored.
pub fn parse_board(text: &str) -> Result<HexEngine> {
    let bits = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => bail!("invalid board character {:?}, expected 0 or 1", other),
        })
        .collect::<Result<Vec<bool>>>()?;
    HexEngine::from_booleans(&bits)
        .with_context(|| format!("a board of {} blocks is not hexagonal", bits.len()))
}

pub fn encode_board(engine: &HexEngine) -> String {
    engine
        .to_booleans()
        .iter()
        .map(|&state| if state { '1' } else { '0' })
        .collect()
}

/// Hexagon drawing with `#` for occupied and `.` for vacant blocks.
pub fn render_board(engine: &HexEngine) -> String {
    let middle = engine.radius() as i32 - 1;
    let mut out = String::new();
    let mut row = None;
    for block in engine.iter() {
        let i = block.line_i();
        if row != Some(i) {
            if row.is_some() {
                out.push('\n');
            }
            out.push_str(&" ".repeat((middle - i).unsigned_abs() as usize));
            row = Some(i);
        } else {
            out.push(' ');
        }
        out.push(if block.state() { '#' } else { '.' });
    }
    out.push('\n');
    out
}

/// Board from an optional bit string, or an empty board of `radius`.
pub fn board_or_empty(board: Option<&str>, radius: usize) -> Result<HexEngine> {
    match board {
        Some(text) => {
            let engine = parse_board(text)?;
            if engine.radius() != radius {
                tracing::info!(
                    "Board encodes radius {}, ignoring --radius {}",
                    engine.radius(),
                    radius
                );
            }
            Ok(engine)
        }
        None => {
            if radius == 0 {
                bail!("radius must be at least 1");
            }
            Ok(HexEngine::new(radius))
        }
    }
}
