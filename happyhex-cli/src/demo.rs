//! Demo command - three crossing lines on a radius 4 board

use anyhow::Result;

use happyhex_core::HexEngine;

use crate::board_io::{encode_board, render_board};

/// Blocks filled by the demo: I-line 2, K-line 3 and the J = -1 diagonal
const DEMO_CELLS: [(i32, i32); 16] = [
    (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5),
    (0, 3), (1, 3), (3, 3), (4, 3), (5, 3), (6, 3),
    (1, 0), (3, 2), (5, 4), (6, 5),
];

fn demo_board() -> HexEngine {
    let mut engine = HexEngine::new(4);
    for (i, k) in DEMO_CELLS {
        engine.set_state(i, k, true);
    }
    engine
}

pub fn run() -> Result<()> {
    let mut engine = demo_board();

    println!("{}", render_board(&engine));
    println!("{}", encode_board(&engine));
    println!("{} blocks filled", engine.filled());

    for (axis, line) in engine.eliminable_lines() {
        println!("full line: {:?} = {}", axis, line);
    }

    let cleared = engine.eliminate();
    tracing::info!("Cleared {} blocks", cleared.len());

    println!("\nAfter elimination");
    println!("{}", render_board(&engine));
    println!("{}", encode_board(&engine));
    println!("{} blocks filled", engine.filled());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_board() {
        let mut engine = demo_board();
        assert_eq!(engine.filled(), 16);
        assert_eq!(engine.count_eliminate(true), 3);
        assert_eq!(engine.eliminate().len(), 16);
    }
}
