//! Line elimination benchmark
//!
//! Times the closed-form line passes against a scan that locates each line by
//! comparing line values over the whole board, on seeded random boards of
//! increasing radius.

use std::time::Instant;

use happyhex_core::{Axis, Color, HexEngine, HexGrid, Piece, ScoringConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ITERATIONS: usize = 200;
const FILL: f64 = 0.8;

// ============================================================================
// BOARDS
// ============================================================================

fn random_board(radius: usize, rng: &mut ChaCha8Rng) -> HexEngine {
    let mut engine = HexEngine::new(radius);
    for index in 0..engine.len() {
        engine.set_state_index(index, rng.gen_bool(FILL));
    }
    engine
}

/// Full-line count found by scanning the board once per line.
fn scan_full_lines(engine: &HexEngine) -> usize {
    let radius = engine.radius();
    Axis::ALL
        .iter()
        .flat_map(|&axis| axis.lines(radius).map(move |line| (axis, line)))
        .filter(|&(axis, line)| {
            engine
                .iter()
                .filter(|block| {
                    let (i, k) = block.hex().line_key();
                    match axis {
                        Axis::I => i == line,
                        Axis::J => k - i == line,
                        Axis::K => k == line,
                    }
                })
                .all(|block| block.state())
        })
        .count()
}

fn time_ms<T>(mut f: impl FnMut() -> T) -> (f64, T) {
    let start = Instant::now();
    let mut last = f();
    for _ in 1..ITERATIONS {
        last = f();
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    (elapsed / ITERATIONS as f64, last)
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    println!("\n=== LINE COUNT: closed form vs scan ===");
    println!("{:>6} {:>6} {:>12} {:>12} {:>6}", "radius", "blocks", "runs (ms)", "scan (ms)", "lines");
    for radius in [4, 5, 8, 12, 16] {
        let engine = random_board(radius, &mut rng);
        let (runs_ms, lines) = time_ms(|| engine.count_eliminate(true));
        let (scan_ms, scanned) = time_ms(|| scan_full_lines(&engine));
        assert_eq!(lines, scanned, "closed form disagrees with scan at radius {}", radius);
        println!(
            "{:>6} {:>6} {:>12.4} {:>12.4} {:>6}",
            radius,
            engine.len(),
            runs_ms,
            scan_ms,
            lines
        );
    }

    println!("\n=== ELIMINATE ===");
    for radius in [4, 8, 16] {
        let board = random_board(radius, &mut rng);
        let (ms, cleared) = time_ms(|| board.clone().eliminate().len());
        println!("radius {:>2}: {:.4}ms per pass ({} blocks cleared)", radius, ms, cleared);
    }

    println!("\n=== RANK POSITIONS ===");
    let config = ScoringConfig::default();
    let piece = Piece::from_mask(0b011_1010, Color::Index(1)).expect("valid mask");
    for radius in [4, 5, 8] {
        let mut board = random_board(radius, &mut rng);
        board.eliminate();
        let start = Instant::now();
        let ranked = board.rank_positions(&piece, &config);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        println!("radius {:>2}: {} candidates in {:.2}ms", radius, ranked.len(), elapsed);
    }
}
