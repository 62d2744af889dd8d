//! Line clearing
//!
//! A line is full when every block on it is occupied. Elimination marks the
//! full lines of all three axes against the same board state before clearing
//! any of them, so a block shared by two full lines is cleared once and lines
//! that only become full mid-pass are never considered.

use crate::block::Block;
use crate::engine::HexEngine;
use crate::lines::{self, Axis, LineRuns};

impl HexEngine {
    fn line(&self, axis: Axis, line: i32) -> Option<LineRuns> {
        lines::line_runs(self.radius(), axis, line)
    }

    fn is_full(&self, runs: &LineRuns) -> bool {
        let blocks = self.as_slice();
        runs.indices().all(|index| blocks[index].state())
    }

    /// Full lines of every axis, I first.
    fn full_lines(&self) -> impl Iterator<Item = (Axis, i32, LineRuns)> + '_ {
        Axis::ALL
            .into_iter()
            .flat_map(move |axis| {
                axis.lines(self.radius())
                    .filter_map(move |line| self.line(axis, line).map(|runs| (axis, line, runs)))
            })
            .filter(move |(_, _, runs)| self.is_full(runs))
    }

    /// Whether line `line` of `axis` exists and is full.
    pub fn check_eliminate_line(&self, axis: Axis, line: i32) -> bool {
        self.line(axis, line).is_some_and(|runs| self.is_full(&runs))
    }

    pub fn check_eliminate_i(&self, line: i32) -> bool {
        self.check_eliminate_line(Axis::I, line)
    }

    pub fn check_eliminate_j(&self, line: i32) -> bool {
        self.check_eliminate_line(Axis::J, line)
    }

    pub fn check_eliminate_k(&self, line: i32) -> bool {
        self.check_eliminate_line(Axis::K, line)
    }

    /// Whether any line on any axis is full.
    pub fn check_eliminate(&self) -> bool {
        self.full_lines().next().is_some()
    }

    /// Every full line as `(axis, line)`.
    pub fn eliminable_lines(&self) -> Vec<(Axis, i32)> {
        self.full_lines().map(|(axis, line, _)| (axis, line)).collect()
    }

    /// Count full lines, or with `count_lines` unset, the distinct blocks on them.
    pub fn count_eliminate(&self, count_lines: bool) -> usize {
        if count_lines {
            self.full_lines().count()
        } else {
            self.marked().1.iter().filter(|&&m| m).count()
        }
    }

    /// Number of full lines and per-index flags of the blocks on them.
    fn marked(&self) -> (usize, Vec<bool>) {
        let mut marked = vec![false; self.as_slice().len()];
        let mut lines = 0;
        for (_, _, runs) in self.full_lines() {
            lines += 1;
            for index in runs.indices() {
                marked[index] = true;
            }
        }
        (lines, marked)
    }

    /// Clear every full line.
    ///
    /// Returns copies of the cleared blocks as they were before clearing, in
    /// storage order. Cleared blocks take the default vacant tag.
    pub fn eliminate(&mut self) -> Vec<Block> {
        let (lines, marked) = self.marked();
        if lines == 0 {
            return Vec::new();
        }
        let cleared: Vec<Block> = self
            .iter()
            .zip(&marked)
            .filter(|&(_, &m)| m)
            .map(|(block, _)| *block)
            .collect();
        for (index, _) in marked.iter().enumerate().filter(|&(_, &m)| m) {
            self.set_state_index(index, false);
        }
        tracing::debug!(lines, blocks = cleared.len(), "eliminated");
        cleared
    }
}
