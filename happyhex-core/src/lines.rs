//! Closed-form line membership for the engine's storage order
//!
//! The engine stores the `1 + 3r(r-1)` blocks of a radius-`r` board sorted by
//! I-line, then K-line. Each I-line is therefore a row, and rows grow by one
//! block up to the middle row (`2r - 1` blocks) and shrink symmetrically after
//! it:
//!
//! ```text
//! row a      length        first K
//! a <  r     r + a         0
//! a >= r     3r - 2 - a    a - r + 1
//! ```
//!
//! From the row lengths every line's member indices follow without scanning:
//! I-lines are contiguous rows, while K-lines and J-lines visit one block per
//! row with a stride that grows by one per row across the growing half and
//! shrinks by one across the shrinking half. A line is described by at most
//! two [`Run`]s, one per half.

use std::ops::RangeInclusive;

/// One of the three line directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    I,
    J,
    K,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::I, Axis::J, Axis::K];

    /// Line values present on a board of `radius`.
    pub fn lines(self, radius: usize) -> RangeInclusive<i32> {
        let r = radius as i32;
        match self {
            Axis::I | Axis::K => 0..=2 * r - 2,
            Axis::J => 1 - r..=r - 1,
        }
    }
}

/// Block count of a board of `radius`.
pub const fn size(radius: usize) -> usize {
    if radius == 0 {
        0
    } else {
        1 + 3 * radius * (radius - 1)
    }
}

/// Length of row (I-line) `a`.
pub const fn row_len(radius: usize, a: usize) -> usize {
    if a < radius {
        radius + a
    } else {
        3 * radius - 2 - a
    }
}

/// Smallest K-line value in row `a`.
pub const fn row_first_k(radius: usize, a: usize) -> usize {
    if a < radius {
        0
    } else {
        a + 1 - radius
    }
}

/// Storage index of the first block in row `a`.
///
/// The shrinking half mirrors the growing half: the rows after `a` hold as
/// many blocks as the rows before `2r - 1 - a`.
pub const fn row_start(radius: usize, a: usize) -> usize {
    if a < radius {
        a * radius + a * a.saturating_sub(1) / 2
    } else {
        size(radius) - row_start(radius, 2 * radius - 1 - a)
    }
}

/// Storage index of line coordinate `(i, k)`, or `None` off the board.
pub fn index_of(radius: usize, i: i32, k: i32) -> Option<usize> {
    let r = radius as i32;
    let on_board = (0..2 * r - 1).contains(&i)
        && (0..2 * r - 1).contains(&k)
        && k.checked_sub(i).is_some_and(|j| (1 - r..r).contains(&j));
    if !on_board {
        return None;
    }
    let a = i as usize;
    Some(row_start(radius, a) + k as usize - row_first_k(radius, a))
}

/// An index walk with a linearly changing stride
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub count: usize,
    pub stride: isize,
    pub accel: isize,
}

impl Run {
    pub const EMPTY: Run = Run {
        start: 0,
        count: 0,
        stride: 0,
        accel: 0,
    };

    pub fn indices(self) -> RunIter {
        RunIter {
            next: self.start,
            remaining: self.count,
            stride: self.stride,
            accel: self.accel,
        }
    }
}

/// Iterator over the indices of a [`Run`]
#[derive(Clone, Debug)]
pub struct RunIter {
    next: usize,
    remaining: usize,
    stride: isize,
    accel: isize,
}

impl Iterator for RunIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = (current as isize + self.stride) as usize;
            self.stride += self.accel;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RunIter {}

/// Member indices of one line: the growing-half run, then the shrinking-half run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineRuns {
    runs: [Run; 2],
}

impl LineRuns {
    pub fn runs(&self) -> &[Run; 2] {
        &self.runs
    }

    /// Number of blocks on the line.
    pub fn len(&self) -> usize {
        self.runs[0].count + self.runs[1].count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage indices of the line, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let [growing, shrinking] = self.runs;
        growing.indices().chain(shrinking.indices())
    }
}

/// Runs covering line `line` of `axis`, or `None` if the board has no such line.
pub fn line_runs(radius: usize, axis: Axis, line: i32) -> Option<LineRuns> {
    if radius == 0 || !axis.lines(radius).contains(&line) {
        return None;
    }
    let r = radius as i32;
    let runs = match axis {
        Axis::I => {
            let a = line as usize;
            [
                Run {
                    start: row_start(radius, a),
                    count: row_len(radius, a),
                    stride: 1,
                    accel: 0,
                },
                Run::EMPTY,
            ]
        }
        // one block per row at K = line; row i steps by the length of row i,
        // less one once rows start losing their low end
        Axis::K => split_walk(
            radius,
            (line - r + 1).max(0),
            (line + r - 1).min(2 * r - 2),
            |i| (i, line),
            |i| r + i,
            |i| 3 * r - 3 - i,
        )?,
        // one block per row at K = I + line; each step also moves one K-line
        Axis::J => split_walk(
            radius,
            (-line).max(0),
            (2 * r - 2 - line).min(2 * r - 2),
            |i| (i, i + line),
            |i| r + i + 1,
            |i| 3 * r - 2 - i,
        )?,
    };
    Some(LineRuns { runs })
}

/// Build the two runs of a line visiting rows `first..=last`.
///
/// `at` maps a row to the member's line coordinate, `grow` and `shrink` give
/// the stride leaving that row in each half.
fn split_walk(
    radius: usize,
    first: i32,
    last: i32,
    at: impl Fn(i32) -> (i32, i32),
    grow: impl Fn(i32) -> i32,
    shrink: impl Fn(i32) -> i32,
) -> Option<[Run; 2]> {
    let middle = radius as i32 - 1;
    let growing = if first < middle {
        let (i, k) = at(first);
        Run {
            start: index_of(radius, i, k)?,
            count: (middle - first) as usize,
            stride: grow(first) as isize,
            accel: 1,
        }
    } else {
        Run::EMPTY
    };
    let turn = first.max(middle);
    let (i, k) = at(turn);
    let shrinking = Run {
        start: index_of(radius, i, k)?,
        count: (last - turn + 1) as usize,
        stride: shrink(turn) as isize,
        accel: -1,
    };
    Some([growing, shrinking])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::Hex;

    /// Line coordinates in generation order.
    fn layout(radius: usize) -> Vec<(i32, i32)> {
        let r = radius as i32;
        let mut cells = Vec::new();
        for a in 0..2 * r {
            for b in 0..2 * r {
                if Hex::from_lines(a, b).in_range(r) {
                    cells.push((a, b));
                }
            }
        }
        cells
    }

    fn line_value(axis: Axis, (i, k): (i32, i32)) -> i32 {
        match axis {
            Axis::I => i,
            Axis::J => k - i,
            Axis::K => k,
        }
    }

    #[test]
    fn test_size_formula() {
        assert_eq!(size(0), 0);
        assert_eq!(size(1), 1);
        assert_eq!(size(2), 7);
        assert_eq!(size(4), 37);
        for radius in 1..10 {
            assert_eq!(layout(radius).len(), size(radius));
        }
    }

    #[test]
    fn test_index_of_matches_layout() {
        for radius in 1..9 {
            for (index, &(i, k)) in layout(radius).iter().enumerate() {
                assert_eq!(index_of(radius, i, k), Some(index), "r={radius} ({i}, {k})");
            }
            let r = radius as i32;
            assert_eq!(index_of(radius, -1, 0), None);
            assert_eq!(index_of(radius, 0, r), None);
            assert_eq!(index_of(radius, 2 * r - 1, 2 * r - 2), None);
            assert_eq!(index_of(radius, i32::MIN, i32::MAX), None);
            assert_eq!(index_of(radius, i32::MAX, i32::MIN), None);
        }
    }

    #[test]
    fn test_rows_partition_the_board() {
        for radius in 1..9 {
            let rows = 2 * radius - 1;
            let total: usize = (0..rows).map(|a| row_len(radius, a)).sum();
            assert_eq!(total, size(radius));
            assert_eq!(row_start(radius, rows - 1) + row_len(radius, rows - 1), size(radius));
            for a in 1..rows {
                assert_eq!(row_start(radius, a), row_start(radius, a - 1) + row_len(radius, a - 1));
            }
        }
    }

    #[test]
    fn test_runs_match_brute_force_scan() {
        for radius in 1..9 {
            let cells = layout(radius);
            for axis in Axis::ALL {
                for line in axis.lines(radius) {
                    let expected: Vec<usize> = cells
                        .iter()
                        .enumerate()
                        .filter(|(_, cell)| line_value(axis, **cell) == line)
                        .map(|(index, _)| index)
                        .collect();
                    let runs = line_runs(radius, axis, line).unwrap();
                    let actual: Vec<usize> = runs.indices().collect();
                    assert_eq!(actual, expected, "r={radius} {axis:?}={line}");
                    assert_eq!(runs.len(), expected.len());
                }
            }
        }
    }

    #[test]
    fn test_line_lengths() {
        let radius = 4;
        for axis in Axis::ALL {
            let lengths: Vec<usize> = axis
                .lines(radius)
                .map(|line| line_runs(radius, axis, line).unwrap().len())
                .collect();
            assert_eq!(lengths, vec![4, 5, 6, 7, 6, 5, 4], "{axis:?}");
        }
    }

    #[test]
    fn test_missing_lines() {
        assert!(line_runs(3, Axis::I, -1).is_none());
        assert!(line_runs(3, Axis::I, 5).is_none());
        assert!(line_runs(3, Axis::J, 3).is_none());
        assert!(line_runs(3, Axis::J, -3).is_none());
        assert!(line_runs(3, Axis::K, 5).is_none());
        assert!(line_runs(0, Axis::I, 0).is_none());
    }

    #[test]
    fn test_radius_one() {
        for axis in Axis::ALL {
            let runs = line_runs(1, axis, 0).unwrap();
            assert_eq!(runs.indices().collect::<Vec<_>>(), vec![0]);
        }
    }
}
