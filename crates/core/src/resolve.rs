//! Resolution pipeline - lock, row clearing, fruit streaks, compaction
//!
//! One pass resolves at most one event of each kind, in this order:
//!
//! 1. the lowest full row is emptied and everything above it drops one row;
//! 2. the first column streak (columns left to right, scanned bottom to top) is removed
//!    and the cells above it drop by the streak length;
//! 3. the first row streak (rows bottom to top, scanned left to right) is removed and,
//!    in each of its columns, the cells above drop by one.
//!
//! A streak is a maximal run of at least [`STREAK_MIN`] equal fruits; an empty cell or a
//! different fruit ends the run. Each step scans the board as the previous step left it.

use arrayvec::ArrayVec;

use crate::types::{Cell, ClearPolicy, Fruit, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH, STREAK_MIN};
use crate::{Board, Piece};

/// Upper bound on productive passes: each one removes at least `STREAK_MIN` cells.
pub const MAX_PASSES: usize = BOARD_CELLS / STREAK_MIN + 1;

/// Direction a streak runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Column,
    Row,
}

/// A run of same-kind fruit selected for clearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Streak {
    pub axis: Axis,
    /// Column index for `Axis::Column`, row index for `Axis::Row`
    pub line: i8,
    /// First row (column streak) or first column (row streak) of the run
    pub start: i8,
    pub len: u8,
    pub fruit: Fruit,
}

impl Streak {
    /// Board positions covered by the run
    pub fn positions(&self) -> impl Iterator<Item = (i8, i8)> {
        let Streak {
            axis, line, start, ..
        } = *self;
        (start..start + self.len as i8).map(move |i| match axis {
            Axis::Column => (line, i),
            Axis::Row => (i, line),
        })
    }
}

/// What one resolution pass removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveReport {
    pub cleared_row: Option<i8>,
    pub column_streak: Option<Streak>,
    pub row_streak: Option<Streak>,
}

impl ResolveReport {
    /// True when the pass changed nothing
    pub fn is_stable(&self) -> bool {
        self.cleared_row.is_none() && self.column_streak.is_none() && self.row_streak.is_none()
    }

    pub fn rows_cleared(&self) -> u32 {
        self.cleared_row.is_some() as u32
    }

    pub fn streaks_cleared(&self) -> u32 {
        self.column_streak.is_some() as u32 + self.row_streak.is_some() as u32
    }

    pub fn cells_cleared(&self) -> u32 {
        let row = self.rows_cleared() * BOARD_WIDTH as u32;
        let streaks = [self.column_streak, self.row_streak]
            .iter()
            .flatten()
            .map(|s| s.len as u32)
            .sum::<u32>();
        row + streaks
    }
}

/// Write the piece's four fruits into the board.
///
/// # Panics
///
/// Panics if a piece cell is off the board or already occupied; collision checks
/// upstream rule both out.
pub fn merge_piece(board: &mut Board, piece: &Piece) {
    for ((col, row), fruit) in piece.cells() {
        assert!(
            board.get(col, row).is_none(),
            "lock overlaps locked cell at ({}, {})",
            col,
            row
        );
        board.set(col, row, Some(fruit));
    }
}

/// Lowest full row, if any
pub fn first_full_row(board: &Board) -> Option<i8> {
    (0..BOARD_HEIGHT as i8).find(|&row| board.is_full(row))
}

/// Clear the lowest full row and compact; returns the cleared row index
pub fn clear_first_full_row(board: &mut Board) -> Option<i8> {
    let row = first_full_row(board)?;
    board.clear_row(row);
    Some(row)
}

/// First maximal run of at least `STREAK_MIN` equal fruits as (start, len, fruit)
///
/// The run is reported at full length, so a run of five clears all five cells rather
/// than three of them.
pub fn first_run(cells: impl IntoIterator<Item = Cell>) -> Option<(usize, usize, Fruit)> {
    let mut run: Option<(usize, usize, Fruit)> = None;

    for (i, cell) in cells.into_iter().enumerate() {
        match (cell, run) {
            (Some(fruit), Some((start, len, current))) if fruit == current => {
                run = Some((start, len + 1, current));
            }
            _ => {
                if let Some(done) = run.filter(|&(_, len, _)| len >= STREAK_MIN) {
                    return Some(done);
                }
                run = cell.map(|fruit| (i, 1, fruit));
            }
        }
    }

    run.filter(|&(_, len, _)| len >= STREAK_MIN)
}

/// First column streak: columns left to right, each scanned bottom to top
pub fn find_column_streak(board: &Board) -> Option<Streak> {
    (0..BOARD_WIDTH as i8).find_map(|col| {
        first_run(board.column(col)).map(|(start, len, fruit)| Streak {
            axis: Axis::Column,
            line: col,
            start: start as i8,
            len: len as u8,
            fruit,
        })
    })
}

/// First row streak: rows bottom to top, each scanned left to right
pub fn find_row_streak(board: &Board) -> Option<Streak> {
    (0..BOARD_HEIGHT as i8).find_map(|row| {
        first_run(board.row(row).iter().copied()).map(|(start, len, fruit)| Streak {
            axis: Axis::Row,
            line: row,
            start: start as i8,
            len: len as u8,
            fruit,
        })
    })
}

/// Remove a streak's cells and drop whatever sat above them
pub fn clear_streak(board: &mut Board, streak: &Streak) {
    match streak.axis {
        Axis::Column => board.remove_from_column(streak.line, streak.start, streak.len as usize),
        Axis::Row => {
            for (col, row) in streak.positions() {
                board.remove_from_column(col, row, 1);
            }
        }
    }
}

/// Run one pass: one full row, one column streak, one row streak at most
pub fn resolve_pass(board: &mut Board) -> ResolveReport {
    let cleared_row = clear_first_full_row(board);

    let column_streak = find_column_streak(board);
    if let Some(streak) = &column_streak {
        clear_streak(board, streak);
    }

    let row_streak = find_row_streak(board);
    if let Some(streak) = &row_streak {
        clear_streak(board, streak);
    }

    ResolveReport {
        cleared_row,
        column_streak,
        row_streak,
    }
}

/// Resolve the board under `policy`, returning every productive pass in order.
///
/// An already stable board yields no passes and is left untouched.
pub fn resolve(board: &mut Board, policy: ClearPolicy) -> ArrayVec<ResolveReport, MAX_PASSES> {
    let mut passes = ArrayVec::new();

    loop {
        let report = resolve_pass(board);
        if report.is_stable() {
            break;
        }
        passes.push(report);
        if policy == ClearPolicy::Single || passes.is_full() {
            break;
        }
    }

    passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    const A: Cell = Some(Fruit::Cherry);
    const B: Cell = Some(Fruit::Lime);

    #[test]
    fn test_first_run_requires_three() {
        assert_eq!(first_run([A, A, None, A, A]), None);
        assert_eq!(first_run([B, A, A, A, B]), Some((1, 3, Fruit::Cherry)));
    }

    #[test]
    fn test_first_run_is_maximal() {
        // Whole run, not just the first three cells
        assert_eq!(first_run([A, A, A, A, A, B]), Some((0, 5, Fruit::Cherry)));
    }

    #[test]
    fn test_first_run_resets_on_kind_change() {
        assert_eq!(first_run([A, A, B, A, B, B]), None);
        assert_eq!(first_run([A, A, B, B, B]), Some((2, 3, Fruit::Lime)));
    }

    #[test]
    fn test_first_run_at_end_of_line() {
        assert_eq!(first_run([None, None, B, B, B]), Some((2, 3, Fruit::Lime)));
    }

    #[test]
    fn test_merge_piece_writes_fruit_per_cell() {
        let mut board = Board::new();
        let fruits = [Fruit::Cherry, Fruit::Orange, Fruit::Banana, Fruit::Lime];
        let piece = Piece::new(ShapeKind::I, fruits).at(4, 0);
        merge_piece(&mut board, &piece);

        assert_eq!(board.get(3, 0), Some(Fruit::Cherry));
        assert_eq!(board.get(5, 0), Some(Fruit::Orange));
        assert_eq!(board.get(4, 0), Some(Fruit::Banana));
        assert_eq!(board.get(6, 0), Some(Fruit::Lime));
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    #[should_panic(expected = "lock overlaps")]
    fn test_merge_piece_rejects_overlap() {
        let mut board = Board::new();
        board.set(4, 0, B);
        let piece = Piece::new(ShapeKind::I, [Fruit::Grape; 4]).at(4, 0);
        merge_piece(&mut board, &piece);
    }

    #[test]
    fn test_report_counts() {
        let report = ResolveReport {
            cleared_row: Some(0),
            column_streak: Some(Streak {
                axis: Axis::Column,
                line: 0,
                start: 0,
                len: 4,
                fruit: Fruit::Grape,
            }),
            row_streak: None,
        };
        assert_eq!(report.rows_cleared(), 1);
        assert_eq!(report.streaks_cleared(), 1);
        assert_eq!(report.cells_cleared(), 14);
        assert!(!report.is_stable());
        assert!(ResolveReport::default().is_stable());
    }

    #[test]
    fn test_row_streak_positions() {
        let streak = Streak {
            axis: Axis::Row,
            line: 7,
            start: 2,
            len: 3,
            fruit: Fruit::Orange,
        };
        let pos: Vec<_> = streak.positions().collect();
        assert_eq!(pos, vec![(2, 7), (3, 7), (4, 7)]);
    }
}
