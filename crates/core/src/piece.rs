//! Piece module - the falling four-cell shape
//!
//! A piece is an anchor cell plus three offsets measured from it. Cells are numbered
//! 0..4 with the anchor at index [`PIVOT`]; offsets belong to cells 0, 1 and 3.
//! Each cell carries its own fruit.
//!
//! Rotation turns the offsets 90° about the anchor and never touches fruit; shuffling
//! re-rolls fruit and never touches geometry. Neither checks the board: callers
//! validate a transformed copy before committing it.

use crate::rng::SimpleRng;
use crate::types::{Fruit, ShapeKind, SPAWN_COL, SPAWN_ROW};

/// Offset of a cell relative to the anchor, as (Δcol, Δrow)
pub type Offset = (i8, i8);

/// Index of the anchor cell among the four piece cells
pub const PIVOT: usize = 2;

/// Canonical offsets for cells 0, 1 and 3 of each shape.
///
/// Every offset has Δrow <= 0 so a piece spawned on the top row fits on the board.
pub fn spawn_offsets(kind: ShapeKind) -> [Offset; 3] {
    match kind {
        ShapeKind::I => [(-1, 0), (1, 0), (2, 0)],
        ShapeKind::O => [(1, 0), (0, -1), (1, -1)],
        ShapeKind::T => [(-1, 0), (1, 0), (0, -1)],
        ShapeKind::S => [(1, 0), (0, -1), (-1, -1)],
        ShapeKind::Z => [(-1, 0), (0, -1), (1, -1)],
        ShapeKind::J => [(-1, 0), (1, 0), (1, -1)],
        ShapeKind::L => [(-1, 0), (1, 0), (-1, -1)],
    }
}

/// Turn an offset 90° clockwise (with rows growing upwards)
#[inline]
pub fn rotate_offset((dc, dr): Offset) -> Offset {
    (dr, -dc)
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    /// Anchor column
    pub col: i8,
    /// Anchor row
    pub row: i8,
    /// Offsets of cells 0, 1 and 3
    pub offsets: [Offset; 3],
    /// Fruit of cells 0..4 (index 2 is the anchor)
    pub fruits: [Fruit; 4],
}

impl Piece {
    /// Create a piece in canonical orientation at the spawn position
    pub fn new(kind: ShapeKind, fruits: [Fruit; 4]) -> Self {
        Self {
            kind,
            col: SPAWN_COL,
            row: SPAWN_ROW,
            offsets: spawn_offsets(kind),
            fruits,
        }
    }

    /// Spawn a random shape with four independently random fruits
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let kind = rng.next_shape();
        let fruits = rng.next_fruits();
        Self::new(kind, fruits)
    }

    /// Same piece with its anchor moved to (col, row)
    pub fn at(self, col: i8, row: i8) -> Self {
        Self { col, row, ..self }
    }

    /// Same piece moved by (dc, dr)
    pub fn shifted(&self, dc: i8, dr: i8) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
            ..*self
        }
    }

    /// Same anchor and fruit, offsets turned 90° about the anchor
    pub fn rotated(&self) -> Self {
        Self {
            offsets: self.offsets.map(rotate_offset),
            ..*self
        }
    }

    /// Same geometry, four freshly drawn fruits
    pub fn shuffled(&self, rng: &mut SimpleRng) -> Self {
        Self {
            fruits: rng.next_fruits(),
            ..*self
        }
    }

    /// Board positions of cells 0..4
    pub fn cell_positions(&self) -> [(i8, i8); 4] {
        let [a, b, d] = self.offsets;
        [
            (self.col + a.0, self.row + a.1),
            (self.col + b.0, self.row + b.1),
            (self.col, self.row),
            (self.col + d.0, self.row + d.1),
        ]
    }

    /// (position, fruit) pairs of cells 0..4
    pub fn cells(&self) -> [((i8, i8), Fruit); 4] {
        let pos = self.cell_positions();
        [
            (pos[0], self.fruits[0]),
            (pos[1], self.fruits[1]),
            (pos[2], self.fruits[2]),
            (pos[3], self.fruits[3]),
        ]
    }

    /// Highest row any cell occupies
    pub fn top_row(&self) -> i8 {
        self.cell_positions()
            .iter()
            .map(|&(_, row)| row)
            .max()
            .unwrap_or(self.row)
    }

    /// Whether every cell lies on the board
    pub fn in_bounds(&self) -> bool {
        self.cell_positions()
            .iter()
            .all(|&(col, row)| crate::Board::contains(col, row))
    }
}
