//! Collision detection - walls, floor, locked cells
//!
//! Probes are reactive: they answer "is this side blocked right now" for the piece as
//! it stands. Callers check before they commit a move, so no invalid piece is ever
//! stored.

use crate::{Board, Piece};

/// A side of the piece that can be obstructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Bottom,
}

impl Side {
    /// Step (Δcol, Δrow) towards this side
    pub fn delta(self) -> (i8, i8) {
        match self {
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
            Side::Bottom => (0, -1),
        }
    }
}

/// Obstruction a piece currently faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    Clear,
    Left,
    Right,
    Bottom,
}

impl From<Side> for Collision {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Collision::Left,
            Side::Right => Collision::Right,
            Side::Bottom => Collision::Bottom,
        }
    }
}

/// Is any cell's neighbour on `side` off the board or occupied?
pub fn is_blocked(piece: &Piece, board: &Board, side: Side) -> bool {
    let (dc, dr) = side.delta();
    piece
        .cell_positions()
        .iter()
        .any(|&(col, row)| !board.is_free(col + dc, row + dr))
}

/// Classify the piece's obstruction.
///
/// When several sides are blocked the first of Bottom, Left, Right wins; use
/// [`is_blocked`] to ask about one side.
pub fn classify(piece: &Piece, board: &Board) -> Collision {
    [Side::Bottom, Side::Left, Side::Right]
        .into_iter()
        .find(|&side| is_blocked(piece, board, side))
        .map_or(Collision::Clear, Collision::from)
}

/// Does every cell of the piece lie on the board over an empty cell?
pub fn fits(piece: &Piece, board: &Board) -> bool {
    piece
        .cell_positions()
        .iter()
        .all(|&(col, row)| board.is_free(col, row))
}
