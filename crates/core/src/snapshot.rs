//! Read-only views of the game for renderers and observers.

use crate::types::{fruit_to_u8, Cell, Fruit, ShapeKind, BOARD_CELLS};
use crate::Piece;

/// The falling piece as absolute cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    /// Board positions of cells 0..4 as (col, row)
    pub cells: [(i8, i8); 4],
    pub fruits: [Fruit; 4],
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            cells: value.cell_positions(),
            fruits: value.fruits,
        }
    }
}

impl PieceSnapshot {
    /// (position, fruit) pairs
    pub fn iter(&self) -> impl Iterator<Item = ((i8, i8), Fruit)> + '_ {
        self.cells.iter().copied().zip(self.fruits.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Row-major cells, bottom row first (`row * 10 + col`)
    pub board: [Cell; BOARD_CELLS],
    pub piece: PieceSnapshot,
    /// False while paused
    pub running: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    /// Board cell at (col, row); `None` off the board or when empty
    pub fn cell(&self, col: i8, row: i8) -> Cell {
        if crate::Board::contains(col, row) {
            self.board[row as usize * crate::types::BOARD_WIDTH as usize + col as usize]
        } else {
            None
        }
    }

    /// FNV-1a hash of the board, stable across runs
    pub fn board_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for cell in &self.board {
            h ^= fruit_to_u8(*cell) as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        }
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [None; BOARD_CELLS],
            piece: PieceSnapshot::from(Piece::new(ShapeKind::I, [Fruit::Cherry; 4])),
            running: true,
            game_over: false,
            episode_id: 0,
            piece_id: 0,
            seed: 0,
        }
    }
}
