//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a fruit.
//! Uses a flat row-major array (`row * WIDTH + col`) for cache locality and zero allocation.
//! Coordinates: (col, row) where col ranges 0..9 (left to right) and row ranges 0..19
//! (bottom to top). Gravity pulls towards row 0.
//!
//! `get`/`set` treat an out-of-range coordinate as a caller bug and panic. Collision
//! probing goes through [`Board::probe`], which reports off-board cells as `None`.

use crate::types::{Cell, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Build a board from a flat row-major cell array
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if !Self::contains(col, row) {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    #[inline(always)]
    fn checked_index(col: i8, row: i8) -> usize {
        match Self::index(col, row) {
            Some(idx) => idx,
            None => panic!("board coordinate ({}, {}) out of range", col, row),
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Whether (col, row) lies on the board
    #[inline(always)]
    pub fn contains(col: i8, row: i8) -> bool {
        col >= 0 && (col as usize) < WIDTH && row >= 0 && (row as usize) < HEIGHT
    }

    /// Get cell at (col, row)
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board.
    pub fn get(&self, col: i8, row: i8) -> Cell {
        self.cells[Self::checked_index(col, row)]
    }

    /// Set cell at (col, row)
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the board.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) {
        let idx = Self::checked_index(col, row);
        self.cells[idx] = cell;
    }

    /// Non-panicking read: `None` when off the board, `Some(cell)` otherwise
    pub fn probe(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, col: i8, row: i8) -> bool {
        matches!(self.probe(col, row), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_full(&self, row: i8) -> bool {
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Check if the whole board is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Cells of one row, left to right
    ///
    /// # Panics
    ///
    /// Panics if `row` is off the board.
    pub fn row(&self, row: i8) -> &[Cell] {
        let start = Self::checked_index(0, row);
        &self.cells[start..start + WIDTH]
    }

    /// Cells of one column, bottom to top
    ///
    /// # Panics
    ///
    /// Panics if `col` is off the board.
    pub fn column(&self, col: i8) -> impl Iterator<Item = Cell> + '_ {
        let start = Self::checked_index(col, 0);
        self.cells[start..].iter().step_by(WIDTH).copied()
    }

    /// Empty a row and shift every row above it down by one.
    ///
    /// The top row is empty afterwards.
    pub fn clear_row(&mut self, row: i8) {
        let start = Self::checked_index(0, row);

        // copy_within handles the overlapping source/destination ranges
        self.cells.copy_within(start + WIDTH..BOARD_CELLS, start);

        for cell in &mut self.cells[BOARD_CELLS - WIDTH..] {
            *cell = None;
        }
    }

    /// Remove `len` cells of a column starting at `row` and pull the cells above down by `len`.
    ///
    /// The top `len` cells of the column are empty afterwards.
    pub fn remove_from_column(&mut self, col: i8, row: i8, len: usize) {
        let start = row as usize;
        assert!(
            Self::contains(col, row) && len > 0 && start + len <= HEIGHT,
            "column run ({}, {}) x {} out of range",
            col,
            row,
            len
        );

        let mut column = [None; HEIGHT];
        for (dst, cell) in column.iter_mut().zip(self.column(col)) {
            *dst = cell;
        }

        let mut write = start;
        for &cell in &column[start + len..] {
            self.cells[write * WIDTH + col as usize] = cell;
            write += 1;
        }
        for r in write..HEIGHT {
            self.cells[r * WIDTH + col as usize] = None;
        }
    }

    /// Get a reference to the internal cells array (row-major, bottom row first)
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
