//! Board module - manages the game grid
//!
//! The board is a 13x23 grid stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..=12 (left to right), y ranges 0..=22
//! (top to bottom). Column 0, columns 11-12 and rows 21-22 are permanent walls,
//! so collision tests need no edge special cases.

use arrayvec::ArrayVec;

use crate::shapes::Shape;
use crate::types::{Cell, BOARD_COLS, BOARD_ROWS, BOTTOM_PLAYABLE_ROW, PLAYABLE_COLS};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS as usize * BOARD_ROWS as usize;

/// Number of rows that can hold blocks
pub const PLAYABLE_ROWS: usize = BOTTOM_PLAYABLE_ROW as usize + 1;

/// Row indices removed by one compaction, bottom to top
pub type ClearedRows = ArrayVec<i8, PLAYABLE_ROWS>;

/// The game board - 13 columns x 23 rows with a wall border
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board with its wall border in place
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Cell::Empty; BOARD_SIZE],
        };
        board.stamp_walls();
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_COLS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_COLS as usize) + (x as usize))
    }

    /// Whether (x, y) belongs to the permanent border
    pub fn is_wall_position(x: i8, y: i8) -> bool {
        x == 0 || x >= BOARD_COLS as i8 - 2 || y >= BOARD_ROWS as i8 - 2
    }

    fn stamp_walls(&mut self) {
        for y in 0..BOARD_ROWS as i8 {
            for x in 0..BOARD_COLS as i8 {
                if Self::is_wall_position(x, y) {
                    self.set(x, y, Cell::Wall);
                }
            }
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_COLS
    }

    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Stamp the shape's color at each of its cells
    pub fn draw(&mut self, shape: &Shape, x: i8, y: i8) {
        let cell = Cell::Block(shape.color);
        for (px, py) in shape.cells(x, y) {
            self.set(px, py, cell);
        }
    }

    /// Stamp the shape's landing projection
    pub fn draw_shadow(&mut self, shape: &Shape, x: i8, y: i8) {
        for (px, py) in shape.cells(x, y) {
            self.set(px, py, Cell::Shadow);
        }
    }

    /// Clear each of the shape's cells
    pub fn erase(&mut self, shape: &Shape, x: i8, y: i8) {
        for (px, py) in shape.cells(x, y) {
            self.set(px, py, Cell::Empty);
        }
    }

    /// True iff none of the shape's cells at (x, y) is occupied
    ///
    /// Cells outside the grid count as occupied.
    pub fn allowed(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells(x, y).all(|(px, py)| self.is_free(px, py))
    }

    /// Number of non-empty cells in the playable columns of row `y`
    fn row_fill(&self, y: i8) -> u8 {
        (1..=PLAYABLE_COLS as i8)
            .filter(|&x| !self.is_free(x, y))
            .count() as u8
    }

    /// Check if a playable row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        (0..=BOTTOM_PLAYABLE_ROW).contains(&y) && self.row_fill(y) == PLAYABLE_COLS
    }

    /// Drop every full row and let the rows above fall into the gaps
    ///
    /// Builds a fresh grid, copies surviving rows into it from the bottom of
    /// the playable area upwards and re-stamps the border. Returns the indices
    /// of the removed rows, bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut fresh = Board::new();
        let mut write_y = BOTTOM_PLAYABLE_ROW;

        for read_y in (0..=BOTTOM_PLAYABLE_ROW).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            for x in 1..=PLAYABLE_COLS as i8 {
                if let Some(cell) = self.get(x, read_y) {
                    fresh.set(x, write_y, cell);
                }
            }
            write_y -= 1;
        }

        fresh.stamp_walls();
        *self = fresh;
        cleared
    }

    /// Remove full rows, returning how many were removed
    pub fn compact(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Reset to all-empty plus walls
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row `y` as a slice of cells
    pub fn row(&self, y: i8) -> Option<&[Cell]> {
        let start = Self::index(0, y)?;
        Some(&self.cells[start..start + BOARD_COLS as usize])
    }

    /// Write the numeric cell codes into a row-major grid
    pub fn write_code_grid(&self, out: &mut [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_COLS as usize;
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[start + x].code();
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
