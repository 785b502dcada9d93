//! Board module - manages the game grid and the line clear engine
//!
//! The board is a 10x20 grid where each cell holds exactly one [`CellState`].
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::types::{CellState, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one line clear pass, in the order they were cleared.
///
/// An index is the row's position at the moment it was removed, so a row cleared
/// twice in a pass (after compaction) shows up twice.
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [CellState; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if a coordinate lies outside the grid
    #[inline(always)]
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<CellState> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Get cell at position (x, y)
    pub fn cell_at(&self, x: i8, y: i8) -> Result<CellState, BoardError> {
        self.get(x, y)
            .ok_or(BoardError::OutOfBounds { col: x, row: y })
    }

    /// Set a single cell
    pub fn set(&mut self, x: i8, y: i8, cell: CellState) -> Result<(), BoardError> {
        let idx = Self::index(x, y).ok_or(BoardError::OutOfBounds { col: x, row: y })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Set every listed cell to `value`.
    ///
    /// All coordinates are checked before anything is written, so an error
    /// leaves the board untouched.
    pub fn write_cells(&mut self, cells: &[(i8, i8)], value: CellState) -> Result<(), BoardError> {
        if let Some(&(col, row)) = cells.iter().find(|&&(x, y)| Self::is_out_of_bounds(x, y)) {
            return Err(BoardError::OutOfBounds { col, row });
        }
        for &(x, y) in cells {
            self.set(x, y, value)?;
        }
        Ok(())
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(CellState::Empty))
    }

    /// Get one row as a slice; panics if `y` is out of range
    pub fn row(&self, y: usize) -> &[CellState] {
        let width = BOARD_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// A row is full when none of its cells is empty or definitive
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.blocks_clear())
    }

    /// Remove row `y`, shift all rows above down by one and insert an empty row at the top
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells.copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(CellState::Empty);

        true
    }

    /// Scan the whole board bottom to top and remove every full row
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        self.clear_full_rows_from(BOARD_HEIGHT as usize - 1)
    }

    /// Remove full rows scanning upward from `start_row` (clipped to the last row) to row 0.
    ///
    /// After a row is removed the same index is examined again, since the row
    /// above has just moved into it. Rows below `start_row` are never touched.
    pub fn clear_full_rows_from(&mut self, start_row: usize) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = start_row.min(BOARD_HEIGHT as usize - 1);

        loop {
            if self.is_row_full(y) {
                self.clear_row(y);
                // Inserted rows are empty, so at most one clear per original row.
                cleared.push(y as u8);
                continue;
            }
            if y == 0 {
                break;
            }
            y -= 1;
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Export cell codes row by row for render sinks
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[y * width + x].code();
            }
        }
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    const T: CellState = CellState::Piece(PieceKind::T);

    fn fill_row(board: &mut Board, y: i8, gap: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) != gap {
                board.set(x, y, T).unwrap();
            }
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();
        board.set(0, 0, CellState::Piece(PieceKind::I)).unwrap();
        board.set(5, 10, T).unwrap();

        assert_eq!(board.cells[0], CellState::Piece(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], T);
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_write_cells_is_all_or_nothing() {
        let mut board = Board::new();
        let err = board
            .write_cells(&[(0, 0), (1, 0), (10, 0)], T)
            .unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds { col: 10, row: 0 });
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_clear_row_shifts_rows_above_only() {
        let mut board = Board::new();
        board.set(0, 5, T).unwrap();
        board.set(1, 6, T).unwrap();
        board.set(2, 8, T).unwrap();

        assert!(board.clear_row(6));
        assert_eq!(board.get(0, 6), Some(T));
        assert_eq!(board.get(1, 6), Some(CellState::Empty));
        assert_eq!(board.get(2, 8), Some(T));
        assert!(board.row(0).iter().all(CellState::is_empty));
        assert!(!board.clear_row(20));
    }

    #[test]
    fn test_definitive_cell_blocks_clear() {
        let mut board = Board::new();
        fill_row(&mut board, 19, Some(4));
        board.set(4, 19, CellState::Definitive).unwrap();
        assert!(!board.is_row_full(19));
        assert!(board.clear_full_rows().is_empty());

        board.set(4, 19, CellState::Clearable).unwrap();
        assert!(board.is_row_full(19));
    }

    #[test]
    fn test_scan_rechecks_same_row_after_clear() {
        let mut board = Board::new();
        fill_row(&mut board, 19, None);
        fill_row(&mut board, 18, None);
        board.set(3, 17, T).unwrap();

        let cleared = board.clear_full_rows_from(19);
        assert_eq!(cleared.as_slice(), &[19, 19]);
        assert_eq!(board.get(3, 19), Some(T));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_scan_ignores_rows_below_start() {
        let mut board = Board::new();
        fill_row(&mut board, 19, None);
        fill_row(&mut board, 10, None);

        let cleared = board.clear_full_rows_from(15);
        assert_eq!(cleared.as_slice(), &[10]);
        assert!(board.is_row_full(19));
    }
}
