//! Landing preview ("ghost") projection and overlay.
//!
//! The overlay is its own layer: it never touches the board and never takes
//! part in collision checks.

use crate::board::Board;
use crate::collision::is_occupied;
use crate::pieces::footprint;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const PREVIEW_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Lowest anchor row the piece can reach by falling straight down from `y`.
///
/// Returns `None` when the piece does not fit at `y` itself. A result of
/// `Some(0)` is a real landing row.
pub fn project(board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Option<i8> {
    let mut lowest = None;
    let mut row = y;
    while row < BOARD_HEIGHT as i8 && !is_occupied(board, kind, rotation, x, row) {
        lowest = Some(row);
        row += 1;
    }
    lowest
}

/// Overlay showing where the active piece would come to rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    cells: [Option<PieceKind>; PREVIEW_SIZE],
    row: Option<i8>,
}

impl Preview {
    pub fn new() -> Self {
        Self {
            cells: [None; PREVIEW_SIZE],
            row: None,
        }
    }

    /// Drop every preview cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.row = None;
    }

    /// Clear, then project the piece and draw its footprint at the landing row.
    ///
    /// The piece must not be stamped on `board` while this runs.
    pub fn rebuild(&mut self, board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) {
        self.clear();
        let Some(landing) = project(board, kind, rotation, x, y) else {
            return;
        };
        self.row = Some(landing);
        for (cx, cy) in footprint(kind, rotation, x, landing) {
            if !Board::is_out_of_bounds(cx, cy) {
                self.cells[cy as usize * BOARD_WIDTH as usize + cx as usize] = Some(kind);
            }
        }
    }

    /// Projected anchor row, if a piece is being previewed
    pub fn row(&self) -> Option<i8> {
        self.row
    }

    pub fn get(&self, x: i8, y: i8) -> Option<PieceKind> {
        if Board::is_out_of_bounds(x, y) {
            return None;
        }
        self.cells[y as usize * BOARD_WIDTH as usize + x as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_none()
    }

    /// Export preview codes row by row: 0 for none, otherwise the kind's cell code
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[y * width + x]
                    .map(|kind| crate::pieces::display_tag(kind).code())
                    .unwrap_or(0);
            }
        }
    }
}

impl Default for Preview {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState;

    #[test]
    fn projects_to_floor_on_empty_board() {
        let board = Board::new();
        assert_eq!(project(&board, PieceKind::O, Rotation::North, 4, 0), Some(18));
        assert_eq!(project(&board, PieceKind::I, Rotation::North, 0, 0), Some(18));
        assert_eq!(project(&board, PieceKind::I, Rotation::East, 0, 3), Some(16));
    }

    #[test]
    fn resting_piece_projects_to_its_own_row() {
        let board = Board::new();
        assert_eq!(project(&board, PieceKind::O, Rotation::North, 4, 18), Some(18));
    }

    #[test]
    fn row_zero_is_a_landing_row() {
        let mut board = Board::new();
        board.set(4, 2, CellState::Definitive).unwrap();
        assert_eq!(project(&board, PieceKind::O, Rotation::North, 4, 0), Some(0));
    }

    #[test]
    fn blocked_start_projects_nothing() {
        let mut board = Board::new();
        board.set(5, 1, CellState::Definitive).unwrap();
        assert_eq!(project(&board, PieceKind::O, Rotation::North, 4, 0), None);
    }

    #[test]
    fn rebuild_replaces_stale_cells() {
        let board = Board::new();
        let mut preview = Preview::new();

        preview.rebuild(&board, PieceKind::O, Rotation::North, 0, 0);
        assert_eq!(preview.get(0, 19), Some(PieceKind::O));

        preview.rebuild(&board, PieceKind::O, Rotation::North, 6, 0);
        assert_eq!(preview.get(0, 19), None);
        assert_eq!(preview.get(6, 18), Some(PieceKind::O));
        assert_eq!(preview.get(7, 19), Some(PieceKind::O));
        assert_eq!(preview.row(), Some(18));

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        preview.write_u8_grid(&mut grid);
        let lit: usize = grid.iter().flatten().filter(|&&c| c != 0).count();
        assert_eq!(lit, 4);
        assert_eq!(grid[19][7], CellState::Piece(PieceKind::O).code());
    }
}
