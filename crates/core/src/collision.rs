//! Collision detection between a piece footprint and the board.
//!
//! Pure queries: nothing here mutates the board. The piece under test must not
//! be stamped on the board, or it collides with itself.

use crate::board::Board;
use crate::pieces::footprint;
use crate::types::{PieceKind, Rotation};

/// True when any filled sub-cell of the piece lands outside the grid or on a
/// cell that is not empty.
pub fn is_occupied(board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
    footprint(kind, rotation, x, y)
        .iter()
        .any(|&(cx, cy)| !board.is_empty_at(cx, cy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellState, BOARD_HEIGHT, BOARD_WIDTH};

    #[test]
    fn boundary_cells_are_in_bounds() {
        let board = Board::new();
        let right = BOARD_WIDTH as i8 - 2;
        let bottom = BOARD_HEIGHT as i8 - 2;

        // O occupies anchor + (0..2, 0..2)
        assert!(!is_occupied(&board, PieceKind::O, Rotation::North, 0, 0));
        assert!(!is_occupied(&board, PieceKind::O, Rotation::North, right, 0));
        assert!(!is_occupied(&board, PieceKind::O, Rotation::North, 0, bottom));
        assert!(!is_occupied(&board, PieceKind::O, Rotation::North, right, bottom));
    }

    #[test]
    fn any_cell_outside_grid_is_occupied() {
        let board = Board::new();
        let right = BOARD_WIDTH as i8 - 2;
        let bottom = BOARD_HEIGHT as i8 - 2;

        assert!(is_occupied(&board, PieceKind::O, Rotation::North, -1, 0));
        assert!(is_occupied(&board, PieceKind::O, Rotation::North, right + 1, 0));
        assert!(is_occupied(&board, PieceKind::O, Rotation::North, 0, -1));
        assert!(is_occupied(&board, PieceKind::O, Rotation::North, 0, bottom + 1));
    }

    #[test]
    fn empty_box_rows_may_hang_outside() {
        let board = Board::new();
        // Vertical I in box column 1: anchor column -1 puts it on column 0.
        assert!(!is_occupied(&board, PieceKind::I, Rotation::West, -1, 0));
        assert!(is_occupied(&board, PieceKind::I, Rotation::West, -2, 0));
        // Horizontal I in box row 1: anchor row 18 puts it on the last row.
        assert!(!is_occupied(&board, PieceKind::I, Rotation::North, 0, 18));
        assert!(is_occupied(&board, PieceKind::I, Rotation::North, 0, 19));
    }

    #[test]
    fn any_non_empty_cell_collides() {
        for cell in [
            CellState::Definitive,
            CellState::Clearable,
            CellState::Piece(PieceKind::Z),
        ] {
            let mut board = Board::new();
            board.set(5, 1, cell).unwrap();
            assert!(is_occupied(&board, PieceKind::O, Rotation::North, 4, 0));
            assert!(!is_occupied(&board, PieceKind::O, Rotation::North, 2, 0));
        }
    }
}
