//! Error types for the board's coordinate API.

use thiserror::Error;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Raised when a caller addresses a cell outside the grid.
///
/// Correct callers never see this past the collision check; it marks a broken
/// contract rather than a gameplay outcome.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({col}, {row}) is outside the {}x{} board", BOARD_WIDTH, BOARD_HEIGHT)]
    OutOfBounds { col: i8, row: i8 },
}
