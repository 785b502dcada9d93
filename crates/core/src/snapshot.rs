//! Read-only views handed to render sinks.

use crate::game_state::{HeldPiece, Tetromino};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

pub type CodeGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a render sink needs to draw one frame.
///
/// `board` holds cell codes (see `CellState::code`) with the active piece
/// stamped in. `preview` is the separate landing overlay, 0 where empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: CodeGrid,
    pub preview: CodeGrid,
    pub active: Option<ActiveSnapshot>,
    pub preview_row: Option<i8>,
    pub held: Option<HeldPiece>,
    pub can_hold: bool,
    pub game_over: bool,
    /// Rows removed by the last hard drop
    pub lines_cleared: u8,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            preview: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            preview_row: None,
            held: None,
            can_hold: true,
            game_over: false,
            lines_cleared: 0,
        }
    }
}

/// Consumer of frames: a terminal, a JSON stream, a test recorder.
pub trait RenderSink {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}
