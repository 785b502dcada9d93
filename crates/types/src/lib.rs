//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the rules engine, the terminal renderer and the JSON adapter alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: column 4, row 0 (top-left corner of the 4x4 piece box)
//!
//! # Cell Codes
//!
//! Cells are exported to render sinks as small integers:
//!
//! | Code | State |
//! |------|-------|
//! | 0 | Empty |
//! | 1 | Definitive (never clearable) |
//! | 2 | Clearable (reserved) |
//! | 3-9 | I, J, L, O, S, T, Z |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{CellState, GameAction, PieceKind, Rotation, Spin};
//!
//! assert_eq!(PieceKind::from_index(12), PieceKind::T);
//! assert_eq!(Rotation::North.turned(Spin::Ccw), Rotation::West);
//! assert_eq!(CellState::Piece(PieceKind::O).code(), 6);
//! assert_eq!(GameAction::from_str("rotate180"), Some(GameAction::Rotate180));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square box every rotation pattern lives in
pub const PIECE_BOX: u8 = 4;

/// Anchor column for freshly spawned pieces (horizontal centre)
pub const SPAWN_COLUMN: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Anchor row for freshly spawned pieces
pub const SPAWN_ROW: i8 = 0;

/// The seven tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position in [`PieceKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Inverse of [`PieceKind::index`]; wraps modulo 7.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// Lowercase string form used by the JSON adapter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation index of a piece, cycling modulo 4.
///
/// `North` is index 0. The names only label the index; the catalog decides
/// what each index looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub const fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any integer index, wrapping modulo 4 (negative values included).
    pub const fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// Advance the index by the spin's step count, modulo 4.
    pub fn turned(&self, spin: Spin) -> Self {
        Self::from_index(self.index() as i32 + spin.steps() as i32)
    }

    /// Parse rotation from string
    ///
    /// Accepts full names, single letters or the numeric index.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" | "0" => Some(Rotation::North),
            "east" | "e" | "1" => Some(Rotation::East),
            "south" | "s" | "2" => Some(Rotation::South),
            "west" | "w" | "3" => Some(Rotation::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// A rotation request: +1, -1 or +2 quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Cw,
    Ccw,
    Half,
}

impl Spin {
    pub const fn steps(self) -> i8 {
        match self {
            Spin::Cw => 1,
            Spin::Ccw => -1,
            Spin::Half => 2,
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Permanently filled; a row containing one is never cleared.
    Definitive,
    /// Reserved for a clearable obstacle mechanic.
    Clearable,
    Piece(PieceKind),
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Whether this cell keeps its row from being counted as full.
    pub fn blocks_clear(&self) -> bool {
        matches!(self, CellState::Empty | CellState::Definitive)
    }

    /// Numeric code used in snapshots.
    pub const fn code(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Definitive => 1,
            CellState::Clearable => 2,
            CellState::Piece(kind) => 3 + kind.index() as u8,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Definitive),
            2 => Some(CellState::Clearable),
            3..=9 => Some(CellState::Piece(PieceKind::from_index((code - 3) as usize))),
            _ => None,
        }
    }
}

/// Discrete intents delivered by an input source.
///
/// None of them carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Shift the piece one row down (never locks it)
    SoftDrop,
    /// Rotate one quarter turn clockwise
    RotateCw,
    /// Rotate one quarter turn counter-clockwise
    RotateCcw,
    /// Rotate a half turn
    Rotate180,
    /// Drop to the lowest legal row and commit
    HardDrop,
    /// Swap with the held piece
    Hold,
}

impl GameAction {
    pub const ALL: [GameAction; 8] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Rotate180,
        GameAction::HardDrop,
        GameAction::Hold,
    ];

    /// Parse action from string (case-insensitive, camelCase on the wire)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("HARDDROP"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "rotate180" => Some(GameAction::Rotate180),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Rotate180 => "rotate180",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
        }
    }

    /// The rotation this action requests, if it is a rotation.
    pub fn spin(&self) -> Option<Spin> {
        match self {
            GameAction::RotateCw => Some(Spin::Cw),
            GameAction::RotateCcw => Some(Spin::Ccw),
            GameAction::Rotate180 => Some(Spin::Half),
            _ => None,
        }
    }
}
