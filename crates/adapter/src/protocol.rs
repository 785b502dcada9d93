//! Protocol module - JSON message types for the headless driver

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::core::{ActiveSnapshot, GameSnapshot, HeldPiece};
use crate::error::CommandError;
use crate::types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH};

/// Upper bound on actions carried by one command
pub const MAX_ACTIONS: usize = 32;

pub type ActionList = ArrayVec<GameAction, MAX_ACTIONS>;

// ============== Client -> Game ==============

/// One input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub seq: Option<u64>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub reset: bool,
}

impl Command {
    /// Resolve action names into intents.
    pub fn intents(&self) -> Result<ActionList, CommandError> {
        if self.actions.len() > MAX_ACTIONS {
            return Err(CommandError::TooManyActions(self.actions.len()));
        }
        self.actions
            .iter()
            .map(|name| {
                GameAction::from_str(name).ok_or_else(|| CommandError::UnknownAction(name.clone()))
            })
            .collect()
    }
}

/// Parse one command line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    Ok(serde_json::from_str(line)?)
}

// ============== Game -> Client ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

/// Game state after a command
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub playable: bool,
    pub game_over: bool,
    pub can_hold: bool,
    pub board: BoardSnapshot,
    /// Landing preview overlay, same encoding as the board, 0 where empty
    pub preview: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActivePieceSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_row: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held: Option<HeldPieceSnapshot>,
    pub lines_cleared: u8,
    /// One entry per requested action: did the engine accept it
    pub applied: Vec<bool>,
}

impl Observation {
    pub fn from_snapshot(seq: u64, snap: &GameSnapshot, applied: &[bool]) -> Self {
        Self {
            msg_type: ObservationType::Observation,
            seq,
            playable: snap.playable(),
            game_over: snap.game_over,
            can_hold: snap.can_hold,
            board: BoardSnapshot {
                width: BOARD_WIDTH,
                height: BOARD_HEIGHT,
                cells: snap.board,
            },
            preview: snap.preview,
            active: snap.active.map(ActivePieceSnapshot::from),
            preview_row: snap.preview_row,
            held: snap.held.map(HeldPieceSnapshot::from),
            lines_cleared: snap.lines_cleared,
            applied: applied.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    /// 0 empty, 1 definitive, 2 clearable, 3..=9 piece kinds I J L O S T Z
    pub cells: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivePieceSnapshot {
    pub kind: &'static str,
    pub rotation: &'static str,
    pub x: i8,
    pub y: i8,
}

impl From<ActiveSnapshot> for ActivePieceSnapshot {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind.as_str(),
            rotation: value.rotation.as_str(),
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeldPieceSnapshot {
    pub kind: &'static str,
    pub rotation: &'static str,
}

impl From<HeldPiece> for HeldPieceSnapshot {
    fn from(value: HeldPiece) -> Self {
        Self {
            kind: value.kind.as_str(),
            rotation: value.rotation.as_str(),
        }
    }
}

/// Refusal of a command line
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub code: &'static str,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(seq: u64, err: &CommandError) -> Self {
        Self {
            msg_type: ErrorType::Error,
            seq,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_case_insensitively() {
        let cmd = parse_command(r#"{"seq":7,"actions":["moveLeft","HARDDROP","rotate180"]}"#)
            .unwrap();
        assert_eq!(cmd.seq, Some(7));
        assert!(!cmd.reset);
        assert_eq!(
            cmd.intents().unwrap().as_slice(),
            &[GameAction::MoveLeft, GameAction::HardDrop, GameAction::Rotate180]
        );
    }

    #[test]
    fn reset_only_command() {
        let cmd = parse_command(r#"{"reset":true}"#).unwrap();
        assert!(cmd.reset);
        assert_eq!(cmd.seq, None);
        assert!(cmd.intents().unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_action() {
        let cmd = parse_command(r#"{"actions":["moveLeft","pause"]}"#).unwrap();
        let err = cmd.intents().unwrap_err();
        assert_eq!(err.code(), "unknown_action");
        assert!(err.to_string().contains("pause"));
    }

    #[test]
    fn rejects_oversized_command() {
        let cmd = Command {
            actions: vec!["softDrop".to_string(); MAX_ACTIONS + 1],
            ..Command::default()
        };
        assert!(matches!(
            cmd.intents(),
            Err(CommandError::TooManyActions(n)) if n == MAX_ACTIONS + 1
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_command("{actions:").unwrap_err();
        assert_eq!(err.code(), "invalid_json");
    }

    #[test]
    fn observation_omits_absent_pieces() {
        let snap = GameSnapshot::default();
        let json = serde_json::to_value(Observation::from_snapshot(3, &snap, &[])).unwrap();
        assert_eq!(json["type"], "observation");
        assert_eq!(json["seq"], 3);
        assert_eq!(json["board"]["width"], 10);
        assert!(json.get("active").is_none());
        assert!(json.get("held").is_none());
        assert!(json.get("preview_row").is_none());
    }
}
