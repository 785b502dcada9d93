//! Key mapping from terminal events to game intents.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Action(GameAction),
    /// Start a new game on an empty board
    Reset,
    Quit,
}

/// Map keyboard input to an input event.
///
/// Release events are ignored so terminals that report them do not double
/// every intent.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    let action = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => GameAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => GameAction::MoveRight,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => GameAction::SoftDrop,

        // Rotation
        KeyCode::Up
        | KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => GameAction::RotateCw,
        KeyCode::Char('z') | KeyCode::Char('Z') => GameAction::RotateCcw,
        KeyCode::Char('a') | KeyCode::Char('A') => GameAction::Rotate180,

        // Actions
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Char('c') | KeyCode::Char('C') => GameAction::Hold,

        KeyCode::Char('r') | KeyCode::Char('R') => return Some(InputEvent::Reset),

        _ => return None,
    };
    Some(InputEvent::Action(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
