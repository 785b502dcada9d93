use thiserror::Error;

use crate::protocol::MAX_ACTIONS;

/// Why a command line was refused.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("malformed command: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown action {0:?}")]
    UnknownAction(String),

    #[error("{0} actions in one command, at most {} allowed", MAX_ACTIONS)]
    TooManyActions(usize),
}

impl CommandError {
    /// Stable machine-readable code for error messages
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::Json(_) => "invalid_json",
            CommandError::UnknownAction(_) => "unknown_action",
            CommandError::TooManyActions(_) => "too_many_actions",
        }
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write observation: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode observation: {0}")]
    Json(#[from] serde_json::Error),
}
