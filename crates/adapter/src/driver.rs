//! Command loop state for the headless front end.

use tracing::{debug, warn};

use crate::core::{Game, GameSnapshot, PieceGenerator};
use crate::error::CommandError;
use crate::protocol::parse_command;

/// Outcome of one accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub seq: u64,
    pub applied: Vec<bool>,
}

pub struct HeadlessDriver<G: PieceGenerator> {
    game: Game<G>,
    seq: u64,
}

impl<G: PieceGenerator> HeadlessDriver<G> {
    /// Take over `game` and spawn its first piece if none is active.
    pub fn new(mut game: Game<G>) -> Self {
        if game.active().is_none() {
            game.spawn_next();
        }
        Self { game, seq: 0 }
    }

    pub fn game(&self) -> &Game<G> {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Sequence number of the last command seen
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Parse and apply one command line.
    ///
    /// A line that fails to parse or names an unknown action changes nothing.
    pub fn handle_line(&mut self, line: &str) -> Result<Report, CommandError> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                self.seq = self.seq.wrapping_add(1);
                warn!(seq = self.seq, %err, "rejected command");
                return Err(err);
            }
        };
        self.seq = command.seq.unwrap_or(self.seq.wrapping_add(1));

        let intents = command.intents().map_err(|err| {
            warn!(seq = self.seq, %err, "rejected command");
            err
        })?;

        if command.reset {
            self.game.reset();
            self.game.spawn_next();
        }

        let applied: Vec<bool> = intents
            .iter()
            .map(|&action| self.game.apply_and_spawn(action))
            .collect();
        debug!(seq = self.seq, actions = intents.len(), reset = command.reset, "applied command");

        Ok(Report {
            seq: self.seq,
            applied,
        })
    }
}
