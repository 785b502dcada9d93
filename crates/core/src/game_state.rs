//! Game state module - the active piece controller and hold manager
//!
//! [`Game`] owns the board, the landing preview, the active and held pieces and
//! the piece generator. The active piece is kept stamped on the board between
//! calls; every transition erases it, tests the candidate, then either commits
//! the candidate or stamps the original back. All of that happens inside one
//! `&mut self` call, so callers never observe a half-written board.

use tracing::{debug, error, trace, warn};

use crate::board::{Board, ClearedRows};
use crate::collision::is_occupied;
use crate::config::{HoldPolicy, RulesConfig, SpawnRotation};
use crate::pieces::{display_tag, footprint, pattern, Pattern, PieceShape};
use crate::preview::{project, Preview};
use crate::rng::{PieceGenerator, RandomGenerator, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Anchor column (top-left of the 4x4 box)
    pub x: i8,
    /// Anchor row
    pub y: i8,
}

impl Tetromino {
    /// Create a tetromino at the spawn position
    pub fn new(kind: PieceKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            x: SPAWN_COLUMN,
            y: SPAWN_ROW,
        }
    }

    /// Absolute board cells covered by this piece
    pub fn cells(&self) -> PieceShape {
        footprint(self.kind, self.rotation, self.x, self.y)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    fn turned(self, spin: Spin) -> Self {
        Self {
            rotation: self.rotation.turned(spin),
            ..self
        }
    }
}

/// Piece parked in the hold slot. It has no board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeldPiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
}

impl HeldPiece {
    /// Occupancy grid for drawing the held piece
    pub fn pattern(&self) -> Pattern {
        pattern(self.kind, self.rotation)
    }
}

impl From<Tetromino> for HeldPiece {
    fn from(piece: Tetromino) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
        }
    }
}

/// Complete rules state for one game
#[derive(Debug, Clone)]
pub struct Game<G: PieceGenerator = RandomGenerator> {
    board: Board,
    preview: Preview,
    active: Option<Tetromino>,
    held: Option<HeldPiece>,
    generator: G,
    config: RulesConfig,
    /// Drives random spawn rotations; untouched under a fixed spawn rotation.
    rng: SimpleRng,
    can_hold: bool,
    game_over: bool,
    last_cleared: ClearedRows,
}

impl<G: PieceGenerator> Game<G> {
    /// Create a game on an empty board. No piece is active until the first spawn.
    pub fn new(generator: G, config: RulesConfig) -> Self {
        Self::with_board(Board::new(), generator, config)
    }

    /// Create a game on a prepared board
    pub fn with_board(board: Board, generator: G, config: RulesConfig) -> Self {
        Self {
            board,
            preview: Preview::new(),
            active: None,
            held: None,
            generator,
            config,
            rng: SimpleRng::new(config.seed),
            can_hold: true,
            game_over: false,
            last_cleared: ClearedRows::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board access for setting up positions; the active piece is stamped on it.
    ///
    /// Edits made here do not move the landing preview. Call
    /// [`Game::refresh_preview`] afterwards if a piece is active.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Re-project the active piece against the current board.
    pub fn refresh_preview(&mut self) {
        match self.active {
            Some(piece) => {
                self.erase(piece);
                self.place(piece);
            }
            None => self.preview.clear(),
        }
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn held(&self) -> Option<HeldPiece> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Rows removed by the most recent hard drop, in removal order
    pub fn last_cleared(&self) -> &[u8] {
        &self.last_cleared
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        self.preview.write_u8_grid(&mut out.preview);
        out.active = self.active.map(ActiveSnapshot::from);
        out.preview_row = self.preview.row();
        out.held = self.held;
        out.can_hold = self.can_hold;
        out.game_over = self.game_over;
        out.lines_cleared = self.last_cleared.len() as u8;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Spawn `kind` at the spawn position.
    ///
    /// Returns `false` when a piece is already active or the game is over.
    /// A spawn footprint that collides ends the game.
    pub fn spawn(&mut self, kind: PieceKind, rotation: Rotation) -> bool {
        if self.game_over || self.active.is_some() {
            return false;
        }

        let piece = Tetromino::new(kind, rotation);
        if is_occupied(&self.board, kind, rotation, piece.x, piece.y) {
            self.top_out(piece);
            return false;
        }

        self.place(piece);
        self.can_hold = true;
        debug!(kind = kind.as_str(), rotation = rotation.index(), "spawned piece");
        true
    }

    /// Draw the next kind from the generator and spawn it
    pub fn spawn_next(&mut self) -> bool {
        if self.game_over || self.active.is_some() {
            return false;
        }
        let kind = self.generator.next_piece();
        let rotation = self.spawn_rotation();
        self.spawn(kind, rotation)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_transition("move_left", |piece| piece.shifted(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_transition("move_right", |piece| piece.shifted(1, 0))
    }

    pub fn soft_drop(&mut self) -> bool {
        self.try_transition("soft_drop", |piece| piece.shifted(0, 1))
    }

    /// Rotate in place. There is no kick search: the new rotation either fits
    /// at the current anchor or the call is rejected.
    pub fn rotate(&mut self, spin: Spin) -> bool {
        self.try_transition("rotate", |piece| piece.turned(spin))
    }

    /// Drop the active piece to its landing row, commit it and clear full rows.
    ///
    /// The active piece is gone afterwards; spawning the next one is up to the
    /// caller.
    pub fn hard_drop(&mut self) -> bool {
        let Some(current) = self.active else {
            return false;
        };

        self.erase(current);
        let Some(landing) = project(&self.board, current.kind, current.rotation, current.x, current.y)
        else {
            error!(?current, "active piece does not fit at its own position");
            self.stamp(current);
            return false;
        };

        let landed = Tetromino {
            y: landing,
            ..current
        };
        self.stamp(landed);
        self.active = None;
        self.preview.clear();
        debug!(
            kind = landed.kind.as_str(),
            x = landed.x,
            y = landed.y,
            "locked piece"
        );

        let start_row = (landing + PIECE_BOX as i8 - 1).clamp(0, BOARD_HEIGHT as i8 - 1);
        self.last_cleared = self.board.clear_full_rows_from(start_row as usize);
        if !self.last_cleared.is_empty() {
            debug!(rows = ?self.last_cleared.as_slice(), "cleared rows");
        }
        true
    }

    /// Move the active piece into the hold slot.
    ///
    /// With nothing held a fresh piece is drawn from the generator; otherwise
    /// the held piece swaps in at the spawn position with its stored rotation.
    /// A swap whose incoming piece does not fit is rejected and nothing changes.
    pub fn hold(&mut self) -> bool {
        let Some(current) = self.active else {
            return false;
        };
        if self.config.hold_policy == HoldPolicy::OncePerPiece && !self.can_hold {
            trace!("hold already used for this piece");
            return false;
        }

        self.erase(current);
        match self.held {
            Some(held) => {
                let incoming = Tetromino::new(held.kind, held.rotation);
                if is_occupied(&self.board, incoming.kind, incoming.rotation, incoming.x, incoming.y)
                {
                    trace!(kind = held.kind.as_str(), "held piece does not fit at spawn");
                    self.stamp(current);
                    return false;
                }
                self.held = Some(HeldPiece::from(current));
                self.place(incoming);
            }
            None => {
                self.held = Some(HeldPiece::from(current));
                self.active = None;
                let kind = self.generator.next_piece();
                let incoming = Tetromino::new(kind, self.spawn_rotation());
                if is_occupied(&self.board, incoming.kind, incoming.rotation, incoming.x, incoming.y)
                {
                    self.preview.clear();
                    self.top_out(incoming);
                    return true;
                }
                self.place(incoming);
            }
        }

        self.can_hold = self.config.hold_policy == HoldPolicy::Unlimited;
        debug!(held = current.kind.as_str(), "held piece");
        true
    }

    /// Apply a player intent
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold(),
            rotation => rotation.spin().is_some_and(|spin| self.rotate(spin)),
        }
    }

    /// Apply an intent as an interactive driver does: a successful hard drop
    /// is followed by spawning the next piece.
    pub fn apply_and_spawn(&mut self, action: GameAction) -> bool {
        let applied = self.apply_action(action);
        if applied && action == GameAction::HardDrop {
            self.spawn_next();
        }
        applied
    }

    /// Start over on an empty board. The generator keeps its position.
    pub fn reset(&mut self) {
        self.board.clear();
        self.preview.clear();
        self.active = None;
        self.held = None;
        self.can_hold = true;
        self.game_over = false;
        self.last_cleared.clear();
        debug!("game reset");
    }

    fn spawn_rotation(&mut self) -> Rotation {
        match self.config.spawn_rotation {
            SpawnRotation::Fixed(rotation) => rotation,
            SpawnRotation::Random => self.rng.next_rotation(),
        }
    }

    fn try_transition(&mut self, op: &'static str, step: impl FnOnce(Tetromino) -> Tetromino) -> bool {
        let Some(current) = self.active else {
            return false;
        };

        self.erase(current);
        let candidate = step(current);
        if is_occupied(&self.board, candidate.kind, candidate.rotation, candidate.x, candidate.y) {
            self.stamp(current);
            trace!(op, ?candidate, "rejected");
            return false;
        }

        self.place(candidate);
        true
    }

    /// Make `piece` active: rebuild the preview against the bare board, then stamp.
    fn place(&mut self, piece: Tetromino) {
        self.active = Some(piece);
        self.preview
            .rebuild(&self.board, piece.kind, piece.rotation, piece.x, piece.y);
        self.stamp(piece);
    }

    fn top_out(&mut self, piece: Tetromino) {
        self.active = None;
        self.game_over = true;
        warn!(kind = piece.kind.as_str(), "spawn blocked, game over");
    }

    fn erase(&mut self, piece: Tetromino) {
        if let Err(err) = self.board.write_cells(&piece.cells(), CellState::Empty) {
            error!(%err, ?piece, "failed to erase active piece");
        }
    }

    fn stamp(&mut self, piece: Tetromino) {
        if let Err(err) = self.board.write_cells(&piece.cells(), display_tag(piece.kind)) {
            error!(%err, ?piece, "failed to stamp active piece");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(RandomGenerator::default(), RulesConfig::default())
    }
}
