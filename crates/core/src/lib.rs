//! Core rules engine - pure, deterministic, and testable
//!
//! Everything a falling-block game needs to decide what happens on the grid:
//! the piece catalog, the board and its line clear engine, collision tests,
//! the landing preview, and the [`Game`] controller that ties them together.
//! No rendering, timers, or I/O live here; front ends feed [`GameAction`]s in
//! and read [`GameSnapshot`]s out.
//!
//! # Module Structure
//!
//! - [`pieces`]: seven kinds, four rotation states each, decoded at compile time
//! - [`board`]: 10x20 grid of [`CellState`]s and the line clear scan
//! - [`collision`]: does a piece fit at an anchor
//! - [`preview`]: landing row projection and the preview overlay
//! - [`game_state`]: active piece transitions, hard drop, hold
//! - [`rng`]: piece generators
//! - [`config`]: spawn rotation and hold policy switches
//! - [`snapshot`]: render sink contract
//!
//! # Rules
//!
//! - Rotation is naive: no wall kicks, a blocked rotation is rejected
//! - Gravity is not simulated; a driver may call [`Game::soft_drop`] on a timer
//! - Hard drop commits the piece and clears rows, but never spawns the next one
//! - Row 0 is a legal landing row
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, RulesConfig, SequenceGenerator};
//! use blockfall_core::types::{GameAction, PieceKind};
//!
//! let mut game = Game::new(SequenceGenerator::repeat(PieceKind::O), RulesConfig::default());
//! assert!(game.spawn_next());
//!
//! game.apply_action(GameAction::MoveRight);
//! assert!(game.apply_action(GameAction::HardDrop));
//! assert!(game.active().is_none());
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! [`GameAction`]: types::GameAction
//! [`CellState`]: types::CellState

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod preview;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use collision::is_occupied;
pub use config::{HoldPolicy, RulesConfig, SpawnRotation};
pub use error::BoardError;
pub use game_state::{Game, HeldPiece, Tetromino};
pub use pieces::{display_tag, footprint, get_shape, pattern};
pub use preview::{project, Preview};
pub use rng::{PieceGenerator, RandomGenerator, SequenceGenerator, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot, RenderSink};
