//! Terminal front end.
//!
//! Draws [`GameSnapshot`](crate::core::GameSnapshot)s into a small styled
//! framebuffer and flushes it to the terminal with crossterm, re-emitting only
//! the cells that changed. No widget toolkit: the board is drawn at two
//! columns per cell to keep its aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
