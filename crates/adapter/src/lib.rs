//! Headless adapter - drive the rules engine with line-delimited JSON
//!
//! Each input line is one command; each command is answered with exactly one
//! output line, either an observation or an error.
//!
//! # Messages
//!
//! ## In
//!
//! ```json
//! {"seq": 1, "actions": ["moveLeft", "rotateCw", "hardDrop"]}
//! {"reset": true}
//! ```
//!
//! Action names are case-insensitive. `seq` is optional and echoed back;
//! without it the driver numbers commands itself. A reset runs before the
//! command's actions.
//!
//! ## Out
//!
//! - **observation**: board and preview code grids, active and held piece,
//!   flags, and one `applied` flag per requested action
//! - **error**: `code` plus a human-readable `message`; the game is untouched
//!
//! After every successful `hardDrop` the driver spawns the next piece, so a
//! client can chain placements in one command.

pub mod driver;
pub mod error;
pub mod protocol;
pub mod sink;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use driver::{HeadlessDriver, Report};
pub use error::{CommandError, SinkError};
pub use protocol::{parse_command, Command, ErrorMessage, Observation};
pub use sink::JsonSink;
