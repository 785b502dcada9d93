//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof so tests, benches and the
//! binary can write `blockfall::core::Game` instead of naming each crate.

pub use blockfall_adapter as adapter;
pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
