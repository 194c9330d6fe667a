//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s for the session.

pub mod map;

pub use rubik_table_types as types;

pub use map::{handle_key_event, should_quit};
