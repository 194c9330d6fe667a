//! Game session controller.
//!
//! Wraps a [`GridPuzzle`](rubik_table_core::GridPuzzle) with the state a player
//! sees but the puzzle itself does not track: the selection cursor, the move
//! counter, and the most recent win. After every rotation the session checks
//! the grid and, on a win, records the completion and deals a fresh grid of the
//! same size.

pub mod session;

pub use rubik_table_core as core;
pub use rubik_table_types as types;

pub use session::{Completion, Cursor, Session, SessionEvent};
