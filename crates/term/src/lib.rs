//! Terminal rendering for the puzzle.
//!
//! A small, game-oriented rendering layer: views draw into a plain framebuffer
//! which is then flushed to the terminal, diffed against the previous frame.
//!
//! Goals:
//! - Keep `core` and `engine` free of terminal concerns
//! - Keep views pure so layouts are unit-testable
//! - Allow precise control over aspect ratio (cells are several chars wide)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use rubik_table_core as core;
pub use rubik_table_engine as engine;
pub use rubik_table_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
