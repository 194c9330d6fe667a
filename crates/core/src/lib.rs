//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate owns the rules of the sliding-color puzzle and nothing else.
//! It has no knowledge of terminals, input devices, or move counters, making it:
//!
//! - **Deterministic**: Seeded construction produces identical grids
//! - **Testable**: Every rule is checked by unit and integration tests
//! - **Portable**: Any front end can drive it through a handful of calls
//!
//! # Module Structure
//!
//! - [`grid`]: the N×N grid, shuffling, row/column rotation, win detection
//! - [`error`]: [`PuzzleError`], returned by every fallible operation
//!
//! # Game Rules
//!
//! - A grid of size N uses the first N colors of [`PALETTE`](types::PALETTE),
//!   each appearing exactly N times.
//! - A move rotates one row or one column cyclically by one position.
//! - The puzzle is solved when every row is single-colored, or when every
//!   column is single-colored.
//! - A freshly built grid is never solved.
//!
//! # Example
//!
//! ```
//! use rubik_table_core::GridPuzzle;
//! use rubik_table_types::{Arrow, Axis, Shift};
//!
//! let mut puzzle = GridPuzzle::with_seed(4, 7).unwrap();
//! assert!(!puzzle.is_solved());
//!
//! let before = puzzle.clone();
//! puzzle.apply(Arrow::Up, 2).unwrap();
//! puzzle.rotate(Axis::Column, 2, Shift::Forward).unwrap();
//! assert_eq!(puzzle, before);
//!
//! assert!(puzzle.color_at(4, 0).is_err());
//! ```

pub mod error;
pub mod grid;

pub use rubik_table_types as types;

pub use error::PuzzleError;
pub use grid::GridPuzzle;
