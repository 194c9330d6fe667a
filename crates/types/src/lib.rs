//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Sizes
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_GRID_SIZE` | 2 | Smallest grid the puzzle accepts |
//! | `MAX_GRID_SIZE` | 6 | One row per palette color |
//! | `SUPPORTED_SIZES` | 2, 4, 6 | Sizes offered by the front end |
//! | `DEFAULT_GRID_SIZE` | 4 | Size of the first game |
//!
//! # Moves
//!
//! A move rotates one whole row or column by a single position. The player
//! thinks in arrows, the grid thinks in ([`Axis`], [`Shift`]) pairs:
//!
//! | Arrow | Axis | Shift | Effect |
//! |-------|------|-------|--------|
//! | `Up` | Column | Backward | each cell takes the color one row below |
//! | `Down` | Column | Forward | each cell takes the color one row above |
//! | `Left` | Row | Backward | each cell takes the color one column to the right |
//! | `Right` | Row | Forward | each cell takes the color one column to the left |
//!
//! # Examples
//!
//! ```
//! use rubik_table_types::{Arrow, Axis, Color, Shift, PALETTE};
//!
//! assert_eq!(Arrow::Up.axis(), Axis::Column);
//! assert_eq!(Arrow::Up.shift(), Shift::Backward);
//! assert_eq!(Arrow::Right.symbol(), '→');
//!
//! assert_eq!(PALETTE[0], Color::Red);
//! assert_eq!(Color::Blue.letter(), 'B');
//! ```

/// Smallest supported grid (2x2)
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported grid; a grid needs one distinct color per row
pub const MAX_GRID_SIZE: usize = PALETTE.len();

/// Grid sizes offered by the front end's new-game keys
pub const SUPPORTED_SIZES: [usize; 3] = [2, 4, 6];

/// Size of the first game when nothing else is configured
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Input poll interval in milliseconds
pub const TICK_MS: u32 = 50;

/// The six cell colors
///
/// Colors only compare for equality; they carry no ordering. Each one has a
/// display RGB value and a single-letter label for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Purple,
    Green,
    Yellow,
    Orange,
}

/// Canonical palette. A grid of size N uses the first N entries.
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Blue,
    Color::Purple,
    Color::Green,
    Color::Yellow,
    Color::Orange,
];

impl Color {
    /// Display color as `(r, g, b)`
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (215, 90, 90),
            Color::Blue => (90, 131, 215),
            Color::Purple => (169, 123, 196),
            Color::Green => (123, 196, 126),
            Color::Yellow => (242, 213, 102),
            Color::Orange => (242, 160, 90),
        }
    }

    /// Single uppercase letter used by text renderings of the grid
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Purple => 'P',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
        }
    }
}

/// Which kind of line a rotation acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// Direction of a one-step cyclic rotation along a line
///
/// Lines are read left-to-right (rows) or top-to-bottom (columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Every value moves to the next position; the last one wraps to the front
    Forward,
    /// Every value moves to the previous position; the first one wraps to the back
    Backward,
}

impl Shift {
    /// The rotation that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Shift::Forward => Shift::Backward,
            Shift::Backward => Shift::Forward,
        }
    }
}

/// Player-facing arrow buttons around the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Up,
    Right,
    Down,
    Left,
}

impl Arrow {
    pub const ALL: [Arrow; 4] = [Arrow::Up, Arrow::Right, Arrow::Down, Arrow::Left];

    /// Line kind this arrow rotates: Up/Down move columns, Left/Right move rows
    pub fn axis(self) -> Axis {
        match self {
            Arrow::Up | Arrow::Down => Axis::Column,
            Arrow::Left | Arrow::Right => Axis::Row,
        }
    }

    /// Rotation direction along the line
    pub fn shift(self) -> Shift {
        match self {
            Arrow::Up | Arrow::Left => Shift::Backward,
            Arrow::Down | Arrow::Right => Shift::Forward,
        }
    }

    /// Glyph drawn on the arrow button
    pub fn symbol(self) -> char {
        match self {
            Arrow::Up => '↑',
            Arrow::Right => '→',
            Arrow::Down => '↓',
            Arrow::Left => '←',
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Arrow::Up => Arrow::Down,
            Arrow::Down => Arrow::Up,
            Arrow::Left => Arrow::Right,
            Arrow::Right => Arrow::Left,
        }
    }
}

/// Actions the front end forwards to the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection cursor one cell
    MoveCursor(Arrow),
    /// Rotate the selected column (Up/Down) or row (Left/Right)
    Rotate(Arrow),
    /// Start a new game with the given grid size
    NewGame(usize),
    /// Start a new game with the current grid size
    Restart,
}
