//! Session - one player's run of consecutive games
//!
//! The session is the only place that mutates the puzzle. Front ends translate
//! input into [`GameAction`]s and hand them to [`Session::apply_action`], then
//! redraw from [`Session::puzzle`].

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{GridPuzzle, PuzzleError};
use crate::types::{Arrow, Axis, GameAction};

/// Selected cell; arrows rotate its row or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Row or column index an arrow acts on from this cursor
    pub fn line_for(self, arrow: Arrow) -> usize {
        match arrow.axis() {
            Axis::Row => self.row,
            Axis::Column => self.col,
        }
    }
}

/// A finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub size: usize,
    pub moves: u32,
}

impl Completion {
    pub const TITLE: &'static str = "Well done!";

    pub fn message(&self) -> String {
        format!("You've completed the game in {} clicks!", self.moves)
    }
}

/// What an applied action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    CursorMoved,
    /// A line was rotated and the grid is still unsolved
    Rotated { arrow: Arrow, index: usize },
    /// The rotation solved the grid; a new grid of the same size is in play
    Solved(Completion),
    NewGame { size: usize },
}

/// Current puzzle plus move counter, cursor, and last win
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: GridPuzzle,
    rng: StdRng,
    moves: u32,
    cursor: Cursor,
    last_completion: Option<Completion>,
}

impl Session {
    /// Start a session with an entropy-seeded random source.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        Self::from_rng(size, StdRng::from_entropy())
    }

    /// Start a reproducible session: every grid it deals comes from `seed`.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, PuzzleError> {
        Self::from_rng(size, StdRng::seed_from_u64(seed))
    }

    /// Start from a prepared grid. Later grids are dealt from `seed`.
    pub fn with_puzzle(puzzle: GridPuzzle, seed: u64) -> Self {
        Self {
            puzzle,
            rng: StdRng::seed_from_u64(seed),
            moves: 0,
            cursor: Cursor::default(),
            last_completion: None,
        }
    }

    fn from_rng(size: usize, mut rng: StdRng) -> Result<Self, PuzzleError> {
        let puzzle = GridPuzzle::with_rng(size, &mut rng)?;
        info!("new {size}x{size} game");
        Ok(Self {
            puzzle,
            rng,
            moves: 0,
            cursor: Cursor::default(),
            last_completion: None,
        })
    }

    pub fn puzzle(&self) -> &GridPuzzle {
        &self.puzzle
    }

    pub fn size(&self) -> usize {
        self.puzzle.size()
    }

    /// Successful rotations in the current game
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Most recent win, cleared by the next action
    pub fn last_completion(&self) -> Option<Completion> {
        self.last_completion
    }

    /// Apply a front-end action.
    ///
    /// Errors leave the session unchanged.
    pub fn apply_action(&mut self, action: GameAction) -> Result<SessionEvent, PuzzleError> {
        match action {
            GameAction::MoveCursor(arrow) => {
                self.move_cursor(arrow);
                Ok(SessionEvent::CursorMoved)
            }
            GameAction::Rotate(arrow) => {
                let index = self.cursor.line_for(arrow) as i32;
                self.rotate(arrow, index)
            }
            GameAction::NewGame(size) => self.new_game(size),
            GameAction::Restart => self.new_game(self.size()),
        }
    }

    /// Rotate row/column `index` as if its arrow button was pressed.
    ///
    /// Counts a move, then checks for a win. On a win the completion is
    /// recorded, a fresh grid of the same size is dealt and the counter resets.
    /// An out-of-range index is not a move.
    pub fn rotate(&mut self, arrow: Arrow, index: i32) -> Result<SessionEvent, PuzzleError> {
        self.puzzle.apply(arrow, index)?;
        self.last_completion = None;
        self.moves += 1;
        debug!("move {}: {arrow:?} on line {index}", self.moves);

        if !self.puzzle.is_solved() {
            return Ok(SessionEvent::Rotated {
                arrow,
                index: index as usize,
            });
        }

        let completion = Completion {
            size: self.size(),
            moves: self.moves,
        };
        info!(
            "solved {0}x{0} grid in {1} moves",
            completion.size, completion.moves
        );

        self.puzzle = GridPuzzle::with_rng(completion.size, &mut self.rng)?;
        self.moves = 0;
        self.last_completion = Some(completion);
        Ok(SessionEvent::Solved(completion))
    }

    /// Replace the grid with a fresh one of `size`.
    ///
    /// An unsupported size is rejected and the current game continues.
    pub fn new_game(&mut self, size: usize) -> Result<SessionEvent, PuzzleError> {
        self.puzzle = GridPuzzle::with_rng(size, &mut self.rng)?;
        self.moves = 0;
        self.cursor = Cursor::default();
        self.last_completion = None;
        info!("new {size}x{size} game");
        Ok(SessionEvent::NewGame { size })
    }

    fn move_cursor(&mut self, arrow: Arrow) {
        let last = self.size() - 1;
        let cursor = &mut self.cursor;
        match arrow {
            Arrow::Up => cursor.row = cursor.row.saturating_sub(1),
            Arrow::Down => cursor.row = (cursor.row + 1).min(last),
            Arrow::Left => cursor.col = cursor.col.saturating_sub(1),
            Arrow::Right => cursor.col = (cursor.col + 1).min(last),
        }
        self.last_completion = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_to_grid_edges() {
        let mut session = Session::with_seed(2, 1).unwrap();

        session.apply_action(GameAction::MoveCursor(Arrow::Up)).unwrap();
        session.apply_action(GameAction::MoveCursor(Arrow::Left)).unwrap();
        assert_eq!(session.cursor(), Cursor { row: 0, col: 0 });

        for _ in 0..5 {
            session.apply_action(GameAction::MoveCursor(Arrow::Down)).unwrap();
            session.apply_action(GameAction::MoveCursor(Arrow::Right)).unwrap();
        }
        assert_eq!(session.cursor(), Cursor { row: 1, col: 1 });
    }

    #[test]
    fn cursor_line_depends_on_arrow_axis() {
        let cursor = Cursor { row: 2, col: 3 };
        assert_eq!(cursor.line_for(Arrow::Up), 3);
        assert_eq!(cursor.line_for(Arrow::Down), 3);
        assert_eq!(cursor.line_for(Arrow::Left), 2);
        assert_eq!(cursor.line_for(Arrow::Right), 2);
    }

    #[test]
    fn completion_message_reports_clicks() {
        let done = Completion { size: 4, moves: 17 };
        assert_eq!(done.message(), "You've completed the game in 17 clicks!");
        assert_eq!(Completion::TITLE, "Well done!");
    }

    #[test]
    fn cursor_move_is_not_counted() {
        let mut session = Session::with_seed(4, 3).unwrap();
        session.apply_action(GameAction::MoveCursor(Arrow::Down)).unwrap();
        assert_eq!(session.moves(), 0);
    }
}
