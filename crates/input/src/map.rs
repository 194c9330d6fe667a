//! Key mapping from terminal events to game actions.
//!
//! Arrow keys press the arrow buttons of the selected row/column. Letter keys
//! (WASD and vi-style HJKL) move the selection.

use crate::types::{Arrow, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Rotation
        KeyCode::Up => Some(GameAction::Rotate(Arrow::Up)),
        KeyCode::Down => Some(GameAction::Rotate(Arrow::Down)),
        KeyCode::Left => Some(GameAction::Rotate(Arrow::Left)),
        KeyCode::Right => Some(GameAction::Rotate(Arrow::Right)),

        // Selection
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::MoveCursor(Arrow::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::MoveCursor(Arrow::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::MoveCursor(Arrow::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::MoveCursor(Arrow::Right))
        }

        // New game
        KeyCode::Char('2') => Some(GameAction::NewGame(2)),
        KeyCode::Char('4') => Some(GameAction::NewGame(4)),
        KeyCode::Char('6') => Some(GameAction::NewGame(6)),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(GameAction::Restart)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
