//! Terminal Rubik Table runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.
//! The screen is redrawn only after input or a resize.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, warn};

use rubik_table::config::AppConfig;
use rubik_table::engine::Session;
use rubik_table::input::{handle_key_event, should_quit};
use rubik_table::logging;
use rubik_table::term::{GameView, TerminalRenderer, Viewport};
use rubik_table::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    logging::init(config.log_path.as_deref())?;
    let session = config.session().context("start game")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let poll_timeout = Duration::from_millis(TICK_MS as u64);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let mut fb = view.render(&session, Viewport::new(w, h));
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(poll_timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    match session.apply_action(action) {
                        Ok(outcome) => debug!("{action:?} -> {outcome:?}"),
                        // Key map only produces valid sizes and cursor lines.
                        Err(err) => warn!("{action:?} rejected: {err}"),
                    }
                    dirty = true;
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
