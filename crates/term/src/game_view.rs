//! GameView: maps a [`Session`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (for a 2x2 grid), mirroring a board of arrow buttons around the
//! color cells:
//!
//! ```text
//!      ↑   ↑
//!   ┌────────┐
//!   │████████│
//! ← │████████│ →
//!   │████████│
//! ← │████████│ →
//!   └────────┘
//!      ↓   ↓
//!
//!   Click Count: 0
//! ```

use crate::engine::Session;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Arrow, Color};

/// Rows below the board: gap, counter, banner, gap, help.
const STATUS_ROWS: u16 = 5;

/// Columns reserved on each side of the frame for row arrows.
const GUTTER_W: u16 = 2;

const BG: Rgb = Rgb::new(0, 0, 0);
const ARROW_IDLE: Rgb = Rgb::new(166, 166, 166);
const ARROW_SELECTED: Rgb = Rgb::new(255, 255, 255);
const BORDER: Rgb = Rgb::new(217, 217, 217);

const HELP: &str = "arrows rotate  wasd/hjkl select  2/4/6 new game  r restart  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal renderer for the puzzle board.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square with typical terminal glyphs.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

/// Screen positions for one render pass.
#[derive(Debug, Clone, Copy)]
struct Layout {
    size: u16,
    /// Top-left of the frame border.
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Width and height the full board (arrows, frame, status lines) needs.
    pub fn required_size(&self, grid_size: usize) -> (u16, u16) {
        let frame_w = grid_size as u16 * self.cell_w + 2;
        let frame_h = grid_size as u16 * self.cell_h + 2;
        (frame_w + 2 * GUTTER_W, frame_h + 2 + STATUS_ROWS)
    }

    /// Render the session into a framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.layout(session.size(), viewport);

        self.draw_frame(&mut fb, layout);
        self.draw_cells(&mut fb, session, layout);
        self.draw_arrows(&mut fb, session, layout);
        self.draw_status(&mut fb, session, layout);

        fb
    }

    fn layout(&self, size: usize, viewport: Viewport) -> Layout {
        let (block_w, block_h) = self.required_size(size);
        let origin_x = viewport.width.saturating_sub(block_w) / 2;
        let origin_y = viewport.height.saturating_sub(block_h) / 2;
        Layout {
            size: size as u16,
            frame_x: origin_x + GUTTER_W,
            frame_y: origin_y + 1,
            frame_w: size as u16 * self.cell_w + 2,
            frame_h: size as u16 * self.cell_h + 2,
        }
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, l: Layout) {
        let style = CellStyle::fg(BORDER);
        let (x, y, w, h) = (l.frame_x, l.frame_y, l.frame_w, l.frame_h);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, session: &Session, l: Layout) {
        let cursor = session.cursor();
        for (row, line) in session.puzzle().rows().enumerate() {
            for (col, &color) in line.iter().enumerate() {
                let selected = cursor.row == row && cursor.col == col;
                self.draw_cell(fb, l, row as u16, col as u16, color, selected);
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        l: Layout,
        row: u16,
        col: u16,
        color: Color,
        selected: bool,
    ) {
        let px = l.frame_x + 1 + col * self.cell_w;
        let py = l.frame_y + 1 + row * self.cell_h;
        let ch = if selected { '▓' } else { '█' };
        let style = CellStyle::fg(Rgb::from(color)).on(BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_arrows(&self, fb: &mut FrameBuffer, session: &Session, l: Layout) {
        let cursor = session.cursor();
        let style = |selected: bool| {
            if selected {
                CellStyle::fg(ARROW_SELECTED).bold()
            } else {
                CellStyle::fg(ARROW_IDLE).dim()
            }
        };

        for i in 0..l.size {
            let selected_col = cursor.col == i as usize;
            let x = l.frame_x + 1 + i * self.cell_w + self.cell_w / 2;
            fb.put_char(x, l.frame_y - 1, Arrow::Up.symbol(), style(selected_col));
            fb.put_char(x, l.frame_y + l.frame_h, Arrow::Down.symbol(), style(selected_col));

            let selected_row = cursor.row == i as usize;
            let y = l.frame_y + 1 + i * self.cell_h + self.cell_h / 2;
            fb.put_char(l.frame_x - GUTTER_W, y, Arrow::Left.symbol(), style(selected_row));
            fb.put_char(
                l.frame_x + l.frame_w + GUTTER_W - 1,
                y,
                Arrow::Right.symbol(),
                style(selected_row),
            );
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, session: &Session, l: Layout) {
        let y = l.frame_y + l.frame_h + 2;
        fb.put_str_centered(
            y,
            &format!("Click Count: {}", session.moves()),
            CellStyle::default(),
        );

        if let Some(done) = session.last_completion() {
            let text = format!("{} {}", crate::engine::Completion::TITLE, done.message());
            fb.put_str_centered(y + 1, &text, CellStyle::fg(Rgb::new(242, 213, 102)).bold());
        }

        fb.put_str_centered(y + 3, HELP, CellStyle::default().dim());
    }
}
