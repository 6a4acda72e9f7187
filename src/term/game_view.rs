//! GameView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Game, Phase};
use crate::term::fb::{FrameBuffer, Style};
use crate::types::Color;

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

/// Renders the grid, the falling piece, and the line counter.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const PLAYFIELD_BG: Color = Color::new(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid_w = game.grid().width();
        let grid_h = game.grid().height();
        let board_px_w = grid_w * self.cell_w;
        let board_px_h = grid_h * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style {
            fg: Color::new(80, 80, 90),
            bg: PLAYFIELD_BG,
            bold: false,
        };
        let border = Style {
            fg: Color::new(200, 200, 200),
            bg: Color::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked debris, each cell in the color it was locked with.
        for (pos, color) in game.grid().debris() {
            self.fill_cell(&mut fb, start_x, start_y, pos.col as u16, pos.row as u16, color);
        }

        // Active piece. During game over the blocked spawn is still shown,
        // overlapping the debris that ended the game.
        for &pos in game.active().cells() {
            if pos.col >= 0 && pos.col < grid_w as i16 && pos.row >= 0 && pos.row < grid_h as i16 {
                self.fill_cell(
                    &mut fb,
                    start_x,
                    start_y,
                    pos.col as u16,
                    pos.row as u16,
                    game.active().color(),
                );
            }
        }

        self.draw_side_panel(&mut fb, game, viewport, start_x, start_y, frame_w);

        if game.phase() == Phase::GameOver {
            self.draw_game_over(&mut fb, game, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        color: Color,
    ) {
        let style = Style {
            fg: color,
            bg: PLAYFIELD_BG,
            bold: true,
        };
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style {
            fg: Color::new(220, 220, 220),
            bg: Color::new(0, 0, 0),
            bold: true,
        };
        let value = Style {
            fg: Color::new(200, 200, 200),
            bg: Color::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", game.lines_cleared()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "A/D MOVE", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "W ROTATE", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "S DROP", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "Q QUIT", value);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = Style {
            fg: Color::new(255, 255, 255),
            bg: Color::new(120, 20, 20),
            bold: true,
        };

        let lines = [
            "GAME OVER".to_string(),
            format!("{} LINES CLEARED", game.lines_cleared()),
            "R RESTART".to_string(),
        ];

        let mid_y = start_y + frame_h / 2;
        for (i, text) in lines.iter().enumerate() {
            let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, mid_y.saturating_sub(1) + i as u16, text, style);
        }
    }
}
