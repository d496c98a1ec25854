//! GameView: draws a [`Scene`] into a terminal framebuffer.
//!
//! [`Scene`] is what the session pushes into: it implements the engine's
//! render and display sinks and keeps the latest state. [`GameView`] turns a
//! scene into characters. Neither does any I/O, so both are unit-tested.

use crate::core::shapes::{self, ShapeMatrix};
use crate::core::{Board, Tetromino};
use crate::engine::{DisplaySink, RenderSink};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, ROUND_SECONDS};

/// Preview boxes are this many board cells wide.
pub const PREVIEW_COLS: u16 = 6;
/// Preview boxes are this many board cells tall.
pub const PREVIEW_ROWS: u16 = 4;

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Latest state pushed by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub board: Board,
    pub active: Option<Tetromino>,
    pub next: Option<PieceKind>,
    pub held: Option<PieceKind>,
    pub score: u32,
    pub time_remaining: u32,
    pub start_enabled: bool,
    /// Set when a round ends, cleared when the next one starts.
    pub final_score: Option<u32>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            held: None,
            score: 0,
            time_remaining: ROUND_SECONDS,
            start_enabled: true,
            final_score: None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.final_score.is_some()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for Scene {
    fn draw_board(&mut self, board: &Board) {
        self.board.clone_from(board);
    }

    fn draw_active_piece(&mut self, piece: Option<&Tetromino>) {
        self.active = piece.copied();
    }

    fn draw_next_piece(&mut self, kind: Option<PieceKind>) {
        self.next = kind;
    }

    fn draw_held_piece(&mut self, kind: Option<PieceKind>) {
        self.held = kind;
    }
}

impl DisplaySink for Scene {
    fn show_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_time_remaining(&mut self, seconds: u32) {
        self.time_remaining = seconds;
    }

    fn game_over(&mut self, final_score: u32) {
        self.final_score = Some(final_score);
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
        if !enabled {
            self.final_score = None;
        }
    }
}

/// Where a piece sits inside the NEXT box, in board cells.
pub fn next_preview_offset(kind: PieceKind) -> (u16, u16) {
    match kind {
        PieceKind::I => (0, 0),
        PieceKind::O => (1, 1),
        PieceKind::T => (0, 1),
        PieceKind::L => (0, 0),
        PieceKind::J => (1, 0),
        PieceKind::S => (0, 1),
        PieceKind::Z => (0, 1),
    }
}

/// Where a piece sits inside the HOLD box, in board cells.
pub fn held_preview_offset(kind: PieceKind) -> (u16, u16) {
    match kind {
        PieceKind::I => (1, 2),
        PieceKind::O => (2, 2),
        _ => (1, 1),
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Smallest terminal that shows the playfield and the side panel.
    ///
    /// The playfield is centered, so the panel's width is reserved on both sides.
    pub fn required_viewport(&self) -> Viewport {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let panel_w = 2 + PREVIEW_COLS * self.cell_w;
        Viewport::new(frame_w + 2 * panel_w, frame_h)
    }

    /// Render `scene` into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only reallocated
    /// when the viewport changes size.
    pub fn render_into(&self, scene: &Scene, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_px_h = BOARD_HEIGHT as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = (start_x + 1, start_y + 1);

        let grid = CellStyle::new(Rgb::new(0x44, 0x44, 0x44), PLAYFIELD_BG).dim();
        fb.fill_rect(origin.0, origin.1, board_px_w, board_px_h, ' ', grid);
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for (y, row) in scene.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, origin, x as u16, y as u16, *kind, false),
                    None => self.fill_cell_rect(fb, origin, x as u16, y as u16, '·', grid),
                }
            }
        }

        if let Some(active) = scene.active {
            for (x, y) in active.cells() {
                // Rows above the board are not drawn.
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, origin, x as u16, y as u16, active.kind, true);
                }
            }
        }

        self.draw_side_panel(fb, scene, viewport, start_x + frame_w + 2, start_y);

        if let Some(score) = scene.final_score {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", Some(score));
        } else if scene.start_enabled {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER", None);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        x: u16,
        y: u16,
        kind: PieceKind,
        bold: bool,
    ) {
        let mut style = CellStyle::new(Rgb::from_array(shapes::color(kind)), PLAYFIELD_BG);
        style.bold = bold;
        self.fill_cell_rect(fb, origin, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.0 + cell_x * self.cell_w;
        let py = origin.1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        scene: &Scene,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PREVIEW_COLS * self.cell_w {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, scene.score, value);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        fb.put_u32(panel_x, y + 1, scene.time_remaining, value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(kind) = scene.next {
            self.draw_preview(fb, panel_x, y, kind, next_preview_offset(kind));
        }
        y += PREVIEW_ROWS * self.cell_h + 1;

        fb.put_str(panel_x, y, "HOLD", label);
        y += 1;
        if let Some(kind) = scene.held {
            self.draw_preview(fb, panel_x, y, kind, held_preview_offset(kind));
        }
    }

    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        kind: PieceKind,
        offset: (u16, u16),
    ) {
        let matrix: ShapeMatrix = shapes::shape(kind);
        for (dx, dy) in matrix.occupied() {
            let cx = offset.0 + dx as u16;
            let cy = offset.1 + dy as u16;
            if cx < PREVIEW_COLS && cy < PREVIEW_ROWS {
                self.draw_block(fb, (x, y), cx, cy, kind, false);
            }
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        score: Option<u32>,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);
        let centered = |text_w: u16| start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);

        fb.put_str(centered(text_width(title)), mid_y.saturating_sub(1), title, style);

        match score {
            Some(score) => {
                let w = 6 + digit_count(score);
                let x = centered(w);
                fb.put_str(x, mid_y, "SCORE ", style);
                fb.put_u32(x + 6, mid_y, score, style);
                let hint = "ENTER: AGAIN";
                fb.put_str(centered(text_width(hint)), mid_y + 1, hint, style.dim());
            }
            None => {
                let hint = "TO START";
                fb.put_str(centered(text_width(hint)), mid_y, hint, style);
            }
        }
    }
}

fn text_width(s: &str) -> u16 {
    s.chars().count() as u16
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
