//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O) and unit-testable. Board row 0 is the floor, so it is drawn on
//! the last screen line of the well.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Fruit, BOARD_HEIGHT, BOARD_WIDTH};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const WELL_BG: Rgb = Rgb(30, 30, 40);
const PANEL_BG: Rgb = Rgb(0, 0, 0);
const TEXT: Rgb = Rgb(220, 220, 220);
const EMPTY_STYLE: Style = Style::new(Rgb(90, 90, 100), WELL_BG).dim();
const FRUIT_GLYPH: char = '█';

/// Narrower leftovers than this get no side panel
const PANEL_MIN_WIDTH: u16 = 12;

const CONTROLS: [(&str, &str); 7] = [
    ("←→", "move"),
    ("↑", "rotate"),
    ("↓", "drop"),
    ("SPC", "shuffle"),
    ("P", "pause"),
    ("R", "reset"),
    ("Q", "quit"),
];

/// A lightweight terminal renderer for the fruit well.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered well in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the well frame inside `viewport`
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Screen position of the top-left character of board cell (col, row)
    pub fn cell_origin(&self, viewport: Viewport, col: u16, row: u16) -> (u16, u16) {
        let (start_x, start_y) = self.frame_origin(viewport);
        let screen_row = (BOARD_HEIGHT as u16 - 1).saturating_sub(row);
        (
            start_x + 1 + col * self.cell_w,
            start_y + 1 + screen_row * self.cell_h,
        )
    }

    /// Paint the snapshot into `fb`, resizing it to `viewport`.
    ///
    /// Callers keep one framebuffer across frames so drawing does not allocate
    /// once the terminal size has settled.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height, Style::new(TEXT, PANEL_BG).glyph(' '));

        let (frame_x, frame_y) = self.frame_origin(viewport);
        self.draw_well(fb, frame_x, frame_y);

        for row in 0..BOARD_HEIGHT as i8 {
            for col in 0..BOARD_WIDTH as i8 {
                let glyph = match snap.cell(col, row) {
                    Some(fruit) => fruit_style(fruit).glyph(FRUIT_GLYPH),
                    None => EMPTY_STYLE.glyph('·'),
                };
                self.paint_cell(fb, viewport, col, row, glyph);
            }
        }

        if !snap.game_over {
            for ((col, row), fruit) in snap.piece.iter() {
                let glyph = fruit_style(fruit).bold().glyph(FRUIT_GLYPH);
                self.paint_cell(fb, viewport, col, row, glyph);
            }
        }

        self.draw_side_panel(fb, snap, viewport);

        if let Some(text) = banner(snap) {
            let (frame_w, frame_h) = self.frame_size();
            let width = text.chars().count() as u16;
            let x = frame_x + frame_w.saturating_sub(width) / 2;
            let style = Style::new(Rgb(255, 255, 255), PANEL_BG).bold();
            fb.text(x, frame_y + frame_h / 2, text, style);
        }
    }

    /// Border plus empty interior of the well
    fn draw_well(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let (w, h) = self.frame_size();
        let border = Style::new(Rgb(200, 200, 200), PANEL_BG);
        let last_x = w - 1;
        let last_y = h - 1;

        for dy in 0..h {
            for dx in 0..w {
                let ch = match (dx, dy) {
                    (0, 0) => '┌',
                    (dx, 0) if dx == last_x => '┐',
                    (0, dy) if dy == last_y => '└',
                    (dx, dy) if dx == last_x && dy == last_y => '┘',
                    (_, 0) => '─',
                    (_, dy) if dy == last_y => '─',
                    (0, _) => '│',
                    (dx, _) if dx == last_x => '│',
                    _ => {
                        fb.set(x + dx, y + dy, EMPTY_STYLE.glyph(' '));
                        continue;
                    }
                };
                fb.set(x + dx, y + dy, border.glyph(ch));
            }
        }
    }

    fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        col: i8,
        row: i8,
        glyph: Glyph,
    ) {
        if !(0..BOARD_WIDTH as i8).contains(&col) || !(0..BOARD_HEIGHT as i8).contains(&row) {
            return;
        }
        let (x, y) = self.cell_origin(viewport, col as u16, row as u16);
        fb.rect(x, y, self.cell_w, self.cell_h, glyph);
    }

    /// Counters, fruit legend and key list to the right of the well
    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let (frame_x, frame_y) = self.frame_origin(viewport);
        let x = frame_x + self.frame_size().0 + 2;
        if viewport.width.saturating_sub(x) < PANEL_MIN_WIDTH {
            return;
        }

        let heading = Style::new(TEXT, PANEL_BG).bold();
        let plain = Style::new(Rgb(200, 200, 200), PANEL_BG);
        let mut lines = frame_y..viewport.height;

        for (label, value) in [("EPISODE", snap.episode_id), ("PIECE", snap.piece_id)] {
            let Some(y) = lines.next() else { return };
            fb.text(x, y, label, heading);
            fb.number(x + 8, y, value, plain);
        }
        lines.next();

        let Some(y) = lines.next() else { return };
        fb.text(x, y, "FRUIT", heading);
        for (fruit, y) in Fruit::ALL.into_iter().zip(lines.by_ref()) {
            let swatch = Style::new(Rgb::from(fruit.rgb()), PANEL_BG);
            fb.rect(x, y, 2, 1, swatch.glyph(FRUIT_GLYPH));
            fb.text(x + 3, y, fruit.as_str(), plain);
        }
        lines.next();

        let Some(y) = lines.next() else { return };
        fb.text(x, y, "KEYS", heading);
        for ((key, what), y) in CONTROLS.into_iter().zip(lines) {
            fb.text(x, y, key, plain);
            fb.text(x + 4, y, what, plain.dim());
        }
    }
}

/// Centered status line over the well, if any
fn banner(snap: &GameSnapshot) -> Option<&'static str> {
    if snap.game_over {
        Some("GAME OVER")
    } else if !snap.running {
        Some("PAUSED")
    } else {
        None
    }
}

fn fruit_style(fruit: Fruit) -> Style {
    Style::new(Rgb::from(fruit.rgb()), WELL_BG)
}
