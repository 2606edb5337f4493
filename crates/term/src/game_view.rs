//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{format_u64, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Status, BOARD_SIZE};

const PANEL_MIN_W: u16 = 14;

const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const BORDER: CellStyle = CellStyle::new(Rgb::new(187, 173, 160), Rgb::new(0, 0, 0));
const EMPTY_TILE: CellStyle = CellStyle::new(Rgb::new(120, 110, 100), Rgb::new(205, 193, 180));

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

/// Vertical placement of the board in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 fits a four digit tile with padding and keeps tiles roughly square.
        Self {
            cell_w: 6,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
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

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_SIZE as u16 * self.cell_w + 2,
            BOARD_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (r, row) in snap.grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, r as u16, c as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(text) = overlay_text(snap.status) {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '╔', BORDER);
        fb.put_char(x + w - 1, y, '╗', BORDER);
        fb.put_char(x, y + h - 1, '╚', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '╝', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '═', BORDER);
            fb.put_char(x + dx, y + h - 1, '═', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '║', BORDER);
            fb.put_char(x + w - 1, y + dy, '║', BORDER);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;

        if value == 0 {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', EMPTY_TILE);
            fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', EMPTY_TILE);
            return;
        }

        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mut digits = [0u8; 20];
        let len = format_u64(value.into(), &mut digits) as u16;
        // Wider numbers than the tile are clipped on the right.
        let x = px + self.cell_w.saturating_sub(len) / 2;
        for (i, &d) in digits[..len as usize].iter().enumerate() {
            let i = i as u16;
            if i >= self.cell_w {
                break;
            }
            fb.put_char(x + i, py + self.cell_h / 2, d as char, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.max_tile().into(), VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves.into(), VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.status.as_str(), VALUE);
        y = y.saturating_add(2);

        let dim = CellStyle {
            fg: Rgb::new(130, 130, 130),
            ..VALUE
        };
        for help in ["arrows  move", "enter   start", "r       restart", "q       quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn overlay_text(status: Status) -> Option<&'static str> {
    match status {
        Status::Idle => Some(" PRESS ENTER "),
        Status::Playing => None,
        Status::Win => Some(" YOU WIN! "),
        Status::Lose => Some(" GAME OVER "),
    }
}

/// Classic 2048 palette; tiles past 2048 share one color.
fn tile_style(value: u32) -> CellStyle {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    let (fg, bg) = match value {
        2 => (dark, Rgb::new(238, 228, 218)),
        4 => (dark, Rgb::new(237, 224, 200)),
        8 => (light, Rgb::new(242, 177, 121)),
        16 => (light, Rgb::new(245, 149, 99)),
        32 => (light, Rgb::new(246, 124, 95)),
        64 => (light, Rgb::new(246, 94, 59)),
        128 => (light, Rgb::new(237, 207, 114)),
        256 => (light, Rgb::new(237, 204, 97)),
        512 => (light, Rgb::new(237, 200, 80)),
        1024 => (light, Rgb::new(237, 197, 63)),
        2048 => (light, Rgb::new(237, 194, 46)),
        _ => (light, Rgb::new(60, 58, 50)),
    };
    CellStyle::new(fg, bg).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_styles_differ_by_value() {
        assert_ne!(tile_style(2).bg, tile_style(4).bg);
        assert_eq!(tile_style(4096).bg, tile_style(8192).bg);
        assert!(tile_style(2).bold);
    }

    #[test]
    fn overlay_only_when_not_playing() {
        assert!(overlay_text(Status::Playing).is_none());
        assert!(overlay_text(Status::Idle).is_some());
        assert!(overlay_text(Status::Win).unwrap().contains("WIN"));
        assert!(overlay_text(Status::Lose).unwrap().contains("GAME OVER"));
    }

    #[test]
    fn frame_size_tracks_tile_size() {
        assert_eq!(GameView::default().frame_size(), (26, 14));
        assert_eq!(GameView::new(4, 1).frame_size(), (18, 6));
    }
}
