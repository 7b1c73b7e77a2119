//! BoardView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Card faces follow the game's display rules:
//! - face-up: the revealed glyph on a white face
//! - face-down and matched: invisible (drawn in the background color)
//! - face-down and unmatched: the theme's card color

use crate::engine::SessionSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::DEFAULT_COLUMNS;

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

/// Rows above the grid: title and a blank line.
const HEADER_ROWS: u16 = 2;
/// Rows below the grid: blank line, labels, help.
const FOOTER_ROWS: u16 = 3;

const HELP: &str = "arrows move · space flip · n new game · q quit";

/// Where the grid lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    top: u16,
    grid_x: u16,
    grid_y: u16,
    grid_w: u16,
    grid_h: u16,
}

/// A lightweight terminal renderer for the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
    /// Blank cells between neighbouring cards.
    gap: u16,
    columns: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            card_w: 6,
            card_h: 3,
            gap: 1,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl BoardView {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.max(1),
            ..Self::default()
        }
    }

    fn layout(&self, card_count: usize, viewport: Viewport) -> Layout {
        let count = card_count as u16;
        let used_cols = self.columns.min(count).max(1);
        let rows = count.div_ceil(self.columns).max(1);

        let grid_w = used_cols * self.card_w + (used_cols - 1) * self.gap;
        let grid_h = rows * self.card_h + (rows - 1) * self.gap;
        let total_h = HEADER_ROWS + grid_h + FOOTER_ROWS;

        let top = viewport.height.saturating_sub(total_h) / 2;
        Layout {
            top,
            grid_x: viewport.width.saturating_sub(grid_w) / 2,
            grid_y: top + HEADER_ROWS,
            grid_w,
            grid_h,
        }
    }

    fn card_origin(&self, layout: &Layout, index: usize) -> (u16, u16) {
        let col = (index as u16) % self.columns;
        let row = (index as u16) / self.columns;
        (
            layout.grid_x + col * (self.card_w + self.gap),
            layout.grid_y + row * (self.card_h + self.gap),
        )
    }

    /// Card under terminal cell `(x, y)`, if any.
    pub fn hit_test(&self, card_count: usize, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        let layout = self.layout(card_count, viewport);
        (0..card_count).find(|&i| {
            let (cx, cy) = self.card_origin(&layout, i);
            x >= cx && x < cx + self.card_w && y >= cy && y < cy + self.card_h
        })
    }

    /// Render a session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes. `selected` highlights the card under the cursor.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        selected: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let background = snap.theme.background_color();
        let text = CellStyle::text_on(background);

        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', text));

        let layout = self.layout(snap.game.cards.len(), viewport);

        let title = format!("Concentration · {}", snap.theme);
        self.put_centered(fb, viewport, layout.top, &title, text.bold());

        for index in 0..snap.game.cards.len() {
            let origin = self.card_origin(&layout, index);
            self.draw_card(fb, origin, snap, index, selected == Some(index));
        }

        let labels_y = layout.grid_y + layout.grid_h + 1;
        let labels = format!("{}    {}", snap.flips_label(), snap.score_label());
        self.put_centered(fb, viewport, labels_y, &labels, text);
        self.put_centered(fb, viewport, labels_y + 1, HELP, text.dim());

        if snap.game.complete {
            self.draw_overlay_text(fb, &layout, "ALL PAIRS MATCHED", "press n for a new game");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        selected: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, selected, viewport, &mut fb);
        fb
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        (x, y): (u16, u16),
        snap: &SessionSnapshot,
        index: usize,
        selected: bool,
    ) {
        let Some(card) = snap.game.cards.get(index) else {
            return;
        };
        let face = if card.is_face_up {
            Rgb::WHITE
        } else if card.is_matched {
            snap.theme.background_color()
        } else {
            snap.theme.card_color()
        };
        let style = CellStyle::new(Rgb::BLACK, face);
        fb.fill_rect(x, y, self.card_w, self.card_h, ' ', style);

        if card.is_face_up {
            let gx = x + (self.card_w - 2) / 2;
            let gy = y + self.card_h / 2;
            match snap.glyph_at(index) {
                Some(g) => fb.put_wide(gx, gy, g, style),
                None => fb.put_char(gx, gy, '?', style),
            }
        }

        if selected {
            let mark = CellStyle::text_on(face).bold();
            let right = x + self.card_w - 1;
            let bottom = y + self.card_h - 1;
            fb.put_char(x, y, '┌', mark);
            fb.put_char(right, y, '┐', mark);
            fb.put_char(x, bottom, '└', mark);
            fb.put_char(right, bottom, '┘', mark);
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, viewport: Viewport, y: u16, s: &str, style: CellStyle) {
        let w = s.chars().count() as u16;
        let x = viewport.width.saturating_sub(w) / 2;
        fb.put_str(x, y, s, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, headline: &str, hint: &str) {
        let mid_y = layout.grid_y + layout.grid_h / 2;
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        for (dy, line) in [headline, hint].into_iter().enumerate() {
            let padded = format!(" {line} ");
            let w = padded.chars().count() as u16;
            let x = layout.grid_x + layout.grid_w.saturating_sub(w) / 2;
            fb.put_str(x, mid_y + dy as u16, &padded, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centers_grid() {
        let view = BoardView::default();
        // 16 cards, 4 columns: 4*6 + 3 = 27 wide, 4*3 + 3 = 15 tall.
        let layout = view.layout(16, Viewport::new(47, 40));
        assert_eq!(layout.grid_w, 27);
        assert_eq!(layout.grid_h, 15);
        assert_eq!(layout.grid_x, 10);
        // total height 2 + 15 + 3 = 20, top = (40 - 20) / 2.
        assert_eq!(layout.top, 10);
        assert_eq!(layout.grid_y, 12);
    }

    #[test]
    fn layout_handles_partial_rows() {
        let view = BoardView::new(4);
        let layout = view.layout(6, Viewport::new(80, 24));
        assert_eq!(layout.grid_h, 2 * 3 + 1);
        assert_eq!(layout.grid_w, 27);

        let narrow = view.layout(2, Viewport::new(80, 24));
        assert_eq!(narrow.grid_w, 2 * 6 + 1);
    }

    #[test]
    fn hit_test_skips_gaps() {
        let view = BoardView::default();
        let vp = Viewport::new(27, 20);
        // grid_x = 0, grid_y = 2
        assert_eq!(view.hit_test(16, vp, 0, 2), Some(0));
        assert_eq!(view.hit_test(16, vp, 5, 4), Some(0));
        assert_eq!(view.hit_test(16, vp, 6, 2), None);
        assert_eq!(view.hit_test(16, vp, 7, 2), Some(1));
        assert_eq!(view.hit_test(16, vp, 0, 6), Some(4));
        assert_eq!(view.hit_test(16, vp, 0, 0), None);
    }
}
