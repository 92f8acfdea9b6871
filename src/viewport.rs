//! Mapping between playfield units and terminal cells.
//!
//! The playfield keeps its own fixed size (800×600 by default) no matter how
//! big the terminal is.  Row 0 is reserved for the HUD and the last row for
//! the controls hint, so the playfield occupies rows `top .. top + rows`.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// First terminal row of the playfield.
    pub top: u16,
    pub cols: u16,
    pub rows: u16,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Fit a `width`×`height` playfield into a terminal of `term_cols`×`term_rows`.
    pub fn new(term_cols: u16, term_rows: u16, width: f32, height: f32) -> Self {
        Viewport {
            top: 1,
            cols: term_cols.max(1),
            rows: term_rows.saturating_sub(2).max(1),
            width,
            height,
        }
    }

    fn cell_w(&self) -> f32 {
        self.width / self.cols as f32
    }

    fn cell_h(&self) -> f32 {
        self.height / self.rows as f32
    }

    /// Terminal cell holding a playfield point, clamped to the playfield area.
    pub fn to_cell(&self, p: Vec2) -> (u16, u16) {
        let col = (p.x / self.cell_w()).floor().clamp(0.0, (self.cols - 1) as f32) as u16;
        let row = (p.y / self.cell_h()).floor().clamp(0.0, (self.rows - 1) as f32) as u16;
        (col, row + self.top)
    }

    /// Playfield point at the centre of a terminal cell; `None` outside the playfield.
    pub fn to_world(&self, col: u16, row: u16) -> Option<Vec2> {
        if col >= self.cols || row < self.top || row >= self.top + self.rows {
            return None;
        }
        let local_row = row - self.top;
        Some(Vec2::new(
            (col as f32 + 0.5) * self.cell_w(),
            (local_row as f32 + 0.5) * self.cell_h(),
        ))
    }

    /// Cells covered by a rectangle: `(col, row, cols, rows)`, at least one cell.
    pub fn cover(&self, pos: Vec2, w: f32, h: f32) -> (u16, u16, u16, u16) {
        let (c0, r0) = self.to_cell(pos);
        let (c1, r1) = self.to_cell(pos + Vec2::new(w, h) - Vec2::splat(0.001));
        (c0, r0, c1.max(c0) - c0 + 1, r1.max(r0) - r0 + 1)
    }
}
