use std::ops::Range;

use super::surface::{Paint, Surface, TextAnchor};
use crate::game::BoundingBox;

const FILL: char = '█';
const OUTLINE: char = '·';

/// What occupies one terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: char,
    pub paint: Paint,
}

/// Surface that rasterizes world coordinates onto a grid of terminal cells.
///
/// `clear` fixes the world size for the frame; the world is then stretched
/// over the whole grid, so one world unit may cover a fraction of a cell or
/// several cells.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<Option<Glyph>>,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            scale_x: 1.0,
            scale_y: 1.0,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Glyph> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u16) -> &[Option<Glyph>] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    fn put(&mut self, col: usize, row: usize, glyph: Glyph) {
        if col < self.cols as usize && row < self.rows as usize {
            self.cells[row * self.cols as usize + col] = Some(glyph);
        }
    }

    fn cols_of(&self, rect: &BoundingBox) -> Range<usize> {
        span(rect.x, rect.right(), self.scale_x, self.cols)
    }

    fn rows_of(&self, rect: &BoundingBox) -> Range<usize> {
        span(rect.y, rect.bottom(), self.scale_y, self.rows)
    }
}

/// Cells covered by `[start, end)` in world units; never empty unless the
/// span lies entirely off the grid
fn span(start: f32, end: f32, scale: f32, limit: u16) -> Range<usize> {
    let first = (start * scale).floor() as i64;
    let last = ((end * scale).floor() as i64).max(first + 1);
    let limit = i64::from(limit);
    (first.clamp(0, limit) as usize)..(last.clamp(0, limit) as usize)
}

impl Surface for CellCanvas {
    fn clear(&mut self, width: f32, height: f32) {
        self.scale_x = f32::from(self.cols) / width.max(f32::EPSILON);
        self.scale_y = f32::from(self.rows) / height.max(f32::EPSILON);
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    fn fill_rect(&mut self, rect: BoundingBox, paint: Paint) {
        let glyph = Glyph {
            symbol: FILL,
            paint,
        };
        for row in self.rows_of(&rect) {
            for col in self.cols_of(&rect) {
                self.put(col, row, glyph);
            }
        }
    }

    fn stroke_rect(&mut self, rect: BoundingBox, paint: Paint) {
        let glyph = Glyph {
            symbol: OUTLINE,
            paint,
        };
        let rows = self.rows_of(&rect);
        let cols = self.cols_of(&rect);
        if rows.is_empty() || cols.is_empty() {
            return;
        }

        for row in rows.clone() {
            let edge = row == rows.start || row + 1 == rows.end;
            for col in cols.clone() {
                if edge || col == cols.start || col + 1 == cols.end {
                    self.put(col, row, glyph);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, anchor: TextAnchor, paint: Paint) {
        let row = (y * self.scale_y).floor() as i64;
        let anchor_col = (x * self.scale_x).floor() as i64;
        let len = text.chars().count() as i64;
        let first = match anchor {
            TextAnchor::Start => anchor_col,
            TextAnchor::End => anchor_col - len,
        };
        if row < 0 {
            return;
        }

        for (offset, symbol) in text.chars().enumerate() {
            let col = first + offset as i64;
            if col >= 0 {
                self.put(col as usize, row as usize, Glyph { symbol, paint });
            }
        }
    }
}
