// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for layout math.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Shrink by `insets`, never inverting the rectangle.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as f32;
        let top = self.top + insets.top as f32;
        let right = (self.right - insets.right as f32).max(left + 1.0);
        let bottom = (self.bottom - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    /// Split into a `rows x cols` grid of equal cells, row-major.
    pub fn grid(&self, rows: usize, cols: usize, gap: f32) -> Vec<RectF> {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cw = (self.width() - gap * (cols - 1) as f32) / cols as f32;
        let ch = (self.height() - gap * (rows - 1) as f32) / rows as f32;
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let l = self.left + c as f32 * (cw + gap);
                let t = self.top + r as f32 * (ch + gap);
                cells.push(RectF::from_ltwh(l, t, cw, ch));
            }
        }
        cells
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
