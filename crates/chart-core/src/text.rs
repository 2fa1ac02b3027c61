// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; supports multi-line, bold, anchoring, rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Horizontal anchor of a text block relative to its draw point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign { Left, Center, Right }

/// Vertical anchor of a text block relative to its draw point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign { Top, Middle, Bottom }

#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false }
    }
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Lay out `text`; lines are centered against each other so multi-line labels stack neatly.
    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Center);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        // re-layout at the intrinsic width so centering is relative to the block
        let w = paragraph.max_intrinsic_width().ceil() + 1.0;
        paragraph.layout(w);
        paragraph
    }

    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.max_width(), p.height())
    }

    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec, h: HAlign, v: VAlign) {
        let mut p = self.layout(text, spec);
        let (w, ht) = (p.max_width(), p.height());
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Middle => y - ht * 0.5,
            VAlign::Bottom => y - ht,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw centered on `(x, y)` after rotating by `degrees` (negative = counter-clockwise).
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec, degrees: f32) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(degrees, None);
        self.draw(canvas, text, 0.0, 0.0, spec, HAlign::Center, VAlign::Middle);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
