// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, render options).

use skia_safe as skia;

/// Logical units per inch; all layout is done in these units and scaled by `dpi / BASE_DPI`.
pub const BASE_DPI: f32 = 100.0;
/// Default single-panel surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default single-panel surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Margins around a plot area, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(84, 24, 40, 60)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    /// Skip every text draw (titles, ticks, legends, annotations).
    /// Pixel output is then independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::WHITE,
            draw_labels: true,
        }
    }
}
