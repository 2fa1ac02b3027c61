// File: crates/chart-core/src/figure.rs
// Summary: Multi-panel figure with a suptitle, laid out on a grid and rasterised at a given DPI.

use std::path::Path;

use skia_safe as skia;

use crate::chart::{Chart, PanelContext};
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::pie::PieChart;
use crate::render::{encode_png, raster_surface, read_rgba8, write_file};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::{Insets, BASE_DPI};

const SUPTITLE_FONT: f32 = 22.0;
const OUTER_PAD: f32 = 12.0;
const PANEL_GAP: f32 = 24.0;

#[derive(Clone, Debug)]
pub enum Panel {
    Cartesian(Chart),
    Pie(PieChart),
}

impl From<Chart> for Panel {
    fn from(c: Chart) -> Self { Panel::Cartesian(c) }
}

impl From<PieChart> for Panel {
    fn from(p: PieChart) -> Self { Panel::Pie(p) }
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub title: Option<String>,
    pub rows: usize,
    pub cols: usize,
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub panels: Vec<Panel>,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Figure {
    pub fn new(rows: usize, cols: usize, width_in: f32, height_in: f32) -> Self {
        Self {
            title: None,
            rows,
            cols,
            width_in,
            height_in,
            dpi: BASE_DPI,
            panels: Vec::new(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn push(&mut self, panel: impl Into<Panel>) {
        self.panels.push(panel.into());
    }

    /// Output size in pixels: inches times DPI.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width_in * self.dpi).round() as i32,
            (self.height_in * self.dpi).round() as i32,
        )
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.render_surface()?;
        encode_png(&mut surface)
    }

    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface()?;
        read_rgba8(&mut surface)
    }

    /// Render and write a PNG, creating the parent directory if needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        write_file(path.as_ref(), &bytes)?;
        log::info!("wrote figure {} ({}x{} px)", path.as_ref().display(), self.pixel_size().0, self.pixel_size().1);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ChartError::Layout(format!("empty grid {}x{}", self.rows, self.cols)));
        }
        if self.panels.len() > self.rows * self.cols {
            return Err(ChartError::Layout(format!(
                "{} panels do not fit a {}x{} grid",
                self.panels.len(),
                self.rows,
                self.cols
            )));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) || self.width_in <= 0.0 || self.height_in <= 0.0 {
            return Err(ChartError::Layout(format!(
                "invalid size {}x{} in at {} dpi",
                self.width_in, self.height_in, self.dpi
            )));
        }
        Ok(())
    }

    fn render_surface(&self) -> Result<skia::Surface> {
        self.validate()?;
        let (w, h) = self.pixel_size();
        let mut surface = raster_surface(w, h)?;
        let canvas = surface.canvas();
        canvas.clear(self.theme.background);

        // lay out in logical units (BASE_DPI per inch), scale to the requested DPI
        let scale = self.dpi / BASE_DPI;
        canvas.save();
        canvas.scale((scale, scale));

        let shaper = self.draw_labels.then(TextShaper::new);
        let ctx = PanelContext { theme: &self.theme, text: shaper.as_ref() };
        let page = RectF::from_ltwh(0.0, 0.0, self.width_in * BASE_DPI, self.height_in * BASE_DPI);

        let title_h = if self.title.is_some() { SUPTITLE_FONT * 2.0 } else { 0.0 };
        if let (Some(title), Some(text)) = (&self.title, ctx.text) {
            let spec = TextSpec::new(SUPTITLE_FONT, self.theme.title).bold();
            text.draw(canvas, title, page.width() * 0.5, OUTER_PAD, &spec, HAlign::Center, VAlign::Top);
        }

        let body = RectF::from_ltrb(
            page.left + OUTER_PAD,
            page.top + OUTER_PAD + title_h,
            page.right - OUTER_PAD,
            page.bottom - OUTER_PAD,
        );
        let cells = body.grid(self.rows, self.cols, PANEL_GAP);
        let insets = Insets::new(92, 16, 40, 64);
        for (panel, cell) in self.panels.iter().zip(cells) {
            match panel {
                Panel::Cartesian(chart) => chart.render_panel(canvas, cell, &insets, &ctx),
                Panel::Pie(pie) => pie.render_panel(canvas, cell, &ctx)?,
            }
        }
        canvas.restore();
        Ok(surface)
    }
}
