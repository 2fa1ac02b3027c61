// File: crates/chart-core/src/chart.rs
// Summary: Cartesian chart panel and headless rendering using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::Result;
use crate::geometry::RectF;
use crate::grid::{format_thousands, nice_ticks};
use crate::render::{encode_png, raster_surface, read_rgba8, write_file};
use crate::scale::LinearScale;
use crate::series::{LineDash, Series, SeriesType, Style};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::{Insets, RenderOptions};
use crate::view::DataBounds;
use crate::Axis;

pub(crate) const TICK_FONT: f32 = 13.0;
pub(crate) const LABEL_FONT: f32 = 14.0;
pub(crate) const TITLE_FONT: f32 = 17.0;
const LEGEND_FONT: f32 = 12.5;
const TITLE_LINE: f32 = 22.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLoc {
    UpperLeft,
    UpperRight,
}

/// Everything a panel needs to paint besides its own data.
pub(crate) struct PanelContext<'a> {
    pub theme: &'a Theme,
    /// `None` when labels are disabled; every text draw is skipped.
    pub text: Option<&'a TextShaper>,
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<LegendLoc>,
    /// Grid line opacity; `None` hides the grid.
    pub grid_alpha: Option<f32>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
            grid_alpha: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the finite data, padded by `margin` (fraction of span).
    /// A categorical x axis keeps its slot layout.
    pub fn autoscale_axes(&mut self, margin: f64) {
        if let Some(b) = DataBounds::from_chart(self).map(|b| b.with_margin(margin)) {
            if !self.x_axis.is_categorical() {
                self.x_axis.min = b.x_min;
                self.x_axis.max = b.x_max;
            }
            self.y_axis.min = b.y_min;
            self.y_axis.max = b.y_max;
        }
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        encode_png(&mut surface)
    }

    /// Render to an RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        read_rgba8(&mut surface)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_file(output_png_path.as_ref(), &bytes)
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = raster_surface(opts.width, opts.height)?;
        let canvas = surface.canvas();
        canvas.clear(opts.background);

        let theme = Theme { background: opts.background, ..Theme::light() };
        let shaper = opts.draw_labels.then(TextShaper::new);
        let ctx = PanelContext { theme: &theme, text: shaper.as_ref() };
        let cell = RectF::from_ltwh(0.0, 0.0, opts.width as f32, opts.height as f32);
        self.render_panel(canvas, cell, &opts.insets, &ctx);
        Ok(surface)
    }

    /// Insets grown at the top to fit a (possibly multi-line) title.
    pub(crate) fn panel_insets(&self, base: &Insets) -> Insets {
        let lines = self.title.lines().count() as u32;
        Insets { top: base.top.max(14 + lines * TITLE_LINE as u32), ..*base }
    }

    pub(crate) fn render_panel(&self, canvas: &skia::Canvas, cell: RectF, base: &Insets, ctx: &PanelContext) {
        let plot = cell.inset(&self.panel_insets(base));
        let xs = LinearScale::new(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let ys = LinearScale::new(plot.bottom, plot.top, self.y_axis.min, self.y_axis.max);

        let mut bg = skia::Paint::default();
        bg.set_color(ctx.theme.background);
        canvas.draw_rect(plot.to_skia(), &bg);

        let x_ticks = self.x_ticks();
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, 6);
        if let Some(alpha) = self.grid_alpha {
            draw_grid(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, ctx.theme.grid, alpha);
        }

        // fills under strokes, each pass in insertion order
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in self.series.iter().filter(|s| matches!(s.series_type, SeriesType::Band | SeriesType::Bar)) {
            match s.series_type {
                SeriesType::Band => draw_band(canvas, &xs, &ys, s),
                _ => draw_bars(canvas, &xs, &ys, s),
            }
        }
        for s in self.series.iter().filter(|s| matches!(s.series_type, SeriesType::Line | SeriesType::HLine)) {
            match s.series_type {
                SeriesType::Line => draw_line(canvas, &xs, &ys, s),
                _ => draw_hline(canvas, &plot, &ys, s),
            }
        }
        canvas.restore();

        draw_frame(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, ctx.theme);

        let Some(text) = ctx.text else { return };
        self.draw_tick_labels(canvas, text, &plot, &xs, &ys, &x_ticks, &y_ticks, ctx.theme);
        for s in self.series.iter().filter(|s| s.series_type == SeriesType::Bar) {
            draw_bar_labels(canvas, text, &xs, &ys, s, ctx.theme);
        }
        self.draw_titles(canvas, text, &plot, ctx.theme);
        if let Some(loc) = self.legend {
            draw_legend(canvas, text, &plot, &self.series, loc, ctx.theme);
        }
    }

    fn x_ticks(&self) -> Vec<f64> {
        if self.x_axis.is_categorical() {
            (0..self.x_axis.categories.len()).map(|i| i as f64).collect()
        } else {
            nice_ticks(self.x_axis.min, self.x_axis.max, 6)
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tick_labels(
        &self,
        canvas: &skia::Canvas,
        text: &TextShaper,
        plot: &RectF,
        xs: &LinearScale,
        ys: &LinearScale,
        x_ticks: &[f64],
        y_ticks: &[f64],
        theme: &Theme,
    ) {
        let spec = TextSpec::new(TICK_FONT, theme.tick);
        for (i, &x) in x_ticks.iter().enumerate() {
            let label = match self.x_axis.categories.get(i) {
                Some(c) if self.x_axis.is_categorical() => c.clone(),
                _ => format_thousands(x),
            };
            text.draw(canvas, &label, xs.to_px(x), plot.bottom + 7.0, &spec, HAlign::Center, VAlign::Top);
        }
        for &y in y_ticks {
            text.draw(canvas, &format_thousands(y), plot.left - 7.0, ys.to_px(y), &spec, HAlign::Right, VAlign::Middle);
        }
    }

    fn draw_titles(&self, canvas: &skia::Canvas, text: &TextShaper, plot: &RectF, theme: &Theme) {
        let (cx, _) = plot.center();
        if !self.title.is_empty() {
            let spec = TextSpec::new(TITLE_FONT, theme.title);
            text.draw(canvas, &self.title, cx, plot.top - 8.0, &spec, HAlign::Center, VAlign::Bottom);
        }
        let spec = TextSpec::new(LABEL_FONT, theme.axis_label);
        if !self.x_axis.label.is_empty() {
            text.draw(canvas, &self.x_axis.label, cx, plot.bottom + 28.0, &spec, HAlign::Center, VAlign::Top);
        }
        if !self.y_axis.label.is_empty() {
            let (_, cy) = plot.center();
            text.draw_rotated(canvas, &self.y_axis.label, plot.left - 74.0, cy, &spec, -90.0);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn style_paint(style: &Style, fill: bool) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(style.color);
    paint.set_alpha_f(style.alpha);
    if fill {
        paint.set_style(skia::paint::Style::Fill);
    } else {
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width);
        if style.dash == LineDash::Dashed {
            let on = 3.7 * style.width.max(1.0);
            let off = 1.6 * style.width.max(1.0);
            paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
        }
    }
    paint
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectF,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    color: skia::Color,
    alpha: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_alpha_f(alpha);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    for &x in x_ticks {
        let px = xs.to_px(x);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    for &y in y_ticks {
        let py = ys.to_px(y);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    plot: &RectF,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(plot.to_skia(), &axis_paint);

    for &x in x_ticks {
        let px = xs.to_px(x);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + 4.0), &axis_paint);
    }
    for &y in y_ticks {
        let py = ys.to_px(y);
        canvas.draw_line((plot.left - 4.0, py), (plot.left, py), &axis_paint);
    }
}

fn draw_line(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() {
            // off-scale point: break the path
            pen_down = false;
            continue;
        }
        let p = (xs.to_px(x), ys.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    canvas.draw_path(&path, &style_paint(&series.style, false));
}

fn draw_hline(canvas: &skia::Canvas, plot: &RectF, ys: &LinearScale, series: &Series) {
    if !series.level.is_finite() {
        return;
    }
    let py = ys.to_px(series.level);
    canvas.draw_line((plot.left, py), (plot.right, py), &style_paint(&series.style, false));
}

fn draw_band(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series) {
    let pts = &series.data_xy;
    if pts.len() < 2 || pts.len() != series.upper.len() {
        return;
    }
    let mut path = skia::Path::new();
    path.move_to((xs.to_px(pts[0].0), ys.to_px(series.upper[0])));
    for (i, &(x, _)) in pts.iter().enumerate().skip(1) {
        path.line_to((xs.to_px(x), ys.to_px(series.upper[i])));
    }
    for &(x, lower) in pts.iter().rev() {
        path.line_to((xs.to_px(x), ys.to_px(lower)));
    }
    path.close();
    canvas.draw_path(&path, &style_paint(&series.style, true));
}

fn draw_bars(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series) {
    let half = series.bar_width * 0.5;
    let mut paint = style_paint(&series.style, true);
    for (i, &(x, v)) in series.data_xy.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        paint.set_color(series.bar_color(i));
        paint.set_alpha_f(series.style.alpha);
        let (top, bottom) = (ys.to_px(v.max(0.0)), ys.to_px(v.min(0.0)));
        let rect = skia::Rect::from_ltrb(xs.to_px(x - half), top, xs.to_px(x + half), bottom);
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_bar_labels(canvas: &skia::Canvas, text: &TextShaper, xs: &LinearScale, ys: &LinearScale, series: &Series, theme: &Theme) {
    let Some(labels) = &series.bar_labels else { return };
    let mut spec = TextSpec::new(labels.size, theme.annotation);
    spec.bold = labels.bold;
    for (&(x, v), label) in series.data_xy.iter().zip(&labels.texts) {
        text.draw(canvas, label, xs.to_px(x), ys.to_px(v + labels.offset), &spec, HAlign::Center, VAlign::Bottom);
    }
}

fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, plot: &RectF, series: &[Series], loc: LegendLoc, theme: &Theme) {
    let entries: Vec<(&Series, &str)> = series
        .iter()
        .filter_map(|s| s.label.as_deref().map(|l| (s, l)))
        .collect();
    if entries.is_empty() {
        return;
    }
    let spec = TextSpec::new(LEGEND_FONT, theme.axis_label);
    let text_w = entries
        .iter()
        .map(|(_, l)| text.measure(l, &spec).0)
        .fold(0.0f32, f32::max);
    let (pad, swatch, row) = (6.0, 24.0, 18.0);
    let w = pad + swatch + pad + text_w + pad;
    let h = pad * 2.0 + row * entries.len() as f32;
    let left = match loc {
        LegendLoc::UpperLeft => plot.left + 8.0,
        LegendLoc::UpperRight => plot.right - 8.0 - w,
    };
    let frame = RectF::from_ltwh(left, plot.top + 8.0, w, h);

    let mut fill = skia::Paint::default();
    fill.set_color(theme.legend_fill);
    canvas.draw_rect(frame.to_skia(), &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(theme.legend_frame);
    canvas.draw_rect(frame.to_skia(), &border);

    for (i, (s, label)) in entries.iter().enumerate() {
        let cy = frame.top + pad + row * (i as f32 + 0.5);
        let sx = frame.left + pad;
        match s.series_type {
            SeriesType::Line | SeriesType::HLine => {
                canvas.draw_line((sx, cy), (sx + swatch, cy), &style_paint(&s.style, false));
            }
            SeriesType::Band | SeriesType::Bar => {
                let r = skia::Rect::from_ltrb(sx, cy - 6.0, sx + swatch, cy + 6.0);
                canvas.draw_rect(r, &style_paint(&s.style, true));
            }
        }
        text.draw(canvas, label, sx + swatch + pad, cy, &spec, HAlign::Left, VAlign::Middle);
    }
}
