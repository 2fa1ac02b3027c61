// File: crates/chart-core/src/pie.rs
// Summary: Pie chart panel with outside labels and percentage autolabels.

use skia_safe as skia;

use crate::chart::{PanelContext, TICK_FONT, TITLE_FONT};
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::text::{HAlign, TextSpec, VAlign};

#[derive(Clone, Debug)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: skia::Color,
}

#[derive(Clone, Debug)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    /// Angle of the first wedge's leading edge, degrees counter-clockwise from 3 o'clock.
    pub start_angle: f32,
    pub counterclock: bool,
    /// Decimals in the percentage autolabels (`1` gives `"12.3%"`).
    pub pct_decimals: usize,
    /// Label radius as a fraction of the pie radius.
    pub label_distance: f32,
    pub pct_distance: f32,
}

impl PieChart {
    pub fn new(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            title: title.into(),
            slices,
            start_angle: 90.0,
            counterclock: true,
            pct_decimals: 1,
            label_distance: 1.1,
            pct_distance: 0.6,
        }
    }

    /// Share of each slice in percent. Fails on negative/non-finite values or a zero total.
    pub fn percentages(&self) -> Result<Vec<f64>> {
        if self.slices.is_empty() {
            return Err(ChartError::InvalidPie("no slices".into()));
        }
        if let Some(s) = self.slices.iter().find(|s| !s.value.is_finite() || s.value < 0.0) {
            return Err(ChartError::InvalidPie(format!("slice '{}' has value {}", s.label, s.value)));
        }
        let total: f64 = self.slices.iter().map(|s| s.value).sum();
        if total <= 0.0 {
            return Err(ChartError::InvalidPie("values sum to zero".into()));
        }
        Ok(self.slices.iter().map(|s| s.value / total * 100.0).collect())
    }

    pub fn format_pct(&self, pct: f64) -> String {
        format!("{:.*}%", self.pct_decimals, pct)
    }

    pub(crate) fn render_panel(&self, canvas: &skia::Canvas, cell: RectF, ctx: &PanelContext) -> Result<()> {
        let pcts = self.percentages()?;
        let title_h = if self.title.is_empty() { 0.0 } else { 14.0 + 22.0 * self.title.lines().count() as f32 };
        let area = RectF::from_ltrb(cell.left, cell.top + title_h, cell.right, cell.bottom);
        let (cx, cy) = area.center();
        // leave room for labels at label_distance
        let radius = (area.width().min(area.height()) * 0.5 / (self.label_distance + 0.25)).max(1.0);
        let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

        // Skia angles run clockwise from 3 o'clock; visual counter-clockwise is a negative sweep.
        let dir = if self.counterclock { -1.0f32 } else { 1.0 };
        let mut angle = -self.start_angle;
        let mut mids = Vec::with_capacity(pcts.len());
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        for (slice, pct) in self.slices.iter().zip(&pcts) {
            let sweep = dir * (*pct as f32) * 3.6;
            paint.set_color(slice.color);
            canvas.draw_arc(oval, angle, sweep, true, &paint);
            mids.push(angle + sweep * 0.5);
            angle += sweep;
        }

        let Some(text) = ctx.text else { return Ok(()) };
        let label_spec = TextSpec::new(TICK_FONT, ctx.theme.axis_label);
        let pct_spec = TextSpec::new(TICK_FONT, ctx.theme.annotation);
        for ((slice, pct), mid) in self.slices.iter().zip(&pcts).zip(&mids) {
            let (dx, dy) = (mid.to_radians().cos(), mid.to_radians().sin());
            let lx = cx + dx * radius * self.label_distance;
            let ly = cy + dy * radius * self.label_distance;
            let h = if dx > 0.05 { HAlign::Left } else if dx < -0.05 { HAlign::Right } else { HAlign::Center };
            text.draw(canvas, &slice.label, lx, ly, &label_spec, h, VAlign::Middle);

            let px = cx + dx * radius * self.pct_distance;
            let py = cy + dy * radius * self.pct_distance;
            text.draw(canvas, &self.format_pct(*pct), px, py, &pct_spec, HAlign::Center, VAlign::Middle);
        }
        if !self.title.is_empty() {
            let spec = TextSpec::new(TITLE_FONT, ctx.theme.title);
            text.draw(canvas, &self.title, cx, area.top - 8.0, &spec, HAlign::Center, VAlign::Bottom);
        }
        Ok(())
    }
}
