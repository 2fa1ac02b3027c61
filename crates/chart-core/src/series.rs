// File: crates/chart-core/src/series.rs
// Summary: Series model for line, threshold, band, and categorical bar data.
// Notes:
// - Constructors validate parallel array lengths and return `ChartError::LengthMismatch`.
// - Non-finite y values in a line are gaps: the path breaks there and nothing is drawn.

use skia_safe as skia;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    HLine,    // horizontal reference line spanning the x axis
    Band,     // filled region between a lower and an upper curve
    Bar,      // categorical bars from 0, one per x index
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub color: skia::Color,
    pub width: f32,
    pub dash: LineDash,
    /// Opacity applied on top of `color` (0.0..=1.0).
    pub alpha: f32,
}

impl Style {
    pub fn stroke(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: LineDash::Solid, alpha: 1.0 }
    }
    pub fn fill(color: skia::Color, alpha: f32) -> Self {
        Self { color, width: 0.0, dash: LineDash::Solid, alpha }
    }
    pub fn dashed(mut self) -> Self {
        self.dash = LineDash::Dashed;
        self
    }
}

/// Text drawn above each bar, `offset` value units above its top.
#[derive(Clone, Debug)]
pub struct BarLabels {
    pub texts: Vec<String>,
    pub offset: f64,
    pub bold: bool,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub label: Option<String>,
    pub style: Style,
    pub data_xy: Vec<(f64, f64)>,      // Line: points; Band: (x, lower); Bar: (index, value)
    pub upper: Vec<f64>,               // Band: upper curve, parallel to data_xy
    pub level: f64,                    // HLine: y value
    pub bar_colors: Vec<skia::Color>,  // Bar: per-bar colors, empty = style.color
    pub bar_width: f64,
    pub bar_labels: Option<BarLabels>,
}

impl Series {
    fn empty(series_type: SeriesType, style: Style) -> Self {
        Self {
            series_type,
            label: None,
            style,
            data_xy: Vec::new(),
            upper: Vec::new(),
            level: 0.0,
            bar_colors: Vec::new(),
            bar_width: 0.8,
            bar_labels: None,
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        let mut s = Self::empty(series_type, Style::stroke(skia::Color::BLUE, 2.0));
        s.data_xy = data;
        s
    }

    /// Polyline through `(xs[i], ys[i])`.
    pub fn line(xs: &[f64], ys: &[f64], style: Style) -> Result<Self> {
        check_len("line", xs.len(), ys.len())?;
        let mut s = Self::empty(SeriesType::Line, style);
        s.data_xy = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(s)
    }

    pub fn hline(y: f64, style: Style) -> Self {
        let mut s = Self::empty(SeriesType::HLine, style);
        s.level = y;
        s
    }

    /// Band with constant bounds across `xs`.
    pub fn band_between(xs: &[f64], lower: f64, upper: f64, style: Style) -> Self {
        let mut s = Self::empty(SeriesType::Band, style);
        s.data_xy = xs.iter().map(|&x| (x, lower)).collect();
        s.upper = vec![upper; xs.len()];
        s
    }

    /// One bar per value at x = index. `colors` is either empty or one color per bar.
    pub fn bars(values: &[f64], colors: &[skia::Color], style: Style) -> Result<Self> {
        if !colors.is_empty() {
            check_len("bar colors", values.len(), colors.len())?;
        }
        let mut s = Self::empty(SeriesType::Bar, style);
        s.data_xy = values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        s.bar_colors = colors.to_vec();
        Ok(s)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_bar_labels(mut self, texts: Vec<String>, offset: f64, bold: bool, size: f32) -> Result<Self> {
        check_len("bar labels", self.data_xy.len(), texts.len())?;
        self.bar_labels = Some(BarLabels { texts, offset, bold, size });
        Ok(self)
    }

    pub fn bar_color(&self, i: usize) -> skia::Color {
        self.bar_colors.get(i).copied().unwrap_or(self.style.color)
    }

    /// Largest finite y reached by the series (band upper included).
    pub fn finite_max_y(&self) -> Option<f64> {
        let max = match self.series_type {
            SeriesType::HLine => self.level,
            _ => self
                .data_xy
                .iter()
                .map(|p| p.1)
                .chain(self.upper.iter().copied())
                .filter(|v| v.is_finite())
                .fold(f64::NEG_INFINITY, f64::max),
        };
        max.is_finite().then_some(max)
    }
}

fn check_len(series: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(ChartError::LengthMismatch { series: series.to_string(), expected, actual });
    }
    Ok(())
}
