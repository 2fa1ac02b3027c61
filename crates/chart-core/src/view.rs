// File: crates/chart-core/src/view.rs
// Data extents across a chart's series, used to autoscale axes.

use crate::chart::Chart;
use crate::series::SeriesType;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Extents over every finite value; `None` when the chart holds no finite data.
    pub fn from_chart(chart: &Chart) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            match s.series_type {
                SeriesType::Line | SeriesType::Band => {
                    for (i, &(x, y)) in s.data_xy.iter().enumerate() {
                        if x.is_finite() {
                            x_min = x_min.min(x);
                            x_max = x_max.max(x);
                        }
                        add_y(y, &mut y_min, &mut y_max);
                        if let Some(&u) = s.upper.get(i) {
                            add_y(u, &mut y_min, &mut y_max);
                        }
                    }
                }
                SeriesType::HLine => add_y(s.level, &mut y_min, &mut y_max),
                SeriesType::Bar => {
                    let half = s.bar_width * 0.5;
                    let offset = s.bar_labels.as_ref().map_or(0.0, |l| l.offset);
                    for &(x, v) in &s.data_xy {
                        x_min = x_min.min(x - half);
                        x_max = x_max.max(x + half);
                        add_y(0.0, &mut y_min, &mut y_max);
                        add_y(v, &mut y_min, &mut y_max);
                        add_y(v + offset, &mut y_min, &mut y_max);
                    }
                }
            }
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            x_min = chart.x_axis.min;
            x_max = chart.x_axis.max;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    /// Pad each side by `frac` of the span. A non-negative y range keeps a zero floor.
    pub fn with_margin(&self, frac: f64) -> Self {
        let xm = (self.x_max - self.x_min) * frac;
        let ym = (self.y_max - self.y_min) * frac;
        let y_min = if self.y_min >= 0.0 { (self.y_min - ym).max(0.0) } else { self.y_min - ym };
        Self { x_min: self.x_min - xm, x_max: self.x_max + xm, y_min, y_max: self.y_max + ym }
    }
}

fn add_y(y: f64, y_min: &mut f64, y_max: &mut f64) {
    if y.is_finite() {
        *y_min = y_min.min(y);
        *y_max = y_max.max(y);
    }
}
