// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart/figure construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod pie;
pub mod figure;
pub mod error;
mod render;

pub use chart::{Chart, LegendLoc};
pub use series::{LineDash, Series, SeriesType, Style};
pub use axis::Axis;
pub use view::DataBounds;
pub use theme::{named_color, Theme};
pub use text::TextShaper;
pub use pie::{PieChart, PieSlice};
pub use figure::{Figure, Panel};
pub use error::{ChartError, Result};
pub use types::{Insets, RenderOptions};
pub use grid::format_thousands;
