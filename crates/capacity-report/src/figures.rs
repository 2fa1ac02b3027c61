// File: crates/capacity-report/src/figures.rs
// Summary: Builds and writes the two analysis figures.

use std::path::PathBuf;

use chart_core::{
    format_thousands, named_color, Axis, Chart, Figure, LegendLoc, PieChart, PieSlice, Series, Style,
};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::model::ReportSeries;
use crate::scenarios::{LOAD_SCENARIOS, OPERATION_BREAKDOWN, OPTIMIZATION_SCENARIOS};

pub const FIGURE_ONE_FILE: &str = "backend_scalability_analysis.png";
pub const FIGURE_TWO_FILE: &str = "optimization_analysis.png";

const LINE_WIDTH: f32 = 2.0;
const ZONE_ALPHA: f32 = 0.2;
const BAR_ALPHA: f32 = 0.7;
const GRID_ALPHA: f32 = 0.3;
const AXIS_MARGIN: f64 = 0.05;
/// Extra top margin so multi-line bar annotations stay inside the plot.
const BAR_HEADROOM: f64 = 0.12;
/// Graph 3 shows costs up to this many dollars.
const COST_AXIS_MAX: f64 = 10.0;

fn limit_line(limit: f64, label: &str) -> Result<Series> {
    let style = Style::stroke(named_color("red")?, LINE_WIDTH).dashed();
    Ok(Series::hline(limit, style).with_label(label))
}

/// Line of operations against the free-tier limit, shaded safe below and danger above.
fn threshold_panel(title: &str, x_label: &str, xs: &[f64], ys: &[f64], color: &str, limit: f64) -> Result<Chart> {
    let peak = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut chart = Chart::new();
    chart.title = title.into();
    chart.add_series(Series::line(xs, ys, Style::stroke(named_color(color)?, LINE_WIDTH))?.with_label("Total Operations"));
    chart.add_series(limit_line(limit, "Spark Plan Limit")?);
    chart.add_series(Series::band_between(xs, 0.0, limit, Style::fill(named_color("green")?, ZONE_ALPHA)).with_label("Safe Zone"));
    chart.add_series(Series::band_between(xs, limit, peak, Style::fill(named_color("red")?, ZONE_ALPHA)).with_label("Danger Zone"));
    chart.autoscale_axes(AXIS_MARGIN);
    chart.x_axis.label = x_label.into();
    chart.y_axis.label = "Daily Operations".into();
    chart.legend = Some(LegendLoc::UpperLeft);
    chart.grid_alpha = Some(GRID_ALPHA);
    Ok(chart)
}

fn cost_panel(series: &ReportSeries) -> Result<Chart> {
    let spark: Vec<f64> = series.costs.spark.iter().map(|c| c.as_plot_value()).collect();
    let xs = &series.operations_range;

    let mut chart = Chart::new();
    chart.title = "Firebase Plan Costs".into();
    chart.add_series(Series::line(xs, &spark, Style::stroke(named_color("red")?, LINE_WIDTH))?.with_label("Spark Plan ($0)"));
    chart.add_series(
        Series::line(xs, &series.costs.blaze, Style::stroke(named_color("blue")?, LINE_WIDTH))?
            .with_label("Blaze Plan (Pay-as-you-go)"),
    );
    chart.autoscale_axes(AXIS_MARGIN);
    chart.x_axis.label = "Daily Operations".into();
    chart.y_axis = Axis::new("Monthly Cost ($)", 0.0, COST_AXIS_MAX);
    chart.legend = Some(LegendLoc::UpperLeft);
    chart.grid_alpha = Some(GRID_ALPHA);
    Ok(chart)
}

fn load_panel(limit: f64) -> Result<Chart> {
    let values: Vec<f64> = LOAD_SCENARIOS.iter().map(|s| s.operations).collect();
    let colors = LOAD_SCENARIOS
        .iter()
        .map(|s| named_color(s.status.color()))
        .collect::<chart_core::Result<Vec<_>>>()?;
    let labels = LOAD_SCENARIOS
        .iter()
        .map(|s| format!("{}\n{}", format_thousands(s.operations), s.status.as_str()))
        .collect();

    let mut chart = Chart::new();
    chart.title = "Load Scenarios vs Spark Plan Limit".into();
    chart.x_axis = Axis::categorical("Scenario (Buses + Users)", LOAD_SCENARIOS.iter().map(|s| s.label));
    chart.add_series(
        Series::bars(&values, &colors, Style::fill(colors[0], BAR_ALPHA))?.with_bar_labels(labels, 1_000.0, false, 11.0)?,
    );
    chart.add_series(limit_line(limit, "Spark Limit")?);
    chart.autoscale_axes(BAR_HEADROOM);
    chart.y_axis.label = "Daily Operations".into();
    chart.legend = Some(LegendLoc::UpperLeft);
    chart.grid_alpha = Some(GRID_ALPHA);
    Ok(chart)
}

fn breakdown_panel() -> Result<PieChart> {
    let slices = OPERATION_BREAKDOWN
        .iter()
        .map(|s| -> Result<PieSlice> {
            Ok(PieSlice { label: s.label.into(), value: s.operations, color: named_color(s.color)? })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PieChart::new("Daily Operations Breakdown\n(1 Bus + 1000 Users)", slices))
}

fn optimization_panel(limit: f64) -> Result<Chart> {
    let values: Vec<f64> = OPTIMIZATION_SCENARIOS.iter().map(|s| s.operations).collect();
    let colors = OPTIMIZATION_SCENARIOS
        .iter()
        .map(|s| named_color(s.color))
        .collect::<chart_core::Result<Vec<_>>>()?;
    let labels = values.iter().map(|v| format_thousands(*v)).collect();

    let mut chart = Chart::new();
    chart.title = "Optimization Impact\n(1 Bus + 1000 Users)".into();
    chart.x_axis = Axis::categorical("", OPTIMIZATION_SCENARIOS.iter().map(|s| s.label));
    chart.add_series(
        Series::bars(&values, &colors, Style::fill(colors[0], BAR_ALPHA))?.with_bar_labels(labels, 2_000.0, true, 14.0)?,
    );
    chart.add_series(limit_line(limit, "Spark Limit")?);
    chart.autoscale_axes(BAR_HEADROOM);
    chart.y_axis.label = "Daily Operations".into();
    // tallest bar is on the left
    chart.legend = Some(LegendLoc::UpperRight);
    chart.grid_alpha = Some(GRID_ALPHA);
    Ok(chart)
}

/// 2x2 figure: users and buses against the limit, plan costs, load scenarios.
pub fn build_figure_one(config: &ReportConfig, series: &ReportSeries) -> Result<Figure> {
    let limit = config.spark_limit;
    let mut fig = Figure::new(2, 2, 15.0, 12.0)
        .with_title("Bus Tracking Backend Scalability Analysis")
        .with_dpi(config.dpi);
    fig.draw_labels = config.draw_labels;
    fig.push(threshold_panel(
        "Single Bus: Users vs Operations",
        "Number of Users",
        &series.users,
        &series.single_bus,
        "blue",
        limit,
    )?);
    fig.push(threshold_panel(
        &format!("Multiple Buses: {} Users Each", config.users_per_bus),
        "Number of Buses",
        &series.buses,
        &series.multi_bus,
        "green",
        limit,
    )?);
    fig.push(cost_panel(series)?);
    fig.push(load_panel(limit)?);
    Ok(fig)
}

/// 1x2 figure: operation breakdown pie and optimization impact bars.
pub fn build_figure_two(config: &ReportConfig) -> Result<Figure> {
    let mut fig = Figure::new(1, 2, 15.0, 6.0)
        .with_title("Operation Breakdown and Optimization Impact")
        .with_dpi(config.dpi);
    fig.draw_labels = config.draw_labels;
    fig.push(breakdown_panel()?);
    fig.push(optimization_panel(config.spark_limit)?);
    Ok(fig)
}

pub fn render_figure_one(config: &ReportConfig, series: &ReportSeries) -> Result<PathBuf> {
    let path = config.output_dir.join(FIGURE_ONE_FILE);
    build_figure_one(config, series)?.save_png(&path)?;
    Ok(path)
}

pub fn render_figure_two(config: &ReportConfig) -> Result<PathBuf> {
    let path = config.output_dir.join(FIGURE_TWO_FILE);
    build_figure_two(config)?.save_png(&path)?;
    Ok(path)
}
