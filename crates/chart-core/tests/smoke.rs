// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end renders writing PNGs, plus failure paths.

use chart_core::{
    named_color, Axis, Chart, ChartError, Figure, LegendLoc, PieChart, PieSlice, RenderOptions, Series,
    SeriesType, Style,
};

fn line_chart() -> Chart {
    let mut chart = Chart::new();
    chart.title = "Smoke".into();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.legend = Some(LegendLoc::UpperLeft);
    chart.grid_alpha = Some(0.3);
    chart.add_series(
        Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
            .with_label("data"),
    );
    chart.add_series(Series::hline(3.0, Style::stroke(named_color("red").unwrap(), 2.0).dashed()).with_label("limit"));
    chart
}

fn pie() -> PieChart {
    let slices = [("a", 800.0, "#FF6B6B"), ("b", 400.0, "#4ECDC4"), ("c", 5000.0, "#45B7D1")]
        .iter()
        .map(|(l, v, c)| PieSlice { label: l.to_string(), value: *v, color: named_color(c).unwrap() })
        .collect();
    PieChart::new("Breakdown", slices)
}

#[test]
fn render_smoke_png() {
    let chart = line_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn figure_pixel_size_follows_dpi() {
    let mut fig = Figure::new(1, 2, 6.0, 3.0).with_title("Smoke figure").with_dpi(50.0);
    fig.push(line_chart());
    fig.push(pie());
    assert_eq!(fig.pixel_size(), (300, 150));

    let out = std::path::PathBuf::from("target/test_out/figure_smoke.png");
    fig.save_png(&out).expect("save figure");
    let img = image::open(&out).expect("decode png");
    assert_eq!((img.width(), img.height()), (300, 150));
}

#[test]
fn figure_rejects_overfull_grid() {
    let mut fig = Figure::new(1, 1, 2.0, 2.0);
    fig.push(line_chart());
    fig.push(pie());
    assert!(matches!(fig.render_to_png_bytes(), Err(ChartError::Layout(_))));
}

#[test]
fn figure_propagates_invalid_pie() {
    let mut fig = Figure::new(1, 1, 2.0, 2.0);
    let mut bad = pie();
    bad.slices[0].value = -1.0;
    fig.push(bad);
    assert!(matches!(fig.render_to_png_bytes(), Err(ChartError::InvalidPie(_))));
}

#[test]
fn unwritable_path_is_io_error() {
    let blocker = std::path::PathBuf::from("target/test_out/blocker_file");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"not a directory").unwrap();

    let mut fig = Figure::new(1, 1, 1.0, 1.0);
    fig.draw_labels = false;
    fig.push(line_chart());
    let err = fig.save_png(blocker.join("out.png")).unwrap_err();
    assert!(matches!(err, ChartError::Io { .. }), "got {err}");
}
