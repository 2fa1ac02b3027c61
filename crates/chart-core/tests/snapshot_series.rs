// File: crates/chart-core/tests/snapshot_series.rs
// Purpose: Golden snapshots for line/band/threshold panels, annotated bars, and pie figures.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, records the snapshot so later runs compare against it.
// Every test also checks a few pixels directly, so a fresh snapshot is never the only assertion.

use chart_core::{named_color, Axis, Chart, Figure, PieChart, PieSlice, Series, Style};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    let update = bless_mode();
    if update {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("record snapshot");
        eprintln!("[snapshot] Recorded {} ({} bytes)", path.display(), bytes.len());
    }
}

// 4x3 in at 100 dpi is 400x300; the single panel's plot area spans x 104..372, y 52..224.
fn pixel(bytes: &[u8], x: u32, y: u32) -> [u8; 4] {
    let img = image::load_from_memory(bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (400, 300));
    img.get_pixel(x, y).0
}

fn render_to_bytes(panel: impl Into<chart_core::Panel>) -> Vec<u8> {
    let mut fig = Figure::new(1, 1, 4.0, 3.0);
    fig.draw_labels = false; // deterministic
    fig.push(panel);
    fig.render_to_png_bytes().expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_threshold_bands() {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let ys = [1.0, 2.0, 4.0, 6.0, 8.0];
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 8.4);
    chart.grid_alpha = Some(0.3);
    chart.add_series(Series::line(&xs, &ys, Style::stroke(named_color("blue").unwrap(), 2.0)).unwrap());
    chart.add_series(Series::hline(5.0, Style::stroke(named_color("red").unwrap(), 2.0).dashed()));
    chart.add_series(Series::band_between(&xs, 0.0, 5.0, Style::fill(named_color("green").unwrap(), 0.2)));
    chart.add_series(Series::band_between(&xs, 5.0, 8.0, Style::fill(named_color("red").unwrap(), 0.2)));
    let bytes = render_to_bytes(chart);

    // green safe zone at y = 2.5
    let [r, g, _, _] = pixel(&bytes, 350, 173);
    assert!(r > 180 && g > r + 15, "safe zone {:?}", [r, g]);
    // red danger zone at y = 6.5
    let [r, g, _, _] = pixel(&bytes, 130, 91);
    assert!(r > g + 30, "danger zone {:?}", [r, g]);
    // blue line through (0.5, 1.5), drawn over the band
    let [r, _, b, _] = pixel(&bytes, 137, 193);
    assert!(b > 200 && r < 100, "line {:?}", [r, b]);

    write_or_compare(&snapshot_path("threshold_bands.png"), &bytes);
}

#[test]
fn golden_bars() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("", ["a", "b", "c"]);
    chart.y_axis = Axis::new("", 0.0, 12.0);
    let colors = ["green", "orange", "red"].map(|c| named_color(c).unwrap());
    chart.add_series(Series::bars(&[3.0, 6.0, 10.0], &colors, Style::fill(colors[0], 0.7)).unwrap());
    let bytes = render_to_bytes(chart);

    // 70% red bar at index 2, 70% green bar at index 0, background between bars
    let [r, g, b, _] = pixel(&bytes, 321, 150);
    assert!(r > 240 && g < 100 && b < 100, "red bar {:?}", [r, g, b]);
    let [r, g, _, _] = pixel(&bytes, 154, 210);
    assert!(g > 150 && r < 100, "green bar {:?}", [r, g]);
    assert_eq!(pixel(&bytes, 196, 150), [255, 255, 255, 255]);

    write_or_compare(&snapshot_path("bars.png"), &bytes);
}

#[test]
fn golden_pie() {
    let slices = [(800.0, "#FF6B6B"), (400.0, "#4ECDC4"), (50000.0, "#45B7D1"), (200.0, "#96CEB4"), (144.0, "#FFEAA7")]
        .iter()
        .enumerate()
        .map(|(i, (v, c))| PieSlice { label: format!("s{i}"), value: *v, color: named_color(c).unwrap() })
        .collect();
    let bytes = render_to_bytes(PieChart::new("", slices));

    // the 97% slice covers the bottom of the pie; the corner stays background
    let [r, g, b, _] = pixel(&bytes, 200, 210);
    assert!((r as i32 - 0x45).abs() <= 3 && (g as i32 - 0xb7).abs() <= 3 && (b as i32 - 0xd1).abs() <= 3, "{:?}", [r, g, b]);
    assert_eq!(pixel(&bytes, 20, 150), [255, 255, 255, 255]);

    write_or_compare(&snapshot_path("pie.png"), &bytes);
}
