// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{named_color, Axis, Chart, RenderOptions, Series, Style};

fn opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = 200;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    opts
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("", ["only"]);
    chart.y_axis = Axis::new("", 0.0, 10.0);
    chart.add_series(Series::bars(&[10.0], &[], Style::fill(named_color("red").unwrap(), 1.0)).unwrap());

    let (px, w, h, stride) = chart.render_to_rgba8(&opts()).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // background outside the plot
    assert_eq!(pixel(&px, stride, 2, 2), [255, 255, 255, 255]);

    // plot spans x 84..176, y 40..140; the full-height bar covers its middle
    let [r, g, b, a] = pixel(&px, stride, 130, 90);
    assert!(r > 200 && g < 50 && b < 50 && a == 255, "got {:?}", [r, g, b, a]);
}

#[test]
fn band_is_translucent_over_background() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("", 0.0, 1.0);
    chart.y_axis = Axis::new("", 0.0, 10.0);
    chart.add_series(Series::band_between(&[0.0, 1.0], 0.0, 10.0, Style::fill(named_color("green").unwrap(), 0.2)));

    let (px, _, _, stride) = chart.render_to_rgba8(&opts()).expect("rgba render");
    let [r, g, b, _] = pixel(&px, stride, 130, 90);
    // 20% green (0,128,0) over white
    assert!((r as i32 - 204).abs() <= 3, "r = {r}");
    assert!((b as i32 - 204).abs() <= 3, "b = {b}");
    assert!(g > r);
}

fn is_red(p: [u8; 4]) -> bool {
    p[0] > 180 && p[1] < 120 && p[2] < 120
}

#[test]
fn infinite_point_is_not_drawn() {
    // plot spans x 84..176 (0..2), y 40..140 (0..10); points at x 84, 130, 176
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("", 0.0, 2.0);
    chart.y_axis = Axis::new("", 0.0, 10.0);
    let red = named_color("red").unwrap();
    chart.add_series(Series::line(&[0.0, 1.0, 2.0], &[5.0, 5.0, f64::INFINITY], Style::stroke(red, 2.0)).unwrap());

    let (px, _, _, stride) = chart.render_to_rgba8(&opts()).expect("rgba render");

    // finite segment at y = 5 is stroked
    assert!(is_red(pixel(&px, stride, 107, 90)), "got {:?}", pixel(&px, stride, 107, 90));

    // nothing to the right of the last finite point, at any height inside the plot
    for y in 42..139 {
        for x in 133..175 {
            let p = pixel(&px, stride, x, y);
            assert!(!is_red(p), "stroke at ({x}, {y}): {p:?}");
        }
    }
    // and nothing climbing towards the top edge above the finite segment
    for x in 86..128 {
        assert!(!is_red(pixel(&px, stride, x, 42)), "stroke at ({x}, 42)");
    }
}

#[test]
fn line_resumes_after_gap() {
    // x 0..4 over 84..176: points at 84, 107, 130, 153, 176
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("", 0.0, 4.0);
    chart.y_axis = Axis::new("", 0.0, 10.0);
    let red = named_color("red").unwrap();
    let ys = [5.0, 5.0, f64::INFINITY, 5.0, 5.0];
    chart.add_series(Series::line(&[0.0, 1.0, 2.0, 3.0, 4.0], &ys, Style::stroke(red, 2.0)).unwrap());

    let (px, _, _, stride) = chart.render_to_rgba8(&opts()).expect("rgba render");
    assert!(is_red(pixel(&px, stride, 95, 90)));
    assert!(is_red(pixel(&px, stride, 165, 90)));
    // the segments touching the gap are skipped
    for x in 110..150 {
        assert!(!is_red(pixel(&px, stride, x, 90)), "stroke at ({x}, 90)");
    }
}
