// File: crates/chart-core/src/scale.rs
// Summary: Linear value-to-pixel transform used for both X and Y.

/// Maps the value range `[vmin, vmax]` onto `[px_start, px_end]`.
/// For a Y scale pass `px_start = bottom` and `px_end = top`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px_start, px_end, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_scale_is_inverted() {
        let s = LinearScale::new(100.0, 0.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert_eq!(s.to_px(5.0), 50.0);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = LinearScale::new(0.0, 10.0, 3.0, 3.0);
        assert_eq!(s.vmax, 4.0);
    }
}
