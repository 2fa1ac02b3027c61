// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers and tick label formatting.

/// Round tick positions (1/2/2.5/5 x 10^k) covering `[min, max]`, at most about `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return Vec::new();
    }
    let raw = (max - min) / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut k = 0usize;
    loop {
        let v = first + step * k as f64;
        if v > max + step * 1e-9 { break; }
        // snap -0.0 and float dust to clean values
        ticks.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        k += 1;
    }
    ticks
}

/// Format an integer-valued number with `,` thousands separators; others keep up to 2 decimals.
pub fn format_thousands(v: f64) -> String {
    if v.fract().abs() > 1e-9 {
        let s = format!("{:.2}", v);
        return s.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    let n = v.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 { format!("-{out}") } else { out }
}
