// File: crates/chart-core/src/theme.rs
// Summary: Light theme colors and named/hex color resolution.

use skia_safe as skia;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_fill: skia::Color,
    pub annotation: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::from_argb(255, 0x20, 0x20, 0x20),
            axis_label: skia::Color::from_argb(255, 0x10, 0x10, 0x10),
            tick: skia::Color::from_argb(255, 0x30, 0x30, 0x30),
            title: skia::Color::BLACK,
            legend_frame: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            annotation: skia::Color::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Resolve a color name (`red`, `green`, `blue`, `orange`, ...) or `#RRGGBB` hex string.
pub fn named_color(name: &str) -> Result<skia::Color> {
    let key = name.trim().to_ascii_lowercase();
    let c = match key.as_str() {
        "red" | "r" => skia::Color::from_rgb(0xff, 0x00, 0x00),
        "green" | "g" => skia::Color::from_rgb(0x00, 0x80, 0x00),
        "blue" | "b" => skia::Color::from_rgb(0x00, 0x00, 0xff),
        "orange" => skia::Color::from_rgb(0xff, 0xa5, 0x00),
        "black" | "k" => skia::Color::BLACK,
        "white" | "w" => skia::Color::WHITE,
        "gray" | "grey" => skia::Color::from_rgb(0x80, 0x80, 0x80),
        _ => return parse_hex(&key).ok_or_else(|| ChartError::InvalidColor(name.to_string())),
    };
    Ok(c)
}

fn parse_hex(s: &str) -> Option<skia::Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 { return None; }
    let v = u32::from_str_radix(hex, 16).ok()?;
    Some(skia::Color::from_rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_and_hex() {
        assert_eq!(named_color("green").unwrap(), skia::Color::from_rgb(0, 128, 0));
        assert_eq!(named_color("#FF6B6B").unwrap(), skia::Color::from_rgb(0xff, 0x6b, 0x6b));
        assert_eq!(named_color("#45b7d1").unwrap(), skia::Color::from_rgb(0x45, 0xb7, 0xd1));
    }

    #[test]
    fn rejects_unknown() {
        assert!(matches!(named_color("chartreuse-ish"), Err(ChartError::InvalidColor(_))));
        assert!(named_color("#12345").is_err());
    }
}
