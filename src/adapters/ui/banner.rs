//! Welcome banner: "NABORLY" in figlet with a vertical gradient, then region and version.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Leaf green (#2e9e5b).
const LEAF_GREEN: (u8, u8, u8) = (0x2e, 0x9e, 0x5b);
/// Brick orange (#e0783a).
const BRICK_ORANGE: (u8, u8, u8) = (0xe0, 0x78, 0x3a);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Figlet art for the app name; plain text if the bundled font cannot be used.
fn art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("NABORLY").map(|fig| fig.to_string()))
        .unwrap_or_else(|| "NABORLY".to_string())
}

pub fn print_welcome(region_name: &str) {
    let mut out = stdout();
    let art = art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(LEAF_GREEN, BRICK_ORANGE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: BRICK_ORANGE.0,
        g: BRICK_ORANGE.1,
        b: BRICK_ORANGE.2,
    }));
    let _ = out.execute(Print(format!("{}  ·  v{}\r\n", region_name, version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
