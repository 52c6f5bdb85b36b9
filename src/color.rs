use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Curve colour generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
///
/// Returned as plain RGB triples so both the egui viewer and the plotters
/// backend can consume them.
pub fn curve_colors(n: usize) -> Vec<(u8, u8, u8)> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            (
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
