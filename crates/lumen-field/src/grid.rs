//! Faint backdrop grid.

use lumen_core::{Rgba, Size, Surface};

/// Stroke vertical and horizontal lines every `step` pixels, including both
/// edges when they fall on the grid.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, bounds: Size, step: f32, color: Rgba) {
    if step <= 0.0 {
        return;
    }

    let mut x = 0.0;
    while x <= bounds.width {
        surface.stroke_line(x, 0.0, x, bounds.height, color);
        x += step;
    }
    let mut y = 0.0;
    while y <= bounds.height {
        surface.stroke_line(0.0, y, bounds.width, y, color);
        y += step;
    }
}
