//! Colour values with straight (non-premultiplied) alpha.

use ratatui::style::Color;

/// How a colour combines with what is already painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Plain source-over.
    #[default]
    Normal,
    /// Lightens; used for glows on dark backgrounds.
    Screen,
    /// Darkens; used for tints on light backgrounds.
    Multiply,
}

/// An sRGB colour with an alpha channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#rrggbb` or `rrggbb`. Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Same colour with a different alpha, clamped to `0.0..=1.0`.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composite this colour over an opaque backdrop ("source-over").
    pub fn over(self, backdrop: Rgba) -> Rgba {
        self.blend(backdrop, BlendMode::Normal)
    }

    /// Composite onto an opaque backdrop with `mode`, then fade by alpha.
    pub fn blend(self, backdrop: Rgba, mode: BlendMode) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            let (s, b) = (fg as f32 / 255.0, bg as f32 / 255.0);
            let blended = match mode {
                BlendMode::Normal => s,
                BlendMode::Screen => s + b - s * b,
                BlendMode::Multiply => s * b,
            };
            ((blended * a + b * (1.0 - a)) * 255.0).round() as u8
        };
        Rgba::rgb(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }

    /// Flatten onto `backdrop` and convert to a terminal colour.
    pub fn to_color(self, backdrop: Rgba) -> Color {
        let flat = self.over(backdrop);
        Color::Rgb(flat.r, flat.g, flat.b)
    }
}
