//! Theme colour constants.

use lumen_core::{BlendMode, Rgba, Theme};

/// Colours used by a field for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Opaque base painted under everything.
    pub base: Rgba,
    /// Particle colour; alpha comes from the particle.
    pub particle: Rgba,
    /// One colour per orb slot.
    pub orbs: [Rgba; 3],
    /// How orbs combine with the base: screen on dark, multiply on light.
    pub orb_blend: BlendMode,
    /// Backdrop grid lines.
    pub grid: Rgba,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                base: Rgba::rgb(2, 6, 23),
                particle: Rgba::rgb(6, 182, 212),
                orbs: [
                    Rgba::new(30, 58, 138, 0.3),  // deep blue
                    Rgba::new(88, 28, 135, 0.2),  // deep purple
                    Rgba::new(15, 118, 110, 0.15), // teal
                ],
                orb_blend: BlendMode::Screen,
                grid: Rgba::new(255, 255, 255, 0.03),
            },
            Theme::Light => Self {
                base: Rgba::rgb(248, 250, 252),
                particle: Rgba::rgb(37, 99, 235),
                orbs: [
                    Rgba::new(219, 234, 254, 0.4), // light blue
                    Rgba::new(243, 232, 255, 0.4), // light purple
                    Rgba::new(236, 254, 255, 0.4), // light cyan
                ],
                orb_blend: BlendMode::Multiply,
                grid: Rgba::new(0, 0, 0, 0.02),
            },
        }
    }

    /// Colour for orb slot `slot`, cycling through the three.
    pub fn orb(&self, slot: usize) -> Rgba {
        self.orbs[slot % self.orbs.len()]
    }
}
