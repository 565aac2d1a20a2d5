//! Tunables for the two field presets.

use lumen_core::{FieldVariant, Size, Theme};

/// How particles move when the pointer is not pushing them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Ease back toward the spawn point by `1 / ease_divisor` of the remaining
    /// offset per tick.
    Anchored { ease_divisor: f32 },
    /// Move at a constant random velocity (each axis in `-max_speed..max_speed`)
    /// and wrap at the surface edges.
    Drifting { max_speed: f32 },
}

/// How particle alpha is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opacity {
    /// Random walk of up to `step / 2` per tick, clamped to `min..=max`.
    Twinkle { min: f32, max: f32, step: f32 },
    /// Constant alpha that depends only on the theme.
    Themed { dark: f32, light: f32 },
}

impl Opacity {
    /// Alpha to paint a particle with, given its stored opacity.
    pub fn resolve(self, stored: f32, theme: Theme) -> f32 {
        match self {
            Opacity::Twinkle { .. } => stored,
            Opacity::Themed { dark, light } => {
                if theme.is_dark() {
                    dark
                } else {
                    light
                }
            }
        }
    }
}

/// Everything that distinguishes one field preset from another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Surface pixels per particle.
    pub density: f32,
    /// Upper bound on the particle count.
    pub max_count: usize,
    /// Radius inside which the pointer repels particles.
    pub pointer_radius: f32,
    /// Extra multiplier on the repulsion displacement.
    pub repulsion_scale: f32,
    /// Dot radius range, sampled once per particle.
    pub size_min: f32,
    pub size_max: f32,
    /// Range for [`Particle::influence`](crate::Particle::influence).
    pub influence_min: f32,
    pub influence_max: f32,
    /// Movement when not being pushed.
    pub motion: Motion,
    /// Alpha behaviour.
    pub opacity: Opacity,
    /// Number of gradient orbs behind the particles.
    pub orb_count: usize,
    /// Spacing of the backdrop grid, if any.
    pub grid_step: Option<f32>,
    /// Particles closer than this are joined by a line.
    pub link_distance: Option<f32>,
}

impl FieldParams {
    /// Full-screen backdrop: twinkling anchored dust, orbs and a faint grid.
    pub fn background() -> Self {
        Self {
            density: 8000.0,
            max_count: 250,
            pointer_radius: 250.0,
            repulsion_scale: 1.0,
            size_min: 0.5,
            size_max: 2.5,
            influence_min: 1.0,
            influence_max: 31.0,
            motion: Motion::Anchored { ease_divisor: 20.0 },
            opacity: Opacity::Twinkle {
                min: 0.1,
                max: 0.6,
                step: 0.01,
            },
            orb_count: 3,
            grid_step: Some(60.0),
            link_distance: None,
        }
    }

    /// Hero backdrop: sparser drifting particles with connecting lines.
    pub fn hero() -> Self {
        Self {
            density: 10_000.0,
            max_count: 150,
            pointer_radius: 180.0,
            repulsion_scale: 0.5,
            size_min: 0.5,
            size_max: 2.0,
            influence_min: 1.0,
            influence_max: 21.0,
            motion: Motion::Drifting { max_speed: 0.2 },
            opacity: Opacity::Themed {
                dark: 0.4,
                light: 0.3,
            },
            orb_count: 0,
            grid_step: None,
            link_distance: Some(150.0),
        }
    }

    pub fn for_variant(variant: FieldVariant) -> Self {
        match variant {
            FieldVariant::Background => Self::background(),
            FieldVariant::Hero => Self::hero(),
        }
    }

    /// `clamp(floor(area / density), 0, max_count)`.
    pub fn particle_count(&self, size: Size) -> usize {
        if self.density <= 0.0 || size.is_empty() {
            return 0;
        }
        let quota = (size.area() / self.density).floor();
        (quota.max(0.0) as usize).min(self.max_count)
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::background()
    }
}
