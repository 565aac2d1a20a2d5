//! Particle record and the per-tick update.

use lumen_core::{PointerState, Rgba, Size, Surface};
use rand::Rng;

use crate::params::{FieldParams, Motion, Opacity};

/// A single dot in the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position in surface pixels.
    pub x: f32,
    pub y: f32,
    /// Rest position anchored particles ease back to.
    pub home_x: f32,
    pub home_y: f32,
    /// Drift velocity; zero for anchored particles.
    pub vx: f32,
    pub vy: f32,
    /// Dot radius.
    pub size: f32,
    /// Alpha for twinkling presets; ignored when the preset fixes opacity.
    pub opacity: f32,
    /// How strongly the pointer displaces this particle.
    pub influence: f32,
}

/// Uniform sample from `lo..hi`, or `lo` when the range is empty.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Create a particle at a random position inside `bounds`.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Size, params: &FieldParams) -> Particle {
    let x = uniform(rng, 0.0, bounds.width);
    let y = uniform(rng, 0.0, bounds.height);
    let (vx, vy) = match params.motion {
        Motion::Anchored { .. } => (0.0, 0.0),
        Motion::Drifting { max_speed } => (
            uniform(rng, -max_speed, max_speed),
            uniform(rng, -max_speed, max_speed),
        ),
    };
    let opacity = match params.opacity {
        Opacity::Twinkle { min, max, .. } => uniform(rng, min, max),
        Opacity::Themed { dark, .. } => dark,
    };

    Particle {
        x,
        y,
        home_x: x,
        home_y: y,
        vx,
        vy,
        size: uniform(rng, params.size_min, params.size_max),
        opacity,
        influence: uniform(rng, params.influence_min, params.influence_max),
    }
}

/// Displacement the pointer applies to `particle` this tick.
///
/// Zero outside the radius (the boundary itself is outside) and when the
/// pointer sits exactly on the particle, where there is no direction to push.
pub fn repulsion(particle: &Particle, pointer: &PointerState, scale: f32) -> (f32, f32) {
    let distance = pointer.distance_to(particle.x, particle.y);
    if pointer.radius <= 0.0 || distance >= pointer.radius || distance <= f32::EPSILON {
        return (0.0, 0.0);
    }

    let force = (pointer.radius - distance) / pointer.radius;
    let push = force * particle.influence * scale;
    let dir_x = (particle.x - pointer.x) / distance;
    let dir_y = (particle.y - pointer.y) / distance;
    (dir_x * push, dir_y * push)
}

/// Advance one tick.
pub fn advance<R: Rng + ?Sized>(
    particle: Particle,
    pointer: &PointerState,
    params: &FieldParams,
    bounds: Size,
    rng: &mut R,
) -> Particle {
    let mut p = particle;

    if let Motion::Drifting { .. } = params.motion {
        p.x += p.vx;
        p.y += p.vy;
        wrap(&mut p, bounds);
    }

    if pointer.distance_to(p.x, p.y) < pointer.radius {
        let (dx, dy) = repulsion(&p, pointer, params.repulsion_scale);
        p.x += dx;
        p.y += dy;
    } else if let Motion::Anchored { ease_divisor } = params.motion {
        p.x -= (p.x - p.home_x) / ease_divisor;
        p.y -= (p.y - p.home_y) / ease_divisor;
    }

    if let Opacity::Twinkle { min, max, step } = params.opacity {
        let jitter = (rng.r#gen::<f32>() - 0.5) * step;
        p.opacity = (p.opacity + jitter).clamp(min, max);
    }

    p
}

/// Re-enter from the opposite edge after leaving the surface.
fn wrap(p: &mut Particle, bounds: Size) {
    if p.x < 0.0 {
        p.x = bounds.width;
    } else if p.x > bounds.width {
        p.x = 0.0;
    }
    if p.y < 0.0 {
        p.y = bounds.height;
    } else if p.y > bounds.height {
        p.y = 0.0;
    }
}

/// Paint the particle as a filled dot.
pub fn draw<S: Surface + ?Sized>(particle: &Particle, surface: &mut S, color: Rgba, alpha: f32) {
    surface.fill_circle(particle.x, particle.y, particle.size, color.with_alpha(alpha));
}
