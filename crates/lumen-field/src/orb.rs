//! Large radial-gradient blobs drifting behind the particles.

use lumen_core::{BlendMode, Rgba, Size, Surface};
use rand::Rng;

use crate::particle::uniform;

const MIN_RADIUS: f32 = 200.0;
const MAX_RADIUS: f32 = 500.0;
const MAX_SPEED: f32 = 0.25;

/// A drifting orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Centre in surface pixels.
    pub x: f32,
    pub y: f32,
    /// Gradient radius; also the wrap margin.
    pub radius: f32,
    /// Constant velocity per tick.
    pub vx: f32,
    pub vy: f32,
    /// Index into the palette's orb colours.
    pub slot: usize,
}

/// Create an orb somewhere inside `bounds`.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Size, slot: usize) -> Orb {
    Orb {
        x: uniform(rng, 0.0, bounds.width),
        y: uniform(rng, 0.0, bounds.height),
        radius: uniform(rng, MIN_RADIUS, MAX_RADIUS),
        vx: uniform(rng, -MAX_SPEED, MAX_SPEED),
        vy: uniform(rng, -MAX_SPEED, MAX_SPEED),
        slot,
    }
}

/// Move by the orb's velocity, wrapping once it is fully off-surface.
///
/// The wrap target sits one radius beyond the opposite edge, so the orb
/// slides back in rather than popping into view.
pub fn advance(orb: Orb, bounds: Size) -> Orb {
    let mut o = orb;
    o.x += o.vx;
    o.y += o.vy;

    if o.x < -o.radius {
        o.x = bounds.width + o.radius;
    } else if o.x > bounds.width + o.radius {
        o.x = -o.radius;
    }
    if o.y < -o.radius {
        o.y = bounds.height + o.radius;
    } else if o.y > bounds.height + o.radius {
        o.y = -o.radius;
    }
    o
}

pub fn draw<S: Surface + ?Sized>(orb: &Orb, surface: &mut S, color: Rgba, blend: BlendMode) {
    surface.fill_radial(orb.x, orb.y, orb.radius, color, blend);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOUNDS: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    fn orb(x: f32, y: f32, vx: f32, vy: f32) -> Orb {
        Orb {
            x,
            y,
            radius: 300.0,
            vx,
            vy,
            slot: 0,
        }
    }

    #[test]
    fn crossing_left_edge_reenters_right_on_same_tick() {
        let next = advance(orb(-299.9, 100.0, -0.2, 0.0), BOUNDS);
        assert_eq!(next.x, 800.0 + 300.0);
        assert_eq!(next.y, 100.0);
    }

    #[test]
    fn crossing_right_edge_reenters_left() {
        let next = advance(orb(1099.9, 100.0, 0.2, 0.0), BOUNDS);
        assert_eq!(next.x, -300.0);
    }

    #[test]
    fn crossing_vertical_edges_wraps() {
        assert_eq!(advance(orb(10.0, -299.9, 0.0, -0.2), BOUNDS).y, 900.0);
        assert_eq!(advance(orb(10.0, 899.9, 0.0, 0.2), BOUNDS).y, -300.0);
    }

    #[test]
    fn partially_visible_orb_keeps_moving() {
        let next = advance(orb(-100.0, 50.0, -0.25, 0.25), BOUNDS);
        assert_eq!(next.x, -100.25);
        assert_eq!(next.y, 50.25);
    }

    #[test]
    fn spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for slot in 0..100 {
            let o = spawn(&mut rng, BOUNDS, slot);
            assert!((MIN_RADIUS..MAX_RADIUS).contains(&o.radius));
            assert!(o.vx.abs() <= MAX_SPEED && o.vy.abs() <= MAX_SPEED);
            assert_eq!(o.slot, slot);
        }
    }
}
