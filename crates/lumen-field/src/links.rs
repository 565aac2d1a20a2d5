//! Lines between nearby particles.

use lumen_core::{Rgba, Surface};

use crate::particle::Particle;

/// Peak alpha of a link between two coincident particles.
const LINK_ALPHA: f32 = 0.15;

/// Join every pair closer than `max_distance`, fading with distance.
pub fn draw<S: Surface + ?Sized>(
    particles: &[Particle],
    surface: &mut S,
    max_distance: f32,
    color: Rgba,
) {
    if max_distance <= 0.0 {
        return;
    }

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < max_distance {
                let alpha = (1.0 - distance / max_distance) * LINK_ALPHA;
                surface.stroke_line(a.x, a.y, b.x, b.y, color.with_alpha(alpha));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{CommandBuffer, DrawCommand};

    fn dot(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            home_x: x,
            home_y: y,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.4,
            influence: 1.0,
        }
    }

    #[test]
    fn links_only_close_pairs() {
        let particles = [dot(0.0, 0.0), dot(75.0, 0.0), dot(400.0, 0.0)];
        let mut buffer = CommandBuffer::new();
        draw(&particles, &mut buffer, 150.0, Rgba::rgb(6, 182, 212));

        assert_eq!(buffer.len(), 1);
        match &buffer.commands()[0] {
            DrawCommand::Line { x2, color, .. } => {
                assert_eq!(*x2, 75.0);
                assert!((color.a - 0.075).abs() < 1e-6);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
