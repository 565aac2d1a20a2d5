//! Interactive particle fields for the lumen backdrop.
//!
//! A [`Field`] owns a set of particles (and, for the background variant,
//! a few large drifting orbs) sized to its surface. Pointer movement pushes
//! nearby particles away; anchored particles then ease back to where they
//! were spawned while drifting ones carry on wrapping around the edges.
//!
//! Particles and orbs are plain records advanced by free functions, so the
//! physics can be tested without any drawing surface.

mod field;
mod grid;
mod links;
mod palette;
mod params;

pub mod orb;
pub mod particle;

pub use field::Field;
pub use orb::Orb;
pub use palette::Palette;
pub use params::{FieldParams, Motion, Opacity};
pub use particle::Particle;
