//! Pointer-driven motion primitives: the drag/inertia carousel, its ring
//! layout, and a count-up number animation.
//!
//! Time is always passed in explicitly as milliseconds so every animation
//! can be stepped deterministically.

mod carousel;
mod counter;
mod ring;

pub use carousel::{Carousel, CarouselParams, Phase};
pub use counter::Counter;
pub use ring::{CardSlot, RingDimensions, project, split_items};
