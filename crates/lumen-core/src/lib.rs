//! Core types shared by the lumen crates.
//!
//! Everything here is plain data or a thin trait: colours, the light/dark
//! theme flag, pointer state, the drawing [`Surface`] the animations paint
//! onto, and the cancellable [`FrameLoop`] that drives them.

mod color;
mod frame;
mod pointer;
mod surface;
mod theme;

pub use color::{BlendMode, Rgba};
pub use frame::{CancelToken, FrameLoop};
pub use pointer::PointerState;
pub use surface::{CommandBuffer, DrawCommand, Size, Surface};
pub use theme::{FieldVariant, Theme};
