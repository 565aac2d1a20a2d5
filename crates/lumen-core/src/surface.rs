//! The 2D drawing surface animations paint onto.

use crate::{BlendMode, Rgba};

/// Surface dimensions in surface pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when either side is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Minimal immediate-mode 2D drawing API.
///
/// Coordinates have their origin at the top-left corner with `y` growing
/// downwards.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);

    /// Radial gradient from `color` at the centre to transparent at `radius`,
    /// combined with the backdrop using `blend`.
    fn fill_radial(&mut self, x: f32, y: f32, radius: f32, color: Rgba, blend: BlendMode);

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
    },
    Radial {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
        blend: BlendMode,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgba,
    },
}

/// A surface that records commands for later replay by a backend.
#[derive(Debug, Default, Clone)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for CommandBuffer {
    fn clear(&mut self, color: Rgba) {
        // Everything before a clear is invisible anyway.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn fill_radial(&mut self, x: f32, y: f32, radius: f32, color: Rgba, blend: BlendMode) {
        self.commands.push(DrawCommand::Radial {
            x,
            y,
            radius,
            color,
            blend,
        });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clear_discards_earlier_commands() {
        let mut buffer = CommandBuffer::new();
        buffer.fill_circle(1.0, 1.0, 1.0, Rgba::rgb(1, 1, 1));
        buffer.clear(Rgba::rgb(0, 0, 0));
        buffer.stroke_line(0.0, 0.0, 1.0, 1.0, Rgba::rgb(2, 2, 2));

        assert_eq!(
            buffer.commands(),
            &[
                DrawCommand::Clear(Rgba::rgb(0, 0, 0)),
                DrawCommand::Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 1.0,
                    y2: 1.0,
                    color: Rgba::rgb(2, 2, 2),
                },
            ]
        );
    }

    #[test]
    fn empty_size() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(!Size::new(800.0, 600.0).is_empty());
        assert_eq!(Size::new(800.0, 600.0).area(), 480_000.0);
    }
}
