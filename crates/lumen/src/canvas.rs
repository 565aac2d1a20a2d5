//! Replays recorded field drawing onto a ratatui braille canvas.

use lumen_core::{DrawCommand, Rgba, Size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line as CanvasLine, Points, Rectangle},
    },
};

/// Surface pixels covered by one terminal cell horizontally.
pub const CELL_WIDTH: f32 = 8.0;
/// Surface pixels covered by one terminal cell vertically.
pub const CELL_HEIGHT: f32 = 16.0;

/// A braille dot is a quarter cell wide; circles smaller than this collapse
/// to a single point.
const DOT: f32 = CELL_WIDTH / 2.0;

/// Concentric rings used to approximate a radial gradient.
const GRADIENT_RINGS: usize = 6;

fn flat_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Surface size for a terminal area.
pub fn surface_size(area: Rect) -> Size {
    Size::new(area.width as f32 * CELL_WIDTH, area.height as f32 * CELL_HEIGHT)
}

/// Centre of a terminal cell in surface pixels.
pub fn cell_center(column: u16, row: u16) -> (f32, f32) {
    (
        (column as f32 + 0.5) * CELL_WIDTH,
        (row as f32 + 0.5) * CELL_HEIGHT,
    )
}

/// Widget that paints a frame's draw commands.
pub struct FieldCanvas<'a> {
    commands: &'a [DrawCommand],
    size: Size,
    /// Used until the commands clear to something else.
    backdrop: Rgba,
}

impl<'a> FieldCanvas<'a> {
    pub fn new(commands: &'a [DrawCommand], size: Size, backdrop: Rgba) -> Self {
        Self {
            commands,
            size,
            backdrop,
        }
    }
}

impl Widget for FieldCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let backdrop = self
            .commands
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCommand::Clear(color) => Some(*color),
                _ => None,
            })
            .unwrap_or(self.backdrop);
        let height = self.size.height as f64;
        // Canvas y grows upwards.
        let flip = |y: f32| height - y as f64;

        Canvas::default()
            .background_color(backdrop.to_color(backdrop))
            .marker(Marker::Braille)
            .x_bounds([0.0, self.size.width as f64])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in self.commands {
                    match *command {
                        DrawCommand::Clear(_) => {}
                        DrawCommand::Rect {
                            x,
                            y,
                            width,
                            height,
                            color,
                        } => ctx.draw(&Rectangle {
                            x: x as f64,
                            y: flip(y + height),
                            width: width as f64,
                            height: height as f64,
                            color: color.to_color(backdrop),
                        }),
                        DrawCommand::Circle {
                            x,
                            y,
                            radius,
                            color,
                        } => {
                            let color = color.to_color(backdrop);
                            if radius < DOT {
                                ctx.draw(&Points {
                                    coords: &[(x as f64, flip(y))],
                                    color,
                                });
                            } else {
                                ctx.draw(&Circle {
                                    x: x as f64,
                                    y: flip(y),
                                    radius: radius as f64,
                                    color,
                                });
                            }
                        }
                        DrawCommand::Radial {
                            x,
                            y,
                            radius,
                            color,
                            blend,
                        } => {
                            for ring in 0..GRADIENT_RINGS {
                                let t = ring as f32 / GRADIENT_RINGS as f32;
                                let faded = color.with_alpha(color.a * (1.0 - t));
                                ctx.draw(&Circle {
                                    x: x as f64,
                                    y: flip(y),
                                    radius: (radius * (t + 1.0 / GRADIENT_RINGS as f32)) as f64,
                                    color: flat_color(faded.blend(backdrop, blend)),
                                });
                            }
                            // keep gradients underneath later shapes
                            ctx.layer();
                        }
                        DrawCommand::Line {
                            x1,
                            y1,
                            x2,
                            y2,
                            color,
                        } => ctx.draw(&CanvasLine {
                            x1: x1 as f64,
                            y1: flip(y1),
                            x2: x2 as f64,
                            y2: flip(y2),
                            color: color.to_color(backdrop),
                        }),
                    }
                }
            })
            .render(area, buf);
    }
}
