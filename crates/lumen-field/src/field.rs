//! Field: owner of the particle set and the per-frame cycle.

use lumen_core::{PointerState, Size, Surface, Theme};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::orb::{self, Orb};
use crate::palette::Palette;
use crate::params::FieldParams;
use crate::particle::{self, Particle};
use crate::{grid, links};

/// A particle field sized to a drawing surface.
#[derive(Debug)]
pub struct Field {
    params: FieldParams,
    theme: Theme,
    palette: Palette,
    size: Size,
    pointer: PointerState,
    particles: Vec<Particle>,
    orbs: Vec<Orb>,
    rng: StdRng,
}

impl Field {
    /// Create an empty field. It stays empty until the first resize.
    pub fn new(params: FieldParams, theme: Theme) -> Self {
        Self::with_rng(params, theme, StdRng::from_entropy())
    }

    /// Like [`Field::new`] but with reproducible particle placement.
    pub fn with_seed(params: FieldParams, theme: Theme, seed: u64) -> Self {
        Self::with_rng(params, theme, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: FieldParams, theme: Theme, rng: StdRng) -> Self {
        Self {
            params,
            theme,
            palette: Palette::for_theme(theme),
            size: Size::default(),
            pointer: PointerState::away(params.pointer_radius),
            particles: Vec::new(),
            orbs: Vec::new(),
            rng,
        }
    }

    /// Resize the field and rebuild every particle and orb.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width.max(0.0), height.max(0.0));
        self.rebuild();
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    /// The pointer left the surface.
    pub fn on_pointer_leave(&mut self) {
        self.pointer.leave();
    }

    /// Switch colours. Particles keep their positions.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }

    /// Swap presets and rebuild for the current size.
    pub fn set_params(&mut self, params: FieldParams) {
        self.params = params;
        self.pointer.radius = params.pointer_radius;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let count = self.params.particle_count(self.size);
        let size = self.size;
        let params = self.params;

        self.particles = (0..count)
            .map(|_| particle::spawn(&mut self.rng, size, &params))
            .collect();
        self.orbs = if size.is_empty() {
            Vec::new()
        } else {
            (0..params.orb_count)
                .map(|slot| orb::spawn(&mut self.rng, size, slot))
                .collect()
        };

        debug!(
            width = size.width,
            height = size.height,
            particles = self.particles.len(),
            orbs = self.orbs.len(),
            "field rebuilt"
        );
    }

    /// Advance and paint one frame. Does nothing without a surface.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: Option<&mut S>) {
        let Some(surface) = surface else {
            return;
        };

        surface.clear(self.palette.base);

        if let Some(step) = self.params.grid_step {
            grid::draw(surface, self.size, step, self.palette.grid);
        }

        for o in &mut self.orbs {
            *o = orb::advance(*o, self.size);
            orb::draw(o, surface, self.palette.orb(o.slot), self.palette.orb_blend);
        }

        for p in &mut self.particles {
            *p = particle::advance(*p, &self.pointer, &self.params, self.size, &mut self.rng);
            let alpha = self.params.opacity.resolve(p.opacity, self.theme);
            particle::draw(p, surface, self.palette.particle, alpha);
        }

        if let Some(distance) = self.params.link_distance {
            links::draw(&self.particles, surface, distance, self.palette.particle);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{BlendMode, CommandBuffer, DrawCommand};
    use pretty_assertions::assert_eq;

    fn background(seed: u64) -> Field {
        Field::with_seed(FieldParams::background(), Theme::Dark, seed)
    }

    fn circles(buffer: &CommandBuffer) -> usize {
        buffer
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    #[test]
    fn new_field_is_empty() {
        let field = background(1);
        assert!(field.particles().is_empty());
        assert!(field.orbs().is_empty());
        assert!(field.pointer().is_away());
    }

    #[test]
    fn resize_matches_count_formula() {
        let mut field = background(2);
        for (w, h) in [(800.0, 600.0), (1920.0, 1080.0), (320.0, 240.0), (0.0, 0.0), (99.0, 80.0)] {
            field.on_resize(w, h);
            let expected = ((w * h / 8000.0_f32).floor() as usize).min(250);
            assert_eq!(field.particles().len(), expected, "{w}x{h}");
        }
    }

    #[test]
    fn reference_viewport_gets_sixty_particles() {
        let mut field = background(3);
        field.on_resize(800.0, 600.0);
        assert_eq!(field.particles().len(), 60);
        assert_eq!(field.orbs().len(), 3);
    }

    #[test]
    fn resize_replaces_particles_wholesale() {
        let mut field = background(4);
        field.on_resize(800.0, 600.0);
        let before = field.particles().to_vec();
        field.on_resize(800.0, 600.0);
        assert_ne!(field.particles(), before.as_slice());
        assert!(field.particles().iter().all(|p| p.x < 800.0 && p.y < 600.0));
    }

    #[test]
    fn tick_without_surface_is_noop() {
        let mut field = background(5);
        field.on_resize(800.0, 600.0);
        field.on_pointer_move(400.0, 300.0);
        let before = field.particles().to_vec();

        field.tick::<CommandBuffer>(None);
        assert_eq!(field.particles(), before.as_slice());
    }

    #[test]
    fn tick_paints_every_particle() {
        let mut field = background(6);
        field.on_resize(800.0, 600.0);
        let mut buffer = CommandBuffer::new();
        field.tick(Some(&mut buffer));

        assert_eq!(
            buffer.commands()[0],
            DrawCommand::Clear(Palette::for_theme(Theme::Dark).base)
        );
        assert_eq!(circles(&buffer), 60);
        let radials = buffer
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Radial { .. }))
            .count();
        assert_eq!(radials, 3);
    }

    #[test]
    fn orb_blend_follows_theme() {
        let mut field = background(11);
        field.on_resize(800.0, 600.0);
        let mut buffer = CommandBuffer::new();

        let blends = |buffer: &CommandBuffer| -> Vec<BlendMode> {
            buffer
                .commands()
                .iter()
                .filter_map(|c| match c {
                    DrawCommand::Radial { blend, .. } => Some(*blend),
                    _ => None,
                })
                .collect()
        };

        field.tick(Some(&mut buffer));
        assert_eq!(blends(&buffer), vec![BlendMode::Screen; 3]);

        field.set_theme(Theme::Light);
        field.tick(Some(&mut buffer));
        assert_eq!(blends(&buffer), vec![BlendMode::Multiply; 3]);
    }

    #[test]
    fn anchored_particles_settle_home_after_pointer_leaves() {
        let mut field = background(7);
        field.on_resize(800.0, 600.0);
        let homes: Vec<(f32, f32)> = field
            .particles()
            .iter()
            .map(|p| (p.home_x, p.home_y))
            .collect();

        let mut buffer = CommandBuffer::new();
        field.on_pointer_move(400.0, 300.0);
        for _ in 0..30 {
            field.tick(Some(&mut buffer));
        }
        field.on_pointer_leave();
        for _ in 0..400 {
            field.tick(Some(&mut buffer));
        }

        for (p, (hx, hy)) in field.particles().iter().zip(homes) {
            assert!((p.x - hx).abs() < 0.01 && (p.y - hy).abs() < 0.01);
        }
    }

    #[test]
    fn theme_switch_keeps_particles() {
        let mut field = background(8);
        field.on_resize(800.0, 600.0);
        let before = field.particles().to_vec();
        field.set_theme(Theme::Light);
        assert_eq!(field.particles(), before.as_slice());
        assert_eq!(field.palette(), &Palette::for_theme(Theme::Light));
    }

    #[test]
    fn hero_preset_links_and_skips_orbs() {
        let mut field = Field::with_seed(FieldParams::hero(), Theme::Light, 9);
        field.on_resize(800.0, 600.0);
        assert_eq!(field.particles().len(), 48);
        assert!(field.orbs().is_empty());

        let mut buffer = CommandBuffer::new();
        field.tick(Some(&mut buffer));
        let alphas: Vec<f32> = buffer
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { color, .. } => Some(color.a),
                _ => None,
            })
            .collect();
        assert_eq!(alphas.len(), 48);
        assert!(alphas.iter().all(|a| *a == 0.3));
    }

    #[test]
    fn set_params_rebuilds_with_new_radius() {
        let mut field = background(10);
        field.on_resize(800.0, 600.0);
        field.set_params(FieldParams::hero());
        assert_eq!(field.pointer().radius, 180.0);
        assert_eq!(field.particles().len(), 48);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = background(42);
        let mut b = background(42);
        a.on_resize(640.0, 480.0);
        b.on_resize(640.0, 480.0);
        assert_eq!(a.particles(), b.particles());
    }
}
