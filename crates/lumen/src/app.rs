use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use lumen_config::{CarouselItem, Config};
use lumen_core::{CancelToken, CommandBuffer, FieldVariant, FrameLoop, Theme};
use lumen_field::Field;
use lumen_motion::{Carousel, Counter, RingDimensions, project, split_items};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
};
use tracing::{debug, info};

use crate::canvas::{self, FieldCanvas};
use crate::ring_view::{CARD_ROWS, Card, RingView};

/// How long the particle counter takes to count up after a rebuild.
const COUNTER_DURATION_MS: u64 = 2000;

/// One carousel ring and the cards it carries.
#[derive(Debug)]
struct Ring {
    carousel: Carousel,
    cards: Vec<Card>,
    /// Where the ring was last drawn, for hit testing.
    area: Rect,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    config: Config,
    theme: Theme,
    variant: FieldVariant,
    field: Field,
    rings: Vec<Ring>,
    dims: RingDimensions,
    /// Ring currently being dragged.
    dragging: Option<usize>,
    counter: Counter,
    buffer: CommandBuffer,
    token: CancelToken,
    started: Instant,
    /// Terminal area at the last resize.
    area: Rect,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let params = config.field_params(config.variant);
        let field = match config.seed {
            Some(seed) => Field::with_seed(params, config.theme, seed),
            None => Field::new(params, config.theme),
        };
        Self {
            theme: config.theme,
            variant: config.variant,
            field,
            rings: Vec::new(),
            dims: RingDimensions::for_viewport(0.0),
            dragging: None,
            counter: Counter::new(0, COUNTER_DURATION_MS),
            buffer: CommandBuffer::new(),
            token: CancelToken::new(),
            started: Instant::now(),
            area: Rect::default(),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let frames = FrameLoop::new(self.config.fps);
        let token = self.token.clone();
        info!(
            fps = self.config.fps,
            theme = self.theme.label(),
            variant = self.variant.label(),
            "starting"
        );

        frames.run(&token, || -> color_eyre::Result<()> {
            let now = self.now_ms();
            self.handle_crossterm_events(now)?;
            for ring in &mut self.rings {
                ring.carousel.tick(now);
            }
            terminal.draw(|frame| self.render(frame, now))?;
            Ok(())
        })?;

        info!("shutting down");
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame, now: u64) {
        let area = frame.area();
        if area != self.area {
            self.on_resize(area, now);
        }

        let size = canvas::surface_size(area);
        // An empty terminal has nothing to paint on.
        let surface = (!size.is_empty()).then_some(&mut self.buffer);
        self.field.tick(surface);

        let palette = *self.field.palette();
        let accent = palette.particle.to_color(palette.base);
        frame.render_widget(
            FieldCanvas::new(self.buffer.commands(), size, palette.base),
            area,
        );

        let band_height = CARD_ROWS * self.rings.len().max(1) as u16;
        let chunks = Layout::vertical([
            Constraint::Length(1),           // Header
            Constraint::Fill(1),             // Field
            Constraint::Length(band_height), // Carousel
            Constraint::Fill(1),             // Field
            Constraint::Length(1),           // Help text
        ])
        .split(area);

        let header = Line::from(vec![
            self.variant.label().bold().fg(accent),
            "  ".into(),
            self.theme.label().fg(accent),
            "  particles ".dark_gray(),
            self.counter.value(now).to_string().bold().fg(accent),
        ])
        .centered();
        frame.render_widget(header, chunks[0]);

        let ring_areas = Layout::vertical(vec![Constraint::Length(CARD_ROWS); self.rings.len()])
            .split(chunks[2]);
        for (ring, &ring_area) in self.rings.iter_mut().zip(ring_areas.iter()) {
            ring.area = ring_area;
            let slots = project(ring.cards.len(), ring.carousel.rotation(), self.dims.radius);
            frame.render_widget(
                RingView::new(&slots, &ring.cards, self.dims, palette.base),
                ring_area,
            );
        }

        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "t".bold().fg(accent),
            " theme  ".dark_gray(),
            "v".bold().fg(accent),
            " variant  ".dark_gray(),
            "r".bold().fg(accent),
            " respawn  ".dark_gray(),
            "drag".bold().fg(accent),
            " spin carousel".dark_gray(),
        ])
        .style(Style::new().bg(palette.base.to_color(palette.base)))
        .centered();
        frame.render_widget(help, chunks[4]);
    }

    /// Rebuild the field and relayout the rings for a new terminal size.
    fn on_resize(&mut self, area: Rect, now: u64) {
        self.area = area;
        let size = canvas::surface_size(area);
        self.field.on_resize(size.width, size.height);
        self.counter.restart(self.field.particles().len() as u64, now);

        let dims = RingDimensions::for_viewport(size.width);
        if dims.split != self.dims.split || self.rings.is_empty() {
            self.rings = self.build_rings(dims.split, now);
            self.dragging = None;
        }
        self.dims = dims;
        info!(
            columns = area.width,
            rows = area.height,
            particles = self.field.particles().len(),
            rings = self.rings.len(),
            "resized"
        );
    }

    /// One ring, or two counter-rotating rings sharing the items.
    fn build_rings(&self, split: bool, now: u64) -> Vec<Ring> {
        let params = self.config.carousel_params();
        let items = &self.config.carousel.items;
        let ring = |items: &[CarouselItem], params| Ring {
            carousel: Carousel::new(params, now),
            cards: items.iter().map(Card::from).collect(),
            area: Rect::default(),
        };
        if split {
            let (first, second) = split_items(items);
            vec![ring(first, params), ring(second, params.reversed())]
        } else {
            vec![ring(items, params)]
        }
    }

    /// Drains pending crossterm events without blocking the frame.
    fn handle_crossterm_events(&mut self, now: u64) -> color_eyre::Result<()> {
        while event::poll(Duration::ZERO)? {
            self.on_event(event::read()?, now);
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event, now: u64) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key, now),
            Event::Mouse(mouse) => self.on_mouse_event(mouse, now),
            Event::FocusLost => self.on_focus_lost(now),
            // Resizes are picked up from the frame area on the next draw.
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent, now: u64) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('v')) => self.cycle_variant(now),
            (_, KeyCode::Char('r')) => self.respawn(now),
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent, now: u64) {
        let (x, y) = canvas::cell_center(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.field.on_pointer_move(x, y);
                if let Some(index) = self.ring_at(mouse.column, mouse.row) {
                    self.rings[index].carousel.pointer_move(x, now);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.field.on_pointer_move(x, y);
                self.dragging = self.ring_at(mouse.column, mouse.row);
                if let Some(index) = self.dragging {
                    self.rings[index].carousel.pointer_down(x, now);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.field.on_pointer_move(x, y);
                if let Some(index) = self.dragging {
                    self.rings[index].carousel.pointer_move(x, now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(index) = self.dragging.take() {
                    self.rings[index].carousel.pointer_up(now);
                }
            }
            _ => {}
        }
    }

    /// The pointer left the terminal. A drag in progress ends here since
    /// its button release will never arrive.
    fn on_focus_lost(&mut self, now: u64) {
        self.field.on_pointer_leave();
        if let Some(index) = self.dragging.take() {
            self.rings[index].carousel.pointer_up(now);
        }
    }

    fn ring_at(&self, column: u16, row: u16) -> Option<usize> {
        self.rings
            .iter()
            .position(|ring| ring.area.contains((column, row).into()))
    }

    /// Switch between dark and light colours.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.field.set_theme(self.theme);
        info!(theme = self.theme.label(), "theme changed");
    }

    /// Cycle through the field presets.
    fn cycle_variant(&mut self, now: u64) {
        self.variant = self.variant.next();
        self.field.set_params(self.config.field_params(self.variant));
        self.counter.restart(self.field.particles().len() as u64, now);
        info!(variant = self.variant.label(), "variant changed");
    }

    /// Scatter a fresh set of particles.
    fn respawn(&mut self, now: u64) {
        let size = self.field.size();
        self.field.on_resize(size.width, size.height);
        self.counter.restart(self.field.particles().len() as u64, now);
        debug!("respawned");
    }

    /// Cancel the frame loop to quit the application.
    fn quit(&mut self) {
        self.token.cancel();
    }
}
