//! Drag, inertia and idle auto-spin for a rotating carousel.

/// Carousel tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselParams {
    /// Degrees of rotation per pixel of horizontal drag.
    pub sensitivity: f32,
    /// Per-tick velocity multiplier after release; must be below 1.
    pub friction: f32,
    /// Inertia stops once `|velocity|` drops below this.
    pub epsilon: f32,
    /// Quiet time before auto-spin kicks in.
    pub idle_timeout_ms: u64,
    /// Degrees per tick while auto-spinning; the sign sets the direction.
    pub spin_rate: f32,
}

impl Default for CarouselParams {
    fn default() -> Self {
        Self {
            sensitivity: 0.5,
            friction: 0.95,
            epsilon: 0.01,
            idle_timeout_ms: 2000,
            spin_rate: 0.12,
        }
    }
}

impl CarouselParams {
    /// Same parameters spinning the other way.
    pub fn reversed(self) -> Self {
        Self {
            spin_rate: -self.spin_rate,
            ..self
        }
    }
}

/// What is currently driving the rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// At rest, waiting for the idle timeout.
    #[default]
    Idle,
    AutoSpin,
    Dragging,
    Inertia,
}

/// Rotation state of one carousel, in degrees.
#[derive(Debug, Clone)]
pub struct Carousel {
    params: CarouselParams,
    phase: Phase,
    rotation: f32,
    velocity: f32,
    drag_start_x: f32,
    drag_start_rotation: f32,
    /// Rotation at the previous tick, for measuring drag velocity.
    last_tick_rotation: f32,
    last_interaction_ms: u64,
}

impl Carousel {
    /// A carousel at rest; `now_ms` starts the idle clock.
    pub fn new(params: CarouselParams, now_ms: u64) -> Self {
        Self {
            params,
            phase: Phase::Idle,
            rotation: 0.0,
            velocity: 0.0,
            drag_start_x: 0.0,
            drag_start_rotation: 0.0,
            last_tick_rotation: 0.0,
            last_interaction_ms: now_ms,
        }
    }

    /// Start a drag. Interrupts inertia and auto-spin.
    pub fn pointer_down(&mut self, x: f32, now_ms: u64) {
        self.phase = Phase::Dragging;
        self.velocity = 0.0;
        self.drag_start_x = x;
        self.drag_start_rotation = self.rotation;
        self.last_tick_rotation = self.rotation;
        self.last_interaction_ms = now_ms;
    }

    /// Pointer moved. Rotates while dragging; otherwise just counts as
    /// activity and holds off auto-spin.
    pub fn pointer_move(&mut self, x: f32, now_ms: u64) {
        self.last_interaction_ms = now_ms;
        if self.phase == Phase::Dragging {
            self.rotation =
                self.drag_start_rotation + (x - self.drag_start_x) * self.params.sensitivity;
        }
    }

    /// End a drag, handing any movement since the last tick to inertia.
    pub fn pointer_up(&mut self, now_ms: u64) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.last_interaction_ms = now_ms;
        self.velocity = self.rotation - self.last_tick_rotation;
        self.phase = if self.velocity.abs() >= self.params.epsilon {
            Phase::Inertia
        } else {
            self.velocity = 0.0;
            Phase::Idle
        };
    }

    /// Advance one tick. Returns the rotation applied by this tick alone
    /// (always zero while dragging, since moves rotate directly).
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        match self.phase {
            Phase::Dragging => {
                self.velocity = self.rotation - self.last_tick_rotation;
                self.last_tick_rotation = self.rotation;
                0.0
            }
            Phase::Inertia => {
                if self.velocity.abs() >= self.params.epsilon {
                    let delta = self.velocity;
                    self.rotation += delta;
                    self.velocity *= self.params.friction;
                    delta
                } else {
                    self.velocity = 0.0;
                    self.phase = Phase::Idle;
                    self.idle_tick(now_ms)
                }
            }
            Phase::Idle | Phase::AutoSpin => self.idle_tick(now_ms),
        }
    }

    fn idle_tick(&mut self, now_ms: u64) -> f32 {
        let quiet = now_ms.saturating_sub(self.last_interaction_ms);
        if quiet > self.params.idle_timeout_ms {
            self.phase = Phase::AutoSpin;
            self.rotation += self.params.spin_rate;
            self.params.spin_rate
        } else {
            self.phase = Phase::Idle;
            0.0
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current rotation in degrees (unbounded).
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn params(&self) -> &CarouselParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn carousel() -> Carousel {
        Carousel::new(CarouselParams::default(), 0)
    }

    #[test]
    fn drag_follows_pointer() {
        let mut c = carousel();
        c.pointer_down(100.0, 10);
        c.pointer_move(140.0, 20);
        assert_eq!(c.phase(), Phase::Dragging);
        assert_eq!(c.rotation(), 20.0);

        c.pointer_move(60.0, 30);
        assert_eq!(c.rotation(), -20.0);
        assert_eq!(c.tick(30), 0.0);
    }

    #[test]
    fn drag_is_relative_to_rotation_at_start() {
        let mut c = carousel();
        c.pointer_down(0.0, 0);
        c.pointer_move(20.0, 1);
        c.tick(1);
        c.pointer_up(2);
        for _ in 0..1000 {
            c.tick(3);
        }
        let settled = c.rotation();

        c.pointer_down(500.0, 4);
        c.pointer_move(510.0, 5);
        assert_eq!(c.rotation(), settled + 5.0);
    }

    #[test]
    fn release_decays_geometrically_then_stops() {
        let mut c = carousel();
        c.pointer_down(0.0, 0);
        c.tick(0);
        c.pointer_move(8.0, 0); // 4 degrees since the last tick
        c.pointer_up(0);
        assert_eq!(c.phase(), Phase::Inertia);

        let mut deltas = Vec::new();
        loop {
            let delta = c.tick(0);
            if delta == 0.0 {
                break;
            }
            deltas.push(delta);
        }

        let mut expected = 4.0_f32;
        for delta in &deltas {
            assert!((delta - expected).abs() < 1e-4, "{delta} vs {expected}");
            expected *= 0.95;
        }
        assert!(deltas.windows(2).all(|w| w[1] < w[0]));
        assert!(deltas.last().is_some_and(|d| *d >= 0.01));
        assert!(deltas.last().is_some_and(|d| d * 0.95 < 0.01));

        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.tick(0), 0.0);
        assert_eq!(c.velocity(), 0.0);
    }

    #[test]
    fn velocity_is_measured_per_tick() {
        let mut c = carousel();
        c.pointer_down(0.0, 0);
        c.pointer_move(4.0, 0);
        c.pointer_move(10.0, 0);
        c.tick(0);
        assert_eq!(c.velocity(), 5.0);

        // pointer held still for a tick before release: nothing to carry
        c.tick(0);
        c.pointer_up(0);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.velocity(), 0.0);
    }

    #[test]
    fn auto_spin_waits_for_idle_timeout() {
        let mut c = carousel();
        assert_eq!(c.tick(1000), 0.0);
        assert_eq!(c.tick(2000), 0.0);
        assert_eq!(c.phase(), Phase::Idle);

        assert_eq!(c.tick(2001), 0.12);
        assert_eq!(c.phase(), Phase::AutoSpin);
        c.tick(2017);
        assert!((c.rotation() - 0.24).abs() < 1e-6);
    }

    #[test]
    fn hover_pauses_auto_spin() {
        let mut c = carousel();
        c.tick(5000);
        assert_eq!(c.phase(), Phase::AutoSpin);

        c.pointer_move(42.0, 5010);
        let before = c.rotation();
        assert_eq!(c.tick(5020), 0.0);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.rotation(), before);
    }

    #[test]
    fn reversed_spins_the_other_way() {
        let mut c = Carousel::new(CarouselParams::default().reversed(), 0);
        assert_eq!(c.tick(3000), -0.12);
    }

    #[test]
    fn pointer_down_interrupts_inertia() {
        let mut c = carousel();
        c.pointer_down(0.0, 0);
        c.pointer_move(100.0, 0);
        c.pointer_up(0);
        c.tick(0);
        assert_eq!(c.phase(), Phase::Inertia);

        c.pointer_down(0.0, 1);
        assert_eq!(c.phase(), Phase::Dragging);
        assert_eq!(c.velocity(), 0.0);
        assert_eq!(c.tick(1), 0.0);
    }

    #[test]
    fn pointer_up_without_drag_is_ignored() {
        let mut c = carousel();
        c.pointer_up(10_000);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.tick(10_000), 0.12);
    }
}
