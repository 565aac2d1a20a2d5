//! Pointer position as seen by a particle field.

/// Coordinate used while no pointer is over the surface. Far enough away that
/// no particle is ever inside the interaction radius.
const AWAY: f32 = -1000.0;

/// Last known pointer position plus the radius inside which it repels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl PointerState {
    /// A pointer that is not over the surface.
    pub fn away(radius: f32) -> Self {
        Self {
            x: AWAY,
            y: AWAY,
            radius,
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Park the pointer off-surface.
    pub fn leave(&mut self) {
        self.x = AWAY;
        self.y = AWAY;
    }

    pub fn is_away(&self) -> bool {
        self.x == AWAY && self.y == AWAY
    }

    /// Euclidean distance from the pointer to `(x, y)`.
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}
