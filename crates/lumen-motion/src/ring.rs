//! Placement of cards around a rotating ring.

/// Ring radius and card size for a viewport width, plus whether the items
/// should be split over two rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingDimensions {
    pub radius: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub split: bool,
}

impl RingDimensions {
    /// Pick dimensions from the viewport width breakpoints.
    pub fn for_viewport(width: f32) -> Self {
        let (radius, card_width, card_height, split) = if width < 480.0 {
            (140.0, 70.0, 95.0, true)
        } else if width < 768.0 {
            (200.0, 85.0, 110.0, true)
        } else if width < 1024.0 {
            (300.0, 100.0, 130.0, true)
        } else {
            (450.0, 120.0, 160.0, false)
        };
        Self {
            radius,
            card_width,
            card_height,
            split,
        }
    }
}

/// Where one card lands for the current rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    pub index: usize,
    /// Resting angle of the card on the ring, in degrees.
    pub angle: f32,
    /// Horizontal offset from the ring centre.
    pub offset_x: f32,
    /// `1.0` facing the viewer, `-1.0` directly behind.
    pub depth: f32,
}

impl CardSlot {
    pub fn faces_viewer(&self) -> bool {
        self.depth > 0.0
    }
}

/// Project `count` evenly spaced cards for `rotation` degrees, ordered back
/// to front so they can be painted in sequence.
pub fn project(count: usize, rotation: f32, radius: f32) -> Vec<CardSlot> {
    if count == 0 {
        return Vec::new();
    }

    let mut slots: Vec<CardSlot> = (0..count)
        .map(|index| {
            let angle = index as f32 * 360.0 / count as f32;
            let theta = (rotation + angle).to_radians();
            CardSlot {
                index,
                angle,
                offset_x: theta.sin() * radius,
                depth: theta.cos(),
            }
        })
        .collect();
    slots.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    slots
}

/// Split into two halves, the first taking the extra item.
pub fn split_items<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn breakpoints() {
        assert_eq!(RingDimensions::for_viewport(320.0).radius, 140.0);
        assert_eq!(RingDimensions::for_viewport(480.0).radius, 200.0);
        assert_eq!(RingDimensions::for_viewport(800.0).card_height, 130.0);
        let wide = RingDimensions::for_viewport(1024.0);
        assert_eq!((wide.radius, wide.card_width, wide.split), (450.0, 120.0, false));
        assert!(RingDimensions::for_viewport(1023.0).split);
    }

    #[test]
    fn cards_are_evenly_spaced() {
        let slots = project(4, 0.0, 100.0);
        let mut angles: Vec<f32> = slots.iter().map(|s| s.angle).collect();
        angles.sort_by(f32::total_cmp);
        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn front_card_is_painted_last() {
        let slots = project(3, 0.0, 100.0);
        let front = slots.last().unwrap();
        assert_eq!(front.index, 0);
        assert!((front.depth - 1.0).abs() < 1e-6);
        assert!(front.offset_x.abs() < 1e-4);
        assert!(slots.windows(2).all(|w| w[0].depth <= w[1].depth));
    }

    #[test]
    fn rotation_moves_cards_sideways() {
        let slots = project(1, 120.0, 100.0);
        assert!((slots[0].offset_x - 86.602_54).abs() < 1e-3);
        assert!((slots[0].depth + 0.5).abs() < 1e-5);
        assert!(!slots[0].faces_viewer());
    }

    #[test]
    fn empty_ring() {
        assert!(project(0, 10.0, 100.0).is_empty());
    }

    #[test]
    fn split_rounds_first_half_up() {
        let items = [1, 2, 3, 4, 5];
        let (a, b) = split_items(&items);
        assert_eq!(a, &[1, 2, 3]);
        assert_eq!(b, &[4, 5]);

        let none: [u8; 0] = [];
        let (a, b) = split_items(&none);
        assert!(a.is_empty() && b.is_empty());
    }
}
