//! Terminal rendering of a carousel ring.

use lumen_config::CarouselItem;
use lumen_core::Rgba;
use lumen_motion::{CardSlot, RingDimensions};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::canvas::CELL_WIDTH;

/// Rows taken by one card: top border, label, bottom border.
pub const CARD_ROWS: u16 = 3;

/// A carousel item with its colour already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub label: String,
    pub color: Rgba,
}

impl From<&CarouselItem> for Card {
    fn from(item: &CarouselItem) -> Self {
        Self {
            label: item.label.clone(),
            color: item.rgba(),
        }
    }
}

/// Draws projected cards centred in the area, back to front.
pub struct RingView<'a> {
    slots: &'a [CardSlot],
    cards: &'a [Card],
    dims: RingDimensions,
    backdrop: Rgba,
}

impl<'a> RingView<'a> {
    pub fn new(
        slots: &'a [CardSlot],
        cards: &'a [Card],
        dims: RingDimensions,
        backdrop: Rgba,
    ) -> Self {
        Self {
            slots,
            cards,
            dims,
            backdrop,
        }
    }
}

impl Widget for RingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < CARD_ROWS {
            return;
        }
        let width = ((self.dims.card_width / CELL_WIDTH).round() as u16).max(3);
        let top = area.y + (area.height - CARD_ROWS) / 2;
        let center = area.x as f32 + area.width as f32 / 2.0;

        for slot in self.slots {
            let Some(card) = self.cards.get(slot.index) else {
                continue;
            };
            let left = (center + slot.offset_x / CELL_WIDTH - width as f32 / 2.0).round() as i32;
            draw_card(buf, area, left, top, width, card, slot.depth, self.backdrop);
        }
    }
}

/// Fade from 0.25 at the back of the ring to 1.0 at the front.
fn depth_alpha(depth: f32) -> f32 {
    0.25 + 0.75 * (depth.clamp(-1.0, 1.0) + 1.0) / 2.0
}

#[allow(clippy::too_many_arguments)]
fn draw_card(
    buf: &mut Buffer,
    area: Rect,
    left: i32,
    top: u16,
    width: u16,
    card: &Card,
    depth: f32,
    backdrop: Rgba,
) {
    let color = card.color.with_alpha(depth_alpha(depth));
    let mut style = Style::new()
        .fg(color.to_color(backdrop))
        .bg(backdrop.to_color(backdrop));
    if depth > 0.5 {
        style = style.add_modifier(Modifier::BOLD);
    }

    let inner = width.saturating_sub(2) as usize;
    let label: Vec<char> = card.label.chars().take(inner).collect();
    let pad = (inner - label.len()) / 2;

    for dx in 0..width {
        let x = left + dx as i32;
        if x < area.left() as i32 || x >= area.right() as i32 {
            continue;
        }
        let x = x as u16;
        let last = dx + 1 == width;
        let (upper, middle, lower) = match (dx, last) {
            (0, _) => ('╭', '│', '╰'),
            (_, true) => ('╮', '│', '╯'),
            _ => {
                let i = (dx - 1) as usize;
                let ch = i
                    .checked_sub(pad)
                    .and_then(|i| label.get(i))
                    .copied()
                    .unwrap_or(' ');
                ('─', ch, '─')
            }
        };
        for (row, ch) in [upper, middle, lower].into_iter().enumerate() {
            if let Some(cell) = buf.cell_mut((x, top + row as u16)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}
