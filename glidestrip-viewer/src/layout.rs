//! Responsive card layout maths.
//!
//! The strip shows three cards per page on wide viewports, two on medium,
//! one on narrow, always with a fixed inter-card gap. These functions are
//! the single source the view and the geometry probe both draw from, so
//! what is rendered and what is measured cannot drift apart.

use glidestrip_core::CardBounds;

use crate::infra::constants::strip;

/// Cards fully visible at once for a given strip viewport width.
pub fn cards_per_page(viewport_width: f32) -> usize {
    if viewport_width >= strip::THREE_UP_MIN_WIDTH {
        3
    } else if viewport_width >= strip::TWO_UP_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Rendered width of one card.
pub fn card_width(viewport_width: f32) -> f32 {
    let per_page = cards_per_page(viewport_width) as f32;
    ((viewport_width - strip::CARD_GAP * (per_page - 1.0)) / per_page).max(1.0)
}

/// Rendered height of one card, from the fixed aspect ratio.
pub fn card_height(viewport_width: f32) -> f32 {
    card_width(viewport_width) / strip::CARD_ASPECT
}

/// Card extents in content coordinates, ready for the geometry probe.
pub fn card_layout(viewport_width: f32, count: usize) -> Vec<CardBounds> {
    let width = card_width(viewport_width);
    (0..count)
        .map(|index| CardBounds {
            left: index as f32 * (width + strip::CARD_GAP),
            width,
        })
        .collect()
}

/// Strip viewport width available inside a window of the given width.
pub fn strip_viewport_width(window_width: f32) -> f32 {
    (window_width - strip::HORIZONTAL_PADDING_TOTAL).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glidestrip_core::measure;

    #[test]
    fn breakpoints_select_page_size() {
        assert_eq!(cards_per_page(1240.0), 3);
        assert_eq!(cards_per_page(800.0), 2);
        assert_eq!(cards_per_page(480.0), 1);
    }

    #[test]
    fn three_up_layout_fills_the_viewport() {
        // (1320 - 60) / 3 = 420 per card
        assert_eq!(card_width(1320.0), 420.0);
        let cards = card_layout(1320.0, 5);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[1].left - cards[0].left - cards[0].width, strip::CARD_GAP);

        // the last page exactly fills the viewport
        let geom = measure(&cards, 1320.0).unwrap();
        assert_eq!(geom.card_step, 450.0);
        assert_eq!(geom.max_scroll, 900.0);
    }

    #[test]
    fn cards_are_taller_than_wide() {
        let width = card_width(1320.0);
        assert!(card_height(1320.0) > width);
    }
}
