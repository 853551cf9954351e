//! Track geometry probe.
//!
//! The strip never caches layout: the probe is cheap enough to run on every
//! pointer event and frame, and card sizes change whenever the viewport
//! resizes. Hosts pass the rendered card extents in; the probe derives the
//! snap step from the first two cards and the scroll range from the last.

/// Rendered extent of one card within the content layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    /// Left edge of the card, in content coordinates.
    pub left: f32,
    /// Rendered width of the card.
    pub width: f32,
}

/// Snapshot of the measurable track layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Width of the visible viewport.
    pub viewport_width: f32,
    /// Total width of the card content, gaps included.
    pub content_width: f32,
    /// Card width plus inter-card gap; the fundamental snap unit.
    pub card_step: f32,
    /// Largest settled scroll offset: `content_width - viewport_width`,
    /// clamped to zero when the content fits.
    pub max_scroll: f32,
    /// Largest card index the strip may snap to.
    pub max_snap_index: usize,
    /// Number of cards in the strip.
    pub card_count: usize,
}

/// Probe the rendered layout and derive the track geometry.
///
/// Returns `None` when fewer than two cards are rendered, any measured
/// dimension is non-finite, or the derived step is non-positive. Callers
/// must treat `None` as "no geometry" and no-op rather than divide by zero.
/// For an unchanged layout the result is identical call over call.
pub fn measure(cards: &[CardBounds], viewport_width: f32) -> Option<TrackGeometry> {
    let (first, second) = match (cards.first(), cards.get(1)) {
        (Some(first), Some(second)) => (*first, *second),
        _ => return None,
    };
    let last = *cards.last()?;

    let measured = [
        first.left,
        first.width,
        second.left,
        last.left,
        last.width,
        viewport_width,
    ];
    if measured.iter().any(|value| !value.is_finite()) {
        return None;
    }
    if viewport_width <= 0.0 || first.width <= 0.0 {
        return None;
    }

    let gap = (second.left - first.left - first.width).max(0.0);
    let card_step = first.width + gap;
    if card_step <= 0.0 {
        return None;
    }

    let content_width = last.left + last.width;
    let max_scroll = (content_width - viewport_width).max(0.0);
    let max_snap_index =
        ((max_scroll / card_step).round() as usize).min(cards.len() - 1);

    Some(TrackGeometry {
        viewport_width,
        content_width,
        card_step,
        max_scroll,
        max_snap_index,
        card_count: cards.len(),
    })
}

impl TrackGeometry {
    /// Nearest card-aligned offset for `scroll`, clamped to the snappable
    /// index range.
    pub fn snap_target(&self, scroll: f32) -> f32 {
        let index = (scroll / self.card_step)
            .round()
            .clamp(0.0, self.max_snap_index as f32);
        index * self.card_step
    }

    /// Clamp an offset into the settled scroll range.
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five 300 px cards with a 30 px gap.
    fn five_cards() -> Vec<CardBounds> {
        (0..5)
            .map(|i| CardBounds { left: i as f32 * 330.0, width: 300.0 })
            .collect()
    }

    #[test]
    fn derives_step_range_and_snap_index() {
        let geom = measure(&five_cards(), 900.0).unwrap();
        assert_eq!(geom.card_step, 330.0);
        assert_eq!(geom.content_width, 1620.0);
        assert_eq!(geom.max_scroll, 720.0);
        assert_eq!(geom.max_snap_index, 2);
    }

    #[test]
    fn needs_two_cards() {
        assert!(measure(&[], 900.0).is_none());
        let one = [CardBounds { left: 0.0, width: 300.0 }];
        assert!(measure(&one, 900.0).is_none());
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let mut cards = five_cards();
        assert!(measure(&cards, 0.0).is_none());
        assert!(measure(&cards, f32::NAN).is_none());
        cards[0].width = f32::INFINITY;
        assert!(measure(&cards, 900.0).is_none());
        let zero_width: Vec<_> = (0..5)
            .map(|i| CardBounds { left: i as f32 * 330.0, width: 0.0 })
            .collect();
        assert!(measure(&zero_width, 900.0).is_none());
    }

    #[test]
    fn negative_gap_is_clamped() {
        // overlapping cards still yield a usable step
        let cards = [
            CardBounds { left: 0.0, width: 300.0 },
            CardBounds { left: 250.0, width: 300.0 },
        ];
        let geom = measure(&cards, 400.0).unwrap();
        assert_eq!(geom.card_step, 300.0);
    }

    #[test]
    fn measure_is_idempotent_for_unchanged_layout() {
        let cards = five_cards();
        let a = measure(&cards, 900.0);
        let b = measure(&cards, 900.0);
        assert_eq!(a, b);
    }

    #[test]
    fn snap_target_rounds_and_clamps() {
        let geom = measure(&five_cards(), 900.0).unwrap();
        assert_eq!(geom.snap_target(700.0), 660.0);
        assert_eq!(geom.snap_target(-40.0), 0.0);
        assert_eq!(geom.snap_target(5000.0), 660.0);
        assert_eq!(geom.snap_target(165.0), 330.0);
    }

    #[test]
    fn short_content_has_zero_range() {
        let cards = [
            CardBounds { left: 0.0, width: 100.0 },
            CardBounds { left: 130.0, width: 100.0 },
        ];
        let geom = measure(&cards, 900.0).unwrap();
        assert_eq!(geom.max_scroll, 0.0);
        assert_eq!(geom.snap_target(50.0), 0.0);
    }
}
