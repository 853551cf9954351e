//! Rubber-band boundary policy.

use crate::geometry::TrackGeometry;

/// Elastic pull beyond the clamped scroll range.
///
/// At most one side is engaged at a time, and each side is capped at one
/// card step so the band never reveals more than one extra card-width of
/// slack. The pull is rendered as a translation of the content layer; it is
/// never written into the scroll offset itself.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Overscroll {
    /// Pull past the start of the strip, px (>= 0).
    pub left: f32,
    /// Pull past the end of the strip, px (>= 0).
    pub right: f32,
}

impl Overscroll {
    /// Whether either side is pulled.
    pub fn engaged(&self) -> bool {
        self.left > 0.0 || self.right > 0.0
    }

    /// Signed horizontal shift of the content layer; positive moves the
    /// content right.
    pub fn shift(&self) -> f32 {
        self.left - self.right
    }

    /// Pull distance of whichever side is engaged.
    pub fn magnitude(&self) -> f32 {
        self.left.max(self.right)
    }
}

/// Clamp `intended` into the track range, routing the excess into the
/// rubber band. The same function serves live drags and per-frame momentum
/// projections.
pub fn rubber_band(intended: f32, geom: &TrackGeometry) -> (f32, Overscroll) {
    if intended < 0.0 {
        let excess = (-intended).min(geom.card_step);
        (0.0, Overscroll { left: excess, right: 0.0 })
    } else if intended > geom.max_scroll {
        let excess = (intended - geom.max_scroll).min(geom.card_step);
        (geom.max_scroll, Overscroll { left: 0.0, right: excess })
    } else {
        (intended, Overscroll::default())
    }
}
