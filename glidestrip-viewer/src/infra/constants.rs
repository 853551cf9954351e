//! Viewer constants.
//!
//! Layout, cadence, and hero timing live here so the view, update, and
//! subscription code stay in agreement. Gesture-feel constants belong to
//! `glidestrip_core::StripTuning`, not this file.

/// Strip layout.
pub mod strip {
    /// Fixed gap between cards, px.
    pub const CARD_GAP: f32 = 30.0;
    /// Card aspect ratio (width / height).
    pub const CARD_ASPECT: f32 = 6.0 / 7.0;
    /// Viewports at least this wide show three cards per page.
    pub const THREE_UP_MIN_WIDTH: f32 = 1024.0;
    /// Viewports at least this wide show two cards per page.
    pub const TWO_UP_MIN_WIDTH: f32 = 640.0;
    /// Horizontal padding applied on each side of the strip container.
    pub const HORIZONTAL_PADDING_SIDE: f32 = 20.0;
    /// Total horizontal padding (left + right).
    pub const HORIZONTAL_PADDING_TOTAL: f32 = HORIZONTAL_PADDING_SIDE * 2.0;
    /// Vertical gap between the hero, header, and strip sections.
    pub const SECTION_GAP: f32 = 24.0;
}

/// Frame-tick cadence for the update loop.
pub mod ticks {
    /// Tick interval while something animates (~120 FPS).
    pub const FAST_TICK_NS: u64 = 8_333_333;
    /// Relaxed interval for hero holds and wheel-settle bookkeeping (ms).
    pub const IDLE_TICK_MS: u64 = 120;
}

/// Hero banner rotation timing.
pub mod hero {
    /// How long each image rests fully opaque (ms).
    pub const HOLD_MS: u64 = 5_000;
    /// Crossfade duration between images (ms).
    pub const FADE_MS: u64 = 800;
    /// Rendered banner height, px.
    pub const HEIGHT: f32 = 320.0;
}

/// Initial window dimensions.
pub mod window {
    pub const WIDTH: f32 = 1280.0;
    pub const HEIGHT: f32 = 900.0;
}
