//! Gesture, momentum, and snap engine for a pointer-driven horizontal card
//! strip.
//!
//! The crate is host-agnostic: it knows nothing about windows, widgets, or
//! renderers. A host feeds it pointer samples, wheel deltas, keyboard steps,
//! and per-frame ticks (each carrying an [`std::time::Instant`]), and reads
//! back a scroll offset plus a rubber-band translation to apply to its
//! content layer. Because time is injected rather than sampled internally,
//! every behavior is deterministic under test.
//!
//! The moving parts:
//!
//! - [`geometry::measure`] probes the rendered card layout and derives the
//!   snap step and scroll range, returning `None` when the layout is
//!   unusable (fewer than two cards, non-finite dimensions). Every
//!   geometry-dependent operation degrades to a no-op on `None`.
//! - [`machine::DragStrip`] owns the single gesture/animation phase:
//!   `Idle → Dragging → (Momentum | Snapping | Bouncing) → Idle`, with
//!   `Gliding` for eased keyboard steps. A new pointer-down supersedes
//!   whatever is in flight, so two animation chains can never fight over the
//!   offset.
//! - [`config::StripTuning`] gathers every tunable constant (friction,
//!   velocity thresholds, duration bounds) in one place.

pub mod config;
pub mod geometry;
pub mod gesture;
pub mod machine;
pub mod overscroll;
pub mod tween;

pub use config::StripTuning;
pub use geometry::{CardBounds, TrackGeometry, measure};
pub use machine::{DragStrip, Phase};
pub use overscroll::Overscroll;
