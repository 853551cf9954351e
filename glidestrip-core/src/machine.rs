//! The drag-strip state machine.
//!
//! One phase at a time: `Idle → Dragging → (Momentum | Snapping | Bouncing)
//! → Idle`, plus `Gliding` for eased keyboard steps. The phase IS the
//! animation handle — pointer-down replaces it wholesale, so a stale
//! momentum loop and a fresh drag can never both write the offset.
//!
//! All operations that depend on layout take `Option<&TrackGeometry>` and
//! no-op on `None`; see [`crate::geometry::measure`].

use std::time::Instant;

use crate::config::StripTuning;
use crate::geometry::TrackGeometry;
use crate::gesture::GestureSession;
use crate::overscroll::{Overscroll, rubber_band};
use crate::tween::{Easing, Tween};

/// Discriminant view of the machine's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Settled; nothing moving.
    Idle,
    /// Pointer held; offset follows the finger.
    Dragging,
    /// Post-release inertial deceleration.
    Momentum,
    /// Linear tween to the nearest card boundary.
    Snapping,
    /// Rubber-band relaxation back to a clamped boundary.
    Bouncing,
    /// Eased keyboard step.
    Gliding,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Idle,
    Dragging(GestureSession),
    Momentum { velocity: f32, last_tick: Instant },
    Snapping(Tween),
    Bouncing { scroll: Tween, excess: Tween, toward_left: bool },
    Gliding(Tween),
}

/// Pointer-driven horizontal strip: drag panning, momentum, rubber-band
/// overscroll, and snap-to-card settling behind a single owned phase.
///
/// The host feeds events and per-frame ticks in, and renders
/// [`scroll_offset`](Self::scroll_offset) plus
/// [`overscroll`](Self::overscroll)`.shift()` out. State is single-writer
/// and never shared across instances.
#[derive(Debug, Clone)]
pub struct DragStrip {
    tuning: StripTuning,
    scroll: f32,
    overscroll: Overscroll,
    mode: Mode,
}

impl DragStrip {
    /// A settled strip at offset zero.
    pub fn new(tuning: StripTuning) -> Self {
        Self {
            tuning,
            scroll: 0.0,
            overscroll: Overscroll::default(),
            mode: Mode::Idle,
        }
    }

    /// Active tuning constants.
    pub fn tuning(&self) -> &StripTuning {
        &self.tuning
    }

    /// Current logical scroll offset. Stays inside `[0, max_scroll]`; the
    /// rubber-band pull is reported separately.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    /// Current rubber-band state.
    pub fn overscroll(&self) -> Overscroll {
        self.overscroll
    }

    /// Discriminant of the current mode.
    pub fn phase(&self) -> Phase {
        match self.mode {
            Mode::Idle => Phase::Idle,
            Mode::Dragging(_) => Phase::Dragging,
            Mode::Momentum { .. } => Phase::Momentum,
            Mode::Snapping(_) => Phase::Snapping,
            Mode::Bouncing { .. } => Phase::Bouncing,
            Mode::Gliding(_) => Phase::Gliding,
        }
    }

    /// Whether an animation phase wants per-frame ticks.
    pub fn needs_frames(&self) -> bool {
        matches!(
            self.mode,
            Mode::Momentum { .. }
                | Mode::Snapping(_)
                | Mode::Bouncing { .. }
                | Mode::Gliding(_)
        )
    }

    /// Begin a drag. Supersedes any in-flight animation before the new
    /// gesture state is established.
    pub fn pointer_down(&mut self, pointer_x: f32, now: Instant) {
        if self.needs_frames() {
            log::trace!("pointer down supersedes {:?}", self.phase());
        }
        self.mode = Mode::Dragging(GestureSession::begin(pointer_x, self.scroll, now));
    }

    /// Track a pointer sample while dragging. No-op outside `Dragging` or
    /// without geometry.
    pub fn pointer_move(
        &mut self,
        pointer_x: f32,
        now: Instant,
        geom: Option<&TrackGeometry>,
    ) {
        let Some(geom) = geom else { return };
        let Mode::Dragging(mut session) = self.mode else { return };

        let dx = session.track(pointer_x, now, self.tuning.velocity_smoothing);
        let intended = session.start_scroll() - dx;
        let (scroll, overscroll) = rubber_band(intended, geom);
        self.scroll = scroll;
        self.overscroll = overscroll;
        self.mode = Mode::Dragging(session);
    }

    /// End the drag. Pointer-up, -cancel, and -leave all land here: release
    /// while overscrolled bounces back, a fast enough release coasts, and
    /// everything else snaps to the nearest card.
    pub fn pointer_up(&mut self, now: Instant, geom: Option<&TrackGeometry>) {
        let session = match std::mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Dragging(session) => session,
            other => {
                self.mode = other;
                return;
            }
        };
        let Some(geom) = geom else {
            self.overscroll = Overscroll::default();
            return;
        };

        if self.overscroll.engaged() {
            self.start_bounce(now, geom);
        } else if session.velocity().abs() > self.tuning.release_velocity_threshold
            && session.total_displacement()
                > self.tuning.release_displacement_threshold
        {
            log::trace!(
                "release at {:.1} px/ms after {:.1} px; entering momentum",
                session.velocity(),
                session.total_displacement()
            );
            self.mode = Mode::Momentum { velocity: session.velocity(), last_tick: now };
        } else {
            self.start_snap(now, geom);
        }
    }

    /// Redirect a wheel delta into horizontal scroll. Vertical-dominant
    /// deltas pan the strip and report `true` so the host suppresses its
    /// default scrolling; horizontal-dominant deltas are left alone.
    pub fn wheel(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        geom: Option<&TrackGeometry>,
    ) -> bool {
        if delta_y.abs() < delta_x.abs() {
            return false;
        }
        let Some(geom) = geom else { return false };
        if matches!(self.mode, Mode::Dragging(_)) {
            return false;
        }

        // Wheel input supersedes a running animation just like a new drag.
        self.mode = Mode::Idle;
        self.overscroll = Overscroll::default();
        self.scroll = geom.clamp(self.scroll + delta_y);
        true
    }

    /// Glide by a keyboard step (+1 right, -1 left): 90% of the viewport
    /// with an eased tween. Rapid presses chain off the in-flight target.
    pub fn key_step(
        &mut self,
        direction: i32,
        now: Instant,
        geom: Option<&TrackGeometry>,
    ) {
        let Some(geom) = geom else { return };
        if matches!(self.mode, Mode::Dragging(_)) {
            return;
        }

        let step = geom.viewport_width * self.tuning.keyboard_step_fraction;
        let base = match self.mode {
            Mode::Gliding(tween) => tween.target(),
            _ => self.scroll,
        };
        let target = geom.clamp(base + direction.signum() as f32 * step);
        let distance = (target - self.scroll).abs();
        if distance < self.tuning.settle_epsilon {
            return;
        }

        self.overscroll = Overscroll::default();
        self.mode = Mode::Gliding(Tween::new(
            self.scroll,
            target,
            now,
            self.tuning.snap_duration(distance),
            Easing::EaseOut,
        ));
    }

    /// Begin a snap from rest; used by hosts to settle after wheel input.
    /// No-op unless idle.
    pub fn snap_to_nearest(&mut self, now: Instant, geom: Option<&TrackGeometry>) {
        if !matches!(self.mode, Mode::Idle) {
            return;
        }
        let Some(geom) = geom else { return };
        self.start_snap(now, geom);
    }

    /// Adopt an offset reported by the host's scroll container (e.g. a
    /// trackpad scrolling it natively). Only honored while idle so the
    /// machine-driven phases stay the single writer.
    pub fn sync_external_scroll(&mut self, offset: f32, geom: Option<&TrackGeometry>) {
        if !matches!(self.mode, Mode::Idle) {
            return;
        }
        let Some(geom) = geom else { return };
        self.scroll = geom.clamp(offset);
    }

    /// Advance the active phase one frame. Returns `true` while further
    /// frames are needed.
    pub fn tick(&mut self, now: Instant, geom: Option<&TrackGeometry>) -> bool {
        let Some(geom) = geom else {
            return self.settle_without_geometry();
        };

        match self.mode {
            Mode::Idle | Mode::Dragging(_) => false,
            Mode::Momentum { velocity, last_tick } => {
                let dt_ms = (now.saturating_duration_since(last_tick).as_secs_f32()
                    * 1000.0)
                    .min(self.tuning.max_momentum_step_ms);
                let velocity = velocity * self.tuning.friction_decay(dt_ms);

                if velocity.abs() < self.tuning.momentum_stop_threshold {
                    if self.overscroll.engaged() {
                        self.start_bounce(now, geom);
                    } else {
                        self.start_snap(now, geom);
                    }
                    self.needs_frames()
                } else {
                    let intended = self.scroll - velocity * dt_ms;
                    let (scroll, overscroll) = rubber_band(intended, geom);
                    self.scroll = scroll;
                    self.overscroll = overscroll;
                    self.mode = Mode::Momentum { velocity, last_tick: now };
                    true
                }
            }
            Mode::Snapping(tween) | Mode::Gliding(tween) => {
                let (value, done) = tween.sample(now);
                self.scroll = value;
                if done {
                    self.mode = Mode::Idle;
                }
                !done
            }
            Mode::Bouncing { scroll, excess, toward_left } => {
                let (scroll_value, scroll_done) = scroll.sample(now);
                let (excess_value, excess_done) = excess.sample(now);
                self.scroll = scroll_value;
                self.overscroll = if toward_left {
                    Overscroll { left: excess_value.max(0.0), right: 0.0 }
                } else {
                    Overscroll { left: 0.0, right: excess_value.max(0.0) }
                };

                if scroll_done && excess_done {
                    self.overscroll = Overscroll::default();
                    self.mode = Mode::Idle;
                    false
                } else {
                    true
                }
            }
        }
    }

    /// Relax the rubber band back to the nearest clamped boundary, excess
    /// and offset in parallel over one distance-derived duration.
    fn start_bounce(&mut self, now: Instant, geom: &TrackGeometry) {
        let toward_left = self.overscroll.left > 0.0;
        let boundary = if toward_left { 0.0 } else { geom.max_scroll };
        let excess = self.overscroll.magnitude();
        let distance = excess + (self.scroll - boundary).abs();
        let duration = self.tuning.bounce_duration(distance);

        self.mode = Mode::Bouncing {
            scroll: Tween::new(self.scroll, boundary, now, duration, Easing::Linear),
            excess: Tween::new(excess, 0.0, now, duration, Easing::Linear),
            toward_left,
        };
    }

    fn start_snap(&mut self, now: Instant, geom: &TrackGeometry) {
        let target = geom.snap_target(self.scroll);
        let distance = (target - self.scroll).abs();
        if distance < self.tuning.settle_epsilon {
            // already on a boundary: land exactly, skip the tween
            self.scroll = target;
            self.mode = Mode::Idle;
            return;
        }
        self.mode = Mode::Snapping(Tween::new(
            self.scroll,
            target,
            now,
            self.tuning.snap_duration(distance),
            Easing::Linear,
        ));
    }

    /// Layout vanished mid-flight (cards unmounted, zero-width viewport).
    /// Settle in place so the stop condition stays reachable instead of
    /// ticking no-ops forever.
    fn settle_without_geometry(&mut self) -> bool {
        if self.needs_frames() {
            log::debug!("geometry unavailable during {:?}; settling", self.phase());
            self.overscroll = Overscroll::default();
            self.mode = Mode::Idle;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CardBounds, measure};
    use std::time::Duration;

    fn geometry() -> TrackGeometry {
        let cards: Vec<_> = (0..5)
            .map(|i| CardBounds { left: i as f32 * 330.0, width: 300.0 })
            .collect();
        measure(&cards, 900.0).unwrap()
    }

    #[test]
    fn pointer_down_supersedes_animation() {
        let geom = geometry();
        let t0 = Instant::now();
        let mut strip = DragStrip::new(StripTuning::default());

        strip.key_step(1, t0, Some(&geom));
        assert_eq!(strip.phase(), Phase::Gliding);

        strip.pointer_down(500.0, t0 + Duration::from_millis(50));
        assert_eq!(strip.phase(), Phase::Dragging);
        assert!(!strip.needs_frames());
    }

    #[test]
    fn stationary_release_snaps_without_momentum() {
        let geom = geometry();
        let t0 = Instant::now();
        let mut strip = DragStrip::new(StripTuning::default());

        strip.pointer_down(500.0, t0);
        strip.pointer_move(495.0, t0 + Duration::from_millis(16), Some(&geom));
        // hold still so the moving average dies off
        for i in 2..12 {
            strip.pointer_move(
                495.0,
                t0 + Duration::from_millis(16 * i),
                Some(&geom),
            );
        }
        strip.pointer_up(t0 + Duration::from_millis(200), Some(&geom));
        // 5 px from origin rounds back to index 0
        assert_eq!(strip.phase(), Phase::Snapping);
        let mut now = t0 + Duration::from_millis(200);
        while strip.tick(now, Some(&geom)) {
            now += Duration::from_millis(8);
        }
        assert_eq!(strip.scroll_offset(), 0.0);
        assert_eq!(strip.phase(), Phase::Idle);
    }

    #[test]
    fn release_without_geometry_goes_idle() {
        let t0 = Instant::now();
        let mut strip = DragStrip::new(StripTuning::default());
        strip.pointer_down(500.0, t0);
        strip.pointer_up(t0 + Duration::from_millis(10), None);
        assert_eq!(strip.phase(), Phase::Idle);
        assert!(!strip.overscroll().engaged());
    }

    #[test]
    fn wheel_redirects_vertical_dominant_deltas() {
        let geom = geometry();
        let mut strip = DragStrip::new(StripTuning::default());

        assert!(strip.wheel(0.0, 120.0, Some(&geom)));
        assert_eq!(strip.scroll_offset(), 120.0);

        // horizontal-dominant deltas are not consumed
        assert!(!strip.wheel(120.0, 3.0, Some(&geom)));
        assert_eq!(strip.scroll_offset(), 120.0);

        // clamped at the ends
        assert!(strip.wheel(0.0, 10_000.0, Some(&geom)));
        assert_eq!(strip.scroll_offset(), geom.max_scroll);
    }

    #[test]
    fn key_steps_chain_off_the_inflight_target() {
        let geom = geometry();
        let t0 = Instant::now();
        let mut strip = DragStrip::new(StripTuning::default());

        strip.key_step(1, t0, Some(&geom));
        let Phase::Gliding = strip.phase() else { panic!("expected glide") };
        strip.tick(t0 + Duration::from_millis(50), Some(&geom));
        strip.key_step(1, t0 + Duration::from_millis(60), Some(&geom));

        // 0.9 * 900 = 810 twice, clamped to the range end
        let mut now = t0 + Duration::from_millis(60);
        while strip.tick(now, Some(&geom)) {
            now += Duration::from_millis(8);
        }
        assert_eq!(strip.scroll_offset(), geom.max_scroll);
    }

    #[test]
    fn geometry_loss_mid_momentum_settles() {
        let geom = geometry();
        let t0 = Instant::now();
        let mut strip = DragStrip::new(StripTuning::default());

        strip.pointer_down(900.0, t0);
        strip.pointer_move(860.0, t0 + Duration::from_millis(8), Some(&geom));
        strip.pointer_move(820.0, t0 + Duration::from_millis(16), Some(&geom));
        strip.pointer_up(t0 + Duration::from_millis(16), Some(&geom));
        assert_eq!(strip.phase(), Phase::Momentum);

        assert!(!strip.tick(t0 + Duration::from_millis(24), None));
        assert_eq!(strip.phase(), Phase::Idle);
    }
}
