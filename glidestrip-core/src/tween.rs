//! Time-based tween for snap, bounce, and keyboard glides.

use std::time::{Duration, Instant};

/// Interpolation curve. Snap and bounce run linear; keyboard glides ease
/// out (quad), which is a deliberate feel difference rather than an
/// inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic ease-out: fast start, gentle landing.
    EaseOut,
}

fn apply_easing(t: f32, easing: Easing) -> f32 {
    match easing {
        Easing::Linear => t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
    }
}

/// A fixed-duration interpolation from `start` to `target`.
///
/// Sampling is pure: the tween holds its start instant and the caller
/// passes `now`, so tests can replay any timeline.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Build a tween beginning at `started_at`.
    pub fn new(
        start: f32,
        target: f32,
        started_at: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self { start, target, started_at, duration, easing }
    }

    /// Final value of the tween.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Value at `now`; the flag reports completion. A completed tween
    /// always reports its exact target.
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.target, true);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = apply_easing(t, self.easing);
        (self.start + (self.target - self.start) * eased, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_midpoint_is_halfway() {
        let t0 = Instant::now();
        let tween =
            Tween::new(0.0, 100.0, t0, Duration::from_millis(400), Easing::Linear);
        let (value, done) = tween.sample(t0 + Duration::from_millis(200));
        assert!(!done);
        assert!((value - 50.0).abs() < 1e-3);
    }

    #[test]
    fn completes_exactly_at_target() {
        let t0 = Instant::now();
        let tween =
            Tween::new(10.0, 340.0, t0, Duration::from_millis(300), Easing::Linear);
        let (value, done) = tween.sample(t0 + Duration::from_millis(300));
        assert!(done);
        assert_eq!(value, 340.0);
        // sampling before the start clamps to the start value
        let (value, done) = tween.sample(t0);
        assert!(!done);
        assert_eq!(value, 10.0);
    }

    #[test]
    fn ease_out_leads_linear() {
        let t0 = Instant::now();
        let linear =
            Tween::new(0.0, 100.0, t0, Duration::from_millis(400), Easing::Linear);
        let eased =
            Tween::new(0.0, 100.0, t0, Duration::from_millis(400), Easing::EaseOut);
        let at = t0 + Duration::from_millis(100);
        assert!(eased.sample(at).0 > linear.sample(at).0);
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let t0 = Instant::now();
        let tween = Tween::new(5.0, 9.0, t0, Duration::ZERO, Easing::Linear);
        assert_eq!(tween.sample(t0), (9.0, true));
    }
}
