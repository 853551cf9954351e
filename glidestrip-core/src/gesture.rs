//! Pointer sample bookkeeping for an active drag.

use std::time::Instant;

/// Transient record of one pointer drag, alive from press to release.
///
/// Velocity is a signed px/ms moving average over the incoming samples;
/// zero-dt samples (duplicate timestamps from coalesced events) are folded
/// into position but skipped for velocity.
#[derive(Debug, Clone, Copy)]
pub struct GestureSession {
    start_pointer_x: f32,
    start_scroll: f32,
    last_pointer_x: f32,
    last_sample: Instant,
    smoothed_velocity: f32,
    total_displacement: f32,
}

impl GestureSession {
    /// Open a session at the press point.
    pub fn begin(pointer_x: f32, scroll: f32, now: Instant) -> Self {
        Self {
            start_pointer_x: pointer_x,
            start_scroll: scroll,
            last_pointer_x: pointer_x,
            last_sample: now,
            smoothed_velocity: 0.0,
            total_displacement: 0.0,
        }
    }

    /// Fold one pointer sample into the session and return the displacement
    /// from the press point.
    pub fn track(&mut self, pointer_x: f32, now: Instant, smoothing: f32) -> f32 {
        let dx = pointer_x - self.start_pointer_x;
        self.total_displacement = dx.abs();

        let dt_ms =
            now.saturating_duration_since(self.last_sample).as_secs_f32() * 1000.0;
        if dt_ms > 0.0 {
            let instantaneous = (pointer_x - self.last_pointer_x) / dt_ms;
            self.smoothed_velocity = self.smoothed_velocity * smoothing
                + instantaneous * (1.0 - smoothing);
        }

        self.last_pointer_x = pointer_x;
        self.last_sample = now;
        dx
    }

    /// Scroll offset captured at the press.
    pub fn start_scroll(&self) -> f32 {
        self.start_scroll
    }

    /// Smoothed pointer velocity, signed px/ms.
    pub fn velocity(&self) -> f32 {
        self.smoothed_velocity
    }

    /// Absolute displacement from the press point, px.
    pub fn total_displacement(&self) -> f32 {
        self.total_displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn averages_velocity_over_samples() {
        let t0 = Instant::now();
        let mut session = GestureSession::begin(100.0, 0.0, t0);

        // 10 px in 10 ms -> instantaneous 1.0 px/ms, EMA from rest: 0.3
        session.track(110.0, t0 + Duration::from_millis(10), 0.7);
        assert!((session.velocity() - 0.3).abs() < 1e-6);

        // same speed again: 0.3 * 0.7 + 1.0 * 0.3 = 0.51
        session.track(120.0, t0 + Duration::from_millis(20), 0.7);
        assert!((session.velocity() - 0.51).abs() < 1e-6);
        assert!((session.total_displacement() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn zero_dt_sample_keeps_velocity() {
        let t0 = Instant::now();
        let mut session = GestureSession::begin(100.0, 0.0, t0);
        session.track(110.0, t0 + Duration::from_millis(10), 0.7);
        let before = session.velocity();

        // duplicate timestamp: position folds in, velocity untouched
        let dx = session.track(130.0, t0 + Duration::from_millis(10), 0.7);
        assert_eq!(dx, 30.0);
        assert_eq!(session.velocity(), before);
    }

    #[test]
    fn displacement_tracks_press_point_not_path() {
        let t0 = Instant::now();
        let mut session = GestureSession::begin(100.0, 50.0, t0);
        session.track(160.0, t0 + Duration::from_millis(16), 0.7);
        session.track(90.0, t0 + Duration::from_millis(32), 0.7);
        assert!((session.total_displacement() - 10.0).abs() < 1e-6);
        assert_eq!(session.start_scroll(), 50.0);
    }
}
