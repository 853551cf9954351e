//! Tunable constants for strip gesture feel.
//!
//! The drag/momentum/snap engine went through several divergent tunings
//! before settling; everything adjustable lives in this one struct so a host
//! can ship a different feel without forking the state machine.

use std::time::Duration;

/// Configuration for a [`crate::DragStrip`].
///
/// Velocities are in px/ms, distances in px, durations in ms. The defaults
/// are the shipped gallery feel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StripTuning {
    /// Fraction of velocity retained per frame-equivalent during momentum.
    pub friction_per_frame: f32,
    /// Length of one frame-equivalent (ms); friction is scaled to real dt
    /// through this so decay is tick-rate independent.
    pub frame_equivalent_ms: f32,
    /// Largest dt (ms) integrated in a single momentum step. Frame drops are
    /// clamped to this instead of teleporting the strip.
    pub max_momentum_step_ms: f32,
    /// Weight of the previous smoothed velocity in the moving average; the
    /// remainder goes to the instantaneous sample.
    pub velocity_smoothing: f32,
    /// Release speed (px/ms) above which momentum starts.
    pub release_velocity_threshold: f32,
    /// Minimum drag displacement (px) for a release to count as movement.
    pub release_displacement_threshold: f32,
    /// Speed (px/ms) below which momentum stops and settling begins.
    pub momentum_stop_threshold: f32,
    /// Animation milliseconds per pixel of travel.
    pub duration_per_px: f32,
    /// Lower bound on snap tween duration (ms).
    pub snap_min_ms: f32,
    /// Upper bound on snap tween duration (ms).
    pub snap_max_ms: f32,
    /// Lower bound on bounce tween duration (ms).
    pub bounce_min_ms: f32,
    /// Upper bound on bounce tween duration (ms).
    pub bounce_max_ms: f32,
    /// Distances under this settle instantly, and exactly, without a tween.
    pub settle_epsilon: f32,
    /// Fraction of the viewport width covered by one keyboard step.
    pub keyboard_step_fraction: f32,
    /// Quiet window after wheel input before the host should snap (ms).
    pub wheel_settle_ms: u64,
}

impl Default for StripTuning {
    fn default() -> Self {
        Self {
            friction_per_frame: 0.94,
            frame_equivalent_ms: 1000.0 / 60.0,
            max_momentum_step_ms: 20.0,
            velocity_smoothing: 0.7,
            release_velocity_threshold: 0.05,
            release_displacement_threshold: 0.5,
            momentum_stop_threshold: 0.08,
            duration_per_px: 0.6,
            snap_min_ms: 300.0,
            snap_max_ms: 600.0,
            bounce_min_ms: 260.0,
            bounce_max_ms: 560.0,
            settle_epsilon: 1.0,
            keyboard_step_fraction: 0.9,
            wheel_settle_ms: 160,
        }
    }
}

impl StripTuning {
    /// Snap tween duration for a given travel distance: scales with distance
    /// but is bounded so long jumps stay brisk and short ones stay gentle.
    pub fn snap_duration(&self, distance: f32) -> Duration {
        let ms = (distance.abs() * self.duration_per_px)
            .clamp(self.snap_min_ms, self.snap_max_ms);
        Duration::from_secs_f32(ms / 1000.0)
    }

    /// Bounce tween duration for a given travel distance.
    pub fn bounce_duration(&self, distance: f32) -> Duration {
        let ms = (distance.abs() * self.duration_per_px)
            .clamp(self.bounce_min_ms, self.bounce_max_ms);
        Duration::from_secs_f32(ms / 1000.0)
    }

    /// Velocity decay factor for a real dt, normalized to frame-equivalents.
    pub(crate) fn friction_decay(&self, dt_ms: f32) -> f32 {
        self.friction_per_frame
            .powf(dt_ms / self.frame_equivalent_ms.max(1.0))
    }
}
