// SPDX-License-Identifier: MPL-2.0
//! Time-based transitions for overlay entry and exit.
//!
//! Transitions are driven by wall-clock instants rather than frame counts so
//! that a dropped tick never changes the outcome, only the smoothness.

use std::time::{Duration, Instant};

/// Easing curve applied to a linear progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Fast start, soft landing: `1 - 2^(-10t)`.
    #[default]
    ExponentialOut,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// A transition that started at a fixed instant and lasts a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    #[must_use]
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    /// Linear progress in `0.0..=1.0`. Zero-length transitions are complete
    /// immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased progress in `0.0..=1.0`.
    #[must_use]
    pub fn eased(&self, now: Instant, easing: Easing) -> f32 {
        easing.apply(self.progress(now))
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_clamped_at_both_ends() {
        assert_eq!(Easing::ExponentialOut.apply(-1.0), 0.0);
        assert_eq!(Easing::ExponentialOut.apply(2.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }

    #[test]
    fn exponential_out_front_loads_progress() {
        assert!(Easing::ExponentialOut.apply(0.3) > 0.3);
    }

    #[test]
    fn transition_progress_follows_elapsed_time() {
        let start = Instant::now();
        let transition = Transition::new(start, Duration::from_millis(200));

        assert_eq!(transition.progress(start), 0.0);
        assert!((transition.progress(start + Duration::from_millis(100)) - 0.5).abs() < 1e-4);
        assert!(transition.is_complete(start + Duration::from_millis(200)));
        assert!(!transition.is_complete(start + Duration::from_millis(199)));
    }

    #[test]
    fn zero_length_transition_is_complete_immediately() {
        let start = Instant::now();
        let transition = Transition::new(start, Duration::ZERO);
        assert_eq!(transition.progress(start), 1.0);
        assert!(transition.is_complete(start));
    }
}
