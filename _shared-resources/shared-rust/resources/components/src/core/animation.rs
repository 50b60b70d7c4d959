// Indicator Animation
// Time-based interpolation of the highlight offset; a new target supersedes the running one

use std::time::{Duration, Instant};

/// Default time for the highlight to slide to a new tab
pub const INDICATOR_ANIMATION_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorAnimation {
    /// Offset displayed when the current animation started
    from: f32,
    /// Offset the indicator is moving to
    to: f32,
    /// Start of the current animation (None = resting)
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for IndicatorAnimation {
    fn default() -> Self {
        Self::new(INDICATOR_ANIMATION_DURATION)
    }
}

impl IndicatorAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started_at: None,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Interpolated offset at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };
        let progress = self.progress(started_at, now);
        self.from + (self.to - self.from) * progress
    }

    pub fn is_running(&self, now: Instant) -> bool {
        match self.started_at {
            Some(started_at) => self.progress(started_at, now) < 1.0,
            None => false,
        }
    }

    /// Start moving toward `target` from whatever is displayed at `now`.
    /// Returns false when `target` is already the destination.
    pub fn retarget(&mut self, target: f32, now: Instant) -> bool {
        if (target - self.to).abs() < f32::EPSILON {
            return false;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.started_at = Some(now);
        true
    }

    fn progress(&self, started_at: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_value() {
        let animation = IndicatorAnimation::default();
        let now = Instant::now();
        assert_eq!(animation.value_at(now), 0.0);
        assert!(!animation.is_running(now));
    }

    #[test]
    fn test_interpolates_over_duration() {
        let mut animation = IndicatorAnimation::new(Duration::from_millis(200));
        let start = Instant::now();
        assert!(animation.retarget(100.0, start));

        assert_eq!(animation.value_at(start), 0.0);
        let halfway = animation.value_at(start + Duration::from_millis(100));
        assert!((halfway - 50.0).abs() < 0.01);
        assert!(animation.is_running(start + Duration::from_millis(100)));
        assert_eq!(animation.value_at(start + Duration::from_millis(200)), 100.0);
        assert!(!animation.is_running(start + Duration::from_millis(250)));
    }

    #[test]
    fn test_retarget_supersedes_running_animation() {
        let mut animation = IndicatorAnimation::new(Duration::from_millis(200));
        let start = Instant::now();
        animation.retarget(100.0, start);

        let midway = start + Duration::from_millis(100);
        assert!(animation.retarget(0.0, midway));
        let resumed = animation.value_at(midway);
        assert!((resumed - 50.0).abs() < 0.01);
        assert_eq!(animation.target(), 0.0);
        assert_eq!(animation.value_at(midway + Duration::from_millis(200)), 0.0);
    }

    #[test]
    fn test_same_target_is_ignored() {
        let mut animation = IndicatorAnimation::default();
        let now = Instant::now();
        assert!(!animation.retarget(0.0, now));
        assert!(!animation.is_running(now));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut animation = IndicatorAnimation::new(Duration::ZERO);
        let now = Instant::now();
        animation.retarget(42.0, now);
        assert_eq!(animation.value_at(now), 42.0);
        assert!(!animation.is_running(now));
    }
}
