//! Speed ramp
//!
//! Sweep speed grows linearly with progress and saturates at the cap.

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_SPEED, MAX_SPEED, PROGRESS_CAP};

/// Angular speed (radians/sec) for the given progress.
///
/// Linear from `base_speed` at zero progress to `max_speed` at
/// `progress_cap`, clamped there for any further progress.
pub fn current_speed(progress_count: u32, progress_cap: u32, base_speed: f32, max_speed: f32) -> f32 {
    let t = if progress_cap == 0 {
        1.0
    } else {
        (progress_count as f32 / progress_cap as f32).clamp(0.0, 1.0)
    };
    if t >= 1.0 {
        return max_speed;
    }
    base_speed + (max_speed - base_speed) * t
}

/// Ramp tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRamp {
    pub base_speed: f32,
    pub max_speed: f32,
    pub progress_cap: u32,
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            progress_cap: PROGRESS_CAP,
        }
    }
}

impl SpeedRamp {
    pub fn speed_for(&self, progress: &SpeedProgress) -> f32 {
        current_speed(progress.count, self.progress_cap, self.base_speed, self.max_speed)
    }
}

/// Progress counter driving the ramp.
///
/// Only grows within a round; `reset` is the explicit round reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedProgress {
    count: u32,
}

impl SpeedProgress {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn advance(&mut self, by: u32) {
        self.count = self.count.saturating_add(by);
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(current_speed(0, 100, 1.0, 2.0), 1.0);
        assert!((current_speed(50, 100, 1.0, 2.0) - 1.5).abs() < 1e-6);
        assert_eq!(current_speed(100, 100, 1.0, 2.0), 2.0);
        assert_eq!(current_speed(250, 100, 1.0, 2.0), 2.0);
        assert_eq!(current_speed(u32::MAX, 100, 1.0, 2.0), 2.0);
    }

    #[test]
    fn test_progress_saturates() {
        let mut p = SpeedProgress::default();
        p.advance(3);
        assert_eq!(p.count(), 3);
        p.advance(u32::MAX);
        assert_eq!(p.count(), u32::MAX);
        p.reset();
        assert_eq!(p.count(), 0);
    }

    #[test]
    fn test_speed_for_uses_ramp() {
        let ramp = SpeedRamp::default();
        let mut p = SpeedProgress::default();
        assert_eq!(ramp.speed_for(&p), BASE_SPEED);
        p.advance(PROGRESS_CAP);
        assert_eq!(ramp.speed_for(&p), MAX_SPEED);
    }

    proptest! {
        #[test]
        fn prop_speed_bounded(count in 0u32..10_000, cap in 1u32..1_000) {
            let s = current_speed(count, cap, 1.0, 2.0);
            prop_assert!((1.0..=2.0).contains(&s));
            if count >= cap {
                prop_assert_eq!(s, 2.0);
            }
        }

        #[test]
        fn prop_speed_non_decreasing(count in 0u32..10_000, step in 0u32..100, cap in 1u32..1_000) {
            let a = current_speed(count, cap, 1.0, 2.0);
            let b = current_speed(count + step, cap, 1.0, 2.0);
            prop_assert!(b >= a);
        }
    }
}
