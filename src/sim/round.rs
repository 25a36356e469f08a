//! Round control
//!
//! The sweep itself never decides hits or misses. At every wrap it hands a
//! `WrapEvent` to a `RoundController`, which answers with the change to apply
//! to the progress counter.

use serde::{Deserialize, Serialize};

use super::angle::Angle;
use super::arc::{ProjectedArc, TargetWindow};

/// Snapshot taken the moment a wrap fires, before the angle is reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrapEvent {
    /// 1-based wrap count for this session
    pub lap: u64,
    /// Indicator footprint that crossed the threshold
    pub arc: ProjectedArc,
    pub target: TargetWindow,
    /// Center angle that triggered the wrap
    pub center_angle: Angle,
    /// Progress before this wrap's change is applied
    pub progress_count: u32,
}

/// What the controller wants done to the progress counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgressChange {
    #[default]
    Unchanged,
    /// Grow by n (saturating)
    Advance(u32),
    /// Back to zero, the only way progress ever drops
    ResetRound,
}

/// Decides progress at each wrap
pub trait RoundController {
    fn on_wrap(&mut self, event: &WrapEvent) -> ProgressChange;
}

impl<F> RoundController for F
where
    F: FnMut(&WrapEvent) -> ProgressChange,
{
    fn on_wrap(&mut self, event: &WrapEvent) -> ProgressChange {
        self(event)
    }
}

/// Never touches progress; the sweep keeps its base speed forever
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRounds;

impl RoundController for NoRounds {
    fn on_wrap(&mut self, _event: &WrapEvent) -> ProgressChange {
        ProgressChange::Unchanged
    }
}

/// Example policy: a lap counts as a hit when the indicator's footprint
/// overlapped the target window as it wrapped. Hits advance progress by one,
/// a miss starts a new round.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OverlapRounds {
    pub hits: u32,
    pub misses: u32,
}

impl RoundController for OverlapRounds {
    fn on_wrap(&mut self, event: &WrapEvent) -> ProgressChange {
        if event.arc.overlaps(&event.target) {
            self.hits += 1;
            ProgressChange::Advance(1)
        } else {
            self.misses += 1;
            ProgressChange::ResetRound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arc::projected_arc;

    fn event_at(center_deg: f32) -> WrapEvent {
        WrapEvent {
            lap: 1,
            arc: projected_arc(center_deg, 1.5),
            target: TargetWindow::default(),
            center_angle: Angle::from_degrees(center_deg),
            progress_count: 0,
        }
    }

    #[test]
    fn test_no_rounds_is_inert() {
        assert_eq!(NoRounds.on_wrap(&event_at(100.0)), ProgressChange::Unchanged);
    }

    #[test]
    fn test_overlap_rounds() {
        let mut rounds = OverlapRounds::default();
        assert_eq!(rounds.on_wrap(&event_at(105.0)), ProgressChange::Advance(1));
        assert_eq!(rounds.on_wrap(&event_at(268.5)), ProgressChange::ResetRound);
        assert_eq!(rounds.hits, 1);
        assert_eq!(rounds.misses, 1);
    }

    #[test]
    fn test_closure_controller() {
        let mut seen = Vec::new();
        let mut controller = |e: &WrapEvent| {
            seen.push(e.lap);
            ProgressChange::Advance(5)
        };
        assert_eq!(controller.on_wrap(&event_at(0.0)), ProgressChange::Advance(5));
        drop(controller);
        assert_eq!(seen, vec![1]);
    }
}
