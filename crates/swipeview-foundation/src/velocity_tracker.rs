//! Velocity tracking for swipe release.
//!
//! Unlike a fling tracker this keeps only the two most recent drag samples:
//! the instantaneous velocity at release seeds a settle spring, it does not
//! drive a decay.

use swipeview_ui_graphics::Point;
use web_time::Instant;

use crate::drag::DragValue;

/// A drag translation observed at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySample {
    pub time: Instant,
    pub translation: Point,
}

/// Two-sample velocity tracker.
///
/// # Usage
/// ```ignore
/// let mut tracker = DragVelocityTracker::new();
/// tracker.add_drag_value(&value);
/// // ... more samples ...
/// let velocity = tracker.calculate_velocity(); // px/sec
/// ```
#[derive(Clone, Debug, Default)]
pub struct DragVelocityTracker {
    previous: Option<VelocitySample>,
    current: Option<VelocitySample>,
}

impl DragVelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sample, discarding the oldest one.
    pub fn add_sample(&mut self, time: Instant, translation: Point) {
        self.previous = self.current.take();
        self.current = Some(VelocitySample { time, translation });
    }

    pub fn add_drag_value(&mut self, value: &DragValue) {
        self.add_sample(value.time, value.translation);
    }

    pub fn sample_count(&self) -> usize {
        usize::from(self.previous.is_some()) + usize::from(self.current.is_some())
    }

    /// Velocity between the last two samples, in units/second.
    ///
    /// Returns [`Point::ZERO`] with fewer than two samples or when no time
    /// elapsed between them.
    pub fn calculate_velocity(&self) -> Point {
        let (Some(previous), Some(current)) = (self.previous, self.current) else {
            return Point::ZERO;
        };
        let elapsed = current
            .time
            .saturating_duration_since(previous.time)
            .as_secs_f32();
        if elapsed <= 0.0 {
            return Point::ZERO;
        }
        (current.translation - previous.translation).scale(1.0 / elapsed)
    }

    /// Clears all tracked samples.
    pub fn reset(&mut self) {
        self.previous = None;
        self.current = None;
    }
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
