//! Drag gesture samples delivered by the input layer.

use swipeview_ui_graphics::Point;
use web_time::Instant;

/// One sample of an in-progress drag gesture.
///
/// Locations are in the row's local coordinate space. `translation` is
/// cumulative since the gesture started, and `predicted_end_translation` is the
/// platform's estimate of where the gesture would come to rest if released now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragValue {
    pub start_location: Point,
    pub location: Point,
    pub translation: Point,
    pub predicted_end_translation: Point,
    pub time: Instant,
}

impl DragValue {
    /// A sample whose predicted end matches its current translation.
    pub fn new(start_location: Point, location: Point, time: Instant) -> Self {
        let translation = location - start_location;
        Self {
            start_location,
            location,
            translation,
            predicted_end_translation: translation,
            time,
        }
    }

    pub fn with_predicted_end_translation(mut self, predicted: Point) -> Self {
        self.predicted_end_translation = predicted;
        self
    }

    /// Horizontal movement of the pointer relative to where the gesture began.
    pub fn horizontal_delta_from_start(&self) -> f32 {
        self.location.x - self.start_location.x
    }
}
