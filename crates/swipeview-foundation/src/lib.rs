//! Foundation elements for SwipeView: observable state, drag input and velocity tracking

pub mod drag;
pub mod state;
pub mod velocity_tracker;

pub use drag::DragValue;
pub use state::{MutableState, Subscription};
pub use velocity_tracker::{DragVelocityTracker, VelocitySample};
pub use std::time::Duration;
pub use web_time::Instant;

pub mod prelude {
    pub use crate::drag::DragValue;
    pub use crate::state::{MutableState, Subscription};
    pub use crate::velocity_tracker::DragVelocityTracker;
}
