//! Pure math/data for geometry in SwipeView
//!
//! This crate contains the point, size, rectangle and rounded clip shape
//! types shared by the animation, foundation and swipe crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{CornerRadii, Point, Rect, RoundedCornerShape, Size};
}
