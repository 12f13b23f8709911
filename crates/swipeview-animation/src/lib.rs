//! Animation primitives for SwipeView
//!
//! This crate provides the spring specification and the frame-driven
//! [`Animatable`] used to settle a row after a swipe gesture.

pub mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{Animatable, Lerp, SpringScalar, SpringSpec};
}
