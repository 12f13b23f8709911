//! Swipeable list rows for SwipeView
//!
//! A [`SwipeView`] reveals action buttons behind a row's content when it is
//! dragged horizontally. It tracks per-side [`SwipeState`]s, settles the row
//! with springs, lays out actions for the configured [`SwipeActionStyle`], and
//! can join a [`SwipeViewGroup`] so that only one row is open at a time.

mod action;
mod context;
mod error;
pub mod geometry;
mod group;
pub mod layout;
pub mod machine;
mod options;
mod side;
mod swipe_view;

pub use action::{EdgeTrigger, SwipeAction};
pub use context::SwipeContext;
pub use error::SwipeError;
pub use geometry::SwipeThresholds;
pub use group::{SwipeViewGroup, SwipeViewId};
pub use layout::{layout_actions, ActionLayout, ActionLayoutRequest, SideLayout};
pub use machine::{SettleAnimation, SwipeEffect, SwipeStateMachine};
pub use options::{SwipeActionStyle, SwipeOptions};
pub use side::{HorizontalAlignment, SwipeSide, SwipeState};
pub use swipe_view::{SideFrame, SwipeFrame, SwipeView, WeakSwipeView};

pub use swipeview_animation::SpringSpec;
pub use swipeview_foundation::{DragValue, Subscription};
pub use swipeview_ui_graphics::{Point, Size};

pub mod prelude {
    pub use crate::action::{EdgeTrigger, SwipeAction};
    pub use crate::context::SwipeContext;
    pub use crate::group::SwipeViewGroup;
    pub use crate::layout::ActionLayout;
    pub use crate::options::{SwipeActionStyle, SwipeOptions};
    pub use crate::side::{SwipeSide, SwipeState};
    pub use crate::swipe_view::{SwipeFrame, SwipeView};
    pub use swipeview_foundation::DragValue;
}
