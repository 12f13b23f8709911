//! Per-side snapshot handed to action content while rendering.

use crate::side::{SwipeSide, SwipeState};
use crate::swipe_view::WeakSwipeView;

/// What an action needs to know about its side, plus a way to change it.
#[derive(Clone, Debug)]
pub struct SwipeContext {
    pub state: Option<SwipeState>,
    pub number_of_actions: usize,
    pub side: SwipeSide,
    /// Reveal opacity in `[0, 1]`.
    pub opacity: f32,
    pub currently_dragging: bool,
    pub(crate) handle: WeakSwipeView,
}

impl SwipeContext {
    /// Requests a new state for this side, e.g. closing the row after an action ran.
    ///
    /// Does nothing once the owning view has been dropped.
    pub fn set_state(&self, state: Option<SwipeState>) {
        match self.handle.upgrade() {
            Some(view) => view.set_state(self.side, state),
            None => log::debug!("swipe view dropped; ignoring {:?} state request", self.side),
        }
    }

    pub fn close(&self) {
        self.set_state(Some(SwipeState::Closed));
    }

    pub fn is_triggered(&self) -> bool {
        self.state == Some(SwipeState::Triggered)
    }
}
