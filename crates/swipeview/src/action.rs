//! Action content mounted on a side of a swipe view.

use crate::context::SwipeContext;
use crate::layout::ActionLayout;

/// A button (or any content) revealed behind the row.
pub trait SwipeAction {
    /// Draws the action at `layout` for the current frame.
    fn render(&mut self, context: &SwipeContext, layout: &ActionLayout);

    /// Whether this action expands to fill the side when the row is over-dragged.
    fn declares_edge_trigger(&self) -> bool {
        false
    }
}

impl<F> SwipeAction for F
where
    F: FnMut(&SwipeContext, &ActionLayout),
{
    fn render(&mut self, context: &SwipeContext, layout: &ActionLayout) {
        self(context, layout)
    }
}

/// Wraps an action so that it declares the edge trigger.
pub struct EdgeTrigger<A>(pub A);

impl<A: SwipeAction> SwipeAction for EdgeTrigger<A> {
    fn render(&mut self, context: &SwipeContext, layout: &ActionLayout) {
        self.0.render(context, layout)
    }

    fn declares_edge_trigger(&self) -> bool {
        true
    }
}
