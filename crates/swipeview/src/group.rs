//! Group coordination: at most one row of a group is open at a time.

use std::sync::atomic::{AtomicU64, Ordering};

use swipeview_foundation::{MutableState, Subscription};

/// Stable identity of a swipe view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwipeViewId(u64);

static NEXT_SWIPE_VIEW_ID: AtomicU64 = AtomicU64::new(1);

impl SwipeViewId {
    pub fn next() -> Self {
        Self(NEXT_SWIPE_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared "currently open row" slot for sibling swipe views.
///
/// Every write stores either the writer's own id or `None`, so at most one
/// holder exists at any time. Cloning yields another handle to the same slot.
#[derive(Clone, Debug)]
pub struct SwipeViewGroup {
    selection: MutableState<Option<SwipeViewId>>,
}

impl Default for SwipeViewGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeViewGroup {
    pub fn new() -> Self {
        Self {
            selection: MutableState::new(None),
        }
    }

    pub fn selected(&self) -> Option<SwipeViewId> {
        self.selection.get()
    }

    /// Makes `id` the holder; other members are notified and close themselves.
    pub fn claim(&self, id: SwipeViewId) {
        if self.selection.set(Some(id)) {
            log::debug!("swipe group claimed by {:?}", id);
        }
    }

    /// Clears the slot if `id` holds it.
    pub fn release(&self, id: SwipeViewId) {
        if self.selection.get() == Some(id) {
            self.selection.set(None);
            log::debug!("swipe group released by {:?}", id);
        }
    }

    pub fn subscribe(&self, observer: impl Fn(&Option<SwipeViewId>) + 'static) -> Subscription {
        self.selection.subscribe(observer)
    }
}
