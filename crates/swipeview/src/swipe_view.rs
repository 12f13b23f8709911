//! The swipe view controller.
//!
//! [`SwipeView`] owns a [`SwipeStateMachine`], mirrors its per-side states into
//! observable cells, coordinates with an optional [`SwipeViewGroup`], and
//! produces a [`SwipeFrame`] describing what to draw.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use swipeview_foundation::{DragValue, MutableState, Subscription};
use swipeview_ui_graphics::Size;

use crate::action::SwipeAction;
use crate::context::SwipeContext;
use crate::error::SwipeError;
use crate::geometry::{dragged_length, reveal_opacity, visible_width};
use crate::group::{SwipeViewGroup, SwipeViewId};
use crate::layout::{layout_actions, ActionLayoutRequest, SideLayout};
use crate::machine::{SettleAnimation, SwipeEffect, SwipeStateMachine};
use crate::options::SwipeOptions;
use crate::side::{SwipeSide, SwipeState};

type HapticsCallback = Rc<dyn Fn(SwipeSide)>;

struct Shared {
    id: SwipeViewId,
    engine: RefCell<SwipeStateMachine>,
    leading_state: MutableState<Option<SwipeState>>,
    trailing_state: MutableState<Option<SwipeState>>,
    actions: RefCell<[Vec<Box<dyn SwipeAction>>; 2]>,
    group: Option<SwipeViewGroup>,
    group_subscription: RefCell<Option<Subscription>>,
    trigger_haptics: RefCell<Option<HapticsCallback>>,
}

impl Drop for Shared {
    fn drop(&mut self) {
        if let Some(group) = &self.group {
            group.release(self.id);
        }
    }
}

/// Handle to a swipeable row. Clones share the same row.
#[derive(Clone)]
pub struct SwipeView {
    shared: Rc<Shared>,
}

/// Non-owning handle held by contexts and group observers.
#[derive(Clone, Debug, Default)]
pub struct WeakSwipeView(Weak<Shared>);

impl WeakSwipeView {
    pub fn upgrade(&self) -> Option<SwipeView> {
        self.0.upgrade().map(|shared| SwipeView { shared })
    }
}

/// Everything needed to draw one side for a frame.
#[derive(Clone, Debug)]
pub struct SideFrame {
    pub context: SwipeContext,
    pub layout: SideLayout,
}

/// Render output of [`SwipeView::render`].
#[derive(Clone, Debug)]
pub struct SwipeFrame {
    /// Horizontal translation of the row content.
    pub offset: f32,
    sides: [SideFrame; 2],
}

impl SwipeFrame {
    pub fn side(&self, side: SwipeSide) -> &SideFrame {
        &self.sides[side_index(side)]
    }

    pub fn sides(&self) -> impl Iterator<Item = &SideFrame> {
        self.sides.iter()
    }
}

fn side_index(side: SwipeSide) -> usize {
    match side {
        SwipeSide::Leading => 0,
        SwipeSide::Trailing => 1,
    }
}

impl SwipeView {
    pub fn new(options: SwipeOptions) -> Self {
        Self::build(options, None)
    }

    /// Creates a view that closes itself whenever another member of `group` opens.
    pub fn with_group(options: SwipeOptions, group: &SwipeViewGroup) -> Self {
        let view = Self::build(options, Some(group.clone()));
        let id = view.id();
        let handle = view.downgrade();
        let subscription = group.subscribe(move |holder| {
            if !matches!(*holder, Some(holder) if holder != id) {
                return;
            }
            if let Some(view) = handle.upgrade() {
                view.force_close();
            }
        });
        *view.shared.group_subscription.borrow_mut() = Some(subscription);
        view
    }

    fn build(options: SwipeOptions, group: Option<SwipeViewGroup>) -> Self {
        let id = SwipeViewId::next();
        log::debug!("creating swipe view {:?}", id);
        Self {
            shared: Rc::new(Shared {
                id,
                engine: RefCell::new(SwipeStateMachine::new(options)),
                leading_state: MutableState::new(None),
                trailing_state: MutableState::new(None),
                actions: RefCell::new([Vec::new(), Vec::new()]),
                group,
                group_subscription: RefCell::new(None),
                trigger_haptics: RefCell::new(None),
            }),
        }
    }

    pub fn id(&self) -> SwipeViewId {
        self.shared.id
    }

    pub fn downgrade(&self) -> WeakSwipeView {
        WeakSwipeView(Rc::downgrade(&self.shared))
    }

    pub fn group(&self) -> Option<&SwipeViewGroup> {
        self.shared.group.as_ref()
    }

    /// Installs the callback fired when a side's edge action is armed.
    pub fn set_trigger_haptics(&self, haptics: impl Fn(SwipeSide) + 'static) {
        *self.shared.trigger_haptics.borrow_mut() = Some(Rc::new(haptics));
    }

    pub fn options(&self) -> SwipeOptions {
        *self.shared.engine.borrow().options()
    }

    /// Replaces the options. Rejected while a drag is in progress.
    pub fn set_options(&self, options: SwipeOptions) -> Result<(), SwipeError> {
        self.with_engine(|engine| engine.set_options(options))
    }

    pub fn size(&self) -> Size {
        self.shared.engine.borrow().size()
    }

    pub fn set_size(&self, size: Size) {
        self.with_engine(|engine| engine.set_size(size));
    }

    /// Mounts the content for `side`, replacing any previous actions.
    pub fn mount_actions(&self, side: SwipeSide, actions: Vec<Box<dyn SwipeAction>>) {
        let count = actions.len();
        let edge_trigger = actions.iter().any(|action| action.declares_edge_trigger());
        self.shared.actions.borrow_mut()[side_index(side)] = actions;
        self.with_engine(|engine| {
            engine.set_action_count(side, count);
            engine.register_edge_trigger(side, edge_trigger);
        });
    }

    /// Reports a side's action count without mounting content.
    pub fn set_action_count(&self, side: SwipeSide, count: usize) {
        self.with_engine(|engine| engine.set_action_count(side, count));
    }

    pub fn register_edge_trigger(&self, side: SwipeSide, enabled: bool) {
        self.with_engine(|engine| engine.register_edge_trigger(side, enabled));
    }

    pub fn on_drag_changed(&self, value: DragValue) {
        let begins = self.shared.engine.borrow().begins_session(&value);
        if begins {
            self.claim_group();
        }
        self.with_engine(|engine| engine.drag_changed(value));
    }

    pub fn on_drag_ended(&self, value: DragValue) {
        self.with_engine(|engine| engine.drag_ended(value));
    }

    pub fn on_gesture_active_changed(&self, active: bool) {
        self.with_engine(|engine| engine.gesture_active_changed(active));
    }

    pub fn state(&self, side: SwipeSide) -> Option<SwipeState> {
        self.state_cell(side).get()
    }

    pub fn set_state(&self, side: SwipeSide, state: Option<SwipeState>) {
        if matches!(state, Some(SwipeState::Expanded | SwipeState::Triggered)) {
            self.claim_group();
        }
        self.with_engine(|engine| engine.set_state(side, state));
    }

    /// Observes `side`'s state; the callback runs on every distinct change.
    pub fn subscribe_state(
        &self,
        side: SwipeSide,
        observer: impl Fn(Option<SwipeState>) + 'static,
    ) -> Subscription {
        self.state_cell(side).subscribe(move |state| observer(*state))
    }

    pub fn offset(&self) -> f32 {
        self.shared.engine.borrow().offset()
    }

    pub fn animated_offset(&self) -> f32 {
        self.shared.engine.borrow().animated_offset()
    }

    pub fn current_side(&self) -> Option<SwipeSide> {
        self.shared.engine.borrow().current_side()
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.engine.borrow().is_dragging()
    }

    pub fn last_settle(&self) -> Option<SettleAnimation> {
        self.shared.engine.borrow().last_settle()
    }

    /// Advances the offset animation. Returns whether another frame is needed.
    pub fn on_frame(&self, frame_time_nanos: u64) -> bool {
        self.shared.engine.borrow_mut().on_frame(frame_time_nanos)
    }

    pub fn context(&self, side: SwipeSide) -> SwipeContext {
        let engine = self.shared.engine.borrow();
        let offset = engine.animated_offset();
        SwipeContext {
            state: engine.state(side),
            number_of_actions: engine.action_count(side),
            side,
            opacity: reveal_opacity(dragged_length(side, offset), engine.options()),
            currently_dragging: engine.is_dragging(),
            handle: self.downgrade(),
        }
    }

    /// Lays out both sides at the animated offset and renders mounted actions.
    pub fn render(&self) -> SwipeFrame {
        let (offset, height, options) = {
            let engine = self.shared.engine.borrow();
            (engine.animated_offset(), engine.size().height, *engine.options())
        };
        let sides = SwipeSide::ALL.map(|side| {
            let context = self.context(side);
            let layout = layout_actions(
                ActionLayoutRequest {
                    side,
                    action_count: context.number_of_actions,
                    state: context.state,
                    visible_width: visible_width(side, offset, options.spacing),
                    height,
                },
                &options,
            );
            SideFrame { context, layout }
        });

        // Actions may call back into the view, so render them outside the borrow.
        let mut mounted = std::mem::take(&mut *self.shared.actions.borrow_mut());
        for frame in &sides {
            let actions = &mut mounted[side_index(frame.context.side)];
            for (action, layout) in actions.iter_mut().zip(frame.layout.actions.iter()) {
                action.render(&frame.context, layout);
            }
        }
        let mut slots = self.shared.actions.borrow_mut();
        for (slot, actions) in slots.iter_mut().zip(mounted) {
            // Keep anything mounted while rendering.
            if slot.is_empty() {
                *slot = actions;
            }
        }

        SwipeFrame { offset, sides }
    }

    fn force_close(&self) {
        let effects = match self.shared.engine.try_borrow_mut() {
            Ok(mut engine) => {
                engine.force_close();
                engine.take_effects()
            }
            Err(_) => {
                log::warn!("swipe view {:?} is busy; skipping group close", self.id());
                return;
            }
        };
        self.apply(effects);
    }

    fn claim_group(&self) {
        if let Some(group) = &self.shared.group {
            group.claim(self.shared.id);
        }
    }

    fn with_engine<R>(&self, f: impl FnOnce(&mut SwipeStateMachine) -> R) -> R {
        let (result, effects) = {
            let mut engine = self.shared.engine.borrow_mut();
            let result = f(&mut engine);
            (result, engine.take_effects())
        };
        self.apply(effects);
        result
    }

    fn apply(&self, effects: SmallVec<[SwipeEffect; 4]>) {
        for effect in effects {
            match effect {
                SwipeEffect::StateChanged(side, state) => {
                    log::trace!("{:?} {:?} state -> {:?}", self.id(), side, state);
                    self.state_cell(side).set(state);
                }
                SwipeEffect::ReleaseGroup => {
                    if let Some(group) = &self.shared.group {
                        group.release(self.shared.id);
                    }
                }
                SwipeEffect::TriggerHaptics(side) => {
                    let haptics = self.shared.trigger_haptics.borrow().clone();
                    if let Some(haptics) = haptics {
                        haptics(side);
                    }
                }
            }
        }
    }

    fn state_cell(&self, side: SwipeSide) -> &MutableState<Option<SwipeState>> {
        match side {
            SwipeSide::Leading => &self.shared.leading_state,
            SwipeSide::Trailing => &self.shared.trailing_state,
        }
    }
}

impl fmt::Debug for SwipeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("SwipeView");
        debug.field("id", &self.shared.id);
        match self.shared.engine.try_borrow() {
            Ok(engine) => debug.field("engine", &*engine),
            Err(_) => debug.field("engine", &"<borrowed>"),
        };
        debug.finish()
    }
}

#[cfg(test)]
#[path = "tests/swipe_view_tests.rs"]
mod tests;
