//! Swipe gesture state machine.
//!
//! Converts drag samples into a row offset and per-side states. The machine
//! never calls out: state changes, group releases and haptic requests are
//! queued as [`SwipeEffect`]s for the owning view to apply once it has
//! released its own borrows.

use smallvec::SmallVec;
use swipeview_animation::{Animatable, SpringSpec};
use swipeview_foundation::{DragValue, DragVelocityTracker};
use swipeview_ui_graphics::Size;

use crate::error::SwipeError;
use crate::geometry::{rubber_band, SwipeThresholds};
use crate::options::SwipeOptions;
use crate::side::{SwipeSide, SwipeState};

/// Damping applied to the release velocity when a drag crossed zero onto the
/// side opposite to the one it started on.
const OVERSHOOT_VELOCITY_FACTOR: f32 = -0.1;

/// Side effects produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEffect {
    StateChanged(SwipeSide, Option<SwipeState>),
    /// Both sides closed; a group slot held by this row should be freed.
    ReleaseGroup,
    TriggerHaptics(SwipeSide),
}

/// The settle animation most recently requested for the row offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleAnimation {
    pub target: f32,
    pub spring: SpringSpec,
    /// Relative velocity: fractions of the remaining distance per second.
    pub initial_velocity: f32,
}

#[derive(Debug, Clone, Copy, Default)]
struct SideModel {
    state: Option<SwipeState>,
    action_count: usize,
    edge_trigger: bool,
}

#[derive(Debug)]
pub struct SwipeStateMachine {
    options: SwipeOptions,
    size: Size,
    leading: SideModel,
    trailing: SideModel,
    /// Offset accrued by the in-progress drag; zero when idle.
    current_offset: f32,
    /// Offset committed by earlier sessions; nonzero exactly when a side rests open.
    saved_offset: f32,
    current_side: Option<SwipeSide>,
    velocity_tracker: DragVelocityTracker,
    drag_backup: Option<DragValue>,
    dragging: bool,
    offset_animation: Animatable<f32>,
    last_settle: Option<SettleAnimation>,
    effects: SmallVec<[SwipeEffect; 4]>,
}

impl SwipeStateMachine {
    pub fn new(options: SwipeOptions) -> Self {
        Self {
            options,
            size: Size::ZERO,
            leading: SideModel::default(),
            trailing: SideModel::default(),
            current_offset: 0.0,
            saved_offset: 0.0,
            current_side: None,
            velocity_tracker: DragVelocityTracker::new(),
            drag_backup: None,
            dragging: false,
            offset_animation: Animatable::new(0.0),
            last_settle: None,
            effects: SmallVec::new(),
        }
    }

    pub fn options(&self) -> &SwipeOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SwipeOptions) -> Result<(), SwipeError> {
        if self.dragging {
            log::warn!("ignoring swipe options change during an active drag");
            return Err(SwipeError::DragInProgress);
        }
        self.options = options;
        self.refresh_resting_offset();
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Records the laid-out row size; a triggered row follows the new width.
    pub fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.refresh_resting_offset();
        }
    }

    pub fn action_count(&self, side: SwipeSide) -> usize {
        self.side(side).action_count
    }

    pub fn set_action_count(&mut self, side: SwipeSide, count: usize) {
        if self.side(side).action_count != count {
            log::debug!("{:?} action count {} -> {}", side, self.side(side).action_count, count);
            self.side_mut(side).action_count = count;
            self.refresh_resting_offset();
        }
    }

    pub fn edge_trigger_enabled(&self, side: SwipeSide) -> bool {
        self.side(side).edge_trigger
    }

    pub fn register_edge_trigger(&mut self, side: SwipeSide, enabled: bool) {
        self.side_mut(side).edge_trigger = enabled;
    }

    pub fn state(&self, side: SwipeSide) -> Option<SwipeState> {
        self.side(side).state
    }

    /// Total visible offset: live drag plus committed offset.
    pub fn offset(&self) -> f32 {
        self.current_offset + self.saved_offset
    }

    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    pub fn saved_offset(&self) -> f32 {
        self.saved_offset
    }

    /// Offset as currently rendered, including any running settle spring.
    pub fn animated_offset(&self) -> f32 {
        self.offset_animation.value()
    }

    pub fn current_side(&self) -> Option<SwipeSide> {
        self.current_side
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.offset_animation.is_running()
    }

    pub fn last_settle(&self) -> Option<SettleAnimation> {
        self.last_settle
    }

    pub fn thresholds(&self, side: SwipeSide) -> SwipeThresholds {
        SwipeThresholds::for_side(
            side,
            self.side(side).action_count,
            &self.options,
            self.size.width,
        )
    }

    /// Whether either side rests open or the row is displaced.
    pub fn is_open(&self) -> bool {
        self.offset() != 0.0
            || SwipeSide::ALL
                .iter()
                .any(|side| self.side(*side).state.is_some_and(SwipeState::is_open))
    }

    pub fn take_effects(&mut self) -> SmallVec<[SwipeEffect; 4]> {
        std::mem::take(&mut self.effects)
    }

    /// Whether `value` would start a new drag session.
    pub fn begins_session(&self, value: &DragValue) -> bool {
        self.options.swipe_enabled
            && !self.dragging
            && value.translation.x.abs() >= self.options.swipe_minimum_distance
    }

    pub fn drag_changed(&mut self, value: DragValue) {
        if !self.options.swipe_enabled {
            return;
        }
        if !self.dragging {
            if value.translation.x.abs() < self.options.swipe_minimum_distance {
                return;
            }
            self.dragging = true;
            log::debug!("swipe drag started, saved offset {}", self.saved_offset);
        }

        self.drag_backup = Some(value);
        self.velocity_tracker.add_drag_value(&value);

        if self.current_side.is_none() {
            self.current_side = Some(if value.horizontal_delta_from_start() > 0.0 {
                SwipeSide::Leading
            } else {
                SwipeSide::Trailing
            });
        }

        let total = self.saved_offset + value.translation.x;
        let resolved = self.resolve_drag_offset(total);
        log::trace!("drag total {total} resolved to {resolved}");
        self.current_offset = resolved - self.saved_offset;
        self.offset_animation.snap_to(resolved);
    }

    pub fn drag_ended(&mut self, value: DragValue) {
        if !self.dragging {
            self.drag_backup = None;
            self.velocity_tracker.reset();
            return;
        }
        let velocity = self.release_velocity();
        self.finish_drag(value, velocity);
    }

    /// Tracks the recognizer's "actively dragging" signal.
    ///
    /// Losing it without a matching `drag_ended` (for example a second touch
    /// freezing the recognizer) ends the gesture from the last backed-up sample.
    pub fn gesture_active_changed(&mut self, active: bool) {
        if active {
            return;
        }
        match self.drag_backup {
            Some(backup) if self.dragging => {
                log::debug!("drag interrupted; ending from last sample");
                let velocity = self.release_velocity();
                self.finish_drag(backup, velocity);
            }
            _ => self.drag_backup = None,
        }
    }

    /// Assigns a side's state from outside the gesture, e.g. an action closing its row.
    pub fn set_state(&mut self, side: SwipeSide, state: Option<SwipeState>) {
        match state {
            Some(SwipeState::Closed) => self.close_all(self.options.close_spring(), 0.0),
            Some(SwipeState::Expanded) => self.expand(side, 0.0),
            Some(SwipeState::Triggered) => self.trigger(side, 0.0),
            Some(SwipeState::Triggering) => {
                log::debug!("{:?} triggering is only reachable by dragging; ignored", side);
            }
            None => self.set_side_state(side, None),
        }
    }

    /// Closes the row because another member of its group took the slot.
    pub fn force_close(&mut self) {
        self.end_session();
        self.current_side = None;
        if !self.is_open() {
            return;
        }
        log::debug!("force closing swipe view");
        self.close_all(self.options.close_spring(), 0.0);
    }

    /// Advances the settle animation. Returns whether it is still running.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        self.offset_animation.on_frame(frame_time_nanos)
    }

    fn resolve_drag_offset(&mut self, total: f32) -> f32 {
        let Some(side) = SwipeSide::from_offset(total) else {
            self.clear_transient_states();
            return 0.0;
        };
        let power = self.options.stretch_rubber_banding_power;

        if self.is_disallowed(side) || self.side(side).action_count == 0 {
            self.clear_transient_states();
            return rubber_band(total, power);
        }

        let thresholds = self.thresholds(side);
        if thresholds.is_beyond(total, thresholds.ready_to_trigger) {
            if self.side(side).edge_trigger {
                let newly_armed = self.side(side).state != Some(SwipeState::Triggering);
                self.set_side_state(side, Some(SwipeState::Triggering));
                self.set_side_state(side.opposite(), None);
                if newly_armed {
                    log::debug!("{:?} edge action armed", side);
                    if self.options.enable_trigger_haptics {
                        self.effects.push(SwipeEffect::TriggerHaptics(side));
                    }
                }
                return total;
            }
            self.clear_transient_states();
            // A row already resting past the threshold stretches from its resting offset.
            let anchor = if thresholds.is_beyond(self.saved_offset, thresholds.ready_to_trigger) {
                if !thresholds.is_beyond(total, self.saved_offset) {
                    return total;
                }
                self.saved_offset
            } else {
                thresholds.ready_to_trigger
            };
            return anchor + rubber_band(total - anchor, power);
        }

        self.clear_transient_states();
        total
    }

    fn finish_drag(&mut self, value: DragValue, velocity: f32) {
        self.end_session();

        let total = self.saved_offset + value.translation.x;
        let predicted = (self.saved_offset + value.predicted_end_translation.x) * 0.5;
        let predicted_side = SwipeSide::from_offset(predicted);
        let triggering = SwipeSide::ALL
            .into_iter()
            .find(|side| self.side(*side).state == Some(SwipeState::Triggering));

        if predicted_side.is_some_and(|side| self.is_disallowed(side)) {
            self.close_all(self.options.trigger_spring(), velocity);
        } else if let Some(side) = triggering {
            self.trigger(side, velocity);
        } else if let Some(side) = predicted_side.filter(|side| {
            let thresholds = self.thresholds(*side);
            self.side(*side).action_count > 0
                && thresholds.is_beyond(predicted, thresholds.ready_to_expand)
        }) {
            self.expand(side, velocity);
        } else {
            let overshot = self
                .current_side
                .is_some_and(|side| side.sign() * total < 0.0);
            let velocity = if overshot {
                velocity * OVERSHOOT_VELOCITY_FACTOR
            } else {
                velocity
            };
            self.close_all(self.options.trigger_spring(), velocity);
        }
    }

    /// Release velocity relative to the accrued drag offset.
    fn release_velocity(&self) -> f32 {
        if self.current_offset == 0.0 {
            return 0.0;
        }
        self.velocity_tracker.calculate_velocity().x / self.current_offset
    }

    fn end_session(&mut self) {
        self.dragging = false;
        self.drag_backup = None;
        self.velocity_tracker.reset();
    }

    fn expand(&mut self, side: SwipeSide, velocity: f32) {
        log::debug!("{:?} expanded", side);
        self.set_side_state(side, Some(SwipeState::Expanded));
        self.set_side_state(side.opposite(), Some(SwipeState::Closed));
        self.current_side = Some(side);
        let target = self.thresholds(side).expanded;
        self.settle(target, self.options.expand_spring(), velocity);
    }

    fn trigger(&mut self, side: SwipeSide, velocity: f32) {
        log::debug!("{:?} triggered", side);
        self.set_side_state(side, Some(SwipeState::Triggered));
        self.set_side_state(side.opposite(), Some(SwipeState::Closed));
        self.current_side = Some(side);
        let target = self.thresholds(side).triggered;
        self.settle(target, self.options.trigger_spring(), velocity);
    }

    fn close_all(&mut self, spring: SpringSpec, velocity: f32) {
        log::debug!("swipe view closed");
        self.set_side_state(SwipeSide::Leading, Some(SwipeState::Closed));
        self.set_side_state(SwipeSide::Trailing, Some(SwipeState::Closed));
        self.current_side = None;
        self.settle(0.0, spring, velocity);
        self.effects.push(SwipeEffect::ReleaseGroup);
    }

    fn settle(&mut self, target: f32, spring: SpringSpec, velocity: f32) {
        self.saved_offset = target;
        self.current_offset = 0.0;
        self.offset_animation.animate_to(target, spring, velocity);
        self.last_settle = Some(SettleAnimation {
            target,
            spring,
            initial_velocity: velocity,
        });
    }

    /// Re-targets a resting expanded/triggered side after its geometry changed.
    fn refresh_resting_offset(&mut self) {
        if self.dragging {
            return;
        }
        let Some(side) = self.current_side else {
            return;
        };
        let thresholds = self.thresholds(side);
        let (target, spring) = match self.side(side).state {
            Some(SwipeState::Expanded) => (thresholds.expanded, self.options.expand_spring()),
            Some(SwipeState::Triggered) => (thresholds.triggered, self.options.trigger_spring()),
            _ => return,
        };
        if target != self.saved_offset {
            self.settle(target, spring, 0.0);
        }
    }

    fn is_disallowed(&self, side: SwipeSide) -> bool {
        !self.options.allow_single_swipe_across
            && self.current_side.is_some_and(|engaged| engaged != side)
    }

    fn clear_transient_states(&mut self) {
        self.set_side_state(SwipeSide::Leading, None);
        self.set_side_state(SwipeSide::Trailing, None);
    }

    fn set_side_state(&mut self, side: SwipeSide, state: Option<SwipeState>) {
        let model = self.side_mut(side);
        if model.state != state {
            model.state = state;
            self.effects.push(SwipeEffect::StateChanged(side, state));
        }
    }

    fn side(&self, side: SwipeSide) -> &SideModel {
        match side {
            SwipeSide::Leading => &self.leading,
            SwipeSide::Trailing => &self.trailing,
        }
    }

    fn side_mut(&mut self, side: SwipeSide) -> &mut SideModel {
        match side {
            SwipeSide::Leading => &mut self.leading,
            SwipeSide::Trailing => &mut self.trailing,
        }
    }
}

#[cfg(test)]
#[path = "tests/machine_tests.rs"]
mod tests;
