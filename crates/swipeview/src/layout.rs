//! Action layout engine.
//!
//! Given how much of a side is revealed, computes each action's width,
//! position, visibility and stacking order for the configured style.

use smallvec::SmallVec;
use swipeview_ui_graphics::{ClipMask, Point, Rect, RoundedCornerShape, Size};

use crate::geometry::evenly_distributed_width;
use crate::options::{SwipeActionStyle, SwipeOptions};
use crate::side::{HorizontalAlignment, SwipeSide, SwipeState};

/// Placement of a single action inside its side's visible frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionLayout {
    pub index: usize,
    pub shown: bool,
    /// Horizontal position relative to the side frame's start.
    pub x: f32,
    pub width: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub shape: RoundedCornerShape,
}

/// Layout of one side's action stack.
#[derive(Debug, Clone, PartialEq)]
pub struct SideLayout {
    pub side: SwipeSide,
    pub visible_width: f32,
    pub alignment: HorizontalAlignment,
    /// Clip applied to the whole stack.
    pub mask: ClipMask,
    pub actions: SmallVec<[ActionLayout; 4]>,
}

impl SideLayout {
    /// Realized number of actions, reported back to the controller.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn shown_actions(&self) -> impl Iterator<Item = &ActionLayout> {
        self.actions.iter().filter(|action| action.shown)
    }
}

/// Inputs for laying out one side.
#[derive(Debug, Clone, Copy)]
pub struct ActionLayoutRequest {
    pub side: SwipeSide,
    pub action_count: usize,
    pub state: Option<SwipeState>,
    pub visible_width: f32,
    pub height: f32,
}

pub fn layout_actions(request: ActionLayoutRequest, options: &SwipeOptions) -> SideLayout {
    let ActionLayoutRequest {
        side,
        action_count,
        state,
        visible_width,
        height,
    } = request;

    let mask = ClipMask::new(
        Rect::from_size(Size::new(visible_width, height)),
        RoundedCornerShape::uniform(options.actions_mask_corner_radius),
    );
    let shape = RoundedCornerShape::uniform(options.action_corner_radius);

    if state.is_some_and(SwipeState::shows_edge_action_only) {
        let edge = side.edge_action_index(action_count);
        let actions = (0..action_count)
            .map(|index| {
                let shown = Some(index) == edge;
                ActionLayout {
                    index,
                    shown,
                    x: 0.0,
                    width: if shown { visible_width } else { 0.0 },
                    opacity: if shown { 1.0 } else { 0.0 },
                    z_index: 0,
                    shape,
                }
            })
            .collect();
        return SideLayout {
            side,
            visible_width,
            alignment: side.edge_trigger_alignment(),
            mask,
            actions,
        };
    }

    let evenly = evenly_distributed_width(visible_width, action_count, options);
    let width = match options.actions_style {
        SwipeActionStyle::EqualWidths => evenly,
        SwipeActionStyle::Mask | SwipeActionStyle::Cascade => evenly.max(options.action_width),
    };
    let width = width.max(0.0);
    let stack_width = width * action_count as f32
        + options.spacing * action_count.saturating_sub(1) as f32;
    let origin = match side.alignment() {
        HorizontalAlignment::Start => 0.0,
        HorizontalAlignment::End => visible_width - stack_width,
    };

    let actions = (0..action_count)
        .map(|index| ActionLayout {
            index,
            shown: true,
            x: origin + index as f32 * (width + options.spacing),
            width,
            opacity: 1.0,
            z_index: cascade_z_index(options.actions_style, side, index, action_count),
            shape,
        })
        .collect();

    SideLayout {
        side,
        visible_width,
        alignment: side.alignment(),
        mask,
        actions,
    }
}

/// Stacking order for cascade: the outermost action sits on top.
fn cascade_z_index(
    style: SwipeActionStyle,
    side: SwipeSide,
    index: usize,
    action_count: usize,
) -> i32 {
    if style != SwipeActionStyle::Cascade {
        return 0;
    }
    match side {
        SwipeSide::Leading => (action_count - index) as i32,
        SwipeSide::Trailing => index as i32 + 1,
    }
}

impl ActionLayout {
    /// Rectangle of the action in the side frame's coordinates.
    pub fn frame(&self, height: f32) -> Rect {
        Rect::from_origin_size(Point::new(self.x, 0.0), Size::new(self.width, height))
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
