//! Offset geometry: action widths, per-side thresholds, rubber-banding and
//! reveal opacity. Everything here is a pure function of its inputs.

use crate::options::SwipeOptions;
use crate::side::SwipeSide;

/// Total width of `count` actions laid out with `spacing` between them.
///
/// Zero actions occupy zero width.
pub fn actions_width(count: usize, action_width: f32, spacing: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * action_width + (count - 1) as f32 * spacing
}

/// Damps `x` sub-linearly: `sign(x) * |x|^power`.
///
/// Odd-symmetric and continuous at zero; monotonic in `|x|` for `0 < power < 1`.
pub fn rubber_band(x: f32, power: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    x.signum() * x.abs().powf(power)
}

/// Length an offset has been dragged towards `side`; zero when it points the other way.
pub fn dragged_length(side: SwipeSide, offset: f32) -> f32 {
    (side.sign() * offset).max(0.0)
}

/// Width available to `side`'s actions, excluding the spacing next to the content.
pub fn visible_width(side: SwipeSide, offset: f32, spacing: f32) -> f32 {
    (dragged_length(side, offset) - spacing).max(0.0)
}

/// Fade-in of a side's actions as it is dragged between the visible start and end points.
pub fn reveal_opacity(dragged_length: f32, options: &SwipeOptions) -> f32 {
    let start = options.actions_visible_start_point;
    let end = options.actions_visible_end_point;
    let range = end - start;
    if range <= 0.0 {
        return if dragged_length >= end { 1.0 } else { 0.0 };
    }
    ((dragged_length - start) / range).clamp(0.0, 1.0)
}

/// Width each action gets when `visible_width` is split evenly.
///
/// With no actions this falls back to the configured action width.
pub fn evenly_distributed_width(visible_width: f32, count: usize, options: &SwipeOptions) -> f32 {
    if count == 0 {
        return options.action_width;
    }
    (visible_width - options.spacing * (count - 1) as f32) / count as f32
}

/// Signed offsets at which a side changes behavior.
///
/// Offsets are positive for the leading side and negative for the trailing side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub side: SwipeSide,
    /// Release past this offset expands the side.
    pub ready_to_expand: f32,
    /// Resting offset of an expanded side.
    pub expanded: f32,
    /// Dragging past this offset arms the edge action.
    pub ready_to_trigger: f32,
    /// Resting offset of a triggered side: the row is fully off-screen.
    pub triggered: f32,
}

impl SwipeThresholds {
    pub fn for_side(
        side: SwipeSide,
        action_count: usize,
        options: &SwipeOptions,
        content_width: f32,
    ) -> Self {
        let sign = side.sign();
        let expanded_length =
            actions_width(action_count, options.action_width, options.spacing) + options.spacing;
        let trigger_length = (expanded_length + options.ready_to_trigger_padding)
            .max(options.minimum_point_to_trigger);
        Self {
            side,
            ready_to_expand: sign * options.ready_to_expand_padding,
            expanded: sign * expanded_length,
            ready_to_trigger: sign * trigger_length,
            triggered: sign * (content_width + options.spacing),
        }
    }

    /// Whether `offset` lies strictly further towards this side than `threshold`.
    pub fn is_beyond(&self, offset: f32, threshold: f32) -> bool {
        self.side.sign() * offset > self.side.sign() * threshold
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
