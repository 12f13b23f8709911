//! Swipe configuration.
//!
//! [`SwipeOptions`] is an immutable snapshot: build it with the chainable
//! setters before handing it to a [`SwipeView`](crate::SwipeView).

use swipeview_animation::SpringSpec;

/// How a side's actions share the revealed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeActionStyle {
    /// Actions keep at least their configured width and are clipped by the mask.
    #[default]
    Mask,
    /// Actions split the revealed width evenly.
    EqualWidths,
    /// Like `Mask`, but actions overlap in z-order so the outermost slides over the rest.
    Cascade,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeOptions {
    pub swipe_enabled: bool,
    /// Horizontal travel required before a drag session starts.
    pub swipe_minimum_distance: f32,
    pub actions_style: SwipeActionStyle,
    pub actions_mask_corner_radius: f32,
    /// Dragged length at which actions start fading in.
    pub actions_visible_start_point: f32,
    /// Dragged length at which actions are fully opaque.
    pub actions_visible_end_point: f32,
    pub action_corner_radius: f32,
    pub action_width: f32,
    pub spacing: f32,
    pub ready_to_expand_padding: f32,
    pub ready_to_trigger_padding: f32,
    pub minimum_point_to_trigger: f32,
    pub enable_trigger_haptics: bool,
    pub stretch_rubber_banding_power: f32,
    pub allow_single_swipe_across: bool,
    pub offset_close_animation_stiffness: f32,
    pub offset_close_animation_damping: f32,
    pub offset_expand_animation_stiffness: f32,
    pub offset_expand_animation_damping: f32,
    pub offset_trigger_animation_stiffness: f32,
    pub offset_trigger_animation_damping: f32,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            swipe_enabled: true,
            swipe_minimum_distance: 2.0,
            actions_style: SwipeActionStyle::Mask,
            actions_mask_corner_radius: 20.0,
            actions_visible_start_point: 50.0,
            actions_visible_end_point: 100.0,
            action_corner_radius: 32.0,
            action_width: 100.0,
            spacing: 8.0,
            ready_to_expand_padding: 50.0,
            ready_to_trigger_padding: 20.0,
            minimum_point_to_trigger: 200.0,
            enable_trigger_haptics: true,
            stretch_rubber_banding_power: 0.7,
            allow_single_swipe_across: false,
            offset_close_animation_stiffness: 160.0,
            offset_close_animation_damping: 70.0,
            offset_expand_animation_stiffness: 160.0,
            offset_expand_animation_damping: 70.0,
            offset_trigger_animation_stiffness: 160.0,
            offset_trigger_animation_damping: 70.0,
        }
    }
}

macro_rules! option_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = value;
                self
            }
        )*
    };
}

impl SwipeOptions {
    option_setters! {
        swipe_enabled: bool,
        swipe_minimum_distance: f32,
        actions_style: SwipeActionStyle,
        actions_mask_corner_radius: f32,
        actions_visible_start_point: f32,
        actions_visible_end_point: f32,
        action_corner_radius: f32,
        action_width: f32,
        spacing: f32,
        ready_to_expand_padding: f32,
        ready_to_trigger_padding: f32,
        minimum_point_to_trigger: f32,
        enable_trigger_haptics: bool,
        stretch_rubber_banding_power: f32,
        allow_single_swipe_across: bool,
        offset_close_animation_stiffness: f32,
        offset_close_animation_damping: f32,
        offset_expand_animation_stiffness: f32,
        offset_expand_animation_damping: f32,
        offset_trigger_animation_stiffness: f32,
        offset_trigger_animation_damping: f32,
    }

    pub fn close_spring(&self) -> SpringSpec {
        SpringSpec::interpolating(
            self.offset_close_animation_stiffness,
            self.offset_close_animation_damping,
        )
    }

    pub fn expand_spring(&self) -> SpringSpec {
        SpringSpec::interpolating(
            self.offset_expand_animation_stiffness,
            self.offset_expand_animation_damping,
        )
    }

    pub fn trigger_spring(&self) -> SpringSpec {
        SpringSpec::interpolating(
            self.offset_trigger_animation_stiffness,
            self.offset_trigger_animation_damping,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let options = SwipeOptions::default();
        assert!(options.swipe_enabled);
        assert_eq!(options.swipe_minimum_distance, 2.0);
        assert_eq!(options.actions_style, SwipeActionStyle::Mask);
        assert_eq!(options.actions_mask_corner_radius, 20.0);
        assert_eq!(options.actions_visible_start_point, 50.0);
        assert_eq!(options.actions_visible_end_point, 100.0);
        assert_eq!(options.action_corner_radius, 32.0);
        assert_eq!(options.action_width, 100.0);
        assert_eq!(options.spacing, 8.0);
        assert_eq!(options.ready_to_expand_padding, 50.0);
        assert_eq!(options.ready_to_trigger_padding, 20.0);
        assert_eq!(options.minimum_point_to_trigger, 200.0);
        assert_eq!(options.stretch_rubber_banding_power, 0.7);
        assert!(!options.allow_single_swipe_across);
        assert!(options.enable_trigger_haptics);
    }

    #[test]
    fn setters_chain() {
        let options = SwipeOptions::default()
            .action_width(80.0)
            .spacing(4.0)
            .actions_style(SwipeActionStyle::Cascade)
            .allow_single_swipe_across(true);
        assert_eq!(options.action_width, 80.0);
        assert_eq!(options.spacing, 4.0);
        assert_eq!(options.actions_style, SwipeActionStyle::Cascade);
        assert!(options.allow_single_swipe_across);
        assert_eq!(options.minimum_point_to_trigger, 200.0);
    }

    #[test]
    fn phase_springs_use_their_own_parameters() {
        let options = SwipeOptions::default()
            .offset_expand_animation_stiffness(300.0)
            .offset_trigger_animation_damping(10.0);
        assert_eq!(options.expand_spring().stiffness, 300.0);
        assert_eq!(options.close_spring().stiffness, 160.0);
        assert!((options.trigger_spring().damping() - 10.0).abs() < 1e-3);
    }
}
