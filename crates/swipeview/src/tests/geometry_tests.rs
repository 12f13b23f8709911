use super::*;

#[test]
fn actions_width_counts_inner_spacing_only() {
    assert_eq!(actions_width(0, 100.0, 8.0), 0.0);
    assert_eq!(actions_width(1, 100.0, 8.0), 100.0);
    assert_eq!(actions_width(2, 100.0, 8.0), 208.0);
    assert_eq!(actions_width(3, 60.0, 5.0), 190.0);
}

#[test]
fn rubber_band_is_odd_and_zero_at_origin() {
    for power in [0.3f32, 0.7, 0.9] {
        assert_eq!(rubber_band(0.0, power), 0.0);
        for x in [0.5f32, 1.0, 12.0, 250.0, 1_000.0] {
            assert_eq!(rubber_band(-x, power), -rubber_band(x, power));
        }
    }
}

#[test]
fn rubber_band_is_monotonic_and_sub_linear() {
    let mut previous = 0.0;
    for step in 1..=200 {
        let x = step as f32 * 5.0;
        let banded = rubber_band(x, 0.7);
        assert!(banded > previous, "rubber band must keep increasing");
        if x > 1.0 {
            assert!(banded < x);
        }
        previous = banded;
    }
}

#[test]
fn trailing_thresholds_for_two_actions() {
    let options = SwipeOptions::default();
    let thresholds = SwipeThresholds::for_side(SwipeSide::Trailing, 2, &options, 390.0);
    assert_eq!(thresholds.ready_to_expand, -50.0);
    assert_eq!(thresholds.expanded, -216.0);
    assert_eq!(thresholds.ready_to_trigger, -236.0);
    assert_eq!(thresholds.triggered, -398.0);
}

#[test]
fn leading_thresholds_mirror_trailing() {
    let options = SwipeOptions::default();
    let leading = SwipeThresholds::for_side(SwipeSide::Leading, 2, &options, 390.0);
    let trailing = SwipeThresholds::for_side(SwipeSide::Trailing, 2, &options, 390.0);
    assert_eq!(leading.ready_to_expand, -trailing.ready_to_expand);
    assert_eq!(leading.expanded, -trailing.expanded);
    assert_eq!(leading.ready_to_trigger, -trailing.ready_to_trigger);
    assert_eq!(leading.triggered, -trailing.triggered);
}

#[test]
fn trigger_threshold_never_closer_than_minimum_point() {
    let options = SwipeOptions::default().action_width(10.0);
    for count in 0..4 {
        for side in SwipeSide::ALL {
            let thresholds = SwipeThresholds::for_side(side, count, &options, 390.0);
            assert!(thresholds.ready_to_trigger.abs() >= options.minimum_point_to_trigger);
        }
    }
}

#[test]
fn is_beyond_respects_side_direction() {
    let options = SwipeOptions::default();
    let trailing = SwipeThresholds::for_side(SwipeSide::Trailing, 1, &options, 390.0);
    assert!(trailing.is_beyond(-60.0, trailing.ready_to_expand));
    assert!(!trailing.is_beyond(-50.0, trailing.ready_to_expand));
    assert!(!trailing.is_beyond(60.0, trailing.ready_to_expand));

    let leading = SwipeThresholds::for_side(SwipeSide::Leading, 1, &options, 390.0);
    assert!(leading.is_beyond(60.0, leading.ready_to_expand));
}

#[test]
fn reveal_opacity_ramps_between_points() {
    let options = SwipeOptions::default();
    assert_eq!(reveal_opacity(0.0, &options), 0.0);
    assert_eq!(reveal_opacity(50.0, &options), 0.0);
    assert_eq!(reveal_opacity(75.0, &options), 0.5);
    assert_eq!(reveal_opacity(100.0, &options), 1.0);
    assert_eq!(reveal_opacity(400.0, &options), 1.0);
}

#[test]
fn reveal_opacity_with_collapsed_range_is_a_step() {
    let options = SwipeOptions::default()
        .actions_visible_start_point(60.0)
        .actions_visible_end_point(60.0);
    assert_eq!(reveal_opacity(59.0, &options), 0.0);
    assert_eq!(reveal_opacity(60.0, &options), 1.0);
}

#[test]
fn visible_width_excludes_spacing_and_wrong_side() {
    assert_eq!(visible_width(SwipeSide::Trailing, -216.0, 8.0), 208.0);
    assert_eq!(visible_width(SwipeSide::Leading, -216.0, 8.0), 0.0);
    assert_eq!(visible_width(SwipeSide::Leading, 4.0, 8.0), 0.0);
    assert_eq!(dragged_length(SwipeSide::Leading, 30.0), 30.0);
}

#[test]
fn evenly_distributed_width_falls_back_without_actions() {
    let options = SwipeOptions::default();
    assert_eq!(evenly_distributed_width(300.0, 0, &options), 100.0);
    assert_eq!(evenly_distributed_width(208.0, 2, &options), 100.0);
    assert_eq!(evenly_distributed_width(300.0, 1, &options), 300.0);
}
