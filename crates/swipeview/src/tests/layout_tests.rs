use super::*;

fn request(
    side: SwipeSide,
    count: usize,
    state: Option<SwipeState>,
    visible: f32,
) -> ActionLayoutRequest {
    ActionLayoutRequest {
        side,
        action_count: count,
        state,
        visible_width: visible,
        height: 64.0,
    }
}

#[test]
fn mask_keeps_configured_width_when_partially_revealed() {
    let options = SwipeOptions::default();
    let layout = layout_actions(request(SwipeSide::Trailing, 2, None, 40.0), &options);

    assert_eq!(layout.action_count(), 2);
    assert!(layout.actions.iter().all(|action| action.width == 100.0));
    assert!(layout.actions.iter().all(|action| action.shown && action.opacity == 1.0));
    assert_eq!(layout.mask.rect.width, 40.0);
    assert_eq!(layout.mask.shape, RoundedCornerShape::uniform(20.0));
    assert_eq!(layout.actions[0].shape, RoundedCornerShape::uniform(32.0));
}

#[test]
fn mask_stretches_past_natural_width() {
    let options = SwipeOptions::default();
    let layout = layout_actions(request(SwipeSide::Trailing, 2, None, 308.0), &options);
    assert!(layout.actions.iter().all(|action| action.width == 150.0));
}

#[test]
fn trailing_stack_is_anchored_to_end() {
    let options = SwipeOptions::default();
    let layout = layout_actions(request(SwipeSide::Trailing, 2, None, 208.0), &options);
    assert_eq!(layout.alignment, HorizontalAlignment::End);
    assert_eq!(layout.actions[0].x, 0.0);
    assert_eq!(layout.actions[1].x, 108.0);

    let narrow = layout_actions(request(SwipeSide::Trailing, 2, None, 100.0), &options);
    assert_eq!(narrow.actions[1].x + narrow.actions[1].width, 100.0);
}

#[test]
fn leading_stack_is_anchored_to_start() {
    let options = SwipeOptions::default();
    let layout = layout_actions(request(SwipeSide::Leading, 2, None, 100.0), &options);
    assert_eq!(layout.alignment, HorizontalAlignment::Start);
    assert_eq!(layout.actions[0].x, 0.0);
    assert_eq!(layout.actions[1].x, 108.0);
}

#[test]
fn equal_widths_split_visible_width_exactly() {
    let options = SwipeOptions::default().actions_style(SwipeActionStyle::EqualWidths);
    let layout = layout_actions(request(SwipeSide::Leading, 3, None, 116.0), &options);
    assert!(layout
        .actions
        .iter()
        .all(|action| (action.width - 100.0 / 3.0).abs() < 1e-4));
    let last = layout.actions[2];
    assert!((last.x + last.width - 116.0).abs() < 1e-3);
}

#[test]
fn equal_widths_never_go_negative() {
    let options = SwipeOptions::default().actions_style(SwipeActionStyle::EqualWidths);
    let layout = layout_actions(request(SwipeSide::Leading, 3, None, 0.0), &options);
    assert!(layout.actions.iter().all(|action| action.width == 0.0));
}

#[test]
fn triggering_shows_only_edge_action_full_width() {
    let options = SwipeOptions::default();
    for (side, edge) in [(SwipeSide::Leading, 0usize), (SwipeSide::Trailing, 2usize)] {
        for state in [SwipeState::Triggering, SwipeState::Triggered] {
            let layout = layout_actions(request(side, 3, Some(state), 320.0), &options);
            assert_eq!(layout.alignment, side.edge_trigger_alignment());
            assert_eq!(layout.shown_actions().count(), 1);
            let shown = layout.shown_actions().next().expect("edge action shown");
            assert_eq!(shown.index, edge);
            assert_eq!(shown.width, 320.0);
            for hidden in layout.actions.iter().filter(|action| !action.shown) {
                assert_eq!(hidden.width, 0.0);
                assert_eq!(hidden.opacity, 0.0);
            }
        }
    }
}

#[test]
fn cascade_stacks_outermost_on_top() {
    let options = SwipeOptions::default().actions_style(SwipeActionStyle::Cascade);

    let leading = layout_actions(request(SwipeSide::Leading, 3, None, 200.0), &options);
    let z: Vec<i32> = leading.actions.iter().map(|action| action.z_index).collect();
    assert!(z.windows(2).all(|pair| pair[0] > pair[1]));

    let trailing = layout_actions(request(SwipeSide::Trailing, 3, None, 200.0), &options);
    let z: Vec<i32> = trailing.actions.iter().map(|action| action.z_index).collect();
    assert!(z.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn non_cascade_styles_share_z_order() {
    let options = SwipeOptions::default();
    let layout = layout_actions(
        request(SwipeSide::Leading, 3, Some(SwipeState::Expanded), 316.0),
        &options,
    );
    assert!(layout.actions.iter().all(|action| action.z_index == 0));
}

#[test]
fn empty_side_has_no_actions_but_keeps_mask() {
    let options = SwipeOptions::default();
    let layout = layout_actions(
        request(SwipeSide::Leading, 0, Some(SwipeState::Triggered), 50.0),
        &options,
    );
    assert_eq!(layout.action_count(), 0);
    assert_eq!(layout.mask.rect.width, 50.0);
}

#[test]
fn action_frame_spans_row_height() {
    let options = SwipeOptions::default();
    let layout = layout_actions(request(SwipeSide::Leading, 1, None, 108.0), &options);
    let frame = layout.actions[0].frame(64.0);
    assert_eq!(frame.height, 64.0);
    assert_eq!(frame.width, 108.0);
}
