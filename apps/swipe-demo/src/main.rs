use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use swipeview::prelude::*;
use swipeview::{Point, Size};
use swipeview_foundation::{Duration, Instant};

const ROW_SIZE: Size = Size {
    width: 390.0,
    height: 72.0,
};
const FRAME_NANOS: u64 = 16_666_667;

struct InboxRow {
    subject: &'static str,
    view: SwipeView,
    archived: Rc<RefCell<bool>>,
}

/// Action that prints itself and, once its side is triggered, runs `on_trigger`.
fn button(title: &'static str, on_trigger: impl Fn() + 'static) -> impl SwipeAction {
    move |context: &SwipeContext, layout: &ActionLayout| {
        if layout.shown && layout.width > 0.0 {
            log::trace!("{title}: x={:.1} w={:.1}", layout.x, layout.width);
        }
        if layout.shown && context.is_triggered() {
            on_trigger();
            context.close();
        }
    }
}

fn inbox_row(subject: &'static str, group: &SwipeViewGroup, options: SwipeOptions) -> InboxRow {
    let view = SwipeView::with_group(options, group);
    view.set_size(ROW_SIZE);
    view.set_trigger_haptics(move |side| println!("  * haptic tick ({side:?}) on \"{subject}\""));

    let archived = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&archived);
    view.mount_actions(
        SwipeSide::Leading,
        vec![Box::new(button("Pin", move || println!("  pinned \"{subject}\"")))],
    );
    view.mount_actions(
        SwipeSide::Trailing,
        vec![
            Box::new(button("Flag", || {})),
            Box::new(EdgeTrigger(button("Archive", move || {
                *flag.borrow_mut() = true;
            }))),
        ],
    );

    InboxRow {
        subject,
        view,
        archived,
    }
}

/// Drags `view` horizontally by `distance` over `steps` frames, then releases.
fn swipe(view: &SwipeView, distance: f32, steps: u32) {
    let base = Instant::now();
    let start = Point::new(ROW_SIZE.width / 2.0, ROW_SIZE.height / 2.0);
    let mut value = None;
    view.on_gesture_active_changed(true);
    for step in 1..=steps {
        let dx = distance * step as f32 / steps as f32;
        let sample = DragValue::new(
            start,
            Point::new(start.x + dx, start.y),
            base + Duration::from_millis(u64::from(step) * 16),
        );
        view.on_drag_changed(sample);
        value = Some(sample);
    }
    if let Some(value) = value {
        view.on_drag_ended(value);
    }
    view.on_gesture_active_changed(false);
}

fn settle(rows: &[InboxRow]) -> u64 {
    let mut frame = 0u64;
    loop {
        let running = rows
            .iter()
            .fold(false, |running, row| row.view.on_frame(frame * FRAME_NANOS) || running);
        for row in rows {
            row.view.render();
        }
        if !running || frame > 1_000 {
            return frame;
        }
        frame += 1;
    }
}

fn print_rows(rows: &[InboxRow]) {
    for row in rows {
        let frame = row.view.render();
        let trailing = frame.side(SwipeSide::Trailing);
        println!(
            "  {:<24} offset {:>7.1}  leading {:?}  trailing {:?}  shown {} (mask r={:.0}){}",
            row.subject,
            frame.offset,
            row.view.state(SwipeSide::Leading),
            row.view.state(SwipeSide::Trailing),
            trailing.layout.shown_actions().count(),
            trailing.layout.mask.resolved_radii().top_left,
            if *row.archived.borrow() { "  [archived]" } else { "" },
        );
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== SwipeView inbox demo ===");
    let group = SwipeViewGroup::new();
    let options = SwipeOptions::default().actions_style(SwipeActionStyle::Cascade);
    let rows = [
        inbox_row("Quarterly report", &group, options),
        inbox_row("Lunch on Friday?", &group, options),
        inbox_row("Build failed on main", &group, options),
    ];

    println!("Swipe the first row left to reveal its actions:");
    swipe(&rows[0].view, -150.0, 10);
    println!("  settled after {} frames", settle(&rows));
    print_rows(&rows);

    println!("Over-swipe the third row to archive it (closes the first row):");
    swipe(&rows[2].view, -320.0, 16);
    println!("  settled after {} frames", settle(&rows));
    print_rows(&rows);

    println!("Swipe the second row right to pin it:");
    swipe(&rows[1].view, 140.0, 8);
    rows[1]
        .view
        .set_options(options.allow_single_swipe_across(true))
        .context("second row is still dragging")?;
    rows[1].view.set_state(SwipeSide::Leading, Some(SwipeState::Triggered));
    println!("  settled after {} frames", settle(&rows));
    print_rows(&rows);

    Ok(())
}
