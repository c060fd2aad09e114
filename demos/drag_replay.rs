//! Replays a scripted touch stream against a layout and prints every frame.
//!
//! Run with `RUST_LOG=debug` to see claim and settle decisions.

use std::time::Duration;

use calendar_layout::prelude::*;
use chrono::NaiveDate;

fn main() {
    env_logger::init();

    let listener = Callbacks::new()
        .on_view_change(|mode| println!("  view -> {mode:?}"))
        .on_content_reached_top(|| println!("  content reached the top"))
        .on_week_strip_refresh(|| println!("  week strip refreshed"));

    let mut layout = CalendarLayout::new(
        LayoutConfig::new()
            .item_height(100.0)
            .week_bar_height(40.0)
            .week_start(WeekStart::Monday),
    )
    .with_content_pane(StaticPane::new(640.0))
    .with_listener(listener);

    let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap_or_default();
    layout.setup(today, today);
    layout.set_host_heights(1400.0, 600.0);
    layout.init_status();

    println!("-- flick the content pane up");
    replay(&mut layout, &flick(900.0, -12.0, 20));
    run_frames(&mut layout);

    println!("-- drag it halfway back down and let go slowly");
    let mut stream = vec![Event::PointerDown {
        y: 300.0,
        time: Duration::ZERO,
    }];
    stream.extend((1..=10).map(|i| Event::PointerMove {
        y: 300.0 + i as f32 * 25.0,
        time: Duration::from_millis(i * 40),
    }));
    stream.push(Event::PointerUp {
        y: 550.0,
        time: Duration::from_millis(800),
    });
    replay(&mut layout, &stream);
    run_frames(&mut layout);

    println!("-- programmatic shrink");
    layout.shrink();
    run_frames(&mut layout);
}

/// A uniform drag from `from` moving `step` px every 10ms.
fn flick(from: f32, step: f32, moves: u64) -> Vec<Event> {
    let mut events = vec![Event::PointerDown {
        y: from,
        time: Duration::ZERO,
    }];
    let mut y = from;
    for i in 1..=moves {
        y += step;
        events.push(Event::PointerMove {
            y,
            time: Duration::from_millis(i * 10),
        });
    }
    events.push(Event::PointerUp {
        y,
        time: Duration::from_millis(moves * 10),
    });
    events
}

fn replay(layout: &mut CalendarLayout, events: &[Event]) {
    for event in events {
        let response = layout.on_pointer(event);
        let views = layout.views();
        println!(
            "{:>40} {:?}: content {:>7.1} grid {:>7.1} ({:?})",
            format!("{event:?}"),
            response,
            views.content_offset,
            views.grid_offset,
            layout.gesture_state()
        );
    }
}

fn run_frames(layout: &mut CalendarLayout) {
    let mut frame = 0;
    while layout.advance(16.0) {
        frame += 1;
        let views = layout.views();
        println!(
            "  frame {frame:>2}: content {:>7.1} grid {:>7.1}",
            views.content_offset, views.grid_offset
        );
    }
    let changes = layout.take_changes();
    let views = layout.views();
    println!(
        "  rest: content {:.1} grid {:.1} month {:?} week {:?} changes {:?}",
        views.content_offset, views.grid_offset, views.month, views.week, changes
    );
}
