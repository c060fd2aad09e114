//! Pointer stream handling: claiming a drag, following it, settling on release.

use std::time::Duration;

use crate::config::{GestureMode, ShowMode};
use crate::gesture::{
    classify_release, decide_claim, ClaimContext, ClaimDecision, GestureSession, SettleDirection,
    Tracker,
};
use crate::widgets::{Event, EventResponse};

use super::CalendarLayout;

impl CalendarLayout {
    /// Feed one pointer event.
    ///
    /// `Handled` means the layout owns the stream from here on and the host
    /// should cancel it for the descendants. While an animation runs every
    /// event is swallowed and no drag starts.
    pub fn on_pointer(&mut self, event: &Event) -> EventResponse {
        if self.settle.is_some() {
            if matches!(event, Event::PointerUp { .. } | Event::PointerCancel) {
                self.tracker = Tracker::Idle;
            }
            return EventResponse::Handled;
        }

        match *event {
            Event::PointerDown { y, time } => self.pointer_down(y, time),
            Event::PointerMove { y, time } => self.pointer_move(y, time),
            Event::PointerUp { y, time } => self.pointer_up(y, time),
            Event::PointerCancel => self.pointer_cancel(),
        }
    }

    fn gestures_allowed(&self) -> bool {
        if self.config.gesture_mode == GestureMode::Disabled
            || self.config.show_mode != ShowMode::Both
            || self.year_view_visible
            || !self.views.content.is_visible()
        {
            return false;
        }
        self.content.as_ref().is_some_and(|pane| pane.is_visible())
    }

    fn pointer_down(&mut self, y: f32, time: Duration) -> EventResponse {
        if !self.gestures_allowed() {
            self.tracker = Tracker::Idle;
            return EventResponse::Ignored;
        }

        let offset = self.views.content_offset;
        let on_content = self
            .content
            .as_ref()
            .is_some_and(|pane| y > pane.top() + offset);
        if on_content && self.config.gesture_mode == GestureMode::CalendarOnly {
            self.tracker = Tracker::Idle;
            return EventResponse::Ignored;
        }

        log::trace!("pointer down at {y}, on content: {on_content}");
        self.tracker = Tracker::Tracking(GestureSession::begin(y, time, on_content));
        EventResponse::Ignored
    }

    fn pointer_move(&mut self, y: f32, time: Duration) -> EventResponse {
        let Some(session) = self.tracker.session_mut() else {
            return EventResponse::Ignored;
        };
        session.record(y, time);

        if session.is_claimed() {
            let dy = session.take_delta(y);
            let on_content = session.down_on_content();
            self.drag_by(dy, on_content);
            return EventResponse::Handled;
        }

        session.mark_moving(y);
        let dy = session.net_displacement(y);
        match self.try_claim(dy, y) {
            ClaimDecision::Claim => {
                if let Some(session) = self.tracker.session_mut() {
                    session.claim(y);
                }
                log::debug!(
                    "claimed drag at {y} (dy {dy}, offset {})",
                    self.views.content_offset
                );
                EventResponse::Handled
            }
            ClaimDecision::Pending | ClaimDecision::PassThrough => EventResponse::Ignored,
        }
    }

    fn pointer_up(&mut self, y: f32, time: Duration) -> EventResponse {
        let Some(mut session) = self.tracker.take() else {
            return EventResponse::Ignored;
        };
        session.record(y, time);

        let velocity = session.velocity(self.config.maximum_fling_velocity);
        let displacement = session.net_displacement(y);
        self.settle_release(velocity, displacement, session.down_on_content());

        if session.is_claimed() {
            EventResponse::Handled
        } else {
            EventResponse::Ignored
        }
    }

    /// A cancelled stream settles like a release without motion.
    fn pointer_cancel(&mut self) -> EventResponse {
        let Some(session) = self.tracker.take() else {
            return EventResponse::Ignored;
        };
        self.settle_release(0.0, 0.0, session.down_on_content());

        if session.is_claimed() {
            EventResponse::Handled
        } else {
            EventResponse::Ignored
        }
    }

    fn try_claim(&self, dy: f32, y: f32) -> ClaimDecision {
        let ctx = ClaimContext {
            dy,
            y,
            offset: self.views.content_offset,
            content_max: self.geometry.content_max_translation(),
            touch_slop: self.config.touch_slop,
            header_band: self.config.header_band(),
        };
        decide_claim(&ctx, || self.pane_at_top())
    }

    /// Until a drag from the pane has parked it at the top, the pane's own
    /// scroll position is irrelevant.
    fn pane_at_top(&self) -> bool {
        if !self.content_aligned_top {
            return true;
        }
        self.content
            .as_ref()
            .map_or(true, |pane| pane.is_scrolled_to_top())
    }

    /// Follow a claimed drag by `dy`, clamped to the travel range.
    fn drag_by(&mut self, dy: f32, on_content: bool) {
        if dy == 0.0 {
            return;
        }
        let max = self.geometry.content_max_translation();
        let offset = self.views.content_offset;

        if dy < 0.0 && offset + dy <= -max {
            let arriving = !self.geometry.is_shrunk_offset(offset);
            self.set_content_offset(-max);
            self.sync_grid_to_content();
            if arriving {
                self.show_week();
                if on_content {
                    self.notify_reached_top();
                }
            }
            return;
        }

        if dy > 0.0 && offset + dy >= 0.0 {
            self.set_content_offset(0.0);
            self.sync_grid_to_content();
            self.hide_week();
            return;
        }

        // A drag in progress always shows the month grid.
        self.hide_week();
        self.set_content_offset(offset + dy);
        self.sync_grid_to_content();
        log::trace!(
            "drag: content {} grid {}",
            self.views.content_offset,
            self.views.grid_offset
        );
    }

    fn settle_release(&mut self, velocity: f32, displacement: f32, notify_top: bool) {
        let offset = self.views.content_offset;
        if self.geometry.is_at_rest(offset) {
            log::trace!("released at rest ({offset})");
            return;
        }

        let direction = classify_release(velocity, displacement, self.config.fling_threshold);
        log::debug!(
            "released at {offset}: velocity {velocity}, displacement {displacement} -> {direction:?}"
        );
        let result = match direction {
            SettleDirection::Expand => self.try_expand(),
            SettleDirection::Shrink => self.start_shrink(notify_top),
        };
        if let Err(e) = result {
            log::debug!("release settle refused: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::super::tests::{config, layout, layout_with, Notification};
    use super::*;
    use crate::gesture::GestureState;
    use crate::widgets::{ScrollOffsetPane, ViewMode, Visibility};

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn press(layout: &mut CalendarLayout, y: f32, t: u64) -> EventResponse {
        layout.on_pointer(&Event::PointerDown { y, time: ms(t) })
    }

    fn drag(layout: &mut CalendarLayout, y: f32, t: u64) -> EventResponse {
        layout.on_pointer(&Event::PointerMove { y, time: ms(t) })
    }

    fn release(layout: &mut CalendarLayout, y: f32, t: u64) -> EventResponse {
        layout.on_pointer(&Event::PointerUp { y, time: ms(t) })
    }

    fn settle(layout: &mut CalendarLayout) {
        while layout.advance(16.0) {}
    }

    fn park_at(layout: &mut CalendarLayout, offset: f32) {
        layout.animate_to(offset, 0.0).unwrap();
        assert_eq!(layout.views().content_offset, offset);
    }

    #[test]
    fn test_downward_drag_at_expanded_passes_through() {
        let (mut layout, _) = layout();
        assert_eq!(press(&mut layout, 900.0, 0), EventResponse::Ignored);
        assert_eq!(drag(&mut layout, 1000.0, 10), EventResponse::Ignored);
        assert_eq!(layout.gesture_state(), GestureState::DraggingUnclaimed);
        assert_eq!(layout.views().content_offset, 0.0);

        // near the top edge too
        assert_eq!(press(&mut layout, 50.0, 100), EventResponse::Ignored);
        assert_eq!(drag(&mut layout, 150.0, 110), EventResponse::Ignored);
        assert_eq!(layout.views().content_offset, 0.0);
    }

    #[test]
    fn test_upward_drag_claims_then_follows() {
        let (mut layout, _) = layout();
        press(&mut layout, 900.0, 0);
        assert_eq!(layout.gesture_state(), GestureState::TrackingDown);
        assert_eq!(drag(&mut layout, 895.0, 5), EventResponse::Ignored);
        assert_eq!(drag(&mut layout, 890.0, 10), EventResponse::Handled);
        assert_eq!(layout.gesture_state(), GestureState::DraggingClaimed);
        // the claiming move itself does not translate
        assert_eq!(layout.views().content_offset, 0.0);

        drag(&mut layout, 790.0, 20);
        assert_eq!(layout.views().content_offset, -100.0);
        assert_eq!(layout.views().grid_offset, -40.0);
        assert!(layout.views().month.is_visible());
    }

    #[test]
    fn test_overshoot_clamps_and_shows_week() {
        let (mut layout, recorder) = layout();
        press(&mut layout, 900.0, 0);
        drag(&mut layout, 880.0, 10);
        drag(&mut layout, -5000.0, 20);

        assert_eq!(layout.views().content_offset, -500.0);
        assert_eq!(layout.views().grid_offset, -200.0);
        assert!(layout.views().week.is_visible());
        assert!(layout.is_content_aligned_top());
        assert_eq!(
            recorder.take(),
            vec![
                Notification::ViewChange(ViewMode::Week),
                Notification::WeekRefresh,
                Notification::ReachedTop
            ]
        );

        // pushing further is a no-op
        drag(&mut layout, -6000.0, 30);
        assert!(recorder.take().is_empty());

        assert_eq!(release(&mut layout, -6000.0, 40), EventResponse::Handled);
        assert!(!layout.is_animating());
        assert_eq!(layout.gesture_state(), GestureState::Idle);
    }

    #[test]
    fn test_overshoot_from_calendar_does_not_notify_top() {
        let (mut layout, recorder) = layout();
        press(&mut layout, 300.0, 0);
        drag(&mut layout, 280.0, 10);
        drag(&mut layout, -900.0, 20);
        assert!(layout.views().week.is_visible());
        assert!(!recorder.take().contains(&Notification::ReachedTop));
        assert!(!layout.is_content_aligned_top());
    }

    #[test]
    fn test_dragging_back_down_shows_month_grid() {
        let (mut layout, recorder) = layout();
        press(&mut layout, 900.0, 0);
        drag(&mut layout, 880.0, 10);
        drag(&mut layout, 0.0, 20);
        recorder.take();

        drag(&mut layout, 100.0, 30);
        assert_eq!(layout.views().content_offset, -400.0);
        assert_eq!(layout.views().week, Visibility::Gone);
        assert!(layout.views().month.is_visible());
        assert!(!layout.is_content_aligned_top());
        assert_eq!(recorder.take(), vec![Notification::ViewChange(ViewMode::Month)]);

        drag(&mut layout, 2000.0, 40);
        assert_eq!(layout.views().content_offset, 0.0);
        assert_eq!(layout.views().grid_offset, 0.0);
    }

    #[test]
    fn test_stationary_release_expands() {
        let (mut layout, _) = layout();
        park_at(&mut layout, -250.0);
        press(&mut layout, 900.0, 0);
        assert_eq!(release(&mut layout, 900.0, 50), EventResponse::Ignored);
        assert!(layout.is_animating());
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, 0.0);
    }

    #[test]
    fn test_fling_up_shrinks() {
        let (mut layout, recorder) = layout();
        press(&mut layout, 900.0, 0);
        let mut y = 900.0;
        for i in 1..=34 {
            y -= 9.0;
            drag(&mut layout, y, i * 10);
        }
        assert_eq!(layout.views().content_offset, -297.0);
        recorder.take();

        assert_eq!(release(&mut layout, y, 340), EventResponse::Handled);
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, -500.0);
        assert!(layout.views().week.is_visible());
        assert_eq!(
            recorder.take(),
            vec![
                Notification::ViewChange(ViewMode::Week),
                Notification::WeekRefresh,
                Notification::ReachedTop
            ]
        );
    }

    #[test]
    fn test_fling_beats_displacement() {
        let (mut layout, _) = layout();
        press(&mut layout, 900.0, 0);
        drag(&mut layout, 880.0, 100);
        drag(&mut layout, 600.0, 500);
        // quick flick back down, still above the starting point
        drag(&mut layout, 610.0, 1000);
        drag(&mut layout, 640.0, 1010);
        drag(&mut layout, 670.0, 1020);
        release(&mut layout, 700.0, 1030);
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, 0.0);
    }

    #[test]
    fn test_gentle_release_below_slop_follows_displacement() {
        let (mut layout, _) = layout_with(config().touch_slop(16.0));
        park_at(&mut layout, -250.0);
        press(&mut layout, 900.0, 0);
        assert_eq!(drag(&mut layout, 895.0, 100), EventResponse::Ignored);
        assert_eq!(drag(&mut layout, 890.0, 200), EventResponse::Ignored);
        release(&mut layout, 890.0, 300);
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, -500.0);
    }

    #[test]
    fn test_cancel_settles_expanded() {
        let (mut layout, _) = layout();
        press(&mut layout, 900.0, 0);
        drag(&mut layout, 880.0, 10);
        drag(&mut layout, 700.0, 20);
        assert_eq!(layout.on_pointer(&Event::PointerCancel), EventResponse::Handled);
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, 0.0);
    }

    #[test]
    fn test_events_swallowed_while_animating() {
        let (mut layout, _) = layout();
        layout.shrink();
        assert_eq!(press(&mut layout, 900.0, 0), EventResponse::Handled);
        assert_eq!(drag(&mut layout, 500.0, 10), EventResponse::Handled);
        assert_eq!(layout.gesture_state(), GestureState::Settling);
        let offset = layout.views().content_offset;
        assert_eq!(release(&mut layout, 500.0, 20), EventResponse::Handled);
        assert_eq!(layout.views().content_offset, offset);

        settle(&mut layout);
        assert_eq!(layout.gesture_state(), GestureState::Idle);
        assert_eq!(drag(&mut layout, 400.0, 30), EventResponse::Ignored);
    }

    #[test]
    fn test_lifecycle_call_mid_drag_ends_the_drag() {
        let (mut layout, _) = layout();
        press(&mut layout, 900.0, 0);
        drag(&mut layout, 880.0, 10);
        drag(&mut layout, 800.0, 20);
        assert_eq!(layout.views().content_offset, -80.0);

        assert!(layout.expand());
        assert_eq!(drag(&mut layout, 700.0, 30), EventResponse::Handled);
        assert_eq!(drag(&mut layout, 500.0, 40), EventResponse::Handled);
        settle(&mut layout);
        assert_eq!(layout.gesture_state(), GestureState::Idle);

        assert_eq!(drag(&mut layout, 495.0, 50), EventResponse::Ignored);
        assert_eq!(layout.views().content_offset, 0.0);
        assert_eq!(release(&mut layout, 495.0, 60), EventResponse::Ignored);
        assert!(!layout.is_animating());
    }

    #[test]
    fn test_upward_drag_while_shrunk_passes_through() {
        let (mut layout, _) = layout();
        park_at(&mut layout, -500.0);
        press(&mut layout, 900.0, 0);
        assert_eq!(drag(&mut layout, 700.0, 10), EventResponse::Ignored);
        assert_eq!(layout.views().content_offset, -500.0);
    }

    #[test]
    fn test_scrolled_pane_keeps_downward_drag() {
        let (mut layout, _) = layout();
        let pane = Rc::new(RefCell::new(ScrollOffsetPane::new(640.0)));
        layout.set_content_pane(Some(Box::new(pane.clone())));

        // park the pane at the top by dragging it there
        press(&mut layout, 900.0, 0);
        drag(&mut layout, 880.0, 10);
        drag(&mut layout, 0.0, 20);
        release(&mut layout, 0.0, 30);
        assert!(layout.is_content_aligned_top());

        pane.borrow_mut().scroll_y = 30.0;
        press(&mut layout, 300.0, 100);
        assert_eq!(drag(&mut layout, 340.0, 110), EventResponse::Ignored);
        assert_eq!(layout.gesture_state(), GestureState::DraggingUnclaimed);

        pane.borrow_mut().scroll_y = 0.0;
        assert_eq!(drag(&mut layout, 360.0, 120), EventResponse::Handled);
        drag(&mut layout, 400.0, 130);
        assert_eq!(layout.views().content_offset, -460.0);
    }

    #[test]
    fn test_header_band_claims_over_scrolled_pane() {
        let (mut layout, _) = layout();
        let pane = Rc::new(RefCell::new(ScrollOffsetPane::new(640.0)));
        layout.set_content_pane(Some(Box::new(pane.clone())));
        press(&mut layout, 900.0, 0);
        drag(&mut layout, 880.0, 10);
        drag(&mut layout, 0.0, 20);
        release(&mut layout, 0.0, 30);

        pane.borrow_mut().scroll_y = 30.0;
        press(&mut layout, 60.0, 100);
        assert_eq!(drag(&mut layout, 80.0, 110), EventResponse::Handled);
    }

    #[test]
    fn test_programmatic_shrink_ignores_pane_scroll() {
        let (mut layout, _) = layout();
        let pane = Rc::new(RefCell::new(ScrollOffsetPane::new(640.0)));
        pane.borrow_mut().scroll_y = 30.0;
        layout.set_content_pane(Some(Box::new(pane.clone())));
        park_at(&mut layout, -500.0);

        press(&mut layout, 300.0, 0);
        assert_eq!(drag(&mut layout, 340.0, 10), EventResponse::Handled);
    }

    #[test]
    fn test_disabled_modes_pass_through() {
        for config in [
            config().gesture_mode(GestureMode::Disabled),
            config().show_mode(ShowMode::MonthOnly),
            config().show_mode(ShowMode::WeekOnly),
        ] {
            let (mut layout, _) = layout_with(config);
            press(&mut layout, 900.0, 0);
            assert_eq!(drag(&mut layout, 700.0, 10), EventResponse::Ignored);
            assert_eq!(layout.gesture_state(), GestureState::Idle);
        }

        let (mut layout, _) = layout();
        layout.set_year_view_visible(true);
        press(&mut layout, 900.0, 0);
        assert_eq!(drag(&mut layout, 700.0, 10), EventResponse::Ignored);
        assert_eq!(layout.gesture_state(), GestureState::Idle);
    }

    #[test]
    fn test_calendar_only_ignores_drags_on_content() {
        let (mut layout, _) = layout_with(config().gesture_mode(GestureMode::CalendarOnly));
        press(&mut layout, 900.0, 0);
        assert_eq!(layout.gesture_state(), GestureState::Idle);

        press(&mut layout, 300.0, 100);
        assert_eq!(layout.gesture_state(), GestureState::TrackingDown);
        assert_eq!(drag(&mut layout, 250.0, 110), EventResponse::Handled);
    }

    #[test]
    fn test_unbound_pane_ignores_pointer() {
        let (mut layout, _) = layout();
        layout.set_content_pane(None);
        assert_eq!(press(&mut layout, 900.0, 0), EventResponse::Ignored);
        assert_eq!(layout.gesture_state(), GestureState::Idle);
    }
}
