//! The collapsible calendar layout.
//!
//! A month grid, a week strip and a host-supplied content pane are stacked
//! vertically. Dragging the content pane up collapses the month grid into the
//! week strip; dragging it down expands it again. The content pane moves by
//! the drag, the month grid follows proportionally (see
//! [`grid_offset_for`](crate::layout::grid_offset_for)), and on release the
//! layout settles to whichever end the fling or the drag direction points to.
//!
//! The layout owns no views. After each call the host reads [`ViewState`]
//! (or drains [`Changes`]) and applies the offsets and visibilities.
//!
//! ```
//! use calendar_layout::prelude::*;
//! use std::time::Duration;
//!
//! let mut layout = CalendarLayout::new(LayoutConfig::new().item_height(100.0))
//!     .with_content_pane(StaticPane::new(640.0));
//! let may_15 = chrono::NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
//! layout.setup(may_15, may_15);
//!
//! assert!(layout.shrink());
//! while layout.advance(16.0) {}
//! assert!(layout.views().week.is_visible());
//!
//! let down = Event::PointerDown { y: 300.0, time: Duration::ZERO };
//! assert_eq!(layout.on_pointer(&down), EventResponse::Ignored);
//! ```

mod touch;
mod translation;

use chrono::{Datelike, NaiveDate};

use crate::animation::{
    Transition, HIDE_CONTENT_DURATION_MS, SETTLE_DURATION_MS, SHOW_CONTENT_DURATION_MS,
    SNAP_DURATION_MS,
};
use crate::calendar::{CalendarMetrics, GregorianMetrics};
use crate::config::{DefaultStatus, LayoutConfig, ShowMode};
use crate::error::TransitionError;
use crate::gesture::{GestureState, Stage, Tracker};
use crate::layout::{measure, Changes, Geometry, Measurement, MonthInputs};
use crate::widgets::{CalendarListener, ContentPane, ViewMode, ViewState, Visibility};

use translation::{Settle, SettleKind};

pub struct CalendarLayout {
    config: LayoutConfig,
    metrics: Box<dyn CalendarMetrics>,
    geometry: Geometry,
    /// Month the grid is paged to
    index_date: NaiveDate,
    views: ViewState,
    content: Option<Box<dyn ContentPane>>,
    listener: Option<Box<dyn CalendarListener>>,
    tracker: Tracker,
    /// The single animation slot
    settle: Option<Settle>,
    content_aligned_top: bool,
    year_view_visible: bool,
    layout_height: f32,
    grid_height: f32,
    changes: Changes,
}

impl CalendarLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_metrics(config, GregorianMetrics)
    }

    pub fn with_metrics(config: LayoutConfig, metrics: impl CalendarMetrics + 'static) -> Self {
        Self {
            geometry: Geometry::new(config.item_height),
            config,
            metrics: Box::new(metrics),
            index_date: NaiveDate::default(),
            views: ViewState::default(),
            content: None,
            listener: None,
            tracker: Tracker::Idle,
            settle: None,
            content_aligned_top: false,
            year_view_visible: false,
            layout_height: 0.0,
            grid_height: 0.0,
            changes: Changes::all(),
        }
    }

    pub fn with_content_pane(mut self, pane: impl ContentPane + 'static) -> Self {
        self.set_content_pane(Some(Box::new(pane)));
        self
    }

    pub fn with_listener(mut self, listener: impl CalendarListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Bind or unbind the content pane. Unbinding drops any tracked gesture.
    pub fn set_content_pane(&mut self, pane: Option<Box<dyn ContentPane>>) {
        if pane.is_none() {
            self.tracker = Tracker::Idle;
        }
        self.content = pane;
    }

    pub fn set_listener(&mut self, listener: Option<Box<dyn CalendarListener>>) {
        self.listener = listener;
    }

    /// Place the grid on `selected` and page it to the month of `index`.
    pub fn setup(&mut self, selected: NaiveDate, index: NaiveDate) {
        self.geometry.set_item_height(self.config.item_height);
        self.index_date = index;
        let diff = self
            .metrics
            .month_view_start_diff(selected, self.config.week_start);
        self.update_select_position(diff + selected.day() - 1);
        self.recompute_geometry();
    }

    /// Page the grid to the month of `date`.
    pub fn set_index_date(&mut self, date: NaiveDate) {
        self.index_date = date;
        self.recompute_geometry();
    }

    /// Page the grid to `month` of `year`. Months that do not exist are ignored.
    pub fn set_index_month(&mut self, year: i32, month: u32) {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => self.set_index_date(date),
            None => log::warn!("no month {month} in {year}"),
        }
    }

    /// Grid cell `position` (0-based, row-major) became the selection.
    pub fn update_select_position(&mut self, position: u32) {
        self.geometry.select_position(position);
        self.sync_grid_to_content();
    }

    /// Week row `week` (1-based) became the selection.
    pub fn update_select_week(&mut self, week: u32) {
        self.geometry.select_week(week);
        self.sync_grid_to_content();
    }

    /// Row height changed, e.g. after a configuration change.
    pub fn update_item_height(&mut self, item_height: f32) {
        self.config.item_height = item_height;
        self.geometry.set_item_height(item_height);
        if self.content.is_some() {
            let week = self
                .metrics
                .week_of_month(self.index_date, self.config.week_start);
            self.geometry.select_week(week);
        }
        self.recompute_geometry();
    }

    /// Apply the configured rest state once the host has laid out.
    pub fn init_status(&mut self) {
        if self.content.is_none() {
            return;
        }
        let mode = self.config.show_mode;
        if (self.config.default_status == DefaultStatus::Shrunk || mode == ShowMode::WeekOnly)
            && mode != ShowMode::MonthOnly
        {
            let target = -self.geometry.content_max_translation();
            let snap = Transition::linear(SNAP_DURATION_MS);
            if let Err(e) = self.start_settle(target, snap, SettleKind::Shrink { notify_top: false })
            {
                log::debug!("initial shrink refused: {e}");
            }
        } else {
            self.announce(ViewMode::Month);
        }
    }

    pub fn try_expand(&mut self) -> Result<(), TransitionError> {
        if self.settle.is_some() {
            return Err(TransitionError::Animating);
        }
        if self.config.show_mode == ShowMode::WeekOnly {
            return Err(TransitionError::WeekOnlyMode);
        }
        if self.content.is_none() {
            return Err(TransitionError::NoContentPane);
        }
        // The grid must be on screen before the pane starts moving down.
        self.show_month_grid();
        let transition = self.settle_transition(0.0);
        self.start_settle(0.0, transition, SettleKind::Expand)
    }

    /// Animate to the month view. Returns false if the request was refused.
    pub fn expand(&mut self) -> bool {
        match self.try_expand() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("expand refused: {e}");
                false
            }
        }
    }

    pub fn try_shrink(&mut self) -> Result<(), TransitionError> {
        self.start_shrink(false)
    }

    /// Animate to the week view. Returns false if the request was refused.
    pub fn shrink(&mut self) -> bool {
        match self.try_shrink() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("shrink refused: {e}");
                false
            }
        }
    }

    pub(crate) fn start_shrink(&mut self, notify_top: bool) -> Result<(), TransitionError> {
        if self.settle.is_some() {
            return Err(TransitionError::Animating);
        }
        if self.content.is_none() {
            return Err(TransitionError::NoContentPane);
        }
        let target = -self.geometry.content_max_translation();
        let transition = self.settle_transition(target);
        self.start_settle(target, transition, SettleKind::Shrink { notify_top })
    }

    /// Already resting on `target` snaps instead of replaying a settle.
    fn settle_transition(&self, target: f32) -> Transition {
        let duration = if self.views.content_offset == target {
            SNAP_DURATION_MS
        } else {
            SETTLE_DURATION_MS
        };
        Transition::new(duration, self.config.settle_timing.clone())
    }

    /// Jump to `status` and make it the rest state.
    pub fn set_default_status(&mut self, status: DefaultStatus) -> bool {
        self.content_aligned_top = false;
        if let Some(session) = self.tracker.session_mut() {
            session.forget_origin();
        }
        self.config.default_status = status;
        match status {
            DefaultStatus::Expanded => self.expand(),
            DefaultStatus::Shrunk => self.shrink(),
        }
    }

    pub fn reset_default_status(&mut self) -> bool {
        self.set_default_status(self.config.default_status)
    }

    /// Slide the content pane down out of view, then hide it.
    pub fn hide_content_view(&mut self) -> bool {
        if self.content.is_none() {
            return false;
        }
        let target = self.layout_height - self.grid_height;
        let transition = Transition::linear(HIDE_CONTENT_DURATION_MS);
        match self.start_settle(target, transition, SettleKind::HideContent) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("hide content refused: {e}");
                false
            }
        }
    }

    /// Show the content pane and slide it back to its rest offset.
    pub fn show_content_view(&mut self) -> bool {
        if self.content.is_none() || self.settle.is_some() {
            return false;
        }
        let rest = if self.views.week.is_visible() {
            -self.geometry.content_max_translation()
        } else {
            0.0
        };
        self.set_content_offset(self.layout_height - self.grid_height);
        self.set_content_visibility(Visibility::Visible);
        let transition = Transition::linear(SHOW_CONTENT_DURATION_MS);
        self.start_settle(rest, transition, SettleKind::ShowContent)
            .is_ok()
    }

    /// While the year picker covers the calendar every gesture passes through.
    pub fn set_year_view_visible(&mut self, visible: bool) {
        self.year_view_visible = visible;
    }

    /// Latest layout and month grid heights from the host's layout pass.
    pub fn set_host_heights(&mut self, layout_height: f32, grid_height: f32) {
        self.layout_height = layout_height;
        self.grid_height = grid_height;
    }

    /// Take part in the host's measure pass. `None` without a content pane.
    pub fn measure(&self, available_height: f32, grid_measured_height: f32) -> Option<Measurement> {
        self.content.as_ref()?;
        let inputs = self.month_inputs();
        let month_height = self.metrics.month_view_height(
            inputs.year,
            inputs.month,
            self.geometry.item_height(),
            inputs.week_start,
        );
        Some(measure(
            &self.config,
            self.geometry.item_height(),
            month_height,
            available_height,
            grid_measured_height,
        ))
    }

    /// Height of the calendar part: week bar plus grid, or plus one row.
    pub fn calendar_view_height(&self) -> f32 {
        if self.views.month.is_visible() {
            self.config.week_bar_height + self.grid_height
        } else {
            self.config.week_bar_height + self.geometry.item_height()
        }
    }

    pub fn is_expand(&self) -> bool {
        self.content.is_none() || self.views.month.is_visible()
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    pub fn is_content_aligned_top(&self) -> bool {
        self.content_aligned_top
    }

    pub fn gesture_state(&self) -> GestureState {
        if self.settle.is_some() {
            return GestureState::Settling;
        }
        match self.tracker.session().map(|s| s.stage()) {
            None => GestureState::Idle,
            Some(Stage::TrackingDown) => GestureState::TrackingDown,
            Some(Stage::Unclaimed) => GestureState::DraggingUnclaimed,
            Some(Stage::Claimed) => GestureState::DraggingClaimed,
        }
    }

    pub fn views(&self) -> &ViewState {
        &self.views
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn index_date(&self) -> NaiveDate {
        self.index_date
    }

    /// Drain what changed since the last call.
    pub fn take_changes(&mut self) -> Changes {
        std::mem::take(&mut self.changes)
    }

    fn month_inputs(&self) -> MonthInputs {
        MonthInputs {
            year: self.index_date.year(),
            month: self.index_date.month(),
            show_mode: self.config.month_show_mode,
            week_start: self.config.week_start,
        }
    }
}

impl std::fmt::Debug for CalendarLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarLayout")
            .field("geometry", &self.geometry)
            .field("index_date", &self.index_date)
            .field("views", &self.views)
            .field("has_content", &self.content.is_some())
            .field("gesture_state", &self.gesture_state())
            .field("content_aligned_top", &self.content_aligned_top)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::calendar::MonthShowMode;
    use crate::widgets::StaticPane;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Notification {
        ViewChange(ViewMode),
        ReachedTop,
        WeekRefresh,
    }

    #[derive(Clone, Default)]
    pub(crate) struct Recorder(Rc<RefCell<Vec<Notification>>>);

    impl Recorder {
        pub(crate) fn take(&self) -> Vec<Notification> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    impl CalendarListener for Recorder {
        fn on_view_change(&mut self, mode: ViewMode) {
            self.0.borrow_mut().push(Notification::ViewChange(mode));
        }

        fn on_content_reached_top(&mut self) {
            self.0.borrow_mut().push(Notification::ReachedTop);
        }

        fn on_week_strip_refresh(&mut self) {
            self.0.borrow_mut().push(Notification::WeekRefresh);
        }
    }

    pub(crate) fn may_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    pub(crate) fn config() -> LayoutConfig {
        LayoutConfig::new()
            .item_height(100.0)
            .week_bar_height(40.0)
            .touch_slop(8.0)
            .month_show_mode(MonthShowMode::AllMonth)
    }

    /// content_max 500, grid_max 200, pane top at 640
    pub(crate) fn layout_with(config: LayoutConfig) -> (CalendarLayout, Recorder) {
        let recorder = Recorder::default();
        let mut layout = CalendarLayout::new(config)
            .with_content_pane(StaticPane::new(640.0))
            .with_listener(recorder.clone());
        layout.setup(may_15(), may_15());
        layout.set_host_heights(1400.0, 600.0);
        layout.take_changes();
        (layout, recorder)
    }

    pub(crate) fn layout() -> (CalendarLayout, Recorder) {
        layout_with(config())
    }

    fn settle(layout: &mut CalendarLayout) {
        while layout.advance(16.0) {}
    }

    #[test]
    fn test_setup_geometry() {
        let (layout, _) = layout();
        assert_eq!(layout.geometry().selected_line(), 3);
        assert_eq!(layout.geometry().content_max_translation(), 500.0);
        assert_eq!(layout.geometry().grid_max_translation(), 200.0);
        assert!(layout.is_expand());
        assert_eq!(layout.gesture_state(), GestureState::Idle);
    }

    #[test]
    fn test_shrink_then_expand() {
        let (mut layout, recorder) = layout();
        assert!(layout.shrink());
        assert_eq!(layout.gesture_state(), GestureState::Settling);
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, -500.0);
        assert_eq!(layout.views().grid_offset, -200.0);
        assert!(!layout.is_expand());
        recorder.take();

        assert!(layout.expand());
        // grid visible before the pane moves, strip still up until completion
        assert!(layout.views().month.is_visible());
        assert!(layout.views().week.is_visible());
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, 0.0);
        assert_eq!(layout.views().grid_offset, 0.0);
        assert_eq!(layout.views().week, Visibility::Gone);
        assert_eq!(
            recorder.take(),
            vec![
                Notification::ViewChange(ViewMode::Month),
                Notification::WeekRefresh
            ]
        );
    }

    #[test]
    fn test_refusals_leave_state_untouched() {
        let (mut layout, _) = layout();
        assert!(layout.shrink());
        layout.advance(16.0);
        let views = *layout.views();
        let geometry = *layout.geometry();

        assert_eq!(layout.try_expand(), Err(TransitionError::Animating));
        assert_eq!(layout.try_shrink(), Err(TransitionError::Animating));
        assert!(!layout.expand());
        assert_eq!(*layout.views(), views);
        assert_eq!(*layout.geometry(), geometry);
    }

    #[test]
    fn test_no_content_pane_refuses() {
        let mut layout = CalendarLayout::new(config());
        layout.setup(may_15(), may_15());
        assert_eq!(layout.try_expand(), Err(TransitionError::NoContentPane));
        assert_eq!(layout.try_shrink(), Err(TransitionError::NoContentPane));
        assert!(layout.is_expand());
        assert!(layout.measure(800.0, 600.0).is_none());
    }

    #[test]
    fn test_week_only_may_shrink_but_not_expand() {
        let (mut layout, _) = layout_with(config().show_mode(ShowMode::WeekOnly));
        assert_eq!(layout.try_expand(), Err(TransitionError::WeekOnlyMode));
        assert!(layout.shrink());
    }

    #[test]
    fn test_set_default_status_is_idempotent() {
        let (mut layout, _) = layout();
        assert!(layout.set_default_status(DefaultStatus::Expanded));
        let once = *layout.views();
        assert!(layout.set_default_status(DefaultStatus::Expanded));
        assert_eq!(*layout.views(), once);
        assert!(!layout.is_animating());
    }

    #[test]
    fn test_set_default_status_shrunk_jumps() {
        let (mut layout, recorder) = layout();
        assert!(layout.set_default_status(DefaultStatus::Shrunk));
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, -500.0);
        assert_eq!(layout.config().default_status, DefaultStatus::Shrunk);
        assert!(!recorder.take().contains(&Notification::ReachedTop));

        assert!(layout.reset_default_status());
        assert!(!layout.is_animating());
        assert_eq!(layout.views().content_offset, -500.0);
    }

    #[test]
    fn test_init_status_shrunk_snaps() {
        let (mut layout, recorder) =
            layout_with(config().default_status(DefaultStatus::Shrunk));
        layout.init_status();
        assert!(!layout.is_animating());
        assert_eq!(layout.views().content_offset, -500.0);
        assert!(layout.views().week.is_visible());
        assert_eq!(
            recorder.take(),
            vec![Notification::ViewChange(ViewMode::Week), Notification::WeekRefresh]
        );
    }

    #[test]
    fn test_init_status_month_only_announces_month() {
        let (mut layout, recorder) = layout_with(
            config()
                .default_status(DefaultStatus::Shrunk)
                .show_mode(ShowMode::MonthOnly),
        );
        layout.init_status();
        assert_eq!(layout.views().content_offset, 0.0);
        assert_eq!(recorder.take(), vec![Notification::ViewChange(ViewMode::Month)]);
    }

    #[test]
    fn test_item_height_change_repins_collapsed_pane() {
        let (mut layout, _) = layout();
        layout.shrink();
        settle(&mut layout);
        layout.take_changes();

        layout.update_item_height(120.0);
        assert!(!layout.is_animating());
        assert_eq!(layout.geometry().content_max_translation(), 600.0);
        assert_eq!(layout.views().content_offset, -600.0);
        assert_eq!(layout.views().grid_offset, -240.0);
        assert!(layout.take_changes().contains(Changes::CONTENT_OFFSET));
    }

    #[test]
    fn test_item_height_change_without_pane_reaches_geometry() {
        let mut layout = CalendarLayout::new(config());
        layout.setup(may_15(), may_15());
        layout.update_item_height(120.0);
        assert_eq!(layout.geometry().content_max_translation(), 600.0);

        layout.set_content_pane(Some(Box::new(StaticPane::new(640.0))));
        assert!(layout.shrink());
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, -600.0);
    }

    #[test]
    fn test_geometry_change_supersedes_settle() {
        let (mut layout, _) = layout();
        layout.shrink();
        layout.advance(16.0);
        layout.update_item_height(120.0);
        assert!(!layout.is_animating());
        assert_eq!(layout.views().content_offset, -600.0);
        assert!(layout.views().week.is_visible());
    }

    #[test]
    fn test_index_month_change_while_expanded() {
        let mut layout = CalendarLayout::new(config().month_show_mode(MonthShowMode::FitMonth))
            .with_content_pane(StaticPane::new(640.0));
        layout.setup(may_15(), may_15());
        assert_eq!(layout.geometry().content_max_translation(), 400.0);
        layout.set_index_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(layout.geometry().content_max_translation(), 500.0);
        assert_eq!(layout.views().content_offset, 0.0);
    }

    #[test]
    fn test_select_week_moves_grid_while_collapsed() {
        let (mut layout, _) = layout();
        layout.shrink();
        settle(&mut layout);
        layout.update_select_week(5);
        assert_eq!(layout.views().grid_offset, -400.0);
    }

    #[test]
    fn test_hide_and_show_content() {
        let (mut layout, _) = layout();
        assert!(layout.hide_content_view());
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, 800.0);
        assert_eq!(layout.views().content, Visibility::Invisible);
        // the grid does not follow a slide
        assert_eq!(layout.views().grid_offset, 0.0);

        assert!(layout.show_content_view());
        assert!(layout.views().content.is_visible());
        assert_eq!(layout.views().content_offset, 800.0);
        settle(&mut layout);
        assert_eq!(layout.views().content_offset, 0.0);
    }

    #[test]
    fn test_calendar_view_height() {
        let (mut layout, _) = layout();
        assert_eq!(layout.calendar_view_height(), 640.0);
        layout.shrink();
        settle(&mut layout);
        assert_eq!(layout.calendar_view_height(), 140.0);
    }

    #[test]
    fn test_measure() {
        let (layout, _) = layout();
        let m = layout.measure(1400.0, 600.0).unwrap();
        assert_eq!(m.layout_height, 1400.0);
        assert_eq!(m.content_height, 1400.0 - 100.0 - 40.0 - 1.0);
    }
}
