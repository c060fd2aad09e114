//! Content pane / month grid translation and the settle animation slot.

use crate::animation::{AdvanceResult, Transition, Tween};
use crate::error::TransitionError;
use crate::gesture::Tracker;
use crate::layout::{grid_offset_for, Changes};
use crate::widgets::{ViewMode, Visibility};

use super::CalendarLayout;

/// What finishing an animation means for the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettleKind {
    /// Travel to 0, then hide the week strip
    Expand,
    /// Travel to `-content_max`, then show the week strip
    Shrink {
        /// Tell the listener the pane reached the top
        notify_top: bool,
    },
    /// Travel to an intermediate offset, no visibility change
    Free,
    /// Slide the pane out, then make it invisible
    HideContent,
    /// Slide the pane back in
    ShowContent,
}

impl SettleKind {
    /// Slides move the pane alone; everything else drags the grid along.
    fn syncs_grid(self) -> bool {
        !matches!(self, SettleKind::HideContent | SettleKind::ShowContent)
    }
}

#[derive(Debug)]
pub(crate) struct Settle {
    tween: Tween<f32>,
    kind: SettleKind,
}

impl CalendarLayout {
    /// Set the content pane offset directly. The caller clamps.
    pub fn set_content_offset(&mut self, y: f32) {
        if self.views.content_offset != y {
            self.changes |= Changes::CONTENT_OFFSET;
        }
        self.views.content_offset = y;
        if self.content_aligned_top && !self.geometry.is_shrunk_offset(y) {
            log::debug!("content pane left the top at {y}");
            self.content_aligned_top = false;
        }
    }

    /// Move the month grid to the offset matching the content pane.
    pub fn sync_grid_to_content(&mut self) {
        let grid_offset = grid_offset_for(self.views.content_offset, &self.geometry);
        if self.views.grid_offset != grid_offset {
            self.changes |= Changes::GRID_OFFSET;
        }
        self.views.grid_offset = grid_offset;
    }

    /// Recompute the translation limits for the displayed month.
    ///
    /// An in-flight settle is completed on the spot, and a collapsed layout is
    /// re-pinned to the new limit without animating.
    pub fn recompute_geometry(&mut self) {
        let inputs = self.month_inputs();
        self.geometry.recompute(&inputs, self.metrics.as_ref());
        self.supersede_settle();

        if self.content.is_some() && self.views.week.is_visible() {
            let max = self.geometry.content_max_translation();
            self.set_content_offset(-max);
        }
        self.sync_grid_to_content();
    }

    /// Animate the content pane to `target` over `duration_ms`.
    ///
    /// Landing on `-content_max` shows the week strip, landing on 0 hides it.
    pub fn animate_to(&mut self, target: f32, duration_ms: f32) -> Result<(), TransitionError> {
        let kind = if self.geometry.is_shrunk_offset(target) {
            SettleKind::Shrink { notify_top: false }
        } else if self.geometry.is_expanded_offset(target) {
            SettleKind::Expand
        } else {
            SettleKind::Free
        };
        let transition = Transition::new(duration_ms, self.config.settle_timing.clone());
        self.start_settle(target, transition, kind)
    }

    /// Advance the running animation by `dt_ms` of frame time.
    ///
    /// Returns true while an animation is still in flight.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        let Some(settle) = self.settle.as_mut() else {
            return false;
        };

        if let AdvanceResult::Changed(value) = settle.tween.advance(dt_ms) {
            log::trace!("frame: content offset {value}");
        }
        let value = *settle.tween.current();
        let finished = settle.tween.is_finished();
        let kind = settle.kind;

        self.set_content_offset(value);
        if kind.syncs_grid() {
            self.sync_grid_to_content();
        }

        if finished {
            self.settle = None;
            log::debug!("{kind:?} finished at {value}");
            self.finish_settle(kind);
            return false;
        }
        true
    }

    pub(crate) fn start_settle(
        &mut self,
        target: f32,
        transition: Transition,
        kind: SettleKind,
    ) -> Result<(), TransitionError> {
        if self.settle.is_some() {
            return Err(TransitionError::Animating);
        }

        log::debug!(
            "{kind:?}: {} -> {target} over {}ms",
            self.views.content_offset,
            transition.duration_ms
        );
        // A drag in progress ends here; only a new pointer down resumes one.
        if self.tracker.take().is_some() {
            log::debug!("drag abandoned for {kind:?}");
        }
        let instant = transition.is_instant();
        self.settle = Some(Settle {
            tween: Tween::new(self.views.content_offset, target, transition),
            kind,
        });
        if instant {
            self.advance(0.0);
        }
        Ok(())
    }

    /// Jump an in-flight animation to its end, re-resolved against the
    /// current limits.
    fn supersede_settle(&mut self) {
        let Some(mut settle) = self.settle.take() else {
            return;
        };
        let target = match settle.kind {
            SettleKind::Expand => 0.0,
            SettleKind::Shrink { .. } => -self.geometry.content_max_translation(),
            SettleKind::Free => self.geometry.clamp(settle.tween.finish()),
            SettleKind::HideContent | SettleKind::ShowContent => settle.tween.finish(),
        };
        log::debug!("{:?} superseded by a geometry change, pinned to {target}", settle.kind);

        self.set_content_offset(target);
        if settle.kind.syncs_grid() {
            self.sync_grid_to_content();
        }
        self.finish_settle(settle.kind);
    }

    fn finish_settle(&mut self, kind: SettleKind) {
        match kind {
            SettleKind::Expand => {
                self.refresh_week_strip();
                self.hide_week();
            }
            SettleKind::Shrink { notify_top } => {
                self.show_week();
                if notify_top {
                    self.notify_reached_top();
                }
            }
            SettleKind::HideContent => self.set_content_visibility(Visibility::Invisible),
            SettleKind::Free | SettleKind::ShowContent => {}
        }
    }

    /// Week strip on, month grid invisible.
    pub(crate) fn show_week(&mut self) {
        if !self.views.week.is_visible() {
            self.announce(ViewMode::Week);
        }
        self.refresh_week_strip();
        self.set_week_visibility(Visibility::Visible);
        self.set_month_visibility(Visibility::Invisible);
    }

    /// Month grid on, week strip gone.
    pub(crate) fn hide_week(&mut self) {
        self.show_month_grid();
        self.set_week_visibility(Visibility::Gone);
    }

    pub(crate) fn show_month_grid(&mut self) {
        if !self.views.month.is_visible() {
            self.announce(ViewMode::Month);
        }
        self.set_month_visibility(Visibility::Visible);
    }

    pub(crate) fn notify_reached_top(&mut self) {
        log::debug!("content pane reached the top");
        self.content_aligned_top = true;
        if let Some(listener) = self.listener.as_mut() {
            listener.on_content_reached_top();
        }
    }

    pub(crate) fn announce(&mut self, mode: ViewMode) {
        log::debug!("view mode -> {mode:?}");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_view_change(mode);
        }
    }

    fn refresh_week_strip(&mut self) {
        self.changes |= Changes::WEEK_DATA;
        if let Some(listener) = self.listener.as_mut() {
            listener.on_week_strip_refresh();
        }
    }

    fn set_week_visibility(&mut self, visibility: Visibility) {
        if self.views.week != visibility {
            self.views.week = visibility;
            self.changes |= Changes::VISIBILITY;
        }
    }

    fn set_month_visibility(&mut self, visibility: Visibility) {
        if self.views.month != visibility {
            self.views.month = visibility;
            self.changes |= Changes::VISIBILITY;
        }
    }

    pub(crate) fn set_content_visibility(&mut self, visibility: Visibility) {
        if self.views.content != visibility {
            self.views.content = visibility;
            self.changes |= Changes::VISIBILITY;
        }
    }
}
