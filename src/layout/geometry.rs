//! Translation limits of the content pane and the month grid.
//!
//! The content pane travels in `[-content_max, 0]`. The month grid follows it
//! proportionally, travelling in `[-grid_max, 0]`, so that the selected row
//! slides up behind the week strip exactly when the pane reaches the top.

use crate::calendar::{CalendarMetrics, MonthShowMode, WeekStart};

/// The month the grid is currently paged to, plus the settings that shape it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthInputs {
    pub year: i32,
    pub month: u32,
    pub show_mode: MonthShowMode,
    pub week_start: WeekStart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    item_height: f32,
    /// 1-based row of the selected day
    selected_line: u32,
    content_max: f32,
}

impl Geometry {
    pub fn new(item_height: f32) -> Self {
        Self {
            item_height,
            selected_line: 1,
            content_max: 0.0,
        }
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn selected_line(&self) -> u32 {
        self.selected_line
    }

    /// Maximum upward travel of the content pane.
    pub fn content_max_translation(&self) -> f32 {
        self.content_max
    }

    /// Maximum upward travel of the month grid.
    pub fn grid_max_translation(&self) -> f32 {
        self.selected_line.saturating_sub(1) as f32 * self.item_height
    }

    pub(crate) fn set_item_height(&mut self, item_height: f32) {
        if item_height <= 0.0 {
            log::warn!("item height {item_height} is not positive");
        }
        self.item_height = item_height;
    }

    /// Select the row holding grid cell `position` (0-based, row-major).
    pub(crate) fn select_position(&mut self, position: u32) {
        self.selected_line = position / 7 + 1;
    }

    /// Select a 1-based week row directly.
    pub(crate) fn select_week(&mut self, week: u32) {
        self.selected_line = week.max(1);
    }

    /// Recompute the content pane limit for `inputs`.
    pub fn recompute(&mut self, inputs: &MonthInputs, metrics: &dyn CalendarMetrics) {
        let content_max = match inputs.show_mode {
            MonthShowMode::AllMonth => 5.0 * self.item_height,
            MonthShowMode::OnlyCurrentMonth | MonthShowMode::FitMonth => {
                metrics.month_view_height(
                    inputs.year,
                    inputs.month,
                    self.item_height,
                    inputs.week_start,
                ) - self.item_height
            }
        };
        self.content_max = content_max.max(0.0);
        log::debug!(
            "geometry for {}-{:02}: content_max={} grid_max={} (line {})",
            inputs.year,
            inputs.month,
            self.content_max,
            self.grid_max_translation(),
            self.selected_line
        );
    }

    /// Clamp a content offset into `[-content_max, 0]`.
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(-self.content_max, 0.0)
    }

    pub fn is_expanded_offset(&self, offset: f32) -> bool {
        offset == 0.0
    }

    pub fn is_shrunk_offset(&self, offset: f32) -> bool {
        offset == -self.content_max
    }

    /// True at either resting boundary.
    pub fn is_at_rest(&self, offset: f32) -> bool {
        self.is_expanded_offset(offset) || self.is_shrunk_offset(offset)
    }
}

/// Month grid offset for a given content pane offset.
///
/// Linear in `content_offset`: zero at zero and `-grid_max` at `-content_max`.
/// Offsets outside that range (a content pane slid out of view) leave the
/// grid at the nearest end. Both the drag path and every animation frame go
/// through here.
pub fn grid_offset_for(content_offset: f32, geometry: &Geometry) -> f32 {
    let content_max = geometry.content_max_translation();
    if content_max <= 0.0 {
        return 0.0;
    }
    let content_offset = content_offset.clamp(-content_max, 0.0);
    if content_offset == -content_max {
        return -geometry.grid_max_translation();
    }
    geometry.grid_max_translation() * (content_offset / content_max)
}
