use chrono::{Datelike, NaiveDate};

use super::{CalendarMetrics, WeekStart};

/// [`CalendarMetrics`] for the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianMetrics;

impl GregorianMetrics {
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        match (
            NaiveDate::from_ymd_opt(year, month, 1),
            NaiveDate::from_ymd_opt(next_year, next_month, 1),
        ) {
            (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
            _ => {
                log::warn!("days_in_month: invalid month {year}-{month}");
                0
            }
        }
    }

    fn leading_cells(year: i32, month: u32, week_start: WeekStart) -> u32 {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            log::warn!("leading_cells: invalid month {year}-{month}");
            return 0;
        };
        let first_column = first.weekday().num_days_from_sunday();
        let start_column = week_start.weekday().num_days_from_sunday();
        (first_column + 7 - start_column) % 7
    }
}

impl CalendarMetrics for GregorianMetrics {
    fn month_view_height(
        &self,
        year: i32,
        month: u32,
        item_height: f32,
        week_start: WeekStart,
    ) -> f32 {
        let cells = Self::leading_cells(year, month, week_start) + Self::days_in_month(year, month);
        let rows = cells.div_ceil(7);
        rows as f32 * item_height
    }

    fn month_view_start_diff(&self, date: NaiveDate, week_start: WeekStart) -> u32 {
        Self::leading_cells(date.year(), date.month(), week_start)
    }

    fn week_of_month(&self, date: NaiveDate, week_start: WeekStart) -> u32 {
        let diff = self.month_view_start_diff(date, week_start);
        (diff + date.day() - 1) / 7 + 1
    }
}
