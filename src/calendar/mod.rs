//! Date arithmetic consumed by the layout.
//!
//! The layout only needs three answers from the calendar: how tall a month
//! grid is, how many leading cells precede the first of the month, and which
//! row a date falls on. [`CalendarMetrics`] is that boundary; hosts with
//! their own calendar model (lunar, fiscal, ...) implement it themselves.

mod gregorian;

use std::str::FromStr;

use chrono::{NaiveDate, Weekday};

use crate::error::ConfigError;

pub use gregorian::GregorianMetrics;

/// First column of every week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
    Saturday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Saturday => Weekday::Sat,
        }
    }
}

impl FromStr for WeekStart {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sun" | "sunday" | "1" => Ok(WeekStart::Sunday),
            "mon" | "monday" | "2" => Ok(WeekStart::Monday),
            "sat" | "saturday" | "7" => Ok(WeekStart::Saturday),
            _ => Err(ConfigError::invalid("week_start_with", s)),
        }
    }
}

/// How many rows the month grid renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthShowMode {
    /// Always six rows, padded with neighbouring months
    #[default]
    AllMonth,
    /// Only the rows the month occupies, neighbour days left blank
    OnlyCurrentMonth,
    /// Only the rows the month occupies, neighbour days drawn
    FitMonth,
}

impl FromStr for MonthShowMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mode_all" | "all_month" | "0" => Ok(MonthShowMode::AllMonth),
            "mode_only_current" | "only_current_month" | "1" => Ok(MonthShowMode::OnlyCurrentMonth),
            "mode_fix" | "fit_month" | "2" => Ok(MonthShowMode::FitMonth),
            _ => Err(ConfigError::invalid("month_view_show_mode", s)),
        }
    }
}

/// Pure date arithmetic the layout depends on.
pub trait CalendarMetrics {
    /// Pixel height of the grid for `year`/`month` with rows of `item_height`.
    fn month_view_height(&self, year: i32, month: u32, item_height: f32, week_start: WeekStart)
        -> f32;

    /// Number of cells before the first of the month in the first row.
    fn month_view_start_diff(&self, date: NaiveDate, week_start: WeekStart) -> u32;

    /// 1-based row of `date` inside its month grid.
    fn week_of_month(&self, date: NaiveDate, week_start: WeekStart) -> u32;
}
