//! Layout configuration.
//!
//! Everything here is fixed for the lifetime of a layout except
//! `default_status`, which [`CalendarLayout::set_default_status`] rewrites.
//!
//! [`CalendarLayout::set_default_status`]: crate::widgets::CalendarLayout::set_default_status

use std::str::FromStr;

use crate::animation::TimingFunction;
use crate::calendar::{MonthShowMode, WeekStart};
use crate::error::ConfigError;

/// Which calendar views the layout may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowMode {
    /// Month grid and week strip, switched by dragging
    #[default]
    Both,
    WeekOnly,
    MonthOnly,
}

impl FromStr for ShowMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both_month_week_view" | "both" | "0" => Ok(ShowMode::Both),
            "only_week_view" | "week" | "1" => Ok(ShowMode::WeekOnly),
            "only_month_view" | "month" | "2" => Ok(ShowMode::MonthOnly),
            _ => Err(ConfigError::invalid("calendar_show_mode", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    Default,
    /// Only drags that start on the calendar move the layout
    CalendarOnly,
    Disabled,
}

impl FromStr for GestureMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" | "0" => Ok(GestureMode::Default),
            "only_calendar" | "calendar_only" | "1" => Ok(GestureMode::CalendarOnly),
            "disabled" | "2" => Ok(GestureMode::Disabled),
            _ => Err(ConfigError::invalid("gesture_mode", s)),
        }
    }
}

/// Rest state the layout returns to on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultStatus {
    #[default]
    Expanded,
    Shrunk,
}

impl FromStr for DefaultStatus {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expand" | "expanded" | "0" => Ok(DefaultStatus::Expanded),
            "shrink" | "shrunk" | "1" => Ok(DefaultStatus::Shrunk),
            _ => Err(ConfigError::invalid("default_status", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub show_mode: ShowMode,
    pub gesture_mode: GestureMode,
    pub default_status: DefaultStatus,
    pub month_show_mode: MonthShowMode,
    pub week_start: WeekStart,
    /// Height of one grid row in px
    pub item_height: f32,
    /// Height of the weekday header bar in px
    pub week_bar_height: f32,
    /// Distance in px a pointer travels before the layout may claim it
    pub touch_slop: f32,
    /// Release velocities are clamped to this magnitude (px/s)
    pub maximum_fling_velocity: f32,
    /// Release velocity (px/s) beyond which the fling direction wins
    pub fling_threshold: f32,
    /// Pixels per dp
    pub density: f32,
    /// Drags starting above this band (dp) always reach the layout
    pub header_band_dp: f32,
    /// Extra space (dp) reserved under the month grid when measuring
    pub month_padding_dp: f32,
    /// Divider (dp) between the week strip and the content pane
    pub divider_dp: f32,
    /// Curve used by expand/shrink settles
    pub settle_timing: TimingFunction,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            show_mode: ShowMode::Both,
            gesture_mode: GestureMode::Default,
            default_status: DefaultStatus::Expanded,
            month_show_mode: MonthShowMode::AllMonth,
            week_start: WeekStart::Sunday,
            item_height: 56.0,
            week_bar_height: 40.0,
            touch_slop: 8.0,
            maximum_fling_velocity: 8000.0,
            fling_threshold: 800.0,
            density: 1.0,
            header_band_dp: 98.0,
            month_padding_dp: 41.0,
            divider_dp: 1.0,
            settle_timing: TimingFunction::AccelerateDecelerate,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `(attribute, value)` pairs as written in a layout file.
    ///
    /// Dimensions accept `dp`, `px` or a bare number (dp). `density` is
    /// applied after all pairs are read, so attribute order does not matter.
    pub fn from_attrs<'a, I>(attrs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        let mut item_height = None;
        let mut week_bar_height = None;

        for (key, value) in attrs {
            let value = value.trim();
            match key {
                "calendar_show_mode" => config.show_mode = value.parse()?,
                "gesture_mode" => config.gesture_mode = value.parse()?,
                "default_status" => config.default_status = value.parse()?,
                "month_view_show_mode" => config.month_show_mode = value.parse()?,
                "week_start_with" => config.week_start = value.parse()?,
                "calendar_height" => item_height = Some(Dimension::parse(key, value)?),
                "week_bar_height" => week_bar_height = Some(Dimension::parse(key, value)?),
                "density" => {
                    config.density = value
                        .parse()
                        .map_err(|_| ConfigError::invalid(key, value))?
                }
                "calendar_content_view_id" => {}
                _ => return Err(ConfigError::UnknownAttribute(key.to_string())),
            }
        }

        if let Some(dim) = item_height {
            config.item_height = dim.to_px(config.density);
        }
        if let Some(dim) = week_bar_height {
            config.week_bar_height = dim.to_px(config.density);
        }
        log::debug!("config from attributes: {:?}", config);
        Ok(config)
    }

    pub fn show_mode(mut self, mode: ShowMode) -> Self {
        self.show_mode = mode;
        self
    }

    pub fn gesture_mode(mut self, mode: GestureMode) -> Self {
        self.gesture_mode = mode;
        self
    }

    pub fn default_status(mut self, status: DefaultStatus) -> Self {
        self.default_status = status;
        self
    }

    pub fn month_show_mode(mut self, mode: MonthShowMode) -> Self {
        self.month_show_mode = mode;
        self
    }

    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn item_height(mut self, px: f32) -> Self {
        self.item_height = px;
        self
    }

    pub fn week_bar_height(mut self, px: f32) -> Self {
        self.week_bar_height = px;
        self
    }

    pub fn touch_slop(mut self, px: f32) -> Self {
        self.touch_slop = px;
        self
    }

    pub fn maximum_fling_velocity(mut self, px_per_sec: f32) -> Self {
        self.maximum_fling_velocity = px_per_sec;
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn settle_timing(mut self, timing: TimingFunction) -> Self {
        self.settle_timing = timing;
        self
    }

    /// Convert dp to whole px, rounding half up.
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        (dp * self.density + 0.5).floor()
    }

    pub fn header_band(&self) -> f32 {
        self.dp_to_px(self.header_band_dp)
    }

    pub fn month_padding(&self) -> f32 {
        self.dp_to_px(self.month_padding_dp)
    }

    pub fn divider(&self) -> f32 {
        self.dp_to_px(self.divider_dp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Dimension {
    Dp(f32),
    Px(f32),
}

impl Dimension {
    fn parse(key: &str, value: &str) -> Result<Self, ConfigError> {
        let (number, dp) = if let Some(n) = value.strip_suffix("dp") {
            (n, true)
        } else if let Some(n) = value.strip_suffix("dip") {
            (n, true)
        } else if let Some(n) = value.strip_suffix("px") {
            (n, false)
        } else {
            (value, true)
        };
        let number: f32 = number
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(key, value))?;
        if !number.is_finite() || number < 0.0 {
            return Err(ConfigError::invalid(key, value));
        }
        Ok(if dp {
            Dimension::Dp(number)
        } else {
            Dimension::Px(number)
        })
    }

    fn to_px(self, density: f32) -> f32 {
        match self {
            Dimension::Dp(dp) => (dp * density + 0.5).floor(),
            Dimension::Px(px) => px,
        }
    }
}
