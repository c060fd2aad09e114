//! Vertical gesture coordination for a collapsible calendar.
//!
//! [`CalendarLayout`](widgets::CalendarLayout) decides when a vertical drag
//! belongs to the calendar instead of the content pane below it, keeps the
//! month grid moving in lockstep with that pane, and settles both to the
//! expanded month view or the collapsed week view. It is headless: the host
//! feeds pointer events and frame ticks, then applies the published offsets
//! and visibilities to its own views.

pub mod animation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::calendar::{CalendarMetrics, GregorianMetrics, MonthShowMode, WeekStart};
    pub use crate::config::{DefaultStatus, GestureMode, LayoutConfig, ShowMode};
    pub use crate::error::{ConfigError, TransitionError};
    pub use crate::gesture::GestureState;
    pub use crate::layout::{grid_offset_for, Changes, Geometry, Measurement};
    pub use crate::widgets::{
        CalendarLayout, CalendarListener, Callbacks, ContentPane, Event, EventResponse, ListPane,
        ScrollOffsetPane, StaticPane, ViewMode, ViewState, Visibility,
    };
}
