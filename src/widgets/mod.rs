pub mod calendar_layout;
pub mod content;
pub mod listener;
pub mod widget;

pub use calendar_layout::CalendarLayout;
pub use content::{ContentPane, ListPane, ScrollOffsetPane, StaticPane};
pub use listener::{CalendarListener, Callbacks};
pub use widget::{Event, EventResponse, ViewMode, ViewState, Visibility};
