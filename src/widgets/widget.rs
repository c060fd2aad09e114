use std::time::Duration;

/// One sample of the vertical pointer stream, in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer went down
    PointerDown { y: f32, time: Duration },
    /// Pointer moved while down
    PointerMove { y: f32, time: Duration },
    /// Pointer released
    PointerUp { y: f32, time: Duration },
    /// The stream was taken away (e.g. by a parent)
    PointerCancel,
}

/// Whether the layout consumed an event or left it to its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// Host view visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Hidden but still occupying its layout slot
    Invisible,
    /// Hidden and taking no space
    Gone,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Which calendar view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
}

/// Everything the host applies to its views after each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Vertical translation of the content pane
    pub content_offset: f32,
    /// Vertical translation of the month grid
    pub grid_offset: f32,
    pub month: Visibility,
    pub week: Visibility,
    pub content: Visibility,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            content_offset: 0.0,
            grid_offset: 0.0,
            month: Visibility::Visible,
            week: Visibility::Gone,
            content: Visibility::Visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_views_show_month() {
        let views = ViewState::default();
        assert!(views.month.is_visible());
        assert_eq!(views.week, Visibility::Gone);
        assert_eq!(views.content_offset, 0.0);
    }
}
