use super::ViewMode;

/// Notifications the layout sends outward. All methods default to no-ops.
pub trait CalendarListener {
    /// The visible calendar view switched. Never repeated for the same view.
    fn on_view_change(&mut self, _mode: ViewMode) {}

    /// A drag that began on the content pane finished collapsing the calendar.
    fn on_content_reached_top(&mut self) {}

    /// The week strip is about to be shown or hidden and must rebind its pages.
    fn on_week_strip_refresh(&mut self) {}
}

/// A listener assembled from closures.
#[derive(Default)]
pub struct Callbacks {
    view_change: Option<Box<dyn FnMut(ViewMode)>>,
    reached_top: Option<Box<dyn FnMut()>>,
    week_refresh: Option<Box<dyn FnMut()>>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_view_change<F: FnMut(ViewMode) + 'static>(mut self, f: F) -> Self {
        self.view_change = Some(Box::new(f));
        self
    }

    pub fn on_content_reached_top<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.reached_top = Some(Box::new(f));
        self
    }

    pub fn on_week_strip_refresh<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.week_refresh = Some(Box::new(f));
        self
    }
}

impl CalendarListener for Callbacks {
    fn on_view_change(&mut self, mode: ViewMode) {
        if let Some(ref mut f) = self.view_change {
            f(mode);
        }
    }

    fn on_content_reached_top(&mut self) {
        if let Some(ref mut f) = self.reached_top {
            f();
        }
    }

    fn on_week_strip_refresh(&mut self) {
        if let Some(ref mut f) = self.week_refresh {
            f();
        }
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("view_change", &self.view_change.is_some())
            .field("reached_top", &self.reached_top.is_some())
            .field("week_refresh", &self.week_refresh.is_some())
            .finish()
    }
}
