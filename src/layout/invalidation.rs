use bitflags::bitflags;

bitflags! {
    /// What the host has to re-apply since it last drained the layout
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Changes: u8 {
        /// Content pane translation changed
        const CONTENT_OFFSET = 0b0001;
        /// Month grid translation changed
        const GRID_OFFSET    = 0b0010;
        /// Visibility of the grid, the week strip or the content pane changed
        const VISIBILITY     = 0b0100;
        /// Week strip pages must rebind their data
        const WEEK_DATA      = 0b1000;
    }
}

impl Changes {
    /// Offsets only; the host can skip a layout pass.
    pub fn is_paint_only(&self) -> bool {
        !self.is_empty() && (*self & !(Changes::CONTENT_OFFSET | Changes::GRID_OFFSET)).is_empty()
    }
}
