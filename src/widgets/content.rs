//! The scrollable pane the layout slides under the calendar.
//!
//! The layout never looks at a concrete pane type. It asks three questions
//! through [`ContentPane`], and ships adapters for the common pane shapes.

use std::cell::RefCell;
use std::rc::Rc;

pub trait ContentPane {
    /// True when the pane is scrolled to its own top edge.
    fn is_scrolled_to_top(&self) -> bool;

    /// Untranslated top edge of the pane in layout coordinates.
    fn top(&self) -> f32;

    fn is_visible(&self) -> bool {
        true
    }
}

/// Hosts keep a handle and update the pane while the layout holds a clone.
impl<P: ContentPane> ContentPane for Rc<RefCell<P>> {
    fn is_scrolled_to_top(&self) -> bool {
        self.borrow().is_scrolled_to_top()
    }

    fn top(&self) -> f32 {
        self.borrow().top()
    }

    fn is_visible(&self) -> bool {
        self.borrow().is_visible()
    }
}

/// A pane that scrolls by a single pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffsetPane {
    pub top: f32,
    pub scroll_y: f32,
}

impl ScrollOffsetPane {
    pub fn new(top: f32) -> Self {
        Self { top, scroll_y: 0.0 }
    }
}

impl ContentPane for ScrollOffsetPane {
    fn is_scrolled_to_top(&self) -> bool {
        self.scroll_y <= 0.0
    }

    fn top(&self) -> f32 {
        self.top
    }
}

/// A recycling list: at the top when its first item is first and flush.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListPane {
    pub top: f32,
    pub first_visible_index: usize,
    /// Top edge of the first attached child, relative to the list
    pub first_child_top: Option<f32>,
}

impl ListPane {
    pub fn new(top: f32) -> Self {
        Self {
            top,
            first_visible_index: 0,
            first_child_top: None,
        }
    }
}

impl ContentPane for ListPane {
    fn is_scrolled_to_top(&self) -> bool {
        self.first_visible_index == 0 && self.first_child_top == Some(0.0)
    }

    fn top(&self) -> f32 {
        self.top
    }
}

/// A pane with no scrolling of its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticPane {
    pub top: f32,
    pub visible: bool,
}

impl StaticPane {
    pub fn new(top: f32) -> Self {
        Self { top, visible: true }
    }
}

impl ContentPane for StaticPane {
    fn is_scrolled_to_top(&self) -> bool {
        true
    }

    fn top(&self) -> f32 {
        self.top
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
