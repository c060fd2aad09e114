//! Participation in the host's measure pass.
//!
//! The layout never sizes its siblings. It only tells the host how tall it
//! wants to be when the month no longer fits, and how tall the content pane
//! must be so that it exactly fills the space under the collapsed week strip.

use crate::config::LayoutConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Height the host should give the whole layout
    pub layout_height: f32,
    /// Exact height for the content pane
    pub content_height: f32,
}

/// Measure for an `available_height` offered by the host.
///
/// `month_height` is the grid height of the displayed month and
/// `grid_measured_height` the grid's last measured height (zero before the
/// first layout pass, in which case the offer is kept as is).
pub fn measure(
    config: &LayoutConfig,
    item_height: f32,
    month_height: f32,
    available_height: f32,
    grid_measured_height: f32,
) -> Measurement {
    let month_height = month_height + config.month_padding();
    let mut height = available_height;
    let mut layout_height = available_height;

    if grid_measured_height > 0.0 {
        if month_height >= height {
            height = month_height;
            layout_height = month_height + config.month_padding() + config.week_bar_height;
        } else {
            layout_height = height;
        }
    }

    let content_height =
        (height - item_height - config.week_bar_height - config.divider()).max(0.0);

    log::trace!(
        "measure: offered {available_height}, layout {layout_height}, content {content_height}"
    );

    Measurement {
        layout_height,
        content_height,
    }
}
