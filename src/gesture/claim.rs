//! Decisions made on the pointer stream: when to claim it, and where to
//! settle once it is released.

/// What the layout knows when an unclaimed pointer moves.
#[derive(Debug, Clone, Copy)]
pub struct ClaimContext {
    /// Accumulated movement since pointer-down
    pub dy: f32,
    /// Current pointer position
    pub y: f32,
    /// Current content pane offset
    pub offset: f32,
    pub content_max: f32,
    pub touch_slop: f32,
    /// Drags starting below this line may belong to the content pane
    pub header_band: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimDecision {
    /// Leave this move to the descendant
    PassThrough,
    /// Not decided yet; keep watching
    Pending,
    Claim,
}

/// Decide whether the layout takes over an unclaimed drag.
///
/// `pane_at_top` is only asked when the pane is fully shrunk and the drag is
/// downward from below the header band.
pub fn decide_claim(ctx: &ClaimContext, pane_at_top: impl FnOnce() -> bool) -> ClaimDecision {
    let shrunk = ctx.offset == -ctx.content_max;
    let expanded = ctx.offset == 0.0;

    // Nothing left to collapse.
    if ctx.dy < 0.0 && shrunk {
        return ClaimDecision::PassThrough;
    }
    // Inner lists scroll back to their own top before the layout expands.
    if ctx.dy > 0.0 && shrunk && ctx.y >= ctx.header_band && !pane_at_top() {
        return ClaimDecision::PassThrough;
    }
    // Nothing left to expand.
    if ctx.dy > 0.0 && expanded {
        return ClaimDecision::PassThrough;
    }

    if ctx.dy.abs() > ctx.touch_slop
        && ((ctx.dy > 0.0 && ctx.offset <= 0.0) || (ctx.dy < 0.0 && ctx.offset >= -ctx.content_max))
    {
        return ClaimDecision::Claim;
    }
    ClaimDecision::Pending
}

/// Resting state a released drag settles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleDirection {
    Expand,
    Shrink,
}

/// Classify a release from its velocity (px/s, positive downward) and its
/// net displacement since pointer-down.
///
/// A fling beyond `fling_threshold` decides alone. Otherwise the sign of
/// the displacement decides, and a release that did not move expands.
pub fn classify_release(velocity: f32, displacement: f32, fling_threshold: f32) -> SettleDirection {
    if velocity > fling_threshold {
        SettleDirection::Expand
    } else if velocity < -fling_threshold {
        SettleDirection::Shrink
    } else if displacement < 0.0 {
        SettleDirection::Shrink
    } else {
        SettleDirection::Expand
    }
}
