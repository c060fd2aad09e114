use std::time::Duration;

use super::VelocityTracker;

/// How far a touch stream has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Pointer is down, no movement yet
    TrackingDown,
    /// Moving, still owned by a descendant
    Unclaimed,
    /// Moving, owned by the layout
    Claimed,
}

/// Everything known about one physical touch stream.
///
/// Created at pointer-down and dropped at pointer-up or cancel.
#[derive(Debug, Clone)]
pub struct GestureSession {
    anchor_y: f32,
    last_y: f32,
    down_on_content: bool,
    stage: Stage,
    velocity: VelocityTracker,
}

impl GestureSession {
    pub fn begin(y: f32, timestamp: Duration, down_on_content: bool) -> Self {
        let mut velocity = VelocityTracker::new();
        velocity.push(y, timestamp);
        Self {
            anchor_y: y,
            last_y: y,
            down_on_content,
            stage: Stage::TrackingDown,
            velocity,
        }
    }

    pub fn anchor_y(&self) -> f32 {
        self.anchor_y
    }

    pub fn last_y(&self) -> f32 {
        self.last_y
    }

    /// Whether the pointer went down on the content pane.
    pub fn down_on_content(&self) -> bool {
        self.down_on_content
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_claimed(&self) -> bool {
        self.stage == Stage::Claimed
    }

    /// Net displacement since pointer-down. Positive is downward.
    pub fn net_displacement(&self, y: f32) -> f32 {
        y - self.anchor_y
    }

    /// Record a pointer sample for the release velocity.
    pub fn record(&mut self, y: f32, timestamp: Duration) {
        self.velocity.push(y, timestamp);
    }

    pub fn velocity(&self, max_velocity: f32) -> f32 {
        self.velocity.velocity(max_velocity)
    }

    /// Leave `TrackingDown` on the first non-zero movement.
    pub(crate) fn mark_moving(&mut self, y: f32) {
        if self.stage == Stage::TrackingDown && y != self.anchor_y {
            self.stage = Stage::Unclaimed;
        }
    }

    pub(crate) fn claim(&mut self, y: f32) {
        self.stage = Stage::Claimed;
        self.last_y = y;
    }

    /// Delta since the previous applied move; advances the reference point.
    pub(crate) fn take_delta(&mut self, y: f32) -> f32 {
        let dy = y - self.last_y;
        self.last_y = y;
        dy
    }

    pub(crate) fn forget_origin(&mut self) {
        self.down_on_content = false;
    }
}

/// Touch stream ownership of the layout.
#[derive(Debug, Clone, Default)]
pub enum Tracker {
    /// No stream, or the current stream passes through untouched
    #[default]
    Idle,
    Tracking(GestureSession),
}

impl Tracker {
    pub fn session(&self) -> Option<&GestureSession> {
        match self {
            Tracker::Idle => None,
            Tracker::Tracking(session) => Some(session),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut GestureSession> {
        match self {
            Tracker::Idle => None,
            Tracker::Tracking(session) => Some(session),
        }
    }

    pub fn take(&mut self) -> Option<GestureSession> {
        match std::mem::take(self) {
            Tracker::Idle => None,
            Tracker::Tracking(session) => Some(session),
        }
    }
}
