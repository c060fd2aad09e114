//! Pointer stream tracking: sessions, velocity, claim and release rules.

mod claim;
mod session;
mod velocity;

pub use claim::{classify_release, decide_claim, ClaimContext, ClaimDecision, SettleDirection};
pub use session::{GestureSession, Stage, Tracker};
pub use velocity::VelocityTracker;

/// Coarse state of the layout's gesture handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    TrackingDown,
    DraggingUnclaimed,
    DraggingClaimed,
    /// A settle or slide animation is in flight
    Settling,
}
