use std::collections::VecDeque;
use std::time::Duration;

/// Samples older than this, relative to the newest one, are dropped.
const HISTORY_LIMIT: Duration = Duration::from_millis(150);

/// Estimates vertical pointer velocity from recent position samples.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    history: VecDeque<Sample>,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    y: f32,
    timestamp: Duration,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new pointer position into the tracker.
    pub fn push(&mut self, y: f32, timestamp: Duration) {
        // Timestamps of one touch stream only ever increase.
        if let Some(last) = self.history.back() {
            if timestamp < last.timestamp {
                log::trace!(
                    "ignoring sample at {timestamp:?} earlier than last {:?}",
                    last.timestamp
                );
                return;
            }
        }

        self.history.push_back(Sample { y, timestamp });
        self.trim_history();
    }

    /// Velocity in px/s, clamped to `±max_velocity`. Positive is downward.
    pub fn velocity(&self, max_velocity: f32) -> f32 {
        let (Some(first), Some(last)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };

        let total_time = (last.timestamp - first.timestamp).as_secs_f32();
        if total_time == 0.0 {
            return 0.0;
        }

        let velocity = (last.y - first.y) / total_time;
        velocity.clamp(-max_velocity, max_velocity)
    }

    fn trim_history(&mut self) {
        let Some(&Sample { timestamp, .. }) = self.history.back() else {
            return;
        };

        while let Some(first) = self.history.front() {
            if timestamp <= first.timestamp + HISTORY_LIMIT {
                break;
            }

            let _ = self.history.pop_front();
        }
    }
}
