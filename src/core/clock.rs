use std::time::Duration;

/// Timing snapshot handed to every per-frame update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTime {
    pub delta: Duration,
    pub elapsed: Duration,
}

impl FrameTime {
    #[must_use]
    pub const fn new(delta: Duration, elapsed: Duration) -> Self {
        Self { delta, elapsed }
    }

    #[must_use]
    pub fn delta_seconds(self) -> f64 {
        self.delta.as_secs_f64()
    }

    #[must_use]
    pub fn elapsed_seconds(self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
