//! Fixed-duration waits that stand in for server round trips.

use std::time::Duration;

/// A simulated latency. Awaiting it sleeps on the tokio timer; a zero delay
/// completes immediately without touching the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedDelay(Duration);

impl SimulatedDelay {
    pub const NONE: Self = Self(Duration::ZERO);

    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub async fn elapse(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
