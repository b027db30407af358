//! Environment abstraction for deterministic testing.
//!
//! Decouples plan execution from wall-clock time. Production uses tokio's
//! timer; simulation advances a virtual clock so settle delays cost nothing.

use std::{future::Future, ops::Sub, time::Duration};

/// Abstract environment providing time.
///
/// # Invariants
///
/// - `now()` never goes backwards
/// - after `sleep(d)` completes, `now()` has advanced by at least `d`
pub trait Environment: Clone + Send + Sync + 'static {
    /// Instant type. `std::time::Instant` in production, virtual in
    /// simulation.
    type Instant: Copy + Ord + Send + Sync + Sub<Output = Duration>;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Sleeps for the specified duration.
    ///
    /// Only the runtime calls this; planning never waits.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production environment backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a system environment.
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
