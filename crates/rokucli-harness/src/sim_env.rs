//! Virtual clock implementing [`Environment`].
//!
//! Sleeping advances the clock instantly and records the duration, so tests
//! can assert on settle delays without waiting for them.

use std::{
    future::{self, Future},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use rokucli_core::Environment;

#[derive(Debug, Default)]
struct Clock {
    now: Duration,
    sleeps: Vec<Duration>,
}

/// Simulated environment with a virtual clock.
///
/// Clones share the same clock.
#[derive(Debug, Clone, Default)]
pub struct SimEnv {
    clock: Arc<Mutex<Clock>>,
}

impl SimEnv {
    /// Create an environment at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn clock(&self) -> MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.clock().sleeps.clone()
    }

    /// Virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.clock().now
    }

    /// Advance the clock without recording a sleep.
    pub fn advance(&self, duration: Duration) {
        self.clock().now += duration;
    }
}

impl Environment for SimEnv {
    type Instant = Duration;

    fn now(&self) -> Self::Instant {
        self.clock().now
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        let mut clock = self.clock();
        clock.now += duration;
        clock.sleeps.push(duration);
        future::ready(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_advances_shared_clock() {
        let env = SimEnv::new();
        let clone = env.clone();

        drop(clone.sleep(Duration::from_millis(250)));
        env.advance(Duration::from_millis(50));

        assert_eq!(env.now(), Duration::from_millis(300));
        assert_eq!(env.sleeps(), vec![Duration::from_millis(250)]);
    }
}
