use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cooperative cancellation flag shared with signal handlers.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next tick boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Waits between ticks.
pub trait Pacer {
    /// Block until the next tick is due or `cancel` fires.
    fn pace(&mut self, interval: Duration, cancel: &CancelToken);
}

/// Fixed wall-clock cadence. Deadlines advance by exactly one interval; when a tick overruns,
/// the schedule restarts from now instead of bursting to catch up.
#[derive(Debug, Default)]
pub struct SleepPacer {
    deadline: Option<Instant>,
}

impl SleepPacer {
    const SLICE: Duration = Duration::from_millis(50);

    /// Pacer with no deadline yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for SleepPacer {
    fn pace(&mut self, interval: Duration, cancel: &CancelToken) {
        let now = Instant::now();
        let deadline = match self.deadline {
            Some(prev) if prev + interval > now => prev + interval,
            _ => now + interval,
        };
        self.deadline = Some(deadline);

        loop {
            if cancel.is_cancelled() {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            std::thread::sleep((deadline - now).min(Self::SLICE));
        }
    }
}

/// Runs ticks back to back.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pace(&mut self, _interval: Duration, _cancel: &CancelToken) {}
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/pacer.rs"]
mod tests;
