use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

/// Delays an action until input stops arriving for a quiet period.
///
/// The debouncer owns its single timer: [`schedule`](Self::schedule) replaces
/// whatever was pending, so only the latest payload ever fires. Time is passed
/// in explicitly, which keeps the type usable from any event loop and
/// deterministic under test.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Cancel any pending payload and schedule `payload` to fire once
    /// `quiet` has elapsed after `now`.
    pub fn schedule(&mut self, now: Instant, payload: T) {
        self.pending = Some(Pending {
            deadline: now + self.quiet,
            payload,
        });
    }

    /// Drop the pending payload, if any, and hand it back.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Take the payload if its quiet period has fully elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if due { self.cancel() } else { None }
    }
}
