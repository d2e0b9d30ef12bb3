use instant::Instant;
use std::time::Duration;

/// Outcome of asking a [`Debouncer`] to release a scheduled value
#[derive(Debug, PartialEq)]
pub enum Settle<T> {
    /// The quiet period elapsed; emit this value
    Ready(T),
    /// Still inside the quiet period; check again after this long
    Wait(Duration),
    /// A newer push or a cancel superseded this generation
    Stale,
}

/// Trailing-edge debounce state: only the last value pushed is released, and only
/// once `window` has passed without another push.
///
/// Every push returns a generation number. The timer task that was started for
/// that push calls [`Debouncer::settle`] with it; older generations come back
/// as [`Settle::Stale`].
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
    generation: u64,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            deadline: None,
            generation: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    #[cfg(test)]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[cfg(test)]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new value and restart the quiet period
    pub fn push(&mut self, value: T, now: Instant) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.deadline = Some(now + self.window);
        self.generation
    }

    pub fn settle(&mut self, generation: u64, now: Instant) -> Settle<T> {
        if generation != self.generation {
            return Settle::Stale;
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                match self.pending.take() {
                    Some(value) => Settle::Ready(value),
                    None => Settle::Stale,
                }
            }
            Some(deadline) => Settle::Wait(deadline - now),
            None => Settle::Stale,
        }
    }

    /// Drop the pending value, if any, and invalidate outstanding timers
    pub fn cancel(&mut self) -> Option<T> {
        self.generation += 1;
        self.deadline = None;
        self.pending.take()
    }
}
