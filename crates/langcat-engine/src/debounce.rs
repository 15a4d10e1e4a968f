//! Trailing-edge debouncer.
//!
//! Each call site owns its own `Debouncer`, so two debounced operations
//! never cancel each other. The clock is passed in by the caller: the UI
//! loop hands in `Instant::now()` and tests hand in synthetic instants.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    due: Instant,
    args: T,
}

/// Collapses a burst of triggers into one delayed firing with the latest args
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `args` to fire `delay` after `now`, replacing any pending call
    pub fn trigger(&mut self, args: T, now: Instant) {
        self.pending = Some(Pending {
            due: now + self.delay,
            args,
        });
    }

    /// Take the pending args once their deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// Take the pending args immediately, regardless of the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.args)
    }

    /// Drop the pending call without firing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending call is due; `None` when idle
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_fires_once_with_last_args() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let mut executions = Vec::new();

        for (i, offset) in [0, 60, 120, 180, 240].into_iter().enumerate() {
            let now = start + ms(offset);
            debouncer.trigger(i, now);
            if let Some(args) = debouncer.poll(now) {
                executions.push(args);
            }
        }

        // Step through the next second in 10ms ticks like the UI loop would
        for tick in (250..=1_240).step_by(10) {
            if let Some(args) = debouncer.poll(start + ms(tick)) {
                executions.push(args);
            }
        }

        assert_eq!(executions, vec![4]);
    }

    #[test]
    fn test_not_due_before_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger("q", start);

        assert_eq!(debouncer.poll(start + ms(299)), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + ms(300)), Some("q"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_retrigger_pushes_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger(1, start);
        debouncer.trigger(2, start + ms(200));

        assert_eq!(debouncer.poll(start + ms(300)), None);
        assert_eq!(debouncer.poll(start + ms(500)), Some(2));
    }

    #[test]
    fn test_cancel_and_flush() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.trigger(1, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + ms(1_000)), None);

        debouncer.trigger(2, start);
        assert_eq!(debouncer.flush(), Some(2));
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn test_separate_debouncers_are_independent() {
        let start = Instant::now();
        let mut search = Debouncer::new(DELAY);
        let mut other = Debouncer::new(DELAY);

        search.trigger("rust", start);
        other.trigger("resize", start + ms(100));

        assert_eq!(search.poll(start + ms(300)), Some("rust"));
        assert_eq!(other.poll(start + ms(400)), Some("resize"));
    }

    #[test]
    fn test_time_until_due() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.time_until_due(start), None);

        debouncer.trigger((), start);
        assert_eq!(debouncer.time_until_due(start + ms(100)), Some(ms(200)));
        assert_eq!(debouncer.time_until_due(start + ms(400)), Some(Duration::ZERO));
    }
}
