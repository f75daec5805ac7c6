use std::time::{Duration, Instant};

/// Holds at most one pending query and releases it once `delay` has passed
/// without a newer one. Scheduling replaces whatever was pending.
///
/// The caller supplies the clock, so this never sleeps or spawns anything.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    due: Instant,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration { self.delay }

    pub fn schedule(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some(Pending { query: query.into(), due: now + self.delay });
    }

    /// The pending query if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if p.due <= now => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}
