use std::time::{Duration, Instant};

/// Quiet interval the breed search waits for before applying a new term.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Time-injected debouncer: a value only becomes `settled` once it has stayed
/// unchanged for the quiet interval. Callers drive it with explicit instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounced<T> {
    quiet: Duration,
    settled: T,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq + Default> Debounced<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            settled: T::default(),
            pending: None,
        }
    }

    /// Records a new raw value observed at `at`, restarting the quiet interval.
    pub fn input(&mut self, value: T, at: Instant) {
        self.pending = Some((value, at));
    }

    /// Promotes the pending value if it has been stable long enough.
    /// Returns `true` when the settled value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let ready = match &self.pending {
            Some((_, at)) => now.saturating_duration_since(*at) >= self.quiet,
            None => false,
        };
        if !ready {
            return false;
        }
        let Some((value, _)) = self.pending.take() else {
            return false;
        };
        if value == self.settled {
            return false;
        }
        self.settled = value;
        true
    }

    /// Latest raw value (pending if any, otherwise settled).
    pub fn raw(&self) -> &T {
        match &self.pending {
            Some((value, _)) => value,
            None => &self.settled,
        }
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T: Clone + PartialEq + Default> Default for Debounced<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
