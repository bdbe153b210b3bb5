//! Caller-owned holder for the route currently on screen.
//!
//! Every fetch claims a [`Generation`] before it goes out. When results come
//! back out of order only the one carrying the most recently claimed
//! generation is kept, so a slow response for an old destination or mode
//! cannot overwrite a newer route.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::fetcher::RouteResult;

/// Monotonically increasing ticket for one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RouteSlot {
    latest: AtomicU64,
    current: Mutex<Option<RouteResult>>,
}

impl RouteSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the next generation. Results of earlier generations become stale.
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Most recently claimed generation.
    pub fn latest(&self) -> Generation {
        Generation(self.latest.load(Ordering::SeqCst))
    }

    /// Stores `result` if `generation` is still the latest one.
    ///
    /// Returns `false` and drops the result when a newer fetch has begun.
    pub fn publish(&self, generation: Generation, result: RouteResult) -> bool {
        let mut current = self.lock();
        let latest = self.latest.load(Ordering::SeqCst);
        if generation.0 != latest {
            debug!(
                generation = generation.0,
                latest, "discarding superseded route result"
            );
            return false;
        }
        *current = Some(result);
        true
    }

    pub fn current(&self) -> Option<RouteResult> {
        self.lock().clone()
    }

    /// Drops the current result and invalidates fetches still in flight.
    pub fn clear(&self) {
        let mut current = self.lock();
        self.latest.fetch_add(1, Ordering::SeqCst);
        *current = None;
    }

    fn lock(&self) -> MutexGuard<'_, Option<RouteResult>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
