//! Latest-wins coordination for per-view results.
//!
//! Analysis and briefing requests can overlap: a user may re-request before
//! the first response lands, or navigate away entirely. Each request carries
//! a tag from a monotonically increasing sequence, and only the value tagged
//! with the latest request may be applied. Correctness never depends on
//! aborting the superseded future; its result is simply discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Identity of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTag(u64);

/// Monotonic sequence of requests for one view.
#[derive(Debug, Default)]
pub struct ViewSequencer {
    latest: AtomicU64,
}

impl ViewSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new tag, superseding every earlier one.
    pub fn supersede(&self) -> RequestTag {
        RequestTag(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, tag: RequestTag) -> bool {
        self.latest.load(Ordering::SeqCst) == tag.0
    }

    /// Mark every in-flight request stale, e.g. on navigation away.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    Stale,
}

/// A slot holding the latest applied value for one view.
#[derive(Debug, Default)]
pub struct LatestOnly<T> {
    seq: ViewSequencer,
    slot: Mutex<Option<T>>,
}

impl<T> LatestOnly<T> {
    pub fn new() -> Self {
        LatestOnly {
            seq: ViewSequencer::new(),
            slot: Mutex::new(None),
        }
    }

    /// Tag a new request, superseding any in flight.
    pub fn issue(&self) -> RequestTag {
        self.seq.supersede()
    }

    /// Apply a result if its request is still the latest; otherwise drop it.
    pub fn apply(&self, tag: RequestTag, value: T) -> Applied {
        let mut slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());
        if !self.seq.is_current(tag) {
            tracing::debug!(tag = tag.0, "discarding stale view result");
            return Applied::Stale;
        }
        *slot = Some(value);
        Applied::Applied
    }

    /// Clear the slot and mark in-flight requests stale.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());
        self.seq.invalidate();
        *slot = None;
    }

    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.slot.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}
