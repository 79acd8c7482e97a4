//! Client-wide request status.
//!
//! Every operation registers itself for the span between dispatch and
//! settlement. `busy` is derived from the number of outstanding calls, so
//! overlapping operations never clear each other's flag. `last_error` is
//! shared: it is cleared when a call starts and set when a call is rejected.

use tokio::sync::watch;

/// Point-in-time view of the client status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Number of operations dispatched and not yet settled.
    pub in_flight: usize,
    /// Message of the most recent rejection, empty if none since the last call started.
    pub last_error: String,
}

impl StatusSnapshot {
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

/// Shared status record, observable through [`StatusTracker::subscribe`].
#[derive(Debug)]
pub struct StatusTracker {
    tx: watch::Sender<StatusSnapshot>,
}

impl StatusTracker {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(StatusSnapshot::default());
        Self { tx }
    }

    /// Mark a call as started. The returned guard settles it on drop.
    pub fn begin(&self) -> InFlight<'_> {
        self.tx.send_modify(|status| {
            status.in_flight += 1;
            status.last_error.clear();
        });
        InFlight { tracker: self }
    }

    /// Record a rejection message.
    pub fn record_error(&self, message: &str) {
        self.tx.send_modify(|status| {
            status.last_error = message.to_string();
        });
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        self.tx.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.tx.borrow().is_busy()
    }

    pub fn last_error(&self) -> String {
        self.tx.borrow().last_error.clone()
    }

    /// Watch status changes, e.g. to drive a status bar.
    pub fn subscribe(&self) -> watch::Receiver<StatusSnapshot> {
        self.tx.subscribe()
    }

    fn settle(&self) {
        self.tx.send_modify(|status| {
            status.in_flight = status.in_flight.saturating_sub(1);
        });
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for one in-flight call.
#[must_use = "the call settles as soon as the guard is dropped"]
#[derive(Debug)]
pub struct InFlight<'a> {
    tracker: &'a StatusTracker,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.tracker.settle();
    }
}
