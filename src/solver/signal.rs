//! Early-stop hook polled by long-running searches.

use super::solution::SolveStatus;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// External cancellation flag and/or wall-clock deadline.
///
/// Searches call [`poll`](Self::poll) between units of work (node
/// expansions, table rows) and return their incumbent when it fires.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl StopSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Sets the deadline to `limit` from now.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.deadline = Instant::now().checked_add(limit);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the terminal status if the search should stop now.
    pub fn poll(&self) -> Option<SolveStatus> {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Some(SolveStatus::Cancelled);
            }
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(SolveStatus::TimedOut),
            _ => None,
        }
    }
}
