//! In-flight guard: at most one outstanding webhook request per session

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Busy flag shared by a session and the permit of its outstanding request
#[derive(Debug, Clone, Default)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
}

impl InFlightGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session busy.
    ///
    /// Returns `None` without side effects if a request is already
    /// outstanding. Dropping the permit releases the flag.
    #[must_use]
    pub fn try_begin(&self) -> Option<InFlightPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the lifetime of one request; `end` runs on drop
#[derive(Debug)]
pub struct InFlightPermit {
    busy: Arc<AtomicBool>,
}

impl InFlightPermit {
    /// Release the guard now instead of at end of scope
    pub fn end(self) {}
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
