//! Process-wide stop flag.
//! Set by the Ctrl-C handler; the renamer polls it between entries so a run
//! can end without leaving a half-processed entry behind.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Ask the current run to stop after the entry in flight (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Clear the flag between runs in the same process (tests).
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}
