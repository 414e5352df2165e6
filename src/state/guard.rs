//! Re-entrancy guards for one-shot and in-flight work.
//!
//! TRADE-OFFS
//! ==========
//! A [`OnceFlag`] never resets: the bootstrapper runs once per app instance.
//! A [`LoadGuard`] only blocks overlapping loads; its ticket releases on drop
//! whether the load succeeded or failed, so every later visit fetches fresh.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::atomic::{AtomicBool, Ordering};

/// Flag that can be claimed exactly once.
#[derive(Debug, Default)]
pub struct OnceFlag(AtomicBool);

impl OnceFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the flag. Returns `false` if it was already claimed.
    pub fn claim(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Blocks a second load while one is in flight.
#[derive(Debug)]
pub struct LoadGuard {
    name: &'static str,
    busy: AtomicBool,
}

impl LoadGuard {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, busy: AtomicBool::new(false) }
    }

    /// Start a load, or `None` if another one is still running.
    #[must_use]
    pub fn try_acquire(&self) -> Option<LoadTicket<'_>> {
        if self.busy.swap(true, Ordering::AcqRel) {
            tracing::warn!(guard = self.name, "load already in flight; ignoring duplicate request");
            return None;
        }
        Some(LoadTicket { guard: self })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the duration of a load; releases its guard on drop.
#[derive(Debug)]
pub struct LoadTicket<'a> {
    guard: &'a LoadGuard,
}

impl Drop for LoadTicket<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}
