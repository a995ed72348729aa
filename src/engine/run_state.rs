//! Run gating.
//!
//! At most one algorithm run is active at a time. [`RunState`] is the busy
//! flag; [`RunGuard`] is the scoped acquisition that releases it on every
//! exit path (normal return, `?` propagation, or unwinding).

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared busy flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    busy: Arc<AtomicBool>,
}

impl RunState {
    /// Create an idle run state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark busy. Returns `false` with no side effect if already busy.
    #[must_use]
    pub fn try_begin(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Mark idle. Pairs with exactly one successful [`Self::try_begin`].
    pub fn end(&self) {
        self.busy.store(false, Ordering::Release);
    }

    /// Whether a run is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Scoped [`Self::try_begin`]: the returned guard calls [`Self::end`]
    /// when dropped.
    #[must_use]
    pub fn acquire(&self) -> Option<RunGuard> {
        self.try_begin().then(|| RunGuard {
            state: self.clone(),
            on_release: None,
        })
    }

    /// Like [`Self::acquire`], additionally running `on_release` right after
    /// the flag is cleared.
    #[must_use]
    pub fn acquire_with<F>(&self, on_release: F) -> Option<RunGuard>
    where
        F: FnOnce() + Send + 'static,
    {
        self.try_begin().then(|| RunGuard {
            state: self.clone(),
            on_release: Some(Box::new(on_release)),
        })
    }
}

/// Releases the owning [`RunState`] on drop.
#[must_use = "dropping the guard immediately ends the run"]
pub struct RunGuard {
    state: RunState,
    on_release: Option<Box<dyn FnOnce() + Send>>,
}

impl fmt::Debug for RunGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunGuard")
            .field("state", &self.state)
            .field("has_release_hook", &self.on_release.is_some())
            .finish()
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.state.end();
        if let Some(hook) = self.on_release.take() {
            hook();
        }
    }
}
