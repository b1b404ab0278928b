//! Listener registry.
//!
//! Listeners receive a structured [`LogEvent`] for every dispatched call.
//! Fan-out iterates a snapshot taken before the first callback runs, so a
//! listener may add or remove listeners (or log again) without affecting
//! the delivery in progress.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chanlog_core::LogEvent;
use chanlog_core::logging::{debug, targets};

/// Listener callback.
///
/// All listeners of one dispatch receive the same event in turn; changes a
/// listener makes to it are visible to the listeners after it.
pub type Listener = dyn Fn(&mut LogEvent) + Send + Sync;

/// Opaque handle identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Ordered set of listeners.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: AtomicU64,
    entries: Mutex<Vec<(ListenerId, Arc<Listener>)>>,
}

impl ListenerRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<(ListenerId, Arc<Listener>)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener; it is notified after every earlier one.
    pub fn add<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&mut LogEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries().push((id, Arc::new(callback)));
        debug!(target: targets::LISTENERS, "added {id}");
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    ///
    /// Returns whether a listener was removed.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = entries.len() != before;
        if removed {
            debug!(target: targets::LISTENERS, "removed {id}");
        }
        removed
    }

    /// Number of registered listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True if no listener is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Deliver `event` to every listener registered right now, in order.
    pub fn notify(&self, event: &mut LogEvent) {
        let snapshot: Vec<Arc<Listener>> = self
            .entries()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
