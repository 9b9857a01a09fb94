//! Registry of outstanding requests owned by one widget instance.
//!
//! Every request future is wrapped in an [`Abortable`] before it is
//! spawned. Dropping the widget calls [`InFlight::cancel_all`], so a late
//! response resolves to `None` instead of writing into disposed state.

#[cfg(test)]
#[path = "in_flight_test.rs"]
mod in_flight_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{AbortHandle, Abortable};

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
    closed: bool,
}

/// Cloneable handle to a shared set of abort handles.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    inner: Arc<Mutex<Registry>>,
}

impl InFlight {
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wrap `fut` so it can be cancelled by [`InFlight::cancel_all`].
    ///
    /// The returned future yields `Some(output)` when `fut` completes and
    /// `None` when it was cancelled first. Tracking after `cancel_all` yields
    /// an already-cancelled future.
    pub fn track<F: Future>(&self, fut: F) -> impl Future<Output = Option<F::Output>> + use<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut registry = self.lock();
            if registry.closed {
                handle.abort();
            }
            registry.next_id += 1;
            let id = registry.next_id;
            registry.handles.insert(id, handle);
            id
        };

        let owner = self.clone();
        async move {
            let output = Abortable::new(fut, registration).await.ok();
            owner.lock().handles.remove(&id);
            output
        }
    }

    /// Number of tracked requests that have not finished yet.
    pub fn pending(&self) -> usize {
        self.lock().handles.len()
    }

    /// Abort every outstanding request and refuse new ones.
    pub fn cancel_all(&self) {
        let mut registry = self.lock();
        registry.closed = true;
        for (_, handle) in registry.handles.drain() {
            handle.abort();
        }
    }
}
