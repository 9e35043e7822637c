//! Thread-safe store handle.
//!
//! Stores are single-writer. When several callers (UI events, tasks) need
//! the same store, they share a [`SharedStore`] and every mutation runs
//! under its lock, which keeps the one-line-per-product invariant intact.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a store behind a mutex.
pub struct SharedStore<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedStore<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a read against the store.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock())
    }

    /// Run a mutation against the store.
    ///
    /// Listeners registered on the store run inside the lock, so they must
    /// not call back into the same handle.
    pub fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.lock())
    }

    /// A panic inside a closure leaves the store consistent (every mutation
    /// validates before committing), so a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Default> Default for SharedStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for SharedStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedStore").field(&*self.lock()).finish()
    }
}
