//! Per-user refresh serialization.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// In-process registry of per-user refresh locks.
///
/// A refresh token can only be exchanged once, so two tasks refreshing the same user
/// concurrently would make the loser fail and delete a credential that was just
/// rotated. Holding the user's lock across re-read, exchange and persist prevents
/// that within one process. Entries are dropped once nobody holds or awaits them.
///
/// Clones share the same registry.
#[derive(Clone, Default)]
pub struct RefreshLocks {
    locks: Arc<DashMap<u64, Arc<Mutex<()>>>>,
}

impl RefreshLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and takes the refresh lock of a user.
    pub async fn lock(&self, user_id: u64) -> RefreshGuard {
        let mutex = self.locks.entry(user_id).or_default().clone();
        let guard = mutex.lock_owned().await;

        RefreshGuard {
            locks: self.locks.clone(),
            user_id,
            guard: Some(guard),
        }
    }

    /// Number of users with a held or awaited lock.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Holds a user's refresh lock until dropped.
pub struct RefreshGuard {
    locks: Arc<DashMap<u64, Arc<Mutex<()>>>>,
    user_id: u64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        let Some(guard) = self.guard.take() else {
            return;
        };

        let mutex = OwnedMutexGuard::mutex(&guard).clone();
        drop(guard);

        // Only the registry and `mutex` remain when no other task is waiting.
        self.locks.remove_if(&self.user_id, |_, entry| {
            Arc::ptr_eq(entry, &mutex) && Arc::strong_count(entry) == 2
        });
    }
}
