//! Per-user serialisation of session updates
//!
//! The engine holds a user's guard across load, mutate and persist so that two
//! messages from the same user never interleave. Messages from different
//! users take different locks and run in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use crate::models::UserIdentity;

type LockMap = HashMap<UserIdentity, Arc<AsyncMutex<()>>>;

/// Registry of per-user locks
#[derive(Debug, Clone, Default)]
pub struct SessionLocks {
    locks: Arc<Mutex<LockMap>>,
}

/// Exclusive access to one user's session until dropped
#[derive(Debug)]
pub struct SessionGuard {
    user_id: UserIdentity,
    locks: Arc<Mutex<LockMap>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to a user's session
    ///
    /// Waiters are served in FIFO order, so messages from one user are
    /// processed in arrival order.
    pub async fn acquire(&self, user_id: UserIdentity) -> SessionGuard {
        let lock = {
            let mut locks = lock_map(&self.locks);
            locks.entry(user_id).or_default().clone()
        };

        let guard = lock.lock_owned().await;
        SessionGuard {
            user_id,
            locks: self.locks.clone(),
            guard: Some(guard),
        }
    }

    /// Number of users that currently hold or wait for a lock
    pub fn active(&self) -> usize {
        lock_map(&self.locks).len()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let mut locks = lock_map(&self.locks);
        if let Some(lock) = locks.get(&self.user_id) {
            // The registry and this guard hold the only references: nobody waits.
            if Arc::strong_count(lock) == 2 {
                locks.remove(&self.user_id);
            }
        }
        drop(self.guard.take());
    }
}

fn lock_map(locks: &Mutex<LockMap>) -> std::sync::MutexGuard<'_, LockMap> {
    locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
