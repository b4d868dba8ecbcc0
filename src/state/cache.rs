//! In-memory session cache
//!
//! Fronts the session store so that most messages are served without a
//! storage round trip. The cache never loads from the store by itself: on a
//! miss the engine consults the store and then calls [`SessionCache::put`].
//!
//! Entries carry a `persisted` flag. Capacity eviction only ever drops entries
//! whose latest value is known to be durable; when no such entry exists the
//! cache grows past its capacity rather than lose an unsaved session.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use lru::LruCache;
use tracing::{debug, warn};
use crate::models::{Session, UserIdentity};

/// A cached session and whether its current value has reached the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSession {
    pub session: Session,
    pub persisted: bool,
}

/// LRU cache of sessions keyed by user
#[derive(Debug)]
pub struct SessionCache {
    entries: Mutex<LruCache<UserIdentity, CachedSession>>,
    /// Soft bound; `None` means unbounded
    capacity: Option<NonZeroUsize>,
}

impl SessionCache {
    /// Create a cache; a capacity of 0 disables the bound
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(LruCache::unbounded()),
            capacity: NonZeroUsize::new(capacity),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Cached session for a user, refreshing its recency
    pub fn get(&self, user_id: UserIdentity) -> Option<CachedSession> {
        let mut entries = self.lock();
        let hit = entries.get(&user_id).cloned();
        debug!(user_id = user_id, hit = hit.is_some(), "Session cache lookup");
        hit
    }

    /// Cache a session, evicting persisted entries if over capacity
    pub fn put(&self, session: Session, persisted: bool) {
        let user_id = session.user_id;
        let mut entries = self.lock();
        entries.put(user_id, CachedSession { session, persisted });

        if let Some(capacity) = self.capacity {
            while entries.len() > capacity.get() {
                let victim = entries
                    .iter()
                    .rev()
                    .find(|(id, entry)| entry.persisted && **id != user_id)
                    .map(|(id, _)| *id);

                match victim {
                    Some(id) => {
                        entries.pop(&id);
                        debug!(user_id = id, "Evicted persisted session from cache");
                    }
                    None => {
                        warn!(
                            cached = entries.len(),
                            capacity = capacity.get(),
                            "Session cache over capacity with only unsaved sessions, growing"
                        );
                        break;
                    }
                }
            }
        }
    }

    /// Drop a session from memory if its cached value is durable
    ///
    /// Returns whether the entry was removed.
    pub fn evict_if_persisted(&self, user_id: UserIdentity) -> bool {
        let mut entries = self.lock();
        match entries.peek(&user_id) {
            Some(entry) if entry.persisted => {
                entries.pop(&user_id);
                debug!(user_id = user_id, "Evicted finished session from cache");
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, user_id: UserIdentity) -> bool {
        self.lock().contains(&user_id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<UserIdentity, CachedSession>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::State;

    fn session(user_id: UserIdentity) -> Session {
        Session::new(user_id)
    }

    #[test]
    fn test_get_returns_put_value() {
        let cache = SessionCache::unbounded();
        assert!(cache.get(1).is_none());

        let mut s = session(1);
        s.state = State::SelectGroup;
        cache.put(s.clone(), true);

        let cached = cache.get(1).unwrap();
        assert_eq!(cached.session, s);
        assert!(cached.persisted);
    }

    #[test]
    fn test_one_entry_per_user() {
        let cache = SessionCache::unbounded();
        cache.put(session(1), true);
        cache.put(session(1), false);
        assert_eq!(cache.len(), 1);
        assert!(!cache.get(1).unwrap().persisted);
    }

    #[test]
    fn test_capacity_evicts_least_recent_persisted() {
        let cache = SessionCache::new(2);
        cache.put(session(1), true);
        cache.put(session(2), true);
        // touch 1 so that 2 becomes least recent
        cache.get(1);
        cache.put(session(3), true);

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(1));
        assert!(!cache.contains(2));
        assert!(cache.contains(3));
    }

    #[test]
    fn test_capacity_never_evicts_unsaved_sessions() {
        let cache = SessionCache::new(2);
        cache.put(session(1), false);
        cache.put(session(2), true);
        cache.put(session(3), false);

        // 2 was the only durable entry
        assert!(cache.contains(1));
        assert!(!cache.contains(2));
        assert!(cache.contains(3));

        cache.put(session(4), false);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_evict_if_persisted() {
        let cache = SessionCache::unbounded();
        cache.put(session(1), false);
        assert!(!cache.evict_if_persisted(1));

        cache.put(session(1), true);
        assert!(cache.evict_if_persisted(1));
        assert!(cache.is_empty());
        assert!(!cache.evict_if_persisted(1));
    }
}
