//! Session store contract and its key-value backends
//!
//! A store keeps one durable record per user. `save` is an upsert; `load`
//! returns `None` for a user that has never been saved. The SQLite backend
//! lives with the other database code in `crate::database`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, error};
use crate::config::RedisConfig;
use crate::models::{Session, UserIdentity};
use crate::utils::errors::{StorageError, StorageResult};

/// Durable persistence of one session record per user
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for a user, `None` if it was never saved
    async fn load(&self, user_id: UserIdentity) -> StorageResult<Option<Session>>;

    /// Insert or replace the session record
    async fn save(&self, session: &Session) -> StorageResult<()>;

    /// Verify the backend is reachable
    async fn health_check(&self) -> StorageResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Redis-based session store
#[derive(Clone)]
pub struct RedisSessionStore {
    /// Redis connection manager
    connection_manager: redis::aio::ConnectionManager,
    /// Redis configuration
    config: RedisConfig,
}

impl RedisSessionStore {
    /// Create a new Redis session store
    pub async fn new(config: RedisConfig) -> StorageResult<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    /// Remove a stored session; used by tests to clean up after themselves
    pub async fn delete(&self, user_id: UserIdentity) -> StorageResult<bool> {
        let key = self.session_key(user_id);
        let mut conn = self.connection_manager.clone();

        let deleted: u32 = conn.del(&key).await?;
        debug!(user_id = user_id, deleted = deleted > 0, "Deleted session from Redis");
        Ok(deleted > 0)
    }

    /// Get the Redis key for a user's session
    fn session_key(&self, user_id: UserIdentity) -> String {
        format!("{}session:{}", self.config.prefix, user_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, user_id: UserIdentity) -> StorageResult<Option<Session>> {
        let key = self.session_key(user_id);
        debug!(user_id = user_id, key = %key, "Loading session from Redis");

        let mut conn = self.connection_manager.clone();
        let serialized: Option<String> = conn.get(&key).await?;

        match serialized {
            Some(data) => {
                let session: Session = serde_json::from_str(&data).map_err(|e| {
                    error!(user_id = user_id, error = %e, "Failed to deserialize session");
                    StorageError::Corrupt {
                        user_id,
                        reason: e.to_string(),
                    }
                })?;
                debug!(user_id = user_id, state = %session.state, "Session loaded from Redis");
                Ok(Some(session))
            }
            None => {
                debug!(user_id = user_id, "No session found in Redis");
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> StorageResult<()> {
        let key = self.session_key(session.user_id);
        let serialized = serde_json::to_string(session)?;

        let mut conn = self.connection_manager.clone();
        conn.set::<_, _, ()>(&key, serialized).await?;

        debug!(user_id = session.user_id, state = %session.state, "Session saved to Redis");
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Process-local session store
///
/// Not durable across restarts; intended for tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    records: Arc<Mutex<HashMap<UserIdentity, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StorageResult<std::sync::MutexGuard<'_, HashMap<UserIdentity, Session>>> {
        self.records
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, user_id: UserIdentity) -> StorageResult<Option<Session>> {
        Ok(self.lock()?.get(&user_id).cloned())
    }

    async fn save(&self, session: &Session) -> StorageResult<()> {
        self.lock()?.insert(session.user_id, session.clone());
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        self.lock().map(|_| ())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
