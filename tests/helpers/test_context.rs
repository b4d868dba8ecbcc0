//! Test context: an engine wired to fake collaborators

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use imsit_bot::config::CacheConfig;
use imsit_bot::models::{Directive, InboundEvent, Session, UserIdentity};
use imsit_bot::services::{ScheduleSource, ServiceFactory};
use imsit_bot::state::{ConversationEngine, MemorySessionStore, SessionStore};
use imsit_bot::utils::errors::{StorageError, StorageResult};

/// Schedule source that echoes its arguments and records every call
#[derive(Debug, Default)]
pub struct FakeSchedule {
    pub renders: Mutex<Vec<(String, String, String)>>,
}

impl FakeSchedule {
    pub fn rendered(group: &str, format: &str, education_level: &str) -> String {
        format!("schedule:{}:{}:{}", group, format, education_level)
    }

    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }
}

#[async_trait]
impl ScheduleSource for FakeSchedule {
    async fn render(&self, group: &str, format: &str, education_level: &str) -> String {
        self.renders
            .lock()
            .unwrap()
            .push((group.to_string(), format.to_string(), education_level.to_string()));
        Self::rendered(group, format, education_level)
    }

    async fn current_lesson(&self, _lesson_key: &str) -> Option<String> {
        None
    }
}

/// Memory store that can be switched into failure mode and slowed down
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemorySessionStore,
    pub failing: AtomicBool,
    pub save_delay: Option<Duration>,
}

impl FlakyStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn slow(save_delay: Duration) -> Self {
        Self {
            save_delay: Some(save_delay),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> StorageResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable("store is down".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionStore for FlakyStore {
    async fn load(&self, user_id: UserIdentity) -> StorageResult<Option<Session>> {
        self.check()?;
        self.inner.load(user_id).await
    }

    async fn save(&self, session: &Session) -> StorageResult<()> {
        if let Some(delay) = self.save_delay {
            tokio::time::sleep(delay).await;
        }
        self.check()?;
        self.inner.save(session).await
    }

    async fn health_check(&self) -> StorageResult<()> {
        self.check()
    }

    fn backend_name(&self) -> &'static str {
        "flaky"
    }
}

/// Engine plus handles on its fakes
pub struct TestContext {
    pub engine: ConversationEngine,
    pub schedule: Arc<FakeSchedule>,
}

impl TestContext {
    /// Engine over an in-memory store that keeps every session cached
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemorySessionStore::new()))
    }

    pub fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self::with_cache(store, CacheConfig { capacity: 0, evict_after_result: false })
    }

    pub fn with_cache(store: Arc<dyn SessionStore>, cache: CacheConfig) -> Self {
        let schedule = Arc::new(FakeSchedule::default());
        let services = ServiceFactory::with_schedule(schedule.clone());
        let engine = ConversationEngine::new(store, services, &cache);

        Self { engine, schedule }
    }

    /// Send one text message as a user
    pub async fn send(&self, user_id: UserIdentity, text: &str) -> Vec<Directive> {
        self.engine.handle(&InboundEvent::new(user_id, text)).await
    }

    /// Send a sequence of messages, returning the directives of the last one
    pub async fn send_all(&self, user_id: UserIdentity, texts: &[&str]) -> Vec<Directive> {
        let mut last = Vec::new();
        for text in texts {
            last = self.send(user_id, text).await;
        }
        last
    }

    pub async fn session(&self, user_id: UserIdentity) -> Session {
        self.engine
            .session(user_id)
            .await
            .expect("session should exist")
    }
}
