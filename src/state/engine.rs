//! Conversation engine
//!
//! Drives one inbound event through the dialogue: resolve the user's session
//! (cache, then store, then a fresh one), apply the transition table, persist
//! the result and turn the replies into deliverable directives.

use std::sync::Arc;
use tracing::{debug, info};
use crate::config::CacheConfig;
use crate::models::{Directive, InboundEvent, Keyboard, Session, UserIdentity};
use crate::services::ServiceFactory;
use crate::utils::logging;
use super::cache::SessionCache;
use super::locks::SessionLocks;
use super::storage::SessionStore;
use super::transitions::{self, Reply};

/// Per-user conversation state machine backed by a cache and a store
pub struct ConversationEngine {
    store: Arc<dyn SessionStore>,
    cache: SessionCache,
    locks: SessionLocks,
    services: ServiceFactory,
    evict_after_result: bool,
}

impl ConversationEngine {
    pub fn new(store: Arc<dyn SessionStore>, services: ServiceFactory, config: &CacheConfig) -> Self {
        info!(
            backend = store.backend_name(),
            capacity = config.capacity,
            "Conversation engine initialized"
        );

        Self {
            store,
            cache: SessionCache::new(config.capacity),
            locks: SessionLocks::new(),
            services,
            evict_after_result: config.evict_after_result,
        }
    }

    /// Process one inbound event and return what to send back
    ///
    /// Never fails: storage errors are logged and the in-memory session stays
    /// authoritative.
    pub async fn handle(&self, event: &InboundEvent) -> Vec<Directive> {
        let replies = {
            let _guard = self.locks.acquire(event.user_id).await;
            self.step(event).await
        };

        self.resolve(replies).await
    }

    /// Current session of a user as seen by the engine, without side effects
    /// on the dialogue
    pub async fn session(&self, user_id: UserIdentity) -> Option<Session> {
        if let Some(cached) = self.cache.get(user_id) {
            return Some(cached.session);
        }

        match self.store.load(user_id).await {
            Ok(session) => session,
            Err(e) => {
                logging::log_storage_failure(user_id, "load", &e);
                None
            }
        }
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Load, mutate and persist; runs under the user's lock
    async fn step(&self, event: &InboundEvent) -> Vec<Reply> {
        let user_id = event.user_id;
        let (mut session, persisted) = self.resolve_session(user_id).await;
        let before = session.clone();

        if event.display_name.is_some() {
            session.display_name = event.display_name.clone();
        }

        logging::log_inbound(
            user_id,
            session.display_name.as_deref(),
            session.state.as_str(),
            &event.text,
        );

        let replies = transitions::apply(
            &mut session,
            &event.text,
            &self.services.instructors,
            &self.services.buildings,
        );

        logging::log_transition(user_id, before.state.as_str(), session.state.as_str());

        let persisted = if session != before || !persisted {
            self.persist(&session).await
        } else {
            true
        };

        self.cache.put(session, persisted);

        let rendered_result = replies.iter().any(|r| matches!(r, Reply::Schedule { .. }));
        if rendered_result && self.evict_after_result {
            self.cache.evict_if_persisted(user_id);
        }

        replies
    }

    /// Session for a user and whether its value is known to be durable
    async fn resolve_session(&self, user_id: UserIdentity) -> (Session, bool) {
        if let Some(cached) = self.cache.get(user_id) {
            return (cached.session, cached.persisted);
        }

        match self.store.load(user_id).await {
            Ok(Some(session)) => {
                debug!(user_id = user_id, state = %session.state, "Session loaded from store");
                (session, true)
            }
            Ok(None) => {
                info!(user_id = user_id, "New session");
                (Session::new(user_id), false)
            }
            Err(e) => {
                logging::log_storage_failure(user_id, "load", &e);
                // The fresh session is unsaved, so once the store recovers it
                // replaces the stored record and earlier selections are lost.
                (Session::new(user_id), false)
            }
        }
    }

    async fn persist(&self, session: &Session) -> bool {
        match self.store.save(session).await {
            Ok(()) => {
                debug!(user_id = session.user_id, state = %session.state, "Session saved");
                true
            }
            Err(e) => {
                logging::log_storage_failure(session.user_id, "save", &e);
                false
            }
        }
    }

    async fn resolve(&self, replies: Vec<Reply>) -> Vec<Directive> {
        let mut directives = Vec::with_capacity(replies.len());

        for reply in replies {
            let directive = match reply {
                Reply::Send(directive) => directive,
                Reply::Schedule { group, format, education_level } => {
                    let body = self.services.schedule.render(&group, &format, &education_level).await;
                    Directive::text(body, Some(Keyboard::Return))
                }
                Reply::InstructorCard(instructor) => {
                    let lesson = self.services.schedule.current_lesson(&instructor.lesson_key).await;
                    Directive::media(instructor.caption(lesson.as_deref()), vec![instructor.photo.clone()])
                }
            };
            directives.push(directive);
        }

        directives
    }
}

impl std::fmt::Debug for ConversationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationEngine")
            .field("backend", &self.store.backend_name())
            .field("cached_sessions", &self.cache.len())
            .field("evict_after_result", &self.evict_after_result)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::models::State;
    use crate::services::ScheduleSource;
    use crate::state::storage::MemorySessionStore;
    use crate::state::vocabulary::{self as vocab, phrases};

    struct EchoSchedule;

    #[async_trait]
    impl ScheduleSource for EchoSchedule {
        async fn render(&self, group: &str, format: &str, education_level: &str) -> String {
            format!("{}|{}|{}", group, format, education_level)
        }

        async fn current_lesson(&self, _lesson_key: &str) -> Option<String> {
            Some("Сейчас: Физика".to_string())
        }
    }

    fn engine(store: Arc<MemorySessionStore>, evict_after_result: bool) -> ConversationEngine {
        let config = CacheConfig {
            capacity: 0,
            evict_after_result,
        };
        ConversationEngine::new(store, ServiceFactory::with_schedule(Arc::new(EchoSchedule)), &config)
    }

    #[tokio::test]
    async fn test_first_contact_is_saved() {
        let store = Arc::new(MemorySessionStore::new());
        let engine = engine(store.clone(), true);

        let directives = engine.handle(&InboundEvent::new(5, vocab::START).with_display_name("ivan")).await;
        assert_eq!(directives, vec![Directive::text(phrases::GREETING, Some(Keyboard::Entry))]);

        let stored = store.load(5).await.unwrap().unwrap();
        assert_eq!(stored.state, State::Entry);
        assert_eq!(stored.display_name.as_deref(), Some("ivan"));
    }

    #[tokio::test]
    async fn test_schedule_is_rendered_through_source() {
        let store = Arc::new(MemorySessionStore::new());
        let engine = engine(store.clone(), false);

        for text in [vocab::SCHEDULE, vocab::EDUCATION_HIGHER, vocab::COURSES[0], "ПИ-24"] {
            engine.handle(&InboundEvent::new(1, text)).await;
        }
        let directives = engine.handle(&InboundEvent::new(1, vocab::FORMAT_WEEK)).await;

        assert_eq!(
            directives,
            vec![Directive::text(
                format!("ПИ-24|{}|{}", vocab::FORMAT_WEEK, vocab::EDUCATION_HIGHER),
                Some(Keyboard::Return)
            )]
        );
        assert_eq!(engine.session(1).await.unwrap().state, State::AwaitingReturn);
    }

    #[tokio::test]
    async fn test_result_evicts_from_cache_but_not_store() {
        let store = Arc::new(MemorySessionStore::new());
        let mut session = Session::new(2);
        session.state = State::SelectFormat;
        session.group = Some("ПИ-24".to_string());
        store.save(&session).await.unwrap();

        let engine = engine(store.clone(), true);
        engine.handle(&InboundEvent::new(2, vocab::FORMAT_TODAY)).await;

        assert!(!engine.cache().contains(2));
        assert_eq!(store.load(2).await.unwrap().unwrap().state, State::AwaitingReturn);
        assert_eq!(engine.session(2).await.unwrap().format.as_deref(), Some(vocab::FORMAT_TODAY));
    }

    #[tokio::test]
    async fn test_instructor_card_includes_current_lesson() {
        let store = Arc::new(MemorySessionStore::new());
        let engine = engine(store, true);

        engine.handle(&InboundEvent::new(3, vocab::FIND_INSTRUCTOR)).await;
        let directives = engine.handle(&InboundEvent::new(3, "Нигматов")).await;

        assert_eq!(directives.len(), 2);
        match &directives[0] {
            Directive::Media { caption, media } => {
                assert!(caption.starts_with("Нигматов"));
                assert!(caption.ends_with("Сейчас: Физика"));
                assert_eq!(media.len(), 1);
            }
            other => panic!("expected media card, got {:?}", other),
        }
        assert_eq!(engine.session(3).await.unwrap().state, State::Entry);
    }
}
