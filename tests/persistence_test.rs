//! Persistence tests
//!
//! Sessions survive an engine restart through the SQLite store, and a failing
//! store never stops the dialogue.

mod helpers;

use std::sync::Arc;
use helpers::*;
use imsit_bot::config::CacheConfig;
use imsit_bot::database::{DatabaseConfig, SqliteSessionStore, create_pool, run_migrations};
use imsit_bot::models::{Directive, Keyboard, Session, State};
use imsit_bot::state::vocabulary::{self as vocab, phrases};
use imsit_bot::state::{MemorySessionStore, SessionStore};
use tempfile::TempDir;

async fn file_store(dir: &TempDir) -> Arc<SqliteSessionStore> {
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("data").join("users.sqlite").display()),
        ..DatabaseConfig::default()
    };
    let pool = create_pool(&config).await.expect("pool should open");
    run_migrations(&pool).await.expect("migrations should apply");
    Arc::new(SqliteSessionStore::new(pool))
}

#[tokio::test]
async fn test_sqlite_round_trip_preserves_all_fields() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir).await;

    let session = Session {
        user_id: STUDENT,
        state: State::SelectFormat,
        education_level: Some(vocab::EDUCATION_SECONDARY.to_string()),
        course: Some(vocab::COURSES[3].to_string()),
        group: Some("СПО-Юр-21".to_string()),
        format: None,
        display_name: Some("Сту'дент \"1\"".to_string()),
    };
    store.save(&session).await.unwrap();
    store.save(&session).await.unwrap();

    assert_eq!(store.load(STUDENT).await.unwrap(), Some(session));
    assert_eq!(store.count().await.unwrap(), 1);
    assert_eq!(store.load(OTHER_STUDENT).await.unwrap(), None);
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let ctx = TestContext::with_store(file_store(&dir).await);
        ctx.send_all(STUDENT, &[vocab::SCHEDULE, vocab::EDUCATION_HIGHER, vocab::COURSES[1]]).await;
    }

    let ctx = TestContext::with_store(file_store(&dir).await);
    let session = ctx.session(STUDENT).await;
    assert_eq!(session.state, State::SelectGroup);
    assert_eq!(session.course.as_deref(), Some(vocab::COURSES[1]));

    let directives = ctx.send(STUDENT, GROUP).await;
    assert_eq!(directives, vec![Directive::text(phrases::CHOOSE_FORMAT, Some(Keyboard::Format))]);
}

#[tokio::test]
async fn test_new_session_is_saved_on_first_contact() {
    let store = Arc::new(MemorySessionStore::new());
    let ctx = TestContext::with_store(store.clone());

    ctx.send(STUDENT, "привет").await;

    let saved = store.load(STUDENT).await.unwrap().expect("first contact should be saved");
    assert_eq!(saved, Session::new(STUDENT));
}

#[tokio::test]
async fn test_failing_store_does_not_stop_dialogue() {
    let ctx = TestContext::with_store(Arc::new(FlakyStore::failing()));

    let first = ctx.send(STUDENT, vocab::SCHEDULE).await;
    let second = ctx.send(STUDENT, vocab::EDUCATION_HIGHER).await;

    assert_eq!(first, vec![Directive::text(phrases::CHOOSE_EDUCATION, Some(Keyboard::Education))]);
    assert_eq!(second, vec![Directive::text(phrases::CHOOSE_COURSE, Some(Keyboard::Course))]);
    assert_eq!(ctx.session(STUDENT).await.state, State::AwaitingCourse);
}

#[tokio::test]
async fn test_unsaved_session_is_written_once_store_recovers() {
    let store = Arc::new(FlakyStore::failing());
    let ctx = TestContext::with_store(store.clone());

    ctx.send(STUDENT, vocab::SCHEDULE).await;
    assert!(store.inner.is_empty());

    store.set_failing(false);
    // Unrecognised input leaves the session unchanged but it is still unsaved
    ctx.send(STUDENT, "???").await;

    let saved = store.inner.load(STUDENT).await.unwrap().expect("session should be saved");
    assert_eq!(saved.state, State::AwaitingEducation);
}

#[tokio::test]
async fn test_unsaved_session_is_not_evicted_after_result() {
    let store = Arc::new(FlakyStore::default());
    let ctx = TestContext::with_cache(
        store.clone(),
        CacheConfig { capacity: 0, evict_after_result: true },
    );

    ctx.send_all(STUDENT, &weekly_schedule_flow()[..4]).await;
    store.set_failing(true);
    ctx.send(STUDENT, vocab::FORMAT_WEEK).await;

    assert!(ctx.engine.cache().contains(STUDENT));
    assert_eq!(ctx.session(STUDENT).await.state, State::AwaitingReturn);
}

#[tokio::test]
async fn test_saved_session_is_evicted_after_result() {
    let store = Arc::new(MemorySessionStore::new());
    let ctx = TestContext::with_cache(
        store.clone(),
        CacheConfig { capacity: 0, evict_after_result: true },
    );

    ctx.send_all(STUDENT, &weekly_schedule_flow()).await;

    assert!(!ctx.engine.cache().contains(STUDENT));
    let stored = store.load(STUDENT).await.unwrap().unwrap();
    assert_eq!(stored.state, State::AwaitingReturn);
    assert_eq!(stored.format.as_deref(), Some(vocab::FORMAT_WEEK));

    // The next message picks the session up from the store
    let directives = ctx.send(STUDENT, vocab::RETURN_FORMAT).await;
    assert_eq!(directives, vec![Directive::text(phrases::CHOOSE_FORMAT_AGAIN, Some(Keyboard::Format))]);
}

#[tokio::test]
async fn test_load_failure_after_eviction_starts_over() {
    let store = Arc::new(FlakyStore::default());
    let ctx = TestContext::with_cache(
        store.clone(),
        CacheConfig { capacity: 0, evict_after_result: true },
    );
    ctx.send_all(STUDENT, &weekly_schedule_flow()).await;
    assert!(!ctx.engine.cache().contains(STUDENT));

    store.set_failing(true);
    let directives = ctx.send(STUDENT, vocab::RETURN_GROUP).await;
    assert_eq!(directives, vec![Directive::text(phrases::USE_KEYBOARD, Some(Keyboard::Entry))]);

    store.set_failing(false);
    ctx.send(STUDENT, vocab::START).await;

    // Last writer wins: the fresh session replaced the stored selections
    let stored = store.inner.load(STUDENT).await.unwrap().unwrap();
    assert_eq!(stored.state, State::Entry);
    assert!(stored.education_level.is_none());
    assert!(stored.format.is_none());
}
