//! Conversation state module
//!
//! The dialogue state machine, its session cache and per-user locks, and the
//! session store contract with its key-value backends.

pub mod cache;
pub mod engine;
pub mod locks;
pub mod storage;
pub mod transitions;
pub mod vocabulary;

// Re-export commonly used state components
pub use cache::{CachedSession, SessionCache};
pub use engine::ConversationEngine;
pub use locks::{SessionGuard, SessionLocks};
pub use storage::{MemorySessionStore, RedisSessionStore, SessionStore};
pub use transitions::{Reply, apply, previous};
