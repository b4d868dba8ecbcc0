//! IMSIT schedule bot
//!
//! A Telegram bot for IMSIT students: a per-user dialogue that leads to a
//! group's schedule, instructor cards and campus building directions. Sessions
//! live in an in-memory cache in front of a durable store (SQLite or Redis).

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BotError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{ConversationEngine, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
