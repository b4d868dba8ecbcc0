//! Error handling for the IMSIT bot
//!
//! This module defines the main error types used throughout the application.
//! Per-event failures (storage, delivery) are logged by the caller and never
//! abort the dispatch stream; only bootstrap errors are fatal.

use thiserror::Error;

/// Main error type for the bot application
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Errors reported by a session store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite backend failed: {0}")]
    Sqlite(#[from] sqlx::Error),

    #[error("Redis backend failed: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Session record could not be encoded: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Corrupt session record for user {user_id}: {reason}")]
    Corrupt { user_id: i64, reason: String },

    #[error("Session backend unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;

/// Result type alias for session store operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

impl BotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            BotError::Database(_) => false,
            BotError::Migration(_) => false,
            BotError::Telegram(_) => true,
            BotError::Storage(e) => e.is_transient(),
            BotError::Config(_) => false,
            BotError::Redis(_) => true,
            BotError::Http(_) => true,
            BotError::Serialization(_) => false,
            BotError::Io(_) => true,
            BotError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BotError::Database(_) => ErrorSeverity::Critical,
            BotError::Migration(_) => ErrorSeverity::Critical,
            BotError::Config(_) => ErrorSeverity::Critical,
            BotError::Storage(_) => ErrorSeverity::Warning,
            BotError::Telegram(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

impl StorageError {
    /// Whether retrying the same operation later may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            StorageError::Sqlite(_) => true,
            StorageError::Redis(_) => true,
            StorageError::Unavailable(_) => true,
            StorageError::Encoding(_) => false,
            StorageError::Corrupt { .. } => false,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
