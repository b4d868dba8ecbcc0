//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the bot.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{BotError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender when dropped, so the caller
/// must keep it alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| BotError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = if config.json {
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .boxed()
            } else {
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| BotError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an inbound message together with the dialogue position it arrived in
pub fn log_inbound(user_id: i64, display_name: Option<&str>, state: &str, text: &str) {
    info!(
        user_id = user_id,
        display_name = display_name,
        state = state,
        text = text,
        "Message received"
    );
}

/// Log a state transition
pub fn log_transition(user_id: i64, from: &str, to: &str) {
    if from == to {
        debug!(user_id = user_id, state = from, "State unchanged");
    } else {
        info!(user_id = user_id, from = from, to = to, "State transition");
    }
}

/// Log a failed session store operation; processing continues on the cached value
pub fn log_storage_failure(user_id: i64, operation: &str, error: &dyn std::fmt::Display) {
    error!(
        user_id = user_id,
        operation = operation,
        error = %error,
        "Session store operation failed, continuing with in-memory session"
    );
}

/// Log a failed outbound delivery
pub fn log_delivery_failure(chat_id: i64, kind: &str, error: &dyn std::fmt::Display) {
    warn!(
        chat_id = chat_id,
        kind = kind,
        error = %error,
        "Failed to deliver message"
    );
}
