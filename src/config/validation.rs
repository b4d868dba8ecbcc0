//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{BotError, Result};
use super::{Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_storage_config(&settings.storage)?;
    if settings.storage.backend == StorageBackend::Redis {
        validate_redis_config(&settings.redis)?;
    }
    validate_schedule_config(&settings.schedule)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(BotError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate session storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.backend != StorageBackend::Sqlite {
        return Ok(());
    }

    if config.database_url.is_empty() {
        return Err(BotError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(BotError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(BotError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(BotError::Config(
            "Redis URL is required".to_string()
        ));
    }

    Ok(())
}

/// Validate schedule API configuration
fn validate_schedule_config(config: &super::ScheduleConfig) -> Result<()> {
    url::Url::parse(&config.api_url)?;

    if config.timeout_seconds == 0 {
        return Err(BotError::Config(
            "Schedule API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BotError::Config(
            "Log level is required".to_string()
        ));
    }

    if config.directory.is_some() && config.file_name.is_empty() {
        return Err(BotError::Config(
            "Log file name is required when a log directory is set".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "123:abc".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_token_fails() {
        let mut settings = valid_settings();
        settings.bot.token.clear();
        assert_matches!(validate_settings(&settings), Err(BotError::Config(_)));
    }

    #[test]
    fn test_pool_bounds_checked() {
        let mut settings = valid_settings();
        settings.storage.min_connections = 10;
        settings.storage.max_connections = 2;
        assert_matches!(validate_settings(&settings), Err(BotError::Config(_)));
    }

    #[test]
    fn test_redis_url_only_checked_for_redis_backend() {
        let mut settings = valid_settings();
        settings.redis.url.clear();
        assert!(validate_settings(&settings).is_ok());

        settings.storage.backend = StorageBackend::Redis;
        assert_matches!(validate_settings(&settings), Err(BotError::Config(_)));
    }

    #[test]
    fn test_bad_schedule_url_fails() {
        let mut settings = valid_settings();
        settings.schedule.api_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(BotError::UrlParse(_)));
    }
}
