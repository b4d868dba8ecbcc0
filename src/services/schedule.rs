//! Schedule service
//!
//! Turns a (group, format, education level) selection into schedule text and
//! answers which lesson an instructor is teaching right now. The bot talks to
//! the schedule API over HTTP; failures are turned into user-facing text so
//! that the dialogue never errors out on a lookup.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;
use crate::config::ScheduleConfig;
use crate::utils::errors::Result;

/// Source of rendered schedules and current lessons
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Render the schedule of a group; errors come back as text
    async fn render(&self, group: &str, format: &str, education_level: &str) -> String;

    /// Lesson an instructor is teaching now, if any
    async fn current_lesson(&self, lesson_key: &str) -> Option<String>;
}

pub const SCHEDULE_UNAVAILABLE: &str = "Не удалось получить расписание, попробуй позже";

/// HTTP client for the schedule API
#[derive(Debug, Clone)]
pub struct HttpScheduleService {
    client: Client,
    base_url: Url,
}

impl HttpScheduleService {
    /// Create a new schedule service instance
    pub fn new(config: &ScheduleConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        let mut base_url = Url::parse(&config.api_url)?;
        // Relative joins replace the last path segment unless it ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn fetch_schedule(&self, group: &str, format: &str, education_level: &str) -> Result<String> {
        let url = self.endpoint("schedule")?;
        let response = self
            .client
            .get(url)
            .query(&[("group", group), ("format", format), ("education", education_level)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    async fn fetch_current_lesson(&self, lesson_key: &str) -> Result<Option<String>> {
        let url = self.endpoint("lessons/current")?;
        let response = self
            .client
            .get(url)
            .query(&[("instructor", lesson_key)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND || response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.error_for_status()?.text().await?;
        Ok(Some(text).filter(|t| !t.trim().is_empty()))
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleService {
    async fn render(&self, group: &str, format: &str, education_level: &str) -> String {
        debug!(group = group, format = format, education = education_level, "Fetching schedule");

        match self.fetch_schedule(group, format, education_level).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!(group = group, "Schedule API returned an empty body");
                SCHEDULE_UNAVAILABLE.to_string()
            }
            Err(e) => {
                warn!(group = group, error = %e, "Schedule API request failed");
                SCHEDULE_UNAVAILABLE.to_string()
            }
        }
    }

    async fn current_lesson(&self, lesson_key: &str) -> Option<String> {
        match self.fetch_current_lesson(lesson_key).await {
            Ok(lesson) => lesson,
            Err(e) => {
                warn!(instructor = lesson_key, error = %e, "Current lesson lookup failed");
                None
            }
        }
    }
}
