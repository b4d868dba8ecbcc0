//! Session repository implementation

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;
use crate::models::{Session, SessionRow, UserIdentity};
use crate::state::SessionStore;
use crate::utils::errors::{StorageError, StorageResult};

#[derive(Debug, Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count stored sessions
    pub async fn count(&self) -> StorageResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn load(&self, user_id: UserIdentity) -> StorageResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            "SELECT user_id, state, education_level, course, group_name, format, display_name FROM sessions WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let session = Session::try_from(row).map_err(|e| StorageError::Corrupt {
                    user_id,
                    reason: e.to_string(),
                })?;
                debug!(user_id = user_id, state = %session.state, "Session loaded from SQLite");
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> StorageResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (user_id, state, education_level, course, group_name, format, display_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE
            SET state = excluded.state,
                education_level = excluded.education_level,
                course = excluded.course,
                group_name = excluded.group_name,
                format = excluded.format,
                display_name = excluded.display_name
            "#
        )
        .bind(session.user_id)
        .bind(session.state.as_str())
        .bind(&session.education_level)
        .bind(&session.course)
        .bind(&session.group)
        .bind(&session.format)
        .bind(&session.display_name)
        .execute(&self.pool)
        .await?;

        debug!(user_id = session.user_id, state = %session.state, "Session saved to SQLite");
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
