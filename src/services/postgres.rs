use crate::models::UserProfile;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the profile store
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("No profile submitted yet")]
    NotFound,
}

/// A stored survey submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProfile {
    pub id: i64,
    pub profile: UserProfile,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// PostgreSQL-backed profile store
///
/// Profiles arrive as opaque survey JSON and are persisted verbatim. The
/// recommendation pipeline only ever reads the most recent submission.
pub struct ProfileStore {
    pool: PgPool,
}

impl ProfileStore {
    /// Create a new profile store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, ProfileStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new profile store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, ProfileStoreError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Persist a submitted profile verbatim
    ///
    /// Returns the id of the new row.
    pub async fn save(&self, profile: &UserProfile) -> Result<i64, ProfileStoreError> {
        let payload = serde_json::to_value(profile)?;

        let row = sqlx::query("INSERT INTO user_profiles (profile) VALUES ($1) RETURNING id")
            .bind(&payload)
            .fetch_one(&self.pool)
            .await?;

        let id: i64 = row.get("id");

        tracing::debug!("Saved profile {}", id);

        Ok(id)
    }

    /// The most recently submitted profile
    ///
    /// `NotFound` when no survey has been submitted yet; callers surface
    /// it as-is rather than substituting a default profile.
    pub async fn latest(&self) -> Result<UserProfile, ProfileStoreError> {
        let row = sqlx::query("SELECT profile FROM user_profiles ORDER BY id DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ProfileStoreError::NotFound)?;

        let payload: serde_json::Value = row.get("profile");

        Ok(serde_json::from_value(payload)?)
    }

    /// Latest submissions, newest first (for debugging/admin)
    pub async fn recent(&self, limit: i64) -> Result<Vec<StoredProfile>, ProfileStoreError> {
        let rows = sqlx::query(
            "SELECT id, profile, created_at FROM user_profiles ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let profiles: Result<Vec<StoredProfile>, ProfileStoreError> = rows
            .iter()
            .map(|row| {
                let payload: serde_json::Value = row.get("profile");
                Ok(StoredProfile {
                    id: row.get("id"),
                    profile: serde_json::from_value(payload)?,
                    created_at: row.get("created_at"),
                })
            })
            .collect();

        profiles
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, ProfileStoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_a_distinct_condition() {
        let error = ProfileStoreError::NotFound;
        assert_eq!(error.to_string(), "No profile submitted yet");
    }
}
