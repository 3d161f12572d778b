//! Raw access to the `kv_entries` table.

use serde::de::DeserializeOwned;

use crate::{DbError, DbPool};

/// Key of the project list blob.
pub const PROJECTS_KEY: &str = "aethera_projects";
/// Key of the user list blob.
pub const USERS_KEY: &str = "aethera_users";
/// Key of the investment list blob.
pub const INVESTMENTS_KEY: &str = "aethera_investments";
/// Key of the active session blob (the logged-in user).
pub const SESSION_KEY: &str = "aethera_session";

/// One pending write: `Some` upserts the value, `None` deletes the key.
pub type KvWrite<'a> = (&'a str, Option<String>);

/// String-keyed blob storage over a SQLite table.
#[derive(Debug, Clone)]
pub struct KvStore {
    pool: DbPool,
}

impl KvStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Fetch the raw value stored under `key`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT value FROM kv_entries WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fetch and decode the JSON blob stored under `key`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, DbError> {
        match self.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| DbError::Serialization { key, source }),
            None => Ok(None),
        }
    }

    /// Apply several writes in one transaction.
    pub async fn write_batch(&self, writes: &[KvWrite<'_>]) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        for (key, value) in writes {
            match value {
                Some(value) => {
                    sqlx::query(
                        "INSERT INTO kv_entries (key, value, updated_at) \
                         VALUES (?1, ?2, CURRENT_TIMESTAMP) \
                         ON CONFLICT (key) DO UPDATE \
                         SET value = excluded.value, updated_at = excluded.updated_at",
                    )
                    .bind(*key)
                    .bind(value)
                    .execute(&mut *tx)
                    .await?;
                }
                None => {
                    sqlx::query("DELETE FROM kv_entries WHERE key = ?1")
                        .bind(*key)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }
        tx.commit().await
    }
}
