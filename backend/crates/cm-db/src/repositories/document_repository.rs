//! Document collections.
//!
//! Each document is a JSON object stored under `(collection, id)`. Bodies keep the
//! camelCase keys the application serializes; nothing here renames fields. Partial
//! updates use SQLite's `json_patch`, so only the keys present in the patch change.

use crate::DbError;
use crate::error::Result as DbErrorResult;

use chrono::Utc;
use serde_json::{Map, Value};

/// Known document collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    UserAnalytics,
    DemoWallets,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::UserAnalytics => "userAnalytics",
            Self::DemoWallets => "demoWallets",
        }
    }
}

pub struct DocumentRepository;

impl DocumentRepository {
    pub async fn get<'e, E>(
        executor: E,
        collection: Collection,
        id: &str,
    ) -> DbErrorResult<Option<Value>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let body: Option<String> =
            sqlx::query_scalar("SELECT body FROM documents WHERE collection = ? AND id = ?")
                .bind(collection.as_str())
                .bind(id)
                .fetch_optional(executor)
                .await?;

        body.map(|b| serde_json::from_str::<Value>(&b).map_err(DbError::from))
            .transpose()
    }

    /// Writes `body` only if no document exists at `(collection, id)`.
    /// Returns whether the document was created.
    pub async fn create<'e, E>(
        executor: E,
        collection: Collection,
        id: &str,
        body: &Value,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp_millis();

        let result = sqlx::query(
            r#"
                INSERT INTO documents (collection, id, body, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(collection, id) DO NOTHING
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(serde_json::to_string(body)?)
        .bind(now)
        .bind(now)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replaces the whole body, creating the document if needed.
    pub async fn set<'e, E>(
        executor: E,
        collection: Collection,
        id: &str,
        body: &Value,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp_millis();

        sqlx::query(
            r#"
                INSERT INTO documents (collection, id, body, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(collection, id)
                DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(serde_json::to_string(body)?)
        .bind(now)
        .bind(now)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Merges `fields` into an existing body. A `null` value removes the key.
    /// Returns false when the document does not exist.
    pub async fn merge<'e, E>(
        executor: E,
        collection: Collection,
        id: &str,
        fields: &Map<String, Value>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE documents
                SET body = json_patch(body, ?), updated_at = ?
                WHERE collection = ? AND id = ?
            "#,
        )
        .bind(serde_json::to_string(fields)?)
        .bind(Utc::now().timestamp_millis())
        .bind(collection.as_str())
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, collection: Collection, id: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection.as_str())
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Documents whose top-level string `field` equals any of `values`, newest first.
    pub async fn find_where<'e, E>(
        executor: E,
        collection: Collection,
        field: &str,
        values: &[&str],
    ) -> DbErrorResult<Vec<Value>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; values.len()].join(", ");
        let sql = format!(
            "SELECT body FROM documents \
             WHERE collection = ? AND json_extract(body, ?) IN ({}) \
             ORDER BY created_at DESC, rowid DESC",
            placeholders
        );

        let mut query = sqlx::query_scalar::<_, String>(&sql)
            .bind(collection.as_str())
            .bind(format!("$.{}", field));
        for value in values {
            query = query.bind(*value);
        }

        let bodies = query.fetch_all(executor).await?;

        bodies
            .iter()
            .map(|b| serde_json::from_str::<Value>(b).map_err(DbError::from))
            .collect()
    }
}
