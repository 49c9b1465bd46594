use crate::error::Result as DbErrorResult;
use crate::repositories::decode;

use cm_core::WaitlistEntry;

use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct WaitlistRow {
    id: String,
    email: String,
    name: Option<String>,
    created_at: i64,
}

impl TryFrom<WaitlistRow> for WaitlistEntry {
    type Error = crate::DbError;

    fn try_from(r: WaitlistRow) -> DbErrorResult<Self> {
        Ok(WaitlistEntry {
            id: decode::uuid(&r.id, "waitlist.id")?,
            email: r.email,
            name: r.name,
            created_at: decode::timestamp(r.created_at, "waitlist.created_at")?,
        })
    }
}

pub struct WaitlistRepository;

impl WaitlistRepository {
    /// Inserts unless the email is already listed. Returns whether a row was written.
    pub async fn create<'e, E>(executor: E, entry: &WaitlistEntry) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO waitlist (id, email, name, created_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(email) DO NOTHING
            "#,
        )
        .bind(entry.id.to_string())
        .bind(&entry.email)
        .bind(&entry.name)
        .bind(entry.created_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_email<'e, E>(
        executor: E,
        email: &str,
    ) -> DbErrorResult<Option<WaitlistEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, WaitlistRow>(
            "SELECT id, email, name, created_at FROM waitlist WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        row.map(WaitlistEntry::try_from).transpose()
    }

    pub async fn list<'e, E>(executor: E) -> DbErrorResult<Vec<WaitlistEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, WaitlistRow>(
            r#"
                SELECT id, email, name, created_at
                FROM waitlist
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(WaitlistEntry::try_from).collect()
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM waitlist WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
