use crate::error::Result as DbErrorResult;
use crate::repositories::decode;

use cm_core::{Language, LanguagePatch};

use chrono::Utc;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct LanguageRow {
    id: String,
    user_id: String,
    name: String,
    proficiency: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<LanguageRow> for Language {
    type Error = crate::DbError;

    fn try_from(r: LanguageRow) -> DbErrorResult<Self> {
        Ok(Language {
            id: decode::uuid(&r.id, "user_languages.id")?,
            user_id: decode::uuid(&r.user_id, "user_languages.user_id")?,
            name: r.name,
            proficiency: decode::enumeration(&r.proficiency, "user_languages.proficiency")?,
            created_at: decode::timestamp(r.created_at, "user_languages.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "user_languages.updated_at")?,
        })
    }
}

pub struct LanguageRepository;

impl LanguageRepository {
    pub async fn create<'e, E>(executor: E, language: &Language) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO user_languages (id, user_id, name, proficiency, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(language.id.to_string())
        .bind(language.user_id.to_string())
        .bind(&language.name)
        .bind(language.proficiency.as_str())
        .bind(language.created_at.timestamp_millis())
        .bind(language.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Language>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, LanguageRow>(
            r#"
                SELECT id, user_id, name, proficiency, created_at, updated_at
                FROM user_languages
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Language::try_from).transpose()
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Language>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, LanguageRow>(
            r#"
                SELECT id, user_id, name, proficiency, created_at, updated_at
                FROM user_languages
                WHERE user_id = ?
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Language::try_from).collect()
    }

    pub async fn update<'e, E>(executor: E, id: Uuid, patch: &LanguagePatch) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE user_languages
                SET name = COALESCE(?, name),
                    proficiency = COALESCE(?, proficiency),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&patch.name)
        .bind(patch.proficiency.map(|p| p.as_str()))
        .bind(Utc::now().timestamp_millis())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM user_languages WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM user_languages WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
