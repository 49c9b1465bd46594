use crate::error::Result as DbErrorResult;
use crate::repositories::decode;

use cm_core::{Experience, ExperiencePatch};

use chrono::{NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct ExperienceRow {
    id: String,
    user_id: String,
    title: String,
    company: String,
    location: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    current: bool,
    description: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ExperienceRow> for Experience {
    type Error = crate::DbError;

    fn try_from(r: ExperienceRow) -> DbErrorResult<Self> {
        Ok(Experience {
            id: decode::uuid(&r.id, "user_experiences.id")?,
            user_id: decode::uuid(&r.user_id, "user_experiences.user_id")?,
            title: r.title,
            company: r.company,
            location: r.location,
            start_date: r.start_date,
            end_date: r.end_date,
            current: r.current,
            description: r.description,
            created_at: decode::timestamp(r.created_at, "user_experiences.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "user_experiences.updated_at")?,
        })
    }
}

pub struct ExperienceRepository;

impl ExperienceRepository {
    pub async fn create<'e, E>(executor: E, experience: &Experience) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO user_experiences (
                    id, user_id, title, company, location,
                    start_date, end_date, current, description,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(experience.id.to_string())
        .bind(experience.user_id.to_string())
        .bind(&experience.title)
        .bind(&experience.company)
        .bind(&experience.location)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(experience.current)
        .bind(&experience.description)
        .bind(experience.created_at.timestamp_millis())
        .bind(experience.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Experience>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, ExperienceRow>(
            r#"
                SELECT id, user_id, title, company, location,
                       start_date, end_date, current, description,
                       created_at, updated_at
                FROM user_experiences
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Experience::try_from).transpose()
    }

    /// Most recent position first.
    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Experience>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, ExperienceRow>(
            r#"
                SELECT id, user_id, title, company, location,
                       start_date, end_date, current, description,
                       created_at, updated_at
                FROM user_experiences
                WHERE user_id = ?
                ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Experience::try_from).collect()
    }

    pub async fn update<'e, E>(
        executor: E,
        id: Uuid,
        patch: &ExperiencePatch,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE user_experiences
                SET title = COALESCE(?, title),
                    company = COALESCE(?, company),
                    location = COALESCE(?, location),
                    start_date = COALESCE(?, start_date),
                    end_date = COALESCE(?, end_date),
                    current = COALESCE(?, current),
                    description = COALESCE(?, description),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&patch.title)
        .bind(&patch.company)
        .bind(&patch.location)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(patch.current)
        .bind(&patch.description)
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
        let result = sqlx::query("DELETE FROM user_experiences WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM user_experiences WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
