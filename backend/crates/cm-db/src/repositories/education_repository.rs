use crate::error::Result as DbErrorResult;
use crate::repositories::decode;

use cm_core::{Education, EducationPatch};

use chrono::{NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct EducationRow {
    id: String,
    user_id: String,
    institution: String,
    degree: String,
    field_of_study: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    grade: Option<String>,
    description: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<EducationRow> for Education {
    type Error = crate::DbError;

    fn try_from(r: EducationRow) -> DbErrorResult<Self> {
        Ok(Education {
            id: decode::uuid(&r.id, "user_educations.id")?,
            user_id: decode::uuid(&r.user_id, "user_educations.user_id")?,
            institution: r.institution,
            degree: r.degree,
            field_of_study: r.field_of_study,
            start_date: r.start_date,
            end_date: r.end_date,
            grade: r.grade,
            description: r.description,
            created_at: decode::timestamp(r.created_at, "user_educations.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "user_educations.updated_at")?,
        })
    }
}

pub struct EducationRepository;

impl EducationRepository {
    pub async fn create<'e, E>(executor: E, education: &Education) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO user_educations (
                    id, user_id, institution, degree, field_of_study,
                    start_date, end_date, grade, description,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(education.id.to_string())
        .bind(education.user_id.to_string())
        .bind(&education.institution)
        .bind(&education.degree)
        .bind(&education.field_of_study)
        .bind(education.start_date)
        .bind(education.end_date)
        .bind(&education.grade)
        .bind(&education.description)
        .bind(education.created_at.timestamp_millis())
        .bind(education.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Education>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, EducationRow>(
            r#"
                SELECT id, user_id, institution, degree, field_of_study,
                       start_date, end_date, grade, description,
                       created_at, updated_at
                FROM user_educations
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Education::try_from).transpose()
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Education>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, EducationRow>(
            r#"
                SELECT id, user_id, institution, degree, field_of_study,
                       start_date, end_date, grade, description,
                       created_at, updated_at
                FROM user_educations
                WHERE user_id = ?
                ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Education::try_from).collect()
    }

    pub async fn update<'e, E>(
        executor: E,
        id: Uuid,
        patch: &EducationPatch,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE user_educations
                SET institution = COALESCE(?, institution),
                    degree = COALESCE(?, degree),
                    field_of_study = COALESCE(?, field_of_study),
                    start_date = COALESCE(?, start_date),
                    end_date = COALESCE(?, end_date),
                    grade = COALESCE(?, grade),
                    description = COALESCE(?, description),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&patch.institution)
        .bind(&patch.degree)
        .bind(&patch.field_of_study)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(&patch.grade)
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
        let result = sqlx::query("DELETE FROM user_educations WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM user_educations WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
