use crate::error::Result as DbErrorResult;
use crate::repositories::decode;

use cm_core::{Skill, SkillPatch};

use chrono::Utc;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct SkillRow {
    id: String,
    user_id: String,
    name: String,
    level: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<SkillRow> for Skill {
    type Error = crate::DbError;

    fn try_from(r: SkillRow) -> DbErrorResult<Self> {
        Ok(Skill {
            id: decode::uuid(&r.id, "user_skills.id")?,
            user_id: decode::uuid(&r.user_id, "user_skills.user_id")?,
            name: r.name,
            level: decode::enumeration(&r.level, "user_skills.level")?,
            created_at: decode::timestamp(r.created_at, "user_skills.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "user_skills.updated_at")?,
        })
    }
}

pub struct SkillRepository;

impl SkillRepository {
    pub async fn create<'e, E>(executor: E, skill: &Skill) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO user_skills (id, user_id, name, level, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(skill.id.to_string())
        .bind(skill.user_id.to_string())
        .bind(&skill.name)
        .bind(skill.level.as_str())
        .bind(skill.created_at.timestamp_millis())
        .bind(skill.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Skill>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, SkillRow>(
            r#"
                SELECT id, user_id, name, level, created_at, updated_at
                FROM user_skills
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Skill::try_from).transpose()
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Skill>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, SkillRow>(
            r#"
                SELECT id, user_id, name, level, created_at, updated_at
                FROM user_skills
                WHERE user_id = ?
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Skill::try_from).collect()
    }

    pub async fn update<'e, E>(executor: E, id: Uuid, patch: &SkillPatch) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE user_skills
                SET name = COALESCE(?, name),
                    level = COALESCE(?, level),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&patch.name)
        .bind(patch.level.map(|l| l.as_str()))
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
        let result = sqlx::query("DELETE FROM user_skills WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_user<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM user_skills WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
