//! Skills (relational store, `user_skills`).

use crate::ServiceResult;
use crate::store_call::StoreCall;

use cm_core::{NewSkill, Skill, SkillPatch};
use cm_db::SkillRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SkillService {
    pool: SqlitePool,
    store: StoreCall,
}

impl SkillService {
    pub(crate) fn new(pool: SqlitePool, store: StoreCall) -> Self {
        Self { pool, store }
    }

    /// Newest first.
    pub async fn get_all(&self, owner: Uuid) -> ServiceResult<Vec<Skill>> {
        self.store
            .run(
                "skills.find_by_user",
                SkillRepository::find_by_user(&self.pool, owner),
            )
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<Skill>> {
        self.store
            .run(
                "skills.find_by_id",
                SkillRepository::find_by_id(&self.pool, id),
            )
            .await
    }

    pub async fn add(&self, new: NewSkill) -> ServiceResult<Uuid> {
        new.validate()?;

        let skill = Skill::new(new);
        self.store
            .run(
                "skills.create",
                SkillRepository::create(&self.pool, &skill),
            )
            .await?;
        Ok(skill.id)
    }

    pub async fn update(&self, id: Uuid, patch: SkillPatch) -> ServiceResult<bool> {
        patch.validate()?;

        self.store
            .run(
                "skills.update",
                SkillRepository::update(&self.pool, id, &patch),
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        self.store
            .run(
                "skills.delete",
                SkillRepository::delete(&self.pool, id),
            )
            .await
    }

    pub async fn delete_all(&self, owner: Uuid) -> ServiceResult<u64> {
        self.store
            .run(
                "skills.delete_by_user",
                SkillRepository::delete_by_user(&self.pool, owner),
            )
            .await
    }
}
