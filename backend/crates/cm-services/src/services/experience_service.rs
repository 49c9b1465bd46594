//! Work experience entries (relational store, `user_experiences`).

use crate::ServiceResult;
use crate::store_call::StoreCall;

use cm_core::{Experience, ExperiencePatch, NewExperience};
use cm_db::ExperienceRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ExperienceService {
    pool: SqlitePool,
    store: StoreCall,
}

impl ExperienceService {
    pub(crate) fn new(pool: SqlitePool, store: StoreCall) -> Self {
        Self { pool, store }
    }

    /// Most recent start date first.
    pub async fn get_all(&self, owner: Uuid) -> ServiceResult<Vec<Experience>> {
        self.store
            .run(
                "experiences.find_by_user",
                ExperienceRepository::find_by_user(&self.pool, owner),
            )
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<Experience>> {
        self.store
            .run(
                "experiences.find_by_id",
                ExperienceRepository::find_by_id(&self.pool, id),
            )
            .await
    }

    pub async fn add(&self, new: NewExperience) -> ServiceResult<Uuid> {
        new.validate()?;

        let experience = Experience::new(new);
        self.store
            .run(
                "experiences.create",
                ExperienceRepository::create(&self.pool, &experience),
            )
            .await?;
        Ok(experience.id)
    }

    /// Dates are checked against the stored record, so a patch touching only
    /// `end_date` cannot end the entry before its stored start.
    pub async fn update(&self, id: Uuid, patch: ExperiencePatch) -> ServiceResult<bool> {
        let Some(stored) = self.get_by_id(id).await? else {
            return Ok(false);
        };
        patch.validate(stored.start_date, stored.end_date)?;

        self.store
            .run(
                "experiences.update",
                ExperienceRepository::update(&self.pool, id, &patch),
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        self.store
            .run(
                "experiences.delete",
                ExperienceRepository::delete(&self.pool, id),
            )
            .await
    }

    pub async fn delete_all(&self, owner: Uuid) -> ServiceResult<u64> {
        self.store
            .run(
                "experiences.delete_by_user",
                ExperienceRepository::delete_by_user(&self.pool, owner),
            )
            .await
    }
}
