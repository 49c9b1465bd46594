//! Education history (relational store, `user_educations`).

use crate::ServiceResult;
use crate::store_call::StoreCall;

use cm_core::{Education, EducationPatch, NewEducation};
use cm_db::EducationRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct EducationService {
    pool: SqlitePool,
    store: StoreCall,
}

impl EducationService {
    pub(crate) fn new(pool: SqlitePool, store: StoreCall) -> Self {
        Self { pool, store }
    }

    /// Most recent start date first.
    pub async fn get_all(&self, owner: Uuid) -> ServiceResult<Vec<Education>> {
        self.store
            .run(
                "educations.find_by_user",
                EducationRepository::find_by_user(&self.pool, owner),
            )
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<Education>> {
        self.store
            .run(
                "educations.find_by_id",
                EducationRepository::find_by_id(&self.pool, id),
            )
            .await
    }

    pub async fn add(&self, new: NewEducation) -> ServiceResult<Uuid> {
        new.validate()?;

        let education = Education::new(new);
        self.store
            .run(
                "educations.create",
                EducationRepository::create(&self.pool, &education),
            )
            .await?;
        Ok(education.id)
    }

    /// Dates are checked against the stored record, so a patch touching only
    /// `end_date` cannot end the entry before its stored start.
    pub async fn update(&self, id: Uuid, patch: EducationPatch) -> ServiceResult<bool> {
        let Some(stored) = self.get_by_id(id).await? else {
            return Ok(false);
        };
        patch.validate(stored.start_date, stored.end_date)?;

        self.store
            .run(
                "educations.update",
                EducationRepository::update(&self.pool, id, &patch),
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        self.store
            .run(
                "educations.delete",
                EducationRepository::delete(&self.pool, id),
            )
            .await
    }

    pub async fn delete_all(&self, owner: Uuid) -> ServiceResult<u64> {
        self.store
            .run(
                "educations.delete_by_user",
                EducationRepository::delete_by_user(&self.pool, owner),
            )
            .await
    }
}
