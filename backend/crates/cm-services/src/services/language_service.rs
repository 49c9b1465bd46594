//! Spoken languages (relational store, `user_languages`).

use crate::ServiceResult;
use crate::store_call::StoreCall;

use cm_core::{Language, LanguagePatch, NewLanguage};
use cm_db::LanguageRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct LanguageService {
    pool: SqlitePool,
    store: StoreCall,
}

impl LanguageService {
    pub(crate) fn new(pool: SqlitePool, store: StoreCall) -> Self {
        Self { pool, store }
    }

    /// Newest first.
    pub async fn get_all(&self, owner: Uuid) -> ServiceResult<Vec<Language>> {
        self.store
            .run(
                "languages.find_by_user",
                LanguageRepository::find_by_user(&self.pool, owner),
            )
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<Language>> {
        self.store
            .run(
                "languages.find_by_id",
                LanguageRepository::find_by_id(&self.pool, id),
            )
            .await
    }

    pub async fn add(&self, new: NewLanguage) -> ServiceResult<Uuid> {
        new.validate()?;

        let language = Language::new(new);
        self.store
            .run(
                "languages.create",
                LanguageRepository::create(&self.pool, &language),
            )
            .await?;
        Ok(language.id)
    }

    pub async fn update(&self, id: Uuid, patch: LanguagePatch) -> ServiceResult<bool> {
        patch.validate()?;

        self.store
            .run(
                "languages.update",
                LanguageRepository::update(&self.pool, id, &patch),
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        self.store
            .run(
                "languages.delete",
                LanguageRepository::delete(&self.pool, id),
            )
            .await
    }

    pub async fn delete_all(&self, owner: Uuid) -> ServiceResult<u64> {
        self.store
            .run(
                "languages.delete_by_user",
                LanguageRepository::delete_by_user(&self.pool, owner),
            )
            .await
    }
}
