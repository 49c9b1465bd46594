//! Account deletion cascade.
//!
//! Both stores live in one database, so every owned row and per-user document is
//! removed in a single transaction. Once it commits the owner's cache entries are
//! dropped so the deletion is visible immediately, then object storage is purged.
//! A failed purge does not undo the committed deletion; it is logged and reported
//! in [`AccountDeletion::purge_error`].

use crate::cache::ReadCache;
use crate::services::certificate_service::{key_cache_key, owner_cache_key};
use crate::services::user_service::user_cache_key;
use crate::storage::ObjectStorage;
use crate::store_call::StoreCall;
use crate::ServiceResult;

use cm_core::{Certificate, User};
use cm_db::{
    CertificateRepository, Collection, DocumentRepository, EducationRepository,
    ExperienceRepository, LanguageRepository, SkillRepository,
};

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// What a cascade removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDeletion {
    pub certificates: u64,
    pub experiences: u64,
    pub educations: u64,
    pub skills: u64,
    pub languages: u64,
    /// Profile, analytics and demo wallet documents
    pub documents: u64,
    pub objects: u64,
    /// Set when the rows are gone but the owner's objects could not be removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purge_error: Option<String>,
}

pub struct AccountService {
    pool: SqlitePool,
    store: StoreCall,
    storage: Arc<dyn ObjectStorage>,
    owner_cache: Arc<dyn ReadCache<Vec<Certificate>>>,
    key_cache: Arc<dyn ReadCache<Certificate>>,
    user_cache: Arc<dyn ReadCache<User>>,
}

impl AccountService {
    pub(crate) fn new(
        pool: SqlitePool,
        store: StoreCall,
        storage: Arc<dyn ObjectStorage>,
        owner_cache: Arc<dyn ReadCache<Vec<Certificate>>>,
        key_cache: Arc<dyn ReadCache<Certificate>>,
        user_cache: Arc<dyn ReadCache<User>>,
    ) -> Self {
        Self {
            pool,
            store,
            storage,
            owner_cache,
            key_cache,
            user_cache,
        }
    }

    pub async fn delete_account(&self, user_id: Uuid) -> ServiceResult<AccountDeletion> {
        // Needed afterwards to drop the per-key cache entries.
        let certificates = self
            .store
            .run(
                "certificates.find_by_user",
                CertificateRepository::find_by_user(&self.pool, user_id),
            )
            .await?;

        let mut deletion = self
            .store
            .run(
                "account.delete_records",
                delete_owned_records(&self.pool, user_id),
            )
            .await?;

        self.invalidate_caches(user_id, &certificates).await;

        match self.storage.delete_owner(user_id).await {
            Ok(objects) => deletion.objects = objects,
            Err(e) => {
                warn!("Deleted account {} but its objects remain: {}", user_id, e);
                deletion.purge_error = Some(e.to_string());
            }
        }

        info!("Deleted account {}: {:?}", user_id, deletion);
        Ok(deletion)
    }

    async fn invalidate_caches(&self, user_id: Uuid, certificates: &[Certificate]) {
        self.owner_cache.invalidate(&owner_cache_key(user_id)).await;
        for certificate in certificates {
            self.key_cache
                .invalidate(&key_cache_key(&certificate.id.to_string()))
                .await;
            if let Some(credential_id) = &certificate.credential_id {
                self.key_cache
                    .invalidate(&key_cache_key(credential_id))
                    .await;
            }
        }
        self.user_cache.invalidate(&user_cache_key(user_id)).await;
    }
}

async fn delete_owned_records(pool: &SqlitePool, user_id: Uuid) -> cm_db::Result<AccountDeletion> {
    let mut tx = pool.begin().await?;

    let certificates = CertificateRepository::delete_by_user(&mut *tx, user_id).await?;
    let experiences = ExperienceRepository::delete_by_user(&mut *tx, user_id).await?;
    let educations = EducationRepository::delete_by_user(&mut *tx, user_id).await?;
    let skills = SkillRepository::delete_by_user(&mut *tx, user_id).await?;
    let languages = LanguageRepository::delete_by_user(&mut *tx, user_id).await?;

    let id = user_id.to_string();
    let mut documents = 0;
    for collection in [
        Collection::Users,
        Collection::UserAnalytics,
        Collection::DemoWallets,
    ] {
        if DocumentRepository::delete(&mut *tx, collection, &id).await? {
            documents += 1;
        }
    }

    tx.commit().await?;

    Ok(AccountDeletion {
        certificates,
        experiences,
        educations,
        skills,
        languages,
        documents,
        objects: 0,
        purge_error: None,
    })
}
