//! Credential records (relational store).
//!
//! `get_all` and `get_by_id` read through the cache. Mutations go straight to the
//! store and leave cached entries alone, so a cached read can lag a write by up to
//! one TTL.

use crate::cache::ReadCache;
use crate::storage::ObjectStorage;
use crate::store_call::StoreCall;
use crate::{ServiceError, ServiceResult};

use cm_core::{Certificate, CertificatePatch, NewCertificate};
use cm_db::CertificateRepository;

use std::sync::Arc;

use log::{debug, info};
use sqlx::SqlitePool;
use uuid::Uuid;

pub(crate) fn owner_cache_key(owner: Uuid) -> String {
    format!("certificates:owner:{}", owner)
}

pub(crate) fn key_cache_key(key: &str) -> String {
    format!("certificates:key:{}", key)
}

pub struct CertificateService {
    pool: SqlitePool,
    store: StoreCall,
    owner_cache: Arc<dyn ReadCache<Vec<Certificate>>>,
    key_cache: Arc<dyn ReadCache<Certificate>>,
    storage: Arc<dyn ObjectStorage>,
}

impl CertificateService {
    pub(crate) fn new(
        pool: SqlitePool,
        store: StoreCall,
        owner_cache: Arc<dyn ReadCache<Vec<Certificate>>>,
        key_cache: Arc<dyn ReadCache<Certificate>>,
        storage: Arc<dyn ObjectStorage>,
    ) -> Self {
        Self {
            pool,
            store,
            owner_cache,
            key_cache,
            storage,
        }
    }

    /// The owner's records, newest first.
    pub async fn get_all(&self, owner: Uuid) -> ServiceResult<Vec<Certificate>> {
        let key = owner_cache_key(owner);
        if let Some(cached) = self.owner_cache.get(&key).await {
            return Ok(cached);
        }

        let certificates = self
            .store
            .run(
                "certificates.find_by_user",
                CertificateRepository::find_by_user(&self.pool, owner),
            )
            .await?;

        self.owner_cache.put(&key, certificates.clone()).await;
        Ok(certificates)
    }

    /// Resolves `key` as a primary id when it parses as a UUID, otherwise (or when no
    /// record has that id) as a `credentialId`.
    ///
    /// Id hits are cached under the canonical id text, whatever spelling the caller
    /// used. Credential hits are cached under the credential id itself.
    pub async fn get_by_id(&self, key: &str) -> ServiceResult<Option<Certificate>> {
        let id = Uuid::parse_str(key).ok();

        if let Some(id) = id
            && let Some(cached) = self.key_cache.get(&key_cache_key(&id.to_string())).await
        {
            return Ok(Some(cached));
        }
        if let Some(cached) = self.key_cache.get(&key_cache_key(key)).await {
            return Ok(Some(cached));
        }

        if let Some(id) = id {
            let by_id = self
                .store
                .run(
                    "certificates.find_by_id",
                    CertificateRepository::find_by_id(&self.pool, id),
                )
                .await?;
            if let Some(certificate) = by_id {
                self.key_cache
                    .put(&key_cache_key(&id.to_string()), certificate.clone())
                    .await;
                return Ok(Some(certificate));
            }
        }

        let by_credential = self
            .store
            .run(
                "certificates.find_by_credential_id",
                CertificateRepository::find_by_credential_id(&self.pool, key),
            )
            .await?;
        if let Some(certificate) = &by_credential {
            self.key_cache
                .put(&key_cache_key(key), certificate.clone())
                .await;
        }
        Ok(by_credential)
    }

    pub async fn add(&self, new: NewCertificate) -> ServiceResult<Uuid> {
        new.validate()?;

        let certificate = Certificate::new(new);
        self.store
            .run(
                "certificates.create",
                CertificateRepository::create(&self.pool, &certificate),
            )
            .await?;

        debug!(
            "Added certificate {} for {}",
            certificate.id, certificate.user_id
        );
        Ok(certificate.id)
    }

    /// Owner edit. Only the fields present in `patch` change. Verification is an
    /// administrative action, so a patch that sets `verified` is rejected.
    pub async fn update(&self, id: Uuid, patch: CertificatePatch) -> ServiceResult<bool> {
        if patch.verified.is_some() {
            return Err(ServiceError::validation(
                "verified can only be changed by an administrator",
            ));
        }
        patch.validate()?;

        self.store
            .run(
                "certificates.update",
                CertificateRepository::update(&self.pool, id, &patch),
            )
            .await
    }

    /// Administrative edit. Same partial semantics as [`Self::update`], `verified` included.
    pub async fn admin_update(&self, id: Uuid, patch: CertificatePatch) -> ServiceResult<bool> {
        patch.validate()?;

        let updated = self
            .store
            .run(
                "certificates.admin_update",
                CertificateRepository::update(&self.pool, id, &patch),
            )
            .await?;

        if updated && let Some(verified) = patch.verified {
            info!("Certificate {} verified={}", id, verified);
        }
        Ok(updated)
    }

    pub async fn set_verified(&self, id: Uuid, verified: bool) -> ServiceResult<bool> {
        self.admin_update(id, CertificatePatch::verified(verified)).await
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        self.store
            .run(
                "certificates.delete",
                CertificateRepository::delete(&self.pool, id),
            )
            .await
    }

    /// Removes every record owned by `owner`. Returns how many were removed.
    pub async fn delete_all(&self, owner: Uuid) -> ServiceResult<u64> {
        self.store
            .run(
                "certificates.delete_by_user",
                CertificateRepository::delete_by_user(&self.pool, owner),
            )
            .await
    }

    /// Every record across all owners, newest first.
    pub async fn list_all(&self) -> ServiceResult<Vec<Certificate>> {
        self.store
            .run(
                "certificates.list_all",
                CertificateRepository::list_all(&self.pool),
            )
            .await
    }

    /// Review queue: unverified records, oldest first.
    pub async fn list_unverified(&self) -> ServiceResult<Vec<Certificate>> {
        self.store
            .run(
                "certificates.list_unverified",
                CertificateRepository::list_unverified(&self.pool),
            )
            .await
    }

    /// Stores an image under the owner's prefix and returns its public URL.
    pub async fn upload_image(
        &self,
        owner: Uuid,
        file_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<String> {
        let object = self.storage.upload(owner, file_name, bytes).await?;
        Ok(object.url)
    }
}
