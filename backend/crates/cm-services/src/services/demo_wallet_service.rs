//! Demo wallet (`demoWallets` collection).
//!
//! Placeholder only. Minting records a token entry in the user's document; there is
//! no key material, signing or ledger behind it.

use crate::services::documents::{decode, encode};
use crate::store_call::StoreCall;
use crate::{ServiceError, ServiceResult};

use cm_core::DemoWallet;
use cm_db::{CertificateRepository, Collection, DocumentRepository};

use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct DemoWalletService {
    pool: SqlitePool,
    store: StoreCall,
}

impl DemoWalletService {
    pub(crate) fn new(pool: SqlitePool, store: StoreCall) -> Self {
        Self { pool, store }
    }

    pub async fn get(&self, user_id: Uuid) -> ServiceResult<Option<DemoWallet>> {
        let document = self
            .store
            .run(
                "wallets.get",
                DocumentRepository::get(&self.pool, Collection::DemoWallets, &user_id.to_string()),
            )
            .await?;

        document.map(decode).transpose()
    }

    pub async fn get_or_create(&self, user_id: Uuid) -> ServiceResult<DemoWallet> {
        if let Some(wallet) = self.get(user_id).await? {
            return Ok(wallet);
        }

        let wallet = DemoWallet::new(user_id);
        let created = self
            .store
            .run(
                "wallets.create",
                DocumentRepository::create(
                    &self.pool,
                    Collection::DemoWallets,
                    &user_id.to_string(),
                    &encode(&wallet)?,
                ),
            )
            .await?;

        if created {
            debug!("Created demo wallet {} for {}", wallet.address, user_id);
            return Ok(wallet);
        }

        // Lost a race with another creator; theirs wins.
        self.get(user_id)
            .await?
            .ok_or_else(|| ServiceError::decode(format!("demo wallet for {} vanished", user_id)))
    }

    /// Adds a demo token for one of the user's certificates.
    ///
    /// Returns false when the certificate does not exist or already has a token.
    pub async fn mint_demo_token(
        &self,
        user_id: Uuid,
        certificate_id: Uuid,
    ) -> ServiceResult<bool> {
        let certificate = self
            .store
            .run(
                "certificates.find_by_id",
                CertificateRepository::find_by_id(&self.pool, certificate_id),
            )
            .await?;

        let Some(certificate) = certificate else {
            return Ok(false);
        };
        if certificate.user_id != user_id {
            return Err(ServiceError::validation(format!(
                "certificate {} is not owned by {}",
                certificate_id, user_id
            )));
        }

        let mut wallet = self.get_or_create(user_id).await?;
        if !wallet.mint(certificate_id) {
            return Ok(false);
        }

        self.store
            .run(
                "wallets.set",
                DocumentRepository::set(
                    &self.pool,
                    Collection::DemoWallets,
                    &user_id.to_string(),
                    &encode(&wallet)?,
                ),
            )
            .await?;
        Ok(true)
    }

    pub async fn delete(&self, user_id: Uuid) -> ServiceResult<bool> {
        self.store
            .run(
                "wallets.delete",
                DocumentRepository::delete(&self.pool, Collection::DemoWallets, &user_id.to_string()),
            )
            .await
    }
}
