use crate::store_call::StoreCall;
use crate::{ServiceError, ServiceResult};

use cm_core::WaitlistEntry;
use cm_db::WaitlistRepository;

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct WaitlistService {
    pool: SqlitePool,
    store: StoreCall,
}

impl WaitlistService {
    pub(crate) fn new(pool: SqlitePool, store: StoreCall) -> Self {
        Self { pool, store }
    }

    /// Adds `email` to the waitlist. Joining twice returns the original entry's id.
    pub async fn join(&self, email: &str, name: Option<String>) -> ServiceResult<Uuid> {
        let entry = WaitlistEntry::new(email.to_string(), name);
        if !is_plausible_email(&entry.email) {
            return Err(ServiceError::validation(format!(
                "'{}' is not an email address",
                email
            )));
        }

        let created = self
            .store
            .run(
                "waitlist.create",
                WaitlistRepository::create(&self.pool, &entry),
            )
            .await?;
        if created {
            info!("Waitlist joined by {}", entry.email);
            return Ok(entry.id);
        }

        let existing = self
            .store
            .run(
                "waitlist.find_by_email",
                WaitlistRepository::find_by_email(&self.pool, &entry.email),
            )
            .await?;

        existing.map(|e| e.id).ok_or_else(|| {
            ServiceError::decode(format!("waitlist entry for {} vanished", entry.email))
        })
    }

    /// Newest first.
    pub async fn list(&self) -> ServiceResult<Vec<WaitlistEntry>> {
        self.store
            .run("waitlist.list", WaitlistRepository::list(&self.pool))
            .await
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}
