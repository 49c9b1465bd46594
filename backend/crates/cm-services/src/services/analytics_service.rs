//! Dashboard summaries and per-user counters (`userAnalytics` collection).
//!
//! Counter updates are read-modify-write without coordination; two concurrent
//! increments can collapse into one (last write wins).

use crate::services::certificate_service::CertificateService;
use crate::services::documents::{decode, encode};
use crate::store_call::StoreCall;
use crate::ServiceResult;

use cm_core::{DashboardStats, UserAnalytics};
use cm_db::{Collection, DocumentRepository};

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct AnalyticsService {
    pool: SqlitePool,
    store: StoreCall,
    certificates: Arc<CertificateService>,
}

impl AnalyticsService {
    pub(crate) fn new(
        pool: SqlitePool,
        store: StoreCall,
        certificates: Arc<CertificateService>,
    ) -> Self {
        Self {
            pool,
            store,
            certificates,
        }
    }

    /// Computed from the owner's (possibly cached) certificate list.
    pub async fn dashboard_stats(&self, owner: Uuid) -> ServiceResult<DashboardStats> {
        let certificates = self.certificates.get_all(owner).await?;
        Ok(DashboardStats::from_certificates(&certificates))
    }

    /// Stored counters, or zeroes for a user nobody has looked at yet.
    pub async fn user_analytics(&self, user_id: Uuid) -> ServiceResult<UserAnalytics> {
        let document = self
            .store
            .run(
                "analytics.get",
                DocumentRepository::get(
                    &self.pool,
                    Collection::UserAnalytics,
                    &user_id.to_string(),
                ),
            )
            .await?;

        match document {
            Some(document) => decode(document),
            None => Ok(UserAnalytics::empty(user_id)),
        }
    }

    pub async fn record_profile_view(&self, user_id: Uuid) -> ServiceResult<UserAnalytics> {
        let mut analytics = self.user_analytics(user_id).await?;
        analytics.profile_views += 1;
        analytics.last_viewed_at = Some(cm_core::timestamp::now());

        self.save(&analytics).await?;
        Ok(analytics)
    }

    pub async fn record_share(&self, user_id: Uuid) -> ServiceResult<UserAnalytics> {
        let mut analytics = self.user_analytics(user_id).await?;
        analytics.shares += 1;

        self.save(&analytics).await?;
        Ok(analytics)
    }

    pub async fn delete(&self, user_id: Uuid) -> ServiceResult<bool> {
        self.store
            .run(
                "analytics.delete",
                DocumentRepository::delete(
                    &self.pool,
                    Collection::UserAnalytics,
                    &user_id.to_string(),
                ),
            )
            .await
    }

    async fn save(&self, analytics: &UserAnalytics) -> ServiceResult<()> {
        let body = encode(analytics)?;
        self.store
            .run(
                "analytics.set",
                DocumentRepository::set(
                    &self.pool,
                    Collection::UserAnalytics,
                    &analytics.user_id.to_string(),
                    &body,
                ),
            )
            .await
    }
}
