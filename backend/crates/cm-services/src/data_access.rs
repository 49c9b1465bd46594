use crate::cache::{CacheStats, Clock, ReadCache, SystemClock, TtlCache};
use crate::services::account_service::AccountService;
use crate::services::analytics_service::AnalyticsService;
use crate::services::certificate_service::CertificateService;
use crate::services::demo_wallet_service::DemoWalletService;
use crate::services::education_service::EducationService;
use crate::services::experience_service::ExperienceService;
use crate::services::language_service::LanguageService;
use crate::services::skill_service::SkillService;
use crate::services::user_service::UserService;
use crate::services::waitlist_service::WaitlistService;
use crate::storage::{LocalObjectStorage, ObjectStorage};
use crate::store_call::StoreCall;
use crate::ServiceResult;

use cm_config::Config;
use cm_core::{Certificate, User};
use cm_db::Database;

use std::sync::Arc;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataAccessSettings {
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
}

impl Default for DataAccessSettings {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl From<&Config> for DataAccessSettings {
    fn from(config: &Config) -> Self {
        Self {
            cache_ttl: config.cache.ttl(),
            request_timeout: config.store.request_timeout(),
        }
    }
}

/// Every service, sharing one pool, one set of caches and one object store.
pub struct DataAccess {
    pub certificates: Arc<CertificateService>,
    pub experiences: ExperienceService,
    pub educations: EducationService,
    pub skills: SkillService,
    pub languages: LanguageService,
    pub users: UserService,
    pub analytics: AnalyticsService,
    pub waitlist: WaitlistService,
    pub wallets: DemoWalletService,
    pub accounts: AccountService,

    certificate_owner_cache: Arc<TtlCache<Vec<Certificate>>>,
    certificate_key_cache: Arc<TtlCache<Certificate>>,
    user_cache: Arc<TtlCache<User>>,
}

impl DataAccess {
    /// Connects to the configured database and local object directory.
    pub async fn open(config: &Config) -> ServiceResult<Self> {
        let pool = Database::connect(&config.database_path()?).await?;
        let storage = LocalObjectStorage::new(
            config.storage_path()?,
            config.storage.public_base_url.clone(),
        );

        Ok(Self::new(
            pool,
            DataAccessSettings::from(config),
            Arc::new(storage),
        ))
    }

    pub fn new(
        pool: SqlitePool,
        settings: DataAccessSettings,
        storage: Arc<dyn ObjectStorage>,
    ) -> Self {
        Self::with_clock(pool, settings, storage, Arc::new(SystemClock))
    }

    pub fn with_clock(
        pool: SqlitePool,
        settings: DataAccessSettings,
        storage: Arc<dyn ObjectStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let store = StoreCall::new(settings.request_timeout);

        let certificate_owner_cache = Arc::new(TtlCache::with_clock(
            settings.cache_ttl,
            Arc::clone(&clock),
        ));
        let certificate_key_cache = Arc::new(TtlCache::with_clock(
            settings.cache_ttl,
            Arc::clone(&clock),
        ));
        let user_cache = Arc::new(TtlCache::with_clock(settings.cache_ttl, clock));

        let certificates = Arc::new(CertificateService::new(
            pool.clone(),
            store,
            certificate_owner_cache.clone(),
            certificate_key_cache.clone(),
            Arc::clone(&storage),
        ));

        info!(
            "Data access ready (cache ttl {:?}, request timeout {:?})",
            settings.cache_ttl, settings.request_timeout
        );

        Self {
            experiences: ExperienceService::new(pool.clone(), store),
            educations: EducationService::new(pool.clone(), store),
            skills: SkillService::new(pool.clone(), store),
            languages: LanguageService::new(pool.clone(), store),
            users: UserService::new(pool.clone(), store, user_cache.clone()),
            analytics: AnalyticsService::new(pool.clone(), store, Arc::clone(&certificates)),
            waitlist: WaitlistService::new(pool.clone(), store),
            wallets: DemoWalletService::new(pool.clone(), store),
            accounts: AccountService::new(
                pool,
                store,
                storage,
                certificate_owner_cache.clone(),
                certificate_key_cache.clone(),
                user_cache.clone(),
            ),
            certificates,
            certificate_owner_cache,
            certificate_key_cache,
            user_cache,
        }
    }

    /// Combined counters across every read cache.
    pub async fn cache_stats(&self) -> CacheStats {
        let parts = [
            self.certificate_owner_cache.stats().await,
            self.certificate_key_cache.stats().await,
            self.user_cache.stats().await,
        ];

        parts.iter().fold(CacheStats::default(), |total, part| CacheStats {
            hits: total.hits + part.hits,
            misses: total.misses + part.misses,
            entry_count: total.entry_count + part.entry_count,
        })
    }
}
