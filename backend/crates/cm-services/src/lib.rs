//! Data access layer.
//!
//! Per-entity services sit between callers and the two record stores. Every
//! operation returns a [`ServiceResult`]: a missing record is a value (`None`,
//! `false`), store failures and deadlines are errors. Selected reads go through
//! an injected [`ReadCache`] that is never invalidated by writes, so a cached read
//! may be stale for up to the configured TTL.

pub mod cache;
pub mod data_access;
pub mod error;
pub mod services;
pub mod storage;

mod store_call;

#[cfg(test)]
mod tests;

pub use cache::{CacheStats, Clock, ManualClock, ReadCache, SystemClock, TtlCache};
pub use data_access::{DataAccess, DataAccessSettings};
pub use error::{Result as ServiceResult, ServiceError};
pub use services::account_service::{AccountDeletion, AccountService};
pub use services::analytics_service::AnalyticsService;
pub use services::certificate_service::CertificateService;
pub use services::demo_wallet_service::DemoWalletService;
pub use services::education_service::EducationService;
pub use services::experience_service::ExperienceService;
pub use services::language_service::LanguageService;
pub use services::skill_service::SkillService;
pub use services::user_service::UserService;
pub use services::waitlist_service::WaitlistService;
pub use storage::{LocalObjectStorage, ObjectStorage, StoredObject};
