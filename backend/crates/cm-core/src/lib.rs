pub mod error;
pub mod models;
pub mod timestamp;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::certificate::{Certificate, CertificatePatch, NewCertificate};
pub use models::certificate_type::CertificateType;
pub use models::dashboard_stats::DashboardStats;
pub use models::demo_wallet::{DemoToken, DemoWallet};
pub use models::education::{Education, EducationPatch, NewEducation};
pub use models::experience::{Experience, ExperiencePatch, NewExperience};
pub use models::language::{Language, LanguagePatch, NewLanguage};
pub use models::language_proficiency::LanguageProficiency;
pub use models::session::Session;
pub use models::skill::{NewSkill, Skill, SkillPatch};
pub use models::skill_level::SkillLevel;
pub use models::user::{User, UserPatch};
pub use models::user_analytics::UserAnalytics;
pub use models::user_role::UserRole;
pub use models::waitlist_entry::WaitlistEntry;

pub use error_location::ErrorLocation;
