pub mod certificate;
pub mod certificate_type;
pub mod dashboard_stats;
pub mod demo_wallet;
pub mod education;
pub mod experience;
pub mod language;
pub mod language_proficiency;
pub mod session;
pub mod skill;
pub mod skill_level;
pub mod user;
pub mod user_analytics;
pub mod user_role;
pub mod waitlist_entry;
