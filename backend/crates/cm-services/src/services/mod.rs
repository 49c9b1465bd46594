pub mod account_service;
pub mod analytics_service;
pub mod certificate_service;
pub mod demo_wallet_service;
pub mod education_service;
pub mod experience_service;
pub mod language_service;
pub mod skill_service;
pub mod user_service;
pub mod waitlist_service;

pub(crate) mod documents;
