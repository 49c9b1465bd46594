pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::certificate_repository::CertificateRepository;
pub use repositories::document_repository::{Collection, DocumentRepository};
pub use repositories::education_repository::EducationRepository;
pub use repositories::experience_repository::ExperienceRepository;
pub use repositories::language_repository::LanguageRepository;
pub use repositories::skill_repository::SkillRepository;
pub use repositories::waitlist_repository::WaitlistRepository;
