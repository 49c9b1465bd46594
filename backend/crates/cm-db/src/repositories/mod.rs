pub mod certificate_repository;
pub mod document_repository;
pub mod education_repository;
pub mod experience_repository;
pub mod language_repository;
pub mod skill_repository;
pub mod waitlist_repository;

mod decode;
