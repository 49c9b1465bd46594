use cm_core::{
    Certificate, CertificateType, Education, Experience, Language, LanguageProficiency,
    NewCertificate, NewEducation, NewExperience, NewLanguage, NewSkill, Skill, SkillLevel,
};

use chrono::NaiveDate;
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Creates a test Certificate with sensible defaults
pub fn create_test_certificate(user_id: Uuid) -> Certificate {
    Certificate::new(NewCertificate {
        user_id,
        credential_id: None,
        name: "Course A".to_string(),
        issuer: "Test Academy".to_string(),
        description: "Test certificate description".to_string(),
        date: date(2026, 1, 15),
        certificate_type: CertificateType::Certificate,
        image: None,
        credential_url: None,
    })
}

/// Creates a test Certificate carrying a shareable credential id
pub fn create_test_certificate_with_credential_id(user_id: Uuid, credential_id: &str) -> Certificate {
    let mut certificate = create_test_certificate(user_id);
    certificate.credential_id = Some(credential_id.to_string());
    certificate
}

pub fn create_test_experience(user_id: Uuid, start: NaiveDate) -> Experience {
    Experience::new(NewExperience {
        user_id,
        title: "Engineer".to_string(),
        company: "Test Corp".to_string(),
        location: Some("Remote".to_string()),
        start_date: start,
        end_date: None,
        current: true,
        description: None,
    })
}

pub fn create_test_education(user_id: Uuid, start: NaiveDate) -> Education {
    Education::new(NewEducation {
        user_id,
        institution: "Test University".to_string(),
        degree: "BSc".to_string(),
        field_of_study: Some("Computer Science".to_string()),
        start_date: start,
        end_date: None,
        grade: None,
        description: None,
    })
}

pub fn create_test_skill(user_id: Uuid, name: &str) -> Skill {
    Skill::new(NewSkill {
        user_id,
        name: name.to_string(),
        level: SkillLevel::Intermediate,
    })
}

pub fn create_test_language(user_id: Uuid, name: &str) -> Language {
    Language::new(NewLanguage {
        user_id,
        name: name.to_string(),
        proficiency: LanguageProficiency::Fluent,
    })
}
