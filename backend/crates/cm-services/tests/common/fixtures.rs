use cm_core::{
    CertificateType, LanguageProficiency, NewCertificate, NewEducation, NewExperience,
    NewLanguage, NewSkill, Session, SkillLevel,
};

use chrono::NaiveDate;
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn new_certificate(user_id: Uuid, name: &str) -> NewCertificate {
    NewCertificate {
        user_id,
        credential_id: None,
        name: name.to_string(),
        issuer: "Test Academy".to_string(),
        description: "Completed the course".to_string(),
        date: date(2026, 1, 15),
        certificate_type: CertificateType::Certificate,
        image: None,
        credential_url: Some("https://academy.test/verify/1".to_string()),
    }
}

pub fn new_certificate_with_credential_id(
    user_id: Uuid,
    name: &str,
    credential_id: &str,
) -> NewCertificate {
    NewCertificate {
        credential_id: Some(credential_id.to_string()),
        ..new_certificate(user_id, name)
    }
}

pub fn new_experience(user_id: Uuid, title: &str, start: NaiveDate) -> NewExperience {
    NewExperience {
        user_id,
        title: title.to_string(),
        company: "Test Corp".to_string(),
        location: None,
        start_date: start,
        end_date: None,
        current: false,
        description: None,
    }
}

pub fn new_education(user_id: Uuid, degree: &str, start: NaiveDate) -> NewEducation {
    NewEducation {
        user_id,
        institution: "Test University".to_string(),
        degree: degree.to_string(),
        field_of_study: None,
        start_date: start,
        end_date: None,
        grade: None,
        description: None,
    }
}

pub fn new_skill(user_id: Uuid, name: &str) -> NewSkill {
    NewSkill {
        user_id,
        name: name.to_string(),
        level: SkillLevel::Advanced,
    }
}

pub fn new_language(user_id: Uuid, name: &str) -> NewLanguage {
    NewLanguage {
        user_id,
        name: name.to_string(),
        proficiency: LanguageProficiency::Conversational,
    }
}

pub fn session(email: &str) -> Session {
    Session::new(Uuid::new_v4(), email)
}
