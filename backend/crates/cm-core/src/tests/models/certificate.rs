use crate::{Certificate, CertificatePatch, CertificateType, NewCertificate};

use chrono::NaiveDate;
use googletest::prelude::*;
use uuid::Uuid;

fn new_certificate() -> NewCertificate {
    NewCertificate {
        user_id: Uuid::new_v4(),
        credential_id: Some("RUST-2026-001".to_string()),
        name: "Course A".to_string(),
        issuer: "Rust Foundation".to_string(),
        description: "Ownership and borrowing".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        certificate_type: CertificateType::Certificate,
        image: None,
        credential_url: Some("https://example.org/verify/RUST-2026-001".to_string()),
    }
}

#[test]
fn given_new_certificate_when_materialized_then_unverified_with_fresh_id() {
    let new = new_certificate();

    let certificate = Certificate::new(new.clone());

    assert_that!(certificate.verified, eq(false));
    assert_that!(certificate.user_id, eq(new.user_id));
    assert_that!(certificate.name, eq(&new.name));
    assert_that!(certificate.created_at, eq(certificate.updated_at));
}

#[test]
fn given_certificate_when_serialized_then_uses_camel_case_names() {
    let certificate = Certificate::new(new_certificate());

    let value = serde_json::to_value(&certificate).unwrap();

    assert_that!(value.get("userId"), some(anything()));
    assert_that!(value.get("credentialId"), some(anything()));
    assert_that!(value.get("credentialUrl"), some(anything()));
    assert_that!(value.get("createdAt"), some(anything()));
    assert_that!(value.get("user_id"), none());
    assert_that!(value["type"].as_str(), some(eq("certificate")));
    assert_that!(value["date"].as_str(), some(eq("2026-03-14")));
}

#[test]
fn given_camel_case_form_payload_when_deserialized_then_optional_fields_default() {
    let user_id = Uuid::new_v4();
    let json = format!(
        r#"{{"userId":"{user_id}","name":"Diploma","issuer":"Uni","date":"2025-06-30","type":"diploma"}}"#
    );

    let new: NewCertificate = serde_json::from_str(&json).unwrap();

    assert_that!(new.user_id, eq(user_id));
    assert_that!(new.certificate_type, eq(CertificateType::Diploma));
    assert_that!(new.description, eq(""));
    assert_that!(new.image, none());
}

#[test]
fn given_blank_name_when_validated_then_error() {
    let mut new = new_certificate();
    new.name = "   ".to_string();

    assert_that!(new.validate(), err(anything()));
}

#[test]
fn given_blank_credential_id_when_validated_then_error() {
    let mut new = new_certificate();
    new.credential_id = Some(String::new());

    assert_that!(new.validate(), err(anything()));
}

#[test]
fn given_patch_with_blank_credential_id_when_validated_then_error() {
    let patch = CertificatePatch {
        credential_id: Some("  ".to_string()),
        ..CertificatePatch::default()
    };

    assert_that!(patch.validate(), err(anything()));
}

#[test]
fn given_verified_only_patch_when_validated_then_ok() {
    assert_that!(CertificatePatch::verified(true).validate(), ok(anything()));
}

#[test]
fn given_patch_json_with_single_field_then_others_are_none() {
    let patch: CertificatePatch = serde_json::from_str(r#"{"credentialUrl":"https://x"}"#).unwrap();

    assert_that!(patch.credential_url.as_deref(), some(eq("https://x")));
    assert_that!(patch.name, none());
    assert_that!(patch.verified, none());
}
