use crate::CertificateType;

use std::str::FromStr;

#[test]
fn test_certificate_type_as_str() {
    assert_eq!(CertificateType::Certificate.as_str(), "certificate");
    assert_eq!(CertificateType::Diploma.as_str(), "diploma");
    assert_eq!(CertificateType::Badge.as_str(), "badge");
}

#[test]
fn test_certificate_type_from_str() {
    for t in CertificateType::ALL {
        assert_eq!(CertificateType::from_str(t.as_str()).unwrap(), t);
    }
    assert!(CertificateType::from_str("transcript").is_err());
    assert!(CertificateType::from_str("Badge").is_err());
}

#[test]
fn test_certificate_type_default() {
    assert_eq!(CertificateType::default(), CertificateType::Certificate);
}

#[test]
fn test_certificate_type_serde_uses_lowercase() {
    let json = serde_json::to_string(&CertificateType::Diploma).unwrap();
    assert_eq!(json, "\"diploma\"");
    assert!(serde_json::from_str::<CertificateType>("\"award\"").is_err());
}
