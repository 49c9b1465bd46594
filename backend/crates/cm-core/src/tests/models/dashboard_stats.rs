use crate::{Certificate, CertificateType, DashboardStats, NewCertificate};

use chrono::NaiveDate;
use uuid::Uuid;

fn certificate(t: CertificateType, verified: bool, day: u32) -> Certificate {
    let mut c = Certificate::new(NewCertificate {
        user_id: Uuid::new_v4(),
        credential_id: None,
        name: "n".to_string(),
        issuer: "i".to_string(),
        description: String::new(),
        date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
        certificate_type: t,
        image: None,
        credential_url: None,
    });
    c.verified = verified;
    c
}

#[test]
fn test_dashboard_stats_counts_by_type_and_verification() {
    let certificates = vec![
        certificate(CertificateType::Certificate, true, 3),
        certificate(CertificateType::Certificate, false, 9),
        certificate(CertificateType::Diploma, true, 1),
        certificate(CertificateType::Badge, false, 5),
    ];

    let stats = DashboardStats::from_certificates(&certificates);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.certificates, 2);
    assert_eq!(stats.diplomas, 1);
    assert_eq!(stats.badges, 1);
    assert_eq!(stats.verified, 2);
    assert_eq!(stats.unverified(), 2);
    assert_eq!(stats.latest_date, NaiveDate::from_ymd_opt(2026, 1, 9));
}

#[test]
fn test_dashboard_stats_empty() {
    let stats = DashboardStats::from_certificates(&[]);

    assert_eq!(stats, DashboardStats::default());
    assert_eq!(stats.latest_date, None);
}
