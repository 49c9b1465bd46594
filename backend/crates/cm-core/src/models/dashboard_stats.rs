use crate::{Certificate, CertificateType};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary counts shown on a user's dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub certificates: usize,
    pub diplomas: usize,
    pub badges: usize,
    pub verified: usize,
    pub latest_date: Option<NaiveDate>,
}

impl DashboardStats {
    pub fn from_certificates(certificates: &[Certificate]) -> Self {
        let count = |t: CertificateType| {
            certificates
                .iter()
                .filter(|c| c.certificate_type == t)
                .count()
        };

        Self {
            total: certificates.len(),
            certificates: count(CertificateType::Certificate),
            diplomas: count(CertificateType::Diploma),
            badges: count(CertificateType::Badge),
            verified: certificates.iter().filter(|c| c.verified).count(),
            latest_date: certificates.iter().map(|c| c.date).max(),
        }
    }

    pub fn unverified(&self) -> usize {
        self.total - self.verified
    }
}
