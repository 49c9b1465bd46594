use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of credential a record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CertificateType {
    #[default]
    Certificate,
    Diploma,
    Badge,
}

impl CertificateType {
    pub const ALL: [CertificateType; 3] = [Self::Certificate, Self::Diploma, Self::Badge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::Diploma => "diploma",
            Self::Badge => "badge",
        }
    }
}

impl FromStr for CertificateType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "certificate" => Ok(Self::Certificate),
            "diploma" => Ok(Self::Diploma),
            "badge" => Ok(Self::Badge),
            _ => Err(CoreError::InvalidCertificateType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for CertificateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
