//! Reconciled role model.
//!
//! The document store historically wrote `student | teacher | organization | admin`
//! while the relational side used `user | org_admin | super_admin`. Both spellings are
//! accepted on read and mapped onto one canonical enumeration; only the canonical
//! spelling is ever written back.

use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    OrgAdmin,
    SuperAdmin,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        Self::Student,
        Self::Teacher,
        Self::OrgAdmin,
        Self::SuperAdmin,
    ];

    /// Canonical storage spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::OrgAdmin => "org_admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Every stored spelling that maps onto this role, canonical first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Student => &["student", "user"],
            Self::Teacher => &["teacher"],
            Self::OrgAdmin => &["org_admin", "organization"],
            Self::SuperAdmin => &["super_admin", "admin"],
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::OrgAdmin | Self::SuperAdmin)
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    /// Accepts canonical and legacy spellings from either store.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "student" | "user" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            "org_admin" | "organization" => Ok(Self::OrgAdmin),
            "super_admin" | "admin" => Ok(Self::SuperAdmin),
            _ => Err(CoreError::InvalidUserRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserRole::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
