//! Credential record - a certificate, diploma or badge owned by one user.

use crate::{CertificateType, CoreError, CoreResult};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored credential record.
///
/// Field names serialize in camelCase for presentation; the relational store keeps
/// the same fields in snake_case columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: Uuid,
    /// Owner. Never changes after creation.
    pub user_id: Uuid,
    /// Optional human-shareable lookup key
    pub credential_id: Option<String>,

    pub name: String,
    pub issuer: String,
    pub description: String,
    /// Issue date
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub certificate_type: CertificateType,
    /// Public URL into object storage
    pub image: Option<String>,
    /// External verification link
    pub credential_url: Option<String>,
    /// Only flipped by an administrator
    pub verified: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Certificate {
    /// Materialize a new record from an insert payload. Always starts unverified.
    pub fn new(new: NewCertificate) -> Self {
        let now = crate::timestamp::now();
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            credential_id: new.credential_id,
            name: new.name,
            issuer: new.issuer,
            description: new.description,
            date: new.date,
            certificate_type: new.certificate_type,
            image: new.image,
            credential_url: new.credential_url,
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Insert payload: everything except id, verification and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCertificate {
    pub user_id: Uuid,
    #[serde(default)]
    pub credential_id: Option<String>,
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub certificate_type: CertificateType,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

impl NewCertificate {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("certificate name must not be empty"));
        }
        if self.issuer.trim().is_empty() {
            return Err(CoreError::validation("certificate issuer must not be empty"));
        }
        if let Some(credential_id) = &self.credential_id
            && credential_id.trim().is_empty()
        {
            return Err(CoreError::validation("credentialId must not be blank"));
        }
        Ok(())
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificatePatch {
    pub credential_id: Option<String>,
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub certificate_type: Option<CertificateType>,
    pub image: Option<String>,
    pub credential_url: Option<String>,
    pub verified: Option<bool>,
}

impl CertificatePatch {
    pub fn verified(verified: bool) -> Self {
        Self {
            verified: Some(verified),
            ..Self::default()
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(CoreError::validation("certificate name must not be empty"));
        }
        if let Some(issuer) = &self.issuer
            && issuer.trim().is_empty()
        {
            return Err(CoreError::validation("certificate issuer must not be empty"));
        }
        if let Some(credential_id) = &self.credential_id
            && credential_id.trim().is_empty()
        {
            return Err(CoreError::validation("credentialId must not be blank"));
        }
        Ok(())
    }
}
