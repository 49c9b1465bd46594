//! Demo wallet.
//!
//! A display-only placeholder. The address is a random label, tokens are plain
//! records, and nothing here involves keys, signatures or a ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEMO_ADDRESS_PREFIX: &str = "demo-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoWallet {
    pub user_id: Uuid,
    pub address: String,
    #[serde(default)]
    pub tokens: Vec<DemoToken>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoToken {
    pub certificate_id: Uuid,
    pub minted_at: DateTime<Utc>,
}

impl DemoWallet {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            address: format!("{}{}", DEMO_ADDRESS_PREFIX, Uuid::new_v4().simple()),
            tokens: Vec::new(),
            created_at: crate::timestamp::now(),
        }
    }

    /// Adds a token for `certificate_id`. Returns false if one already exists.
    pub fn mint(&mut self, certificate_id: Uuid) -> bool {
        if self
            .tokens
            .iter()
            .any(|t| t.certificate_id == certificate_id)
        {
            return false;
        }

        self.tokens.push(DemoToken {
            certificate_id,
            minted_at: crate::timestamp::now(),
        });
        true
    }
}
