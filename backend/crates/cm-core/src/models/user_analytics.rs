use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user counters, one document per user keyed by the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnalytics {
    pub user_id: Uuid,
    #[serde(default)]
    pub profile_views: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub last_viewed_at: Option<DateTime<Utc>>,
}

impl UserAnalytics {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            profile_views: 0,
            shares: 0,
            last_viewed_at: None,
        }
    }
}
