use crate::{CoreError, CoreResult};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A position held by a user. Listed newest `start_date` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    pub fn new(new: NewExperience) -> Self {
        let now = crate::timestamp::now();
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            title: new.title,
            company: new.company,
            location: new.location,
            start_date: new.start_date,
            end_date: new.end_date,
            current: new.current,
            description: new.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewExperience {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() || self.company.trim().is_empty() {
            return Err(CoreError::validation(
                "experience title and company are required",
            ));
        }
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(CoreError::validation("experience ends before it starts"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl ExperiencePatch {
    /// Checks the patch against the stored dates it would be merged with.
    #[track_caller]
    pub fn validate(
        &self,
        stored_start: NaiveDate,
        stored_end: Option<NaiveDate>,
    ) -> CoreResult<()> {
        if is_blank(&self.title) || is_blank(&self.company) {
            return Err(CoreError::validation(
                "experience title and company are required",
            ));
        }
        let start = self.start_date.unwrap_or(stored_start);
        if let Some(end) = self.end_date.or(stored_end)
            && end < start
        {
            return Err(CoreError::validation("experience ends before it starts"));
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| v.trim().is_empty())
}
