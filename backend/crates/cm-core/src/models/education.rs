use crate::{CoreError, CoreResult};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub user_id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub grade: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Education {
    pub fn new(new: NewEducation) -> Self {
        let now = crate::timestamp::now();
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            institution: new.institution,
            degree: new.degree,
            field_of_study: new.field_of_study,
            start_date: new.start_date,
            end_date: new.end_date,
            grade: new.grade,
            description: new.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEducation {
    pub user_id: Uuid,
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewEducation {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.institution.trim().is_empty() || self.degree.trim().is_empty() {
            return Err(CoreError::validation(
                "education institution and degree are required",
            ));
        }
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(CoreError::validation("education ends before it starts"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub grade: Option<String>,
    pub description: Option<String>,
}

impl EducationPatch {
    /// Checks the patch against the stored dates it would be merged with.
    #[track_caller]
    pub fn validate(
        &self,
        stored_start: NaiveDate,
        stored_end: Option<NaiveDate>,
    ) -> CoreResult<()> {
        let blank =
            |value: &Option<String>| value.as_deref().is_some_and(|v| v.trim().is_empty());
        if blank(&self.institution) || blank(&self.degree) {
            return Err(CoreError::validation(
                "education institution and degree are required",
            ));
        }
        let start = self.start_date.unwrap_or(stored_start);
        if let Some(end) = self.end_date.or(stored_end)
            && end < start
        {
            return Err(CoreError::validation("education ends before it starts"));
        }
        Ok(())
    }
}
