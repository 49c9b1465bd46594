use crate::{CoreError, CoreResult, LanguageProficiency};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub proficiency: LanguageProficiency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Language {
    pub fn new(new: NewLanguage) -> Self {
        let now = crate::timestamp::now();
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            name: new.name,
            proficiency: new.proficiency,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLanguage {
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub proficiency: LanguageProficiency,
}

impl NewLanguage {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("language name must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguagePatch {
    pub name: Option<String>,
    pub proficiency: Option<LanguageProficiency>,
}

impl LanguagePatch {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(CoreError::validation("language name must not be empty"));
        }
        Ok(())
    }
}
