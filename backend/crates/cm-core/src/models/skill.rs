use crate::{CoreError, CoreResult, SkillLevel};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Skill {
    pub fn new(new: NewSkill) -> Self {
        let now = crate::timestamp::now();
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            name: new.name,
            level: new.level,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

impl NewSkill {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("skill name must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

impl SkillPatch {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(CoreError::validation("skill name must not be empty"));
        }
        Ok(())
    }
}
