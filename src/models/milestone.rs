use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ValidationError, require_text};
use crate::services::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Milestone {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub year: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub order: i32,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Milestone {
    const ENDPOINT: &'static str = "/api/overview/milestones";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draft(order: i32) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    fn validate(&self, _is_new: bool, _has_upload: bool) -> Result<(), ValidationError> {
        require_text("year", &self.year, "Vui lòng nhập năm!")?;
        require_text("title", &self.title, "Vui lòng nhập tiêu đề cột mốc!")
    }

    fn order(&self) -> Option<i32> {
        Some(self.order)
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}
