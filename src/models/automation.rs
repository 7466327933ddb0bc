use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ValidationError, require_text};
use crate::editor::ordering::renumber_with;
use crate::services::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub title: String,
    pub description: String,
    pub order: i32,
}

/// One stage of the automated production line shown on the machinery page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomationItem {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub title: String,
    pub image: String,
    pub steps: Vec<Step>,
    pub order: i32,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for AutomationItem {
    const ENDPOINT: &'static str = "/api/automation/items";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draft(order: i32) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    fn validate(&self, is_new: bool, has_upload: bool) -> Result<(), ValidationError> {
        require_text("title", &self.title, "Vui lòng nhập tiêu đề quy trình!")?;
        if is_new && !has_upload && self.image.trim().is_empty() {
            return Err(ValidationError::new("image", "Vui lòng chọn hình ảnh!"));
        }
        if let Some(position) = self.steps.iter().position(|s| s.title.trim().is_empty()) {
            return Err(ValidationError::new(
                "steps",
                format!("Vui lòng nhập tiêu đề cho bước {}!", position + 1),
            ));
        }
        Ok(())
    }

    fn order(&self) -> Option<i32> {
        Some(self.order)
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }

    fn renumber(&mut self) {
        renumber_with(&mut self.steps, |s, i| s.order = i);
    }
}
