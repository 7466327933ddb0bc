use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ValidationError, require_text};
use crate::services::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Banner {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: String,
    pub order: i32,
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Banner {
    const ENDPOINT: &'static str = "/api/overview/banner";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draft(order: i32) -> Self {
        Self {
            order,
            is_active: true,
            ..Self::default()
        }
    }

    fn validate(&self, is_new: bool, has_upload: bool) -> Result<(), ValidationError> {
        require_text("title", &self.title, "Vui lòng nhập tiêu đề banner!")?;
        if is_new && !has_upload && self.image.trim().is_empty() {
            return Err(ValidationError::new("image", "Vui lòng chọn hình ảnh banner!"));
        }
        Ok(())
    }

    fn order(&self) -> Option<i32> {
        Some(self.order)
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}
