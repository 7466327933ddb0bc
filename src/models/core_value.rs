use serde::{Deserialize, Serialize};

use crate::common::{ValidationError, require_text};
use crate::services::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreValue {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: i32,
}

impl Resource for CoreValue {
    const ENDPOINT: &'static str = "/api/overview/core-values";
    const UPLOAD_FIELD: &'static str = "icon";

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
        require_text("title", &self.title, "Vui lòng nhập tên giá trị cốt lõi!")
    }

    fn order(&self) -> Option<i32> {
        Some(self.order)
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}
