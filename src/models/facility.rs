use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Layout;
use crate::common::{ValidationError, require_text};
use crate::editor::ordering::renumber_with;
use crate::services::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityImage {
    pub url: String,
    pub alt: String,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacilityFeature {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub images: Vec<FacilityImage>,
    pub layout: Layout,
    pub order: i32,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for FacilityFeature {
    const ENDPOINT: &'static str = "/api/facilities/features";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draft(order: i32) -> Self {
        // Sides alternate down the page.
        let layout = if order % 2 == 0 { Layout::Left } else { Layout::Right };
        Self {
            order,
            layout,
            ..Self::default()
        }
    }

    fn validate(&self, is_new: bool, has_upload: bool) -> Result<(), ValidationError> {
        require_text("title", &self.title, "Vui lòng nhập tiêu đề!")?;
        if is_new && !has_upload && self.image.trim().is_empty() {
            return Err(ValidationError::new("image", "Vui lòng chọn hình ảnh chính!"));
        }
        if self.images.iter().any(|img| img.url.trim().is_empty()) {
            return Err(ValidationError::new("images", "Đường dẫn ảnh phụ không được để trống!"));
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
        renumber_with(&mut self.images, |img, i| img.order = i);
    }
}
