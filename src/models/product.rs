use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ValidationError, require_text};
use crate::editor::ordering::renumber_with;
use crate::services::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationContent {
    pub heading: String,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

/// A use case of a product, shown as a tab on the product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub title: String,
    pub order: i32,
    pub content: ApplicationContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub main_image: String,
    pub gallery_images: Vec<String>,
    pub applications: Vec<Application>,
    pub order: i32,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Product {
    const ENDPOINT: &'static str = "/api/products";
    const UPLOAD_FIELD: &'static str = "mainImage";

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
        require_text("name", &self.name, "Vui lòng nhập tên sản phẩm!")?;
        if is_new && !has_upload && self.main_image.trim().is_empty() {
            return Err(ValidationError::new("mainImage", "Vui lòng chọn ảnh đại diện sản phẩm!"));
        }
        if let Some(position) = self.applications.iter().position(|a| a.title.trim().is_empty()) {
            return Err(ValidationError::new(
                "applications",
                format!("Vui lòng nhập tiêu đề cho ứng dụng thứ {}!", position + 1),
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
        self.gallery_images.retain(|url| !url.trim().is_empty());
        renumber_with(&mut self.applications, |a, i| a.order = i);
    }
}
