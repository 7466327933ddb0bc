use serde::{Deserialize, Serialize};

use crate::common::{ValidationError, is_valid_email, optional_phone, require_text};
use crate::services::Singleton;

/// Message from the board shown on the overview page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyMessage {
    pub title: String,
    pub content: String,
    pub author: String,
    pub position: String,
    pub image: String,
}

impl Singleton for CompanyMessage {
    const ENDPOINT: &'static str = "/api/overview/message";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, "Vui lòng nhập tiêu đề!")?;
        require_text("content", &self.content, "Vui lòng nhập nội dung thông điệp!")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionMission {
    pub vision: String,
    pub mission: String,
}

impl Singleton for VisionMission {
    const ENDPOINT: &'static str = "/api/overview/vision-mission";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("vision", &self.vision, "Vui lòng nhập tầm nhìn!")?;
        require_text("mission", &self.mission, "Vui lòng nhập sứ mệnh!")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub hotline: String,
    pub email: String,
    pub map_url: String,
    pub working_hours: String,
}

impl Singleton for ContactInfo {
    const ENDPOINT: &'static str = "/api/contact/info";

    fn validate(&self) -> Result<(), ValidationError> {
        optional_phone("phone", &self.phone)?;
        optional_phone("hotline", &self.hotline)?;
        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            return Err(ValidationError::new("email", "Email không hợp lệ!"));
        }
        Ok(())
    }
}
