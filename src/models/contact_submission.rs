use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SubmissionStatus;
use crate::common::{ValidationError, optional_phone, require_email, require_text};
use crate::services::Resource;

/// A message left by a visitor through the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub status: SubmissionStatus,
    pub is_spam: bool,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for ContactSubmission {
    const ENDPOINT: &'static str = "/api/contact/submissions";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draft(_order: i32) -> Self {
        Self::default()
    }

    fn validate(&self, _is_new: bool, _has_upload: bool) -> Result<(), ValidationError> {
        require_text("name", &self.name, "Vui lòng nhập họ tên!")?;
        require_email("email", &self.email)?;
        optional_phone("phone", &self.phone)?;
        require_text("message", &self.message, "Vui lòng nhập nội dung!")
    }
}
