use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CandidateStatus, JlptLevel, Major, MaritalStatus};
use crate::common::{ValidationError, optional_phone, require_email, require_text};
use crate::services::Resource;

/// Reference to a file stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRef {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub major: Major,
    pub jlpt_level: JlptLevel,
    pub marital_status: MaritalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv: Option<FileRef>,
    pub status: CandidateStatus,
    pub job_id: Option<String>,
    pub note: String,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Candidate {
    const ENDPOINT: &'static str = "/api/candidates";
    const UPLOAD_FIELD: &'static str = "cv";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draft(_order: i32) -> Self {
        Self::default()
    }

    fn validate(&self, _is_new: bool, _has_upload: bool) -> Result<(), ValidationError> {
        require_text("name", &self.name, "Vui lòng nhập họ tên!")?;
        require_email("email", &self.email)?;
        optional_phone("phone", &self.phone)
    }
}
