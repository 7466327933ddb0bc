use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{JobCategory, RecruitmentStatus};
use crate::common::{ValidationError, require_text};
use crate::services::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Salary {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub currency: String,
    pub note: String,
}

impl Salary {
    /// Human readable range, e.g. `18,000,000 - 25,000,000 VND`.
    pub fn display(&self) -> String {
        let range = match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => group_thousands(min),
            (Some(min), Some(max)) => format!("{} - {}", group_thousands(min), group_thousands(max)),
            (Some(min), None) => format!("Từ {}", group_thousands(min)),
            (None, Some(max)) => format!("Đến {}", group_thousands(max)),
            (None, None) => return non_empty_or(&self.note, "Thỏa thuận"),
        };

        if self.currency.trim().is_empty() {
            range
        } else {
            format!("{range} {}", self.currency.trim())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeRange {
    pub min: Option<u8>,
    pub max: Option<u8>,
}

impl AgeRange {
    pub fn display(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{min} - {max} tuổi"),
            (Some(min), None) => format!("Từ {min} tuổi"),
            (None, Some(max)) => format!("Dưới {max} tuổi"),
            (None, None) => "Không giới hạn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(alias = "_id", skip_serializing)]
    pub id: Option<String>,
    pub code: String,
    pub title: String,
    pub category: JobCategory,
    pub location: String,
    pub work_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub salary: Salary,
    pub age: AgeRange,
    pub recruitment_status: RecruitmentStatus,
    pub is_active: bool,
    pub deadline: Option<NaiveDate>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Active flag set and recruitment still open.
    pub fn is_open(&self) -> bool {
        self.is_active && self.recruitment_status == RecruitmentStatus::Active
    }
}

impl Resource for Job {
    const ENDPOINT: &'static str = "/api/careers/jobs";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn draft(_order: i32) -> Self {
        Self {
            is_active: true,
            salary: Salary {
                currency: "VND".to_string(),
                ..Salary::default()
            },
            ..Self::default()
        }
    }

    fn validate(&self, _is_new: bool, _has_upload: bool) -> Result<(), ValidationError> {
        require_text("title", &self.title, "Vui lòng nhập tiêu đề công việc!")?;
        require_text("location", &self.location, "Vui lòng nhập địa điểm làm việc!")?;

        if let (Some(min), Some(max)) = (self.salary.min, self.salary.max) {
            if min > max {
                return Err(ValidationError::new(
                    "salary",
                    "Mức lương tối thiểu không được lớn hơn mức lương tối đa!",
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.age.min, self.age.max) {
            if min > max {
                return Err(ValidationError::new(
                    "age",
                    "Độ tuổi tối thiểu không được lớn hơn độ tuổi tối đa!",
                ));
            }
        }
        Ok(())
    }

    fn renumber(&mut self) {
        self.requirements.retain(|r| !r.trim().is_empty());
        self.benefits.retain(|b| !b.trim().is_empty());
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.trim().to_string()
    }
}
