use serde::{Deserialize, Serialize};

use crate::common::{ValidationError, is_valid_email, require_text};
use crate::services::Singleton;

/// SMTP settings the backend uses to forward contact submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from_name: String,
    pub from_email: String,
    pub recipients: Vec<String>,
    pub enabled: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_name: String::new(),
            from_email: String::new(),
            recipients: Vec::new(),
            enabled: false,
        }
    }
}

impl Singleton for EmailConfig {
    const ENDPOINT: &'static str = "/api/email-config";

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(bad) = self.recipients.iter().find(|r| !is_valid_email(r)) {
            return Err(ValidationError::new(
                "recipients",
                format!("Email người nhận không hợp lệ: {bad}"),
            ));
        }

        if !self.enabled {
            return Ok(());
        }

        require_text("smtpHost", &self.smtp_host, "Vui lòng nhập máy chủ SMTP!")?;
        if self.smtp_port == 0 {
            return Err(ValidationError::new("smtpPort", "Cổng SMTP không hợp lệ!"));
        }
        if !is_valid_email(&self.from_email) {
            return Err(ValidationError::new("fromEmail", "Email gửi đi không hợp lệ!"));
        }
        if self.recipients.is_empty() {
            return Err(ValidationError::new("recipients", "Vui lòng nhập ít nhất một email nhận!"));
        }
        Ok(())
    }
}
