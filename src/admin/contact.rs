use super::{date_cell, truncate, yes_no};
use crate::common::ValidationError;
use crate::editor::{Editable, FormField, FormInput, Listable};
use crate::models::{ContactInfo, ContactSubmission, EmailConfig};

/// Submissions are triaged rather than edited, so only the list binding exists.
impl Listable for ContactSubmission {
    fn columns() -> Vec<&'static str> {
        vec!["Ngày gửi", "Họ tên", "Email", "Công ty", "Chủ đề", "Trạng thái", "Spam"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            date_cell(self.created_at),
            self.name.clone(),
            self.email.clone(),
            self.company.clone(),
            truncate(&self.subject, 50),
            self.status.label().to_string(),
            yes_no(self.is_spam),
        ]
    }

    fn summary(&self) -> String {
        format!("{} - {}", self.name, truncate(&self.subject, 40))
    }
}

impl Editable for ContactInfo {
    const SLUG: &'static str = "contact-info";
    const TITLE: &'static str = "Thông tin liên hệ";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("address", "Địa chỉ", &self.address),
            FormField::text("phone", "Điện thoại", &self.phone),
            FormField::text("hotline", "Hotline", &self.hotline),
            FormField::email("email", "Email", &self.email),
            FormField::text("mapUrl", "Đường dẫn bản đồ", &self.map_url),
            FormField::text("workingHours", "Giờ làm việc", &self.working_hours),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.address = input.text("address");
        self.phone = input.text("phone");
        self.hotline = input.text("hotline");
        self.email = input.text("email");
        self.map_url = input.text("mapUrl");
        self.working_hours = input.text("workingHours");
        Ok(())
    }
}

impl Editable for EmailConfig {
    const SLUG: &'static str = "email-config";
    const TITLE: &'static str = "Cấu hình email";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::checkbox("enabled", "Gửi email thông báo", self.enabled),
            FormField::text("smtpHost", "Máy chủ SMTP", &self.smtp_host),
            FormField::number("smtpPort", "Cổng SMTP", Some(self.smtp_port)),
            FormField::text("username", "Tên đăng nhập", &self.username),
            FormField::password("password", "Mật khẩu", "")
                .help("Để trống nếu không đổi mật khẩu."),
            FormField::text("fromName", "Tên người gửi", &self.from_name),
            FormField::email("fromEmail", "Email người gửi", &self.from_email),
            FormField::lines("recipients", "Email nhận thông báo", &self.recipients),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.enabled = input.checkbox("enabled");
        self.smtp_host = input.text("smtpHost");
        self.smtp_port = input
            .number("smtpPort", "Cổng SMTP không hợp lệ!")?
            .unwrap_or(self.smtp_port);
        self.username = input.text("username");
        let password = input.text("password");
        if !password.is_empty() {
            self.password = password;
        }
        self.from_name = input.text("fromName");
        self.from_email = input.text("fromEmail");
        self.recipients = input.lines("recipients");
        Ok(())
    }
}
