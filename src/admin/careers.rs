use super::{date_cell, truncate, yes_no};
use crate::common::ValidationError;
use crate::editor::listing::{candidate_matches, job_matches};
use crate::editor::{Editable, FormField, FormInput, ListQuery, Listable};
use crate::models::{
    Candidate, CandidateStatus, FileRef, JlptLevel, Job, JobCategory, Major, MaritalStatus,
    RecruitmentStatus,
};

const NUMBER_MESSAGE: &str = "Vui lòng nhập số hợp lệ!";

impl Editable for Job {
    const SLUG: &'static str = "jobs";
    const TITLE: &'static str = "Tin tuyển dụng";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("code", "Mã tin", &self.code),
            FormField::text("title", "Tiêu đề", &self.title).required(),
            FormField::select("category", "Ngành nghề", self.category.as_str(), JobCategory::options()),
            FormField::text("location", "Địa điểm", &self.location).required(),
            FormField::text("workType", "Hình thức làm việc", &self.work_type),
            FormField::textarea("description", "Mô tả công việc", &self.description),
            FormField::lines("requirements", "Yêu cầu", &self.requirements),
            FormField::lines("benefits", "Quyền lợi", &self.benefits),
            FormField::number("salaryMin", "Lương tối thiểu", self.salary.min),
            FormField::number("salaryMax", "Lương tối đa", self.salary.max),
            FormField::text("salaryCurrency", "Đơn vị tiền tệ", &self.salary.currency),
            FormField::text("salaryNote", "Ghi chú lương", &self.salary.note),
            FormField::number("ageMin", "Tuổi tối thiểu", self.age.min),
            FormField::number("ageMax", "Tuổi tối đa", self.age.max),
            FormField::date(
                "deadline",
                "Hạn nộp hồ sơ",
                self.deadline.map(|d| d.to_string()).unwrap_or_default(),
            ),
            FormField::select(
                "recruitmentStatus",
                "Trạng thái tuyển dụng",
                self.recruitment_status.as_str(),
                RecruitmentStatus::options(),
            ),
            FormField::checkbox("isActive", "Hiển thị trên trang tuyển dụng", self.is_active),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.code = input.text("code");
        self.title = input.text("title");
        self.category = input.parse("category").unwrap_or_default();
        self.location = input.text("location");
        self.work_type = input.text("workType");
        self.description = input.text("description");
        self.requirements = input.lines("requirements");
        self.benefits = input.lines("benefits");
        self.salary.min = input.number("salaryMin", NUMBER_MESSAGE)?;
        self.salary.max = input.number("salaryMax", NUMBER_MESSAGE)?;
        self.salary.currency = input.text("salaryCurrency");
        self.salary.note = input.text("salaryNote");
        self.age.min = input.number("ageMin", NUMBER_MESSAGE)?;
        self.age.max = input.number("ageMax", NUMBER_MESSAGE)?;
        self.deadline = input.parse("deadline");
        self.recruitment_status = input.parse("recruitmentStatus").unwrap_or_default();
        self.is_active = input.checkbox("isActive");
        Ok(())
    }
}

impl Listable for Job {
    fn columns() -> Vec<&'static str> {
        vec!["Mã", "Tiêu đề", "Ngành", "Địa điểm", "Mức lương", "Trạng thái", "Hiển thị"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.title.clone(),
            self.category.label().to_string(),
            self.location.clone(),
            self.salary.display(),
            self.recruitment_status.label().to_string(),
            yes_no(self.is_active),
        ]
    }

    fn summary(&self) -> String {
        self.title.clone()
    }

    fn matches(&self, query: &ListQuery) -> bool {
        job_matches(self, query, false)
    }

    fn filters(query: &ListQuery) -> Vec<FormField> {
        vec![select_filter("category", "Ngành nghề", &query.category, JobCategory::options())]
    }
}

impl Editable for Candidate {
    const SLUG: &'static str = "candidates";
    const TITLE: &'static str = "Ứng viên";

    fn fields(&self) -> Vec<FormField> {
        let cv = self.cv.as_ref().map(|cv| cv.filename.clone()).unwrap_or_default();
        vec![
            FormField::text("name", "Họ tên", &self.name).required(),
            FormField::email("email", "Email", &self.email).required(),
            FormField::text("phone", "Số điện thoại", &self.phone),
            FormField::select("major", "Chuyên ngành", self.major.as_str(), Major::options()),
            FormField::select("jlptLevel", "Trình độ tiếng Nhật", self.jlpt_level.as_str(), JlptLevel::options()),
            FormField::select(
                "maritalStatus",
                "Tình trạng hôn nhân",
                self.marital_status.as_str(),
                MaritalStatus::options(),
            ),
            FormField::select("status", "Trạng thái", self.status.as_str(), CandidateStatus::options()),
            FormField::file("cv", "CV", cv),
            FormField::textarea("note", "Ghi chú", &self.note),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.name = input.text("name");
        self.email = input.text("email");
        self.phone = input.text("phone");
        self.major = input.parse("major").unwrap_or_default();
        self.jlpt_level = input.parse("jlptLevel").unwrap_or_default();
        self.marital_status = input.parse("maritalStatus").unwrap_or_default();
        self.status = input.parse("status").unwrap_or_default();
        self.note = input.text("note");

        // The backend stores the file and fills in the URL; until then keep the name for display.
        if let Some(upload) = input.upload.as_ref().filter(|u| !u.is_empty()) {
            self.cv = Some(FileRef {
                url: self.cv.take().map(|cv| cv.url).unwrap_or_default(),
                filename: upload.file_name.clone(),
            });
        }
        Ok(())
    }
}

impl Listable for Candidate {
    fn columns() -> Vec<&'static str> {
        vec!["Họ tên", "Email", "Điện thoại", "Chuyên ngành", "JLPT", "Trạng thái", "Ngày nộp"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.major.label().to_string(),
            self.jlpt_level.label().to_string(),
            self.status.label().to_string(),
            date_cell(self.created_at),
        ]
    }

    fn summary(&self) -> String {
        truncate(&format!("{} <{}>", self.name, self.email), 80)
    }

    fn matches(&self, query: &ListQuery) -> bool {
        candidate_matches(self, query)
    }

    fn filters(query: &ListQuery) -> Vec<FormField> {
        vec![
            select_filter("status", "Trạng thái", &query.status, CandidateStatus::options()),
            select_filter("major", "Chuyên ngành", &query.major, Major::options()),
            select_filter("jlpt", "JLPT", &query.jlpt, JlptLevel::options()),
        ]
    }
}

/// A select with a leading "all" choice.
fn select_filter(
    name: &'static str,
    label: &'static str,
    selected: &Option<String>,
    options: Vec<(String, String)>,
) -> FormField {
    let mut choices = vec![("all".to_string(), "Tất cả".to_string())];
    choices.extend(options);
    FormField::select(name, label, selected.clone().unwrap_or_else(|| "all".to_string()), choices)
}
