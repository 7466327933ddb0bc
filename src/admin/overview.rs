use super::{truncate, yes_no};
use crate::common::ValidationError;
use crate::editor::{Editable, FormField, FormInput, Listable};
use crate::models::{Banner, CompanyMessage, CoreValue, Milestone, VisionMission};

impl Editable for Banner {
    const SLUG: &'static str = "banners";
    const TITLE: &'static str = "Banner trang chủ";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("title", "Tiêu đề", &self.title).required(),
            FormField::text("subtitle", "Tiêu đề phụ", &self.subtitle),
            FormField::text("link", "Liên kết", &self.link),
            FormField::file("image", "Hình ảnh", &self.image).required(),
            FormField::checkbox("isActive", "Hiển thị", self.is_active),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.title = input.text("title");
        self.subtitle = input.text("subtitle");
        self.link = input.text("link");
        self.is_active = input.checkbox("isActive");
        Ok(())
    }
}

impl Listable for Banner {
    fn columns() -> Vec<&'static str> {
        vec!["Thứ tự", "Tiêu đề", "Tiêu đề phụ", "Hiển thị"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            (self.order + 1).to_string(),
            self.title.clone(),
            truncate(&self.subtitle, 60),
            yes_no(self.is_active),
        ]
    }

    fn summary(&self) -> String {
        self.title.clone()
    }
}

impl Editable for Milestone {
    const SLUG: &'static str = "milestones";
    const TITLE: &'static str = "Cột mốc phát triển";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("year", "Năm", &self.year).required(),
            FormField::text("title", "Tiêu đề", &self.title).required(),
            FormField::textarea("description", "Mô tả", &self.description),
            FormField::file("image", "Hình ảnh", &self.image),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.year = input.text("year");
        self.title = input.text("title");
        self.description = input.text("description");
        Ok(())
    }
}

impl Listable for Milestone {
    fn columns() -> Vec<&'static str> {
        vec!["Thứ tự", "Năm", "Tiêu đề", "Mô tả"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            (self.order + 1).to_string(),
            self.year.clone(),
            self.title.clone(),
            truncate(&self.description, 80),
        ]
    }

    fn summary(&self) -> String {
        format!("{} - {}", self.year, self.title)
    }
}

impl Editable for CoreValue {
    const SLUG: &'static str = "core-values";
    const TITLE: &'static str = "Giá trị cốt lõi";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("title", "Tên giá trị", &self.title).required(),
            FormField::textarea("description", "Mô tả", &self.description),
            FormField::file("icon", "Biểu tượng", &self.icon),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.title = input.text("title");
        self.description = input.text("description");
        Ok(())
    }
}

impl Listable for CoreValue {
    fn columns() -> Vec<&'static str> {
        vec!["Thứ tự", "Tên giá trị", "Mô tả"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            (self.order + 1).to_string(),
            self.title.clone(),
            truncate(&self.description, 80),
        ]
    }

    fn summary(&self) -> String {
        self.title.clone()
    }
}

impl Editable for CompanyMessage {
    const SLUG: &'static str = "message";
    const TITLE: &'static str = "Thông điệp lãnh đạo";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("title", "Tiêu đề", &self.title).required(),
            FormField::textarea("content", "Nội dung", &self.content).required(),
            FormField::text("author", "Người viết", &self.author),
            FormField::text("position", "Chức vụ", &self.position),
            FormField::file("image", "Ảnh chân dung", &self.image),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.title = input.text("title");
        self.content = input.text("content");
        self.author = input.text("author");
        self.position = input.text("position");
        Ok(())
    }
}

impl Editable for VisionMission {
    const SLUG: &'static str = "vision-mission";
    const TITLE: &'static str = "Tầm nhìn & Sứ mệnh";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::textarea("vision", "Tầm nhìn", &self.vision).required(),
            FormField::textarea("mission", "Sứ mệnh", &self.mission).required(),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.vision = input.text("vision");
        self.mission = input.text("mission");
        Ok(())
    }
}
