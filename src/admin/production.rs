use super::{truncate, yes_no};
use crate::common::ValidationError;
use crate::editor::{Editable, FormField, FormInput, Listable};
use crate::models::{
    Application, AutomationItem, FacilityFeature, FacilityImage, Layout, Machine, Product, Stage,
    Step,
};

impl Editable for AutomationItem {
    const SLUG: &'static str = "automation";
    const TITLE: &'static str = "Quy trình tự động hóa";

    fn fields(&self) -> Vec<FormField> {
        let steps: Vec<String> = self
            .steps
            .iter()
            .map(|s| format!("{} | {}", s.title, s.description))
            .collect();
        vec![
            FormField::text("title", "Tiêu đề quy trình", &self.title).required(),
            FormField::file("image", "Hình ảnh", &self.image).required(),
            FormField::lines("steps", "Các bước", &steps)
                .help("Mỗi dòng một bước, dạng: Tiêu đề | Mô tả"),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.title = input.text("title");
        self.steps = input
            .pairs("steps")
            .into_iter()
            .enumerate()
            .map(|(index, (title, description))| Step {
                title,
                description,
                order: index as i32,
            })
            .collect();
        Ok(())
    }
}

impl Listable for AutomationItem {
    fn columns() -> Vec<&'static str> {
        vec!["Thứ tự", "Tiêu đề", "Số bước"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            (self.order + 1).to_string(),
            self.title.clone(),
            self.steps.len().to_string(),
        ]
    }

    fn summary(&self) -> String {
        self.title.clone()
    }
}

impl Editable for FacilityFeature {
    const SLUG: &'static str = "facilities";
    const TITLE: &'static str = "Cơ sở vật chất";

    fn fields(&self) -> Vec<FormField> {
        let images: Vec<String> = self
            .images
            .iter()
            .map(|img| format!("{} | {}", img.url, img.alt))
            .collect();
        vec![
            FormField::text("title", "Tiêu đề", &self.title).required(),
            FormField::textarea("description", "Mô tả", &self.description),
            FormField::file("image", "Ảnh chính", &self.image).required(),
            FormField::lines("images", "Ảnh phụ", &images)
                .help("Mỗi dòng một ảnh, dạng: Đường dẫn | Mô tả ảnh"),
            FormField::select("layout", "Bố cục", self.layout.as_str(), Layout::options()),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.title = input.text("title");
        self.description = input.text("description");
        self.images = input
            .pairs("images")
            .into_iter()
            .enumerate()
            .map(|(index, (url, alt))| FacilityImage {
                url,
                alt,
                order: index as i32,
            })
            .collect();
        self.layout = input.parse("layout").unwrap_or_default();
        Ok(())
    }
}

impl Listable for FacilityFeature {
    fn columns() -> Vec<&'static str> {
        vec!["Thứ tự", "Tiêu đề", "Mô tả", "Ảnh phụ", "Bố cục"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            (self.order + 1).to_string(),
            self.title.clone(),
            truncate(&self.description, 60),
            self.images.len().to_string(),
            self.layout.label().to_string(),
        ]
    }

    fn summary(&self) -> String {
        self.title.clone()
    }
}

impl Editable for Stage {
    const SLUG: &'static str = "machinery";
    const TITLE: &'static str = "Máy móc theo công đoạn";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("title", "Tên công đoạn", &self.title).required(),
            FormField::textarea("description", "Mô tả", &self.description),
            FormField::json("machines", "Danh sách máy", &self.machines).help(
                r#"Mảng JSON, ví dụ: [{"name": "Máy cắt", "description": "", "isActive": true, "images": [{"url": "", "alt": ""}]}]"#,
            ),
            FormField::checkbox("isActive", "Hiển thị", self.is_active),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.title = input.text("title");
        self.description = input.text("description");
        self.machines = input.json_list::<Machine>("machines", "Danh sách máy không đúng định dạng JSON!")?;
        self.is_active = input.checkbox("isActive");
        Ok(())
    }
}

impl Listable for Stage {
    fn columns() -> Vec<&'static str> {
        vec!["Thứ tự", "Công đoạn", "Số máy", "Hiển thị"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            (self.order + 1).to_string(),
            self.title.clone(),
            self.machines.len().to_string(),
            yes_no(self.is_active),
        ]
    }

    fn summary(&self) -> String {
        self.title.clone()
    }
}

impl Editable for Product {
    const SLUG: &'static str = "products";
    const TITLE: &'static str = "Sản phẩm";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("name", "Tên sản phẩm", &self.name).required(),
            FormField::textarea("description", "Mô tả", &self.description),
            FormField::file("mainImage", "Ảnh đại diện", &self.main_image).required(),
            FormField::lines("galleryImages", "Thư viện ảnh", &self.gallery_images)
                .help("Mỗi dòng một đường dẫn ảnh."),
            FormField::json("applications", "Ứng dụng", &self.applications).help(
                r#"Mảng JSON, ví dụ: [{"title": "Ô tô", "content": {"heading": "", "description": "", "features": [], "images": []}}]"#,
            ),
        ]
    }

    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError> {
        self.name = input.text("name");
        self.description = input.text("description");
        self.gallery_images = input.lines("galleryImages");
        self.applications =
            input.json_list::<Application>("applications", "Dữ liệu ứng dụng không đúng định dạng JSON!")?;
        Ok(())
    }
}

impl Listable for Product {
    fn columns() -> Vec<&'static str> {
        vec!["Thứ tự", "Tên sản phẩm", "Ảnh", "Ứng dụng"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            (self.order + 1).to_string(),
            self.name.clone(),
            self.gallery_images.len().to_string(),
            self.applications.len().to_string(),
        ]
    }

    fn summary(&self) -> String {
        self.name.clone()
    }
}
