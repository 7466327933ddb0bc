use askama::Template;

use corpsite::editor::{FormField, Page, Toast};
use corpsite::models::{
    AutomationItem, Banner, CompanyMessage, ContactInfo, ContactSubmission, CoreValue,
    FacilityFeature, Job, Milestone, Product, Stage, VisionMission,
};

use crate::web::forms::ContactForm;

#[derive(Template)]
#[template(path = "public/overview.html")]
pub struct PublicOverviewTemplate {
    pub banners: Vec<Banner>,
    pub message: CompanyMessage,
    pub vision: VisionMission,
    pub core_values: Vec<CoreValue>,
    pub milestones: Vec<Milestone>,
}

#[derive(Template)]
#[template(path = "public/mission.html")]
pub struct PublicMissionTemplate {
    pub vision: VisionMission,
    pub core_values: Vec<CoreValue>,
}

#[derive(Template)]
#[template(path = "public/vision.html")]
pub struct PublicVisionTemplate {
    pub vision: VisionMission,
    pub milestones: Vec<Milestone>,
}

#[derive(Template)]
#[template(path = "public/recruitment.html")]
pub struct PublicRecruitmentTemplate {
    pub page: Page<Job>,
    pub keyword: String,
    pub category: String,
    pub categories: Vec<(String, String)>,
    pub pager_query: String,
}

#[derive(Template)]
#[template(path = "public/job.html")]
pub struct PublicJobTemplate {
    pub job: Job,
    pub majors: Vec<(String, String)>,
    pub jlpt_levels: Vec<(String, String)>,
    pub marital_statuses: Vec<(String, String)>,
    pub toast: Option<Toast>,
}

#[derive(Template)]
#[template(path = "public/facilities.html")]
pub struct PublicFacilitiesTemplate {
    pub features: Vec<FacilityFeature>,
}

#[derive(Template)]
#[template(path = "public/machinery.html")]
pub struct PublicMachineryTemplate {
    pub stages: Vec<Stage>,
    pub automation: Vec<AutomationItem>,
}

#[derive(Template)]
#[template(path = "public/products.html")]
pub struct PublicProductsTemplate {
    pub products: Vec<Product>,
}

#[derive(Template)]
#[template(path = "public/product.html")]
pub struct PublicProductTemplate {
    pub product: Product,
}

#[derive(Template)]
#[template(path = "public/contact.html")]
pub struct PublicContactTemplate {
    pub info: ContactInfo,
    pub form: ContactForm,
    pub toast: Option<Toast>,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate;

pub struct DashboardCard {
    pub title: &'static str,
    pub href: String,
    pub note: String,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub collections: Vec<DashboardCard>,
    pub settings: Vec<DashboardCard>,
    pub toast: Option<Toast>,
}

/// One table row; `first`/`last` refer to the unfiltered collection.
pub struct AdminRow {
    pub id: String,
    pub cells: Vec<String>,
    pub first: bool,
    pub last: bool,
}

#[derive(Template)]
#[template(path = "admin/list.html")]
pub struct AdminListTemplate {
    pub section: &'static str,
    pub base: String,
    pub columns: Vec<&'static str>,
    pub page: Page<AdminRow>,
    pub filters: Vec<FormField>,
    pub keyword: String,
    pub pager_query: String,
    pub orderable: bool,
    pub toast: Option<Toast>,
}

#[derive(Template)]
#[template(path = "admin/form.html")]
pub struct AdminFormTemplate {
    pub section: &'static str,
    pub heading: &'static str,
    pub action: String,
    pub back: String,
    pub fields: Vec<FormField>,
    pub error_field: &'static str,
    pub toast: Option<Toast>,
}

#[derive(Template)]
#[template(path = "admin/confirm_delete.html")]
pub struct AdminConfirmDeleteTemplate {
    pub section: &'static str,
    pub summary: String,
    pub action: String,
    pub back: String,
    pub toast: Option<Toast>,
}

#[derive(Template)]
#[template(path = "admin/contacts.html")]
pub struct AdminContactsTemplate {
    pub page: Page<ContactSubmission>,
    pub statuses: Vec<(String, String)>,
    pub status: String,
    pub show_spam: bool,
    pub keyword: String,
    pub pager_query: String,
    pub toast: Option<Toast>,
}

#[derive(Template)]
#[template(path = "admin/contact.html")]
pub struct AdminContactTemplate {
    pub item: ContactSubmission,
    pub statuses: Vec<(String, String)>,
    pub toast: Option<Toast>,
}
