use actix_web::{HttpResponse, get, web};

use corpsite::editor::{Editable, Toast};
use corpsite::models::{Candidate, ContactSubmission, Job, SubmissionStatus};
use corpsite::services::Resource;

use crate::web::forms::ToastQuery;
use crate::web::handlers::{admin_resources, admin_settings};
use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::{AdminDashboardTemplate, DashboardCard};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_dashboard);
}

#[get("/admin")]
pub async fn admin_dashboard(state: web::Data<AppState>, query: web::Query<ToastQuery>) -> HttpResponse {
    let mut failure: Option<Toast> = None;

    let jobs = count::<Job>(&state, &mut failure, |job| job.is_open()).await;
    let candidates = count::<Candidate>(&state, &mut failure, |_| true).await;
    let contacts =
        count::<ContactSubmission>(&state, &mut failure, |c| !c.is_spam && c.status == SubmissionStatus::New).await;

    let mut collections: Vec<DashboardCard> = admin_resources::SECTIONS
        .iter()
        .map(|&(slug, title)| DashboardCard {
            title,
            href: format!("/admin/{slug}"),
            note: if slug == Job::SLUG {
                jobs.map(|n| format!("{n} tin đang tuyển")).unwrap_or_default()
            } else if slug == Candidate::SLUG {
                candidates.map(|n| format!("{n} ứng viên")).unwrap_or_default()
            } else {
                String::new()
            },
        })
        .collect();
    collections.push(DashboardCard {
        title: "Liên hệ",
        href: "/admin/contacts".to_string(),
        note: contacts.map(|n| format!("{n} tin nhắn mới")).unwrap_or_default(),
    });

    let settings = admin_settings::SECTIONS
        .iter()
        .map(|&(slug, title)| DashboardCard {
            title,
            href: format!("/admin/settings/{slug}"),
            note: String::new(),
        })
        .collect();

    render(AdminDashboardTemplate {
        collections,
        settings,
        toast: failure.or_else(|| query.toast()),
    })
}

/// Counts matching records; the first failure is kept for the toast.
async fn count<R: Resource>(
    state: &AppState,
    failure: &mut Option<Toast>,
    keep: impl Fn(&R) -> bool,
) -> Option<usize> {
    match state.service::<R>().list().await {
        Ok(items) => Some(items.iter().filter(|item| keep(item)).count()),
        Err(err) => {
            corpsite::log_err!(err, R::ENDPOINT);
            failure.get_or_insert_with(|| Toast::error(err.user_message()));
            None
        }
    }
}
