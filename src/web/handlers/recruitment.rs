use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, get, post, web};

use corpsite::editor::listing::filter_jobs;
use corpsite::editor::{Editable, ListQuery, Toast, paginate};
use corpsite::models::{Candidate, CandidateStatus, JlptLevel, Job, JobCategory, Major, MaritalStatus};
use corpsite::services::Resource;

use crate::web::forms::ToastQuery;
use crate::web::handlers::public::RATE_LIMITED_MESSAGE;
use crate::web::helpers::{fetch_all, not_found, read_form, redirect_with_toast, render};
use crate::web::security::client_key;
use crate::web::state::AppState;
use crate::web::templates::{PublicJobTemplate, PublicRecruitmentTemplate};

const APPLIED_MESSAGE: &str = "Ứng tuyển thành công! Chúng tôi sẽ liên hệ với bạn sớm.";
const CLOSED_MESSAGE: &str = "Tin tuyển dụng này đã ngừng nhận hồ sơ.";
const CV_REQUIRED_MESSAGE: &str = "Vui lòng tải lên CV của bạn!";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(recruitment_list)
        .service(recruitment_detail)
        .service(recruitment_apply);
}

#[get("/recruitment")]
pub async fn recruitment_list(state: web::Data<AppState>, query: web::Query<ListQuery>) -> HttpResponse {
    let jobs = filter_jobs(fetch_all::<Job>(&state).await, &query, true);

    render(PublicRecruitmentTemplate {
        page: paginate(jobs, query.page(), state.config.page_size),
        keyword: query.keyword().to_string(),
        category: query.category.clone().unwrap_or_default(),
        categories: JobCategory::options(),
        pager_query: query.without_page(),
    })
}

#[get("/recruitment/{id}")]
pub async fn recruitment_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ToastQuery>,
) -> HttpResponse {
    let id = path.into_inner();
    match state.service::<Job>().get(&id).await {
        Ok(job) if job.is_active => render(PublicJobTemplate {
            job,
            majors: Major::options(),
            jlpt_levels: JlptLevel::options(),
            marital_statuses: MaritalStatus::options(),
            toast: query.toast(),
        }),
        Ok(_) => not_found(),
        Err(err) => {
            log::warn!("job {id}: {err}");
            not_found()
        }
    }
}

/// A visitor's application becomes an active candidate linked to the job.
#[post("/recruitment/{id}/apply")]
pub async fn recruitment_apply(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    payload: Multipart,
) -> HttpResponse {
    let id = path.into_inner();
    let back = format!("/recruitment/{id}");

    let input = match read_form(payload).await {
        Ok(input) => input,
        Err(resp) => return resp,
    };

    if !state.rate_limiter.check(&client_key(&req)) {
        return redirect_with_toast(&back, Some(&Toast::error(RATE_LIMITED_MESSAGE)));
    }

    let job = match state.service::<Job>().get(&id).await {
        Ok(job) => job,
        Err(err) => {
            log::warn!("job {id}: {err}");
            return not_found();
        }
    };
    if !job.is_open() {
        return redirect_with_toast(&back, Some(&Toast::error(CLOSED_MESSAGE)));
    }

    let mut candidate = Candidate::draft(0);
    if let Err(err) = candidate.apply_form(&input) {
        return redirect_with_toast(&back, Some(&Toast::error(err.message)));
    }
    // Visitors never choose their own pipeline status or notes.
    candidate.status = CandidateStatus::Active;
    candidate.note = String::new();
    candidate.job_id = job.id.clone();

    if !input.has_upload() {
        return redirect_with_toast(&back, Some(&Toast::error(CV_REQUIRED_MESSAGE)));
    }
    if let Err(err) = candidate.validate(true, true) {
        return redirect_with_toast(&back, Some(&Toast::error(err.message)));
    }

    match state
        .service::<Candidate>()
        .create(&candidate, input.upload.as_ref())
        .await
    {
        Ok(_) => {
            log::info!("application for job {id} from {}", candidate.email);
            redirect_with_toast(&back, Some(&Toast::success(APPLIED_MESSAGE)))
        }
        Err(err) => {
            log::error!("application for job {id}: {err}");
            redirect_with_toast(&back, Some(&Toast::error(err.user_message())))
        }
    }
}
