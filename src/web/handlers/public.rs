use actix_web::{HttpRequest, HttpResponse, get, post, web};

use corpsite::common::ServiceError;
use corpsite::editor::Toast;
use corpsite::models::{
    AutomationItem, Banner, CompanyMessage, ContactInfo, ContactSubmission, CoreValue,
    FacilityFeature, Milestone, Product, Stage, VisionMission,
};
use corpsite::services::Resource;

use crate::web::forms::{ContactForm, ToastQuery};
use crate::web::helpers::{fetch_all, fetch_document, not_found, redirect_with_toast, render};
use crate::web::security::client_key;
use crate::web::state::AppState;
use crate::web::templates::{
    PublicContactTemplate, PublicFacilitiesTemplate, PublicMachineryTemplate, PublicMissionTemplate,
    PublicOverviewTemplate, PublicProductTemplate, PublicProductsTemplate, PublicVisionTemplate,
};

pub const RATE_LIMITED_MESSAGE: &str = "Bạn đã gửi quá nhiều yêu cầu. Vui lòng thử lại sau ít phút.";
const CONTACT_SENT_MESSAGE: &str = "Cảm ơn bạn đã liên hệ! Chúng tôi sẽ phản hồi sớm nhất.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public_overview)
        .service(public_mission)
        .service(public_vision)
        .service(public_facilities)
        .service(public_machinery)
        .service(public_products)
        .service(public_product)
        .service(public_contact)
        .service(public_contact_submit);
}

#[get("/")]
pub async fn public_overview(state: web::Data<AppState>) -> HttpResponse {
    let banners: Vec<Banner> = fetch_all(&state).await;

    render(PublicOverviewTemplate {
        banners: banners.into_iter().filter(|b| b.is_active).collect(),
        message: fetch_document::<CompanyMessage>(&state).await,
        vision: fetch_document::<VisionMission>(&state).await,
        core_values: fetch_all(&state).await,
        milestones: fetch_all(&state).await,
    })
}

#[get("/mission")]
pub async fn public_mission(state: web::Data<AppState>) -> HttpResponse {
    render(PublicMissionTemplate {
        vision: fetch_document(&state).await,
        core_values: fetch_all::<CoreValue>(&state).await,
    })
}

#[get("/vision")]
pub async fn public_vision(state: web::Data<AppState>) -> HttpResponse {
    render(PublicVisionTemplate {
        vision: fetch_document(&state).await,
        milestones: fetch_all::<Milestone>(&state).await,
    })
}

#[get("/facilities")]
pub async fn public_facilities(state: web::Data<AppState>) -> HttpResponse {
    render(PublicFacilitiesTemplate {
        features: fetch_all::<FacilityFeature>(&state).await,
    })
}

#[get("/machinery")]
pub async fn public_machinery(state: web::Data<AppState>) -> HttpResponse {
    let stages: Vec<Stage> = fetch_all(&state).await;

    render(PublicMachineryTemplate {
        stages: stages.into_iter().filter(|s| s.is_active).collect(),
        automation: fetch_all::<AutomationItem>(&state).await,
    })
}

#[get("/products")]
pub async fn public_products(state: web::Data<AppState>) -> HttpResponse {
    render(PublicProductsTemplate {
        products: fetch_all::<Product>(&state).await,
    })
}

#[get("/products/{id}")]
pub async fn public_product(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match state.service::<Product>().get(&id).await {
        Ok(mut product) => {
            product.applications.sort_by_key(|a| a.order);
            render(PublicProductTemplate { product })
        }
        Err(err) => {
            log::warn!("product {id}: {err}");
            not_found()
        }
    }
}

#[get("/contact")]
pub async fn public_contact(state: web::Data<AppState>, query: web::Query<ToastQuery>) -> HttpResponse {
    render(PublicContactTemplate {
        info: fetch_document::<ContactInfo>(&state).await,
        form: ContactForm::default(),
        toast: query.toast(),
    })
}

#[post("/contact")]
pub async fn public_contact_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ContactForm>,
) -> HttpResponse {
    let form = form.into_inner();

    let submission = ContactSubmission {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        company: form.company.trim().to_string(),
        phone: form.phone.trim().to_string(),
        subject: form.subject.trim().to_string(),
        message: form.message.trim().to_string(),
        ..ContactSubmission::default()
    };

    let result = if !state.rate_limiter.check(&client_key(&req)) {
        Err(RATE_LIMITED_MESSAGE.to_string())
    } else if let Err(err) = submission.validate(true, false) {
        Err(err.message)
    } else {
        state
            .service::<ContactSubmission>()
            .create(&submission, None)
            .await
            .map(|_| ())
            .map_err(|err: ServiceError| {
                log::error!("contact submission: {err}");
                err.user_message()
            })
    };

    match result {
        Ok(()) => {
            log::info!("contact submission received from {}", submission.email);
            redirect_with_toast("/contact", Some(&Toast::success(CONTACT_SENT_MESSAGE)))
        }
        Err(message) => render(PublicContactTemplate {
            info: fetch_document::<ContactInfo>(&state).await,
            form,
            toast: Some(Toast::error(message)),
        }),
    }
}
