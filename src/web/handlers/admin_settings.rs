use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};

use corpsite::common::EditorError;
use corpsite::editor::{Editable, Toast};
use corpsite::models::{CompanyMessage, ContactInfo, EmailConfig, VisionMission};
use corpsite::services::Singleton;

use crate::web::forms::ToastQuery;
use crate::web::helpers::{read_form, redirect_with_toast, render};
use crate::web::state::AppState;
use crate::web::templates::AdminFormTemplate;

pub const SECTIONS: [(&str, &str); 4] = [
    (CompanyMessage::SLUG, CompanyMessage::TITLE),
    (VisionMission::SLUG, VisionMission::TITLE),
    (ContactInfo::SLUG, ContactInfo::TITLE),
    (EmailConfig::SLUG, EmailConfig::TITLE),
];

pub fn configure(cfg: &mut web::ServiceConfig) {
    register::<CompanyMessage>(cfg);
    register::<VisionMission>(cfg);
    register::<ContactInfo>(cfg);
    register::<EmailConfig>(cfg);
}

pub fn register<S: Singleton + Editable>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(path::<S>())
            .route(web::get().to(show::<S>))
            .route(web::post().to(save::<S>)),
    );
}

pub fn path<S: Editable>() -> String {
    format!("/admin/settings/{}", S::SLUG)
}

fn settings_page<S: Singleton + Editable>(
    document: &S,
    toast: Option<Toast>,
    error_field: &'static str,
) -> AdminFormTemplate {
    AdminFormTemplate {
        section: S::TITLE,
        heading: "Cài đặt",
        action: path::<S>(),
        back: "/admin".to_string(),
        fields: document.fields(),
        error_field,
        toast,
    }
}

async fn show<S: Singleton + Editable>(state: web::Data<AppState>, toast: web::Query<ToastQuery>) -> HttpResponse {
    let mut editor = state.settings_editor::<S>();
    let _ = editor.load().await;
    let toast = editor.toast().cloned().or_else(|| toast.toast());
    render(settings_page(editor.document(), toast, ""))
}

/// Starts from the stored document so fields the form leaves blank on
/// purpose (the SMTP password) keep their value.
async fn save<S: Singleton + Editable>(state: web::Data<AppState>, payload: Multipart) -> HttpResponse {
    let input = match read_form(payload).await {
        Ok(input) => input,
        Err(resp) => return resp,
    };

    let mut editor = state.settings_editor::<S>();
    let loaded = editor.load().await.is_ok();

    if let Err(err) = editor.document_mut().apply_form(&input) {
        return render(settings_page(editor.document(), Some(Toast::error(err.message)), err.field));
    }
    if !loaded {
        return render(settings_page(editor.document(), editor.toast().cloned(), ""));
    }

    editor.attach(input.upload);
    match editor.submit().await {
        Ok(()) => redirect_with_toast(&path::<S>(), editor.toast()),
        Err(err) => {
            let field = match &err {
                EditorError::Validation(v) => v.field,
                _ => "",
            };
            render(settings_page(editor.document(), editor.toast().cloned(), field))
        }
    }
}
