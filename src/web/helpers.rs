use actix_multipart::Multipart;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use askama::Template;
use futures_util::StreamExt;

use corpsite::editor::{FormInput, Toast, ordering};
use corpsite::services::{Resource, Singleton, Upload};

use crate::web::state::AppState;
use crate::web::templates::NotFoundTemplate;

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const MAX_TEXT_BYTES: usize = 1024 * 1024;

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_status(StatusCode::OK, t)
}

pub fn render_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("template error: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

pub fn not_found() -> HttpResponse {
    render_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Post-redirect-get, carrying the toast in the query string.
pub fn redirect_with_toast(location: &str, toast: Option<&Toast>) -> HttpResponse {
    match toast {
        Some(toast) => {
            let separator = if location.contains('?') { '&' } else { '?' };
            see_other(&format!("{location}{separator}{}", toast.query_string()))
        }
        None => see_other(location),
    }
}

/// Collects a `multipart/form-data` body. Text parts become fields; the first
/// non-empty file part becomes the upload.
pub async fn read_form(mut payload: Multipart) -> Result<FormInput, HttpResponse> {
    let mut input = FormInput::new();

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(bad_request)?;

        let Some(disposition) = field.content_disposition() else {
            continue;
        };
        let name = disposition.get_name().unwrap_or_default().to_string();
        let file_name = disposition.get_filename().map(str::to_string);
        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let limit = if file_name.is_some() { MAX_UPLOAD_BYTES } else { MAX_TEXT_BYTES };
        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(bad_request)?;
            if bytes.len() + chunk.len() > limit {
                log::warn!("form field {name} exceeds {limit} bytes");
                return Err(HttpResponse::PayloadTooLarge().body("Tệp tải lên quá lớn."));
            }
            bytes.extend_from_slice(&chunk);
        }

        match file_name {
            Some(file_name) => {
                if !bytes.is_empty() && input.upload.is_none() {
                    input.upload = Some(Upload::new(file_name, content_type, bytes));
                }
            }
            None => input.push(name, String::from_utf8_lossy(&bytes).into_owned()),
        }
    }

    Ok(input)
}

fn bad_request(err: actix_multipart::MultipartError) -> HttpResponse {
    log::warn!("malformed multipart body: {err}");
    HttpResponse::BadRequest().body("Dữ liệu biểu mẫu không hợp lệ.")
}

/// Public pages degrade to an empty section when the backend is unavailable.
pub async fn fetch_all<R: Resource>(state: &AppState) -> Vec<R> {
    match state.service::<R>().list().await {
        Ok(mut items) => {
            ordering::normalize(&mut items);
            items
        }
        Err(err) => {
            corpsite::log_err!(err, R::ENDPOINT);
            Vec::new()
        }
    }
}

pub async fn fetch_document<S: Singleton>(state: &AppState) -> S {
    state.singleton::<S>().get().await.unwrap_or_else(|err| {
        corpsite::log_err!(err, S::ENDPOINT);
        S::default()
    })
}
