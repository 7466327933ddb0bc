//! Triage of messages left through the public contact form.

use actix_web::{HttpResponse, get, post, web};

use corpsite::editor::{DeleteOutcome, ListQuery, Listable, Toast, paginate};
use corpsite::models::{ContactSubmission, SubmissionStatus};

use crate::web::forms::{ConfirmForm, ContactsQuery, StatusForm, ToastQuery};
use crate::web::helpers::{not_found, redirect_with_toast, render, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminConfirmDeleteTemplate, AdminContactTemplate, AdminContactsTemplate};

const PAGE_SIZE: usize = 20;
const LIST_PATH: &str = "/admin/contacts";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contacts_list)
        .service(contact_confirm_delete)
        .service(contact_delete)
        .service(contact_status)
        .service(contact_spam)
        .service(contact_detail);
}

#[get("/admin/contacts")]
pub async fn contacts_list(
    state: web::Data<AppState>,
    query: web::Query<ContactsQuery>,
    toast: web::Query<ToastQuery>,
) -> HttpResponse {
    let mut editor = state.editor::<ContactSubmission>();
    let _ = editor.load().await;
    let toast = editor.take_toast().or_else(|| toast.toast());

    let status: Option<SubmissionStatus> = query
        .status
        .as_deref()
        .filter(|s| !s.is_empty() && *s != "all")
        .and_then(|s| s.parse().ok());
    let show_spam = query.spam.as_deref() == Some("1");
    let keyword = ListQuery {
        q: query.q.clone(),
        ..ListQuery::default()
    };

    let mut items: Vec<ContactSubmission> = editor
        .into_items()
        .into_iter()
        .filter(|item| item.is_spam == show_spam)
        .filter(|item| status.is_none_or(|s| item.status == s))
        .filter(|item| item.matches(&keyword))
        .collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut pager = vec![];
    if let Some(status) = status {
        pager.push(("status", status.as_str().to_string()));
    }
    if show_spam {
        pager.push(("spam", "1".to_string()));
    }
    if !keyword.keyword().is_empty() {
        pager.push(("q", keyword.keyword().to_string()));
    }

    render(AdminContactsTemplate {
        page: paginate(items, query.page.unwrap_or(1), PAGE_SIZE),
        statuses: SubmissionStatus::options(),
        status: status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        show_spam,
        keyword: keyword.keyword().to_string(),
        pager_query: serde_urlencoded::to_string(pager).unwrap_or_default(),
        toast,
    })
}

/// Opening a new message marks it as read.
#[get("/admin/contacts/{id}")]
pub async fn contact_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
    toast: web::Query<ToastQuery>,
) -> HttpResponse {
    let id = path.into_inner();
    let service = state.service::<ContactSubmission>();

    let mut item = match service.get(&id).await {
        Ok(item) => item,
        Err(err) => {
            log::error!("contact {id}: {err}");
            return redirect_with_toast(LIST_PATH, Some(&Toast::error(err.user_message())));
        }
    };

    if item.status == SubmissionStatus::New {
        item.status = SubmissionStatus::Read;
        if let Err(err) = service.update(&id, &item, None).await {
            log::warn!("could not mark contact {id} as read: {err}");
            item.status = SubmissionStatus::New;
        }
    }

    render(AdminContactTemplate {
        item,
        statuses: SubmissionStatus::options(),
        toast: toast.toast(),
    })
}

#[post("/admin/contacts/{id}/status")]
pub async fn contact_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<StatusForm>,
) -> HttpResponse {
    let id = path.into_inner();
    let Ok(status) = form.status.parse::<SubmissionStatus>() else {
        return see_other(&format!("{LIST_PATH}/{id}"));
    };

    let toast = update_submission(&state, &id, |item| item.status = status, "Đã cập nhật trạng thái!").await;
    redirect_with_toast(&format!("{LIST_PATH}/{id}"), Some(&toast))
}

#[post("/admin/contacts/{id}/spam")]
pub async fn contact_spam(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    let toast = update_submission(&state, &id, |item| item.is_spam = !item.is_spam, "Đã cập nhật đánh dấu spam!").await;
    redirect_with_toast(LIST_PATH, Some(&toast))
}

/// Triage changes skip visitor-field validation; old messages may not pass today's rules.
async fn update_submission(
    state: &AppState,
    id: &str,
    change: impl FnOnce(&mut ContactSubmission),
    success: &str,
) -> Toast {
    let service = state.service::<ContactSubmission>();
    let result = match service.get(id).await {
        Ok(mut item) => {
            change(&mut item);
            service.update(id, &item, None).await.map(|_| ())
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => Toast::success(success),
        Err(err) => {
            log::error!("contact {id}: {err}");
            Toast::error(err.user_message())
        }
    }
}

#[get("/admin/contacts/{id}/delete")]
pub async fn contact_confirm_delete(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match state.service::<ContactSubmission>().get(&id).await {
        Ok(item) => render(AdminConfirmDeleteTemplate {
            section: "Liên hệ",
            summary: item.summary(),
            action: format!("{LIST_PATH}/{id}/delete"),
            back: LIST_PATH.to_string(),
            toast: None,
        }),
        Err(err) => {
            log::error!("contact {id}: {err}");
            not_found()
        }
    }
}

#[post("/admin/contacts/{id}/delete")]
pub async fn contact_delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<ConfirmForm>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut editor = state.editor::<ContactSubmission>();

    match editor.delete(&id, form.confirmed()).await {
        Ok(DeleteOutcome::NeedsConfirmation) => see_other(&format!("{LIST_PATH}/{id}/delete")),
        Ok(DeleteOutcome::Deleted) | Err(_) => redirect_with_toast(LIST_PATH, editor.toast()),
    }
}
