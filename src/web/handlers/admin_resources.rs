//! List, form, delete and reorder pages shared by every admin collection.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};

use corpsite::common::EditorError;
use corpsite::editor::{
    DeleteOutcome, Direction, Editable, Editor, FormInput, ListQuery, Listable, Toast, paginate,
};
use corpsite::models::{
    AutomationItem, Banner, Candidate, CoreValue, FacilityFeature, Job, Milestone, Product, Stage,
};
use corpsite::services::Resource;

use crate::web::forms::{ConfirmForm, ToastQuery};
use crate::web::helpers::{read_form, redirect_with_toast, render, see_other};
use crate::web::state::AppState;
use crate::web::templates::{
    AdminConfirmDeleteTemplate, AdminFormTemplate, AdminListTemplate, AdminRow,
};

const PAGE_SIZE: usize = 20;

/// Slug and title of every collection, in menu order.
pub const SECTIONS: [(&str, &str); 9] = [
    (Banner::SLUG, Banner::TITLE),
    (Milestone::SLUG, Milestone::TITLE),
    (CoreValue::SLUG, CoreValue::TITLE),
    (Job::SLUG, Job::TITLE),
    (Candidate::SLUG, Candidate::TITLE),
    (AutomationItem::SLUG, AutomationItem::TITLE),
    (FacilityFeature::SLUG, FacilityFeature::TITLE),
    (Stage::SLUG, Stage::TITLE),
    (Product::SLUG, Product::TITLE),
];

pub trait AdminResource: Resource + Editable + Listable {}

impl<T: Resource + Editable + Listable> AdminResource for T {}

pub fn configure(cfg: &mut web::ServiceConfig) {
    register::<Banner>(cfg);
    register::<Milestone>(cfg);
    register::<CoreValue>(cfg);
    register::<Job>(cfg);
    register::<Candidate>(cfg);
    register::<AutomationItem>(cfg);
    register::<FacilityFeature>(cfg);
    register::<Stage>(cfg);
    register::<Product>(cfg);
}

/// `/new` is registered before `/{id}` so it is never read as an id.
pub fn register<R: AdminResource>(cfg: &mut web::ServiceConfig) {
    let base = base::<R>();
    cfg.service(
        web::resource(base.clone())
            .route(web::get().to(list::<R>))
            .route(web::post().to(create::<R>)),
    )
    .service(web::resource(format!("{base}/new")).route(web::get().to(new_form::<R>)))
    .service(web::resource(format!("{base}/{{id}}/edit")).route(web::get().to(edit_form::<R>)))
    .service(
        web::resource(format!("{base}/{{id}}/delete"))
            .route(web::get().to(confirm_delete::<R>))
            .route(web::post().to(delete::<R>)),
    )
    .service(
        web::resource(format!("{base}/{{id}}/move/{{direction}}"))
            .route(web::post().to(move_item::<R>)),
    )
    .service(web::resource(format!("{base}/{{id}}")).route(web::post().to(update::<R>)));
}

fn base<R: Editable>() -> String {
    format!("/admin/{}", R::SLUG)
}

fn form_page<R: AdminResource>(item: &R, toast: Option<Toast>, error_field: &'static str) -> AdminFormTemplate {
    let (heading, action) = match item.id() {
        Some(id) => ("Chỉnh sửa", format!("{}/{}", base::<R>(), id)),
        None => ("Thêm mới", base::<R>()),
    };
    AdminFormTemplate {
        section: R::TITLE,
        heading,
        action,
        back: base::<R>(),
        fields: item.fields(),
        error_field,
        toast,
    }
}

async fn list<R: AdminResource>(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
    toast: web::Query<ToastQuery>,
) -> HttpResponse {
    let mut editor = state.editor::<R>();
    let _ = editor.load().await;
    let toast = editor.take_toast().or_else(|| toast.toast());

    let items = editor.items();
    let orderable = items.first().is_some_and(|item| item.order().is_some());
    let rows: Vec<AdminRow> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.matches(&query))
        .map(|(index, item)| AdminRow {
            id: item.id().unwrap_or_default().to_string(),
            cells: item.cells(),
            first: index == 0,
            last: index + 1 == items.len(),
        })
        .collect();

    render(AdminListTemplate {
        section: R::TITLE,
        base: base::<R>(),
        columns: R::columns(),
        page: paginate(rows, query.page(), PAGE_SIZE),
        filters: R::filters(&query),
        keyword: query.keyword().to_string(),
        pager_query: query.without_page(),
        orderable,
        toast,
    })
}

async fn new_form<R: AdminResource>(state: web::Data<AppState>) -> HttpResponse {
    let mut editor = state.editor::<R>();
    let _ = editor.load().await;
    let toast = editor.take_toast();
    let draft = editor.open_editor(None);
    render(form_page(&draft.item, toast, ""))
}

async fn create<R: AdminResource>(state: web::Data<AppState>, payload: Multipart) -> HttpResponse {
    let input = match read_form(payload).await {
        Ok(input) => input,
        Err(resp) => return resp,
    };

    let mut editor = state.editor::<R>();
    // The provisional order comes from the current collection size.
    let loaded = editor.load().await.is_ok();
    let draft = editor.open_editor(None);
    if !loaded {
        let _ = draft.item.apply_form(&input);
        let item = draft.item.clone();
        return render(form_page(&item, editor.take_toast(), ""));
    }

    submit_draft(editor, input).await
}

async fn edit_form<R: AdminResource>(
    state: web::Data<AppState>,
    path: web::Path<String>,
    toast: web::Query<ToastQuery>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut editor = state.editor::<R>();
    if editor.load().await.is_err() {
        return redirect_with_toast(&base::<R>(), editor.toast());
    }

    match editor.open_existing(&id) {
        Ok(draft) => {
            let item = draft.item.clone();
            render(form_page(&item, toast.toast(), ""))
        }
        Err(err) => redirect_with_toast(&base::<R>(), Some(&Toast::error(err.user_message()))),
    }
}

async fn update<R: AdminResource>(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Multipart,
) -> HttpResponse {
    let id = path.into_inner();
    let input = match read_form(payload).await {
        Ok(input) => input,
        Err(resp) => return resp,
    };

    let mut editor = state.editor::<R>();
    if editor.load().await.is_err() {
        return redirect_with_toast(&base::<R>(), editor.toast());
    }
    if let Err(err) = editor.open_existing(&id) {
        return redirect_with_toast(&base::<R>(), Some(&Toast::error(err.user_message())));
    }

    submit_draft(editor, input).await
}

/// Applies the form to the open draft and submits it. A failed submit
/// re-renders the form with the draft as the user left it.
async fn submit_draft<R: AdminResource>(mut editor: Editor<R>, input: FormInput) -> HttpResponse {
    let Some(draft) = editor.draft_mut() else {
        return see_other(&base::<R>());
    };

    if let Err(err) = draft.item.apply_form(&input) {
        let item = draft.item.clone();
        return render(form_page(&item, Some(Toast::error(err.message)), err.field));
    }
    draft.upload = input.upload;

    match editor.submit().await {
        Ok(_) => redirect_with_toast(&base::<R>(), editor.toast()),
        Err(err) => {
            let field = match &err {
                EditorError::Validation(v) => v.field,
                _ => "",
            };
            let toast = editor
                .take_toast()
                .or_else(|| Some(Toast::error(err.user_message())));
            match editor.draft() {
                Some(draft) => render(form_page(&draft.item, toast, field)),
                None => redirect_with_toast(&base::<R>(), toast.as_ref()),
            }
        }
    }
}

async fn confirm_delete<R: AdminResource>(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    let mut editor = state.editor::<R>();
    if editor.load().await.is_err() {
        return redirect_with_toast(&base::<R>(), editor.toast());
    }

    match editor.find(&id) {
        Some(item) => render(AdminConfirmDeleteTemplate {
            section: R::TITLE,
            summary: item.summary(),
            action: format!("{}/{}/delete", base::<R>(), id),
            back: base::<R>(),
            toast: None,
        }),
        None => redirect_with_toast(
            &base::<R>(),
            Some(&Toast::error(EditorError::NotFound(id).user_message())),
        ),
    }
}

async fn delete<R: AdminResource>(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<ConfirmForm>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut editor = state.editor::<R>();

    match editor.delete(&id, form.confirmed()).await {
        Ok(DeleteOutcome::NeedsConfirmation) => {
            see_other(&format!("{}/{}/delete", base::<R>(), id))
        }
        Ok(DeleteOutcome::Deleted) | Err(_) => {
            redirect_with_toast(&base::<R>(), editor.toast())
        }
    }
}

async fn move_item<R: AdminResource>(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (id, direction) = path.into_inner();
    let Ok(direction) = direction.parse::<Direction>() else {
        return see_other(&base::<R>());
    };

    let mut editor = state.editor::<R>();
    if editor.load().await.is_err() {
        return redirect_with_toast(&base::<R>(), editor.toast());
    }

    match editor.move_item(&id, direction).await {
        Ok(_) => redirect_with_toast(&base::<R>(), editor.toast()),
        Err(err) => {
            let toast = editor
                .take_toast()
                .unwrap_or_else(|| Toast::error(err.user_message()));
            redirect_with_toast(&base::<R>(), Some(&toast))
        }
    }
}
