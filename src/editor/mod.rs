//! The list + form editing cycle shared by every admin page.
//!
//! A page loads the whole collection, opens a draft (new or cloned from an
//! item), submits it, and reloads the whole collection again. Nothing is
//! patched locally; the reload is the only consistency mechanism.

pub mod form;
pub mod listing;
pub mod ordering;

mod toast;

pub use form::{Editable, FormField, FormInput, Listable};
pub use listing::{ListQuery, Page, paginate};
pub use ordering::Direction;
pub use toast::{Toast, ToastLevel};

use crate::common::{EditorError, ServiceError};
use crate::services::{Resource, ResourceService, Singleton, SingletonService, Upload};

pub const CREATED_MESSAGE: &str = "Thêm mới thành công!";
pub const UPDATED_MESSAGE: &str = "Cập nhật thành công!";
pub const DELETED_MESSAGE: &str = "Xóa thành công!";
pub const MOVED_MESSAGE: &str = "Đã cập nhật thứ tự!";
pub const SETTINGS_SAVED_MESSAGE: &str = "Lưu cài đặt thành công!";

/// Working copy of one record.
#[derive(Debug, Clone)]
pub struct Draft<R> {
    pub item: R,
    pub is_new: bool,
    pub upload: Option<Upload>,
}

impl<R> Draft<R> {
    pub fn has_upload(&self) -> bool {
        self.upload.as_ref().is_some_and(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeleteOutcome {
    /// Nothing was sent; ask the user first.
    NeedsConfirmation,
    Deleted,
}

#[derive(Debug)]
pub struct Editor<R: Resource> {
    service: ResourceService<R>,
    items: Vec<R>,
    draft: Option<Draft<R>>,
    toast: Option<Toast>,
}

impl<R: Resource> Editor<R> {
    pub fn new(service: ResourceService<R>) -> Self {
        Self {
            service,
            items: Vec::new(),
            draft: None,
            toast: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn into_items(self) -> Vec<R> {
        self.items
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    pub fn draft(&self) -> Option<&Draft<R>> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft<R>> {
        self.draft.as_mut()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }

    /// Replaces the collection with a fresh fetch. On failure the previous
    /// items stay as they were and an error toast is recorded.
    pub async fn load(&mut self) -> Result<&[R], EditorError> {
        match self.service.list().await {
            Ok(mut items) => {
                ordering::normalize(&mut items);
                self.items = items;
                Ok(&self.items)
            }
            Err(err) => Err(self.fail(R::ENDPOINT, err)),
        }
    }

    /// `None` starts a blank draft placed after the current last item.
    pub fn open_editor(&mut self, item: Option<&R>) -> &mut Draft<R> {
        let draft = match item {
            Some(item) => Draft {
                item: item.clone(),
                is_new: false,
                upload: None,
            },
            None => Draft {
                item: R::draft(self.items.len() as i32),
                is_new: true,
                upload: None,
            },
        };
        self.draft.insert(draft)
    }

    /// Opens an item of the loaded collection by id.
    pub fn open_existing(&mut self, id: &str) -> Result<&mut Draft<R>, EditorError> {
        let item = self
            .find(id)
            .cloned()
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?;
        Ok(self.open_editor(Some(&item)))
    }

    pub fn close_editor(&mut self) {
        self.draft = None;
    }

    /// Validates and sends the open draft.
    ///
    /// Invalid drafts never reach the network. On success the editor closes
    /// and the collection is reloaded; on failure the draft stays open.
    pub async fn submit(&mut self) -> Result<Option<R>, EditorError> {
        let Some(draft) = self.draft.as_mut() else {
            return Err(EditorError::NoDraft);
        };

        draft.item.renumber();
        let has_upload = draft.has_upload();

        if let Err(err) = draft.item.validate(draft.is_new, has_upload) {
            self.toast = Some(Toast::error(err.message.clone()));
            return Err(err.into());
        }

        let result = if draft.is_new {
            self.service.create(&draft.item, draft.upload.as_ref()).await
        } else {
            match draft.item.id() {
                Some(id) => {
                    self.service
                        .update(id, &draft.item, draft.upload.as_ref())
                        .await
                }
                None => Err(ServiceError::InvalidRequest(
                    "Thiếu mã định danh của bản ghi.".to_string(),
                )),
            }
        };

        let message = if draft.is_new { CREATED_MESSAGE } else { UPDATED_MESSAGE };

        match result {
            Ok(saved) => {
                self.draft = None;
                self.succeed(message).await;
                Ok(saved)
            }
            Err(err) => Err(self.fail(R::ENDPOINT, err)),
        }
    }

    /// Deletes after confirmation, then reloads.
    pub async fn delete(&mut self, id: &str, confirmed: bool) -> Result<DeleteOutcome, EditorError> {
        if !confirmed {
            return Ok(DeleteOutcome::NeedsConfirmation);
        }

        match self.service.delete(id).await {
            Ok(()) => {
                if self.draft.as_ref().and_then(|d| d.item.id()) == Some(id) {
                    self.draft = None;
                }
                self.succeed(DELETED_MESSAGE).await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => Err(self.fail(R::ENDPOINT, err)),
        }
    }

    /// Swaps `order` with the neighbouring item and saves both.
    ///
    /// Returns `false` without any request when the item is already at that end.
    /// A failed save still reloads, so the items show what the backend kept.
    pub async fn move_item(&mut self, id: &str, direction: Direction) -> Result<bool, EditorError> {
        if self.items.first().is_some_and(|item| item.order().is_none()) {
            return Err(EditorError::NotOrderable);
        }

        let index = self
            .items
            .iter()
            .position(|item| item.id() == Some(id))
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?;

        let Some(other) = ordering::neighbour(self.items.len(), index, direction) else {
            return Ok(false);
        };

        let mut first = self.items[index].clone();
        let mut second = self.items[other].clone();
        let (first_order, second_order) = (
            first.order().unwrap_or(index as i32),
            second.order().unwrap_or(other as i32),
        );
        first.set_order(second_order);
        second.set_order(first_order);

        for item in [&first, &second] {
            let Some(item_id) = item.id() else {
                return Err(EditorError::NotFound(String::new()));
            };
            if let Err(err) = self.service.update(item_id, item, None).await {
                // The first half of the swap may already be stored.
                let _ = self.load().await;
                return Err(self.fail(R::ENDPOINT, err));
            }
        }

        self.succeed(MOVED_MESSAGE).await;
        Ok(true)
    }

    async fn succeed(&mut self, message: &str) {
        self.toast = Some(Toast::success(message));
        // A failed reload replaces the success toast with the load error.
        let _ = self.load().await;
    }

    fn fail(&mut self, endpoint: &str, err: ServiceError) -> EditorError {
        crate::log_err!(err, endpoint);
        self.toast = Some(Toast::error(err.user_message()));
        err.into()
    }
}

/// The single-document counterpart of `Editor`.
#[derive(Debug)]
pub struct SettingsEditor<S: Singleton> {
    service: SingletonService<S>,
    document: S,
    upload: Option<Upload>,
    toast: Option<Toast>,
}

impl<S: Singleton> SettingsEditor<S> {
    pub fn new(service: SingletonService<S>) -> Self {
        Self {
            service,
            document: S::default(),
            upload: None,
            toast: None,
        }
    }

    pub fn document(&self) -> &S {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut S {
        &mut self.document
    }

    pub fn into_document(self) -> S {
        self.document
    }

    pub fn attach(&mut self, upload: Option<Upload>) {
        self.upload = upload;
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub async fn load(&mut self) -> Result<&S, EditorError> {
        match self.service.get().await {
            Ok(document) => {
                self.document = document;
                Ok(&self.document)
            }
            Err(err) => {
                crate::log_err!(err, S::ENDPOINT);
                self.toast = Some(Toast::error(err.user_message()));
                Err(err.into())
            }
        }
    }

    pub async fn submit(&mut self) -> Result<(), EditorError> {
        if let Err(err) = self.document.validate() {
            self.toast = Some(Toast::error(err.message.clone()));
            return Err(err.into());
        }

        let upload = self.upload.as_ref().filter(|u| !u.is_empty());
        if let Err(err) = self.service.save(&self.document, upload).await {
            crate::log_err!(err, S::ENDPOINT);
            self.toast = Some(Toast::error(err.user_message()));
            return Err(err.into());
        }

        self.upload = None;
        self.toast = Some(Toast::success(SETTINGS_SAVED_MESSAGE));
        let _ = self.load().await;
        Ok(())
    }
}
