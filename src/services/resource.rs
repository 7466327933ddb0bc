use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::ValidationError;

/// A collection managed through `GET/POST ENDPOINT` and `GET/PUT/DELETE ENDPOINT/{id}`.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const ENDPOINT: &'static str;

    /// Multipart part name for an attached file.
    const UPLOAD_FIELD: &'static str = "image";

    fn id(&self) -> Option<&str>;

    /// Initial draft for the "add" action.
    fn draft(order: i32) -> Self;

    /// Local checks run before any request is issued.
    fn validate(&self, is_new: bool, has_upload: bool) -> Result<(), ValidationError>;

    /// `None` for collections without an `order` field.
    fn order(&self) -> Option<i32> {
        None
    }

    fn set_order(&mut self, _order: i32) {}

    /// Renumbers nested ordered lists; called before every submit.
    fn renumber(&mut self) {}
}

/// A settings document with one instance, managed through `GET/PUT ENDPOINT`.
pub trait Singleton: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    const ENDPOINT: &'static str;

    const UPLOAD_FIELD: &'static str = "image";

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
