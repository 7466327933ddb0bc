use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::ServiceError;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Đã xảy ra lỗi, vui lòng thử lại!";

/// Response shape used by every backend endpoint: `{success, data?, message?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// `success: false` becomes `ServiceError::Backend` carrying the message verbatim.
    pub fn into_result(self) -> Result<Option<T>, ServiceError> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            Err(ServiceError::Backend(message))
        }
    }
}

/// Drops `id` from records that also carry `_id`.
///
/// Some backends echo a virtual `id` next to `_id`; both map to the same
/// field, so the pair would fail to decode as a duplicate.
pub fn dedupe_ids(data: &mut Value) {
    match data {
        Value::Object(map) if map.contains_key("_id") => {
            map.remove("id");
        }
        Value::Array(items) => items.iter_mut().for_each(dedupe_ids),
        _ => {}
    }
}
