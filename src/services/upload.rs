use serde::Serialize;
use serde_json::Value;

use crate::common::ServiceError;

/// A file picked in an admin form, forwarded to the backend untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Flattens a record into multipart text fields.
///
/// Scalars are sent as text, nested arrays and objects as JSON text, nulls are omitted.
pub fn form_parts<B: Serialize + ?Sized>(body: &B) -> Result<Vec<(String, String)>, ServiceError> {
    let value = serde_json::to_value(body).map_err(|source| ServiceError::Decode {
        endpoint: "multipart body".to_string(),
        source,
    })?;

    let Value::Object(map) = value else {
        return Err(ServiceError::InvalidRequest(
            "multipart body must be an object".to_string(),
        ));
    };

    let parts = map
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
            };
            Some((key, text))
        })
        .collect();

    Ok(parts)
}
