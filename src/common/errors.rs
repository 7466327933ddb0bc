use thiserror::Error;

/// Shown for every transport or decoding failure; the cause is only logged.
pub const NETWORK_ERROR_MESSAGE: &str = "Không thể kết nối tới máy chủ. Vui lòng thử lại sau.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid backend URL {0:?}: expected an http:// or https:// origin")]
    InvalidBackendUrl(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// `success: false` from the backend, message kept verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(message) | Self::InvalidRequest(message) => message.clone(),
            Self::Transport(_) | Self::Decode { .. } => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Item {0:?} not found")]
    NotFound(String),

    #[error("Resource has no order field")]
    NotOrderable,

    #[error("No draft is open")]
    NoDraft,
}

impl EditorError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.message.clone(),
            Self::Service(err) => err.user_message(),
            Self::NotFound(_) => "Không tìm thấy dữ liệu.".to_string(),
            Self::NotOrderable => "Mục này không hỗ trợ sắp xếp.".to_string(),
            Self::NoDraft => "Không có biểu mẫu nào đang mở.".to_string(),
        }
    }
}
