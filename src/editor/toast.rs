use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ToastLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            _ => Err(format!("invalid toast level: {}", s)),
        }
    }
}

/// One-line feedback for the last action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == ToastLevel::Error
    }

    /// `toast=<level>&msg=<message>`, for carrying the toast across a redirect.
    pub fn query_string(&self) -> String {
        serde_urlencoded::to_string([("toast", self.level.as_str()), ("msg", self.message.as_str())])
            .unwrap_or_default()
    }

    pub fn from_query(level: Option<&str>, message: Option<&str>) -> Option<Self> {
        let level = level?.parse().ok()?;
        let message = message.map(str::trim).filter(|m| !m.is_empty())?;
        Some(Self {
            level,
            message: message.to_string(),
        })
    }
}
