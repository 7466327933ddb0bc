use serde::Deserialize;

use corpsite::editor::Toast;

/// The `toast=&msg=` pair left by a post-redirect-get.
#[derive(Deserialize)]
pub struct ToastQuery {
    pub toast: Option<String>,
    pub msg: Option<String>,
}

impl ToastQuery {
    pub fn toast(&self) -> Option<Toast> {
        Toast::from_query(self.toast.as_deref(), self.msg.as_deref())
    }
}

#[derive(Deserialize)]
pub struct ConfirmForm {
    pub confirm: Option<String>,
}

impl ConfirmForm {
    pub fn confirmed(&self) -> bool {
        self.confirm.as_deref().is_some_and(|v| v == "yes")
    }
}

#[derive(Deserialize)]
pub struct StatusForm {
    pub status: String,
}

#[derive(Deserialize)]
pub struct ContactsQuery {
    pub status: Option<String>,
    pub spam: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}
