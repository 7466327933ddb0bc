use serde::de::DeserializeOwned;

use super::listing::{ListQuery, matches_keyword};
use crate::common::ValidationError;
use crate::services::Upload;

/// Submitted form values in arrival order, plus the attached file if any.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    fields: Vec<(String, String)>,
    pub upload: Option<Upload>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            upload: None,
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn with_upload(mut self, upload: Upload) -> Self {
        self.upload = Some(upload);
        self
    }

    /// Last value submitted under `name`, untrimmed.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self, name: &str) -> String {
        self.raw(name).map(str::trim).unwrap_or_default().to_string()
    }

    /// Unchecked boxes are not submitted at all.
    pub fn checkbox(&self, name: &str) -> bool {
        self.raw(name)
            .is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "on" | "true" | "1" | "yes"))
    }

    /// Blank or unparsable input reads as `None`.
    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.raw(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse().ok())
    }

    /// Like `parse`, but a non-blank unparsable value is an error.
    pub fn number<T: std::str::FromStr>(&self, name: &'static str, message: &str) -> Result<Option<T>, ValidationError> {
        match self.raw(name).map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(v) => v
                .replace([',', '.', ' '], "")
                .parse()
                .map(Some)
                .map_err(|_| ValidationError::new(name, message)),
        }
    }

    /// Non-blank lines of a textarea, trimmed.
    pub fn lines(&self, name: &str) -> Vec<String> {
        self.raw(name)
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Lines of the form `first | second`; the second half may be omitted.
    pub fn pairs(&self, name: &str) -> Vec<(String, String)> {
        self.lines(name)
            .into_iter()
            .map(|line| match line.split_once('|') {
                Some((a, b)) => (a.trim().to_string(), b.trim().to_string()),
                None => (line, String::new()),
            })
            .collect()
    }

    /// A JSON array textarea; blank means empty.
    pub fn json_list<T: DeserializeOwned>(&self, name: &'static str, message: &str) -> Result<Vec<T>, ValidationError> {
        let raw = self.raw(name).map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(raw).map_err(|err| {
            log::debug!("{name}: rejected JSON input: {err}");
            ValidationError::new(name, message)
        })
    }

    pub fn has_upload(&self) -> bool {
        self.upload.as_ref().is_some_and(|u| !u.is_empty())
    }
}

/// Descriptor for one input of a generated admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    /// `text`, `textarea`, `number`, `date`, `email`, `password`, `checkbox`, `select`, `file` or `json`.
    pub kind: &'static str,
    pub value: String,
    pub options: Vec<(String, String)>,
    pub help: &'static str,
    pub required: bool,
}

impl FormField {
    fn new(kind: &'static str, name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            label,
            kind,
            value: value.into(),
            options: Vec::new(),
            help: "",
            required: false,
        }
    }

    pub fn text(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new("text", name, label, value)
    }

    pub fn email(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new("email", name, label, value)
    }

    pub fn password(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new("password", name, label, value)
    }

    pub fn textarea(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new("textarea", name, label, value)
    }

    /// One entry per line.
    pub fn lines(name: &'static str, label: &'static str, values: &[String]) -> Self {
        Self::new("textarea", name, label, values.join("\n")).help("Mỗi dòng một mục.")
    }

    pub fn number<T: ToString>(name: &'static str, label: &'static str, value: Option<T>) -> Self {
        Self::new("number", name, label, value.map(|v| v.to_string()).unwrap_or_default())
    }

    pub fn date(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new("date", name, label, value)
    }

    pub fn checkbox(name: &'static str, label: &'static str, checked: bool) -> Self {
        Self::new("checkbox", name, label, if checked { "on" } else { "" })
    }

    pub fn select(
        name: &'static str,
        label: &'static str,
        selected: impl Into<String>,
        options: Vec<(String, String)>,
    ) -> Self {
        Self {
            options,
            ..Self::new("select", name, label, selected)
        }
    }

    pub fn file(name: &'static str, label: &'static str, current: impl Into<String>) -> Self {
        Self::new("file", name, label, current)
    }

    pub fn json<T: serde::Serialize>(name: &'static str, label: &'static str, value: &T) -> Self {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string());
        Self::new("json", name, label, text)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn help(mut self, help: &'static str) -> Self {
        self.help = help;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.kind == "checkbox" && !self.value.is_empty()
    }
}

/// Binds a record to a generated admin form.
pub trait Editable {
    /// URL segment under `/admin`.
    const SLUG: &'static str;
    const TITLE: &'static str;

    fn fields(&self) -> Vec<FormField>;

    /// Copies submitted values into `self`. Only malformed structured input fails here;
    /// required-field checks belong to `validate`.
    fn apply_form(&mut self, input: &FormInput) -> Result<(), ValidationError>;
}

/// Table presentation for collection list pages.
pub trait Listable {
    fn columns() -> Vec<&'static str>;

    fn cells(&self) -> Vec<String>;

    /// Short name used in confirmation prompts.
    fn summary(&self) -> String;

    /// Admin list filtering; by default the keyword is searched in every cell.
    fn matches(&self, query: &ListQuery) -> bool {
        let keyword = query.keyword();
        if keyword.is_empty() {
            return true;
        }
        let cells = self.cells();
        let fields: Vec<&str> = cells.iter().map(String::as_str).collect();
        matches_keyword(&fields, keyword)
    }

    /// Extra selects rendered above the list, pre-filled from `query`.
    fn filters(_query: &ListQuery) -> Vec<FormField> {
        Vec::new()
    }
}
