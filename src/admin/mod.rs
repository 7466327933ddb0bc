//! Form and table bindings for every record managed from the admin area.

mod careers;
mod contact;
mod overview;
mod production;

use chrono::{DateTime, Utc};

pub(crate) fn yes_no(value: bool) -> String {
    if value { "Có" } else { "Không" }.to_string()
}

/// Cuts on a character boundary and appends an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

pub(crate) fn date_cell(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default()
}
