use serde::{Deserialize, Serialize};

use crate::guard_config::{
    GuardConfig, DEFAULT_CANCEL_COLOR, DEFAULT_CANCEL_TEXT, DEFAULT_CONFIRM_COLOR,
    DEFAULT_CONFIRM_TEXT, DEFAULT_MESSAGE, DEFAULT_TITLE,
};
use crate::hostname::{normalize_excluded_domain, ExcludedHostnames};
use crate::sanitize::{
    sanitize_domain_lines, sanitize_hex_color, sanitize_text_field, sanitize_textarea_field,
};

/// Exclusion entries as the operator entered them.
///
/// The settings form stores one domain per line in a single text block; a
/// TOML array is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ExcludesInput {
    Text(String),
    List(Vec<String>),
}

impl ExcludesInput {
    /// Sanitized, non-empty entries (not yet hostname-normalized).
    pub fn entries(&self) -> Vec<String> {
        match self {
            ExcludesInput::Text(text) => sanitize_domain_lines(text),
            ExcludesInput::List(items) => items
                .iter()
                .map(|item| sanitize_text_field(item))
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}

/// Persisted operator input for the guard (`[guard]` table).
///
/// Every field is optional; missing, invalid or empty values fall back to
/// the defaults when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuardSettings {
    #[serde(default)]
    pub excludes: Option<ExcludesInput>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, alias = "confirmButtonText")]
    pub confirm_button_text: Option<String>,

    #[serde(default, alias = "cancelButtonText")]
    pub cancel_button_text: Option<String>,

    #[serde(default, alias = "confirmButtonColor")]
    pub confirm_button_color: Option<String>,

    #[serde(default, alias = "cancelButtonColor")]
    pub cancel_button_color: Option<String>,
}

impl GuardSettings {
    /// Cleans every field the way the settings form does on save.
    pub fn sanitize(&self) -> GuardSettings {
        GuardSettings {
            excludes: self
                .excludes
                .as_ref()
                .map(|excludes| ExcludesInput::List(excludes.entries())),
            message: self.message.as_deref().map(sanitize_textarea_field),
            title: self.title.as_deref().map(sanitize_text_field),
            confirm_button_text: self.confirm_button_text.as_deref().map(sanitize_text_field),
            cancel_button_text: self.cancel_button_text.as_deref().map(sanitize_text_field),
            confirm_button_color: self
                .confirm_button_color
                .as_deref()
                .and_then(sanitize_hex_color),
            cancel_button_color: self
                .cancel_button_color
                .as_deref()
                .and_then(sanitize_hex_color),
        }
    }

    /// Appends raw exclusion entries, keeping whatever was already configured.
    pub fn add_excludes<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extra: Vec<String> = extra.into_iter().map(Into::into).collect();
        if extra.is_empty() {
            return;
        }

        let mut entries = self
            .excludes
            .as_ref()
            .map(ExcludesInput::entries)
            .unwrap_or_default();
        entries.extend(extra);
        self.excludes = Some(ExcludesInput::List(entries));
    }

    /// Builds the immutable snapshot the interceptor consumes.
    pub fn resolve(&self) -> GuardConfig {
        let clean = self.sanitize();

        let excluded_domains = clean
            .excludes
            .as_ref()
            .map(|excludes| ExcludedHostnames::from_entries(excludes.entries()))
            .unwrap_or_default();

        GuardConfig {
            excluded_domains,
            title: or_default(clean.title, DEFAULT_TITLE),
            message: or_default(clean.message, DEFAULT_MESSAGE),
            confirm_text: or_default(clean.confirm_button_text, DEFAULT_CONFIRM_TEXT),
            cancel_text: or_default(clean.cancel_button_text, DEFAULT_CANCEL_TEXT),
            confirm_color: or_default(clean.confirm_button_color, DEFAULT_CONFIRM_COLOR),
            cancel_color: or_default(clean.cancel_button_color, DEFAULT_CANCEL_COLOR),
        }
    }

    /// Exclusion entries that `resolve` will drop. Operator-facing only.
    pub fn rejected_excludes(&self) -> Vec<String> {
        self.excludes
            .as_ref()
            .map(ExcludesInput::entries)
            .unwrap_or_default()
            .into_iter()
            .filter(|entry| normalize_excluded_domain(entry).is_none())
            .collect()
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
