use serde::Serialize;

use crate::hostname::ExcludedHostnames;

pub const DEFAULT_MESSAGE: &str = "You are about to leave our site. Continue?";
pub const DEFAULT_TITLE: &str = "External Link";
pub const DEFAULT_CONFIRM_TEXT: &str = "Yes, proceed";
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";
pub const DEFAULT_CONFIRM_COLOR: &str = "#3085d6";
pub const DEFAULT_CANCEL_COLOR: &str = "#d33";

/// Resolved, read-only guard settings for one page load.
///
/// Built once by the settings resolver and shared behind an `Arc`; nothing
/// writes to it after initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    pub excluded_domains: ExcludedHostnames,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub confirm_color: String,
    pub cancel_color: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            excluded_domains: ExcludedHostnames::new(),
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            confirm_text: DEFAULT_CONFIRM_TEXT.to_string(),
            cancel_text: DEFAULT_CANCEL_TEXT.to_string(),
            confirm_color: DEFAULT_CONFIRM_COLOR.to_string(),
            cancel_color: DEFAULT_CANCEL_COLOR.to_string(),
        }
    }
}

impl GuardConfig {
    pub fn with_excluded_domains(mut self, excluded_domains: ExcludedHostnames) -> Self {
        self.excluded_domains = excluded_domains;
        self
    }

    /// The settings payload handed to the page script, keyed the way the
    /// script reads it (`excludes`, `confirmButtonText`, ...).
    pub fn page_settings(&self) -> PageSettings<'_> {
        PageSettings {
            excludes: &self.excluded_domains,
            message: &self.message,
            title: &self.title,
            confirm_button_text: &self.confirm_text,
            cancel_button_text: &self.cancel_text,
            confirm_button_color: &self.confirm_color,
            cancel_button_color: &self.cancel_color,
        }
    }

    pub fn to_page_settings_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.page_settings())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings<'a> {
    pub excludes: &'a ExcludedHostnames,
    pub message: &'a str,
    pub title: &'a str,
    pub confirm_button_text: &'a str,
    pub cancel_button_text: &'a str,
    pub confirm_button_color: &'a str,
    pub cancel_button_color: &'a str,
}
