use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::hostname::{matches_domain, ExcludedHostnames};

/// Literal `href` prefix a link needs to be considered at all.
///
/// The check is case-sensitive and runs on the attribute as written, so
/// `mailto:`, relative links and `HTTP://` never become candidates.
pub const HTTP_HREF_PREFIX: &str = "http";

/// Where a link leads relative to the current page and the exclusion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Same host as the page, or one of its subdomains.
    Internal,
    /// Covered by an operator exclusion entry.
    Excluded,
    /// Leaves the site; clicks are gated behind a confirmation.
    External,
    /// The href could not be parsed into a URL with a host.
    Unparseable,
}

impl Classification {
    pub fn is_intercepted(self) -> bool {
        matches!(self, Classification::External)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Internal => "internal",
            Classification::Excluded => "excluded",
            Classification::External => "external",
            Classification::Unparseable => "unparseable",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An anchor target under consideration, computed once at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    raw_href: Arc<str>,
    resolved_hostname: Option<String>,
}

impl LinkCandidate {
    /// Returns `None` for hrefs that do not start with [`HTTP_HREF_PREFIX`].
    pub fn from_href(href: &str) -> Option<Self> {
        if !href.starts_with(HTTP_HREF_PREFIX) {
            return None;
        }

        Some(Self {
            raw_href: Arc::from(href),
            resolved_hostname: resolve_hostname(href),
        })
    }

    pub fn raw_href(&self) -> &Arc<str> {
        &self.raw_href
    }

    pub fn resolved_hostname(&self) -> Option<&str> {
        self.resolved_hostname.as_deref()
    }

    pub fn classify(
        &self,
        current_hostname: &str,
        excluded: &ExcludedHostnames,
    ) -> Classification {
        match self.resolved_hostname.as_deref() {
            Some(hostname) => classify_hostname(hostname, current_hostname, excluded),
            None => Classification::Unparseable,
        }
    }
}

/// Classifies `href` against the current page hostname and exclusion list.
///
/// Order matters: the internal test runs first, so a subdomain of the current
/// site is never reported as excluded or external even if listed.
pub fn classify(
    href: &str,
    current_hostname: &str,
    excluded: &ExcludedHostnames,
) -> Classification {
    match resolve_hostname(href) {
        Some(hostname) => classify_hostname(&hostname, current_hostname, excluded),
        None => Classification::Unparseable,
    }
}

fn classify_hostname(
    hostname: &str,
    current_hostname: &str,
    excluded: &ExcludedHostnames,
) -> Classification {
    let current = current_hostname.trim().to_lowercase();

    if matches_domain(hostname, &current) {
        return Classification::Internal;
    }

    if excluded.contains_match(hostname) {
        return Classification::Excluded;
    }

    Classification::External
}

fn resolve_hostname(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_lowercase())
}
