use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use url::Url;

/// Canonicalizes an operator-supplied exclusion entry.
///
/// Accepts `example.com`, `https://www.Example.com/`, `partner.com.` and
/// similar, and returns the bare lowercase hostname. Entries that do not
/// denote a host on their own (spaces, paths, query strings, ports,
/// credentials) yield `None`.
pub fn normalize_excluded_domain(raw: &str) -> Option<String> {
    let mut candidate = raw.trim().to_lowercase();

    for scheme in ["http://", "https://"] {
        if let Some(rest) = candidate.strip_prefix(scheme) {
            candidate = rest.to_string();
            break;
        }
    }
    if let Some(rest) = candidate.strip_suffix('/') {
        candidate = rest.to_string();
    }
    if candidate.contains('/') {
        return None;
    }
    if let Some(rest) = candidate.strip_prefix("www.") {
        candidate = rest.to_string();
    }
    // Fully-qualified form: `partner.com.` names the same host as `partner.com`.
    if let Some(rest) = candidate.strip_suffix('.') {
        candidate = rest.to_string();
    }

    let parsed = Url::parse(&format!("http://{candidate}")).ok()?;

    let host_only = parsed.username().is_empty()
        && parsed.password().is_none()
        && parsed.port().is_none()
        && parsed.path() == "/"
        && parsed.query().is_none()
        && parsed.fragment().is_none();
    if !host_only {
        return None;
    }

    parsed
        .host_str()
        .filter(|host| !host.is_empty() && !host.ends_with('.'))
        .map(|host| host.to_lowercase())
}

/// True when `hostname` is `domain` itself or one of its subdomains.
///
/// Matching only happens on a label boundary:
/// - `excluded.com` matches `excluded.com`, `sub.excluded.com`
/// - `excluded.com` does NOT match `notexcluded.com`, `fakeexcluded.com`
pub fn matches_domain(hostname: &str, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }

    if hostname == domain {
        return true;
    }

    hostname
        .strip_suffix(domain)
        .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Normalized set of hostnames whose links are never intercepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedHostnames {
    domains: BTreeSet<String>,
}

impl ExcludedHostnames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from raw entries; invalid entries are dropped silently.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = entries
            .into_iter()
            .filter_map(|entry| normalize_excluded_domain(entry.as_ref()))
            .collect();

        Self { domains }
    }

    /// Adds one raw entry. Returns false if it was rejected or already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize_excluded_domain(raw) {
            Some(domain) => self.domains.insert(domain),
            None => false,
        }
    }

    /// First exclusion entry covering `hostname`, if any.
    pub fn find_match(&self, hostname: &str) -> Option<&str> {
        self.domains
            .iter()
            .map(String::as_str)
            .find(|domain| matches_domain(hostname, domain))
    }

    pub fn contains_match(&self, hostname: &str) -> bool {
        self.find_match(hostname).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Serialize for ExcludedHostnames {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.domains.iter())
    }
}
