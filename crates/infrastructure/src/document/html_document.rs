use dashmap::DashMap;
use outbound_guard_application::ports::{
    AnchorElement, AnchorId, ClickEvent, ClickListener, DocumentRoot,
};
use outbound_guard_application::services::PendingNavigation;
use outbound_guard_domain::DomainError;
use scraper::{Html, Selector};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::debug;
use url::Url;

/// An `<a>` element extracted from the page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlAnchor {
    pub id: AnchorId,
    pub href: Option<String>,
    pub text: String,
}

/// What happened when a click was dispatched to an anchor.
#[derive(Debug)]
pub struct ClickDispatch {
    pub anchor: AnchorId,
    pub default_prevented: bool,
    /// Navigations started by listeners, to be driven by the caller.
    pub pending: Vec<PendingNavigation>,
}

impl ClickDispatch {
    /// True when nothing intercepted the click and the browser would follow
    /// the link in the current page.
    pub fn follows_link(&self) -> bool {
        !self.default_prevented
    }
}

/// Static HTML page located at a URL, with a listener registry for its anchors.
///
/// The markup is parsed once; anchors keep document order and their `href`
/// attributes exactly as written.
pub struct HtmlDocument {
    location: Url,
    anchors: Vec<HtmlAnchor>,
    listeners: DashMap<AnchorId, Vec<Arc<dyn ClickListener>>>,
}

impl HtmlDocument {
    pub fn parse(html: &str, location: Url) -> Self {
        let document = Html::parse_document(html);

        let anchors: Vec<HtmlAnchor> = Selector::parse("a")
            .map(|selector| {
                document
                    .select(&selector)
                    .enumerate()
                    .map(|(id, element)| HtmlAnchor {
                        id,
                        href: element.value().attr("href").map(str::to_string),
                        text: element
                            .text()
                            .flat_map(str::split_whitespace)
                            .collect::<Vec<_>>()
                            .join(" "),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            location,
            anchors,
            listeners: DashMap::new(),
        }
    }

    pub async fn load(path: impl AsRef<Path>, location: Url) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let html = fs::read_to_string(path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let document = Self::parse(&html, location);
        debug!(
            path = %path.display(),
            anchors = document.anchors.len(),
            "HTML document loaded"
        );
        Ok(document)
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn html_anchors(&self) -> &[HtmlAnchor] {
        &self.anchors
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&HtmlAnchor> {
        self.anchors.get(id)
    }

    pub fn listener_count(&self, id: AnchorId) -> usize {
        self.listeners.get(&id).map_or(0, |entry| entry.len())
    }

    /// Dispatches a click to every listener on the anchor, in registration order.
    pub fn click(&self, id: AnchorId) -> Result<ClickDispatch, DomainError> {
        if id >= self.anchors.len() {
            return Err(DomainError::AnchorNotFound(id));
        }

        // Clone out of the map so listeners never run under a shard lock.
        let listeners = self
            .listeners
            .get(&id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        let event = ClickEvent::new();
        let pending = listeners
            .iter()
            .filter_map(|listener| listener.on_click(&event))
            .collect();

        Ok(ClickDispatch {
            anchor: id,
            default_prevented: event.default_prevented(),
            pending,
        })
    }
}

impl DocumentRoot for HtmlDocument {
    fn location_hostname(&self) -> String {
        self.location
            .host_str()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    fn anchors(&self) -> Vec<AnchorElement> {
        self.anchors
            .iter()
            .map(|anchor| AnchorElement {
                id: anchor.id,
                href: anchor.href.clone(),
            })
            .collect()
    }

    fn add_click_listener(
        &self,
        anchor: AnchorId,
        listener: Arc<dyn ClickListener>,
    ) -> Result<(), DomainError> {
        if anchor >= self.anchors.len() {
            return Err(DomainError::AnchorNotFound(anchor));
        }

        self.listeners.entry(anchor).or_default().push(listener);
        Ok(())
    }
}
