use outbound_guard_domain::DomainError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::services::PendingNavigation;

/// Position of an anchor in document order.
pub type AnchorId = usize;

/// An `<a>` element as seen by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorElement {
    pub id: AnchorId,
    /// The `href` attribute exactly as written in the markup.
    pub href: Option<String>,
}

impl AnchorElement {
    pub fn new(id: AnchorId, href: Option<impl Into<String>>) -> Self {
        Self {
            id,
            href: href.map(Into::into),
        }
    }
}

/// A single click being dispatched to an anchor's listeners.
#[derive(Debug, Default)]
pub struct ClickEvent {
    default_prevented: AtomicBool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the browser from following the link for this click.
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::Release);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::Acquire)
    }
}

/// Click handler attached to an anchor.
///
/// `on_click` runs synchronously inside the dispatch. Work that has to wait
/// for the visitor is handed back as a [`PendingNavigation`], which the
/// document's event loop drives to completion.
pub trait ClickListener: Send + Sync {
    fn on_click(&self, event: &ClickEvent) -> Option<PendingNavigation>;
}

/// The page whose anchors are scanned and guarded.
pub trait DocumentRoot: Send + Sync {
    /// Hostname of the page the document was loaded from; empty when the
    /// page has no host (local files, `about:blank`).
    fn location_hostname(&self) -> String;

    /// All anchor elements in document order.
    fn anchors(&self) -> Vec<AnchorElement>;

    fn add_click_listener(
        &self,
        anchor: AnchorId,
        listener: Arc<dyn ClickListener>,
    ) -> Result<(), DomainError>;
}
