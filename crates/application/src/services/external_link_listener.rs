use outbound_guard_domain::DialogPrompt;
use std::sync::Arc;
use tracing::debug;

use crate::ports::{ClickEvent, ClickListener, ConfirmationDialog, NavigationOpener};
use crate::services::PendingNavigation;

/// Listener attached to every external anchor.
///
/// Each click prevents the default navigation and starts a fresh
/// [`PendingNavigation`] for this listener's href.
pub struct ExternalLinkListener {
    href: Arc<str>,
    prompt: Arc<DialogPrompt>,
    dialog: Arc<dyn ConfirmationDialog>,
    opener: Arc<dyn NavigationOpener>,
}

impl ExternalLinkListener {
    pub fn new(
        href: Arc<str>,
        prompt: Arc<DialogPrompt>,
        dialog: Arc<dyn ConfirmationDialog>,
        opener: Arc<dyn NavigationOpener>,
    ) -> Self {
        Self {
            href,
            prompt,
            dialog,
            opener,
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

impl ClickListener for ExternalLinkListener {
    fn on_click(&self, event: &ClickEvent) -> Option<PendingNavigation> {
        event.prevent_default();
        debug!(href = %self.href, "External link click intercepted");

        Some(PendingNavigation::new(
            Arc::clone(&self.href),
            Arc::clone(&self.prompt),
            Arc::clone(&self.dialog),
            Arc::clone(&self.opener),
        ))
    }
}
