use async_trait::async_trait;
use outbound_guard_domain::DomainError;

/// Opens a URL in a new browsing context (tab, window, external browser).
/// The current page is never navigated.
#[async_trait]
pub trait NavigationOpener: Send + Sync {
    async fn open_in_new_context(&self, url: &str) -> Result<(), DomainError>;
}
