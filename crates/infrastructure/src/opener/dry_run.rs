use async_trait::async_trait;
use outbound_guard_application::ports::NavigationOpener;
use outbound_guard_domain::DomainError;
use tracing::info;

/// Opener that only logs; nothing is launched.
#[derive(Debug, Default)]
pub struct DryRunOpener;

impl DryRunOpener {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NavigationOpener for DryRunOpener {
    async fn open_in_new_context(&self, url: &str) -> Result<(), DomainError> {
        info!(url, "Dry run: would open link in a new browsing context");
        Ok(())
    }
}
