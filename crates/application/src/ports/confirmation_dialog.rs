use async_trait::async_trait;
use outbound_guard_domain::{DialogChoice, DialogPrompt};

/// A modal surface asking the visitor whether to leave the site.
///
/// Each call is an independent dialog; implementations must not keep a
/// shared "current dialog" that a second call could overwrite. Failing to
/// show or read the dialog is reported as a dismissal, never as an error.
#[async_trait]
pub trait ConfirmationDialog: Send + Sync {
    async fn present(&self, prompt: &DialogPrompt) -> DialogChoice;
}
