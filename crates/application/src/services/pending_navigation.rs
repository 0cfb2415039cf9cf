use outbound_guard_domain::{
    DialogPrompt, DomainError, NavigationEvent, NavigationOutcome, NavigationState,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::ports::{ConfirmationDialog, NavigationOpener};

/// The suspended decision for one intercepted click.
///
/// Owns its target URL and its own state, so any number of these can be in
/// flight without reading or writing each other.
pub struct PendingNavigation {
    href: Arc<str>,
    prompt: Arc<DialogPrompt>,
    dialog: Arc<dyn ConfirmationDialog>,
    opener: Arc<dyn NavigationOpener>,
    state: NavigationState,
}

impl PendingNavigation {
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
            state: NavigationState::Idle,
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Shows the prompt, waits for the visitor and opens the link on confirm.
    ///
    /// Cancel and every kind of dismissal end in `Discarded` with no side
    /// effects. The only error is the opener failing after a confirm.
    pub async fn resolve(mut self) -> Result<NavigationOutcome, DomainError> {
        self.advance(NavigationEvent::PromptShown);
        let choice = self.dialog.present(&self.prompt).await;
        self.advance(NavigationEvent::Choice(choice));

        if !choice.is_confirmed() {
            debug!(href = %self.href, ?choice, state = ?self.state, "Navigation discarded");
            return Ok(self.finish(NavigationOutcome::Discarded(choice)));
        }

        self.opener.open_in_new_context(&self.href).await?;
        self.advance(NavigationEvent::Opened);

        info!(
            href = %self.href,
            state = ?self.state,
            "External link opened in a new browsing context"
        );
        let outcome = NavigationOutcome::Opened(Arc::clone(&self.href));
        Ok(self.finish(outcome))
    }

    fn advance(&mut self, event: NavigationEvent) {
        match self.state.next(event) {
            Some(next) => self.state = next,
            None => debug_assert!(
                false,
                "illegal navigation transition {:?} from {:?}",
                event, self.state
            ),
        }
    }

    fn finish(&self, outcome: NavigationOutcome) -> NavigationOutcome {
        debug_assert_eq!(self.state, outcome.final_state());
        outcome
    }
}

impl fmt::Debug for PendingNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingNavigation")
            .field("href", &self.href)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
