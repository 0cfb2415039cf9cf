use outbound_guard_application::ports::{ConfirmationDialog, NavigationOpener};
use outbound_guard_application::use_cases::InterceptExternalLinksUseCase;
use outbound_guard_infrastructure::{DryRunOpener, SystemBrowserOpener, TerminalDialog};
use std::sync::Arc;

/// Wires the interception use case to its adapters.
pub struct GuardServices {
    pub intercept: InterceptExternalLinksUseCase,
}

impl GuardServices {
    pub fn new(dialog: Arc<dyn ConfirmationDialog>, opener: Arc<dyn NavigationOpener>) -> Self {
        Self {
            intercept: InterceptExternalLinksUseCase::new(dialog, opener),
        }
    }

    /// Dialog on the controlling terminal; links open in the system browser
    /// unless `dry_run` is set.
    pub fn for_terminal(dry_run: bool, use_color: bool) -> Self {
        let dialog: Arc<dyn ConfirmationDialog> =
            Arc::new(TerminalDialog::stdio().with_color(use_color));
        let opener: Arc<dyn NavigationOpener> = if dry_run {
            Arc::new(DryRunOpener::new())
        } else {
            Arc::new(SystemBrowserOpener::new())
        };

        Self::new(dialog, opener)
    }
}
