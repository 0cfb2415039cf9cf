use outbound_guard_domain::{Classification, DialogPrompt, DomainError, GuardConfig, LinkCandidate};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{AnchorId, ConfirmationDialog, DocumentRoot, NavigationOpener};
use crate::services::ExternalLinkListener;

/// One scanned anchor and how it was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLink {
    pub anchor: AnchorId,
    pub href: Arc<str>,
    pub hostname: Option<String>,
    pub classification: Classification,
}

/// Summary of a scan: every `http`-prefixed anchor, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub current_hostname: String,
    pub links: Vec<ScannedLink>,
}

impl ScanReport {
    pub fn count(&self, classification: Classification) -> usize {
        self.links
            .iter()
            .filter(|link| link.classification == classification)
            .count()
    }

    pub fn intercepted(&self) -> impl Iterator<Item = &ScannedLink> {
        self.links
            .iter()
            .filter(|link| link.classification.is_intercepted())
    }
}

/// Use case: scan a document once and guard its external links.
///
/// Must run to completion before any click is dispatched; listeners only
/// exist for anchors classified as external.
pub struct InterceptExternalLinksUseCase {
    dialog: Arc<dyn ConfirmationDialog>,
    opener: Arc<dyn NavigationOpener>,
}

impl InterceptExternalLinksUseCase {
    pub fn new(dialog: Arc<dyn ConfirmationDialog>, opener: Arc<dyn NavigationOpener>) -> Self {
        Self { dialog, opener }
    }

    #[instrument(skip_all)]
    pub fn execute(
        &self,
        document: &dyn DocumentRoot,
        config: &GuardConfig,
    ) -> Result<ScanReport, DomainError> {
        let current_hostname = document.location_hostname().to_lowercase();
        let prompt = Arc::new(DialogPrompt::from_config(config));
        let mut links = Vec::new();

        for anchor in document.anchors() {
            let Some(candidate) = anchor.href.as_deref().and_then(LinkCandidate::from_href) else {
                continue;
            };

            let classification = candidate.classify(&current_hostname, &config.excluded_domains);

            if classification.is_intercepted() {
                let listener = ExternalLinkListener::new(
                    Arc::clone(candidate.raw_href()),
                    Arc::clone(&prompt),
                    Arc::clone(&self.dialog),
                    Arc::clone(&self.opener),
                );
                document.add_click_listener(anchor.id, Arc::new(listener))?;
            }

            links.push(ScannedLink {
                anchor: anchor.id,
                href: Arc::clone(candidate.raw_href()),
                hostname: candidate.resolved_hostname().map(str::to_string),
                classification,
            });
        }

        let report = ScanReport {
            current_hostname,
            links,
        };

        debug!(
            internal = report.count(Classification::Internal),
            excluded = report.count(Classification::Excluded),
            unparseable = report.count(Classification::Unparseable),
            "Link scan complete"
        );
        info!(
            host = %report.current_hostname,
            scanned = report.links.len(),
            intercepted = report.count(Classification::External),
            "External link guard attached"
        );

        Ok(report)
    }
}
