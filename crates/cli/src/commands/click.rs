use anyhow::Context;
use outbound_guard_domain::{GuardConfig, NavigationOutcome};
use outbound_guard_infrastructure::HtmlDocument;
use std::path::Path;
use tracing::debug;

use super::parse_page_url;
use crate::di::GuardServices;

pub struct ClickOptions {
    pub link: usize,
    pub dry_run: bool,
    pub use_color: bool,
}

pub async fn run(
    page: &Path,
    page_url: &str,
    guard: &GuardConfig,
    options: ClickOptions,
) -> anyhow::Result<()> {
    let document = HtmlDocument::load(page, parse_page_url(page_url)?).await?;
    let services = GuardServices::for_terminal(options.dry_run, options.use_color);
    services.intercept.execute(&document, guard)?;

    let anchor = document
        .anchor(options.link)
        .with_context(|| format!("Page has no link #{}", options.link))?;
    let href = anchor.href.clone().unwrap_or_default();

    let dispatch = document.click(options.link)?;
    if dispatch.follows_link() {
        println!("Link #{} is not guarded; it opens normally: {href}", options.link);
        return Ok(());
    }

    debug!(link = options.link, pending = dispatch.pending.len(), "Click intercepted");

    for pending in dispatch.pending {
        match pending.resolve().await? {
            NavigationOutcome::Opened(url) => {
                println!("Opened {url} in a new browsing context");
            }
            NavigationOutcome::Discarded(_) => {
                println!("Stayed on the page; {href} was not opened");
            }
        }
    }

    Ok(())
}
