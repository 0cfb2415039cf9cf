use outbound_guard_application::use_cases::ScanReport;
use outbound_guard_domain::{Classification, GuardConfig};
use outbound_guard_infrastructure::HtmlDocument;
use serde_json::json;
use std::path::Path;

use super::parse_page_url;
use crate::di::GuardServices;

pub async fn run(
    page: &Path,
    page_url: &str,
    guard: &GuardConfig,
    as_json: bool,
) -> anyhow::Result<()> {
    let document = HtmlDocument::load(page, parse_page_url(page_url)?).await?;
    let services = GuardServices::for_terminal(true, false);
    let report = services.intercept.execute(&document, guard)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        print_table(&document, &report);
    }

    Ok(())
}

fn report_json(report: &ScanReport) -> serde_json::Value {
    let links: Vec<serde_json::Value> = report
        .links
        .iter()
        .map(|link| {
            json!({
                "anchor": link.anchor,
                "href": link.href.as_ref(),
                "hostname": link.hostname,
                "classification": link.classification,
                "guarded": link.classification.is_intercepted(),
            })
        })
        .collect();

    json!({
        "host": report.current_hostname,
        "links": links,
    })
}

fn print_table(document: &HtmlDocument, report: &ScanReport) {
    println!("Page host: {}", display_host(&report.current_hostname));
    println!();
    println!("{:>4}  {:<12} {:<8} HREF", "#", "CLASS", "GUARDED");

    for link in &report.links {
        let text = document
            .anchor(link.anchor)
            .map(|anchor| anchor.text.as_str())
            .filter(|text| !text.is_empty())
            .map(|text| format!("  ({text})"))
            .unwrap_or_default();

        println!(
            "{:>4}  {:<12} {:<8} {}{}",
            link.anchor,
            link.classification.as_str(),
            if link.classification.is_intercepted() { "yes" } else { "no" },
            link.href,
            text
        );
    }

    let skipped = document.html_anchors().len() - report.links.len();
    println!();
    println!(
        "{} guarded, {} internal, {} excluded, {} unparseable, {} skipped (no http href)",
        report.count(Classification::External),
        report.count(Classification::Internal),
        report.count(Classification::Excluded),
        report.count(Classification::Unparseable),
        skipped
    );
}

fn display_host(host: &str) -> &str {
    if host.is_empty() {
        "(none)"
    } else {
        host
    }
}
