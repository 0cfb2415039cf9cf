pub mod click;
pub mod scan;
pub mod settings;

use anyhow::Context;
use url::Url;

fn parse_page_url(page_url: &str) -> anyhow::Result<Url> {
    Url::parse(page_url).with_context(|| format!("Invalid page URL: {page_url}"))
}
