#![allow(dead_code)]
use async_trait::async_trait;
use outbound_guard_application::ports::NavigationOpener;
use outbound_guard_domain::DomainError;
use outbound_guard_infrastructure::HtmlDocument;
use tokio::sync::RwLock;
use url::Url;

/// Builder for small HTML pages used in tests
pub struct PageBuilder {
    location: String,
    links: Vec<(Option<String>, String)>,
}

impl PageBuilder {
    pub fn at(location: &str) -> Self {
        Self {
            location: location.to_string(),
            links: Vec::new(),
        }
    }

    /// The storefront used across tests: two internal links, one partner
    /// link, one external link and one non-URL.
    pub fn shop() -> Self {
        Self::at("https://shop.test/products")
            .link("https://shop.test/a", "Home")
            .link("https://cdn.shop.test/b", "Image")
            .link("https://partner.com/c", "Partner")
            .link("https://evil.com/d", "Elsewhere")
            .link("not-a-url", "Broken")
    }

    pub fn link(mut self, href: &str, text: &str) -> Self {
        self.links.push((Some(href.to_string()), text.to_string()));
        self
    }

    pub fn bare_anchor(mut self, text: &str) -> Self {
        self.links.push((None, text.to_string()));
        self
    }

    pub fn html(&self) -> String {
        let body: String = self
            .links
            .iter()
            .map(|(href, text)| match href {
                Some(href) => format!("    <li><a href=\"{href}\">{text}</a></li>\n"),
                None => format!("    <li><a name=\"anchor\">{text}</a></li>\n"),
            })
            .collect();

        format!("<!DOCTYPE html>\n<html><body>\n  <ul>\n{body}  </ul>\n</body></html>\n")
    }

    pub fn build(&self) -> HtmlDocument {
        HtmlDocument::parse(&self.html(), Url::parse(&self.location).unwrap())
    }
}

/// Opener that records every URL instead of launching a browser
#[derive(Default)]
pub struct RecordingOpener {
    opened: RwLock<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn opened(&self) -> Vec<String> {
        self.opened.read().await.clone()
    }
}

#[async_trait]
impl NavigationOpener for RecordingOpener {
    async fn open_in_new_context(&self, url: &str) -> Result<(), DomainError> {
        self.opened.write().await.push(url.to_string());
        Ok(())
    }
}
