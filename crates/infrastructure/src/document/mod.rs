pub mod html_document;

pub use html_document::{ClickDispatch, HtmlAnchor, HtmlDocument};
