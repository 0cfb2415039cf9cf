//! Outbound Guard Infrastructure Layer
//!
//! Adapters for the application ports: a static HTML document, a terminal
//! confirmation dialog and browser openers.
pub mod dialog;
pub mod document;
pub mod opener;

pub use dialog::TerminalDialog;
pub use document::{ClickDispatch, HtmlAnchor, HtmlDocument};
pub use opener::{DryRunOpener, SystemBrowserOpener};
