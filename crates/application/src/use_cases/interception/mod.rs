pub mod intercept_links;

pub use intercept_links::{InterceptExternalLinksUseCase, ScanReport, ScannedLink};
