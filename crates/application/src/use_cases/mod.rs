pub mod interception;

// Re-export use cases
pub use interception::{InterceptExternalLinksUseCase, ScanReport, ScannedLink};
