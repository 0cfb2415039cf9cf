//! Outbound Guard Application Layer
//!
//! Ports the core depends on (document, confirmation dialog, opener), the
//! per-click navigation service and the interception use case.
pub mod ports;
pub mod services;
pub mod use_cases;
