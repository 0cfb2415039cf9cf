//! Outbound Guard Domain Layer
pub mod config;
pub mod errors;
pub mod guard_config;
pub mod hostname;
pub mod link;
pub mod navigation;
pub mod sanitize;

pub use config::{CliOverrides, Config, ConfigError, ExcludesInput, GuardSettings};
pub use errors::DomainError;
pub use guard_config::{GuardConfig, PageSettings};
pub use hostname::{matches_domain, normalize_excluded_domain, ExcludedHostnames};
pub use link::{classify, Classification, LinkCandidate, HTTP_HREF_PREFIX};
pub use navigation::{
    ButtonRole, DialogButton, DialogChoice, DialogIcon, DialogPrompt, DismissReason,
    NavigationEvent, NavigationOutcome, NavigationState,
};
