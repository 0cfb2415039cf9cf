//! Configuration module for Outbound Guard
//!
//! - `root`: Main configuration, file loading and CLI overrides
//! - `guard`: Operator settings for the link guard (exclusions, dialog text/colors)
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod guard;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use guard::{ExcludesInput, GuardSettings};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
