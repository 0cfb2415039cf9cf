pub mod config;
pub mod logging;

pub use config::{load_config, resolve_guard};
pub use logging::init_logging;
