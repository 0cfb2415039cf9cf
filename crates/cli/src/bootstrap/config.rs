use outbound_guard_domain::{CliOverrides, Config, GuardConfig};
use tracing::{info, warn};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Resolves the guard snapshot for this run. Runs after logging is up so
/// dropped exclusion entries reach the operator.
pub fn resolve_guard(config: &Config, config_path: Option<&str>) -> GuardConfig {
    for entry in config.guard.rejected_excludes() {
        warn!(entry = %entry, "Ignoring invalid excluded domain");
    }

    let guard = config.guard.resolve();

    info!(
        config_file = config_path.unwrap_or("default"),
        excluded_domains = guard.excluded_domains.len(),
        title = %guard.title,
        "Configuration loaded"
    );

    guard
}
