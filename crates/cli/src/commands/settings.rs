use outbound_guard_domain::GuardConfig;

/// Prints the settings payload exactly as the page script consumes it.
pub fn run(guard: &GuardConfig) -> anyhow::Result<()> {
    println!("{}", guard.to_page_settings_json()?);
    Ok(())
}
