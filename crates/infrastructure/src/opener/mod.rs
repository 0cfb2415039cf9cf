pub mod dry_run;
pub mod system_browser;

pub use dry_run::DryRunOpener;
pub use system_browser::SystemBrowserOpener;
