use async_trait::async_trait;
use outbound_guard_application::ports::NavigationOpener;
use outbound_guard_domain::DomainError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};
use url::Url;

/// Opens links in the user's default browser through the platform opener
/// (`xdg-open`, `open`, `rundll32 url.dll,FileProtocolHandler`).
///
/// The URL is passed as a plain argument and never through a shell.
pub struct SystemBrowserOpener {
    program: String,
    args: Vec<String>,
}

impl SystemBrowserOpener {
    pub fn new() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command("open", Vec::<String>::new())
        } else if cfg!(target_os = "windows") {
            Self::windows()
        } else {
            Self::with_command("xdg-open", Vec::<String>::new())
        }
    }

    /// `cmd /C start` would re-parse `&`, `|` and `^` in the query string.
    pub fn windows() -> Self {
        Self::with_command("rundll32", ["url.dll,FileProtocolHandler"])
    }

    /// Custom opener command; the URL is appended as the last argument.
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for SystemBrowserOpener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NavigationOpener for SystemBrowserOpener {
    async fn open_in_new_context(&self, url: &str) -> Result<(), DomainError> {
        let parsed = Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "{url}: only http and https links can be opened"
            )));
        }

        debug!(program = %self.program, url = %parsed, "Launching browser");

        let status = Command::new(&self.program)
            .args(self.command_args(&parsed))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                DomainError::NavigationFailed(format!("Failed to run {}: {}", self.program, e))
            })?;

        if !status.success() {
            return Err(DomainError::NavigationFailed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        info!(url = %parsed, "Link handed to system browser");
        Ok(())
    }
}

impl SystemBrowserOpener {
    fn command_args<'a>(&'a self, url: &'a Url) -> Vec<&'a str> {
        self.args
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(url.as_str()))
            .collect()
    }
}
