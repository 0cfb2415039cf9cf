use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid page location: {0}")]
    InvalidPageLocation(String),

    #[error("Anchor not found: {0}")]
    AnchorNotFound(usize),

    #[error("Failed to open link in a new browsing context: {0}")]
    NavigationFailed(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
