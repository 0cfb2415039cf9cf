pub mod external_link_listener;
pub mod pending_navigation;

pub use external_link_listener::ExternalLinkListener;
pub use pending_navigation::PendingNavigation;
