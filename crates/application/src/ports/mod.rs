pub mod confirmation_dialog;
pub mod document;
pub mod navigation_opener;

pub use confirmation_dialog::ConfirmationDialog;
pub use document::{AnchorElement, AnchorId, ClickEvent, ClickListener, DocumentRoot};
pub use navigation_opener::NavigationOpener;
