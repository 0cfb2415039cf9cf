pub mod terminal_dialog;

pub use terminal_dialog::{render_prompt, TerminalDialog};
