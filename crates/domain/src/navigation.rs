use serde::Serialize;
use std::sync::Arc;

use crate::guard_config::GuardConfig;

/// How a confirmation dialog was closed without confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    EscapeKey,
    Backdrop,
    CloseButton,
    /// The input source went away (closed terminal, detached surface).
    InputClosed,
}

/// The visitor's answer to one confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogChoice {
    Confirmed,
    Cancelled,
    Dismissed(DismissReason),
}

impl DialogChoice {
    pub fn is_confirmed(self) -> bool {
        matches!(self, DialogChoice::Confirmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogIcon {
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton<'a> {
    pub role: ButtonRole,
    pub text: &'a str,
    pub color: &'a str,
}

/// Everything a confirmation surface needs to render the leave-site prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogPrompt {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub confirm_color: String,
    pub cancel_color: String,
    pub icon: DialogIcon,
    pub show_cancel_button: bool,
    /// Cancel is laid out first, confirm last (primary).
    pub reverse_buttons: bool,
}

impl DialogPrompt {
    pub fn from_config(config: &GuardConfig) -> Self {
        Self {
            title: config.title.clone(),
            message: config.message.clone(),
            confirm_text: config.confirm_text.clone(),
            cancel_text: config.cancel_text.clone(),
            confirm_color: config.confirm_color.clone(),
            cancel_color: config.cancel_color.clone(),
            icon: DialogIcon::Warning,
            show_cancel_button: true,
            reverse_buttons: true,
        }
    }

    /// Buttons in the order they should be laid out.
    pub fn buttons(&self) -> Vec<DialogButton<'_>> {
        let confirm = DialogButton {
            role: ButtonRole::Confirm,
            text: &self.confirm_text,
            color: &self.confirm_color,
        };
        let cancel = DialogButton {
            role: ButtonRole::Cancel,
            text: &self.cancel_text,
            color: &self.cancel_color,
        };

        match (self.show_cancel_button, self.reverse_buttons) {
            (false, _) => vec![confirm],
            (true, true) => vec![cancel, confirm],
            (true, false) => vec![confirm, cancel],
        }
    }
}

/// Lifecycle of one intercepted click.
///
/// `Idle → PromptShown → Confirmed → Opened`, or `PromptShown → Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationState {
    Idle,
    PromptShown,
    Confirmed,
    Opened,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    PromptShown,
    Choice(DialogChoice),
    Opened,
}

impl NavigationState {
    /// Next state, or `None` when `event` is not legal from `self`.
    pub fn next(self, event: NavigationEvent) -> Option<NavigationState> {
        use NavigationState::*;

        match (self, event) {
            (Idle, NavigationEvent::PromptShown) => Some(PromptShown),
            (PromptShown, NavigationEvent::Choice(choice)) if choice.is_confirmed() => {
                Some(Confirmed)
            }
            (PromptShown, NavigationEvent::Choice(_)) => Some(Cancelled),
            (Confirmed, NavigationEvent::Opened) => Some(Opened),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, NavigationState::Opened | NavigationState::Cancelled)
    }
}

/// Final result of one pending navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The target was opened in a new browsing context.
    Opened(Arc<str>),
    /// The visitor cancelled or dismissed the dialog; nothing happened.
    Discarded(DialogChoice),
}

impl NavigationOutcome {
    pub fn final_state(&self) -> NavigationState {
        match self {
            NavigationOutcome::Opened(_) => NavigationState::Opened,
            NavigationOutcome::Discarded(_) => NavigationState::Cancelled,
        }
    }
}
