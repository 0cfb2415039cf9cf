#![allow(dead_code)]

use async_trait::async_trait;
use outbound_guard_application::ports::{
    AnchorElement, AnchorId, ClickEvent, ClickListener, ConfirmationDialog, DocumentRoot,
    NavigationOpener,
};
use outbound_guard_application::services::PendingNavigation;
use outbound_guard_domain::{DialogChoice, DialogPrompt, DismissReason, DomainError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::{oneshot, Notify, RwLock};

// ============================================================================
// Fake document
// ============================================================================

/// Result of dispatching one click on the fake document.
pub struct ClickOutcome {
    pub default_prevented: bool,
    pub pending: Vec<PendingNavigation>,
}

pub struct FakeDocument {
    hostname: String,
    anchors: Vec<AnchorElement>,
    listeners: Mutex<HashMap<AnchorId, Vec<Arc<dyn ClickListener>>>>,
}

impl FakeDocument {
    pub fn new(hostname: &str, hrefs: &[&str]) -> Self {
        let anchors = hrefs
            .iter()
            .enumerate()
            .map(|(id, href)| AnchorElement::new(id, Some(*href)))
            .collect();

        Self {
            hostname: hostname.to_string(),
            anchors,
            listeners: Mutex::new(HashMap::new()),
        }
    }

    /// Adds an anchor without an `href` attribute.
    pub fn with_bare_anchor(mut self) -> Self {
        let id = self.anchors.len();
        self.anchors.push(AnchorElement::new(id, None::<String>));
        self
    }

    pub fn listener_count(&self, anchor: AnchorId) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .get(&anchor)
            .map_or(0, Vec::len)
    }

    pub fn guarded_anchors(&self) -> Vec<AnchorId> {
        let mut ids: Vec<AnchorId> = self.listeners.lock().unwrap().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn click(&self, anchor: AnchorId) -> ClickOutcome {
        let listeners = self
            .listeners
            .lock()
            .unwrap()
            .get(&anchor)
            .cloned()
            .unwrap_or_default();

        let event = ClickEvent::new();
        let pending = listeners
            .iter()
            .filter_map(|listener| listener.on_click(&event))
            .collect();

        ClickOutcome {
            default_prevented: event.default_prevented(),
            pending,
        }
    }
}

impl DocumentRoot for FakeDocument {
    fn location_hostname(&self) -> String {
        self.hostname.clone()
    }

    fn anchors(&self) -> Vec<AnchorElement> {
        self.anchors.clone()
    }

    fn add_click_listener(
        &self,
        anchor: AnchorId,
        listener: Arc<dyn ClickListener>,
    ) -> Result<(), DomainError> {
        if anchor >= self.anchors.len() {
            return Err(DomainError::AnchorNotFound(anchor));
        }

        self.listeners
            .lock()
            .unwrap()
            .entry(anchor)
            .or_default()
            .push(listener);
        Ok(())
    }
}

// ============================================================================
// Scripted dialog: answers from a queue
// ============================================================================

pub struct ScriptedDialog {
    choices: Mutex<VecDeque<DialogChoice>>,
    prompts: RwLock<Vec<DialogPrompt>>,
}

impl ScriptedDialog {
    pub fn new(choices: Vec<DialogChoice>) -> Self {
        Self {
            choices: Mutex::new(choices.into()),
            prompts: RwLock::new(Vec::new()),
        }
    }

    pub async fn prompts(&self) -> Vec<DialogPrompt> {
        self.prompts.read().await.clone()
    }
}

#[async_trait]
impl ConfirmationDialog for ScriptedDialog {
    async fn present(&self, prompt: &DialogPrompt) -> DialogChoice {
        self.prompts.write().await.push(prompt.clone());
        self.choices
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(DialogChoice::Dismissed(DismissReason::InputClosed))
    }
}

// ============================================================================
// Manual dialog: every dialog stays open until the test answers it
// ============================================================================

#[derive(Default)]
pub struct ManualDialog {
    open: Mutex<Vec<Option<oneshot::Sender<DialogChoice>>>>,
    opened: Notify,
}

impl ManualDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_count(&self) -> usize {
        self.open.lock().unwrap().len()
    }

    /// Waits until at least `count` dialogs have been presented.
    pub async fn wait_for_open(&self, count: usize) {
        loop {
            let notified = self.opened.notified();
            if self.open_count() >= count {
                return;
            }
            notified.await;
        }
    }

    /// Answers the `index`-th dialog (in presentation order).
    pub fn answer(&self, index: usize, choice: DialogChoice) {
        let sender = self.open.lock().unwrap()[index]
            .take()
            .expect("dialog already answered");
        let _ = sender.send(choice);
    }
}

#[async_trait]
impl ConfirmationDialog for ManualDialog {
    async fn present(&self, _prompt: &DialogPrompt) -> DialogChoice {
        let (tx, rx) = oneshot::channel();
        self.open.lock().unwrap().push(Some(tx));
        self.opened.notify_waiters();

        rx.await
            .unwrap_or(DialogChoice::Dismissed(DismissReason::InputClosed))
    }
}

// ============================================================================
// Recording opener
// ============================================================================

#[derive(Default)]
pub struct RecordingOpener {
    opened: RwLock<Vec<String>>,
    should_fail: RwLock<bool>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn opened(&self) -> Vec<String> {
        self.opened.read().await.clone()
    }
}

#[async_trait]
impl NavigationOpener for RecordingOpener {
    async fn open_in_new_context(&self, url: &str) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::NavigationFailed("mock opener failed".to_string()));
        }

        self.opened.write().await.push(url.to_string());
        Ok(())
    }
}
