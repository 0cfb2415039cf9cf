use futures::poll;
use outbound_guard_application::services::PendingNavigation;
use outbound_guard_application::use_cases::InterceptExternalLinksUseCase;
use outbound_guard_domain::{
    DialogChoice, DialogPrompt, DomainError, GuardConfig, NavigationOutcome, NavigationState,
};
use std::sync::Arc;

mod helpers;
use helpers::{FakeDocument, ManualDialog, RecordingOpener, ScriptedDialog};

fn pending(
    href: &str,
    dialog: Arc<ScriptedDialog>,
    opener: Arc<RecordingOpener>,
) -> PendingNavigation {
    PendingNavigation::new(
        Arc::from(href),
        Arc::new(DialogPrompt::from_config(&GuardConfig::default())),
        dialog,
        opener,
    )
}

#[tokio::test]
async fn test_new_pending_navigation_starts_idle() {
    let nav = pending(
        "https://evil.com",
        Arc::new(ScriptedDialog::new(vec![])),
        Arc::new(RecordingOpener::new()),
    );

    assert_eq!(nav.state(), NavigationState::Idle);
    assert_eq!(nav.href(), "https://evil.com");
}

#[tokio::test]
async fn test_confirm_ends_in_opened_state() {
    let opener = Arc::new(RecordingOpener::new());
    let nav = pending(
        "https://evil.com",
        Arc::new(ScriptedDialog::new(vec![DialogChoice::Confirmed])),
        opener.clone(),
    );

    let outcome = nav.resolve().await.unwrap();

    assert_eq!(outcome.final_state(), NavigationState::Opened);
    assert_eq!(opener.opened().await, vec!["https://evil.com".to_string()]);
}

#[tokio::test]
async fn test_exhausted_dialog_counts_as_dismissal() {
    let opener = Arc::new(RecordingOpener::new());
    let nav = pending(
        "https://evil.com",
        Arc::new(ScriptedDialog::new(vec![])),
        opener.clone(),
    );

    let outcome = nav.resolve().await.unwrap();

    assert_eq!(outcome.final_state(), NavigationState::Cancelled);
    assert!(opener.opened().await.is_empty());
}

#[tokio::test]
async fn test_opener_failure_is_reported() {
    let opener = Arc::new(RecordingOpener::new());
    opener.set_should_fail(true).await;
    let nav = pending(
        "https://evil.com",
        Arc::new(ScriptedDialog::new(vec![DialogChoice::Confirmed])),
        opener,
    );

    let result = nav.resolve().await;

    assert!(matches!(result, Err(DomainError::NavigationFailed(_))));
}

// ============================================================================
// Overlapping clicks
// ============================================================================

fn guarded_page(dialog: Arc<ManualDialog>, opener: Arc<RecordingOpener>) -> FakeDocument {
    let document = FakeDocument::new(
        "shop.test",
        &["https://first.example/one", "https://second.example/two"],
    );
    InterceptExternalLinksUseCase::new(dialog, opener)
        .execute(&document, &GuardConfig::default())
        .unwrap();
    document
}

#[tokio::test]
async fn test_rapid_clicks_each_open_their_own_href() {
    // Arrange
    let dialog = Arc::new(ManualDialog::new());
    let opener = Arc::new(RecordingOpener::new());
    let document = guarded_page(dialog.clone(), opener.clone());

    // Act - both dialogs are open before either is answered
    let first = document.click(0).pending.pop().unwrap();
    let second = document.click(1).pending.pop().unwrap();
    let first_task = tokio::spawn(first.resolve());
    let second_task = tokio::spawn(second.resolve());
    dialog.wait_for_open(2).await;

    // Answer in reverse order
    dialog.answer(1, DialogChoice::Confirmed);
    dialog.answer(0, DialogChoice::Confirmed);

    // Assert
    let first_outcome = first_task.await.unwrap().unwrap();
    let second_outcome = second_task.await.unwrap().unwrap();
    assert_eq!(
        first_outcome,
        NavigationOutcome::Opened(Arc::from("https://first.example/one"))
    );
    assert_eq!(
        second_outcome,
        NavigationOutcome::Opened(Arc::from("https://second.example/two"))
    );

    let mut opened = opener.opened().await;
    opened.sort();
    assert_eq!(
        opened,
        vec![
            "https://first.example/one".to_string(),
            "https://second.example/two".to_string()
        ]
    );
}

#[tokio::test]
async fn test_overlapping_clicks_resolve_independently() {
    // Arrange
    let dialog = Arc::new(ManualDialog::new());
    let opener = Arc::new(RecordingOpener::new());
    let document = guarded_page(dialog.clone(), opener.clone());

    let mut first = Box::pin(document.click(0).pending.pop().unwrap().resolve());
    let mut second = Box::pin(document.click(1).pending.pop().unwrap().resolve());

    // Act - poll once each so dialog 0 belongs to the first click, dialog 1 to the second
    assert!(poll!(&mut first).is_pending());
    assert!(poll!(&mut second).is_pending());
    assert_eq!(dialog.open_count(), 2);

    dialog.answer(1, DialogChoice::Cancelled);
    let second_outcome = second.await.unwrap();
    assert!(opener.opened().await.is_empty());

    dialog.answer(0, DialogChoice::Confirmed);
    let first_outcome = first.await.unwrap();

    // Assert
    assert_eq!(second_outcome, NavigationOutcome::Discarded(DialogChoice::Cancelled));
    assert_eq!(
        first_outcome,
        NavigationOutcome::Opened(Arc::from("https://first.example/one"))
    );
    assert_eq!(opener.opened().await, vec!["https://first.example/one".to_string()]);
}
