// SPDX-License-Identifier: MPL-2.0
//! Sessions driven end-to-end by the scripted console surface.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use preview_player::domain::{MediaError, MediaFile, PlaybackOutcome, PlaybackRequest};
use preview_player::i18n::I18n;
use preview_player::infrastructure::{ConsoleSurface, Script, WebDavUriBuilder};
use preview_player::session::{Capabilities, PlaybackController, SessionSettings};
use preview_player::test_utils::{CallLog, PlainFormatter, RecordingControls, RecordingDialog};

fn session(
    script: Script,
    dialog: &RecordingDialog,
    completions: &Rc<Cell<usize>>,
) -> PlaybackController {
    let caps = Capabilities {
        surface: Box::new(ConsoleSurface::new(script, Rc::new(I18n::default()))),
        controls: Box::new(RecordingControls::new(CallLog::default())),
        dialog: Box::new(dialog.clone()),
        formatter: Box::new(PlainFormatter),
        remote: Box::new(WebDavUriBuilder),
    };
    let completions = Rc::clone(completions);
    PlaybackController::new(caps, SessionSettings::default())
        .on_complete(move || completions.set(completions.get() + 1))
}

fn downloaded() -> PlaybackRequest {
    PlaybackRequest::new(MediaFile::downloaded("/a.mp4", "/storage/a.mp4"), None)
}

#[tokio::test(start_paused = true)]
async fn scripted_error_shows_one_modal_and_completes() {
    let dialog = RecordingDialog::auto_acknowledging();
    let completions = Rc::new(Cell::new(0));
    let script = Script {
        fail: Some(MediaError::new(1, -1004)),
        ..Script::default()
    };
    let mut controller = session(script, &dialog, &completions);
    controller.open(Some(&downloaded()));

    let outcome = controller.run().await;

    assert_eq!(
        outcome,
        Some(PlaybackOutcome::PlaybackError {
            what: 1,
            extra: -1004
        })
    );
    assert_eq!(
        dialog.shown(),
        vec![("error 1/-1004".to_string(), "OK".to_string())]
    );
    assert_eq!(completions.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn scripted_success_plays_to_the_end() {
    let dialog = RecordingDialog::default();
    let completions = Rc::new(Cell::new(0));
    let mut controller = session(Script::default(), &dialog, &completions);
    controller.open(Some(&downloaded()));

    assert_eq!(controller.run().await, Some(PlaybackOutcome::Normal));
    assert!(dialog.shown().is_empty());
    assert_eq!(completions.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn detached_failure_returns_without_completing() {
    let dialog = RecordingDialog::default();
    let completions = Rc::new(Cell::new(0));
    let script = Script {
        attached: false,
        ..Script::default()
    };
    let mut controller = session(script, &dialog, &completions);
    controller.open(None);

    let outcome = tokio::time::timeout(Duration::from_secs(3600), controller.run())
        .await
        .expect("detached failure should not hang");

    assert_eq!(outcome, Some(PlaybackOutcome::NothingToPlay));
    assert!(dialog.shown().is_empty());
    assert_eq!(completions.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn detached_remote_without_account_returns() {
    let dialog = RecordingDialog::default();
    let completions = Rc::new(Cell::new(0));
    let script = Script {
        attached: false,
        ..Script::default()
    };
    let mut controller = session(script, &dialog, &completions);
    controller.open(Some(&PlaybackRequest::new(MediaFile::remote("/a.mp4"), None)));

    let outcome = tokio::time::timeout(Duration::from_secs(3600), controller.run())
        .await
        .expect("detached failure should not hang");

    assert_eq!(outcome, Some(PlaybackOutcome::SourceUnavailable));
    assert_eq!(completions.get(), 0);
}
