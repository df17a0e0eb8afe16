// SPDX-License-Identifier: MPL-2.0
//! End-to-end preview sessions against recording capabilities.

use std::path::PathBuf;

use preview_player::application::TouchPhase;
use preview_player::config::defaults::{READY_CONTROLS_WINDOW, TAP_CONTROLS_WINDOW};
use preview_player::domain::{
    AccountContext, Failure, MediaFile, PlayableLocation, PlaybackOutcome, PlaybackRequest,
};
use preview_player::session::{ControllerState, SessionSettings};
use preview_player::test_utils::{Call, Harness};

fn downloaded() -> PlaybackRequest {
    PlaybackRequest::new(
        MediaFile::downloaded("/Movies/holiday.mp4", "/storage/holiday.mp4"),
        None,
    )
}

#[test]
fn local_file_plays_to_completion() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());

    controller.open(Some(&downloaded()));
    assert_eq!(controller.state(), ControllerState::Loading);

    harness.surface.emit_ready();
    controller.pump();
    assert_eq!(controller.state(), ControllerState::Playing);

    harness.surface.emit_finished();
    controller.pump();

    assert_eq!(
        harness.calls(),
        vec![
            Call::SetListener,
            Call::Bind,
            Call::KeepDisplayAwake(true),
            Call::Load(PlayableLocation::Local(PathBuf::from(
                "/storage/holiday.mp4"
            ))),
            Call::Start,
            Call::Show(READY_CONTROLS_WINDOW),
            Call::KeepDisplayAwake(false),
        ]
    );
    assert_eq!(controller.state(), ControllerState::Terminated);
    assert_eq!(controller.outcome(), Some(PlaybackOutcome::Normal));
    assert_eq!(harness.completions(), 1);
    assert!(harness.dialog.shown().is_empty());
    assert_eq!(harness.remote.calls(), 0);
}

#[test]
fn remote_file_without_account_shows_no_account_modal() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());

    controller.open(Some(&PlaybackRequest::new(
        MediaFile::remote("/Movies/holiday.mp4"),
        None,
    )));

    assert_eq!(
        controller.state(),
        ControllerState::Failed(Failure::SourceUnavailable)
    );
    assert_eq!(harness.count(|c| matches!(c, Call::Load(_))), 0);
    assert_eq!(
        harness.dialog.shown(),
        vec![("no account".to_string(), "OK".to_string())]
    );

    assert!(harness.dialog.press());
    controller.pump();

    assert!(controller.is_complete());
    assert_eq!(controller.outcome(), Some(PlaybackOutcome::SourceUnavailable));
    assert_eq!(harness.completions(), 1);
}

#[test]
fn absent_request_shows_nothing_to_play_modal() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());

    controller.open(None);

    assert_eq!(
        controller.state(),
        ControllerState::Failed(Failure::NothingToPlay)
    );
    assert_eq!(
        harness.dialog.shown(),
        vec![("nothing to play".to_string(), "OK".to_string())]
    );

    harness.dialog.press();
    controller.pump();
    assert_eq!(controller.outcome(), Some(PlaybackOutcome::NothingToPlay));
    assert_eq!(harness.completions(), 1);
}

#[test]
fn remote_file_streams_from_account_endpoint() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());
    let account = AccountContext::new("bob@cloud", "https://cloud.example.org");

    controller.open(Some(&PlaybackRequest::new(
        MediaFile::remote("/Movies/holiday.mp4"),
        Some(account.clone()),
    )));

    let expected = PlayableLocation::Remote(format!("{}/Movies/holiday.mp4", account.endpoint()));
    assert_eq!(harness.count(|c| *c == Call::Load(expected.clone())), 1);
    assert_eq!(harness.remote.calls(), 1);
}

#[test]
fn playback_error_is_acknowledged_once() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());
    controller.open(Some(&downloaded()));
    harness.surface.emit_ready();
    harness.surface.emit_error(1, -1007);
    controller.pump();

    let calls = harness.calls();
    let hide = calls.iter().position(|c| *c == Call::Hide);
    let modal = calls.iter().position(|c| *c == Call::Modal);
    assert!(hide.is_some() && modal.is_some() && hide < modal);

    harness.dialog.press();
    harness.dialog.press();
    controller.pump();
    assert_eq!(harness.completions(), 1);
    assert_eq!(
        controller.outcome(),
        Some(PlaybackOutcome::PlaybackError {
            what: 1,
            extra: -1007
        })
    );
}

#[test]
fn late_signals_after_termination_change_nothing() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());
    controller.open(Some(&downloaded()));
    harness.surface.emit_finished();
    controller.pump();
    let before = harness.calls();

    harness.surface.emit_ready();
    harness.surface.emit_error(100, 0);
    harness.surface.emit_finished();
    controller.pump();

    assert_eq!(harness.calls(), before);
    assert_eq!(controller.state(), ControllerState::Terminated);
    assert_eq!(harness.completions(), 1);
}

#[test]
fn taps_only_reach_overlay_while_playing() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());
    controller.open(Some(&downloaded()));

    controller.on_touch(TouchPhase::Down);
    assert_eq!(harness.count(|c| matches!(c, Call::Show(_))), 0);

    harness.surface.emit_ready();
    controller.pump();
    assert!(controller.on_touch(TouchPhase::Down));
    assert!(!controller.on_touch(TouchPhase::Cancel));

    assert_eq!(harness.count(|c| *c == Call::Show(TAP_CONTROLS_WINDOW)), 1);
    assert!(TAP_CONTROLS_WINDOW < READY_CONTROLS_WINDOW);
}

#[test]
fn taps_through_the_queue_are_processed_in_order() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());
    controller.open(Some(&downloaded()));

    harness.surface.emit_ready();
    harness.surface.emit_tap(TouchPhase::Down);
    harness.surface.emit_finished();
    assert_eq!(controller.pump(), 3);

    let shows: Vec<Call> = harness
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Show(_)))
        .collect();
    assert_eq!(
        shows,
        vec![
            Call::Show(READY_CONTROLS_WINDOW),
            Call::Show(TAP_CONTROLS_WINDOW)
        ]
    );
    assert!(controller.is_complete());
}

#[tokio::test]
async fn run_drives_session_to_acknowledged_failure() {
    let harness = Harness::default();
    let mut controller = harness.controller(SessionSettings::default());
    controller.open(None);
    harness.dialog.press();

    assert_eq!(controller.run().await, Some(PlaybackOutcome::NothingToPlay));
    assert_eq!(harness.completions(), 1);
}
