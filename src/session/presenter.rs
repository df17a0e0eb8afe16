// SPDX-License-Identifier: MPL-2.0
//! Error presentation: what a failure looks like to the user.
//!
//! Deciding (which effects to emit) is pure and lives in [`present`].
//! Rendering the decided modal goes through the injected formatter and
//! dialog in [`show_modal`].

use super::machine::Effect;
use crate::application::port::{MessageFormatter, ModalDialog};
use crate::application::SignalSink;
use crate::domain::Failure;

/// Effects for entering the failed state.
///
/// Hides the controls if they are up, and asks for a modal only when the
/// surface is attached to a visible window. A detached screen gets nothing:
/// no dialog is queued for later.
#[must_use]
pub fn present(failure: &Failure, screen_attached: bool, controls_visible: bool) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);
    if controls_visible {
        effects.push(Effect::HideControls);
    }
    if screen_attached {
        effects.push(Effect::ShowModal(*failure));
    }
    effects
}

/// Shows the acknowledgment modal for `failure`.
///
/// Returns the message that was shown.
pub fn show_modal(
    failure: &Failure,
    formatter: &dyn MessageFormatter,
    dialog: &mut dyn ModalDialog,
    on_acknowledge: SignalSink,
) -> String {
    let message = formatter.format_failure(failure);
    let button = formatter.acknowledge_label();
    dialog.show_acknowledgement(&message, &button, on_acknowledge);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::signal;
    use crate::domain::MediaError;
    use crate::test_utils::{PlainFormatter, RecordingDialog};

    #[test]
    fn attached_and_visible_hides_then_shows_modal() {
        let failure = Failure::Playback(MediaError::new(1, -1004));
        let effects = present(&failure, true, true);
        assert_eq!(
            effects,
            vec![Effect::HideControls, Effect::ShowModal(failure)]
        );
    }

    #[test]
    fn hidden_controls_are_not_hidden_again() {
        let effects = present(&Failure::SourceUnavailable, true, false);
        assert_eq!(effects, vec![Effect::ShowModal(Failure::SourceUnavailable)]);
    }

    #[test]
    fn detached_screen_gets_no_modal() {
        let effects = present(&Failure::NothingToPlay, false, true);
        assert_eq!(effects, vec![Effect::HideControls]);

        assert!(present(&Failure::NothingToPlay, false, false).is_empty());
    }

    #[test]
    fn show_modal_uses_failure_specific_message() {
        let (sink, _queue) = signal::channel();
        let dialog = RecordingDialog::default();
        let mut host = dialog.clone();

        let message = show_modal(
            &Failure::NothingToPlay,
            &PlainFormatter,
            &mut host,
            sink,
        );

        assert_eq!(message, "nothing to play");
        assert_eq!(
            dialog.shown(),
            vec![("nothing to play".to_string(), "OK".to_string())]
        );
    }
}
