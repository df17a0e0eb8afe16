// SPDX-License-Identifier: MPL-2.0
//! Message formatting port definition.

use crate::domain::{Failure, MediaError};

/// Port for user-facing failure messages.
pub trait MessageFormatter {
    /// Message for a surface-reported error.
    fn format_error(&self, error: &MediaError) -> String;

    /// Message shown when the host handed over no request.
    fn format_nothing_to_play(&self) -> String;

    /// Message shown when a remote file has no account to stream from.
    fn format_no_account(&self) -> String;

    /// Label of the modal's single button.
    fn acknowledge_label(&self) -> String;

    /// Message for any failure.
    fn format_failure(&self, failure: &Failure) -> String {
        match failure {
            Failure::NothingToPlay => self.format_nothing_to_play(),
            Failure::SourceUnavailable => self.format_no_account(),
            Failure::Playback(error) => self.format_error(error),
        }
    }
}

impl<F: MessageFormatter + ?Sized> MessageFormatter for std::rc::Rc<F> {
    fn format_error(&self, error: &MediaError) -> String {
        (**self).format_error(error)
    }

    fn format_nothing_to_play(&self) -> String {
        (**self).format_nothing_to_play()
    }

    fn format_no_account(&self) -> String {
        (**self).format_no_account()
    }

    fn acknowledge_label(&self) -> String {
        (**self).acknowledge_label()
    }
}
