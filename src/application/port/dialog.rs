// SPDX-License-Identifier: MPL-2.0
//! Modal dialog port definition.

use crate::application::signal::SignalSink;

/// Port for a blocking, non-cancellable message box with one button.
pub trait ModalDialog {
    /// Shows `message` with a single `button_label` button.
    ///
    /// Tapping outside must not dismiss it. Pressing the button must push
    /// [`Signal::Acknowledge`](crate::application::Signal::Acknowledge) on
    /// `on_acknowledge`.
    fn show_acknowledgement(&mut self, message: &str, button_label: &str, on_acknowledge: SignalSink);
}
