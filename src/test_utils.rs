// SPDX-License-Identifier: MPL-2.0
//! Recording fakes for the session capabilities.
//!
//! Every fake shares its state through `Rc`, so a test keeps a clone while
//! the controller owns the boxed original. Surface and overlay calls land in
//! one [`CallLog`] to make ordering assertions possible.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::application::port::{
    MessageFormatter, ModalDialog, RemoteContextResolver, RenderSurface, TransientControls,
};
use crate::application::{SignalSink, TouchPhase};
use crate::domain::{AccountContext, MediaError, PlayableLocation};
use crate::session::{Capabilities, PlaybackController, SessionSettings};

/// A capability call observed by a fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetListener,
    Load(PlayableLocation),
    Start,
    KeepDisplayAwake(bool),
    Bind,
    Show(Duration),
    Hide,
    Modal,
}

/// Ordered record of capability calls.
pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Surface that records calls and lets the test raise its callbacks.
#[derive(Clone)]
pub struct RecordingSurface {
    log: CallLog,
    attached: Rc<Cell<bool>>,
    listener: Rc<RefCell<Option<SignalSink>>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            attached: Rc::new(Cell::new(true)),
            listener: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    /// The sink registered by the controller.
    #[must_use]
    pub fn listener(&self) -> Option<SignalSink> {
        self.listener.borrow().clone()
    }

    /// Forgets the registered sink, as a torn-down surface would.
    pub fn drop_listener(&self) {
        self.listener.borrow_mut().take();
    }

    pub fn emit_ready(&self) -> bool {
        self.listener().is_some_and(|sink| sink.ready())
    }

    pub fn emit_finished(&self) -> bool {
        self.listener().is_some_and(|sink| sink.finished())
    }

    pub fn emit_error(&self, what: i32, extra: i32) -> bool {
        self.listener().is_some_and(|sink| sink.error(what, extra))
    }

    pub fn emit_tap(&self, phase: TouchPhase) -> bool {
        self.listener().is_some_and(|sink| sink.tap(phase))
    }
}

impl RenderSurface for RecordingSurface {
    fn set_listener(&mut self, listener: SignalSink) {
        self.log.borrow_mut().push(Call::SetListener);
        *self.listener.borrow_mut() = Some(listener);
    }

    fn load_source(&mut self, location: &PlayableLocation) {
        self.log.borrow_mut().push(Call::Load(location.clone()));
    }

    fn start(&mut self) {
        self.log.borrow_mut().push(Call::Start);
    }

    fn is_screen_attached(&self) -> bool {
        self.attached.get()
    }

    fn set_keep_display_awake(&mut self, keep_awake: bool) {
        self.log.borrow_mut().push(Call::KeepDisplayAwake(keep_awake));
    }
}

/// Overlay that records calls.
#[derive(Clone)]
pub struct RecordingControls {
    log: CallLog,
}

impl RecordingControls {
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl TransientControls for RecordingControls {
    fn bind_to(&mut self, _surface: &dyn RenderSurface) {
        self.log.borrow_mut().push(Call::Bind);
    }

    fn show(&mut self, window: Duration) {
        self.log.borrow_mut().push(Call::Show(window));
    }

    fn hide(&mut self) {
        self.log.borrow_mut().push(Call::Hide);
    }
}

/// Dialog host that records modals and can press their button.
#[derive(Clone, Default)]
pub struct RecordingDialog {
    log: Option<CallLog>,
    shown: Rc<RefCell<Vec<(String, String)>>>,
    button: Rc<RefCell<Option<SignalSink>>>,
    auto_press: bool,
}

impl RecordingDialog {
    #[must_use]
    pub fn with_log(log: CallLog) -> Self {
        Self {
            log: Some(log),
            ..Self::default()
        }
    }

    /// A dialog whose button is pressed as soon as it shows.
    #[must_use]
    pub fn auto_acknowledging() -> Self {
        Self {
            auto_press: true,
            ..Self::default()
        }
    }

    /// `(message, button label)` of every modal shown so far.
    #[must_use]
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.borrow().clone()
    }

    /// Presses the button of the last modal. False if none was shown.
    pub fn press(&self) -> bool {
        self.button
            .borrow()
            .as_ref()
            .is_some_and(SignalSink::acknowledge)
    }
}

impl ModalDialog for RecordingDialog {
    fn show_acknowledgement(&mut self, message: &str, button_label: &str, on_acknowledge: SignalSink) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(Call::Modal);
        }
        self.shown
            .borrow_mut()
            .push((message.to_string(), button_label.to_string()));
        if self.auto_press {
            on_acknowledge.acknowledge();
        }
        *self.button.borrow_mut() = Some(on_acknowledge);
    }
}

/// Remote resolver that counts lookups.
#[derive(Clone, Default)]
pub struct CountingRemote {
    calls: Rc<Cell<usize>>,
    refuse: bool,
}

impl CountingRemote {
    /// A resolver that never produces a URI.
    #[must_use]
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RemoteContextResolver for CountingRemote {
    fn build_uri(&self, context: &AccountContext, remote_path: &str) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        if self.refuse || context.base_url.is_empty() {
            return None;
        }
        Some(format!("{}{}", context.endpoint(), remote_path))
    }
}

/// Untranslated messages.
#[derive(Clone, Copy, Default)]
pub struct PlainFormatter;

impl MessageFormatter for PlainFormatter {
    fn format_error(&self, error: &MediaError) -> String {
        format!("error {}/{}", error.what, error.extra)
    }

    fn format_nothing_to_play(&self) -> String {
        "nothing to play".to_string()
    }

    fn format_no_account(&self) -> String {
        "no account".to_string()
    }

    fn acknowledge_label(&self) -> String {
        "OK".to_string()
    }
}

/// A full set of fakes wired to one call log.
#[derive(Clone)]
pub struct Harness {
    pub log: CallLog,
    pub surface: RecordingSurface,
    pub controls: RecordingControls,
    pub dialog: RecordingDialog,
    pub remote: CountingRemote,
    pub completions: Rc<Cell<usize>>,
}

impl Default for Harness {
    fn default() -> Self {
        let log = CallLog::default();
        Self {
            surface: RecordingSurface::new(log.clone()),
            controls: RecordingControls::new(log.clone()),
            dialog: RecordingDialog::with_log(log.clone()),
            remote: CountingRemote::default(),
            completions: Rc::new(Cell::new(0)),
            log,
        }
    }
}

impl Harness {
    /// Boxed clones of the fakes.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            surface: Box::new(self.surface.clone()),
            controls: Box::new(self.controls.clone()),
            dialog: Box::new(self.dialog.clone()),
            formatter: Box::new(PlainFormatter),
            remote: Box::new(self.remote.clone()),
        }
    }

    /// A controller whose completion callback bumps `completions`.
    #[must_use]
    pub fn controller(&self, settings: SessionSettings) -> PlaybackController {
        let completions = Rc::clone(&self.completions);
        PlaybackController::new(self.capabilities(), settings)
            .on_complete(move || completions.set(completions.get() + 1))
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    /// How many logged calls match `pred`.
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.log.borrow().iter().filter(|call| pred(call)).count()
    }

    #[must_use]
    pub fn completions(&self) -> usize {
        self.completions.get()
    }
}
