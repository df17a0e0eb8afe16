// SPDX-License-Identifier: MPL-2.0
//! The playback controller: one session, from open to completion.
//!
//! The controller owns the session state and the capabilities. Signals are
//! fed to [`machine::transition`] one at a time and the returned effects are
//! run here, in order. It can be driven synchronously with [`pump`] or by
//! awaiting [`run`] on a single-threaded runtime.
//!
//! [`pump`]: PlaybackController::pump
//! [`run`]: PlaybackController::run

use super::machine::{self, Context, ControllerState, Effect, Transition};
use super::{overlay, presenter, resolver, SessionSettings};
use crate::application::port::{
    MessageFormatter, ModalDialog, RemoteContextResolver, RenderSurface, TransientControls,
};
use crate::application::signal::{self, SignalQueue, SignalSink};
use crate::application::{Signal, TouchPhase};
use crate::diagnostics::{
    DiagnosticsHandle, ErrorEvent, ErrorType, SessionEvent, SourceKind, UserAction, WarningEvent,
    WarningType,
};
use crate::domain::{Failure, PlayableLocation, PlaybackOutcome, PlaybackRequest};

/// Everything a session needs from its host.
pub struct Capabilities {
    pub surface: Box<dyn RenderSurface>,
    pub controls: Box<dyn TransientControls>,
    pub dialog: Box<dyn ModalDialog>,
    pub formatter: Box<dyn MessageFormatter>,
    pub remote: Box<dyn RemoteContextResolver>,
}

/// Drives one preview session.
pub struct PlaybackController {
    state: ControllerState,
    caps: Capabilities,
    settings: SessionSettings,
    overlay: overlay::State,
    /// Kept until termination so a modal can always be acknowledged, even
    /// after the surface released its listener.
    sink: Option<SignalSink>,
    queue: SignalQueue,
    /// An acknowledgment modal is up.
    awaiting_ack: bool,
    outcome: Option<PlaybackOutcome>,
    on_complete: Option<Box<dyn FnOnce()>>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl PlaybackController {
    /// Creates an idle session and registers its listener on the surface.
    #[must_use]
    pub fn new(mut caps: Capabilities, settings: SessionSettings) -> Self {
        let (sink, queue) = signal::channel();
        caps.surface.set_listener(sink.clone());

        Self {
            state: ControllerState::Idle,
            caps,
            settings,
            overlay: overlay::State::default(),
            sink: Some(sink),
            queue,
            awaiting_ack: false,
            outcome: None,
            on_complete: None,
            diagnostics: None,
        }
    }

    /// Reports session activity to a diagnostics collector.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Callback run once, when the session terminates.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// A sink into this session's queue, until the session terminates.
    #[must_use]
    pub fn signal_sink(&self) -> Option<SignalSink> {
        self.sink.clone()
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// How the session ended or failed, once known.
    #[must_use]
    pub fn outcome(&self) -> Option<PlaybackOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_terminated()
    }

    /// Failed with no modal to acknowledge: nothing can move the session
    /// any more, only the host can tear it down.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        matches!(self.state, ControllerState::Failed(_)) && !self.awaiting_ack
    }

    /// Resolves `request` and starts loading it, or fails right away.
    ///
    /// Only the first call has an effect.
    pub fn open(&mut self, request: Option<&PlaybackRequest>) {
        let resolved = resolver::resolve_request(request, self.caps.remote.as_ref());

        if let Some(diagnostics) = &self.diagnostics {
            let source = match &resolved {
                Ok(PlayableLocation::Local(_)) => SourceKind::Local,
                Ok(PlayableLocation::Remote(_)) => SourceKind::Remote,
                Err(_) => SourceKind::Unresolved,
            };
            diagnostics.log_session(SessionEvent::Opened {
                source,
                mime_type: request.and_then(|r| r.file.mime_type.clone()),
            });
        }

        self.dispatch(Signal::Opened(resolved));
    }

    /// Forwards a touch on the video area.
    ///
    /// Returns whether the touch was consumed: only touch-begin is.
    pub fn on_touch(&mut self, phase: TouchPhase) -> bool {
        self.dispatch(Signal::Tap(phase))
    }

    /// Feeds one signal to the session and runs the resulting effects.
    ///
    /// Returns whether the signal was handled.
    pub fn dispatch(&mut self, signal: Signal) -> bool {
        let ctx = self.context();
        let name = signal.name();
        let action = match &signal {
            Signal::Tap(TouchPhase::Down) => Some(UserAction::TapVideo),
            Signal::Acknowledge => Some(UserAction::AcknowledgeError),
            _ => None,
        };
        let is_tap = matches!(signal, Signal::Tap(_));

        let previous = self.state;
        let Transition {
            state,
            effects,
            handled,
        } = machine::transition(&previous, signal, &ctx);
        self.state = state;

        if handled {
            if let Some(action) = action {
                self.log(|d| d.log_action(action));
            }
        } else if !is_tap {
            self.log(|d| {
                d.log_warning(WarningEvent::new(
                    WarningType::IgnoredSignal,
                    format!("{name} ignored while {}", previous.name()),
                ));
            });
        }

        if state != previous {
            self.log(|d| {
                d.log_session(SessionEvent::StateChanged {
                    from: previous.name().to_string(),
                    to: state.name().to_string(),
                });
            });
            if let ControllerState::Failed(failure) = state {
                self.record_failure(failure, ctx.screen_attached);
            }
        }

        for effect in effects {
            self.apply(effect);
        }

        handled
    }

    /// Dispatches every queued signal without waiting.
    ///
    /// Returns how many signals were processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Some(signal) = self.queue.try_next() {
            self.dispatch(signal);
            processed += 1;
        }
        processed
    }

    /// Processes signals until the session terminates or stalls.
    ///
    /// A stalled session (a failure while the screen was detached) returns
    /// its failure without having completed.
    pub async fn run(mut self) -> Option<PlaybackOutcome> {
        while !self.state.is_terminated() && !self.is_stalled() {
            match self.queue.next().await {
                Some(signal) => {
                    self.dispatch(signal);
                }
                None => break,
            }
        }
        self.outcome
    }

    fn context(&self) -> Context {
        Context {
            screen_attached: self.caps.surface.is_screen_attached(),
            controls_visible: self.overlay.is_visible(),
            keep_display_awake: self.settings.keep_display_awake,
        }
    }

    fn record_failure(&mut self, failure: Failure, screen_attached: bool) {
        self.outcome = Some(failure.into());

        self.log(|d| {
            let error_type = match failure {
                Failure::NothingToPlay => ErrorType::NothingToPlay,
                Failure::SourceUnavailable => ErrorType::SourceUnavailable,
                Failure::Playback(_) => ErrorType::PlaybackError,
            };
            let mut event = ErrorEvent::new(error_type, failure.to_string());
            if let Failure::Playback(error) = failure {
                event = event.with_codes(error.what, error.extra);
            }
            d.log_error(event);

            if !screen_attached {
                d.log_warning(WarningEvent::new(
                    WarningType::DetachedFailure,
                    "screen detached, no modal shown",
                ));
            }
        });
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::BindControls => {
                let Capabilities {
                    surface, controls, ..
                } = &mut self.caps;
                controls.bind_to(&**surface);
            }
            Effect::KeepDisplayAwake(keep_awake) => {
                self.caps.surface.set_keep_display_awake(keep_awake);
            }
            Effect::Load(location) => self.caps.surface.load_source(&location),
            Effect::Start => self.caps.surface.start(),
            Effect::ShowControls(window) => {
                self.caps.controls.show(window);
                self.overlay.handle(overlay::Message::Shown(window));
            }
            Effect::HideControls => {
                self.caps.controls.hide();
                self.overlay.handle(overlay::Message::Hidden);
            }
            Effect::ShowModal(failure) => {
                let Some(sink) = self.sink.clone() else {
                    return;
                };
                presenter::show_modal(
                    &failure,
                    self.caps.formatter.as_ref(),
                    self.caps.dialog.as_mut(),
                    sink,
                );
                self.awaiting_ack = true;
            }
            Effect::Complete => {
                self.sink = None;
                self.awaiting_ack = false;
                let outcome = *self.outcome.get_or_insert(PlaybackOutcome::Normal);
                self.log(|d| {
                    d.log_session(SessionEvent::Completed {
                        outcome: outcome.label().to_string(),
                    });
                });
                if let Some(callback) = self.on_complete.take() {
                    callback();
                }
            }
        }
    }

    fn log(&self, f: impl FnOnce(&DiagnosticsHandle)) {
        if let Some(diagnostics) = &self.diagnostics {
            f(diagnostics);
        }
    }
}
