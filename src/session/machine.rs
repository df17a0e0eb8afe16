// SPDX-License-Identifier: MPL-2.0
//! Playback state machine.
//!
//! A session moves through:
//! - Idle: nothing requested yet
//! - Loading: the surface is preparing the source
//! - Playing: playback started
//! - Failed: the source could not be played; waiting for acknowledgment
//! - Terminated: the session is over
//!
//! [`transition`] is pure. Every call the session makes on its
//! capabilities is returned as an [`Effect`] for the controller to run.

use super::presenter;
use crate::application::{Signal, TouchPhase};
use crate::config::defaults::{READY_CONTROLS_WINDOW, TAP_CONTROLS_WINDOW};
use crate::domain::{Failure, PlayableLocation};
use std::time::Duration;

/// Current mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Loading,
    Playing,
    Failed(Failure),
    Terminated,
}

impl ControllerState {
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Playing => "playing",
            Self::Failed(_) => "failed",
            Self::Terminated => "terminated",
        }
    }
}

/// A capability call requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Anchor the controls overlay to the surface.
    BindControls,
    KeepDisplayAwake(bool),
    Load(PlayableLocation),
    Start,
    ShowControls(Duration),
    HideControls,
    /// Show the acknowledgment modal for a failure.
    ShowModal(Failure),
    /// Tell the host the session is over.
    Complete,
}

/// Facts about the outside world sampled just before a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub screen_attached: bool,
    pub controls_visible: bool,
    pub keep_display_awake: bool,
}

/// Result of feeding one signal to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ControllerState,
    pub effects: Vec<Effect>,
    /// Whether the signal was consumed. Only touch-begin taps count as
    /// handled; other touch phases pass through to the host.
    pub handled: bool,
}

impl Transition {
    fn to(state: ControllerState, effects: Vec<Effect>) -> Self {
        Self {
            state,
            effects,
            handled: true,
        }
    }

    fn ignored(state: ControllerState) -> Self {
        Self {
            state,
            effects: Vec::new(),
            handled: false,
        }
    }
}

/// Computes the next state and the effects to run.
#[must_use]
pub fn transition(state: &ControllerState, signal: Signal, ctx: &Context) -> Transition {
    use ControllerState::{Failed, Idle, Loading, Playing, Terminated};

    match (*state, signal) {
        (Idle, Signal::Opened(Ok(location))) => {
            let mut effects = vec![Effect::BindControls];
            if ctx.keep_display_awake {
                effects.push(Effect::KeepDisplayAwake(true));
            }
            effects.push(Effect::Load(location));
            Transition::to(Loading, effects)
        }
        (Idle, Signal::Opened(Err(failure))) => fail(failure, ctx),

        (Loading, Signal::Ready) => Transition::to(
            Playing,
            vec![Effect::Start, Effect::ShowControls(READY_CONTROLS_WINDOW)],
        ),

        (Loading | Playing, Signal::Finished) => terminate(ctx),

        (Loading | Playing, Signal::Error(error)) => fail(Failure::Playback(error), ctx),

        (Failed(_), Signal::Acknowledge) => terminate(ctx),

        (current, Signal::Tap(phase)) => Transition {
            state: current,
            effects: if phase == TouchPhase::Down && current == Playing {
                vec![Effect::ShowControls(TAP_CONTROLS_WINDOW)]
            } else {
                Vec::new()
            },
            handled: phase == TouchPhase::Down,
        },

        (current, _) => Transition::ignored(current),
    }
}

fn fail(failure: Failure, ctx: &Context) -> Transition {
    Transition::to(
        ControllerState::Failed(failure),
        presenter::present(&failure, ctx.screen_attached, ctx.controls_visible),
    )
}

fn terminate(ctx: &Context) -> Transition {
    let mut effects = Vec::with_capacity(2);
    if ctx.keep_display_awake {
        effects.push(Effect::KeepDisplayAwake(false));
    }
    effects.push(Effect::Complete);
    Transition::to(ControllerState::Terminated, effects)
}
