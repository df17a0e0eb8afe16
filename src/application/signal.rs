// SPDX-License-Identifier: MPL-2.0
//! Signals delivered to a session and the queue that carries them.
//!
//! Surface callbacks, overlay taps and dialog buttons all push into one
//! unbounded queue. The session drains it on a single thread, so signals
//! never overlap and no locking is needed on the session side.

use crate::domain::{Failure, MediaError, PlayableLocation};
use tokio::sync::mpsc;

/// Phase of a touch on the video area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Something that happened to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Source resolution finished. Raised by the controller itself when it
    /// opens a request.
    Opened(Result<PlayableLocation, Failure>),
    /// The surface prepared the source.
    Ready,
    /// Playback reached its natural end.
    Finished,
    /// The surface failed to prepare or play the source.
    Error(MediaError),
    /// The user pressed the single button of the error modal.
    Acknowledge,
    /// The user touched the video area.
    Tap(TouchPhase),
}

impl Signal {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Opened(_) => "opened",
            Self::Ready => "ready",
            Self::Finished => "finished",
            Self::Error(_) => "error",
            Self::Acknowledge => "acknowledge",
            Self::Tap(_) => "tap",
        }
    }
}

/// Cloneable sending side of a session's signal queue.
#[derive(Debug, Clone)]
pub struct SignalSink {
    tx: mpsc::UnboundedSender<Signal>,
}

impl SignalSink {
    /// Queues a signal. Returns false once the session is gone.
    pub fn send(&self, signal: Signal) -> bool {
        self.tx.send(signal).is_ok()
    }

    pub fn ready(&self) -> bool {
        self.send(Signal::Ready)
    }

    pub fn finished(&self) -> bool {
        self.send(Signal::Finished)
    }

    pub fn error(&self, what: i32, extra: i32) -> bool {
        self.send(Signal::Error(MediaError::new(what, extra)))
    }

    pub fn acknowledge(&self) -> bool {
        self.send(Signal::Acknowledge)
    }

    pub fn tap(&self, phase: TouchPhase) -> bool {
        self.send(Signal::Tap(phase))
    }
}

/// Receiving side, owned by the session.
#[derive(Debug)]
pub struct SignalQueue {
    rx: mpsc::UnboundedReceiver<Signal>,
}

impl SignalQueue {
    /// Next pending signal, without waiting.
    pub fn try_next(&mut self) -> Option<Signal> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next signal. `None` once every sink is dropped.
    pub async fn next(&mut self) -> Option<Signal> {
        self.rx.recv().await
    }
}

/// Creates a connected sink/queue pair.
#[must_use]
pub fn channel() -> (SignalSink, SignalQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SignalSink { tx }, SignalQueue { rx })
}
