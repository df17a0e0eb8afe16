// SPDX-License-Identifier: MPL-2.0
//! Terminal stand-ins for the surface, overlay and dialog.
//!
//! The surface does not decode anything: it follows a [`Script`] and raises
//! the callbacks a real player would, on tokio timers. It must be used from
//! inside a tokio runtime.

use std::io::BufRead;
use std::rc::Rc;
use std::time::Duration;

use crate::application::port::{ModalDialog, RenderSurface, TransientControls};
use crate::application::SignalSink;
use crate::domain::{MediaError, PlayableLocation};
use crate::i18n::I18n;

/// What the console surface pretends happens to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script {
    /// Time from load to ready (or to the scripted error).
    pub load_delay: Duration,
    /// Time from start to the end of playback.
    pub duration: Duration,
    /// Error raised instead of ready.
    pub fail: Option<MediaError>,
    /// Whether the "window" is visible.
    pub attached: bool,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            load_delay: Duration::from_millis(300),
            duration: Duration::from_secs(3),
            fail: None,
            attached: true,
        }
    }
}

/// Scripted render surface.
///
/// The listener is released once the last scripted callback is scheduled.
pub struct ConsoleSurface {
    script: Script,
    i18n: Rc<I18n>,
    listener: Option<SignalSink>,
    keep_awake: bool,
}

impl ConsoleSurface {
    #[must_use]
    pub fn new(script: Script, i18n: Rc<I18n>) -> Self {
        Self {
            script,
            i18n,
            listener: None,
            keep_awake: false,
        }
    }

    #[must_use]
    pub fn keeps_display_awake(&self) -> bool {
        self.keep_awake
    }
}

impl RenderSurface for ConsoleSurface {
    fn set_listener(&mut self, listener: SignalSink) {
        self.listener = Some(listener);
    }

    fn load_source(&mut self, location: &PlayableLocation) {
        let source = location.to_string();
        println!(
            "{}",
            self.i18n
                .tr_with_args("console-loading", &[("source", source.as_str())])
        );

        let fail = self.script.fail;
        let sink = if fail.is_some() {
            self.listener.take()
        } else {
            self.listener.clone()
        };
        let Some(sink) = sink else {
            return;
        };

        let delay = self.script.load_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match fail {
                Some(error) => sink.error(error.what, error.extra),
                None => sink.ready(),
            };
        });
    }

    fn start(&mut self) {
        println!("{}", self.i18n.tr("console-playing"));

        let Some(sink) = self.listener.take() else {
            return;
        };
        let duration = self.script.duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            sink.finished();
        });
    }

    fn is_screen_attached(&self) -> bool {
        self.script.attached
    }

    fn set_keep_display_awake(&mut self, keep_awake: bool) {
        self.keep_awake = keep_awake;
    }
}

/// Overlay that prints its visibility changes.
pub struct ConsoleControls {
    i18n: Rc<I18n>,
}

impl ConsoleControls {
    #[must_use]
    pub fn new(i18n: Rc<I18n>) -> Self {
        Self { i18n }
    }
}

impl TransientControls for ConsoleControls {
    fn bind_to(&mut self, _surface: &dyn RenderSurface) {}

    fn show(&mut self, window: Duration) {
        let seconds = window.as_secs().to_string();
        println!(
            "{}",
            self.i18n
                .tr_with_args("console-controls-shown", &[("seconds", seconds.as_str())])
        );
    }

    fn hide(&mut self) {
        println!("{}", self.i18n.tr("console-controls-hidden"));
    }
}

/// Modal that waits for Enter on stdin.
pub struct ConsoleDialog {
    i18n: Rc<I18n>,
}

impl ConsoleDialog {
    #[must_use]
    pub fn new(i18n: Rc<I18n>) -> Self {
        Self { i18n }
    }
}

impl ModalDialog for ConsoleDialog {
    fn show_acknowledgement(&mut self, message: &str, button_label: &str, on_acknowledge: SignalSink) {
        println!();
        println!("{message}");
        println!("[{button_label}] {}", self.i18n.tr("console-press-enter"));

        tokio::task::spawn_blocking(move || {
            let mut line = String::new();
            // EOF or a read error acknowledges too, there is no other way out.
            let _ = std::io::stdin().lock().read_line(&mut line);
            on_acknowledge.acknowledge();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::signal;
    use crate::application::Signal;
    use std::path::PathBuf;

    fn local() -> PlayableLocation {
        PlayableLocation::Local(PathBuf::from("/tmp/a.mp4"))
    }

    #[tokio::test(start_paused = true)]
    async fn scripted_success_raises_ready_then_finished() {
        let (sink, mut queue) = signal::channel();
        let mut surface = ConsoleSurface::new(Script::default(), Rc::new(I18n::default()));
        surface.set_listener(sink);

        surface.load_source(&local());
        assert_eq!(queue.next().await, Some(Signal::Ready));

        surface.start();
        assert_eq!(queue.next().await, Some(Signal::Finished));
        assert_eq!(queue.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn scripted_failure_raises_error_and_releases_listener() {
        let (sink, mut queue) = signal::channel();
        let script = Script {
            fail: Some(MediaError::new(1, -1004)),
            ..Script::default()
        };
        let mut surface = ConsoleSurface::new(script, Rc::new(I18n::default()));
        surface.set_listener(sink);

        surface.load_source(&local());
        assert_eq!(
            queue.next().await,
            Some(Signal::Error(MediaError::new(1, -1004)))
        );
        assert_eq!(queue.next().await, None);
    }

    #[test]
    fn wake_lock_and_attachment_follow_script() {
        let script = Script {
            attached: false,
            ..Script::default()
        };
        let mut surface = ConsoleSurface::new(script, Rc::new(I18n::default()));
        assert!(!surface.is_screen_attached());
        surface.set_keep_display_awake(true);
        assert!(surface.keeps_display_awake());
    }
}
