//! Recurring auto-advance with an explicit cancellation handle.
//!
//! The loop observes its stop signal only at tick boundaries, so a stop never
//! abandons a transition halfway through and never leaves the navigator
//! locked. The caller decides which executor runs the returned future (a
//! tokio task in headless use, the UI scheduler in the desktop app).

use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::presentation::PresentationService;
use crate::renderer::Renderer;

/// Cancellation handle for a running auto-play loop.
///
/// Dropping the handle stops the loop as well.
pub struct AutoPlayHandle {
    stop: watch::Sender<bool>,
}

impl AutoPlayHandle {
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }
}

/// Builds an auto-play loop advancing every `period`.
///
/// The loop ends when it reaches the last slide or when the handle signals
/// stop. A tick that lands while a transition is already in flight is simply
/// lost, the same way a re-entrant navigation request is.
pub fn auto_play<R: Renderer>(
    presentation: PresentationService<R>,
    period: Duration,
) -> (AutoPlayHandle, impl Future<Output = ()>) {
    let (stop, mut stopped) = watch::channel(false);
    let task = async move {
        debug!(?period, "auto-play started");
        loop {
            tokio::select! {
                () = tokio::time::sleep(period) => {
                    if presentation.at_end().await {
                        debug!("auto-play reached the last slide");
                        break;
                    }
                    let _ = presentation.next().await;
                }
                changed = stopped.changed() => {
                    if changed.is_err() || *stopped.borrow() {
                        debug!("auto-play stopped");
                        break;
                    }
                }
            }
        }
    };
    (AutoPlayHandle { stop }, task)
}

impl Drop for AutoPlayHandle {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}
