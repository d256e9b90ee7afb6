use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use deck_core::animation::recipe_for;
use deck_core::model::SlideIndex;
use deck_core::navigation::{Direction, NavSnapshot, Navigator, NavigatorError};

use crate::renderer::Renderer;

/// Fixed delays of the two-phase transition choreography.
///
/// The departing slide gets `outgoing` to slide out before the destination
/// activates; the entrance recipe fires `entrance` after activation; the lock
/// is released `release` after that. The lock therefore covers
/// `outgoing + entrance + release` in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub outgoing: Duration,
    pub entrance: Duration,
    pub release: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            outgoing: Duration::from_millis(150),
            entrance: Duration::from_millis(100),
            release: Duration::from_millis(100),
        }
    }
}

/// Drives the navigator through timed transitions against a [`Renderer`].
///
/// All navigation entry points funnel through [`PresentationService::go_to`],
/// so the navigator's transition lock serializes them: a request arriving
/// while a transition is in flight is dropped, not queued.
pub struct PresentationService<R> {
    navigator: Arc<Mutex<Navigator>>,
    renderer: Arc<R>,
    timing: Timing,
}

impl<R> Clone for PresentationService<R> {
    fn clone(&self) -> Self {
        Self {
            navigator: Arc::clone(&self.navigator),
            renderer: Arc::clone(&self.renderer),
            timing: self.timing,
        }
    }
}

impl<R: Renderer> PresentationService<R> {
    /// # Errors
    ///
    /// Returns `NavigatorError::NoSlides` when `total` is zero.
    pub fn new(total: u32, start: SlideIndex, renderer: R) -> Result<Self, NavigatorError> {
        Ok(Self {
            navigator: Arc::new(Mutex::new(Navigator::starting_at(total, start)?)),
            renderer: Arc::new(renderer),
            timing: Timing::default(),
        })
    }

    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub async fn current(&self) -> SlideIndex {
        self.navigator.lock().await.current()
    }

    pub async fn at_end(&self) -> bool {
        let navigator = self.navigator.lock().await;
        navigator.current().value() >= navigator.total()
    }

    pub async fn snapshot(&self) -> NavSnapshot {
        self.navigator.lock().await.snapshot()
    }

    /// Runs the full transition to `target`. Returns `false` when the request
    /// was dropped (locked, same slide, out of range); the presentation state
    /// is untouched in that case.
    pub async fn go_to(&self, target: SlideIndex) -> bool {
        let transition = {
            let mut navigator = self.navigator.lock().await;
            match navigator.go_to(target) {
                Ok(transition) => transition,
                Err(rejection) => {
                    debug!(?target, ?rejection, "navigation request dropped");
                    return false;
                }
            }
        };
        self.run_transition(transition).await;
        true
    }

    /// Advances one slide; dropped at the last slide or while locked.
    pub async fn next(&self) -> bool {
        let transition = {
            let mut navigator = self.navigator.lock().await;
            match navigator.next() {
                Ok(transition) => transition,
                Err(rejection) => {
                    debug!(?rejection, "next dropped");
                    return false;
                }
            }
        };
        self.run_transition(transition).await;
        true
    }

    /// Goes back one slide; dropped at the first slide or while locked.
    pub async fn previous(&self) -> bool {
        let transition = {
            let mut navigator = self.navigator.lock().await;
            match navigator.previous() {
                Ok(transition) => transition,
                Err(rejection) => {
                    debug!(?rejection, "previous dropped");
                    return false;
                }
            }
        };
        self.run_transition(transition).await;
        true
    }

    /// Back to the first slide.
    pub async fn reset(&self) -> bool {
        self.go_to(SlideIndex::FIRST).await
    }

    /// Re-runs the current slide's entrance recipe (used after a resize).
    /// Skipped while a transition is in flight.
    pub async fn replay_entrance(&self) {
        let current = {
            let navigator = self.navigator.lock().await;
            if navigator.is_locked() {
                return;
            }
            navigator.current()
        };
        if let Some(recipe) = recipe_for(current) {
            self.renderer.play_entrance(current, &recipe);
        }
    }

    async fn run_transition(&self, transition: deck_core::navigation::Transition) {
        let (from, to) = (transition.from(), transition.to());
        debug!(%from, %to, "transition started");

        self.renderer.set_active(from, false);
        if transition.direction() == Direction::Forward {
            self.renderer.mark_leaving(from);
        }
        tokio::time::sleep(self.timing.outgoing).await;

        self.renderer.clear_leaving();
        self.renderer.set_active(to, true);
        let snapshot = self.navigator.lock().await.snapshot();
        self.renderer.refresh_chrome(&snapshot);
        tokio::time::sleep(self.timing.entrance).await;

        if let Some(recipe) = recipe_for(to) {
            self.renderer.play_entrance(to, &recipe);
        }
        tokio::time::sleep(self.timing.release).await;

        self.navigator.lock().await.complete();
        debug!(%to, "transition complete");
    }
}
