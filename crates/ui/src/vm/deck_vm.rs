use std::time::Duration;

use dioxus::prelude::*;

use deck_core::animation::{Recipe, recipe_for};
use deck_core::model::{Deck, SlideIndex};
use deck_core::navigation::{NavSnapshot, Navigator};
use services::{AutoPlayHandle, PresentationService, Renderer, auto_play};

/// User-level navigation requests, dispatched from clicks, keys, gestures
/// and the script bridges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckIntent {
    Next,
    Previous,
    GoTo(SlideIndex),
    Reset,
    ToggleAutoPlay,
    PauseAutoPlay,
    ResumeAutoPlay,
    ReplayEntrance,
}

/// Everything the deck view needs to draw, written by the choreography
/// driver through [`SignalRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    /// The slide currently shown. `None` only inside the transition window.
    pub active: Option<SlideIndex>,
    /// Departing slide tagged for its slide-out animation.
    pub leaving: Option<SlideIndex>,
    pub chrome: NavSnapshot,
    /// Entrance recipe currently playing, if any.
    pub entrance: Option<(SlideIndex, Recipe)>,
    /// Bumped on every entrance dispatch so a repeated recipe re-renders.
    pub entrance_epoch: u32,
}

impl RenderState {
    /// State before the first transition: the start slide is active and its
    /// entrance recipe plays immediately.
    #[must_use]
    pub fn initial(deck: &Deck, start: SlideIndex) -> Self {
        let navigator =
            Navigator::starting_at(deck.total(), start).expect("deck is never empty");
        let current = navigator.current();
        Self {
            active: Some(current),
            leaving: None,
            chrome: navigator.snapshot(),
            entrance: recipe_for(current).map(|recipe| (current, recipe)),
            entrance_epoch: 0,
        }
    }
}

/// [`Renderer`] that writes into a signal the deck view renders from.
#[derive(Clone, Copy)]
pub struct SignalRenderer {
    state: Signal<RenderState>,
}

impl SignalRenderer {
    #[must_use]
    pub fn new(state: Signal<RenderState>) -> Self {
        Self { state }
    }
}

impl Renderer for SignalRenderer {
    fn set_active(&self, slide: SlideIndex, active: bool) {
        let mut state = self.state;
        state.with_mut(|s| {
            if active {
                s.active = Some(slide);
            } else if s.active == Some(slide) {
                s.active = None;
            }
        });
    }

    fn mark_leaving(&self, slide: SlideIndex) {
        let mut state = self.state;
        state.with_mut(|s| s.leaving = Some(slide));
    }

    fn clear_leaving(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.leaving = None);
    }

    fn refresh_chrome(&self, snapshot: &NavSnapshot) {
        let mut state = self.state;
        state.with_mut(|s| s.chrome = snapshot.clone());
    }

    fn play_entrance(&self, slide: SlideIndex, recipe: &Recipe) {
        let mut state = self.state;
        state.with_mut(|s| {
            s.entrance = Some((slide, *recipe));
            s.entrance_epoch = s.entrance_epoch.wrapping_add(1);
        });
    }
}

/// Owns the presentation service and auto-play handle for the deck view.
#[derive(Clone)]
pub struct DeckVm {
    presentation: PresentationService<SignalRenderer>,
    autoplay: Signal<Option<AutoPlayHandle>>,
    /// Remembers across a visibility pause whether auto-play was running.
    autoplay_paused: Signal<bool>,
    last_slide: SlideIndex,
    period: Duration,
}

impl DeckVm {
    #[must_use]
    pub fn new(
        render: Signal<RenderState>,
        autoplay: Signal<Option<AutoPlayHandle>>,
        autoplay_paused: Signal<bool>,
        deck: &Deck,
        start: SlideIndex,
        period: Duration,
    ) -> Self {
        let presentation =
            PresentationService::new(deck.total(), start, SignalRenderer::new(render))
                .expect("deck is never empty");
        Self {
            presentation,
            autoplay,
            autoplay_paused,
            last_slide: SlideIndex::new(deck.total()),
            period,
        }
    }

    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.read().is_some()
    }

    pub fn dispatch(&self, intent: DeckIntent) {
        match intent {
            DeckIntent::Next => self.run_nav(NavRequest::Next),
            DeckIntent::Previous => self.run_nav(NavRequest::Previous),
            DeckIntent::GoTo(target) => self.run_nav(NavRequest::GoTo(target)),
            DeckIntent::Reset => self.run_nav(NavRequest::Reset),
            DeckIntent::ToggleAutoPlay => {
                if self.autoplay_running() {
                    self.stop_autoplay();
                } else {
                    self.start_autoplay();
                }
                let mut paused = self.autoplay_paused;
                paused.set(false);
            }
            DeckIntent::PauseAutoPlay => {
                if self.autoplay_running() {
                    let mut paused = self.autoplay_paused;
                    paused.set(true);
                    self.stop_autoplay();
                }
            }
            DeckIntent::ResumeAutoPlay => {
                let mut paused = self.autoplay_paused;
                if paused() {
                    paused.set(false);
                    self.start_autoplay();
                }
            }
            DeckIntent::ReplayEntrance => {
                let presentation = self.presentation.clone();
                spawn(async move {
                    presentation.replay_entrance().await;
                });
            }
        }
    }

    /// Last slide of the deck, the `End` key target.
    #[must_use]
    pub fn last_slide(&self) -> SlideIndex {
        self.last_slide
    }

    fn run_nav(&self, request: NavRequest) {
        let presentation = self.presentation.clone();
        spawn(async move {
            // Dropped requests are expected (lock window, boundaries); the
            // service already logs them.
            let _ = match request {
                NavRequest::Next => presentation.next().await,
                NavRequest::Previous => presentation.previous().await,
                NavRequest::GoTo(target) => presentation.go_to(target).await,
                NavRequest::Reset => presentation.reset().await,
            };
        });
    }

    fn start_autoplay(&self) {
        let (handle, task) = auto_play(self.presentation.clone(), self.period);
        let mut autoplay = self.autoplay;
        autoplay.set(Some(handle));
        spawn(task);
    }

    fn stop_autoplay(&self) {
        let mut autoplay = self.autoplay;
        if let Some(handle) = autoplay.write().take() {
            handle.stop();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavRequest {
    Next,
    Previous,
    GoTo(SlideIndex),
    Reset,
}
