use std::sync::Arc;
use std::time::Duration;

use deck_core::model::{Deck, SlideIndex};
use services::AssessmentService;

pub trait UiApp: Send + Sync {
    fn deck(&self) -> Arc<Deck>;
    fn start_slide(&self) -> SlideIndex;
    fn autoplay_period(&self) -> Duration;
    fn assessment(&self) -> AssessmentService;
}

#[derive(Clone)]
pub struct AppContext {
    deck: Arc<Deck>,
    start_slide: SlideIndex,
    autoplay_period: Duration,
    assessment: AssessmentService,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck: app.deck(),
            start_slide: app.start_slide(),
            autoplay_period: app.autoplay_period(),
            assessment: app.assessment(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    #[must_use]
    pub fn start_slide(&self) -> SlideIndex {
        self.start_slide
    }

    #[must_use]
    pub fn autoplay_period(&self) -> Duration {
        self.autoplay_period
    }

    #[must_use]
    pub fn assessment(&self) -> AssessmentService {
        self.assessment
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
