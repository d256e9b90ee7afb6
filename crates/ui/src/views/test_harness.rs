use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use deck_core::model::{Deck, SlideIndex};
use services::AssessmentService;

use crate::context::{UiApp, build_app_context};
use crate::views::{AssessmentPanel, DeckView};

#[derive(Clone)]
struct TestApp {
    deck: Arc<Deck>,
}

impl UiApp for TestApp {
    fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    fn start_slide(&self) -> SlideIndex {
        SlideIndex::FIRST
    }

    fn autoplay_period(&self) -> Duration {
        Duration::from_secs(8)
    }

    fn assessment(&self) -> AssessmentService {
        AssessmentService::default().with_processing(Duration::ZERO)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Deck,
    Assessment,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Deck => rsx! { DeckView {} },
        ViewKind::Assessment => rsx! { AssessmentPanel {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let app = Arc::new(TestApp {
        deck: Arc::new(Deck::sdv_pitch()),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
