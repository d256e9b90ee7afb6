use std::sync::{Arc, Mutex};
use std::time::Duration;

use deck_core::animation::Recipe;
use deck_core::model::SlideIndex;
use deck_core::navigation::NavSnapshot;
use services::{PresentationService, Renderer, auto_play};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Active(u32, bool),
    Leaving(u32),
    ClearLeaving,
    Chrome(String),
    Entrance(u32),
}

#[derive(Clone, Default)]
struct RecordingRenderer {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingRenderer {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn set_active(&self, slide: SlideIndex, active: bool) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Active(slide.value(), active));
    }

    fn mark_leaving(&self, slide: SlideIndex) {
        self.events.lock().unwrap().push(Event::Leaving(slide.value()));
    }

    fn clear_leaving(&self) {
        self.events.lock().unwrap().push(Event::ClearLeaving);
    }

    fn refresh_chrome(&self, snapshot: &NavSnapshot) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Chrome(snapshot.counter.clone()));
    }

    fn play_entrance(&self, slide: SlideIndex, _recipe: &Recipe) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Entrance(slide.value()));
    }
}

fn service(
    total: u32,
    start: u32,
) -> (PresentationService<RecordingRenderer>, RecordingRenderer) {
    let renderer = RecordingRenderer::default();
    let service = PresentationService::new(total, SlideIndex::new(start), renderer.clone())
        .expect("at least one slide");
    (service, renderer)
}

#[tokio::test(start_paused = true)]
async fn forward_transition_runs_phases_in_order() {
    let (service, renderer) = service(10, 1);

    assert!(service.go_to(SlideIndex::new(3)).await);

    assert_eq!(
        renderer.events(),
        vec![
            Event::Active(1, false),
            Event::Leaving(1),
            Event::ClearLeaving,
            Event::Active(3, true),
            Event::Chrome("3 / 10".to_string()),
            Event::Entrance(3),
        ]
    );
    assert_eq!(service.current().await, SlideIndex::new(3));

    // Lock is released: the next request goes through.
    assert!(service.go_to(SlideIndex::new(5)).await);
}

#[tokio::test(start_paused = true)]
async fn backward_transition_skips_the_leaving_tag() {
    let (service, renderer) = service(10, 5);

    assert!(service.previous().await);

    let events = renderer.events();
    assert!(!events.iter().any(|e| matches!(e, Event::Leaving(_))));
    assert_eq!(service.current().await, SlideIndex::new(4));
}

#[tokio::test(start_paused = true)]
async fn requests_during_the_lock_window_are_dropped() {
    let (service, _renderer) = service(10, 1);

    let racing = service.clone();
    let (first, second) = tokio::join!(service.go_to(SlideIndex::new(2)), async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        racing.go_to(SlideIndex::new(7)).await
    });

    assert!(first);
    assert!(!second, "re-entrant request must be dropped, not queued");
    assert_eq!(service.current().await, SlideIndex::new(2));
}

#[tokio::test(start_paused = true)]
async fn boundary_requests_leave_state_unchanged() {
    let (service, renderer) = service(3, 3);

    assert!(!service.next().await);
    assert!(!service.go_to(SlideIndex::new(4)).await);
    assert!(!service.go_to(SlideIndex::new(3)).await);

    assert!(renderer.events().is_empty());
    assert_eq!(service.current().await, SlideIndex::new(3));
}

#[tokio::test(start_paused = true)]
async fn replay_reruns_the_current_entrance_when_idle() {
    let (service, renderer) = service(10, 4);

    service.replay_entrance().await;

    assert_eq!(renderer.events(), vec![Event::Entrance(4)]);
}

#[tokio::test(start_paused = true)]
async fn replay_is_skipped_while_a_transition_is_in_flight() {
    let (service, renderer) = service(10, 1);

    let racing = service.clone();
    let (moved, ()) = tokio::join!(service.go_to(SlideIndex::new(2)), async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        racing.replay_entrance().await;
    });

    assert!(moved);
    // Only the transition's own entrance fired; the replay was dropped.
    let entrances: Vec<Event> = renderer
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::Entrance(_)))
        .collect();
    assert_eq!(entrances, vec![Event::Entrance(2)]);
}

#[tokio::test(start_paused = true)]
async fn reset_returns_to_the_first_slide() {
    let (service, _renderer) = service(10, 6);

    assert!(service.reset().await);
    assert_eq!(service.current().await, SlideIndex::FIRST);
}

#[tokio::test(start_paused = true)]
async fn auto_play_advances_until_the_last_slide() {
    let (service, _renderer) = service(3, 1);

    let (_handle, task) = auto_play(service.clone(), Duration::from_secs(1));
    let runner = tokio::spawn(task);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(service.current().await, SlideIndex::new(3));
    assert!(runner.is_finished());
}

#[tokio::test(start_paused = true)]
async fn stop_is_observed_at_the_next_tick_boundary() {
    let (service, _renderer) = service(10, 1);

    let (handle, task) = auto_play(service.clone(), Duration::from_secs(5));
    let runner = tokio::spawn(task);

    tokio::time::sleep(Duration::from_secs(1)).await;
    handle.stop();
    tokio::time::sleep(Duration::from_secs(30)).await;

    assert_eq!(service.current().await, SlideIndex::FIRST);
    assert!(runner.is_finished());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_auto_play() {
    let (service, _renderer) = service(10, 1);

    let (handle, task) = auto_play(service.clone(), Duration::from_secs(5));
    let runner = tokio::spawn(task);

    drop(handle);
    tokio::time::sleep(Duration::from_secs(30)).await;

    assert_eq!(service.current().await, SlideIndex::FIRST);
    assert!(runner.is_finished());
}
