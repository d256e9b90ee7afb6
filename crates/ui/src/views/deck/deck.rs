use std::sync::Arc;
use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;

use deck_core::animation::{Effect, Recipe, recipe_for};
use deck_core::model::{Slide, SlideBody, SlideIndex};

use super::scripts::gesture_bridge_script;
use crate::context::AppContext;
use crate::views::AssessmentPanel;
use crate::vm::{DeckIntent, DeckVm, RenderState};

fn effect_class(effect: Effect) -> &'static str {
    match effect {
        Effect::RiseIn { .. } => "anim-rise-in",
        Effect::SlideInLeft { .. } => "anim-slide-in-left",
        Effect::SlideInRight { .. } => "anim-slide-in-right",
        Effect::ScaleIn { .. } => "anim-scale-in",
        Effect::CountUp => "anim-count-up",
    }
}

fn item_attrs(
    base: &str,
    entrance: Option<Recipe>,
    position: usize,
) -> (String, String) {
    match entrance {
        Some(recipe) => (
            format!("{base} anim {}", effect_class(recipe.effect)),
            format!(
                "animation-delay: {}ms; animation-duration: {}ms",
                recipe.delay_for(position).as_millis(),
                recipe.duration.as_millis()
            ),
        ),
        None => (base.to_string(), String::new()),
    }
}

#[component]
pub fn DeckView() -> Element {
    let ctx = use_context::<AppContext>();
    let deck = ctx.deck();
    let start = ctx.start_slide();
    let period = ctx.autoplay_period();

    let render = use_signal({
        let deck = Arc::clone(&deck);
        move || RenderState::initial(&deck, start)
    });
    let autoplay = use_signal(|| None);
    let autoplay_paused = use_signal(|| false);
    let vm = use_hook({
        let deck = Arc::clone(&deck);
        move || DeckVm::new(render, autoplay, autoplay_paused, &deck, start, period)
    });

    use_effect(move || {
        let _ = eval(&gesture_bridge_script());
    });

    let on_key = {
        let vm = vm.clone();
        use_callback(move |evt: KeyboardEvent| {
            let modifiers = evt.data.modifiers();
            if modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META) {
                if let Key::Character(value) = evt.data.key() {
                    if value.eq_ignore_ascii_case("p") {
                        evt.prevent_default();
                        vm.dispatch(DeckIntent::ToggleAutoPlay);
                    } else if value.eq_ignore_ascii_case("r") {
                        evt.prevent_default();
                        vm.dispatch(DeckIntent::Reset);
                    }
                }
                return;
            }

            if evt.data.code() == Code::Space {
                evt.prevent_default();
                vm.dispatch(DeckIntent::Next);
                return;
            }

            match evt.data.key() {
                Key::ArrowRight => {
                    evt.prevent_default();
                    vm.dispatch(DeckIntent::Next);
                }
                Key::ArrowLeft => {
                    evt.prevent_default();
                    vm.dispatch(DeckIntent::Previous);
                }
                Key::Home => {
                    evt.prevent_default();
                    vm.dispatch(DeckIntent::GoTo(SlideIndex::FIRST));
                }
                Key::End => {
                    evt.prevent_default();
                    vm.dispatch(DeckIntent::GoTo(vm.last_slide()));
                }
                Key::Character(value) => {
                    // Digit keys jump straight to a slide.
                    if let Ok(target) = value.parse::<SlideIndex>() {
                        if target <= vm.last_slide() {
                            evt.prevent_default();
                            vm.dispatch(DeckIntent::GoTo(target));
                        }
                    }
                }
                _ => {}
            }
        })
    };

    let state = render.read();
    let slides: Vec<(SlideIndex, Slide)> = deck
        .iter()
        .map(|(index, slide)| (index, slide.clone()))
        .collect();
    let progress_pct = state.chrome.progress * 100.0;
    let prev_vm = vm.clone();
    let next_vm = vm.clone();
    let pause_vm = vm.clone();
    let resume_vm = vm.clone();
    let replay_vm = vm.clone();

    rsx! {
        div { class: "page deck-page", id: "deck-root", tabindex: "0", onkeydown: on_key,
            div { class: "progress-bar",
                div {
                    class: "progress-fill",
                    id: "progress-fill",
                    style: "width: {progress_pct}%",
                }
            }
            div { class: "slides",
                for (index, slide) in slides {
                    SlideSection {
                        key: "{index}",
                        index,
                        slide,
                        active: state.active == Some(index),
                        leaving: state.leaving == Some(index),
                        entrance: state
                            .entrance
                            .filter(|(at, _)| *at == index)
                            .map(|(_, recipe)| recipe),
                        epoch: state.entrance_epoch,
                    }
                }
            }
            footer { class: "deck-controls",
                button {
                    class: "nav-btn",
                    id: "deck-prev",
                    r#type: "button",
                    disabled: !state.chrome.prev_enabled,
                    onclick: move |_| prev_vm.dispatch(DeckIntent::Previous),
                    "Previous"
                }
                span { class: "slide-counter", id: "slide-counter", "{state.chrome.counter}" }
                button {
                    class: "nav-btn",
                    id: "deck-next",
                    r#type: "button",
                    disabled: !state.chrome.next_enabled,
                    onclick: move |_| next_vm.dispatch(DeckIntent::Next),
                    "Next"
                }
            }
            // Invisible targets for the gesture/visibility/resize bridges.
            button {
                class: "bridge",
                id: "deck-autoplay-pause",
                r#type: "button",
                tabindex: "-1",
                onclick: move |_| pause_vm.dispatch(DeckIntent::PauseAutoPlay),
            }
            button {
                class: "bridge",
                id: "deck-autoplay-resume",
                r#type: "button",
                tabindex: "-1",
                onclick: move |_| resume_vm.dispatch(DeckIntent::ResumeAutoPlay),
            }
            button {
                class: "bridge",
                id: "deck-replay",
                r#type: "button",
                tabindex: "-1",
                onclick: move |_| replay_vm.dispatch(DeckIntent::ReplayEntrance),
            }
        }
    }
}

#[component]
fn SlideSection(
    index: SlideIndex,
    slide: Slide,
    active: bool,
    leaving: bool,
    entrance: Option<Recipe>,
    epoch: u32,
) -> Element {
    let mut class = String::from("slide");
    if active {
        class.push_str(" active");
    }
    if leaving {
        class.push_str(" leaving");
    }
    let item_class = recipe_for(index).map_or("card", |recipe| recipe.target);
    let subtitle = slide.subtitle().map(str::to_string);

    rsx! {
        section { class: "{class}", id: "slide-{index}",
            h2 { class: "slide-title", "{slide.title()}" }
            if let Some(subtitle) = subtitle {
                p { class: "slide-subtitle", "{subtitle}" }
            }
            SlideBodySection {
                index,
                body: slide.body().clone(),
                item_class,
                entrance,
                epoch,
            }
        }
    }
}

#[component]
fn SlideBodySection(
    index: SlideIndex,
    body: SlideBody,
    item_class: &'static str,
    entrance: Option<Recipe>,
    epoch: u32,
) -> Element {
    // Attributes of animated element `i` within the slide, keyed so a
    // replayed recipe remounts it and the CSS animation restarts.
    let item = |i: usize| {
        let (class, style) = item_attrs(item_class, entrance, i);
        (format!("{index}-{i}-{epoch}"), class, style)
    };

    match body {
        SlideBody::Title {
            tagline,
            specialization,
        } => {
            let lines: Vec<_> = [tagline, specialization]
                .into_iter()
                .enumerate()
                .map(|(i, line)| (item(i), line))
                .collect();
            rsx! {
                div { class: "title-block",
                    for ((key, class, style), line) in lines {
                        p { key: "{key}", class: "{class}", style: "{style}", "{line}" }
                    }
                }
            }
        }
        SlideBody::Cards(items) => {
            let items: Vec<_> = items
                .into_iter()
                .enumerate()
                .map(|(i, card)| (item(i), card))
                .collect();
            rsx! {
                div { class: "card-grid",
                    for ((key, class, style), card) in items {
                        div { key: "{key}", class: "{class}", style: "{style}",
                            h3 { "{card.heading}" }
                            p { "{card.detail}" }
                        }
                    }
                }
            }
        }
        SlideBody::Stats(items) => {
            let items: Vec<_> = items
                .into_iter()
                .enumerate()
                .map(|(i, stat)| (item(i), stat))
                .collect();
            rsx! {
                div { class: "stat-row",
                    for ((key, class, style), stat) in items {
                        div { key: "{key}", class: "{class}", style: "{style}",
                            span { class: "stat-number", "{stat.value}{stat.suffix}" }
                            span { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
        SlideBody::Features(rows) => {
            let rows: Vec<_> = rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| (item(i), row))
                .collect();
            rsx! {
                div { class: "feature-list",
                    for ((key, class, style), row) in rows {
                        div { key: "{key}", class: "{class}", style: "{style}",
                            span { class: "feature-name", "{row.name}" }
                            span { class: "feature-description", "{row.description}" }
                        }
                    }
                }
            }
        }
        SlideBody::Roadmap(phases) => {
            let phases: Vec<_> = phases
                .into_iter()
                .enumerate()
                .map(|(i, phase)| (item(i), phase))
                .collect();
            rsx! {
                div { class: "roadmap",
                    for ((key, class, style), phase) in phases {
                        div { key: "{key}", class: "{class}", style: "{style}",
                            span { class: "roadmap-period", "{phase.period}" }
                            span { class: "roadmap-milestone", "{phase.milestone}" }
                        }
                    }
                }
            }
        }
        SlideBody::CallToAction {
            pitch,
            button_label,
        } => {
            let (key, class, style) = item(0);
            rsx! {
                div { key: "{key}", class: "{class}", style: "{style}",
                    p { class: "cta-pitch", "{pitch}" }
                    CtaButton { label: button_label }
                }
                AssessmentPanel {}
            }
        }
    }
}

/// The consultation button briefly acknowledges the click, then restores
/// itself.
#[component]
fn CtaButton(label: String) -> Element {
    let mut busy = use_signal(|| false);
    let shown = if busy() {
        "Thank You!".to_string()
    } else {
        label.clone()
    };

    rsx! {
        button {
            class: "cta-button",
            id: "cta-button",
            r#type: "button",
            disabled: busy(),
            onclick: move |_| {
                busy.set(true);
                spawn(async move {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    busy.set(false);
                });
            },
            "{shown}"
        }
    }
}
