use std::time::Duration;

use dioxus::prelude::*;

use deck_core::assessment::{QUESTIONS, max_score};

use crate::context::AppContext;
use crate::vm::{AssessmentPhase, AssessmentVm, Notice};

/// How long a rejection message stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// The embedded SDV readiness self-assessment: five questions, contact
/// fields, and a tiered result panel.
#[component]
pub fn AssessmentPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.assessment();

    let vm = use_signal(AssessmentVm::new);
    let notice = use_signal(|| None::<Notice>);

    let push_notice = use_callback(move |message: String| {
        let mut notice = notice;
        let next = Notice::replacing(notice.peek().as_ref(), message);
        let key = next.key();
        notice.set(Some(next));
        spawn(async move {
            tokio::time::sleep(NOTICE_TTL).await;
            let mut notice = notice;
            let applies = notice.peek().as_ref().is_some_and(|n| n.clears_with(key));
            if applies {
                notice.set(None);
            }
        });
    });

    let on_submit = use_callback(move |()| {
        let mut vm = vm;
        if vm.peek().is_submitting() {
            return;
        }
        let sheet = vm.peek().sheet().clone();
        let contact = vm.peek().contact().clone();
        spawn(async move {
            vm.with_mut(|v| v.set_submitting(true));
            match service.submit(&sheet, &contact).await {
                Ok(evaluation) => vm.with_mut(|v| v.show_results(evaluation)),
                Err(rejection) => {
                    vm.with_mut(|v| v.set_submitting(false));
                    push_notice.call(rejection.to_string());
                }
            }
        });
    });

    let phase = vm.read().phase();
    let shown_notice = notice
        .read()
        .as_ref()
        .map(|n| (n.key(), n.message().to_string()));

    rsx! {
        div { class: "assessment", id: "assessment",
            h3 { class: "assessment-title", "SDV Readiness Assessment" }
            match phase {
                AssessmentPhase::Unanswered => rsx! {
                    AssessmentForm { vm, on_submit }
                },
                AssessmentPhase::ResultsShown => rsx! {
                    AssessmentResults { vm }
                },
            }
            if let Some((key, message)) = shown_notice {
                div { key: "{key}", class: "assessment-notice", "{message}" }
            }
        }
    }
}

#[component]
fn AssessmentForm(vm: Signal<AssessmentVm>, on_submit: Callback<()>) -> Element {
    let current = vm.read();
    let submitting = current.is_submitting();
    let submit_label = if submitting { "Scoring..." } else { "See My Score" };

    rsx! {
        div { class: "assessment-form",
            for question in QUESTIONS {
                div { key: "{question.key}", class: "assessment-question",
                    p { class: "question-prompt", "{question.prompt}" }
                    div { class: "question-options",
                        for opt in question.options {
                            button {
                                key: "{question.key}-{opt.value}",
                                class: if current.selection(question.key) == Some(opt.value) {
                                    "option-btn selected"
                                } else {
                                    "option-btn"
                                },
                                r#type: "button",
                                onclick: {
                                    let mut vm = vm;
                                    move |_| vm.with_mut(|v| v.select(question.key, opt.value))
                                },
                                "{opt.label}"
                            }
                        }
                    }
                }
            }
            div { class: "contact-fields",
                input {
                    class: "contact-input",
                    id: "contact-name",
                    placeholder: "Your name",
                    value: "{current.contact().name}",
                    oninput: {
                        let mut vm = vm;
                        move |evt: FormEvent| vm.with_mut(|v| v.set_name(evt.value()))
                    },
                }
                input {
                    class: "contact-input",
                    id: "contact-email",
                    placeholder: "Work email",
                    value: "{current.contact().email}",
                    oninput: {
                        let mut vm = vm;
                        move |evt: FormEvent| vm.with_mut(|v| v.set_email(evt.value()))
                    },
                }
                input {
                    class: "contact-input",
                    id: "contact-company",
                    placeholder: "Company",
                    value: "{current.contact().company}",
                    oninput: {
                        let mut vm = vm;
                        move |evt: FormEvent| vm.with_mut(|v| v.set_company(evt.value()))
                    },
                }
            }
            button {
                class: "assessment-submit",
                id: "assessment-submit",
                r#type: "button",
                disabled: submitting,
                onclick: move |_| on_submit.call(()),
                "{submit_label}"
            }
        }
    }
}

#[component]
fn AssessmentResults(vm: Signal<AssessmentVm>) -> Element {
    let current = vm.read();
    // The phase machine only enters ResultsShown with a result in hand.
    let Some(evaluation) = current.result().cloned() else {
        return rsx! {};
    };
    let top = max_score();

    rsx! {
        div { class: "assessment-results",
            h4 { class: "result-title", "{evaluation.level.title}" }
            p { class: "result-score", "Score: {evaluation.total} / {top}" }
            p { class: "result-description", "{evaluation.level.description}" }
            ul { class: "result-recommendations",
                for (i, recommendation) in evaluation.level.recommendations.iter().enumerate() {
                    li { key: "{i}", "{recommendation}" }
                }
            }
            button {
                class: "assessment-reset",
                id: "assessment-reset",
                r#type: "button",
                onclick: {
                    let mut vm = vm;
                    move |_| vm.with_mut(AssessmentVm::reset)
                },
                "Start Over"
            }
        }
    }
}
