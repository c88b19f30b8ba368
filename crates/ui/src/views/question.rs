use dioxus::prelude::*;

use crate::views::QuizHandles;
use crate::vm::map_question_screen;

#[component]
pub fn QuestionView() -> Element {
    let handles = use_context::<QuizHandles>();
    let snapshot = handles.controller.read().snapshot();
    let Some(vm) = map_question_screen(&snapshot) else {
        return rsx! {};
    };

    rsx! {
        div { class: "page quiz",
            p { class: "quiz-level", "{vm.level_label}" }
            p { class: "quiz-progress", "{vm.position_label}" }
            div { class: "progress-bar",
                div { class: "progress-bar-fill", style: "width: {vm.progress_width}" }
            }
            h2 { class: "question", "{vm.prompt}" }
            match vm.verdict {
                None => rsx! {
                    for (index, option) in vm.options.into_iter().enumerate() {
                        button {
                            key: "{index}",
                            class: "option-button",
                            onclick: {
                                let option = option.clone();
                                move |_| handles.choose(&option)
                            },
                            "{option}"
                        }
                    }
                    if let Some(hint) = vm.revisit_hint {
                        p { class: "view-hint", "{hint}" }
                    }
                    if vm.can_retreat {
                        div { class: "button-row",
                            button {
                                class: "nav-button",
                                onclick: move |_| handles.previous(),
                                "Previous"
                            }
                        }
                    }
                },
                Some(verdict) => rsx! {
                    div { class: "explanation {verdict.class}",
                        h3 { "{verdict.label}" }
                        p { class: "explanation-body", "{verdict.explanation}" }
                    }
                    div { class: "button-row",
                        button {
                            class: "nav-button",
                            disabled: !vm.can_retreat,
                            onclick: move |_| handles.previous(),
                            "Previous"
                        }
                        button {
                            class: "nav-button",
                            onclick: move |_| handles.home(),
                            "Home"
                        }
                        button {
                            class: "nav-button primary",
                            onclick: move |_| handles.next(),
                            "Next"
                        }
                    }
                },
            }
        }
    }
}
