use dioxus::prelude::*;

use crate::views::QuizHandles;
use crate::vm::map_completion;

#[component]
pub fn CompleteView() -> Element {
    let handles = use_context::<QuizHandles>();
    let vm = {
        let controller = handles.controller.read();
        map_completion(&controller.snapshot(), controller.summary().as_ref())
    };

    rsx! {
        div { class: "page complete",
            h2 { class: "view-title", "Quiz Completed!" }
            p { class: "score-text", "{vm.score_label}" }
            p { class: "score-percent", "{vm.percent_label}" }
            if let Some(duration) = vm.duration_label {
                p { class: "view-hint", "{duration}" }
            }
            button {
                class: "restart-button",
                onclick: move |_| handles.home(),
                "Restart"
            }
        }
    }
}
