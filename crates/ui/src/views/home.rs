use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::QuizHandles;
use crate::vm::map_level_cards;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let handles = use_context::<QuizHandles>();
    let cards = map_level_cards(&ctx.level_overview());

    rsx! {
        div { class: "page home",
            h1 { class: "app-name", "BawahTech PhishShield" }
            p { class: "description",
                "Test how well you can spot phishing emails, links and messages."
            }
            h2 { class: "view-title", "Select Difficulty Level" }
            for card in cards {
                button {
                    key: "{card.level}",
                    class: "level-button",
                    disabled: !card.available,
                    onclick: move |_| handles.select_level(card.level),
                    span { class: "level-button-title", "{card.title}" }
                    span { class: "level-button-sub", "{card.subtitle}" }
                    span { class: "level-button-count", "{card.count_label}" }
                }
            }
        }
    }
}
