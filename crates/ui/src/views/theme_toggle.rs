use dioxus::prelude::*;

use crate::views::QuizHandles;

#[component]
pub fn ThemeToggle() -> Element {
    let handles = use_context::<QuizHandles>();
    let dark = handles.theme.read().is_dark();

    rsx! {
        label { class: "theme-toggle",
            input {
                r#type: "checkbox",
                checked: dark,
                onchange: move |_| handles.toggle_theme(),
            }
            span { "Dark Mode" }
        }
    }
}
