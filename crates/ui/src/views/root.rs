use dioxus::prelude::*;
use phish_core::QuizState;

use crate::context::AppContext;
use crate::views::{CompleteView, HomeView, QuestionView, QuizHandles, ThemeToggle};

/// Owns the quiz signals for the lifetime of the window.
#[component]
pub fn QuizRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = {
        let ctx = ctx.clone();
        use_signal(move || ctx.quiz_controller())
    };
    let theme = use_signal(|| ctx.initial_theme());
    let notice = use_signal(|| None);
    use_context_provider(|| QuizHandles {
        controller,
        theme,
        notice,
    });

    rsx! { QuizScreen {} }
}

#[component]
pub fn QuizScreen() -> Element {
    let handles = use_context::<QuizHandles>();
    let theme = *handles.theme.read();
    let snapshot = handles.controller.read().snapshot();
    let notice = *handles.notice.read();

    rsx! {
        div { class: "app-root theme-{theme}",
            ThemeToggle {}
            if let Some(err) = notice {
                p { class: "notice", role: "alert", "{err.message()}" }
            }
            match snapshot.state {
                QuizState::NoSession => rsx! { HomeView {} },
                QuizState::Complete => rsx! { CompleteView {} },
                QuizState::Answering | QuizState::AwaitingAdvance => rsx! { QuestionView {} },
            }
        }
    }
}
