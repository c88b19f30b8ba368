use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use phish_core::model::{Level, Question, QuestionId, Theme};
use phish_core::time::fixed_now;
use services::{AppServices, Clock, QuizController};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizHandles, QuizScreen};

#[derive(Clone)]
struct TestApp {
    services: Arc<AppServices>,
    theme: Theme,
}

impl UiApp for TestApp {
    fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }

    fn initial_theme(&self) -> Theme {
        self.theme
    }
}

pub type Setup = fn(&mut QuizController);

/// Exposes the harness's `QuizHandles` to the test body.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    quiz: Rc<RefCell<Option<QuizHandles>>>,
}

impl HarnessHandles {
    pub fn quiz(&self) -> QuizHandles {
        (*self.quiz.borrow()).expect("quiz handles registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    setup: Setup,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let controller = use_signal(|| {
        let mut controller = ctx.quiz_controller().with_shuffle(false);
        (props.setup)(&mut controller);
        controller
    });
    let theme = use_signal(|| ctx.initial_theme());
    let notice = use_signal(|| None);
    let quiz = use_context_provider(|| QuizHandles {
        controller,
        theme,
        notice,
    });
    *props.handles.quiz.borrow_mut() = Some(quiz);

    rsx! { QuizScreen {} }
}

/// Two basic questions, one intermediate, none advanced.
pub fn sample_questions() -> Vec<Question> {
    let question = |id: usize, level: Level, prompt: &str, answer: &str, explanation: &str| {
        Question::new(
            QuestionId::new(id),
            level,
            prompt,
            vec!["Phishing".to_string(), "Legitimate".to_string()],
            answer,
            explanation,
        )
        .expect("valid question")
    };
    vec![
        question(
            0,
            Level::BASIC,
            "An email asks you to confirm your password via a link.",
            "Phishing",
            "Real services never ask for passwords by email.",
        ),
        question(
            1,
            Level::BASIC,
            "IT announces scheduled maintenance on the intranet portal.",
            "Legitimate",
            "Announcements on known internal channels are expected.",
        ),
        question(
            2,
            Level::INTERMEDIATE,
            "A supplier changes its bank details in a reply to an old thread.",
            "Phishing",
            "Payment detail changes must be verified out of band.",
        ),
    ]
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: HarnessHandles,
}

impl ViewHarness {
    pub fn new(theme: Theme, setup: Setup) -> Self {
        let clock = Clock::fixed(fixed_now());
        let services = AppServices::from_storage(Storage::in_memory(sample_questions()), clock)
            .expect("services")
            .with_seed(Some(7));
        let app = Arc::new(TestApp {
            services: Arc::new(services),
            theme,
        });
        let handles = HarnessHandles::default();
        let mut dom = VirtualDom::new_with_props(
            ViewHarnessRoot,
            ViewHarnessProps {
                app,
                setup,
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom, handles }
    }

    /// Run a UI action the way an event handler would, then re-render.
    pub fn act(&mut self, action: impl FnOnce(QuizHandles)) {
        let quiz = self.handles.quiz();
        self.dom.in_runtime(|| action(quiz));
        drive_dom(&mut self.dom);
    }

    pub fn read<T>(&self, read: impl FnOnce(QuizHandles) -> T) -> T {
        let quiz = self.handles.quiz();
        self.dom.in_runtime(|| read(quiz))
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
