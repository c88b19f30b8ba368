use dioxus::prelude::*;
use phish_core::model::{Level, Theme};
use phish_core::QuizError;
use services::QuizController;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyLevel(Level),
    InvalidAction,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_quiz(err: &QuizError) -> Self {
        match err {
            QuizError::EmptyLevel { level } => Self::EmptyLevel(*level),
            QuizError::InvalidState { .. } => Self::InvalidAction,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::EmptyLevel(level) => format!("Level {level} has no questions yet."),
            Self::InvalidAction => "That action is not available right now.".to_string(),
            Self::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Signals shared by every quiz screen.
#[derive(Clone, Copy)]
pub struct QuizHandles {
    pub controller: Signal<QuizController>,
    pub theme: Signal<Theme>,
    pub notice: Signal<Option<ViewError>>,
}

impl QuizHandles {
    fn report<T>(self, result: Result<T, QuizError>) {
        let mut notice = self.notice;
        match result {
            Ok(_) => notice.set(None),
            Err(err) => {
                let view_err = ViewError::from_quiz(&err);
                debug!(?view_err, "showing notice");
                notice.set(Some(view_err));
            }
        }
    }

    pub fn select_level(self, level: Level) {
        let mut controller = self.controller;
        let result = controller.write().select_level(level).map(|_| ());
        self.report(result);
    }

    pub fn choose(self, option: &str) {
        let mut controller = self.controller;
        let result = controller.write().submit_answer(option);
        self.report(result);
    }

    pub fn next(self) {
        let mut controller = self.controller;
        let result = controller.write().advance();
        self.report(result);
    }

    pub fn previous(self) {
        let mut controller = self.controller;
        let result = controller.write().retreat();
        self.report(result);
    }

    pub fn home(self) {
        let mut controller = self.controller;
        controller.write().reset();
        self.report(Ok(()));
    }

    pub fn toggle_theme(self) {
        let mut theme = self.theme;
        let next = theme.with_mut(|theme| {
            theme.toggle();
            *theme
        });
        debug!(theme = %next, "theme toggled");
    }
}
