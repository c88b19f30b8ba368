use std::sync::Arc;

use phish_core::model::Theme;
use services::{AppServices, LevelOverview, QuizController};

pub trait UiApp: Send + Sync {
    fn services(&self) -> Arc<AppServices>;
    fn initial_theme(&self) -> Theme;
}

#[derive(Clone)]
pub struct AppContext {
    services: Arc<AppServices>,
    initial_theme: Theme,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            initial_theme: app.initial_theme(),
        }
    }

    #[must_use]
    pub fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }

    #[must_use]
    pub fn initial_theme(&self) -> Theme {
        self.initial_theme
    }

    #[must_use]
    pub fn level_overview(&self) -> Vec<LevelOverview> {
        self.services.level_overview()
    }

    /// A fresh controller with no session.
    #[must_use]
    pub fn quiz_controller(&self) -> QuizController {
        self.services.quiz_controller()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
