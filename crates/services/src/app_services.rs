use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use phish_core::model::Level;
use storage::{QuestionRepository, Storage};
use tracing::info;

use crate::Clock;
use crate::error::AppServicesError;
use crate::quiz::QuizController;

/// Question count for one level, for the level picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOverview {
    pub level: Level,
    pub questions: usize,
}

/// Assembles app-facing services around a loaded question bank.
#[derive(Clone)]
pub struct AppServices {
    questions: Arc<dyn QuestionRepository>,
    clock: Clock,
    seed: Option<u64>,
}

impl AppServices {
    /// Build services over the dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled dataset fails to load or is empty.
    pub fn bundled(clock: Clock) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::bundled()?, clock)
    }

    /// Build services over a JSON dataset on disk.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the file cannot be loaded or holds no questions.
    pub fn from_json_file(
        path: impl Into<PathBuf>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::from_json_file(path)?, clock)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::EmptyBank` if the storage has no questions.
    pub fn from_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let total = storage.questions.all().len();
        if total == 0 {
            return Err(AppServicesError::EmptyBank);
        }
        info!(questions = total, "question bank loaded");

        Ok(Self {
            questions: storage.questions,
            clock,
            seed: None,
        })
    }

    /// Fix the shuffle seed so every launch orders questions the same way.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn questions(&self) -> Arc<dyn QuestionRepository> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn level_overview(&self) -> Vec<LevelOverview> {
        Level::ALL
            .iter()
            .map(|level| LevelOverview {
                level: *level,
                questions: self.questions.count_by_level(*level),
            })
            .collect()
    }

    /// A fresh controller with no active session.
    #[must_use]
    pub fn quiz_controller(&self) -> QuizController {
        let questions = Arc::clone(&self.questions);
        match self.seed {
            Some(seed) => QuizController::seeded(questions, self.clock, seed),
            None => QuizController::new(questions, self.clock),
        }
    }
}

impl fmt::Debug for AppServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppServices")
            .field("questions_len", &self.questions.all().len())
            .field("clock", &self.clock)
            .field("seed", &self.seed)
            .finish()
    }
}
