use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use phish_core::model::{Level, Question};
use phish_core::{QuizError, QuizSession};
use storage::QuestionRepository;

/// Ordered question pool for one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPlan {
    pub level: Level,
    pub questions: Vec<Question>,
}

impl LevelPlan {
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Turn the plan into a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyLevel` when the plan has no questions.
    pub fn into_session(self, started_at: DateTime<Utc>) -> Result<QuizSession, QuizError> {
        QuizSession::new(self.level, self.questions, started_at)
    }
}

/// Picks a level's questions out of the dataset and orders them.
pub struct LevelPlanner<'a> {
    dataset: &'a dyn QuestionRepository,
    shuffle: bool,
}

impl<'a> LevelPlanner<'a> {
    #[must_use]
    pub fn new(dataset: &'a dyn QuestionRepository) -> Self {
        Self {
            dataset,
            shuffle: true,
        }
    }

    /// Enable or disable shuffling. Without it, dataset order is kept.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Filter the dataset to `level` and apply a uniform Fisher–Yates shuffle from `rng`.
    pub fn build<R: Rng + ?Sized>(self, level: Level, rng: &mut R) -> LevelPlan {
        let mut questions = self.dataset.by_level(level);

        if self.shuffle {
            questions.as_mut_slice().shuffle(rng);
        }

        LevelPlan { level, questions }
    }
}

/// Start a session for `level` with a uniformly shuffled pool.
///
/// # Errors
///
/// Returns `QuizError::EmptyLevel` if no question in `dataset` has that level.
pub fn select_level<R: Rng + ?Sized>(
    level: Level,
    dataset: &dyn QuestionRepository,
    rng: &mut R,
    started_at: DateTime<Utc>,
) -> Result<QuizSession, QuizError> {
    LevelPlanner::new(dataset)
        .build(level, rng)
        .into_session(started_at)
}
