use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use phish_core::model::{Level, QuizSummary};
use phish_core::{Advance, AnswerOutcome, Clock, QuizAction, QuizError, QuizSession, QuizState};
use storage::QuestionRepository;

use super::plan::LevelPlanner;
use super::view::QuizSnapshot;

/// Owns the single quiz session and applies user actions to it.
///
/// With no session the controller is in `QuizState::NoSession`. Every rejected action
/// leaves the state exactly as it was.
pub struct QuizController<R = StdRng> {
    questions: Arc<dyn QuestionRepository>,
    clock: Clock,
    rng: R,
    shuffle: bool,
    session: Option<QuizSession>,
}

impl QuizController<StdRng> {
    /// Controller shuffling from OS entropy.
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>, clock: Clock) -> Self {
        Self::with_rng(questions, clock, StdRng::from_os_rng())
    }

    /// Controller with a reproducible shuffle sequence.
    #[must_use]
    pub fn seeded(questions: Arc<dyn QuestionRepository>, clock: Clock, seed: u64) -> Self {
        Self::with_rng(questions, clock, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizController<R> {
    #[must_use]
    pub fn with_rng(questions: Arc<dyn QuestionRepository>, clock: Clock, rng: R) -> Self {
        Self {
            questions,
            clock,
            rng,
            shuffle: true,
            session: None,
        }
    }

    /// Enable or disable shuffling of each level's pool.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.session
            .as_ref()
            .map_or(QuizState::NoSession, QuizSession::state)
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.session
            .as_ref()
            .map_or_else(QuizSnapshot::idle, QuizSnapshot::from_session)
    }

    /// Number of questions available at `level`.
    #[must_use]
    pub fn level_count(&self, level: Level) -> usize {
        self.questions.count_by_level(level)
    }

    /// Summary of the session once it is complete.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.session.as_ref().and_then(|s| s.summary().ok())
    }

    /// Start a new session at `level`, replacing any current one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyLevel` if the level has no questions; the controller is
    /// left unchanged.
    pub fn select_level(&mut self, level: Level) -> Result<&QuizSession, QuizError> {
        let plan = LevelPlanner::new(self.questions.as_ref())
            .with_shuffle(self.shuffle)
            .build(level, &mut self.rng);

        let session = plan
            .into_session(self.clock.now())
            .inspect_err(|err| warn!(%err, "level selection rejected"))?;

        info!(%level, questions = session.len(), "quiz started");
        let session = self.session.insert(session);
        Ok(&*session)
    }

    /// Answer the current question by option text.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` with no session, while awaiting advance, or once
    /// complete.
    pub fn submit_answer(&mut self, chosen: &str) -> Result<AnswerOutcome, QuizError> {
        let session = self.active_mut(QuizAction::SubmitAnswer)?;
        let index = session.current_index();
        let outcome = session
            .submit_answer(chosen)
            .inspect_err(|err| warn!(%err, "answer rejected"))?;

        debug!(
            index,
            correct = outcome.correct,
            scored = outcome.scored,
            score = session.score(),
            "answer submitted"
        );
        Ok(outcome)
    }

    /// Move to the next question or complete the quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless an answer is awaiting advance.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let now = self.clock.now();
        let session = self.active_mut(QuizAction::Advance)?;
        let step = session
            .advance(now)
            .inspect_err(|err| warn!(%err, "advance rejected"))?;

        match step {
            Advance::Next { index } => debug!(index, "advanced"),
            Advance::Completed => {
                if let Ok(summary) = session.summary() {
                    info!(
                        level = %summary.level(),
                        score = summary.score(),
                        total = summary.total(),
                        percent = summary.percent(),
                        seconds = summary.duration().num_seconds(),
                        "quiz completed"
                    );
                }
            }
        }
        Ok(step)
    }

    /// Go back one question. `Ok(false)` at the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` with no session or once complete.
    pub fn retreat(&mut self) -> Result<bool, QuizError> {
        let session = self.active_mut(QuizAction::Retreat)?;
        let moved = session
            .retreat()
            .inspect_err(|err| warn!(%err, "retreat rejected"))?;
        debug!(moved, index = session.current_index(), "retreat");
        Ok(moved)
    }

    /// Drop the session from any state. Used for both "home" and "restart".
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            debug!("quiz session reset");
        }
    }

    fn active_mut(&mut self, action: QuizAction) -> Result<&mut QuizSession, QuizError> {
        self.session.as_mut().ok_or_else(|| {
            let err = QuizError::InvalidState {
                action,
                state: QuizState::NoSession,
            };
            warn!(%err, "no active session");
            err
        })
    }
}

impl<R> fmt::Debug for QuizController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("questions_len", &self.questions.all().len())
            .field("clock", &self.clock)
            .field("shuffle", &self.shuffle)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
