//! Quiz session state machine.
//!
//! A `QuizSession` only exists while a quiz is active or complete; the "no session"
//! state is represented by its absence (see `QuizState::NoSession`).

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::{Level, Question, QuizSummary, QuizSummaryError, round_percent};

//
// ─── STATES & ERRORS ───────────────────────────────────────────────────────────
//

/// Coarse state of the quiz state machine as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizState {
    NoSession,
    Answering,
    AwaitingAdvance,
    Complete,
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizState::NoSession => "no session is active",
            QuizState::Answering => "waiting for an answer",
            QuizState::AwaitingAdvance => "awaiting advance",
            QuizState::Complete => "the quiz is complete",
        })
    }
}

/// Transition requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizAction {
    SubmitAnswer,
    Advance,
    Retreat,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizAction::SubmitAnswer => "submit an answer",
            QuizAction::Advance => "advance",
            QuizAction::Retreat => "go back",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("level {level} has no questions")]
    EmptyLevel { level: Level },

    #[error("cannot {action} while {state}")]
    InvalidState { action: QuizAction, state: QuizState },
}

impl QuizError {
    fn invalid(action: QuizAction, state: QuizState) -> Self {
        Self::InvalidState { action, state }
    }
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Substate of an active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// The current question is waiting for an answer.
    Answering,
    /// An answer was submitted and its explanation is showing.
    Reviewing { correct: bool },
    /// Advanced past the last question. Terminal until reset.
    Complete,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// False when the question already had a recorded first attempt.
    pub scored: bool,
}

/// Where `advance` landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Completed,
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Display progress through a session as the rational `position / total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizProgress {
    pub position: usize,
    pub total: usize,
}

impl QuizProgress {
    /// Progress in `[0, 1]`; zero for an empty pool.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position.min(self.total) as f64 / self.total as f64
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a level's question pool.
///
/// Questions are stepped through in the order given at construction. Score only grows:
/// each position counts its first submission, and later submissions after a retreat are
/// feedback only.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    level: Level,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    phase: QuizPhase,
    first_attempts: Vec<Option<bool>>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session over an already ordered pool.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyLevel` if `questions` is empty.
    pub fn new(
        level: Level,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyLevel { level });
        }

        let first_attempts = vec![None; questions.len()];
        Ok(Self {
            level,
            questions,
            current: 0,
            score: 0,
            phase: QuizPhase::Answering,
            first_attempts,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question at the current index. Stays on the last question once complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        match self.phase {
            QuizPhase::Answering => QuizState::Answering,
            QuizPhase::Reviewing { .. } => QuizState::AwaitingAdvance,
            QuizPhase::Complete => QuizState::Complete,
        }
    }

    #[must_use]
    pub fn awaiting_advance(&self) -> bool {
        matches!(self.phase, QuizPhase::Reviewing { .. })
    }

    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        match self.phase {
            QuizPhase::Reviewing { correct } => Some(correct),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, QuizPhase::Complete)
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        !self.is_complete() && self.current > 0
    }

    /// Outcome of the first submission at the current position, if any.
    #[must_use]
    pub fn current_first_attempt(&self) -> Option<bool> {
        self.first_attempts.get(self.current).copied().flatten()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Answer the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` when awaiting advance or complete; the session is
    /// left untouched.
    pub fn submit_answer(&mut self, chosen: &str) -> Result<AnswerOutcome, QuizError> {
        if self.phase != QuizPhase::Answering {
            return Err(QuizError::invalid(QuizAction::SubmitAnswer, self.state()));
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(QuizError::invalid(QuizAction::SubmitAnswer, self.state()));
        };

        let correct = question.is_correct(chosen);
        let slot = &mut self.first_attempts[self.current];
        let scored = slot.is_none();
        if scored {
            *slot = Some(correct);
            if correct {
                self.score = self.score.saturating_add(1);
            }
        }

        self.phase = QuizPhase::Reviewing { correct };
        Ok(AnswerOutcome { correct, scored })
    }

    /// Move past the explanation to the next question, or complete the session at the end.
    ///
    /// `at` stamps `completed_at` when this call completes the session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless awaiting advance.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<Advance, QuizError> {
        if !self.awaiting_advance() {
            return Err(QuizError::invalid(QuizAction::Advance, self.state()));
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = QuizPhase::Answering;
            Ok(Advance::Next {
                index: self.current,
            })
        } else {
            self.phase = QuizPhase::Complete;
            self.completed_at = Some(at);
            Ok(Advance::Completed)
        }
    }

    /// Step back one question. Score is never reverted.
    ///
    /// Returns `Ok(false)` without changing anything at the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` once the session is complete.
    pub fn retreat(&mut self) -> Result<bool, QuizError> {
        if self.is_complete() {
            return Err(QuizError::invalid(QuizAction::Retreat, self.state()));
        }
        if self.current == 0 {
            return Ok(false);
        }

        self.current -= 1;
        self.phase = QuizPhase::Answering;
        Ok(true)
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.questions.len();
        let position = match self.phase {
            QuizPhase::Answering => self.current,
            QuizPhase::Reviewing { .. } => self.current + 1,
            QuizPhase::Complete => total,
        };
        QuizProgress { position, total }
    }

    /// Rounded score percentage; `None` until complete.
    #[must_use]
    pub fn final_percent(&self) -> Option<u8> {
        if !self.is_complete() {
            return None;
        }
        let total = u32::try_from(self.questions.len()).ok()?;
        round_percent(self.score, total)
    }

    /// Build the summary for a completed session.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::NotComplete` if the session has not completed.
    pub fn summary(&self) -> Result<QuizSummary, QuizSummaryError> {
        let completed_at = self.completed_at.ok_or(QuizSummaryError::NotComplete)?;
        let total = u32::try_from(self.questions.len()).map_err(|_| {
            QuizSummaryError::TooManyQuestions {
                len: self.questions.len(),
            }
        })?;
        QuizSummary::new(self.level, self.score, total, self.started_at, completed_at)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;
    use crate::time::fixed_now;

    fn question(id: usize, answer: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            Level::BASIC,
            format!("Question {id}"),
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            answer,
            format!("Explanation {id}"),
        )
        .unwrap()
    }

    fn abc_session() -> QuizSession {
        QuizSession::new(
            Level::BASIC,
            vec![question(0, "A"), question(1, "B"), question(2, "C")],
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn empty_pool_is_rejected() {
        let err = QuizSession::new(Level::ADVANCED, Vec::new(), fixed_now()).unwrap_err();
        assert_eq!(
            err,
            QuizError::EmptyLevel {
                level: Level::ADVANCED
            }
        );
    }

    #[test]
    fn fresh_session_starts_answering_at_zero() {
        let session = abc_session();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), QuizState::Answering);
        assert_eq!(session.last_answer_correct(), None);
        assert!(!session.can_retreat());
        assert_eq!(session.progress(), QuizProgress { position: 0, total: 3 });
    }

    #[test]
    fn two_of_three_scores_sixty_seven_percent() {
        let mut session = abc_session();

        assert!(session.submit_answer("A").unwrap().correct);
        assert_eq!(session.advance(fixed_now()), Ok(Advance::Next { index: 1 }));
        assert!(session.submit_answer("B").unwrap().correct);
        assert_eq!(session.advance(fixed_now()), Ok(Advance::Next { index: 2 }));
        assert!(!session.submit_answer("A").unwrap().correct);
        assert_eq!(session.final_percent(), None);
        assert_eq!(session.advance(fixed_now()), Ok(Advance::Completed));

        assert!(session.is_complete());
        assert_eq!(session.score(), 2);
        assert_eq!(session.final_percent(), Some(67));
        assert_eq!(session.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn double_submit_is_invalid_and_keeps_state() {
        let mut session = abc_session();
        session.submit_answer("A").unwrap();
        let before = session.clone();

        let err = session.submit_answer("A").unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidState {
                action: QuizAction::SubmitAnswer,
                state: QuizState::AwaitingAdvance,
            }
        );
        assert_eq!(session, before);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = abc_session();
        let err = session.advance(fixed_now()).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidState {
                action: QuizAction::Advance,
                state: QuizState::Answering
            }
        ));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn retreat_at_first_question_is_noop() {
        let mut session = abc_session();
        let before = session.clone();
        assert_eq!(session.retreat(), Ok(false));
        assert_eq!(session, before);

        session.submit_answer("A").unwrap();
        let before = session.clone();
        assert_eq!(session.retreat(), Ok(false));
        assert_eq!(session, before);
    }

    #[test]
    fn retreat_keeps_score_and_clears_feedback() {
        let mut session = abc_session();
        session.submit_answer("A").unwrap();
        session.advance(fixed_now()).unwrap();
        session.submit_answer("B").unwrap();
        assert_eq!(session.score(), 2);

        let moves: Vec<_> = (0..4).map(|_| session.retreat()).collect();
        assert_eq!(moves, vec![Ok(true), Ok(false), Ok(false), Ok(false)]);
        assert_eq!(session.score(), 2);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.state(), QuizState::Answering);
        assert_eq!(session.last_answer_correct(), None);
        assert_eq!(session.current_first_attempt(), Some(true));
    }

    #[test]
    fn revisited_question_does_not_score_again() {
        let mut session = abc_session();
        session.submit_answer("B").unwrap();
        session.advance(fixed_now()).unwrap();
        assert_eq!(session.retreat(), Ok(true));

        let outcome = session.submit_answer("A").unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome {
                correct: true,
                scored: false
            }
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.last_answer_correct(), Some(true));
        assert_eq!(session.current_first_attempt(), Some(false));
    }

    #[test]
    fn complete_only_leaves_via_reset() {
        let mut session = QuizSession::new(Level::BASIC, vec![question(0, "A")], fixed_now())
            .unwrap();
        session.submit_answer("A").unwrap();
        assert_eq!(session.advance(fixed_now()), Ok(Advance::Completed));

        assert!(session.submit_answer("A").is_err());
        assert!(session.advance(fixed_now()).is_err());
        assert!(session.retreat().is_err());
        assert!(session.is_complete());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_one() {
        let mut session = abc_session();
        let mut last = session.progress().fraction();
        assert!(last.abs() < f64::EPSILON);

        let answers = ["A", "C", "C"];
        for answer in answers {
            session.submit_answer(answer).unwrap();
            let after_submit = session.progress().fraction();
            assert!(after_submit >= last);
            session.advance(fixed_now()).unwrap();
            let after_advance = session.progress().fraction();
            assert!(after_advance >= after_submit);
            last = after_advance;
        }

        assert!((last - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_fraction_of_empty_pool_is_zero() {
        let progress = QuizProgress::default();
        assert!(progress.fraction().abs() < f64::EPSILON);
    }

    #[test]
    fn summary_requires_completion() {
        let mut session = abc_session();
        assert_eq!(session.summary(), Err(QuizSummaryError::NotComplete));

        for answer in ["A", "B", "C"] {
            session.submit_answer(answer).unwrap();
            session.advance(fixed_now()).unwrap();
        }
        let summary = session.summary().unwrap();
        assert_eq!(summary.score(), 3);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.percent(), 100);
    }
}
