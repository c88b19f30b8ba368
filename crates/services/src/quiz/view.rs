use phish_core::model::{Level, Question};
use phish_core::{QuizProgress, QuizSession, QuizState};

/// Read-only view of the controller after an operation.
///
/// This is intentionally **not** a UI view-model: no pre-formatted strings, no theme.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSnapshot {
    pub state: QuizState,
    pub level: Option<Level>,
    /// Current question; `None` with no session or once complete.
    pub question: Option<Question>,
    /// 1-based position of the current question, or 0 with no session.
    pub position: usize,
    pub total: usize,
    pub score: u32,
    pub last_answer_correct: Option<bool>,
    /// First-attempt outcome recorded for the current question, if it was answered before.
    pub first_attempt: Option<bool>,
    pub can_retreat: bool,
    pub progress: QuizProgress,
    pub final_percent: Option<u8>,
}

impl QuizSnapshot {
    /// Snapshot for the "no active session" state.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            state: QuizState::NoSession,
            level: None,
            question: None,
            position: 0,
            total: 0,
            score: 0,
            last_answer_correct: None,
            first_attempt: None,
            can_retreat: false,
            progress: QuizProgress::default(),
            final_percent: None,
        }
    }

    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let question = if session.is_complete() {
            None
        } else {
            session.current_question().cloned()
        };

        Self {
            state: session.state(),
            level: Some(session.level()),
            question,
            position: session.current_index() + 1,
            total: session.len(),
            score: session.score(),
            last_answer_correct: session.last_answer_correct(),
            first_attempt: session.current_first_attempt(),
            can_retreat: session.can_retreat(),
            progress: session.progress(),
            final_percent: session.final_percent(),
        }
    }

    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.progress.fraction()
    }
}

impl Default for QuizSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}
