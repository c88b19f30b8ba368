use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::level::Level;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyPrompt,

    #[error("question must have at least one option")]
    NoOptions,

    #[error("answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },

    #[error("answer {answer:?} matches {count} options")]
    AmbiguousAnswer { answer: String, count: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question from the read-only bank.
///
/// The answer is stored as option text and is guaranteed to match exactly one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    level: Level,
    prompt: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank,
    /// `QuestionError::NoOptions` if `options` is empty, and
    /// `QuestionError::AnswerNotInOptions` / `QuestionError::AmbiguousAnswer` unless the
    /// answer equals exactly one option.
    pub fn new(
        id: QuestionId,
        level: Level,
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let answer = answer.into();

        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        match options.iter().filter(|option| **option == answer).count() {
            0 => return Err(QuestionError::AnswerNotInOptions { answer }),
            1 => {}
            count => return Err(QuestionError::AmbiguousAnswer { answer, count }),
        }

        Ok(Self {
            id,
            level,
            prompt,
            options,
            answer,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Exact value comparison against the stored answer.
    #[must_use]
    pub fn is_correct(&self, chosen: &str) -> bool {
        self.answer == chosen
    }
}
