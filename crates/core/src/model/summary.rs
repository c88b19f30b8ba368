use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::Level;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("quiz is not complete")]
    NotComplete,

    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("a quiz summary needs at least one question")]
    EmptyQuiz,

    #[error("score ({score}) exceeds question count ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("too many questions for a single quiz: {len}")]
    TooManyQuestions { len: usize },
}

/// Rounded `score / total` as a whole percentage, half away from zero.
///
/// Returns `None` when `total` is zero or `score > total`.
#[must_use]
pub fn round_percent(score: u32, total: u32) -> Option<u8> {
    if total == 0 || score > total {
        return None;
    }
    let score = u64::from(score);
    let total = u64::from(total);
    let percent = (score * 200 + total) / (total * 2);
    u8::try_from(percent).ok()
}

/// Result of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    level: Level,
    score: u32,
    total: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `QuizSummaryError` if the time range is inverted, the quiz was empty, or the
    /// score is larger than the question count.
    pub fn new(
        level: Level,
        score: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if total == 0 {
            return Err(QuizSummaryError::EmptyQuiz);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            level,
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        // Validated in `new`: total > 0 and score <= total.
        round_percent(self.score, self.total).unwrap_or(0)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
