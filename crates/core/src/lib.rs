#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;
pub mod time;

pub use error::Error;
pub use quiz::{
    Advance, AnswerOutcome, QuizAction, QuizError, QuizPhase, QuizProgress, QuizSession,
    QuizState,
};
pub use time::Clock;
