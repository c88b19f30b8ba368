mod ids;
mod level;
mod question;
mod summary;
mod theme;

pub use ids::QuestionId;
pub use level::{Level, LevelError};
pub use question::{Question, QuestionError};
pub use summary::{QuizSummary, QuizSummaryError, round_percent};
pub use theme::{Theme, ThemeParseError};
